//! Indexable base: lane access shared by every array type

use crate::error::{Error, Result};
use crate::numeric::Lane;
use std::fmt::Debug;

/// Element access and iteration over a fixed number of contiguous lanes
///
/// Implementors store their lanes contiguously; `as_slice` exposes them in
/// lane order. Everything else in this trait is derived from `coeff` and
/// `from_fn`.
pub trait ArrayBase: Copy + Debug + Send + Sync + 'static {
    /// Lane type, a leaf scalar or a nested array
    type Value: Lane;

    /// Number of lanes
    const SIZE: usize;

    /// Lane `i` without a range check beyond the slice bounds
    fn coeff(&self, i: usize) -> &Self::Value;
    fn coeff_mut(&mut self, i: usize) -> &mut Self::Value;

    /// Build an array lane by lane
    fn from_fn<F: FnMut(usize) -> Self::Value>(f: F) -> Self;

    fn as_slice(&self) -> &[Self::Value];
    fn as_mut_slice(&mut self) -> &mut [Self::Value];

    #[inline]
    fn size(&self) -> usize {
        Self::SIZE
    }

    /// Checked lane access
    fn get(&self, i: usize) -> Result<&Self::Value> {
        if i < Self::SIZE {
            Ok(self.coeff(i))
        } else {
            Err(Error::out_of_bounds(i, Self::SIZE))
        }
    }

    fn get_mut(&mut self, i: usize) -> Result<&mut Self::Value> {
        if i < Self::SIZE {
            Ok(self.coeff_mut(i))
        } else {
            Err(Error::out_of_bounds(i, Self::SIZE))
        }
    }

    fn iter(&self) -> std::slice::Iter<'_, Self::Value> {
        self.as_slice().iter()
    }

    fn iter_mut(&mut self) -> std::slice::IterMut<'_, Self::Value> {
        self.as_mut_slice().iter_mut()
    }

    #[inline]
    fn x(&self) -> Self::Value {
        const { assert!(Self::SIZE >= 1, "x() requires at least one lane") };
        *self.coeff(0)
    }

    #[inline]
    fn y(&self) -> Self::Value {
        const { assert!(Self::SIZE >= 2, "y() requires at least two lanes") };
        *self.coeff(1)
    }

    #[inline]
    fn z(&self) -> Self::Value {
        const { assert!(Self::SIZE >= 3, "z() requires at least three lanes") };
        *self.coeff(2)
    }

    #[inline]
    fn w(&self) -> Self::Value {
        const { assert!(Self::SIZE >= 4, "w() requires at least four lanes") };
        *self.coeff(3)
    }

    fn x_mut(&mut self) -> &mut Self::Value {
        const { assert!(Self::SIZE >= 1, "x_mut() requires at least one lane") };
        self.coeff_mut(0)
    }

    fn y_mut(&mut self) -> &mut Self::Value {
        const { assert!(Self::SIZE >= 2, "y_mut() requires at least two lanes") };
        self.coeff_mut(1)
    }

    fn z_mut(&mut self) -> &mut Self::Value {
        const { assert!(Self::SIZE >= 3, "z_mut() requires at least three lanes") };
        self.coeff_mut(2)
    }

    fn w_mut(&mut self) -> &mut Self::Value {
        const { assert!(Self::SIZE >= 4, "w_mut() requires at least four lanes") };
        self.coeff_mut(3)
    }

    /// Static arrays only "resize" to their own width
    fn resize(&self, size: usize) -> Result<()> {
        if size == Self::SIZE {
            Ok(())
        } else {
            log::debug!("rejecting resize of a {}-lane array to {size}", Self::SIZE);
            Err(Error::shape_mismatch(size, Self::SIZE))
        }
    }

    /// Apply a function to every lane
    fn map_lanes<F: FnMut(Self::Value) -> Self::Value>(&self, mut f: F) -> Self {
        Self::from_fn(|i| f(*self.coeff(i)))
    }
}
