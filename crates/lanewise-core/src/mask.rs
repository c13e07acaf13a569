//! Per-lane boolean masks
//!
//! All arrays of width `N` share the mask type [`Mask<N>`], so combining a
//! mask with an array of a different width is a type error.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// Operations every mask type supports
pub trait MaskOps:
    Copy
    + fmt::Debug
    + PartialEq
    + Send
    + Sync
    + 'static
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
{
    const SIZE: usize;

    fn splat(value: bool) -> Self;
    fn from_fn<F: FnMut(usize) -> bool>(f: F) -> Self;
    fn test(&self, lane: usize) -> bool;
    fn set(&mut self, lane: usize, value: bool);

    fn all(&self) -> bool {
        (0..Self::SIZE).all(|i| self.test(i))
    }

    fn any(&self) -> bool {
        (0..Self::SIZE).any(|i| self.test(i))
    }

    fn none(&self) -> bool {
        !self.any()
    }

    /// Number of set lanes
    fn count(&self) -> usize {
        (0..Self::SIZE).filter(|&i| self.test(i)).count()
    }
}

/// Mask reductions that recurse through nested masks down to a single bool
pub trait NestedMask {
    fn all_nested(&self) -> bool;
    fn any_nested(&self) -> bool;

    fn none_nested(&self) -> bool {
        !self.any_nested()
    }

    fn count_nested(&self) -> usize;
}

impl NestedMask for bool {
    fn all_nested(&self) -> bool {
        *self
    }

    fn any_nested(&self) -> bool {
        *self
    }

    fn count_nested(&self) -> usize {
        usize::from(*self)
    }
}

impl<const N: usize> NestedMask for Mask<N> {
    fn all_nested(&self) -> bool {
        self.all().all_nested()
    }

    fn any_nested(&self) -> bool {
        self.any().any_nested()
    }

    fn count_nested(&self) -> usize {
        self.count()
    }
}

/// Boolean companion of an `N`-lane array
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Mask<const N: usize> {
    lanes: [bool; N],
}

impl<const N: usize> Mask<N> {
    pub const fn new(lanes: [bool; N]) -> Self {
        Self { lanes }
    }

    pub fn as_array(&self) -> &[bool; N] {
        &self.lanes
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.lanes.iter().copied()
    }
}

impl<const N: usize> MaskOps for Mask<N> {
    const SIZE: usize = N;

    #[inline]
    fn splat(value: bool) -> Self {
        Self { lanes: [value; N] }
    }

    #[inline]
    fn from_fn<F: FnMut(usize) -> bool>(f: F) -> Self {
        Self { lanes: std::array::from_fn(f) }
    }

    #[inline]
    fn test(&self, lane: usize) -> bool {
        self.lanes[lane]
    }

    #[inline]
    fn set(&mut self, lane: usize, value: bool) {
        self.lanes[lane] = value;
    }
}

impl<const N: usize> Default for Mask<N> {
    fn default() -> Self {
        Self::splat(false)
    }
}

impl<const N: usize> From<[bool; N]> for Mask<N> {
    fn from(lanes: [bool; N]) -> Self {
        Self { lanes }
    }
}

impl<const N: usize> fmt::Debug for Mask<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.lanes.iter()).finish()
    }
}

macro_rules! impl_mask_binop {
    ($($trait:ident :: $method:ident => $op:tt),*) => {$(
        impl<const N: usize> $trait for Mask<N> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self::from_fn(|i| self.lanes[i] $op rhs.lanes[i])
            }
        }
    )*};
}

impl_mask_binop!(BitAnd::bitand => &, BitOr::bitor => |, BitXor::bitxor => ^);

impl<const N: usize> Not for Mask<N> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self::from_fn(|i| !self.lanes[i])
    }
}
