//! The generic fixed-width array value
//!
//! `Array<T, N, C>` holds `N` lanes of `T` contiguously on the stack. `T` is
//! a leaf scalar or another array (nested arrays), and `C` selects the
//! compile-time configuration. The primitive contract for flat arrays lives
//! in the portable backend ([`crate::primitives::backends::scalar`]).

use crate::base::ArrayBase;
use crate::config::{self, Config, Exact};
use crate::numeric::{Lane, Scalar};
use crate::shape::WidthSplit;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

/// Fixed-width array of `N` lanes
#[repr(transparent)]
pub struct Array<T, const N: usize, C = Exact> {
    lanes: [T; N],
    config: PhantomData<C>,
}

impl<T: Lane, const N: usize, C: Config> Array<T, N, C> {
    /// Width decomposition of this array type
    pub const SPLIT: WidthSplit = WidthSplit::of(N);

    #[inline]
    pub fn new(lanes: [T; N]) -> Self {
        const { config::validate::<T::Leaf, C>() };
        Self {
            lanes,
            config: PhantomData,
        }
    }

    /// Broadcast one lane value
    #[inline]
    pub fn splat(value: T) -> Self {
        Self::new([value; N])
    }

    #[inline]
    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Self::new(std::array::from_fn(f))
    }

    /// Copy the first `N` values of a slice
    pub fn from_slice(values: &[T]) -> crate::Result<Self> {
        if values.len() < N {
            return Err(crate::Error::shape_mismatch(values.len(), N));
        }
        Ok(Self::from_fn(|i| values[i]))
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.lanes
    }

    #[inline]
    pub fn as_array(&self) -> &[T; N] {
        &self.lanes
    }

    /// Same lanes under another configuration
    #[inline]
    pub fn with_config<C2: Config>(self) -> Array<T, N, C2> {
        Array::new(self.lanes)
    }

    /// Split into the power-of-two leading part and the remainder
    ///
    /// `A` and `B` must match [`Array::SPLIT`]; anything else fails to
    /// compile.
    pub fn split<const A: usize, const B: usize>(self) -> (Array<T, A, C>, Array<T, B, C>) {
        const {
            assert!(
                A == WidthSplit::of(N).size1 && B == WidthSplit::of(N).size2,
                "split widths must follow the width decomposition"
            )
        };
        (
            Array::from_fn(|i| self.lanes[i]),
            Array::from_fn(|i| self.lanes[A + i]),
        )
    }

    /// Join two parts whose widths sum to `N`
    pub fn concat<const A: usize, const B: usize>(lo: Array<T, A, C>, hi: Array<T, B, C>) -> Self {
        const { assert!(A + B == N, "concatenated widths must sum to the array width") };
        Self::from_fn(|i| if i < A { lo.lanes[i] } else { hi.lanes[i - A] })
    }
}

impl<T: Scalar, const N: usize, C: Config> Array<T, N, C> {
    /// Reinterpret every lane's bits as a leaf of the same size
    pub fn reinterpret<U: Scalar, C2: Config>(self) -> Array<U, N, C2> {
        const {
            assert!(
                std::mem::size_of::<T>() == std::mem::size_of::<U>(),
                "reinterpret requires leaves of equal size"
            )
        };
        Array::from_fn(|i| bytemuck::cast(self.lanes[i]))
    }
}

impl<T: Copy, const N: usize, C> Clone for Array<T, N, C> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Copy, const N: usize, C> Copy for Array<T, N, C> {}

impl<T: Lane, const N: usize, C: Config> Default for Array<T, N, C> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T: PartialEq, const N: usize, C> PartialEq for Array<T, N, C> {
    fn eq(&self, other: &Self) -> bool {
        self.lanes == other.lanes
    }
}

impl<T: fmt::Debug, const N: usize, C> fmt::Debug for Array<T, N, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.lanes.iter()).finish()
    }
}

impl<T: Lane, const N: usize, C: Config> From<[T; N]> for Array<T, N, C> {
    fn from(lanes: [T; N]) -> Self {
        Self::new(lanes)
    }
}

// SAFETY: `repr(transparent)` over `[T; N]` with a zero-sized marker, so the
// layout is exactly that of the lane array, which is Pod for Pod lanes.
unsafe impl<T: Scalar, const N: usize, C: Config> bytemuck::Zeroable for Array<T, N, C> {}
unsafe impl<T: Scalar, const N: usize, C: Config> bytemuck::Pod for Array<T, N, C> {}

impl<T: Lane, const N: usize, C: Config> ArrayBase for Array<T, N, C> {
    type Value = T;
    const SIZE: usize = N;

    #[inline]
    fn coeff(&self, i: usize) -> &T {
        &self.lanes[i]
    }

    #[inline]
    fn coeff_mut(&mut self, i: usize) -> &mut T {
        &mut self.lanes[i]
    }

    #[inline]
    fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Array::from_fn(f)
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        &self.lanes
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.lanes
    }
}

#[inline]
#[track_caller]
fn check_lane(index: usize, size: usize) {
    #[cfg(all(debug_assertions, not(feature = "disable-range-check")))]
    if index >= size {
        panic!("{}", crate::Error::out_of_bounds(index, size));
    }
    let _ = (index, size);
}

impl<T: Lane, const N: usize, C: Config> Index<usize> for Array<T, N, C> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &T {
        check_lane(index, N);
        &self.lanes[index]
    }
}

impl<T: Lane, const N: usize, C: Config> IndexMut<usize> for Array<T, N, C> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        check_lane(index, N);
        &mut self.lanes[index]
    }
}

macro_rules! impl_lane_arith {
    ($($trait:ident :: $method:ident, $assign:ident :: $assign_method:ident => $lane_op:ident),* $(,)?) => {$(
        impl<T: Lane, const N: usize, C: Config> $trait for Array<T, N, C> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self::from_fn(|i| self.lanes[i].$lane_op(rhs.lanes[i]))
            }
        }

        impl<T: Lane, const N: usize, C: Config> $assign for Array<T, N, C> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = $trait::$method(*self, rhs);
            }
        }
    )*};
}

impl_lane_arith! {
    Add::add, AddAssign::add_assign => lane_add,
    Sub::sub, SubAssign::sub_assign => lane_sub,
    Mul::mul, MulAssign::mul_assign => lane_mul,
    Div::div, DivAssign::div_assign => lane_div,
}

/// Arrays nest: an array is itself a valid lane type
impl<T: Lane, const N: usize, C: Config> Lane for Array<T, N, C> {
    type Leaf = T::Leaf;
    const DEPTH: usize = T::DEPTH + 1;

    #[inline]
    fn lane_add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline]
    fn lane_sub(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline]
    fn lane_mul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline]
    fn lane_div(self, rhs: Self) -> Self {
        self / rhs
    }

    #[inline]
    fn lane_min(self, rhs: Self) -> Self {
        Self::from_fn(|i| self.lanes[i].lane_min(rhs.lanes[i]))
    }

    #[inline]
    fn lane_max(self, rhs: Self) -> Self {
        Self::from_fn(|i| self.lanes[i].lane_max(rhs.lanes[i]))
    }

    #[inline]
    fn splat_leaf(value: T::Leaf) -> Self {
        Self::from_fn(|_| T::splat_leaf(value))
    }

    fn sum_nested(self) -> T::Leaf {
        crate::base::Horizontal::hsum(&self).sum_nested()
    }

    fn product_nested(self) -> T::Leaf {
        crate::base::Horizontal::hprod(&self).product_nested()
    }

    fn min_nested(self) -> T::Leaf {
        crate::base::Horizontal::hmin(&self).min_nested()
    }

    fn max_nested(self) -> T::Leaf {
        crate::base::Horizontal::hmax(&self).max_nested()
    }

    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        crate::format::write_nested(self.as_slice(), f, depth)
    }
}
