//! Scalar backend implementation
//!
//! Implements the primitive contract for [`Array`] lane by lane, without any
//! SIMD instructions, for every leaf type. Elementwise primitives walk the
//! array in native-register-sized blocks along the width decomposition, the
//! same shape a register-backed backend runs wide arrays in.
//!
//! Everything above the primitives (masked updates, rotations, reductions,
//! memory operations, transcendentals) is inherited from the default methods
//! of the higher-level traits; only `div_masked` is overridden.

use crate::array::Array;
use crate::base::{ArrayBase, ArrayMath, FloatMath, IntegerMath, MemoryAccess};
use crate::config::{Config, Exact};
use crate::mask::{Mask, MaskOps};
use crate::math::{ErrorFunction, Exponential, Hyperbolic, Trigonometric};
use crate::numeric::{FloatScalar, Integral, Lane, Scalar};
use crate::primitives::Primitives;
use crate::shape::for_each_block;
use std::ops::{BitAnd, BitOr, BitXor, Neg, Not};

/// Register width assumed when splitting wide arrays into blocks
pub const REGISTER_BYTES: usize = 16;

/// Number of `T` lanes in one register
pub const fn native_lanes<T>() -> usize {
    let lanes = REGISTER_BYTES / std::mem::size_of::<T>();
    if lanes == 0 {
        1
    } else {
        lanes
    }
}

#[inline]
fn map<T, U, const N: usize, C, C2>(a: &Array<T, N, C>, f: impl Fn(T) -> U) -> Array<U, N, C2>
where
    T: Scalar,
    U: Scalar,
    C: Config,
    C2: Config,
{
    let mut out = Array::<U, N, C2>::default();
    for_each_block(N, native_lanes::<T>(), &mut |block| {
        for i in block {
            *out.coeff_mut(i) = f(*a.coeff(i));
        }
    });
    out
}

#[inline]
fn zip<T: Scalar, const N: usize, C: Config>(
    a: &Array<T, N, C>,
    b: &Array<T, N, C>,
    f: impl Fn(T, T) -> T,
) -> Array<T, N, C> {
    let mut out = Array::<T, N, C>::default();
    for_each_block(N, native_lanes::<T>(), &mut |block| {
        for i in block {
            *out.coeff_mut(i) = f(*a.coeff(i), *b.coeff(i));
        }
    });
    out
}

#[inline]
fn compare<T: Scalar, const N: usize, C: Config>(
    a: &Array<T, N, C>,
    b: &Array<T, N, C>,
    f: impl Fn(T, T) -> bool,
) -> Mask<N> {
    Mask::from_fn(|i| f(*a.coeff(i), *b.coeff(i)))
}

impl<T: Scalar, const N: usize, C: Config> Primitives for Array<T, N, C> {
    type Mask = Mask<N>;
    type Bits = Array<T::Bits, N, Exact>;
    type Config = C;

    fn backend_name(&self) -> &'static str {
        "scalar"
    }

    #[inline]
    fn splat(value: T) -> Self {
        Array::splat(value)
    }

    #[inline]
    fn to_bits(self) -> Self::Bits {
        map(&self, <T as Scalar>::to_bits)
    }

    #[inline]
    fn from_bits(bits: Self::Bits) -> Self {
        map(&bits, <T as Scalar>::from_bits)
    }

    #[inline]
    fn from_mask(mask: Mask<N>) -> Self {
        Array::from_fn(|i| if mask.test(i) { T::all_ones() } else { T::ZERO })
    }

    #[inline]
    fn select(mask: Mask<N>, on_true: Self, on_false: Self) -> Self {
        Array::from_fn(|i| {
            if mask.test(i) {
                *on_true.coeff(i)
            } else {
                *on_false.coeff(i)
            }
        })
    }

    #[inline]
    fn cmp_eq(self, rhs: Self) -> Mask<N> {
        compare(&self, &rhs, |a, b| a == b)
    }

    #[inline]
    fn cmp_ne(self, rhs: Self) -> Mask<N> {
        compare(&self, &rhs, |a, b| a != b)
    }

    #[inline]
    fn cmp_lt(self, rhs: Self) -> Mask<N> {
        compare(&self, &rhs, |a, b| a < b)
    }

    #[inline]
    fn cmp_le(self, rhs: Self) -> Mask<N> {
        compare(&self, &rhs, |a, b| a <= b)
    }

    #[inline]
    fn cmp_gt(self, rhs: Self) -> Mask<N> {
        compare(&self, &rhs, |a, b| a > b)
    }

    #[inline]
    fn cmp_ge(self, rhs: Self) -> Mask<N> {
        compare(&self, &rhs, |a, b| a >= b)
    }

    #[inline]
    fn shift_left(self, k: u32) -> Self {
        map(&self, |x: T| x.lane_shl(k))
    }

    #[inline]
    fn shift_right(self, k: u32) -> Self {
        map(&self, |x: T| x.lane_shr(k))
    }

    #[inline]
    fn shift_left_v(self, k: Self) -> Self {
        zip(&self, &k, |x, k| x.lane_shl(k.shift_amount()))
    }

    #[inline]
    fn shift_right_v(self, k: Self) -> Self {
        zip(&self, &k, |x, k| x.lane_shr(k.shift_amount()))
    }

    #[inline]
    fn abs(self) -> Self {
        map(&self, Scalar::lane_abs)
    }

    #[inline]
    fn min(self, rhs: Self) -> Self {
        zip(&self, &rhs, Lane::lane_min)
    }

    #[inline]
    fn max(self, rhs: Self) -> Self {
        zip(&self, &rhs, Lane::lane_max)
    }

    #[inline]
    fn sqrt(self) -> Self {
        map(&self, Scalar::lane_sqrt)
    }

    #[inline]
    fn floor(self) -> Self {
        map(&self, Scalar::lane_floor)
    }

    /// Divides only the selected lanes, so masked-off integer lanes may hold
    /// a zero divisor.
    fn div_masked(&mut self, value: Self, mask: Mask<N>) {
        for i in (0..N).filter(|&i| mask.test(i)) {
            let lane = self.coeff_mut(i);
            *lane = lane.lane_div(*value.coeff(i));
        }
    }
}

macro_rules! impl_bit_op {
    ($($trait:ident :: $method:ident => $op:tt),* $(,)?) => {$(
        impl<T: Scalar, const N: usize, C: Config> $trait for Array<T, N, C> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                zip(&self, &rhs, |a, b| T::from_bits(a.to_bits() $op b.to_bits()))
            }
        }
    )*};
}

impl_bit_op!(BitAnd::bitand => &, BitOr::bitor => |, BitXor::bitxor => ^);

impl<T: Scalar, const N: usize, C: Config> Not for Array<T, N, C> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        self.complement()
    }
}

impl<T: Scalar, const N: usize, C: Config> Neg for Array<T, N, C> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.negate()
    }
}

// The rest of the API comes from the default methods.
impl<T: Scalar, const N: usize, C: Config> ArrayMath for Array<T, N, C> {}
impl<T: Scalar, const N: usize, C: Config> MemoryAccess for Array<T, N, C> {}
impl<T: Integral, const N: usize, C: Config> IntegerMath for Array<T, N, C> {}
impl<T: FloatScalar, const N: usize, C: Config> FloatMath for Array<T, N, C> {}
impl<T: FloatScalar, const N: usize, C: Config> Trigonometric for Array<T, N, C> {}
impl<T: FloatScalar, const N: usize, C: Config> Exponential for Array<T, N, C> {}
impl<T: FloatScalar, const N: usize, C: Config> Hyperbolic for Array<T, N, C> {}
impl<T: FloatScalar, const N: usize, C: Config> ErrorFunction for Array<T, N, C> {}
