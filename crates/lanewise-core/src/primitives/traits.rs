//! The primitive contract every array backend implements
//!
//! A backend supplies the operations in [`Primitives`] (plus the standard
//! operator traits and [`ArrayBase`]). Everything else, from masked updates
//! to the transcendental functions, is provided by default methods of the
//! traits in [`crate::base`] and [`crate::math`], built only on this
//! contract. A backend may override any of those defaults with a native
//! version.

use crate::base::ArrayBase;
use crate::config::Config;
use crate::mask::MaskOps;
use crate::numeric::Scalar;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Not, Sub};

/// Minimal operation set of a flat array backend
pub trait Primitives:
    ArrayBase<Value: Scalar>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
{
    /// Per-lane boolean companion
    type Mask: MaskOps;

    /// Same-width array over the unsigned bit companion of the leaf
    type Bits: Primitives<Value = <Self::Value as Scalar>::Bits, Mask = Self::Mask>;

    /// Compile-time settings (approximation, rounding)
    type Config: Config;

    /// Get the name of this backend
    fn backend_name(&self) -> &'static str;

    fn splat(value: Self::Value) -> Self;

    /// Reinterpret lane bit patterns
    fn to_bits(self) -> Self::Bits;
    fn from_bits(bits: Self::Bits) -> Self;

    /// All-ones lanes where the mask is set, zero elsewhere
    fn from_mask(mask: Self::Mask) -> Self;

    /// Blend: lanes of `on_true` where `mask` is set, `on_false` elsewhere
    fn select(mask: Self::Mask, on_true: Self, on_false: Self) -> Self;

    fn cmp_eq(self, rhs: Self) -> Self::Mask;
    fn cmp_ne(self, rhs: Self) -> Self::Mask;
    fn cmp_lt(self, rhs: Self) -> Self::Mask;
    fn cmp_le(self, rhs: Self) -> Self::Mask;
    fn cmp_gt(self, rhs: Self) -> Self::Mask;
    fn cmp_ge(self, rhs: Self) -> Self::Mask;

    /// Shift every lane by the same amount
    fn shift_left(self, k: u32) -> Self;
    fn shift_right(self, k: u32) -> Self;

    /// Shift each lane by the amount in the matching lane of `k`
    fn shift_left_v(self, k: Self) -> Self;
    fn shift_right_v(self, k: Self) -> Self;

    fn abs(self) -> Self;
    fn min(self, rhs: Self) -> Self;
    fn max(self, rhs: Self) -> Self;
    fn sqrt(self) -> Self;
    fn floor(self) -> Self;

    // Masked compound updates. Backends with native masked instructions
    // override these; the fallback blends the full result back in.

    #[inline]
    fn assign_masked(&mut self, value: Self, mask: Self::Mask) {
        *self = Self::select(mask, value, *self);
    }

    #[inline]
    fn add_masked(&mut self, value: Self, mask: Self::Mask) {
        *self = Self::select(mask, *self + value, *self);
    }

    #[inline]
    fn sub_masked(&mut self, value: Self, mask: Self::Mask) {
        *self = Self::select(mask, *self - value, *self);
    }

    #[inline]
    fn mul_masked(&mut self, value: Self, mask: Self::Mask) {
        *self = Self::select(mask, *self * value, *self);
    }

    #[inline]
    fn div_masked(&mut self, value: Self, mask: Self::Mask) {
        *self = Self::select(mask, *self / value, *self);
    }

    #[inline]
    fn or_masked(&mut self, value: Self, mask: Self::Mask) {
        *self = Self::select(mask, *self | value, *self);
    }

    #[inline]
    fn and_masked(&mut self, value: Self, mask: Self::Mask) {
        *self = Self::select(mask, *self & value, *self);
    }

    #[inline]
    fn xor_masked(&mut self, value: Self, mask: Self::Mask) {
        *self = Self::select(mask, *self ^ value, *self);
    }
}

/// Blend two arrays lane by lane
#[inline]
pub fn select<A: Primitives>(mask: A::Mask, on_true: A, on_false: A) -> A {
    A::select(mask, on_true, on_false)
}
