//! Generic numeric trait hierarchy for lane values
//!
//! This module provides the type foundation for everything that can sit in an
//! array lane. It does not impose any computational infrastructure: all
//! vector computation happens through the primitive contract.
//!
//! # Hierarchy
//!
//! - [`Lane`]: anything a lane can hold, a leaf scalar or a nested array
//! - [`Scalar`]: leaf types, with a same-width unsigned bit companion
//! - [`Integral`] / [`FloatScalar`]: the two leaf families
//!
//! Integer lane arithmetic wraps. Float lane arithmetic follows IEEE-754.

use bytemuck::Pod;
use num_traits::{Float, PrimInt};
use std::fmt::{self, Debug, Display};

/// Anything that can occupy an array lane
pub trait Lane: Copy + Default + Debug + PartialEq + Send + Sync + 'static {
    /// Innermost scalar type
    type Leaf: Scalar;

    /// Nesting depth, 0 for scalars
    const DEPTH: usize;

    fn lane_add(self, rhs: Self) -> Self;
    fn lane_sub(self, rhs: Self) -> Self;
    fn lane_mul(self, rhs: Self) -> Self;
    fn lane_div(self, rhs: Self) -> Self;
    fn lane_min(self, rhs: Self) -> Self;
    fn lane_max(self, rhs: Self) -> Self;

    /// Broadcast a leaf value into every position of this lane
    fn splat_leaf(value: Self::Leaf) -> Self;

    /// Reduce repeatedly until only the leaf remains
    fn sum_nested(self) -> Self::Leaf;
    fn product_nested(self) -> Self::Leaf;
    fn min_nested(self) -> Self::Leaf;
    fn max_nested(self) -> Self::Leaf;

    /// Write this lane as part of a nested array at the given depth
    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result;
}

/// Leaf scalar types
pub trait Scalar: Lane<Leaf = Self> + Pod + PartialOrd + Display {
    /// Unsigned integer of the same width
    type Bits: Integral;

    const IS_FLOAT: bool;
    const IS_SIGNED: bool;
    const BITS: u32;
    const ZERO: Self;
    const ONE: Self;

    /// Reinterpret the bit pattern as the unsigned companion
    #[inline]
    fn to_bits(self) -> Self::Bits {
        bytemuck::cast(self)
    }

    /// Reinterpret an unsigned bit pattern as this type
    #[inline]
    fn from_bits(bits: Self::Bits) -> Self {
        bytemuck::cast(bits)
    }

    /// Value whose bit pattern is all ones
    #[inline]
    fn all_ones() -> Self {
        Self::from_bits(!<Self::Bits as Scalar>::ZERO)
    }

    /// Bit pattern with only the most significant bit set
    #[inline]
    fn sign_bit() -> Self::Bits {
        <Self::Bits as Scalar>::ONE.lane_shl(Self::BITS - 1)
    }

    fn lane_abs(self) -> Self;
    fn lane_sqrt(self) -> Self;
    fn lane_floor(self) -> Self;

    /// Shift the bit pattern left; the amount wraps at the bit width
    fn lane_shl(self, k: u32) -> Self;

    /// Shift the bit pattern right (arithmetic for signed integers)
    fn lane_shr(self, k: u32) -> Self;

    /// Interpret this lane as a shift amount
    fn shift_amount(self) -> u32;

    fn from_f64(value: f64) -> Self;
    fn as_f64(self) -> f64;
}

/// Integer leaves
pub trait Integral: Scalar + PrimInt {
    fn wrapping_from_u64(value: u64) -> Self;
}

/// Floating-point leaves
pub trait FloatScalar: Scalar + Float {
    /// Explicitly stored mantissa bits
    const MANTISSA_BITS: u32;
    /// Mask of the biased exponent field
    const EXPONENT_MASK: u64;
    const EXPONENT_BIAS: u32;

    /// Truncating conversion to the signed integer of the same width, held in `Bits`
    fn to_int_bits(self) -> Self::Bits;

    /// Inverse of [`FloatScalar::to_int_bits`]
    fn from_int_bits(bits: Self::Bits) -> Self;

    /// Split into a mantissa in `[0.5, 1)` and a power-of-two exponent
    ///
    /// Zero, infinities and NaN are returned unchanged with exponent 0.
    fn frexp(self) -> (Self, Self);

    /// Multiply by two raised to `exp` (truncated to an integer)
    fn ldexp(self, exp: Self) -> Self;

    fn erf(self) -> Self;

    /// Inverse error function on `(-1, 1)`
    fn erf_inv(self) -> Self;

    /// Round half-way cases to the nearest even integer
    #[inline]
    fn round_ties_even_lane(self) -> Self {
        let half = Self::from_f64(0.5);
        if (self - self.trunc()).abs() == half {
            (self * half).round() * Self::from_f64(2.0)
        } else {
            self.round()
        }
    }
}

macro_rules! impl_integral {
    (@signed signed) => { true };
    (@signed unsigned) => { false };
    (@abs signed, $x:expr) => { $x.wrapping_abs() };
    (@abs unsigned, $x:expr) => { $x };
    ($kind:ident: $($t:ty => $bits:ty),* $(,)?) => {$(
        impl Lane for $t {
            type Leaf = $t;
            const DEPTH: usize = 0;

            #[inline]
            fn lane_add(self, rhs: Self) -> Self { self.wrapping_add(rhs) }
            #[inline]
            fn lane_sub(self, rhs: Self) -> Self { self.wrapping_sub(rhs) }
            #[inline]
            fn lane_mul(self, rhs: Self) -> Self { self.wrapping_mul(rhs) }
            #[inline]
            fn lane_div(self, rhs: Self) -> Self { self.wrapping_div(rhs) }
            #[inline]
            fn lane_min(self, rhs: Self) -> Self { Ord::min(self, rhs) }
            #[inline]
            fn lane_max(self, rhs: Self) -> Self { Ord::max(self, rhs) }

            #[inline]
            fn splat_leaf(value: Self) -> Self { value }

            fn sum_nested(self) -> Self { self }
            fn product_nested(self) -> Self { self }
            fn min_nested(self) -> Self { self }
            fn max_nested(self) -> Self { self }

            fn fmt_nested(&self, f: &mut fmt::Formatter<'_>, _depth: usize) -> fmt::Result {
                Display::fmt(self, f)
            }
        }

        impl Scalar for $t {
            type Bits = $bits;

            const IS_FLOAT: bool = false;
            const IS_SIGNED: bool = impl_integral!(@signed $kind);
            const BITS: u32 = <$t>::BITS;
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline]
            fn lane_abs(self) -> Self { impl_integral!(@abs $kind, self) }
            #[inline]
            fn lane_sqrt(self) -> Self { (self as f64).sqrt() as $t }
            #[inline]
            fn lane_floor(self) -> Self { self }
            #[inline]
            fn lane_shl(self, k: u32) -> Self { self.wrapping_shl(k) }
            #[inline]
            fn lane_shr(self, k: u32) -> Self { self.wrapping_shr(k) }
            #[inline]
            fn shift_amount(self) -> u32 { self as u32 }
            #[inline]
            fn from_f64(value: f64) -> Self { value as $t }
            #[inline]
            fn as_f64(self) -> f64 { self as f64 }
        }

        impl Integral for $t {
            #[inline]
            fn wrapping_from_u64(value: u64) -> Self { value as $t }
        }
    )*};
}

impl_integral!(unsigned: u8 => u8, u16 => u16, u32 => u32, u64 => u64);
impl_integral!(signed: i8 => u8, i16 => u16, i32 => u32, i64 => u64);

macro_rules! impl_float {
    ($($t:ty => $bits:ty, $int:ty, $mantissa:expr, $mask:expr, $bias:expr);* $(;)?) => {$(
        impl Lane for $t {
            type Leaf = $t;
            const DEPTH: usize = 0;

            #[inline]
            fn lane_add(self, rhs: Self) -> Self { self + rhs }
            #[inline]
            fn lane_sub(self, rhs: Self) -> Self { self - rhs }
            #[inline]
            fn lane_mul(self, rhs: Self) -> Self { self * rhs }
            #[inline]
            fn lane_div(self, rhs: Self) -> Self { self / rhs }
            // Comparison-based so a NaN first operand yields the second one
            #[inline]
            fn lane_min(self, rhs: Self) -> Self { if self < rhs { self } else { rhs } }
            #[inline]
            fn lane_max(self, rhs: Self) -> Self { if self > rhs { self } else { rhs } }

            #[inline]
            fn splat_leaf(value: Self) -> Self { value }

            fn sum_nested(self) -> Self { self }
            fn product_nested(self) -> Self { self }
            fn min_nested(self) -> Self { self }
            fn max_nested(self) -> Self { self }

            fn fmt_nested(&self, f: &mut fmt::Formatter<'_>, _depth: usize) -> fmt::Result {
                Display::fmt(self, f)
            }
        }

        impl Scalar for $t {
            type Bits = $bits;

            const IS_FLOAT: bool = true;
            const IS_SIGNED: bool = true;
            const BITS: u32 = <$bits>::BITS;
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline]
            fn lane_abs(self) -> Self { self.abs() }
            #[inline]
            fn lane_sqrt(self) -> Self { self.sqrt() }
            #[inline]
            fn lane_floor(self) -> Self { self.floor() }
            #[inline]
            fn lane_shl(self, k: u32) -> Self { <$t>::from_bits(self.to_bits().wrapping_shl(k)) }
            #[inline]
            fn lane_shr(self, k: u32) -> Self { <$t>::from_bits(self.to_bits().wrapping_shr(k)) }
            #[inline]
            fn shift_amount(self) -> u32 { self as u32 }
            #[inline]
            fn from_f64(value: f64) -> Self { value as $t }
            #[inline]
            fn as_f64(self) -> f64 { self as f64 }
        }

        impl FloatScalar for $t {
            const MANTISSA_BITS: u32 = $mantissa;
            const EXPONENT_MASK: u64 = $mask;
            const EXPONENT_BIAS: u32 = $bias;

            #[inline]
            fn to_int_bits(self) -> $bits { (self as $int) as $bits }

            #[inline]
            fn from_int_bits(bits: $bits) -> Self { (bits as $int) as $t }

            fn frexp(self) -> (Self, Self) {
                const MASK: $bits = $mask;
                let bits = self.to_bits();
                let biased = ((bits & MASK) >> $mantissa) as i32;

                if biased == 0 {
                    if self == 0.0 {
                        return (self, 0.0);
                    }
                    // Subnormal: bring into the normal range first
                    let (mantissa, exp) = FloatScalar::frexp(self * <$t>::powi(2.0, 64));
                    return (mantissa, exp - 64.0);
                }
                if biased == (MASK >> $mantissa) as i32 {
                    return (self, 0.0);
                }

                let half_exponent = (($bias - 1) as $bits) << $mantissa;
                let mantissa = <$t>::from_bits((bits & !MASK) | half_exponent);
                (mantissa, (biased - ($bias - 1)) as $t)
            }

            fn ldexp(self, exp: Self) -> Self {
                if exp.is_nan() {
                    return <$t>::NAN;
                }
                let max_exp = $bias as i32;
                let min_exp = 1 - $bias as i32;
                let pow2 = |k: i32| <$t>::from_bits(((k + $bias as i32) as $bits) << $mantissa);

                // Saturating cast, then scale in at most three steps
                let mut n = exp as i32;
                let mut y = self;
                if n > max_exp {
                    y *= pow2(max_exp);
                    n -= max_exp;
                    if n > max_exp {
                        y *= pow2(max_exp);
                        n = (n - max_exp).min(max_exp);
                    }
                } else if n < min_exp {
                    let step = $mantissa as i32 + 1;
                    y *= pow2(min_exp) * pow2(step);
                    n += -min_exp - step;
                    if n < min_exp {
                        y *= pow2(min_exp) * pow2(step);
                        n = (n - min_exp - step).max(min_exp);
                    }
                }
                y * pow2(n)
            }

            fn erf(self) -> Self {
                statrs::function::erf::erf(self as f64) as $t
            }

            fn erf_inv(self) -> Self {
                // statrs saturates outside the domain
                if !(self.abs() <= 1.0) {
                    return <$t>::NAN;
                }
                statrs::function::erf::erf_inv(self as f64) as $t
            }
        }
    )*};
}

impl_float! {
    f32 => u32, i32, 23, 0x7f80_0000, 127;
    f64 => u64, i64, 52, 0x7ff0_0000_0000_0000, 1023;
}
