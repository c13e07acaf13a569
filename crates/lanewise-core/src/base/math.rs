//! Generic math base: fallbacks built only on the primitive contract
//!
//! The traits here are split by leaf family so that an operation which makes
//! no sense for a leaf type is simply absent from its arrays:
//!
//! - [`ArrayMath`]: every scalar leaf
//! - [`IntegerMath`]: rotations, integer leaves only
//! - [`FloatMath`]: classification, reciprocals, rounding; float leaves only

use crate::base::masked::Masked;
use crate::base::{ArrayBase, Horizontal};
use crate::config::{Config, RoundingMode};
use crate::numeric::{FloatScalar, Integral, Lane, Scalar};
use crate::primitives::Primitives;

/// Compile-time lane permutation for [`ArrayMath::shuffle`]
///
/// Usually defined through the [`shuffle!`](crate::shuffle) macro.
pub trait Permutation {
    /// Source lane of each output lane
    const INDICES: &'static [usize];
}

/// Validate a permutation against an array width at compile time
pub const fn validate_permutation(indices: &[usize], size: usize) {
    assert!(
        indices.len() == size,
        "shuffle: number of indices must equal the array width"
    );
    let mut i = 0;
    while i < indices.len() {
        assert!(indices[i] < size, "shuffle: index out of range");
        let mut j = i + 1;
        while j < indices.len() {
            assert!(indices[i] != indices[j], "shuffle: duplicate index");
            j += 1;
        }
        i += 1;
    }
}

/// Operations available for every scalar leaf
pub trait ArrayMath: Primitives + Horizontal {
    /// Bitwise complement, XOR with an all-ones pattern
    #[inline]
    fn complement(self) -> Self {
        self ^ Self::from_bits(Self::Bits::splat(!<<Self::Value as Scalar>::Bits as Scalar>::ZERO))
    }

    /// Floats flip the sign bit, integers take the two's complement
    #[inline]
    fn negate(self) -> Self {
        if <Self::Value as Scalar>::IS_FLOAT {
            self ^ Self::from_bits(Self::Bits::splat(<Self::Value as Scalar>::sign_bit()))
        } else {
            (self ^ Self::from_bits(Self::Bits::splat(!<<Self::Value as Scalar>::Bits as Scalar>::ZERO)))
                + Self::splat(<Self::Value as Scalar>::ONE)
        }
    }

    /// `self * b + c`
    #[inline]
    fn fmadd(self, b: Self, c: Self) -> Self {
        self * b + c
    }

    /// `self * b - c`
    #[inline]
    fn fmsub(self, b: Self, c: Self) -> Self {
        self * b - c
    }

    /// `-(self * b) + c`
    #[inline]
    fn fnmadd(self, b: Self, c: Self) -> Self {
        c - self * b
    }

    /// `-(self * b) - c`
    #[inline]
    fn fnmsub(self, b: Self, c: Self) -> Self {
        (self * b).negate() - c
    }

    /// Even lanes `self * b - c`, odd lanes `self * b + c`
    fn fmaddsub(self, b: Self, c: Self) -> Self {
        let product = self * b;
        Self::from_fn(|i| {
            let (p, c) = (*product.coeff(i), *c.coeff(i));
            if i % 2 == 0 {
                p.lane_sub(c)
            } else {
                p.lane_add(c)
            }
        })
    }

    /// Even lanes `self * b + c`, odd lanes `self * b - c`
    fn fmsubadd(self, b: Self, c: Self) -> Self {
        let product = self * b;
        Self::from_fn(|i| {
            let (p, c) = (*product.coeff(i), *c.coeff(i));
            if i % 2 == 0 {
                p.lane_add(c)
            } else {
                p.lane_sub(c)
            }
        })
    }

    /// Reorder lanes: output lane `i` takes input lane `P::INDICES[i]`
    fn shuffle<P: Permutation>(self) -> Self {
        const { validate_permutation(P::INDICES, Self::SIZE) };
        Self::from_fn(|i| *self.coeff(P::INDICES[i]))
    }

    /// Restrict the following update to the lanes selected by `mask`
    fn masked(&mut self, mask: Self::Mask) -> Masked<'_, Self> {
        Masked::new(self, mask)
    }
}

/// `(x << (k & m)) | (x >> (-k & m))` on an unsigned array
#[inline]
fn rotate_left<A: Primitives>(x: A, k: u32) -> A {
    let mask = <A::Value as Scalar>::BITS - 1;
    x.shift_left(k & mask) | x.shift_right(k.wrapping_neg() & mask)
}

#[inline]
fn rotate_left_v<A: Primitives>(x: A, k: A) -> A {
    let mask = A::splat(<A::Value as Scalar>::from_f64(f64::from(<A::Value as Scalar>::BITS - 1)));
    let minus_k = !k + A::splat(<A::Value as Scalar>::ONE);
    x.shift_left_v(k & mask) | x.shift_right_v(minus_k & mask)
}

/// Bit rotations for integer leaves
///
/// Signed arrays rotate through their unsigned bit companion so that no sign
/// bits are shifted in.
pub trait IntegerMath: ArrayMath<Value: Integral> {
    fn rol(self, k: u32) -> Self {
        if <Self::Value as Scalar>::IS_SIGNED {
            Self::from_bits(rotate_left(self.to_bits(), k))
        } else {
            rotate_left(self, k)
        }
    }

    fn ror(self, k: u32) -> Self {
        self.rol(k.wrapping_neg())
    }

    /// Rotate each lane by the matching lane of `k`
    fn rolv(self, k: Self) -> Self {
        if <Self::Value as Scalar>::IS_SIGNED {
            Self::from_bits(rotate_left_v(self.to_bits(), k.to_bits()))
        } else {
            rotate_left_v(self, k)
        }
    }

    fn rorv(self, k: Self) -> Self {
        self.rolv(k.negate())
    }

    /// Rotate by an immediate amount
    #[inline]
    fn roli<const K: u32>(self) -> Self {
        self.rol(K)
    }

    #[inline]
    fn rori<const K: u32>(self) -> Self {
        self.ror(K)
    }
}

/// Float-only operations
pub trait FloatMath: ArrayMath<Value: FloatScalar> {
    /// NaN is the only value unequal to itself
    fn is_nan(self) -> Self::Mask {
        !self.cmp_eq(self)
    }

    fn is_inf(self) -> Self::Mask {
        self.abs().cmp_eq(Self::splat(<Self::Value as num_traits::Float>::infinity()))
    }

    /// `|x| < MAX`; the largest finite values are reported as not finite
    fn is_finite(self) -> Self::Mask {
        self.abs().cmp_lt(Self::splat(<Self::Value as num_traits::Float>::max_value()))
    }

    fn rcp(self) -> Self {
        Self::splat(<Self::Value as Scalar>::ONE) / self
    }

    fn rsqrt(self) -> Self {
        Self::splat(<Self::Value as Scalar>::ONE) / self.sqrt()
    }

    /// Round to an integer using the configured rounding mode
    fn round(self) -> Self {
        match <Self::Config as Config>::ROUNDING {
            RoundingMode::Default | RoundingMode::Nearest => {
                self.map_lanes(FloatScalar::round_ties_even_lane)
            }
            RoundingMode::Down => self.floor(),
            RoundingMode::Up => self.map_lanes(num_traits::Float::ceil),
            RoundingMode::Zero => self.map_lanes(num_traits::Float::trunc),
        }
    }

    /// Truncating conversion to same-width signed integers, held in `Bits`
    fn to_int(self) -> Self::Bits {
        <Self::Bits as ArrayBase>::from_fn(|i| self.coeff(i).to_int_bits())
    }

    fn from_int(bits: Self::Bits) -> Self {
        Self::from_fn(|i| <Self::Value as FloatScalar>::from_int_bits(*bits.coeff(i)))
    }
}

/// Define a compile-time permutation and apply it
///
/// ```rust
/// use lanewise_core::prelude::*;
///
/// let a = Array::<i32, 4>::new([1, 2, 3, 4]);
/// let reversed = shuffle!(a, [3, 2, 1, 0]);
/// assert_eq!(reversed.into_array(), [4, 3, 2, 1]);
/// ```
#[macro_export]
macro_rules! shuffle {
    ($value:expr, [$($index:expr),* $(,)?]) => {{
        struct LocalPermutation;
        impl $crate::base::Permutation for LocalPermutation {
            const INDICES: &'static [usize] = &[$($index),*];
        }
        $crate::base::ArrayMath::shuffle::<LocalPermutation>($value)
    }};
}
