//! Transcendental functions over float arrays
//!
//! Every function has two implementations, picked at compile time from the
//! array's [`Config`]:
//!
//! - exact: each lane goes through the standard library (or `statrs` for the
//!   error function), so results match the scalar functions bit for bit
//! - approximate: polynomial kernels built only from array primitives, in
//!   the style of the Cephes single-precision routines. Error bounds are
//!   given in ulp on each method.
//!
//! Approximate mode is only accepted for `f32` leaves (see
//! [`config::validate`](crate::config::validate)).

pub mod erf;
pub mod exp_log;
pub mod hyperbolic;
pub mod trig;

pub use erf::ErrorFunction;
pub use exp_log::Exponential;
pub use hyperbolic::Hyperbolic;
pub use trig::Trigonometric;

use crate::base::ArrayMath;
use crate::config::Config;
use crate::numeric::{Integral, Scalar};
use crate::primitives::Primitives;

#[inline]
pub(crate) fn approximate<A: Primitives>() -> bool {
    <A::Config as Config>::APPROX
}

/// Broadcast a constant into every lane
#[inline]
pub(crate) fn lit<A: Primitives>(value: f64) -> A {
    A::splat(<A::Value as Scalar>::from_f64(value))
}

/// Broadcast a bit pattern into every lane of the bit companion
#[inline]
pub(crate) fn bits<A: Primitives>(value: u64) -> A::Bits {
    <A::Bits as Primitives>::splat(<<A::Value as Scalar>::Bits as Integral>::wrapping_from_u64(value))
}

/// Keep only the sign bit of every lane
#[inline]
pub(crate) fn sign_mask<A: Primitives>(x: A) -> A {
    x & A::from_bits(<A::Bits as Primitives>::splat(<A::Value as Scalar>::sign_bit()))
}

/// Evaluate a polynomial, highest-degree coefficient first
#[inline]
pub(crate) fn horner<A: ArrayMath>(x: A, coeffs: &[f64]) -> A {
    let mut coeffs = coeffs.iter();
    let Some(&first) = coeffs.next() else {
        return A::splat(<A::Value as Scalar>::ZERO);
    };
    coeffs.fold(lit::<A>(first), |acc, &c| acc.fmadd(x, lit(c)))
}
