//! Compile-time array configuration
//!
//! Every array carries a configuration type selecting the execution mode of
//! its transcendental functions and the rounding mode used by
//! [`FloatMath::round`](crate::base::FloatMath::round). Configurations are
//! zero-sized and resolved entirely at compile time.
//!
//! ```rust
//! use lanewise_core::{Array, Approx, Settings, RoundingMode};
//!
//! // Fast polynomial kernels for single precision
//! let a: Array<f32, 4, Approx> = Array::splat(0.5);
//!
//! // Round towards negative infinity
//! let b: Array<f64, 2, Settings<false, { RoundingMode::Down as u8 }>> = Array::splat(1.5);
//! # let _ = (a, b);
//! ```

use crate::numeric::Scalar;
use std::fmt::Debug;

/// IEEE-754 rounding modes
///
/// Only [`FloatMath::round`](crate::base::FloatMath::round) observes the
/// mode. Arithmetic operators always round to nearest, ties to even.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum RoundingMode {
    /// Whatever the platform does by default (round to nearest, ties to even)
    #[default]
    Default = 0,
    Nearest = 1,
    Down = 2,
    Up = 3,
    Zero = 4,
}

impl RoundingMode {
    pub const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Default,
            1 => Self::Nearest,
            2 => Self::Down,
            3 => Self::Up,
            4 => Self::Zero,
            _ => panic!("invalid rounding mode"),
        }
    }
}

/// Compile-time configuration of an array type
pub trait Config: Copy + Debug + Default + PartialEq + Send + Sync + 'static {
    /// Use polynomial approximations instead of exact per-lane routines
    const APPROX: bool;
    const ROUNDING: RoundingMode;
}

/// Configuration parameterised by const generics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Settings<const APPROX: bool, const ROUNDING: u8 = 0>;

impl<const APPROX: bool, const ROUNDING: u8> Config for Settings<APPROX, ROUNDING> {
    const APPROX: bool = APPROX;
    const ROUNDING: RoundingMode = RoundingMode::from_u8(ROUNDING);
}

/// Exact per-lane math, default rounding
pub type Exact = Settings<false>;

/// Approximate math, default rounding
pub type Approx = Settings<true>;

/// Reject illegal leaf/configuration combinations
///
/// Evaluated in a `const` block whenever an array is constructed, so an
/// illegal combination fails to compile.
pub const fn validate<T: Scalar, C: Config>() {
    assert!(
        !C::APPROX || (T::IS_FLOAT && T::BITS == 32),
        "approximate math is only available for single-precision leaves"
    );
    assert!(
        C::ROUNDING as u8 == RoundingMode::Default as u8 || T::IS_FLOAT,
        "integer arrays require the default rounding mode"
    );
}
