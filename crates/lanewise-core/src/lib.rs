//! Core traits and types for short-vector array math
//!
//! A concrete array type supplies a small set of primitive operations; every
//! other numeric operation is a default method built on top of them, so a
//! new backend only implements the primitives to get the complete API.
//!
//! # Architecture Overview
//!
//! The library is organized into three layers:
//!
//! 1. **Primitives** - the per-lane operation contract ([`Primitives`]) and
//!    the portable backend implementing it for [`Array`]
//! 2. **Base** - indexing, masked updates, generic arithmetic fallbacks,
//!    horizontal reductions and strided memory access ([`base`])
//! 3. **Math** - transcendental functions in exact and approximate modes
//!    ([`math`])
//!
//! Arrays of any width decompose recursively into a power-of-two part and a
//! remainder ([`shape`]); arrays nest, giving matrices and higher-rank
//! tensors that print as nested lists ([`format`]).
//!
//! # Design Philosophy
//!
//! - **Static dispatch**: backend and execution mode are resolved at compile
//!   time through generics, with no trait objects
//! - **Compile-time contracts**: width mismatches, illegal configurations
//!   and bad shuffles fail to compile
//! - **No allocations**: memory operations borrow caller buffers
//!
//! # Example
//!
//! ```rust
//! use lanewise_core::prelude::*;
//!
//! let x = Array::<f32, 8, Approx>::from_fn(|i| i as f32 * 0.25);
//! let (s, c) = x.sincos();
//! let one = s * s + c * c;
//! assert!(one.iter().all(|v| (v - 1.0).abs() < 1e-5));
//!
//! let mut counts = Array::<i32, 4>::splat(0);
//! counts.masked(Mask::new([true, false, true, false])).add(Array::splat(1));
//! assert_eq!(counts.hsum(), 2);
//! ```

pub mod array;
pub mod base;
pub mod config;
pub mod error;
pub mod format;
pub mod mask;
pub mod math;
pub mod numeric;
pub mod primitives;
pub mod shape;

// Re-export core types
pub use array::Array;
pub use error::{Error, Result};

pub use config::{Approx, Config, Exact, RoundingMode, Settings};
pub use mask::{Mask, MaskOps, NestedMask};
pub use numeric::{FloatScalar, Integral, Lane, Scalar};
pub use shape::{lpow2, WidthSplit};

pub use base::{
    ArrayBase, ArrayMath, FloatMath, Horizontal, IntegerMath, Masked, MemoryAccess, Permutation,
};
pub use math::{ErrorFunction, Exponential, Hyperbolic, Trigonometric};
pub use primitives::{select, Primitives};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        select,
        shuffle,
        // Value types
        Array,
        Mask,
        // Configuration
        Approx,
        Exact,
        RoundingMode,
        Settings,
        Result,
    };

    pub use crate::error::Error;

    // Operation traits
    pub use crate::base::{
        ArrayBase, ArrayMath, FloatMath, Horizontal, IntegerMath, MemoryAccess,
    };
    pub use crate::mask::{MaskOps, NestedMask};
    pub use crate::math::{ErrorFunction, Exponential, Hyperbolic, Trigonometric};
    pub use crate::primitives::Primitives;
}
