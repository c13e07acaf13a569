//! Primitive operations and their backends
//!
//! # Architecture
//!
//! - One [`Primitives`] trait holding the minimal per-lane operation set
//! - Backends implement it for concrete array types; the portable scalar
//!   backend covers [`Array`](crate::Array) for every leaf and width
//! - Every higher-level operation is a default method on top of this trait,
//!   resolved at compile time with no dynamic dispatch
//!
//! # Usage
//!
//! ```rust
//! use lanewise_core::primitives::{select, Primitives};
//! use lanewise_core::{Array, Mask};
//!
//! let a = Array::<f32, 4>::new([1.0, 2.0, 3.0, 4.0]);
//! let b = Array::<f32, 4>::splat(0.0);
//! let picked = select(a.cmp_gt(Array::splat(2.0)), a, b);
//! assert_eq!(picked.into_array(), [0.0, 0.0, 3.0, 4.0]);
//! assert_eq!(a.backend_name(), "scalar");
//! # let _ = Mask::<4>::default();
//! ```

pub mod backends;
pub mod traits;

pub use backends::scalar::{native_lanes, REGISTER_BYTES};
pub use traits::{select, Primitives};
