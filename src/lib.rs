//! Short-vector array math
//!
//! Facade over [`lanewise_core`]: fixed-width arrays with a generic numeric
//! API built on a small primitive contract, exact and approximate
//! transcendental functions, masked updates and strided memory access.
//!
//! ```rust
//! use lanewise::prelude::*;
//!
//! let a = Array::<f64, 3>::new([1.0, 4.0, 9.0]);
//! assert_eq!(a.sqrt().into_array(), [1.0, 2.0, 3.0]);
//! ```

pub use lanewise_core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use lanewise_core::prelude::*;
}
