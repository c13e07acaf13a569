//! Array base layers
//!
//! - [`indexable`]: lane access and shape metadata
//! - [`horizontal`]: reductions across lanes
//! - [`masked`]: masked-update wrapper
//! - [`math`]: generic arithmetic fallbacks over the primitive contract
//! - [`memory`]: gather, scatter, prefetch, transform and compress

pub mod horizontal;
pub mod indexable;
pub mod masked;
pub mod math;
pub mod memory;

pub use horizontal::Horizontal;
pub use indexable::ArrayBase;
pub use masked::Masked;
pub use math::{validate_permutation, ArrayMath, FloatMath, IntegerMath, Permutation};
pub use memory::MemoryAccess;
