//! Error types for array operations
//!
//! Only a handful of operations can fail at runtime: checked lane access,
//! resizing, and the strided memory operations that compute addresses from
//! lane indices. Everything else is either infallible or rejected at compile
//! time.

use thiserror::Error;

/// Core error type for fallible array operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Lane index outside `0..size`
    #[error("out of range access (tried to access index {index} in an array of size {size})")]
    Bounds { index: usize, size: usize },

    /// Resize to a width other than the static one
    #[error("incompatible size for static array: requested {requested}, width is {width}")]
    Shape { requested: usize, width: usize },

    /// A memory index lane holds a negative or unrepresentable value
    #[error("invalid memory index in lane {lane}")]
    InvalidIndex { lane: usize },

    /// A lane address falls outside the caller's buffer
    #[error("invalid address in lane {lane}: byte offset {offset} exceeds buffer of {len} bytes")]
    InvalidAddress { lane: usize, offset: usize, len: usize },

    /// Output slice too short for a compressing store
    #[error("insufficient capacity: need {needed} slots, {available} available")]
    InsufficientCapacity { needed: usize, available: usize },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for an out-of-range lane index
    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::Bounds { index, size }
    }

    /// Create an error for a resize to the wrong width
    pub fn shape_mismatch(requested: usize, width: usize) -> Self {
        Self::Shape { requested, width }
    }

    /// Create an error for a lane whose address leaves the buffer
    pub fn invalid_address(lane: usize, offset: usize, len: usize) -> Self {
        Self::InvalidAddress { lane, offset, len }
    }
}
