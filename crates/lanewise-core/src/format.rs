//! Nested array printing
//!
//! One-dimensional arrays print as `[1, 2, 3]`. Nested arrays put each
//! sub-array on its own line, indented by one space per enclosing level:
//!
//! ```text
//! [[1, 2],
//!  [3, 4]]
//! ```
//!
//! Formatting flags such as precision are forwarded to every leaf.

use crate::array::Array;
use crate::config::Config;
use crate::numeric::Lane;
use std::fmt;

/// Write `lanes` as one bracketed level of a nested array
pub(crate) fn write_nested<T: Lane>(
    lanes: &[T],
    f: &mut fmt::Formatter<'_>,
    depth: usize,
) -> fmt::Result {
    f.write_str("[")?;
    for (i, lane) in lanes.iter().enumerate() {
        if i > 0 {
            if T::DEPTH == 0 {
                f.write_str(", ")?;
            } else {
                f.write_str(",\n")?;
                write!(f, "{:1$}", "", depth + 1)?;
            }
        }
        lane.fmt_nested(f, depth + 1)?;
    }
    f.write_str("]")
}

impl<T: Lane, const N: usize, C: Config> fmt::Display for Array<T, N, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_nested(f, 0)
    }
}
