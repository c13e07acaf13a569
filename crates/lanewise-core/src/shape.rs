//! Recursive width composition
//!
//! Any array width decomposes into a power-of-two leading part and a
//! remainder. Backends use the decomposition to run wide or oddly sized
//! arrays as a sequence of register-sized blocks, and reductions follow the
//! same tree so a wide reduction equals the reduction of its halves.
//!
//! ```rust
//! use lanewise_core::shape::{lpow2, WidthSplit};
//!
//! assert_eq!(lpow2(6), 4);
//! assert_eq!(WidthSplit::of(7), WidthSplit { size: 7, size1: 4, size2: 3 });
//! assert_eq!(WidthSplit::of(8), WidthSplit { size: 8, size1: 8, size2: 0 });
//! ```

use std::ops::Range;

/// Largest power of two not exceeding `n` (0 for 0)
pub const fn lpow2(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        1 << (usize::BITS - 1 - n.leading_zeros())
    }
}

/// Compile-time shape descriptor of one array width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidthSplit {
    pub size: usize,
    /// Power-of-two leading part
    pub size1: usize,
    /// Remainder, zero when `size` is a power of two
    pub size2: usize,
}

impl WidthSplit {
    pub const fn of(size: usize) -> Self {
        let size1 = lpow2(size);
        Self {
            size,
            size1,
            size2: size - size1,
        }
    }

    pub const fn is_power_of_two(&self) -> bool {
        self.size2 == 0
    }

    /// Split into two non-empty halves, or `None` for widths below 2
    ///
    /// Power-of-two widths halve, others split at `size1`.
    pub const fn halves(&self) -> Option<(usize, usize)> {
        if self.size < 2 {
            None
        } else if self.is_power_of_two() {
            Some((self.size / 2, self.size / 2))
        } else {
            Some((self.size1, self.size2))
        }
    }
}

/// Visit `0..len` as consecutive blocks no wider than `native`
///
/// Widths above `native` are split recursively along [`WidthSplit`]; each
/// visited block is either a full native register or the tail of a split.
pub fn for_each_block<F: FnMut(Range<usize>)>(len: usize, native: usize, f: &mut F) {
    visit_blocks(0, len, native.max(1), f);
}

fn visit_blocks<F: FnMut(Range<usize>)>(start: usize, len: usize, native: usize, f: &mut F) {
    if len == 0 {
        return;
    }
    match WidthSplit::of(len).halves() {
        Some((lo, hi)) if len > native => {
            visit_blocks(start, lo, native, f);
            visit_blocks(start + lo, hi, native, f);
        }
        _ => f(start..start + len),
    }
}

/// Reduce a slice pairwise along the width decomposition tree
///
/// Returns `None` for an empty slice.
pub fn reduce<T: Copy, F: Fn(T, T) -> T>(lanes: &[T], op: &F) -> Option<T> {
    match WidthSplit::of(lanes.len()).halves() {
        None => lanes.first().copied(),
        Some((lo, _)) => {
            let (head, tail) = lanes.split_at(lo);
            Some(op(reduce(head, op)?, reduce(tail, op)?))
        }
    }
}
