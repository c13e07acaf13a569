//! Masked-update wrapper
//!
//! `a.masked(m).add(b)` updates only the lanes of `a` selected by `m`:
//!
//! ```rust
//! use lanewise_core::prelude::*;
//!
//! let mut a = Array::<i32, 4>::new([10, 20, 30, 40]);
//! let m = Mask::new([true, false, true, false]);
//! a.masked(m).add(Array::splat(1));
//! assert_eq!(a.into_array(), [11, 20, 31, 40]);
//! ```

use crate::primitives::Primitives;

/// Borrowed target plus a mask; every operation writes selected lanes only
pub struct Masked<'a, A: Primitives> {
    target: &'a mut A,
    mask: A::Mask,
}

impl<'a, A: Primitives> Masked<'a, A> {
    pub fn new(target: &'a mut A, mask: A::Mask) -> Self {
        Self { target, mask }
    }

    pub fn mask(&self) -> A::Mask {
        self.mask
    }

    pub fn assign(&mut self, value: A) {
        self.target.assign_masked(value, self.mask);
    }

    pub fn add(&mut self, value: A) {
        self.target.add_masked(value, self.mask);
    }

    pub fn sub(&mut self, value: A) {
        self.target.sub_masked(value, self.mask);
    }

    pub fn mul(&mut self, value: A) {
        self.target.mul_masked(value, self.mask);
    }

    pub fn div(&mut self, value: A) {
        self.target.div_masked(value, self.mask);
    }

    pub fn or(&mut self, value: A) {
        self.target.or_masked(value, self.mask);
    }

    pub fn and(&mut self, value: A) {
        self.target.and_masked(value, self.mask);
    }

    pub fn xor(&mut self, value: A) {
        self.target.xor_masked(value, self.mask);
    }
}
