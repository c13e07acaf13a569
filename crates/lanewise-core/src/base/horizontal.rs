//! Horizontal reductions
//!
//! Reductions combine lanes pairwise along the width decomposition (see
//! [`crate::shape::reduce`]), so reducing an array equals combining the
//! reductions of its two halves. For nested arrays the plain forms reduce the
//! outer dimension only; the `_nested` forms recurse down to a leaf scalar.

use crate::array::Array;
use crate::base::ArrayBase;
use crate::config::Config;
use crate::numeric::{Lane, Scalar};
use crate::shape::reduce;

pub trait Horizontal: ArrayBase {
    /// Sum of all lanes (zero for an empty array)
    fn hsum(&self) -> Self::Value {
        reduce(self.as_slice(), &<Self::Value as Lane>::lane_add).unwrap_or_default()
    }

    /// Product of all lanes (one for an empty array)
    fn hprod(&self) -> Self::Value {
        reduce(self.as_slice(), &<Self::Value as Lane>::lane_mul)
            .unwrap_or_else(|| <Self::Value as Lane>::splat_leaf(<<Self::Value as Lane>::Leaf as Scalar>::ONE))
    }

    /// Smallest lane (`Default` for an empty array)
    fn hmin(&self) -> Self::Value {
        reduce(self.as_slice(), &<Self::Value as Lane>::lane_min).unwrap_or_default()
    }

    /// Largest lane (`Default` for an empty array)
    fn hmax(&self) -> Self::Value {
        reduce(self.as_slice(), &<Self::Value as Lane>::lane_max).unwrap_or_default()
    }

    fn hsum_nested(&self) -> <Self::Value as Lane>::Leaf {
        self.hsum().sum_nested()
    }

    fn hprod_nested(&self) -> <Self::Value as Lane>::Leaf {
        self.hprod().product_nested()
    }

    fn hmin_nested(&self) -> <Self::Value as Lane>::Leaf {
        self.hmin().min_nested()
    }

    fn hmax_nested(&self) -> <Self::Value as Lane>::Leaf {
        self.hmax().max_nested()
    }

    /// Sum of lane-wise products
    fn dot(&self, rhs: &Self) -> Self::Value {
        Self::from_fn(|i| self.coeff(i).lane_mul(*rhs.coeff(i))).hsum()
    }
}

impl<T: Lane, const N: usize, C: Config> Horizontal for Array<T, N, C> {}
