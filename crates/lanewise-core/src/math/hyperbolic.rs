//! Hyperbolic functions and their inverses
//!
//! The approximations are built on `exp` and `log` of the same array type.
//! Near zero, where the closed forms cancel, the functions fall back to the
//! identity.

use super::{approximate, lit, sign_mask};
use crate::base::FloatMath;
use crate::math::Exponential;
use num_traits::Float;

const SMALL: f64 = 1e-2;

#[inline]
fn exp_pair<A: Exponential>(x: A) -> (A, A) {
    let e0 = x.exp();
    (e0, e0.rcp())
}

#[inline]
fn near_zero<A: FloatMath>(x: A) -> A::Mask {
    x.abs().cmp_lt(lit(SMALL))
}

pub trait Hyperbolic: Exponential {
    /// Approximate: within 178 ulp
    fn sinh(self) -> Self {
        if approximate::<Self>() {
            let (e0, e1) = exp_pair(self);
            Self::select(near_zero(self), self, (e0 - e1) * lit(0.5))
        } else {
            self.map_lanes(<Self::Value as Float>::sinh)
        }
    }

    /// Approximate: within 2 ulp
    fn cosh(self) -> Self {
        if approximate::<Self>() {
            let (e0, e1) = exp_pair(self);
            (e0 + e1) * lit(0.5)
        } else {
            self.map_lanes(<Self::Value as Float>::cosh)
        }
    }

    fn sincosh(self) -> (Self, Self) {
        if approximate::<Self>() {
            let (e0, e1) = exp_pair(self);
            let half = lit::<Self>(0.5);
            (
                Self::select(near_zero(self), self, (e0 - e1) * half),
                (e0 + e1) * half,
            )
        } else {
            (self.sinh(), self.cosh())
        }
    }

    /// Approximate: within 357 ulp
    fn tanh(self) -> Self {
        if approximate::<Self>() {
            let (e0, e1) = exp_pair(self);
            Self::select(near_zero(self), self, (e0 - e1) / (e0 + e1))
        } else {
            self.map_lanes(<Self::Value as Float>::tanh)
        }
    }

    fn csch(self) -> Self {
        if approximate::<Self>() {
            let (e0, e1) = exp_pair(self);
            lit::<Self>(2.0) / (e0 - e1)
        } else {
            self.sinh().rcp()
        }
    }

    fn sech(self) -> Self {
        if approximate::<Self>() {
            let (e0, e1) = exp_pair(self);
            lit::<Self>(2.0) / (e0 + e1)
        } else {
            self.cosh().rcp()
        }
    }

    fn coth(self) -> Self {
        if approximate::<Self>() {
            let (e0, e1) = exp_pair(self);
            (e0 + e1) / (e0 - e1)
        } else {
            self.tanh().rcp()
        }
    }

    /// Approximate: within 178 ulp; evaluated on `|x|` with the sign copied back
    fn asinh(self) -> Self {
        if approximate::<Self>() {
            let x = self.abs();
            let r = (x + (lit::<Self>(1.0) + x * x).sqrt()).log() | sign_mask(self);
            Self::select(near_zero(self), self, r)
        } else {
            self.map_lanes(<Self::Value as Float>::asinh)
        }
    }

    /// Defined for `x >= 1`. Approximate: within 123 ulp
    fn acosh(self) -> Self {
        if approximate::<Self>() {
            let one = lit::<Self>(1.0);
            (self + (self - one).sqrt() * (self + one).sqrt()).log()
        } else {
            self.map_lanes(<Self::Value as Float>::acosh)
        }
    }

    /// Defined on `(-1, 1)`. Approximate: within 358 ulp
    fn atanh(self) -> Self {
        if approximate::<Self>() {
            let one = lit::<Self>(1.0);
            let r = lit::<Self>(0.5) * ((one + self) / (one - self)).log();
            Self::select(near_zero(self), self, r)
        } else {
            self.map_lanes(<Self::Value as Float>::atanh)
        }
    }
}
