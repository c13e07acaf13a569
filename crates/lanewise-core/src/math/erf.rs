//! Error function and its inverse
//!
//! Exact mode defers to `statrs`. The approximate `erf` uses the
//! Abramowitz-Stegun 7.1.26 rational fit with a Taylor branch near zero; the
//! approximate inverse is Giles' single-precision polynomial pair.

use super::{approximate, horner, lit, sign_mask};
use crate::math::Exponential;
use crate::numeric::FloatScalar;
use num_traits::Float;

const TWO_OVER_SQRT_PI: f64 = 1.1283791670955126;
const ERF_P: f64 = 0.3275911;
const ERF_POLY: [f64; 5] = [1.061405429, -1.453152027, 1.421413741, -0.284496736, 0.254829592];

const ERF_INV_CENTRAL: [f64; 9] = [
    2.81022636e-08,
    3.43273939e-07,
    -3.5233877e-06,
    -4.39150654e-06,
    0.00021858087,
    -0.00125372503,
    -0.00417768164,
    0.246640727,
    1.50140941,
];

const ERF_INV_TAIL: [f64; 9] = [
    -0.000200214257,
    0.000100950558,
    0.00134934322,
    -0.00367342844,
    0.00573950773,
    -0.0076224613,
    0.00943887047,
    1.00167406,
    2.83297682,
];

fn erf_approx<A: Exponential>(input: A) -> A {
    let x = input.abs();
    let x2 = input * input;

    let t = (lit::<A>(ERF_P) * x + lit(1.0)).rcp();
    let y = horner(t, &ERF_POLY) * t * x2.negate().exp();
    let large = (lit::<A>(1.0) - y) | sign_mask(input);
    let small = input * (x2 * lit(-TWO_OVER_SQRT_PI / 3.0) + lit(TWO_OVER_SQRT_PI));
    A::select(x.cmp_gt(lit(0.08)), large, small)
}

fn erf_inv_approx<A: Exponential>(x: A) -> A {
    let one = lit::<A>(1.0);
    let w = ((one - x) * (one + x)).log().negate();
    let central = horner(w - lit(2.5), &ERF_INV_CENTRAL);
    let tail = horner(w.sqrt() - lit(3.0), &ERF_INV_TAIL);
    let r = A::select(w.cmp_lt(lit(5.0)), central, tail) * x;

    // The tail polynomial diverges with the wrong sign at w = inf
    let infinity = A::splat(<A::Value as Float>::infinity());
    A::select(x.abs().cmp_eq(one), infinity | sign_mask(x), r)
}

pub trait ErrorFunction: Exponential {
    /// Approximate: within 64 ulp
    fn erf(self) -> Self {
        if approximate::<Self>() {
            erf_approx(self)
        } else {
            self.map_lanes(FloatScalar::erf)
        }
    }

    /// Inverse error function; `±inf` at `±1`, NaN outside `[-1, 1]`
    fn erf_inv(self) -> Self {
        if approximate::<Self>() {
            erf_inv_approx(self)
        } else {
            self.map_lanes(FloatScalar::erf_inv)
        }
    }
}
