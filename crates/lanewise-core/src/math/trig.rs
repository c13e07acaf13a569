//! Trigonometric functions
//!
//! The approximate sine and cosine share one range reduction: the argument
//! is reduced by multiples of pi/4 (in three steps for extra precision) and
//! the octant selects between the sine and cosine polynomials and the sign.

use super::{approximate, bits, horner, lit, sign_mask};
use crate::base::FloatMath;
use crate::numeric::Scalar;
use crate::primitives::Primitives;
use num_traits::Float;
use std::f64::consts::{FRAC_PI_2, PI};

const FOUR_OVER_PI: f64 = 1.27323954473516;
const DP: [f64; 3] = [0.78515625, 2.4187564849853515625e-4, 3.77489497744594108e-8];
const SIN_POLY: [f64; 3] = [-1.9515295891e-4, 8.3321608736e-3, -1.6666654611e-1];
const COS_POLY: [f64; 3] = [2.443315711809948e-5, -1.388731625493765e-3, 4.166664568298827e-2];

const ASIN_POLY: [f64; 7] = [
    0.00227944990024845419940890,
    -0.01109688980710918972127294,
    0.02684475831352801832421248,
    -0.04877412052802108370460564,
    0.08874905480758988950198278,
    -0.21458470981542561024897117,
    1.57079616508886408344826942,
];

const ATAN_POLY: [f64; 7] = [
    0.0078613793713198150252,
    -0.037006525670417265220,
    0.083863120428809689910,
    -0.13486708938456973185,
    0.19881342388439013552,
    -0.33326497518773606976,
    0.99999934166683966009,
];

fn sincos_approx<A: FloatMath>(input: A) -> (A, A) {
    let x = input.abs();

    // Octant index, rounded up to even
    let j = (x * lit(FOUR_OVER_PI)).to_int();
    let j = (j + bits::<A>(1)) & !bits::<A>(1);
    let y = A::from_int(j);

    let shift = <A::Value as Scalar>::BITS - 3;
    let sign_sin = sign_mask(A::from_bits(j.shift_left(shift)) ^ input);
    let sign_cos = sign_mask(A::from_bits((!(j - bits::<A>(2))).shift_left(shift)));

    let x = x - y * lit(DP[0]) - y * lit(DP[1]) - y * lit(DP[2]);
    let z = x * x;
    let s = horner(z, &SIN_POLY) * z * x + x;
    let c = horner(z, &COS_POLY) * z * z - lit::<A>(0.5) * z + lit(1.0);

    let sin_poly = (j & bits::<A>(2)).cmp_eq(bits::<A>(0));
    (
        A::select(sin_poly, s, c) ^ sign_sin,
        A::select(sin_poly, c, s) ^ sign_cos,
    )
}

/// `acos(|x|)` on `[0, 1]`
#[inline]
fn acos_kernel<A: FloatMath>(x: A) -> A {
    horner(x, &ASIN_POLY) * (lit::<A>(1.0) - x).sqrt()
}

fn asin_approx<A: FloatMath>(input: A) -> A {
    let x = input.abs();
    let invalid = x.cmp_gt(lit(1.0));
    let negative = input.cmp_lt(lit(0.0));

    let t = lit::<A>(FRAC_PI_2) - acos_kernel(x);
    let large = t - A::select(negative, lit(2.0), lit(0.0)) * t;
    let small = input + input * input * input / lit(6.0);
    A::select(x.cmp_gt(lit(0.05)), large, small) | A::from_mask(invalid)
}

fn acos_approx<A: FloatMath>(input: A) -> A {
    let x = input.abs();
    let invalid = x.cmp_gt(lit(1.0));
    let negative = input.cmp_lt(lit(0.0));

    let t = acos_kernel(x);
    let t = t - A::select(negative, lit(2.0), lit(0.0)) * t;
    (t + A::select(negative, lit(PI), lit(0.0))) | A::from_mask(invalid)
}

fn atan2_approx<A: FloatMath>(y: A, x: A) -> A {
    let (ay, ax) = (y.abs(), x.abs());
    let min = ay.min(ax);
    let max = ax.max(ay);
    let zero = lit::<A>(0.0);

    let ratio = A::select(max.cmp_eq(zero), zero, min * max.rcp());
    let t = horner(ratio * ratio, &ATAN_POLY) * ratio;
    let t = A::select(ay.cmp_gt(ax), lit::<A>(FRAC_PI_2) - t, t);
    let t = A::select(x.cmp_lt(zero), lit::<A>(PI) - t, t);
    A::select(y.cmp_lt(zero), t.negate(), t)
}

/// Trigonometric functions; angles in radians
pub trait Trigonometric: FloatMath {
    /// Approximate: within 19 ulp for `|x| < 8192`
    fn sin(self) -> Self {
        if approximate::<Self>() {
            sincos_approx(self).0
        } else {
            self.map_lanes(<Self::Value as Float>::sin)
        }
    }

    /// Approximate: within 47 ulp for `|x| < 8192`
    fn cos(self) -> Self {
        if approximate::<Self>() {
            sincos_approx(self).1
        } else {
            self.map_lanes(<Self::Value as Float>::cos)
        }
    }

    /// Sine and cosine from one range reduction
    fn sincos(self) -> (Self, Self) {
        if approximate::<Self>() {
            sincos_approx(self)
        } else {
            (self.sin(), self.cos())
        }
    }

    /// Approximate: within 30 ulp for `|x| < 8192`
    fn tan(self) -> Self {
        if approximate::<Self>() {
            let (s, c) = sincos_approx(self);
            s / c
        } else {
            self.map_lanes(<Self::Value as Float>::tan)
        }
    }

    fn csc(self) -> Self {
        self.sin().rcp()
    }

    fn sec(self) -> Self {
        self.cos().rcp()
    }

    fn cot(self) -> Self {
        let (s, c) = self.sincos();
        c / s
    }

    /// NaN outside `[-1, 1]`. Approximate: within 61 ulp
    fn asin(self) -> Self {
        if approximate::<Self>() {
            asin_approx(self)
        } else {
            self.map_lanes(<Self::Value as Float>::asin)
        }
    }

    /// NaN outside `[-1, 1]`. Approximate: within 4 ulp
    fn acos(self) -> Self {
        if approximate::<Self>() {
            acos_approx(self)
        } else {
            self.map_lanes(<Self::Value as Float>::acos)
        }
    }

    fn atan(self) -> Self {
        if approximate::<Self>() {
            atan2_approx(self, Self::splat(<Self::Value as Scalar>::ONE))
        } else {
            self.map_lanes(<Self::Value as Float>::atan)
        }
    }

    /// Four-quadrant arctangent of `self / x`. Approximate: within 12 ulp
    fn atan2(self, x: Self) -> Self {
        if approximate::<Self>() {
            atan2_approx(self, x)
        } else {
            Self::from_fn(|i| self.coeff(i).atan2(*x.coeff(i)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::testing::{sweep, Approx8};
    use crate::prelude::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn test_exact_matches_scalar() {
        let x = Array::<f64, 4>::new([0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2]);
        let (s, c) = x.sincos();
        for i in 0..4 {
            assert_eq!(s[i], x[i].sin());
            assert_eq!(c[i], x[i].cos());
        }
        assert_eq!(x.sin()[1], 1.0);
        assert_eq!(x.tan()[0], 0.0);
    }

    #[test]
    fn test_exact_inverse_functions() {
        let x = Array::<f32, 3>::new([-1.0, 0.5, 2.0]);
        assert_eq!(x.asin()[1], 0.5f32.asin());
        assert_eq!(x.acos()[0], (-1.0f32).acos());
        assert!(x.asin()[2].is_nan());
        let y = Array::<f64, 2>::new([1.0, -1.0]);
        let q = y.atan2(Array::new([-1.0, -1.0]));
        assert_relative_eq!(q[0], 3.0 * FRAC_PI_4);
        assert_relative_eq!(q[1], -3.0 * FRAC_PI_4);
    }

    #[test]
    fn test_reciprocal_functions() {
        let x = Array::<f64, 2>::new([FRAC_PI_4, 1.0]);
        assert_relative_eq!(x.cot()[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(x.csc()[1], 1.0 / 1.0f64.sin());
        assert_relative_eq!(x.sec()[1], 1.0 / 1.0f64.cos());
    }

    #[test]
    fn test_approx_sincos() {
        sweep((-10.0, 10.0), 401, Trigonometric::sin, f64::sin, 1e-5, 0.0);
        sweep((-10.0, 10.0), 401, Trigonometric::cos, f64::cos, 1e-5, 0.0);
        sweep((-1.4, 1.4), 201, Trigonometric::tan, f64::tan, 1e-5, 1e-5);
    }

    #[test]
    fn test_approx_sincos_special_points() {
        let x = Approx8::new([0.0, -0.0, 1.0, -1.0, 3.0, -3.0, 100.0, 6.0]);
        let (s, c) = x.sincos();
        assert_eq!(s[0], 0.0);
        assert_eq!(c[0], 1.0);
        assert!(s[3] < 0.0 && c[3] > 0.0);
        assert!(s[5] < 0.0 && c[5] < 0.0);
        assert!((s[6] as f64 - 100.0f64.sin()).abs() < 1e-4);
    }

    #[test]
    fn test_approx_inverse() {
        sweep((-1.0, 1.0), 401, Trigonometric::asin, f64::asin, 1e-5, 0.0);
        sweep((-1.0, 1.0), 401, Trigonometric::acos, f64::acos, 1e-5, 0.0);
        sweep((-50.0, 50.0), 401, Trigonometric::atan, f64::atan, 1e-5, 0.0);

        let out_of_range = Approx8::new([1.5, -1.5, 2.0, -2.0, 1.01, -1.01, 10.0, -10.0]);
        assert!(out_of_range.asin().is_nan().all());
        assert!(out_of_range.acos().is_nan().all());
    }

    #[test]
    fn test_approx_atan2_quadrants() {
        let y = Approx8::new([1.0, 1.0, -1.0, -1.0, 0.0, 2.0, 0.0, -3.0]);
        let x = Approx8::new([1.0, -1.0, -1.0, 1.0, 1.0, 0.0, 0.0, 0.5]);
        let got = y.atan2(x);
        for i in 0..8 {
            let want = f64::from(y[i]).atan2(f64::from(x[i]));
            assert_relative_eq!(f64::from(got[i]), want, epsilon = 1e-5);
        }
    }
}
