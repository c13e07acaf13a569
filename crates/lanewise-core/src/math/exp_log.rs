//! Exponential, logarithm and power-of-two scaling

use super::{approximate, bits, horner, lit};
use crate::base::FloatMath;
use crate::numeric::FloatScalar;
use crate::primitives::Primitives;
use num_traits::Float;
use std::f64::consts::{FRAC_1_SQRT_2, LOG2_E};

const EXP_LIMIT: f64 = 88.3762626647949;
const LN2_HI: f64 = 0.693359375;
const LN2_LO: f64 = -2.12194440e-4;

const EXP_POLY: [f64; 6] = [
    1.9875691500e-4,
    1.3981999507e-3,
    8.3334519073e-3,
    4.1665795894e-2,
    1.6666665459e-1,
    5.0000001201e-1,
];

const LOG_POLY: [f64; 9] = [
    7.0376836292e-2,
    -1.1514610310e-1,
    1.1676998740e-1,
    -1.2420140846e-1,
    1.4249322787e-1,
    -1.6668057665e-1,
    2.0000714765e-1,
    -2.4999993993e-1,
    3.3333331174e-1,
];

/// `x * 2^n` by building the power of two in the exponent field
///
/// `n` must be integral and keep the biased exponent in range.
#[inline]
fn ldexp_bits<A: FloatMath>(x: A, n: A) -> A {
    let biased = n.to_int() + bits::<A>(u64::from(<A::Value as FloatScalar>::EXPONENT_BIAS));
    x * A::from_bits(biased.shift_left(<A::Value as FloatScalar>::MANTISSA_BITS))
}

/// Mantissa and exponent straight from the bit fields; subnormals are
/// treated as normal numbers
fn frexp_bits<A: FloatMath>(x: A) -> (A, A) {
    let exponent_mask = bits::<A>(<A::Value as FloatScalar>::EXPONENT_MASK);
    let xb = x.to_bits();
    let eb = xb & exponent_mask;
    let normal = x.cmp_ne(lit(0.0)) & eb.cmp_ne(exponent_mask);

    let exponent = eb.shift_right(<A::Value as FloatScalar>::MANTISSA_BITS)
        - bits::<A>(u64::from(<A::Value as FloatScalar>::EXPONENT_BIAS - 1));
    let mantissa = (xb & !exponent_mask) | lit::<A>(0.5).to_bits();
    (
        A::from_bits(<A::Bits as Primitives>::select(normal, mantissa, xb)),
        A::select(normal, A::from_int(exponent), lit(0.0)),
    )
}

fn exp_approx<A: FloatMath>(input: A) -> A {
    let overflow = input.cmp_gt(lit(EXP_LIMIT));
    let underflow = input.cmp_lt(lit(-EXP_LIMIT));

    let n = input.fmadd(lit(LOG2_E), lit(0.5)).floor();
    let x = input - n * lit(LN2_HI) - n * lit(LN2_LO);
    let z = horner(x, &EXP_POLY) * x * x + x + lit(1.0);
    let r = ldexp_bits(z, n);

    let r = A::select(underflow, lit(0.0), r);
    A::select(overflow, A::splat(<A::Value as Float>::infinity()), r)
}

fn log_approx<A: FloatMath>(input: A) -> A {
    let valid = input.cmp_ge(lit(0.0));
    let x = input.max(A::splat(<A::Value as Float>::min_positive_value()));
    let (x, e) = frexp_bits(x);

    let below = x.cmp_lt(lit(FRAC_1_SQRT_2));
    let e = e - A::select(below, lit(1.0), lit(0.0));
    let x = x + A::select(below, x, lit(0.0)) - lit(1.0);

    let z = x * x;
    let y = horner(x, &LOG_POLY) * x * z + e * lit(LN2_LO) - lit::<A>(0.5) * z;
    let r = (x + y + e * lit(LN2_HI)) | A::from_mask(!valid);

    let infinity = A::splat(<A::Value as Float>::infinity());
    let r = A::select(input.cmp_eq(lit(0.0)), A::splat(<A::Value as Float>::neg_infinity()), r);
    A::select(input.cmp_eq(infinity), infinity, r)
}

/// Exponential family
pub trait Exponential: FloatMath {
    /// `e^x`; overflows to infinity and underflows to zero.
    /// Approximate: within 1 ulp on `[-20, 30]`
    fn exp(self) -> Self {
        if approximate::<Self>() {
            exp_approx(self)
        } else {
            self.map_lanes(<Self::Value as Float>::exp)
        }
    }

    /// Natural logarithm; NaN for negative lanes, `-inf` at zero
    fn log(self) -> Self {
        if approximate::<Self>() {
            log_approx(self)
        } else {
            self.map_lanes(<Self::Value as Float>::ln)
        }
    }

    /// `self^y`; the approximation goes through `exp(log(self) * y)` and so
    /// only covers positive bases
    fn pow(self, y: Self) -> Self {
        if approximate::<Self>() {
            (self.log() * y).exp()
        } else {
            Self::from_fn(|i| self.coeff(i).powf(*y.coeff(i)))
        }
    }

    /// `self * 2^n`, with `n` truncated to an integer.
    /// The approximation does not saturate: the result must be a normal number
    fn ldexp(self, n: Self) -> Self {
        if approximate::<Self>() {
            ldexp_bits(self, n)
        } else {
            Self::from_fn(|i| FloatScalar::ldexp(*self.coeff(i), *n.coeff(i)))
        }
    }

    /// Split into a mantissa with magnitude in `[0.5, 1)` and an exponent.
    ///
    /// Zero, infinities and NaN come back unchanged with exponent zero. The
    /// approximation does not handle subnormal inputs.
    fn frexp(self) -> (Self, Self) {
        if approximate::<Self>() {
            frexp_bits(self)
        } else {
            let mut exponents = self;
            let mantissas = Self::from_fn(|i| {
                let (m, e) = FloatScalar::frexp(*self.coeff(i));
                *exponents.coeff_mut(i) = e;
                m
            });
            (mantissas, exponents)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::testing::{sweep, Approx8};
    use crate::prelude::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_frexp_both_modes() {
        let exact = Array::<f32, 4>::new([8.0, -3.0, 0.0, 0.75]);
        let approx = exact.with_config::<Approx>();
        let (m, e) = exact.frexp();
        let (am, ae) = approx.frexp();
        for mantissas in [m.into_array(), am.into_array()] {
            assert_eq!(mantissas, [0.5, -0.75, 0.0, 0.75]);
        }
        for exponents in [e.into_array(), ae.into_array()] {
            assert_eq!(exponents, [4.0, 2.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn test_ldexp_both_modes() {
        let x = Array::<f32, 3>::new([0.5, -1.5, 3.0]);
        let n = Array::<f32, 3>::new([4.0, -1.0, 2.7]);
        assert_eq!(x.ldexp(n).into_array(), [8.0, -0.75, 12.0]);
        let x = x.with_config::<Approx>();
        assert_eq!(x.ldexp(n.with_config()).into_array(), [8.0, -0.75, 12.0]);
    }

    #[test]
    fn test_frexp_ldexp_inverse() {
        let x = Array::<f64, 4>::new([1e-310, 123.456, -7.0e200, 1.0]);
        let (m, e) = x.frexp();
        assert_eq!(m.ldexp(e), x);
    }

    #[test]
    fn test_exact_exp_log() {
        let x = Array::<f64, 3>::new([0.0, 1.0, -2.5]);
        assert_eq!(x.exp()[1], 1.0f64.exp());
        let logs = Array::<f64, 3>::new([1.0, 0.0, -1.0]).log();
        assert_eq!(logs[0], 0.0);
        assert_eq!(logs[1], f64::NEG_INFINITY);
        assert!(logs[2].is_nan());
        let p = Array::<f64, 2>::new([2.0, 9.0]).pow(Array::new([10.0, 0.5]));
        assert_eq!(p[0], 1024.0);
        assert_relative_eq!(p[1], 3.0);
    }

    #[test]
    fn test_approx_exp() {
        sweep((-20.0, 20.0), 401, Exponential::exp, f64::exp, 0.0, 1e-5);
        let edges = Approx8::new([0.0, 89.0, -89.0, f32::INFINITY, f32::NEG_INFINITY, 1.0, -1.0, 88.0]);
        let r = edges.exp();
        assert_eq!(r[0], 1.0);
        assert_eq!(r[1], f32::INFINITY);
        assert_eq!(r[2], 0.0);
        assert_eq!(r[3], f32::INFINITY);
        assert_eq!(r[4], 0.0);
        assert!(r[7].is_finite());
    }

    #[test]
    fn test_approx_log() {
        sweep((1e-3, 1000.0), 801, Exponential::log, f64::ln, 1e-6, 1e-5);
        let edges = Approx8::new([0.0, -1.0, f32::INFINITY, f32::NAN, 1.0, 2.0, 0.5, 1e-30]);
        let r = edges.log();
        assert_eq!(r[0], f32::NEG_INFINITY);
        assert!(r[1].is_nan());
        assert_eq!(r[2], f32::INFINITY);
        assert!(r[3].is_nan());
        assert_eq!(r[4], 0.0);
        assert_relative_eq!(r[5], std::f32::consts::LN_2, max_relative = 1e-6);
        assert_relative_eq!(r[7], 1e-30f32.ln(), max_relative = 1e-5);
    }

    #[test]
    fn test_approx_pow() {
        let base = Approx8::new([2.0, 10.0, 0.5, 3.0, 1.0, 7.0, 100.0, 1.5]);
        let exponent = Approx8::new([10.0, -2.0, 3.0, 0.5, 42.0, 0.0, 1.5, 2.0]);
        let r = base.pow(exponent);
        for i in 0..8 {
            let want = f64::from(base[i]).powf(f64::from(exponent[i]));
            assert_relative_eq!(f64::from(r[i]), want, max_relative = 1e-5);
        }
    }
}
