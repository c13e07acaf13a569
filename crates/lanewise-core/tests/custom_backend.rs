//! A second backend that implements only the primitive contract
//!
//! `Quad` stores four `f32` lanes in its own type. It supplies `ArrayBase`,
//! the operator traits and `Primitives`; every other operation comes from
//! the default methods of the higher-level traits.

mod common;

use common::*;
use lanewise_core::prelude::*;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Not, Sub};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Quad([f32; 4]);

type QuadBits = Array<u32, 4>;

impl Quad {
    fn zip(self, rhs: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self(std::array::from_fn(|i| f(self.0[i], rhs.0[i])))
    }

    fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self(self.0.map(f))
    }

    fn compare(self, rhs: Self, f: impl Fn(f32, f32) -> bool) -> Mask<4> {
        Mask::from_fn(|i| f(self.0[i], rhs.0[i]))
    }
}

impl ArrayBase for Quad {
    type Value = f32;
    const SIZE: usize = 4;

    fn coeff(&self, i: usize) -> &f32 {
        &self.0[i]
    }

    fn coeff_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.0[i]
    }

    fn from_fn<F: FnMut(usize) -> f32>(f: F) -> Self {
        Self(std::array::from_fn(f))
    }

    fn as_slice(&self) -> &[f32] {
        &self.0
    }

    fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.0
    }
}

macro_rules! quad_arith {
    ($($trait:ident :: $method:ident => $op:tt),*) => {$(
        impl $trait for Quad {
            type Output = Self;
            fn $method(self, rhs: Self) -> Self {
                self.zip(rhs, |a, b| a $op b)
            }
        }
    )*};
}

macro_rules! quad_bits {
    ($($trait:ident :: $method:ident => $op:tt),*) => {$(
        impl $trait for Quad {
            type Output = Self;
            fn $method(self, rhs: Self) -> Self {
                self.zip(rhs, |a, b| f32::from_bits(a.to_bits() $op b.to_bits()))
            }
        }
    )*};
}

quad_arith!(Add::add => +, Sub::sub => -, Mul::mul => *, Div::div => /);
quad_bits!(BitAnd::bitand => &, BitOr::bitor => |, BitXor::bitxor => ^);

impl Not for Quad {
    type Output = Self;
    fn not(self) -> Self {
        self.map(|a| f32::from_bits(!a.to_bits()))
    }
}

impl Primitives for Quad {
    type Mask = Mask<4>;
    type Bits = QuadBits;
    type Config = Exact;

    fn backend_name(&self) -> &'static str {
        "quad-test"
    }

    fn splat(value: f32) -> Self {
        Self([value; 4])
    }

    fn to_bits(self) -> QuadBits {
        QuadBits::from_fn(|i| self.0[i].to_bits())
    }

    fn from_bits(bits: QuadBits) -> Self {
        Self(bits.into_array().map(f32::from_bits))
    }

    fn from_mask(mask: Mask<4>) -> Self {
        Self(std::array::from_fn(|i| if mask.test(i) { f32::from_bits(u32::MAX) } else { 0.0 }))
    }

    fn select(mask: Mask<4>, on_true: Self, on_false: Self) -> Self {
        Self(std::array::from_fn(|i| if mask.test(i) { on_true.0[i] } else { on_false.0[i] }))
    }

    fn cmp_eq(self, rhs: Self) -> Mask<4> {
        self.compare(rhs, |a, b| a == b)
    }

    fn cmp_ne(self, rhs: Self) -> Mask<4> {
        self.compare(rhs, |a, b| a != b)
    }

    fn cmp_lt(self, rhs: Self) -> Mask<4> {
        self.compare(rhs, |a, b| a < b)
    }

    fn cmp_le(self, rhs: Self) -> Mask<4> {
        self.compare(rhs, |a, b| a <= b)
    }

    fn cmp_gt(self, rhs: Self) -> Mask<4> {
        self.compare(rhs, |a, b| a > b)
    }

    fn cmp_ge(self, rhs: Self) -> Mask<4> {
        self.compare(rhs, |a, b| a >= b)
    }

    fn shift_left(self, k: u32) -> Self {
        self.map(|a| f32::from_bits(a.to_bits().wrapping_shl(k)))
    }

    fn shift_right(self, k: u32) -> Self {
        self.map(|a| f32::from_bits(a.to_bits().wrapping_shr(k)))
    }

    fn shift_left_v(self, k: Self) -> Self {
        self.zip(k, |a, k| f32::from_bits(a.to_bits().wrapping_shl(k as u32)))
    }

    fn shift_right_v(self, k: Self) -> Self {
        self.zip(k, |a, k| f32::from_bits(a.to_bits().wrapping_shr(k as u32)))
    }

    fn abs(self) -> Self {
        self.map(f32::abs)
    }

    fn min(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| if a < b { a } else { b })
    }

    fn max(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| if a > b { a } else { b })
    }

    fn sqrt(self) -> Self {
        self.map(f32::sqrt)
    }

    fn floor(self) -> Self {
        self.map(f32::floor)
    }
}

// Opting in is all it takes
impl Horizontal for Quad {}
impl ArrayMath for Quad {}
impl FloatMath for Quad {}
impl MemoryAccess for Quad {}
impl Trigonometric for Quad {}
impl Exponential for Quad {}
impl Hyperbolic for Quad {}
impl ErrorFunction for Quad {}

fn quad(lanes: [f32; 4]) -> Quad {
    Quad(lanes)
}

#[test]
fn test_backend_identity() {
    assert_eq!(Quad::splat(0.0).backend_name(), "quad-test");
    assert_eq!(Array::<f32, 4>::splat(0.0).backend_name(), "scalar");
}

#[test]
fn test_inherited_arithmetic() {
    let a = quad([1.0, -2.0, 3.0, -4.0]);
    let b = quad([0.5, 0.5, 2.0, 2.0]);
    let c = quad([1.0, 1.0, 1.0, 1.0]);
    assert_eq!(a.negate(), quad([-1.0, 2.0, -3.0, 4.0]));
    assert_eq!(a.fmadd(b, c), quad([1.5, 0.0, 7.0, -7.0]));
    assert_eq!(a.fmaddsub(b, c), quad([-0.5, 0.0, 5.0, -7.0]));
    assert_eq!(a.fnmsub(b, c), quad([-1.5, 0.0, -7.0, 7.0]));
    assert_eq!(a.hsum(), -2.0);
    assert_eq!(a.dot(&b), -2.5);
    assert_eq!(a.rcp(), quad([1.0, -0.5, 1.0 / 3.0, -0.25]));
}

#[test]
fn test_inherited_masked_and_memory() {
    let mut a = quad([1.0, 2.0, 3.0, 4.0]);
    a.masked(Mask::new([false, true, false, true])).mul(Quad::splat(10.0));
    assert_eq!(a, quad([1.0, 20.0, 3.0, 40.0]));

    let memory = [0.0f32, 0.5, 1.0, 1.5, 2.0];
    let index = Array::<u32, 4>::new([4, 0, 2, 2]);
    let gathered = Quad::gather::<4>(&memory, &index).unwrap();
    assert_eq!(gathered, quad([2.0, 0.0, 1.0, 1.0]));

    let mut target = [0.0f32; 5];
    a.scatter_masked::<4>(&mut target, &index, Mask::new([true, true, false, false])).unwrap();
    assert_eq!(target, [20.0, 0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn test_inherited_transcendentals_match_array_backend() {
    let lanes = [0.3f32, -1.2, 2.5, 0.01];
    let q = quad(lanes);
    let a = Array::<f32, 4>::new(lanes);
    assert_eq!(q.sin().0, a.sin().into_array());
    assert_eq!(q.exp().0, a.exp().into_array());
    assert_eq!(q.tanh().0, a.tanh().into_array());
    assert_eq!(q.erf().0, a.erf().into_array());
    assert_eq!(q.round().0, a.round().into_array());

    let expected: Vec<f64> = lanes.iter().map(|&v| f64::from(v).cos()).collect();
    assert_lanes_close(&q.cos().0, &expected, 1e-6, 1e-6, "cos");
}
