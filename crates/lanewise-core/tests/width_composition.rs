//! Width composition consistency
//!
//! Every elementwise operation on an array must equal the concatenation of
//! the same operation on its split halves, and reductions must combine the
//! reductions of the halves, for every width.

mod common;

use common::*;
use lanewise_core::prelude::*;
use lanewise_core::shape::{for_each_block, WidthSplit};
use proptest::prelude::*;

fn check_float<const N: usize, const A: usize, const B: usize>(data: &[f32]) {
    assert_eq!(WidthSplit::of(N), Array::<f32, N>::SPLIT);
    let a = Array::<f32, N>::from_fn(|i| data[i % data.len()]);
    let b = Array::<f32, N>::from_fn(|i| data[(i * 7 + 3) % data.len()]);
    let (alo, ahi) = a.split::<A, B>();
    let (blo, bhi) = b.split::<A, B>();

    assert_eq!(Array::concat(alo, ahi), a, "width {N}");
    assert_eq!(Array::concat(alo + blo, ahi + bhi), a + b, "add, width {N}");
    assert_eq!(Array::concat(alo * blo, ahi * bhi), a * b, "mul, width {N}");
    assert_eq!(Array::concat(alo.min(blo), ahi.min(bhi)), a.min(b), "min, width {N}");
    assert_eq!(Array::concat(alo.abs().sqrt(), ahi.abs().sqrt()), a.abs().sqrt(), "sqrt, width {N}");
    assert_eq!(Array::concat(alo.floor(), ahi.floor()), a.floor(), "floor, width {N}");
    assert_eq!(
        Array::concat(select(alo.cmp_lt(blo), alo, blo), select(ahi.cmp_lt(bhi), ahi, bhi)),
        select(a.cmp_lt(b), a, b),
        "select, width {N}"
    );
    assert_eq!(Array::concat(alo.negate(), ahi.negate()), a.negate(), "negate, width {N}");

    let approx = a.with_config::<Approx>();
    let (plo, phi) = approx.split::<A, B>();
    assert_eq!(Array::concat(plo.sin(), phi.sin()), approx.sin(), "approx sin, width {N}");
    assert_eq!(Array::concat(plo.exp(), phi.exp()), approx.exp(), "approx exp, width {N}");

    if B > 0 {
        assert_eq!(a.hsum(), alo.hsum() + ahi.hsum(), "hsum, width {N}");
        assert_eq!(a.hprod(), alo.hprod() * ahi.hprod(), "hprod, width {N}");
        assert_eq!(a.hmax(), alo.hmax().max(ahi.hmax()), "hmax, width {N}");
    }
}

fn check_integer<const N: usize, const A: usize, const B: usize>(data: &[f32]) {
    let a = Array::<i16, N>::from_fn(|i| data[i % data.len()] as i16);
    let (lo, hi) = a.split::<A, B>();
    assert_eq!(Array::concat(lo.rol(3), hi.rol(3)), a.rol(3), "rol, width {N}");
    assert_eq!(Array::concat(lo.shift_right(2), hi.shift_right(2)), a.shift_right(2), "sra, width {N}");
    assert_eq!(Array::concat(lo * lo, hi * hi), a * a, "wrapping mul, width {N}");
    assert_eq!(Array::concat(!lo, !hi), !a, "complement, width {N}");
}

macro_rules! for_each_width {
    ($check:ident, $data:expr; $($n:literal => ($a:literal, $b:literal)),* $(,)?) => {
        $( $check::<$n, $a, $b>($data); )*
    };
}

fn check_all_widths(data: &[f32]) {
    for_each_width!(check_float, data;
        1 => (1, 0), 2 => (2, 0), 3 => (2, 1), 4 => (4, 0), 5 => (4, 1), 6 => (4, 2),
        7 => (4, 3), 8 => (8, 0), 9 => (8, 1), 10 => (8, 2), 11 => (8, 3), 12 => (8, 4),
        13 => (8, 5), 14 => (8, 6), 15 => (8, 7), 16 => (16, 0), 17 => (16, 1),
        31 => (16, 15), 37 => (32, 5),
    );
    for_each_width!(check_integer, data;
        1 => (1, 0), 3 => (2, 1), 5 => (4, 1), 7 => (4, 3), 9 => (8, 1), 16 => (16, 0),
        17 => (16, 1), 37 => (32, 5),
    );
}

#[test]
fn test_widths_fixed_data() {
    let data: Vec<f32> = generate_test_data::<37>()
        .iter()
        .zip(generate_test_data_complement::<37>())
        .map(|(a, b)| a - b)
        .collect();
    check_all_widths(&data);
}

#[test]
fn test_block_visit_covers_every_width() {
    for width in EDGE_CASE_WIDTHS {
        for native in [1, 2, 4, 8, 16] {
            let mut next = 0;
            for_each_block(width, native, &mut |block| {
                assert_eq!(block.start, next);
                assert!(block.len() <= native, "block {block:?} wider than {native}");
                next = block.end;
            });
            assert_eq!(next, width);
        }
    }
}

#[test]
fn test_nested_split() {
    type Row = Array<i32, 3>;
    let m = Array::<Row, 3>::from_fn(|r| Row::from_fn(|c| (r * 3 + c) as i32));
    let (top, bottom) = m.split::<2, 1>();
    assert_eq!(top.hsum_nested() + bottom.hsum_nested(), m.hsum_nested());
    assert_eq!(Array::concat(top, bottom), m);
}

proptest! {
    #[test]
    fn prop_widths_random_data(data in prop::collection::vec(-1.0e3f32..1.0e3, 37)) {
        check_all_widths(&data);
    }
}
