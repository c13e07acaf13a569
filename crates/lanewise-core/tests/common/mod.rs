//! Shared utilities for integration tests
#![allow(dead_code)]

pub use approx::assert_relative_eq;

pub const EPSILON: f64 = 1e-10;

/// Array widths that exercise the width decomposition: empty, single lane,
/// register-sized, register plus or minus one, and non-power-of-two tails
pub const EDGE_CASE_WIDTHS: [usize; 14] = [0, 1, 2, 3, 4, 5, 7, 8, 9, 15, 16, 17, 31, 37];

/// Special floating-point values for edge case testing
pub fn special_values() -> Vec<f32> {
    vec![
        0.0,
        -0.0,
        1.0,
        -1.0,
        f32::MIN,
        f32::MAX,
        f32::MIN_POSITIVE,
        -f32::MIN_POSITIVE,
        f32::EPSILON,
        -f32::EPSILON,
        std::f32::consts::PI,
        std::f32::consts::E,
        f32::INFINITY,
        f32::NEG_INFINITY,
        f32::NAN,
    ]
}

/// Assert that computed lanes match reference values within tolerance
///
/// NaN matches NaN; infinities must match exactly.
pub fn assert_lanes_close(actual: &[f32], expected: &[f64], epsilon: f64, max_relative: f64, context: &str) {
    assert_eq!(actual.len(), expected.len(), "length mismatch for {context}");

    for (i, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        let a = f64::from(a);
        if e.is_nan() {
            assert!(a.is_nan(), "{context}: lane {i} expected NaN, got {a}");
        } else if e.is_infinite() {
            assert_eq!(a, e, "{context}: lane {i}");
        } else {
            assert!(
                approx::relative_eq!(a, e, epsilon = epsilon, max_relative = max_relative),
                "{context}: lane {i} got {a}, expected {e}"
            );
        }
    }
}

/// Generate test data with specific patterns
pub fn generate_test_data<const N: usize>() -> [f32; N] {
    std::array::from_fn(|i| i as f32 + 0.1)
}

/// Generate complementary test data for binary operations
pub fn generate_test_data_complement<const N: usize>() -> [f32; N] {
    std::array::from_fn(|i| (N - i) as f32 + 0.2)
}

/// Evenly spaced points on `[lo, hi]`
pub fn grid(lo: f32, hi: f32, points: usize) -> Vec<f32> {
    let step = (hi - lo) / (points.max(2) - 1) as f32;
    (0..points).map(|k| lo + step * k as f32).collect()
}
