//! Descriptive statistics over `f64` slices.

/// Sum of all values. Zero for an empty slice.
#[inline]
pub fn sum(xs: &[f64]) -> f64 {
    xs.iter().sum()
}

/// Product of all values. One for an empty slice.
#[inline]
pub fn product(xs: &[f64]) -> f64 {
    xs.iter().product()
}

/// Arithmetic mean.
///
/// # Panics
///
/// Panics if `xs` is empty.
pub fn mean(xs: &[f64]) -> f64 {
    assert!(!xs.is_empty(), "mean: empty input");
    sum(xs) / xs.len() as f64
}

/// Population standard deviation (divides by `N`, not `N - 1`).
///
/// # Panics
///
/// Panics if `xs` is empty.
pub fn std_dev(xs: &[f64]) -> f64 {
    assert!(!xs.is_empty(), "std_dev: empty input");
    let m = mean(xs);
    let variance = xs.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / xs.len() as f64;
    variance.sqrt()
}

/// Harmonic mean of strictly positive values.
///
/// The harmonic mean never exceeds the arithmetic mean, with equality only
/// when every value is identical.
///
/// # Panics
///
/// Panics if `xs` is empty or contains a value that is not strictly positive.
pub fn harmonic_mean(xs: &[f64]) -> f64 {
    assert!(!xs.is_empty(), "harmonic_mean: empty input");
    let mut reciprocal_sum = 0.0;
    for (i, &x) in xs.iter().enumerate() {
        assert!(x > 0.0, "harmonic_mean: non-positive input {x} at index {i}");
        reciprocal_sum += 1.0 / x;
    }
    xs.len() as f64 / reciprocal_sum
}
