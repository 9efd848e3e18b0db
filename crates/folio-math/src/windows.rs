//! Contiguous fixed-length windows over a series.

use std::slice::Windows;

/// Every contiguous window of length `n`, in order of starting index.
///
/// The windows borrow from `xs`; no data is copied. Yields exactly
/// `xs.len() - n + 1` windows.
///
/// # Panics
///
/// Panics if `n` is zero or larger than `xs.len()`.
pub fn sub_slices<T>(xs: &[T], n: usize) -> Windows<'_, T> {
    assert!(n > 0, "sub_slices: window length must be positive");
    assert!(
        n <= xs.len(),
        "sub_slices: window length {n} exceeds series length {}",
        xs.len()
    );
    xs.windows(n)
}
