//! Binomial coefficients.

/// `C(n, k)`, the number of `k`-element subsets of an `n`-element set.
///
/// Exact integer arithmetic; zero when `k > n`.
///
/// # Panics
///
/// Panics if the result does not fit in a `u64` (beyond roughly `n = 67`
/// at `k = n / 2`).
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc * (n - i) is divisible by (i + 1) at every step.
        acc = acc * u128::from(n - i) / u128::from(i + 1);
    }
    u64::try_from(acc).unwrap_or_else(|_| panic!("binomial({n}, {k}) overflows u64"))
}
