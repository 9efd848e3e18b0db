//! Cumulative growth of percentage-point return series.
//!
//! Returns are expressed in percentage points: `10.0` is a +10% year.
//! The growth multiplier after year `i` is `C_i = Π_{j≤i} (1 + r_j / 100)`.

/// Growth multiplier for a single year's percentage-point return.
#[inline]
pub fn growth_factor(return_pct: f64) -> f64 {
    1.0 + return_pct / 100.0
}

/// Final cumulative growth multiplier `C_n`. One for an empty series.
pub fn cumulative(returns: &[f64]) -> f64 {
    returns.iter().map(|&r| growth_factor(r)).product()
}

/// Cumulative growth multipliers `C_1 … C_n`.
pub fn cumulative_list(returns: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(returns.len());
    cumulative_list_into(returns, &mut out);
    out
}

/// Writes `C_1 … C_n` into `out`, reusing its capacity.
///
/// `out` is cleared first.
pub fn cumulative_list_into(returns: &[f64], out: &mut Vec<f64>) {
    out.clear();
    let mut c = 1.0;
    for &r in returns {
        c *= growth_factor(r);
        out.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cumulative_list() {
        let c = cumulative_list(&[10.0, -50.0, 100.0]);
        assert_eq!(c.len(), 3);
        assert_relative_eq!(c[0], 1.1);
        assert_relative_eq!(c[1], 0.55);
        assert_relative_eq!(c[2], 1.1);
    }

    #[test]
    fn test_cumulative_matches_last_of_list() {
        let returns = [3.0, -7.5, 12.25, 0.0, 4.4];
        let list = cumulative_list(&returns);
        assert_relative_eq!(cumulative(&returns), *list.last().unwrap());
    }

    #[test]
    fn test_cumulative_empty() {
        assert_eq!(cumulative(&[]), 1.0);
        assert!(cumulative_list(&[]).is_empty());
    }

    #[test]
    fn test_cumulative_list_into_reuses_buffer() {
        let mut buf = vec![9.0; 16];
        let cap = buf.capacity();
        cumulative_list_into(&[-1.0, -1.0], &mut buf);
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.capacity(), cap);
        assert_relative_eq!(buf[1], 0.9801);
    }
}
