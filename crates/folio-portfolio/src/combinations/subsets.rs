//! Streaming `k`-of-`n` subset enumeration.

use std::ops::ControlFlow;

/// Calls `f` once for every `k`-element subset of `items`, where `k` is
/// `buf.len()`.
///
/// Subsets are produced in lexicographic order of item positions and written
/// into `buf`; its contents are only valid for the duration of the call, so
/// callers that keep a subset must copy it. Returning
/// [`ControlFlow::Break`] from `f` stops the enumeration and is passed back
/// to the caller.
///
/// Yields nothing when `k > items.len()`.
///
/// # Panics
///
/// Panics if `buf` is empty.
///
/// # Example
///
/// ```rust
/// use std::ops::ControlFlow;
/// use folio_portfolio::combinations::for_each_subset;
///
/// let mut seen = Vec::new();
/// let mut buf = ["", ""];
/// let _ = for_each_subset(&["A", "B", "C"], &mut buf, |s| {
///     seen.push(s.join(""));
///     ControlFlow::Continue(())
/// });
/// assert_eq!(seen, ["AB", "AC", "BC"]);
/// ```
pub fn for_each_subset<T, F>(items: &[T], buf: &mut [T], mut f: F) -> ControlFlow<()>
where
    T: Copy,
    F: FnMut(&[T]) -> ControlFlow<()>,
{
    let k = buf.len();
    let n = items.len();
    assert!(k > 0, "for_each_subset: subset size must be positive");
    if k > n {
        return ControlFlow::Continue(());
    }

    let mut c: Vec<usize> = (0..k).collect();
    loop {
        for (slot, &idx) in buf.iter_mut().zip(&c) {
            *slot = items[idx];
        }
        f(buf)?;

        // Rightmost index that can still move right.
        let Some(i) = (0..k).rev().find(|&i| c[i] < n - k + i) else {
            return ControlFlow::Continue(());
        };
        c[i] += 1;
        for j in i + 1..k {
            c[j] = c[j - 1] + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinations::binomial;

    fn count(n: usize, k: usize) -> u64 {
        let items: Vec<usize> = (0..n).collect();
        let mut buf = vec![0; k];
        let mut total = 0u64;
        let _ = for_each_subset(&items, &mut buf, |_| {
            total += 1;
            ControlFlow::Continue(())
        });
        total
    }

    #[test]
    fn test_counts_match_binomial() {
        assert_eq!(count(100, 2), 4_950);
        assert_eq!(count(100, 3), 161_700);
        assert_eq!(count(50, 4), 230_300);
        assert_eq!(count(10, 5), 252);
        for n in 1..12 {
            for k in 1..=n {
                assert_eq!(count(n, k), binomial(n as u64, k as u64));
            }
        }
    }

    #[test]
    fn test_lexicographic_order() {
        let mut seen = Vec::new();
        let mut buf = [0; 3];
        let _ = for_each_subset(&[1, 2, 3, 4], &mut buf, |s| {
            seen.push(s.to_vec());
            ControlFlow::Continue(())
        });
        assert_eq!(
            seen,
            vec![vec![1, 2, 3], vec![1, 2, 4], vec![1, 3, 4], vec![2, 3, 4]]
        );
    }

    #[test]
    fn test_subsets_have_no_repeats() {
        let mut buf = [0; 4];
        let _ = for_each_subset(&[0, 1, 2, 3, 4, 5, 6], &mut buf, |s| {
            assert!(s.windows(2).all(|w| w[0] < w[1]));
            ControlFlow::Continue(())
        });
    }

    #[test]
    fn test_early_stop() {
        let mut calls = 0;
        let mut buf = [0; 2];
        let flow = for_each_subset(&[1, 2, 3, 4, 5], &mut buf, |_| {
            calls += 1;
            if calls == 3 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(flow, ControlFlow::Break(()));
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_k_larger_than_n() {
        assert_eq!(count(3, 4), 0);
    }

    #[test]
    fn test_k_equals_n() {
        assert_eq!(count(6, 6), 1);
    }

    #[test]
    #[should_panic(expected = "subset size must be positive")]
    fn test_zero_k_panics() {
        let mut buf: [u8; 0] = [];
        let _ = for_each_subset(&[1u8, 2], &mut buf, |_| ControlFlow::Continue(()));
    }
}
