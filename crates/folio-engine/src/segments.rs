//! Contiguous work partitioning.

/// End indexes of `segments` contiguous, near-equal runs covering
/// `0..count`.
///
/// Boundary `i` is `⌊(i + 1) · count / segments⌋`. The last boundary is
/// always `count` and run lengths differ by at most one.
///
/// # Panics
///
/// Panics if `segments` is zero.
///
/// # Example
///
/// ```rust
/// use folio_engine::segment_indexes;
///
/// assert_eq!(segment_indexes(1000, 4), vec![250, 500, 750, 1000]);
/// assert_eq!(segment_indexes(10, 3), vec![3, 6, 10]);
/// ```
pub fn segment_indexes(count: usize, segments: usize) -> Vec<usize> {
    assert!(segments > 0, "segment_indexes: segments must be positive");
    (1..=segments)
        .map(|i| (i as u128 * count as u128 / segments as u128) as usize)
        .collect()
}

/// `(start, end)` ranges for the boundaries from [`segment_indexes`].
pub fn segment_ranges(count: usize, segments: usize) -> Vec<(usize, usize)> {
    let mut start = 0;
    segment_indexes(count, segments)
        .into_iter()
        .map(|end| {
            let range = (start, end);
            start = end;
            range
        })
        .collect()
}
