use super::POINT_COUNT;

/// Number of distinct dot sets of size `k` on the grid, i.e. C(9, k).
///
/// This ignores drawing order and blocking, so it is the count of dot
/// choices a pattern of length `k` can be made from. Returns 0 for `k > 9`.
pub fn dot_choices(k: usize) -> u64 {
    if k > POINT_COUNT {
        return 0;
    }
    let n = POINT_COUNT as u64;
    // Multiplicative form keeps every intermediate value an integer.
    (0..k as u64).fold(1, |acc, i| acc * (n - i) / (i + 1))
}
