// model = "claude-opus-4-5"
// created = 2026-10-18
// modified = 2026-10-18
// driver = "Isaac Clayton"

//! The obvious answer: sort, then index.

/// Find the kth smallest element (1-indexed) by sorting a copy of `arr`.
///
/// Returns `None` when `k` is outside `[1, arr.len()]`.
pub fn sort_select<T: Ord + Clone>(arr: &[T], k: usize) -> Option<T> {
    if !crate::rank_in_range(k, arr.len()) {
        return None;
    }
    let mut sorted = arr.to_vec();
    sorted.sort();
    return Some(sorted[k - 1].clone());
}
