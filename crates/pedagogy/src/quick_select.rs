// model = "claude-opus-4-5"
// created = 2026-10-18
// modified = 2026-10-18
// driver = "Isaac Clayton"

//! Textbook quick-select.
//!
//! Partition around the last element, then keep only the side that holds
//! the requested rank. Only ONE side is searched, so the expected work is
//! n + n/2 + n/4 + ... = 2n. The catch is the pivot: on sorted input the
//! last element is always the maximum, every partition peels off a single
//! element, and the work degrades to n + (n-1) + ... = O(n^2).
//!
//! The recursion of the classic presentation is written as a loop over the
//! `[left, right]` window so that the quadratic case does not also blow the
//! stack.

/// Lomuto partition of `arr[left..=right]` around `arr[right]`.
///
/// Returns the final index of the pivot. Everything before it is strictly
/// smaller, everything after it is greater or equal.
pub fn partition<T: Ord>(arr: &mut [T], left: usize, right: usize) -> usize {
    // `store` is the boundary between `< pivot` and `>= pivot`.
    let mut store = left;
    for j in left..right {
        if arr[j] < arr[right] {
            arr.swap(store, j);
            store += 1;
        }
    }
    arr.swap(store, right);
    return store;
}

/// Find the kth smallest element (1-indexed) of `arr`, reordering it in place.
///
/// Returns `None` when `k` is outside `[1, arr.len()]`.
pub fn quick_select<T: Ord + Clone>(arr: &mut [T], k: usize) -> Option<T> {
    if !crate::rank_in_range(k, arr.len()) {
        return None;
    }

    // The target stays at absolute index k - 1 while the window shrinks.
    let target = k - 1;
    let mut left = 0;
    let mut right = arr.len() - 1;

    loop {
        if left == right {
            return Some(arr[left].clone());
        }
        let pivot = partition(arr, left, right);
        if pivot == target {
            return Some(arr[pivot].clone());
        } else if target < pivot {
            right = pivot - 1;
        } else {
            left = pivot + 1;
        }
    }
}
