// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Groups of five and their medians.
//!
//! A group is sorted in a stack buffer: five elements never need the heap,
//! and sorting five things is a constant amount of work.

use smallvec::SmallVec;

/// The group size. Three would break the linear bound; five is the smallest
/// size for which T(n) <= T(n/5) + T(7n/10) + O(n) holds.
pub const GROUP_SIZE: usize = 5;

/// A sorted copy of one group.
type Group<T> = SmallVec<[T; GROUP_SIZE]>;

/// Median of a group of at most `GROUP_SIZE` elements.
///
/// For an even-sized trailing group this is the upper of the two middle
/// elements, index `len / 2` of the sorted group.
///
/// Panics if the group is empty.
pub fn median_of_group<T: Ord + Clone>(group: &[T]) -> T {
    debug_assert!(!group.is_empty() && group.len() <= GROUP_SIZE);
    let mut sorted: Group<T> = group.iter().cloned().collect();
    sorted.sort_unstable();
    return sorted.swap_remove(sorted.len() / 2);
}

/// One median per consecutive group of five; the last group may be short.
///
/// The result has `ceil(view.len() / 5)` elements.
pub fn group_medians<T: Ord + Clone>(view: &[T]) -> Vec<T> {
    return view.chunks(GROUP_SIZE).map(median_of_group).collect();
}
