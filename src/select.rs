// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Deterministic selection by median of medians (BFPRT).
//!
//! Each level does four things:
//!
//! 1. Split the view into groups of five and take the median of each.
//! 2. Recursively select the median of those medians; this is the pivot.
//! 3. Partition the view three ways around the pivot.
//! 4. Keep only the class that holds rank k, or return the pivot.
//!
//! At least half of the group medians are >= the pivot, and each of those
//! sits above two more elements of its own group, so at least ~3n/10
//! elements are >= the pivot (symmetrically <=). Whatever side we keep has
//! at most ~7n/10 elements, which gives
//!
//! ```text
//! T(n) <= T(n/5) + T(7n/10) + O(n)  =>  T(n) = O(n)
//! ```
//!
//! on every input, sorted and reverse-sorted included.
//!
//! The outer step (4) is a loop that replaces the view in place. The only
//! real recursion is the pivot search in step (2), which always runs on a
//! sequence five times smaller.

use crate::error::SelectError;
use crate::group::GROUP_SIZE;
use crate::group::group_medians;

/// Find the kth smallest element (1-indexed) of `items`.
///
/// `items` is not modified; selection runs on an internal copy. Equal
/// elements are interchangeable, so any element equal to the kth smallest
/// is a correct answer.
///
/// ```
/// use ordstat::select;
///
/// assert_eq!(select(&[3, 2, 1, 5, 6, 4], 2), Ok(2));
/// assert!(select(&[5, 2, 8], 10).is_err());
/// ```
pub fn select<T: Ord + Clone>(items: &[T], k: usize) -> Result<T, SelectError> {
    SelectError::check(k, items.len())?;
    return Ok(select_rec(items.to_vec(), k));
}

/// The lower median: the element of rank `ceil(n / 2)`.
///
/// An empty sequence has no median and yields `OutOfRange { k: 0, len: 0 }`.
pub fn median<T: Ord + Clone>(items: &[T]) -> Result<T, SelectError> {
    return select(items, items.len().div_ceil(2));
}

/// The three classes of a view around a pivot.
///
/// Every element equal to the pivot is interchangeable with it, so the
/// middle class is only counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<T> {
    /// Elements strictly less than the pivot.
    pub lows: Vec<T>,
    /// Number of elements equal to the pivot.
    pub mids: usize,
    /// Elements strictly greater than the pivot.
    pub highs: Vec<T>,
}

impl<T: Ord> Partition<T> {
    /// Scan `view` once, moving each element into its class.
    pub fn split(view: Vec<T>, pivot: &T) -> Partition<T> {
        let mut lows = Vec::new();
        let mut mids = 0;
        let mut highs = Vec::new();
        for item in view {
            match item.cmp(pivot) {
                std::cmp::Ordering::Less => lows.push(item),
                std::cmp::Ordering::Equal => mids += 1,
                std::cmp::Ordering::Greater => highs.push(item),
            }
        }
        return Partition { lows, mids, highs };
    }

    /// Total number of elements across all three classes.
    pub fn len(&self) -> usize {
        return self.lows.len() + self.mids + self.highs.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.len() == 0;
    }
}

/// Selection proper. Requires `1 <= k <= view.len()`, which the public
/// entry points check; under that precondition it cannot fail.
fn select_rec<T: Ord + Clone>(mut view: Vec<T>, mut k: usize) -> T {
    loop {
        debug_assert!(k >= 1 && k <= view.len());
        log::trace!("select level: len={} k={}", view.len(), k);

        if view.len() <= GROUP_SIZE {
            view.sort_unstable();
            return view.swap_remove(k - 1);
        }

        let pivot = median_of_medians(&view);
        let Partition { lows, mids, highs } = Partition::split(view, &pivot);

        if k <= lows.len() {
            view = lows;
        } else if k <= lows.len() + mids {
            // The pivot came from the view, so `mids` is never empty.
            return pivot;
        } else {
            k -= lows.len() + mids;
            view = highs;
        }
    }
}

/// The pivot: median of the group medians, ranked `ceil(m / 2)`.
fn median_of_medians<T: Ord + Clone>(view: &[T]) -> T {
    let mut medians = group_medians(view);
    if medians.len() == 1 {
        return medians.swap_remove(0);
    }
    let rank = medians.len().div_ceil(2);
    return select_rec(medians, rank);
}
