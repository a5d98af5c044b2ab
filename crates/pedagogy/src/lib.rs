// model = "claude-opus-4-5"
// created = 2026-02-01
// modified = 2026-10-18
// driver = "Isaac Clayton"

//! Educational selection baselines.
//!
//! This crate keeps the textbook versions of kth-smallest selection that the
//! main crate measures itself against. They are deliberately simple:
//!
//! - Learning how partition-based selection works step by step
//! - Giving the deterministic selector something to beat on adversarial input
//! - Serving as a correctness oracle in conformance tests
//!
//! # Implementations
//!
//! | Function | Algorithm | Worst case |
//! |----------|-----------|------------|
//! | `quick_select` | Lomuto partition, last element as pivot | O(n^2) |
//! | `sort_select` | Sort a copy, index into it | O(n log n) |
//!
//! Ranks are 1-indexed everywhere: `k = 1` is the smallest element.
//!
//! # Example
//!
//! ```
//! use pedagogy::quick_select::quick_select;
//! use pedagogy::sort_select::sort_select;
//!
//! let mut arr = [38, 27, 43, 3, 9, 82, 10];
//! assert_eq!(quick_select(&mut arr, 3), Some(10));
//! assert_eq!(sort_select(&[5, 2, 8], 10), None);
//! ```

pub mod quick_select;
pub mod sort_select;

/// Returns true if `k` is a valid 1-indexed rank into a sequence of `len`.
#[inline]
pub fn rank_in_range(k: usize, len: usize) -> bool {
    return k >= 1 && k <= len;
}
