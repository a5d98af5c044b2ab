// model = "claude-opus-4-5"
// created = "2026-01-30"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Ordstat - deterministic order-statistic selection.
//!
//! Finds the kth smallest element of a sequence in worst-case linear time
//! using the median-of-medians (BFPRT) pivot rule. Ranks are 1-indexed.
//!
//! # Quick Start
//!
//! ```
//! use ordstat::{select, median, SelectError};
//!
//! let items = [12, 3, 5, 7, 19, 26, 11, 8, 14];
//! assert_eq!(select(&items, 5), Ok(11));
//! assert_eq!(median(&items), Ok(11));
//!
//! // Ranks outside [1, len] are an error, never a panic.
//! assert_eq!(select(&items, 10), Err(SelectError::OutOfRange { k: 10, len: 9 }));
//! ```
//!
//! # Strategies
//!
//! | Strategy | Algorithm | Worst case |
//! |----------|-----------|------------|
//! | `MedianOfMedians` | Groups of 5, median-of-medians pivot | O(n) |
//! | `QuickSelect` | Lomuto partition, last-element pivot | O(n^2) |
//! | `SortSelect` | Sort a copy, index into it | O(n log n) |
//!
//! All three implement [`Selector`], and [`counter`] can count the
//! comparisons any of them performs.

pub mod counter;
pub mod error;
pub mod group;
pub mod select;
pub mod selector;

pub use error::SelectError;
pub use select::median;
pub use select::select;
pub use selector::Selector;
pub use selector::Strategy;
