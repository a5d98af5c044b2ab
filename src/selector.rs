// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! The Selector trait abstracts over selection strategies.
//!
//! All strategies share this interface, enabling:
//! - Conformance testing with a shared test suite
//! - Counting and benchmarking across strategies
//! - Picking a strategy by name from the command line
//!
//! Every strategy validates the rank at its boundary and leaves the caller's
//! slice untouched, even when the underlying algorithm works in place.

use std::fmt;
use std::str::FromStr;

use crate::error::SelectError;

/// A kth-order-statistic selector over totally ordered values.
pub trait Selector {
    /// Short name used in reports and on the command line.
    fn name(&self) -> &'static str;

    /// Find the kth smallest element (1-indexed) of `items`.
    ///
    /// Fails with `OutOfRange` when `k` is outside `[1, items.len()]`.
    fn select<T: Ord + Clone>(&self, items: &[T], k: usize) -> Result<T, SelectError>;

    /// The lower median, rank `ceil(n / 2)`.
    fn median<T: Ord + Clone>(&self, items: &[T]) -> Result<T, SelectError> {
        return self.select(items, items.len().div_ceil(2));
    }
}

/// Median of medians: worst-case O(n).
#[derive(Debug, Clone, Copy, Default)]
pub struct MedianOfMedians;

impl Selector for MedianOfMedians {
    fn name(&self) -> &'static str {
        return "mom";
    }

    fn select<T: Ord + Clone>(&self, items: &[T], k: usize) -> Result<T, SelectError> {
        return crate::select::select(items, k);
    }
}

/// Textbook quick-select with a last-element pivot: O(n) on average,
/// O(n^2) on sorted input.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSelect;

impl Selector for QuickSelect {
    fn name(&self) -> &'static str {
        return "quick";
    }

    fn select<T: Ord + Clone>(&self, items: &[T], k: usize) -> Result<T, SelectError> {
        // `quick_select` rejects out-of-range ranks itself.
        let mut copy = items.to_vec();
        return pedagogy::quick_select::quick_select(&mut copy, k)
            .ok_or(SelectError::OutOfRange { k, len: items.len() });
    }
}

/// Sort a copy and index into it: O(n log n). The reference answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortSelect;

impl Selector for SortSelect {
    fn name(&self) -> &'static str {
        return "sort";
    }

    fn select<T: Ord + Clone>(&self, items: &[T], k: usize) -> Result<T, SelectError> {
        // `sort_select` rejects out-of-range ranks itself.
        return pedagogy::sort_select::sort_select(items, k)
            .ok_or(SelectError::OutOfRange { k, len: items.len() });
    }
}

/// A strategy chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    MedianOfMedians,
    QuickSelect,
    SortSelect,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::MedianOfMedians,
        Strategy::QuickSelect,
        Strategy::SortSelect,
    ];
}

impl Selector for Strategy {
    fn name(&self) -> &'static str {
        return match self {
            Strategy::MedianOfMedians => MedianOfMedians.name(),
            Strategy::QuickSelect => QuickSelect.name(),
            Strategy::SortSelect => SortSelect.name(),
        };
    }

    fn select<T: Ord + Clone>(&self, items: &[T], k: usize) -> Result<T, SelectError> {
        return match self {
            Strategy::MedianOfMedians => MedianOfMedians.select(items, k),
            Strategy::QuickSelect => QuickSelect.select(items, k),
            Strategy::SortSelect => SortSelect.select(items, k),
        };
    }
}

/// Error returned when a strategy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "unknown strategy {:?} (expected one of: mom, quick, sort)", self.0);
    }
}

impl std::error::Error for UnknownStrategy {}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Strategy, UnknownStrategy> {
        for strategy in Strategy::ALL {
            if strategy.name() == s {
                return Ok(strategy);
            }
        }
        return Err(UnknownStrategy(s.to_string()));
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(self.name());
    }
}
