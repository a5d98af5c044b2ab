// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Comparison counting for understanding how much work a selector does.
//!
//! Wrap the input with [`Tally::wrap`], run any selector on the wrapped
//! values, then read [`Tally::count`]. Every `==`, `<`, `cmp` and friends
//! between two `Counted` values bumps the tally by one.
//!
//! Counting comparisons instead of timing makes growth rates reproducible:
//! a linear algorithm does a bounded number of comparisons per element no
//! matter how noisy the machine is.
//!
//! ```
//! use ordstat::counter::Tally;
//!
//! let tally = Tally::new();
//! let items = tally.wrap(&[3, 1, 2]);
//! assert!(items[0] > items[1]);
//! assert_eq!(tally.count(), 1);
//! ```

use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;

/// A running count of comparisons. Not `Sync`: one tally per thread.
#[derive(Debug, Default)]
pub struct Tally {
    count: Cell<u64>,
}

impl Tally {
    pub fn new() -> Tally {
        return Tally { count: Cell::new(0) };
    }

    /// Comparisons recorded so far.
    #[inline]
    pub fn count(&self) -> u64 {
        return self.count.get();
    }

    pub fn reset(&self) {
        self.count.set(0);
    }

    #[inline]
    fn bump(&self) {
        self.count.set(self.count.get() + 1);
    }

    /// Wrap a single value so its comparisons are recorded here.
    pub fn counted<T>(&self, value: T) -> Counted<'_, T> {
        return Counted { value, tally: self };
    }

    /// Wrap every element of `items`.
    pub fn wrap<T: Clone>(&self, items: &[T]) -> Vec<Counted<'_, T>> {
        return items.iter().cloned().map(|v| self.counted(v)).collect();
    }
}

/// A value whose comparisons are recorded in a [`Tally`].
#[derive(Clone)]
pub struct Counted<'a, T> {
    value: T,
    tally: &'a Tally,
}

impl<T> Counted<'_, T> {
    pub fn get(&self) -> &T {
        return &self.value;
    }

    pub fn into_inner(self) -> T {
        return self.value;
    }
}

impl<T: PartialEq> PartialEq for Counted<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.tally.bump();
        return self.value == other.value;
    }
}

impl<T: Eq> Eq for Counted<'_, T> {}

impl<T: Ord> PartialOrd for Counted<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        return Some(self.cmp(other));
    }
}

impl<T: Ord> Ord for Counted<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.tally.bump();
        return self.value.cmp(&other.value);
    }
}

impl<T: fmt::Debug> fmt::Debug for Counted<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "Counted({:?})", self.value);
    }
}
