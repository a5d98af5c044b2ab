// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Conformance test suite for selection strategies.
//!
//! All implementations of the `Selector` trait must pass these tests.
//! The tests verify:
//!
//! 1. The fixed scenarios every selector is expected to reproduce
//! 2. Rank validation at the boundary
//! 3. Edge cases: singletons, all-equal input, ordered input, group sizes
//! 4. Agreement with the sorting oracle on a spread of inputs
//!
//! # Usage
//!
//! To test a new strategy, add it to the `test_all_strategies!` macro at the
//! bottom of this file.

use ordstat::SelectError;
use ordstat::Selector;
use ordstat::selector::MedianOfMedians;
use ordstat::selector::QuickSelect;
use ordstat::selector::SortSelect;

// =============================================================================
// Scenario Tests
// =============================================================================

/// 2nd smallest of a small shuffle.
pub fn test_second_smallest<S: Selector>(s: S) {
    assert_eq!(s.select(&[3, 2, 1, 5, 6, 4], 2), Ok(2));
}

/// Median of an odd-length input.
pub fn test_median_of_nine<S: Selector>(s: S) {
    assert_eq!(s.select(&[12, 3, 5, 7, 19, 26, 11, 8, 14], 5), Ok(11));
    assert_eq!(s.median(&[12, 3, 5, 7, 19, 26, 11, 8, 14]), Ok(11));
}

/// Duplicates straddling the requested rank.
pub fn test_duplicates<S: Selector>(s: S) {
    assert_eq!(s.select(&[9, 7, 5, 5, 3, 3, 1, 8, 6, 4, 2], 6), Ok(5));
    assert_eq!(s.select(&[9, 7, 5, 5, 3, 3, 1, 8, 6, 4, 2], 7), Ok(5));
    assert_eq!(s.select(&[9, 7, 5, 5, 3, 3, 1, 8, 6, 4, 2], 3), Ok(3));
}

/// k = 1 and k = len.
pub fn test_min_and_max<S: Selector>(s: S) {
    assert_eq!(s.select(&[7, 10, 4, 3, 20, 15], 1), Ok(3));
    assert_eq!(s.select(&[7, 10, 4, 3, 20, 15], 6), Ok(20));
}

/// Third smallest from the quick-select walkthrough.
pub fn test_third_smallest<S: Selector>(s: S) {
    assert_eq!(s.select(&[38, 27, 43, 3, 9, 82, 10], 3), Ok(10));
}

// =============================================================================
// Validation Tests
// =============================================================================

/// Ranks past the end, zero, and any rank on empty input.
pub fn test_out_of_range<S: Selector>(s: S) {
    assert_eq!(s.select(&[5, 2, 8], 10), Err(SelectError::OutOfRange { k: 10, len: 3 }));
    assert_eq!(s.select(&[5, 2, 8], 4), Err(SelectError::OutOfRange { k: 4, len: 3 }));
    assert_eq!(s.select(&[5, 2, 8], 0), Err(SelectError::OutOfRange { k: 0, len: 3 }));
    assert_eq!(s.select::<i32>(&[], 1), Err(SelectError::OutOfRange { k: 1, len: 0 }));
    assert_eq!(s.median::<i32>(&[]), Err(SelectError::OutOfRange { k: 0, len: 0 }));
}

/// The caller's slice is never reordered.
pub fn test_input_untouched<S: Selector>(s: S) {
    let items = vec![10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
    let before = items.clone();
    for k in 1..=items.len() {
        let _ = s.select(&items, k);
    }
    assert_eq!(items, before);
}

// =============================================================================
// Edge Case Tests
// =============================================================================

pub fn test_singleton<S: Selector>(s: S) {
    assert_eq!(s.select(&[42], 1), Ok(42));
    assert_eq!(s.median(&[42]), Ok(42));
}

pub fn test_all_equal<S: Selector>(s: S) {
    assert_eq!(s.select(&[5, 5, 5, 5, 5], 3), Ok(5));
    let many = vec![-1i64; 777];
    for k in [1, 2, 388, 776, 777] {
        assert_eq!(s.select(&many, k), Ok(-1));
    }
}

/// Ordered input in both directions, every rank.
pub fn test_ordered_input<S: Selector>(s: S) {
    let up: Vec<u32> = (0..200).collect();
    let down: Vec<u32> = (0..200).rev().collect();
    for k in 1..=200 {
        assert_eq!(s.select(&up, k), Ok(k as u32 - 1));
        assert_eq!(s.select(&down, k), Ok(k as u32 - 1));
    }
}

/// Lengths on both sides of multiples of the group size.
pub fn test_group_boundaries<S: Selector>(s: S) {
    for n in [4usize, 5, 6, 9, 10, 11, 24, 25, 26, 49, 50, 51, 124, 125, 126] {
        // Organ-pipe: rises then falls, with duplicates.
        let items: Vec<usize> = (0..n).map(|i| i.min(n - 1 - i)).collect();
        let mut sorted = items.clone();
        sorted.sort();
        for k in 1..=n {
            assert_eq!(s.select(&items, k), Ok(sorted[k - 1]), "n={} k={}", n, k);
        }
    }
}

/// Non-numeric element types work too.
pub fn test_strings<S: Selector>(s: S) {
    let words: Vec<String> = ["pear", "apple", "fig", "kiwi", "banana", "cherry", "date"]
        .iter()
        .map(|w| w.to_string())
        .collect();
    assert_eq!(s.select(&words, 1), Ok("apple".to_string()));
    assert_eq!(s.median(&words), Ok("date".to_string()));
    assert_eq!(s.select(&words, 7), Ok("pear".to_string()));
}

// =============================================================================
// Oracle Agreement
// =============================================================================

/// Deterministic pseudo-random input (xorshift), so failures reproduce.
fn xorshift_items(n: usize, seed: u64, modulus: u64) -> Vec<u64> {
    let mut state = seed | 1;
    let mut items = Vec::with_capacity(n);
    for _ in 0..n {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        items.push(state % modulus);
    }
    return items;
}

pub fn test_agrees_with_oracle<S: Selector>(s: S) {
    for (n, seed, modulus) in [(1000, 1, u64::MAX), (1000, 2, 10), (3333, 3, 1000), (64, 4, 2)] {
        let items = xorshift_items(n, seed, modulus);
        for k in [1, 2, n / 3, n / 2, n / 2 + 1, n - 1, n] {
            assert_eq!(s.select(&items, k), SortSelect.select(&items, k), "n={} k={}", n, k);
        }
    }
}

// =============================================================================
// Test Runner Macro
// =============================================================================

/// Generate the conformance tests for a strategy.
macro_rules! test_all_strategies {
    ($mod_name:ident, $selector:expr) => {
        mod $mod_name {
            use super::*;

            #[test] fn second_smallest() { test_second_smallest($selector); }
            #[test] fn median_of_nine() { test_median_of_nine($selector); }
            #[test] fn duplicates() { test_duplicates($selector); }
            #[test] fn min_and_max() { test_min_and_max($selector); }
            #[test] fn third_smallest() { test_third_smallest($selector); }
            #[test] fn out_of_range() { test_out_of_range($selector); }
            #[test] fn input_untouched() { test_input_untouched($selector); }
            #[test] fn singleton() { test_singleton($selector); }
            #[test] fn all_equal() { test_all_equal($selector); }
            #[test] fn ordered_input() { test_ordered_input($selector); }
            #[test] fn group_boundaries() { test_group_boundaries($selector); }
            #[test] fn strings() { test_strings($selector); }
            #[test] fn agrees_with_oracle() { test_agrees_with_oracle($selector); }
        }
    };
}

test_all_strategies!(median_of_medians, MedianOfMedians);
test_all_strategies!(quick_select, QuickSelect);
test_all_strategies!(sort_select, SortSelect);
test_all_strategies!(strategy_default, ordstat::Strategy::default());
