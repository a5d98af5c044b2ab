//! AFL fuzz harness for selection
//!
//! This harness checks, for arbitrary byte inputs:
//! 1. Agreement: median of medians returns the same value as sort-then-index
//! 2. Range: ranks outside [1, len] are rejected, never panic
//! 3. Purity: the input is unchanged after selection
//!
//! Input layout: first byte picks the rank (scaled to the length, with some
//! values deliberately past the end), every following pair of bytes is one
//! `i16` element. Small element types keep duplicates common.

use afl::fuzz;
use ordstat::Selector;
use ordstat::SelectError;
use ordstat::selector::MedianOfMedians;
use ordstat::selector::SortSelect;

fn parse(data: &[u8]) -> Option<(usize, Vec<i16>)> {
    let (&rank_byte, rest) = data.split_first()?;
    let items: Vec<i16> = rest
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    // 0..=len+2 so that 0 and a few past-the-end ranks show up too.
    let k = rank_byte as usize % (items.len() + 3);
    return Some((k, items));
}

fn main() {
    fuzz!(|data: &[u8]| {
        let Some((k, items)) = parse(data) else {
            return;
        };
        let before = items.clone();

        let got = MedianOfMedians.select(&items, k);
        let want = SortSelect.select(&items, k);
        assert_eq!(got, want, "k={} items={:?}", k, items);

        if k == 0 || k > items.len() {
            assert_eq!(got, Err(SelectError::OutOfRange { k, len: items.len() }));
        }
        assert_eq!(items, before);
    });
}
