// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

use std::fmt;

/// Error returned when a selection cannot be made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    /// The requested rank is outside `[1, len]`.
    /// Every rank is out of range for an empty sequence.
    OutOfRange { k: usize, len: usize },
}

impl SelectError {
    /// Check a 1-indexed rank against a sequence length.
    pub fn check(k: usize, len: usize) -> Result<(), SelectError> {
        if pedagogy::rank_in_range(k, len) {
            return Ok(());
        }
        log::debug!("rejecting rank {} for sequence of length {}", k, len);
        return Err(SelectError::OutOfRange { k, len });
    }
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectError::OutOfRange { k, len: 0 } => {
                write!(f, "rank {} is out of range: the sequence is empty", k)
            }
            SelectError::OutOfRange { k, len } => {
                write!(f, "rank {} is out of range [1, {}]", k, len)
            }
        }
    }
}

impl std::error::Error for SelectError {}
