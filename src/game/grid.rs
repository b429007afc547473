//! Attempt grid types

use crate::core::LetterStatus;

/// One evaluated letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub letter: char,
    pub status: LetterStatus,
}

impl GridCell {
    #[inline]
    #[must_use]
    pub const fn new(letter: char, status: LetterStatus) -> Self {
        Self { letter, status }
    }
}

/// A played guess, one cell per letter
pub type Row = Vec<GridCell>;

/// Pair each letter of `word` with its status
#[must_use]
pub fn build_row(word: &str, statuses: &[LetterStatus]) -> Row {
    word.chars()
        .zip(statuses)
        .map(|(letter, &status)| GridCell::new(letter, status))
        .collect()
}
