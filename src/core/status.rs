//! Per-letter feedback status
//!
//! The variants are declared from worst to best so the derived ordering
//! gives `Absent < Present < Correct`. The keyboard relies on this ordering
//! to merge statuses without ever downgrading a letter.

/// Feedback for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    /// Letter is not in the answer, or every occurrence was already credited
    Absent,
    /// Letter is in the answer at a different position
    Present,
    /// Letter is in the answer at this exact position
    Correct,
}

impl LetterStatus {
    /// Share-text glyph for this status
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::LetterStatus;
    ///
    /// assert_eq!(LetterStatus::Correct.to_emoji(), '🟩');
    /// assert_eq!(LetterStatus::Absent.to_emoji(), '⬜');
    /// ```
    #[inline]
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Merge two statuses, keeping the better one
    #[inline]
    #[must_use]
    pub fn upgrade(self, other: Self) -> Self {
        self.max(other)
    }
}
