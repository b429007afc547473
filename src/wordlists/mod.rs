//! Word lists for the game
//!
//! Provides the embedded lists compiled into the binary and the [`WordList`]
//! set the game checks guesses against.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
pub use loader::{WordListError, load_from_file};

use rustc_hash::FxHashSet;

/// Length of every word in the embedded lists
pub const WORD_LENGTH: usize = 5;

/// Immutable set of accepted guess words
///
/// Words are stored lowercase and lookups are case-insensitive. A game only
/// borrows its list, so one list can back any number of rounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: FxHashSet<String>,
}

impl WordList {
    /// Build a list from an embedded string slice
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::WordList;
    ///
    /// let list = WordList::from_slice(&["group", "TAPIR"]);
    /// assert!(list.contains("tapir"));
    /// assert!(list.contains("GROUP"));
    /// assert!(!list.contains("scrap"));
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[&str]) -> Self {
        slice.iter().collect()
    }

    /// Every word a player may guess
    #[must_use]
    pub fn allowed() -> Self {
        Self::from_slice(ALLOWED)
    }

    /// Only the words that can be drawn as answers
    #[must_use]
    pub fn answers() -> Self {
        Self::from_slice(ANSWERS)
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }
}
