//! On-screen keyboard state
//!
//! Tracks the best status seen so far for every letter and renders a QWERTY
//! block coloured the same way as the guess grid. One keyboard belongs to one
//! game; nothing here is shared between rounds.

use crate::core::LetterStatus;
use crate::output::formatters::{key_colour, push_painted};
use rustc_hash::FxHashMap;

const LAYOUT: [(&str, &str); 3] = [
    ("  ", "qwertyuiop"),
    ("   ", "asdfghjkl"),
    ("     ", "zxcvbnm"),
];

/// Best known status per letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyboard {
    letters: FxHashMap<char, LetterStatus>,
}

impl Keyboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a status for `letter`, keeping the better of old and new
    pub fn record(&mut self, letter: char, status: LetterStatus) {
        let letter = letter.to_ascii_lowercase();
        self.letters
            .entry(letter)
            .and_modify(|known| *known = known.upgrade(status))
            .or_insert(status);
    }

    /// Best status recorded for `letter`, if it was ever guessed
    #[must_use]
    pub fn status(&self, letter: char) -> Option<LetterStatus> {
        self.letters.get(&letter.to_ascii_lowercase()).copied()
    }

    /// Render the keyboard as three staggered rows
    ///
    /// Letters that were never guessed are printed without colour codes.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("\n");
        for (indent, keys) in LAYOUT {
            out.push_str(indent);
            for (i, key) in keys.chars().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                match self.status(key) {
                    Some(status) => push_painted(&mut out, key, key_colour(status)),
                    None => out.push(key.to_ascii_uppercase()),
                }
            }
            out.push('\n');
        }
        out
    }
}
