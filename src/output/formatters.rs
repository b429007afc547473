//! Formatting utilities for terminal output
//!
//! ANSI colour codes are written out literally: the console view is compared
//! byte for byte, so it must not depend on terminal detection.

use crate::core::LetterStatus;

pub const COLOUR_GREEN: &str = "\x1b[32m";
pub const COLOUR_YELLOW: &str = "\x1b[33m";
pub const COLOUR_GREY: &str = "\x1b[90m";
pub const COLOUR_RESET: &str = "\x1b[0m";

/// Colour prefix for a letter in the guess grid
///
/// Absent letters keep the terminal's default colour.
#[must_use]
pub const fn grid_colour(status: LetterStatus) -> &'static str {
    match status {
        LetterStatus::Correct => COLOUR_GREEN,
        LetterStatus::Present => COLOUR_YELLOW,
        LetterStatus::Absent => "",
    }
}

/// Colour prefix for a key on the on-screen keyboard
///
/// Unlike the grid, absent keys are greyed out so they stand apart from
/// letters that have not been tried yet.
#[must_use]
pub const fn key_colour(status: LetterStatus) -> &'static str {
    match status {
        LetterStatus::Correct => COLOUR_GREEN,
        LetterStatus::Present => COLOUR_YELLOW,
        LetterStatus::Absent => COLOUR_GREY,
    }
}

/// Push an upper-cased letter wrapped in `colour` and a reset
pub fn push_painted(out: &mut String, letter: char, colour: &str) {
    out.push_str(colour);
    out.extend(letter.to_uppercase());
    out.push_str(COLOUR_RESET);
}

/// Format a row of statuses as emoji string
#[must_use]
pub fn statuses_to_emoji(statuses: impl IntoIterator<Item = LetterStatus>) -> String {
    statuses.into_iter().map(LetterStatus::to_emoji).collect()
}
