//! Puzzle selection
//!
//! The daily puzzle number counts days since the first published puzzle
//! (2021-06-19 UTC); the answer cycles through the embedded answer list.

use rand::prelude::IndexedRandom;
use rand::{SeedableRng, rngs::StdRng};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const SECONDS_PER_DAY: u64 = 86_400;

/// 2021-06-19, in days since the UNIX epoch
const FIRST_PUZZLE_DAY: u64 = 18_797;

/// Puzzle number for the UTC day containing `now`
///
/// Times before the first puzzle map to puzzle 0.
///
/// # Examples
/// ```
/// use std::time::{Duration, UNIX_EPOCH};
/// use wordle_game::daily::puzzle_number;
///
/// // 2022-01-01T12:00:00Z
/// let now = UNIX_EPOCH + Duration::from_secs(1_641_038_400);
/// assert_eq!(puzzle_number(now), 196);
/// ```
#[must_use]
pub fn puzzle_number(now: SystemTime) -> u32 {
    let day = now
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_secs()
        / SECONDS_PER_DAY;
    u32::try_from(day.saturating_sub(FIRST_PUZZLE_DAY)).unwrap_or(u32::MAX)
}

/// Today's puzzle number
#[must_use]
pub fn today() -> u32 {
    puzzle_number(SystemTime::now())
}

/// Answer for a puzzle number, cycling through `answers`
#[must_use]
pub fn answer_for<'a>(puzzle: u32, answers: &[&'a str]) -> Option<&'a str> {
    if answers.is_empty() {
        return None;
    }
    let index = puzzle as usize % answers.len();
    Some(answers[index])
}

/// Draw a random answer, reproducibly when a seed is given
#[must_use]
pub fn random_answer<'a>(answers: &[&'a str], seed: Option<u64>) -> Option<&'a str> {
    let choice = match seed {
        Some(seed) => answers.choose(&mut StdRng::seed_from_u64(seed)),
        None => answers.choose(&mut rand::rng()),
    };
    choice.copied()
}
