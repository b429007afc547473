//! Guess evaluation
//!
//! Compares a guess against the answer and classifies every guessed letter,
//! crediting each answer letter at most once.

use super::LetterStatus;
use rustc_hash::FxHashMap;

/// Evaluate `guess` against `answer`
///
/// Both words are expected to be lowercase and of equal length (in
/// characters). The result has one status per guessed letter, in order.
///
/// # Algorithm
/// 1. First pass: mark exact position matches `Correct` and remove them from
///    the pool of available answer letters
/// 2. Second pass: mark remaining letters `Present` while the pool still holds
///    that letter, `Absent` otherwise
///
/// Exact matches therefore claim answer letters before misplaced ones, and a
/// letter is never credited more often than it occurs in the answer.
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterStatus::{Absent, Present}, evaluate};
///
/// // Only two of the three guessed 'e's are credited
/// assert_eq!(
///     evaluate("eerie", "speed"),
///     vec![Present, Present, Absent, Absent, Absent]
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &str, answer: &str) -> Vec<LetterStatus> {
    let guess: Vec<char> = guess.chars().collect();
    let answer: Vec<char> = answer.chars().collect();
    debug_assert_eq!(guess.len(), answer.len(), "guess and answer lengths differ");

    let mut result = vec![LetterStatus::Absent; guess.len()];
    let mut answer_available = char_counts(&answer);

    // First pass: exact position matches
    for (i, (g, a)) in guess.iter().zip(&answer).enumerate() {
        if g == a {
            result[i] = LetterStatus::Correct;
            if let Some(count) = answer_available.get_mut(a) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: misplaced letters from whatever is left
    for (status, letter) in result.iter_mut().zip(&guess) {
        if *status == LetterStatus::Correct {
            continue;
        }
        if let Some(count) = answer_available.get_mut(letter)
            && *count > 0
        {
            *status = LetterStatus::Present;
            *count -= 1;
        }
    }

    result
}

fn char_counts(letters: &[char]) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for &ch in letters {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}
