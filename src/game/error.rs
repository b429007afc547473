//! Errors returned when a guess is rejected
//!
//! Every variant is recoverable: the game is left untouched and the caller
//! can simply ask for another guess.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The guess has a different number of letters than the answer.
    #[error("The entered word length is wrong, should be: {expected}")]
    InvalidLength { expected: usize },

    /// The guess is not in the accepted word list.
    #[error("The entered word is not in the word list")]
    InvalidWord,

    /// The round was already won or ran out of attempts.
    #[error("The game has already ended")]
    GameAlreadyEnded,
}
