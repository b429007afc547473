//! Round configuration
//!
//! Collects the CLI choices into one value and resolves them to a concrete
//! answer and puzzle number before a round starts.

use crate::daily;
use crate::game::MAX_ATTEMPTS_LIMIT;
use thiserror::Error;

/// Where the hidden answer comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerSource {
    /// Today's puzzle from the answer list
    Daily,
    /// A random answer, reproducible with a seed
    Random { seed: Option<u64> },
    /// A caller-supplied answer
    Fixed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("the number of tries must be at least 1")]
    ZeroAttempts,

    #[error("the number of tries must be at most {max}")]
    TooManyAttempts { max: usize },

    #[error("the answer \"{0}\" must contain only letters")]
    InvalidAnswer(String),

    #[error("the answer must have {expected} letters to be guessable, got {found}")]
    AnswerLength { expected: usize, found: usize },

    #[error("the answer list is empty")]
    NoAnswers,
}

/// Settings for one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: usize,
    pub answer: AnswerSource,
    pub game_number: Option<u32>,
    /// Length every guessable word has, when the word list is known
    pub word_length: Option<usize>,
}

/// Answer and puzzle number a round is played with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRound {
    pub answer: String,
    pub game_number: u32,
}

impl GameConfig {
    #[must_use]
    pub fn new(max_attempts: usize, answer: AnswerSource) -> Self {
        Self {
            max_attempts,
            answer,
            game_number: None,
            word_length: None,
        }
    }

    #[must_use]
    pub const fn with_game_number(mut self, game_number: Option<u32>) -> Self {
        self.game_number = game_number;
        self
    }

    #[must_use]
    pub const fn with_word_length(mut self, word_length: Option<usize>) -> Self {
        self.word_length = word_length;
        self
    }

    /// Pick the answer and puzzle number
    ///
    /// A daily round uses the overridden game number, if any, to pick its
    /// answer, so any past puzzle can be replayed.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the attempt budget is zero or above
    /// [`MAX_ATTEMPTS_LIMIT`], a fixed answer is not purely alphabetic, the
    /// answer's length differs from `word_length`, or `answers` is empty when
    /// an answer has to be drawn from it.
    pub fn resolve(&self, answers: &[&str]) -> Result<ResolvedRound, ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        if self.max_attempts > MAX_ATTEMPTS_LIMIT {
            return Err(ConfigError::TooManyAttempts {
                max: MAX_ATTEMPTS_LIMIT,
            });
        }

        let (answer, game_number) = match &self.answer {
            AnswerSource::Daily => {
                let number = self.game_number.unwrap_or_else(daily::today);
                let answer = daily::answer_for(number, answers).ok_or(ConfigError::NoAnswers)?;
                (answer.to_string(), number)
            }
            AnswerSource::Random { seed } => {
                let answer = daily::random_answer(answers, *seed).ok_or(ConfigError::NoAnswers)?;
                (answer.to_string(), self.game_number.unwrap_or(0))
            }
            AnswerSource::Fixed(answer) => {
                if answer.is_empty() || !answer.chars().all(char::is_alphabetic) {
                    return Err(ConfigError::InvalidAnswer(answer.clone()));
                }
                (answer.to_lowercase(), self.game_number.unwrap_or(0))
            }
        };

        if let Some(expected) = self.word_length {
            let found = answer.chars().count();
            if found != expected {
                return Err(ConfigError::AnswerLength { expected, found });
            }
        }

        tracing::debug!(game_number, source = self.answer_kind(), "resolved round");
        Ok(ResolvedRound {
            answer,
            game_number,
        })
    }

    fn answer_kind(&self) -> &'static str {
        match self.answer {
            AnswerSource::Daily => "daily",
            AnswerSource::Random { .. } => "random",
            AnswerSource::Fixed(_) => "fixed",
        }
    }
}
