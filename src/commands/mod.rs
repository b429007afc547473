//! Command implementations

pub mod config;
pub mod play;

pub use config::{AnswerSource, ConfigError, GameConfig, ResolvedRound};
pub use play::{RoundOutcome, run_round};
