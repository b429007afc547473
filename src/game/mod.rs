//! A single round of the game
//!
//! [`Game`] owns the attempt lifecycle; rendering lives in `render` as
//! further methods on the same type.

mod error;
mod grid;
mod render;
mod state;

pub use error::PlayError;
pub use grid::{GridCell, Row};
pub use state::Game;

/// Attempt budget of the classic game
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Largest attempt budget a round accepts
pub const MAX_ATTEMPTS_LIMIT: usize = 100;
