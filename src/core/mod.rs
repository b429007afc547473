//! Core domain types for the game
//!
//! Letter feedback and the evaluation algorithm. Everything here is pure and
//! free of game state.

mod evaluate;
mod status;

pub use evaluate::evaluate;
pub use status::LetterStatus;
