//! Wordle Game
//!
//! A single round of Wordle: guess the hidden word within a fixed number of
//! attempts, with per-letter feedback and shareable results.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::{game::Game, wordlists::WordList};
//!
//! let words = WordList::from_slice(&["group", "prank", "spare", "tapir"]);
//! let mut game = Game::new("tapir", 6, &words, 200);
//!
//! assert_eq!(game.play("prank"), Ok(false));
//! assert_eq!(game.play("tapir"), Ok(true));
//! assert!(game.has_ended());
//!
//! assert_eq!(
//!     game.output_to_share(),
//!     "Wordle 200 2/6\n\n🟨🟨🟨⬜⬜\n🟩🟩🟩🟩🟩\n\n"
//! );
//! ```

// Core domain types
pub mod core;

// Round state and rendering
pub mod game;

// On-screen keyboard
pub mod keyboard;

// Word lists
pub mod wordlists;

// Puzzle numbering and answer selection
pub mod daily;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
