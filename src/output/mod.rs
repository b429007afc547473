//! Terminal output formatting
//!
//! Colour codes and glyphs shared by the renderers, plus the CLI's result
//! banner.

pub mod display;
pub mod formatters;

pub use display::{prompt, result_banner};
