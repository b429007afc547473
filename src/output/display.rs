//! Display functions for round results

use crate::game::Game;
use colored::Colorize;

/// Banner announcing how the round went
#[must_use]
pub fn result_banner(game: &Game<'_>) -> String {
    let rule = "─".repeat(40).cyan();
    let (attempts, _) = game.score();

    let headline = if game.is_won() {
        let guesses = if attempts == 1 { "guess" } else { "guesses" };
        format!("✅ Solved in {attempts} {guesses}!").green().bold()
    } else {
        format!("❌ Out of tries! The word was {}", game.answer().to_uppercase())
            .red()
            .bold()
    };

    format!("\n{rule}\n{headline}\n{rule}\n")
}

/// Short hint printed before each guess
#[must_use]
pub fn prompt(game: &Game<'_>) -> String {
    let (attempts, max_attempts) = game.score();
    format!(
        "{} {}/{}: ",
        "Guess".bright_cyan().bold(),
        attempts + 1,
        max_attempts
    )
}
