//! Interactive round driver
//!
//! Reads guesses line by line, shows the board after every accepted guess
//! and re-prompts on rejected ones. Generic over the reader and writer so a
//! whole round can be scripted.

use crate::game::Game;
use crate::output::{prompt, result_banner};
use std::io::{self, BufRead, Write};

/// How a round finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Won { attempts: usize },
    Lost,
    /// Input ran out before the round ended
    Abandoned,
}

/// Play `game` to completion
///
/// On a finished round the result banner and the share text are written
/// after the final board.
///
/// # Errors
///
/// Returns an error if reading a guess or writing output fails.
pub fn run_round<R: BufRead, W: Write>(
    game: &mut Game<'_>,
    mut input: R,
    output: &mut W,
) -> io::Result<RoundOutcome> {
    write!(output, "{}", game.output_for_console())?;

    let mut line = String::new();
    while !game.has_ended() {
        write!(output, "{}", prompt(game))?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            tracing::info!(game_number = game.game_number(), "input closed before the round ended");
            return Ok(RoundOutcome::Abandoned);
        }

        let guess = line.trim();
        if guess.is_empty() {
            continue;
        }

        match game.play(guess) {
            Ok(_) => write!(output, "{}", game.output_for_console())?,
            Err(err) => writeln!(output, "{err}")?,
        }
    }

    write!(output, "{}", result_banner(game))?;
    write!(output, "\n{}", game.output_to_share())?;

    let (attempts, _) = game.score();
    Ok(if game.is_won() {
        RoundOutcome::Won { attempts }
    } else {
        RoundOutcome::Lost
    })
}
