//! Text renderings of a round
//!
//! Both outputs are consumed verbatim (terminal display and copy-paste share
//! text), so their exact bytes matter.

use super::Game;
use crate::output::formatters::{grid_colour, push_painted, statuses_to_emoji};

const BOX_INDENT: &str = "       ";

impl Game<'_> {
    /// Boxed, colourised grid followed by the keyboard
    ///
    /// Only played rows are drawn between the top and bottom borders.
    #[must_use]
    pub fn output_for_console(&self) -> String {
        let border = "-".repeat(self.answer.chars().count() + 2);

        let mut out = String::from("\n");
        push_border(&mut out, &border);
        for row in self.played_rows() {
            out.push_str(BOX_INDENT);
            out.push('|');
            for cell in row {
                push_painted(&mut out, cell.letter, grid_colour(cell.status));
            }
            out.push_str("|\n");
        }
        push_border(&mut out, &border);
        out.push_str(&self.keyboard.render());
        out
    }

    /// Plain-text emoji summary for sharing
    ///
    /// The score reads `X` when the round ended without a win.
    #[must_use]
    pub fn output_to_share(&self) -> String {
        let (attempts, max_attempts) = self.score();

        let score = if self.has_ended() && !self.complete {
            "X".to_string()
        } else {
            attempts.to_string()
        };

        let mut out = format!("Wordle {} {score}/{max_attempts}\n\n", self.game_number);

        for row in self.played_rows() {
            out.push_str(&statuses_to_emoji(row.iter().map(|cell| cell.status)));
            out.push('\n');
        }
        out.push('\n');
        out
    }
}

fn push_border(out: &mut String, border: &str) {
    out.push_str(BOX_INDENT);
    out.push_str(border);
    out.push('\n');
}
