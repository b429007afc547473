//! Round state and the attempt lifecycle

use super::PlayError;
use super::grid::{GridCell, Row, build_row};
use crate::core::evaluate;
use crate::keyboard::Keyboard;
use crate::wordlists::WordList;

/// One round of the game
///
/// Created once with a fixed answer and attempt budget, then mutated only by
/// [`Game::play`]. The word list is borrowed so that many rounds can share it;
/// the keyboard is owned so that rounds never see each other's letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game<'a> {
    pub(super) complete: bool,
    pub(super) attempts: usize,
    pub(super) answer: String,
    pub(super) grid: Vec<Option<Row>>,
    pub(super) valid_words: &'a WordList,
    pub(super) keyboard: Keyboard,
    pub(super) game_number: u32,
}

impl<'a> Game<'a> {
    /// Start a new round
    ///
    /// The answer is lowercased but not checked against `valid_words`, so a
    /// round may use an answer that cannot itself be guessed.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::{game::Game, wordlists::WordList};
    ///
    /// let words = WordList::from_slice(&["group", "prank", "spare", "tapir"]);
    /// let mut game = Game::new("TAPIR", 6, &words, 200);
    ///
    /// assert_eq!(game.play("group"), Ok(false));
    /// assert_eq!(game.play("Tapir"), Ok(true));
    /// assert_eq!(game.score(), (2, 6));
    /// ```
    #[must_use]
    pub fn new(
        answer: &str,
        max_attempts: usize,
        valid_words: &'a WordList,
        game_number: u32,
    ) -> Self {
        let answer = answer.to_lowercase();
        tracing::debug!(game_number, max_attempts, "new game");

        Self {
            complete: false,
            attempts: 0,
            answer,
            grid: vec![None; max_attempts],
            valid_words,
            keyboard: Keyboard::new(),
            game_number,
        }
    }

    /// Submit a guess
    ///
    /// Returns `Ok(true)` when the guess is the answer. A rejected guess
    /// leaves the game exactly as it was.
    ///
    /// # Errors
    ///
    /// - [`PlayError::GameAlreadyEnded`] once the round is won or exhausted
    /// - [`PlayError::InvalidLength`] if the guess length differs from the answer's
    /// - [`PlayError::InvalidWord`] if the guess is not in the word list
    pub fn play(&mut self, word: &str) -> Result<bool, PlayError> {
        let word = word.to_lowercase();
        self.validate(&word).inspect_err(|err| {
            tracing::debug!(game_number = self.game_number, %err, "guess rejected");
        })?;

        let statuses = evaluate(&word, &self.answer);
        let row = build_row(&word, &statuses);

        for cell in &row {
            self.keyboard.record(cell.letter, cell.status);
        }
        self.grid[self.attempts] = Some(row);
        self.attempts += 1;
        self.complete = word == self.answer;

        tracing::debug!(
            game_number = self.game_number,
            attempt = self.attempts,
            won = self.complete,
            "guess accepted"
        );
        if self.has_ended() {
            tracing::info!(
                game_number = self.game_number,
                won = self.complete,
                attempts = self.attempts,
                "round over"
            );
        }

        Ok(self.complete)
    }

    /// Checks a lowercased guess
    ///
    /// Lowercasing can change the number of characters, so the length is
    /// measured after it.
    fn validate(&self, word: &str) -> Result<(), PlayError> {
        if self.has_ended() {
            return Err(PlayError::GameAlreadyEnded);
        }

        let expected = self.answer.chars().count();
        if word.chars().count() != expected {
            return Err(PlayError::InvalidLength { expected });
        }

        if !self.valid_words.contains(word) {
            return Err(PlayError::InvalidWord);
        }

        Ok(())
    }

    /// Whether the round is won or out of attempts
    #[inline]
    #[must_use]
    pub fn has_ended(&self) -> bool {
        self.complete || self.attempts == self.grid.len()
    }

    /// Whether the answer has been guessed
    #[inline]
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.complete
    }

    /// Attempts used so far against the attempt budget
    #[inline]
    #[must_use]
    pub fn score(&self) -> (usize, usize) {
        (self.attempts, self.grid.len())
    }

    /// The most recently played row, if any guess was accepted
    #[must_use]
    pub fn last_play(&self) -> Option<&[GridCell]> {
        let index = self.attempts.checked_sub(1)?;
        self.grid.get(index)?.as_deref()
    }

    /// Rows played so far, oldest first
    pub fn played_rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.grid.iter().map_while(Option::as_deref)
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub const fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    #[must_use]
    pub const fn game_number(&self) -> u32 {
        self.game_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{self, Absent, Correct, Present};

    fn tapir_words() -> WordList {
        WordList::from_slice(&["group", "prank", "spare", "tapir"])
    }

    fn at_words() -> WordList {
        WordList::from_slice(&["at", "ta"])
    }

    fn row(word: &str, statuses: &[LetterStatus]) -> Row {
        build_row(word, statuses)
    }

    fn tapir_rows() -> Vec<Row> {
        vec![
            row("group", &[Absent, Present, Absent, Absent, Present]),
            row("prank", &[Present, Present, Present, Absent, Absent]),
            row("spare", &[Absent, Present, Present, Present, Absent]),
            row("tapir", &[Correct; 5]),
        ]
    }

    #[test]
    fn new_game_lowercases_answer_and_starts_empty() {
        let words = tapir_words();
        let game = Game::new("TAPIR", 6, &words, 200);

        assert_eq!(game.answer(), "tapir");
        assert_eq!(game.grid, vec![None; 6]);
        assert_eq!(game.attempts, 0);
        assert!(!game.complete);
        assert_eq!(game.keyboard, Keyboard::new());
        assert_eq!(game.game_number(), 200);
    }

    #[test]
    fn new_game_accepts_answer_outside_word_list() {
        let words = at_words();
        let game = Game::new("bat", 3, &words, 199);

        assert_eq!(game.answer(), "bat");
        assert_eq!(game.score(), (0, 3));
    }

    #[test]
    fn five_letter_won() {
        let words = tapir_words();
        let mut game = Game::new("tapir", 6, &words, 200);
        let expected_rows = tapir_rows();

        for (i, (word, expected)) in ["group", "prank", "spare", "tapir"]
            .into_iter()
            .zip([false, false, false, true])
            .enumerate()
        {
            assert_eq!(game.play(word), Ok(expected), "try {i}");
            assert_eq!(game.complete, expected, "try {i}");
            assert_eq!(game.grid[i].as_ref(), Some(&expected_rows[i]), "try {i}");
            assert_eq!(game.attempts, i + 1, "try {i}");
        }

        assert!(game.has_ended());
        assert_eq!(game.score(), (4, 6));
        assert_eq!(game.grid[4], None);
    }

    #[test]
    fn mixed_case_guesses_match_lowercase() {
        let words = tapir_words();
        let mut lower = Game::new("tapir", 6, &words, 200);
        let mut mixed = Game::new("tapir", 6, &words, 200);

        for (plain, shouty) in ["group", "prank", "spare", "tapir"]
            .into_iter()
            .zip(["grOUp", "PRAnk", "sPaRE", "TAPIR"])
        {
            assert_eq!(lower.play(plain), mixed.play(shouty));
        }

        assert_eq!(lower.grid, mixed.grid);
        assert!(mixed.is_won());
    }

    #[test]
    fn wrong_length_is_rejected_without_mutation() {
        let words = tapir_words();
        let mut game = Game::new("tapir", 6, &words, 200);
        let before = game.clone();

        for word in ["tape", "strong", ""] {
            let err = game.play(word).unwrap_err();
            assert_eq!(err, PlayError::InvalidLength { expected: 5 });
            assert_eq!(err.to_string(), "The entered word length is wrong, should be: 5");
        }
        assert_eq!(game, before);
    }

    #[test]
    fn unknown_word_is_rejected_without_mutation() {
        let words = tapir_words();
        let mut game = Game::new("tapir", 6, &words, 200);
        game.play("group").unwrap();
        let before = game.clone();

        assert_eq!(game.play("scrap"), Err(PlayError::InvalidWord));
        assert_eq!(game, before);
    }

    #[test]
    fn length_is_checked_after_lowercasing() {
        // 'İ' lowercases to "i\u{307}", one character longer
        let path = std::env::temp_dir().join(format!(
            "wordle_game_dotted_{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, "xİyz\n").unwrap();
        let words = crate::wordlists::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let mut game = Game::new("abcd", 6, &words, 1);
        let before = game.clone();

        assert_eq!(game.play("xİyz"), Err(PlayError::InvalidLength { expected: 4 }));
        assert_eq!(game, before);
    }

    #[test]
    fn two_letter_lost() {
        let words = at_words();
        let mut game = Game::new("at", 1, &words, 200);

        assert_eq!(game.play("ta"), Ok(false));
        assert_eq!(game.grid[0], Some(row("ta", &[Present, Present])));
        assert_eq!(game.attempts, 1);
        assert!(!game.complete);
        assert!(game.has_ended());
    }

    #[test]
    fn exhaustion_leaves_complete_false() {
        let words = tapir_words();
        let mut game = Game::new("tapir", 3, &words, 7);

        for word in ["group", "prank", "spare"] {
            assert_eq!(game.play(word), Ok(false));
        }

        assert!(game.has_ended());
        assert!(!game.is_won());
        assert_eq!(game.score(), (3, 3));
    }

    #[test]
    fn play_after_end_is_rejected() {
        let words = tapir_words();
        let mut won = Game::new("tapir", 6, &words, 1);
        won.play("tapir").unwrap();
        let before = won.clone();

        assert_eq!(won.play("group"), Err(PlayError::GameAlreadyEnded));
        assert_eq!(won, before);

        let words = at_words();
        let mut lost = Game::new("at", 1, &words, 1);
        lost.play("ta").unwrap();

        assert_eq!(lost.play("at"), Err(PlayError::GameAlreadyEnded));
        assert_eq!(lost.score(), (1, 1));
    }

    #[test]
    fn has_ended_tracks_progress() {
        let words = tapir_words();
        let mut game = Game::new("tapir", 6, &words, 200);
        assert!(!game.has_ended());

        game.play("group").unwrap();
        assert!(!game.has_ended());

        game.play("tapir").unwrap();
        assert!(game.has_ended());
    }

    #[test]
    fn last_play_returns_latest_row() {
        let words = tapir_words();
        let mut game = Game::new("tapir", 6, &words, 200);
        assert_eq!(game.last_play(), None);

        let rows = tapir_rows();
        for (word, expected) in ["group", "prank", "spare", "tapir"].into_iter().zip(&rows) {
            game.play(word).unwrap();
            assert_eq!(game.last_play(), Some(expected.as_slice()));
        }
    }

    #[test]
    fn keyboard_keeps_best_status() {
        let words = tapir_words();
        let mut game = Game::new("tapir", 6, &words, 200);

        game.play("group").unwrap();
        assert_eq!(game.keyboard().status('p'), Some(Present));
        assert_eq!(game.keyboard().status('g'), Some(Absent));

        game.play("tapir").unwrap();
        assert_eq!(game.keyboard().status('p'), Some(Correct));
        assert_eq!(game.keyboard().status('g'), Some(Absent));
        assert_eq!(game.keyboard().status('z'), None);
    }

    #[test]
    fn rounds_do_not_share_keyboards() {
        let words = tapir_words();
        let mut first = Game::new("tapir", 6, &words, 1);
        let second = Game::new("tapir", 6, &words, 2);

        first.play("spare").unwrap();

        assert_eq!(first.keyboard().status('s'), Some(Absent));
        assert_eq!(second.keyboard().status('s'), None);
    }

    #[test]
    fn played_rows_form_prefix() {
        let words = tapir_words();
        let mut game = Game::new("tapir", 6, &words, 200);
        assert_eq!(game.played_rows().count(), 0);

        game.play("group").unwrap();
        game.play("prank").unwrap();

        let played: Vec<_> = game.played_rows().collect();
        assert_eq!(played.len(), 2);
        assert_eq!(played[1], tapir_rows()[1].as_slice());
    }
}
