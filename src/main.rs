//! Wordle Game - CLI
//!
//! Plays one round in the terminal and prints a shareable summary at the end.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, builder::RangedU64ValueParser};
use std::io;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use wordle_game::{
    commands::{AnswerSource, GameConfig, RoundOutcome, run_round},
    game::{DEFAULT_MAX_ATTEMPTS, Game, MAX_ATTEMPTS_LIMIT},
    wordlists::{ANSWERS, WORD_LENGTH, WordList, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden word in a limited number of tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of guesses allowed (1-100)
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_MAX_ATTEMPTS,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_ATTEMPTS_LIMIT as u64)
    )]
    tries: usize,

    /// Accepted guesses: 'all' (default), 'answers', or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Play with this answer instead of picking one
    #[arg(short, long, global = true)]
    answer: Option<String>,

    /// Puzzle number shown in the share text (also picks the daily answer)
    #[arg(short = 'n', long, global = true)]
    game_number: Option<u32>,

    /// Log level used when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Today's puzzle (default)
    Daily,

    /// A random puzzle
    Random {
        /// Seed for a reproducible answer
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// Load the accepted guesses based on the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<WordList> {
    let list = match wordlist_mode {
        "all" => WordList::allowed(),
        "answers" => WordList::answers(),
        path => load_from_file(path).with_context(|| format!("loading word list '{path}'"))?,
    };
    tracing::info!(mode = wordlist_mode, words = list.len(), "word list ready");
    Ok(list)
}

fn build_config(cli: &Cli) -> GameConfig {
    let source = match (&cli.answer, &cli.command) {
        (Some(answer), _) => AnswerSource::Fixed(answer.clone()),
        (None, Some(Commands::Random { seed })) => AnswerSource::Random { seed: *seed },
        (None, Some(Commands::Daily) | None) => AnswerSource::Daily,
    };
    // The embedded lists only hold five-letter words
    let word_length = matches!(cli.wordlist.as_str(), "all" | "answers").then_some(WORD_LENGTH);

    GameConfig::new(cli.tries, source)
        .with_game_number(cli.game_number)
        .with_word_length(word_length)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let valid_words = load_wordlist(&cli.wordlist)?;
    let round = build_config(&cli)
        .resolve(ANSWERS)
        .context("invalid game settings")?;

    if !valid_words.contains(&round.answer) {
        tracing::warn!("the answer is not in the word list and cannot be typed as a guess");
    }

    let mut game = Game::new(&round.answer, cli.tries, &valid_words, round.game_number);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let outcome = run_round(&mut game, stdin.lock(), &mut stdout).context("terminal I/O failed")?;

    tracing::info!(?outcome, "finished");
    if outcome == RoundOutcome::Abandoned {
        println!("Come back to finish puzzle {}!", round.game_number);
    }
    Ok(())
}
