//! Word list loading from disk
//!
//! One word per line; blank lines are ignored and entries that are not purely
//! alphabetic are skipped with a warning.

use super::WordList;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("could not read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list {} contains no usable words", path.display())]
    Empty { path: PathBuf },
}

/// Load a word list from a file
///
/// # Errors
///
/// Returns [`WordListError::Io`] if the file cannot be read and
/// [`WordListError::Empty`] if no valid word remains after filtering.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::load_from_file;
///
/// let words = load_from_file("data/allowed.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let list = parse_words(&content);
    if list.is_empty() {
        return Err(WordListError::Empty {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(path = %path.display(), words = list.len(), "loaded word list");
    Ok(list)
}

fn parse_words(content: &str) -> WordList {
    let mut skipped = 0usize;
    let list = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| {
            let valid = line.chars().all(char::is_alphabetic);
            if !valid {
                skipped += 1;
            }
            valid
        })
        .collect();

    if skipped > 0 {
        tracing::warn!(skipped, "skipped non-alphabetic word list entries");
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_blank_and_invalid_lines() {
        let list = parse_words("crane\n\n  slate  \nsh0rt\nIRATE\n");

        assert_eq!(list.len(), 3);
        assert!(list.contains("crane"));
        assert!(list.contains("slate"));
        assert!(list.contains("irate"));
        assert!(!list.contains("sh0rt"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_from_file("definitely/not/a/real/list.txt").unwrap_err();
        assert!(matches!(err, WordListError::Io { .. }));
        assert!(err.to_string().contains("list.txt"));
    }

    #[test]
    fn file_without_words_is_empty_error() {
        let path = std::env::temp_dir()
            .join(format!("wordle_game_empty_{}.txt", std::process::id()));
        fs::write(&path, "\n123\n\n").unwrap();

        let err = load_from_file(&path).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(matches!(err, WordListError::Empty { .. }));
    }

    #[test]
    fn loads_words_from_file() {
        let path = std::env::temp_dir()
            .join(format!("wordle_game_words_{}.txt", std::process::id()));
        fs::write(&path, "group\nprank\nspare\ntapir\n").unwrap();

        let list = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(list.len(), 4);
        assert!(list.contains("TAPIR"));
    }
}
