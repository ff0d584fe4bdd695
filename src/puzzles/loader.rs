//! Clue file parsing
//!
//! One clue per line: `<guess> <digit matches> <position matches> [label...]`.
//! Blank lines and lines starting with `#` are ignored.

use super::{CLUES, Puzzle};
use crate::core::{Clue, Code};
use log::info;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for puzzle configuration
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("clue '{label}' has a guess of length {actual}, expected {expected}")]
    MixedLengths {
        label: String,
        expected: usize,
        actual: usize,
    },
    #[error("puzzle holds no clues")]
    Empty,
}

/// Parse clue file text into a puzzle
///
/// # Errors
/// Returns `PuzzleError::Parse` with the 1-based line number for malformed
/// lines, or the `Puzzle::new` errors for empty or mixed-length clue sets.
///
/// # Examples
/// ```
/// use codebreaker::puzzles::parse_clues;
///
/// let puzzle = parse_clues("# swap\n12 2 0 both digits, wrong places\n").unwrap();
/// assert_eq!(puzzle.code_length(), 2);
/// assert_eq!(puzzle.clues()[0].label(), "both digits, wrong places");
/// ```
pub fn parse_clues(text: &str) -> Result<Puzzle, PuzzleError> {
    let mut clues = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let clue = parse_line(trimmed).map_err(|message| PuzzleError::Parse {
            line: index + 1,
            message,
        })?;
        clues.push(clue);
    }

    Puzzle::new(clues)
}

fn parse_line(line: &str) -> Result<Clue, String> {
    let (guess, rest) = next_field(line);
    let (digit_matches, rest) = next_field(rest);
    let (position_matches, label) = next_field(rest);

    let guess: Code = guess
        .parse()
        .map_err(|e| format!("invalid guess '{guess}': {e}"))?;
    let digit_matches = parse_count(digit_matches, "digit matches")?;
    let position_matches = parse_count(position_matches, "position matches")?;

    Clue::new(label.trim(), guess, digit_matches, position_matches).map_err(|e| e.to_string())
}

/// Split off the first whitespace-separated field
fn next_field(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    text.split_once(char::is_whitespace).unwrap_or((text, ""))
}

fn parse_count(field: &str, name: &str) -> Result<u8, String> {
    if field.is_empty() {
        return Err(format!("missing {name}"));
    }
    field
        .parse()
        .map_err(|_| format!("invalid {name} '{field}'"))
}

/// Load a puzzle from a clue file
///
/// # Errors
/// Returns `PuzzleError::Io` if the file cannot be read, or any parse error.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Puzzle, PuzzleError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| PuzzleError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let puzzle = parse_clues(&content)?;
    info!(
        "Loaded {} clues of length {} from {}",
        puzzle.clues().len(),
        puzzle.code_length(),
        path.display()
    );
    Ok(puzzle)
}

/// Build the puzzle compiled into the binary
///
/// # Errors
/// Returns `PuzzleError::Parse` if the embedded table is malformed.
pub fn default_puzzle() -> Result<Puzzle, PuzzleError> {
    let clues = CLUES
        .iter()
        .enumerate()
        .map(|(index, &(guess, digit_matches, position_matches, label))| {
            let guess: Code = guess.parse().map_err(|e| PuzzleError::Parse {
                line: index + 1,
                message: format!("invalid guess '{guess}': {e}"),
            })?;
            Clue::new(label, guess, digit_matches, position_matches).map_err(|e| {
                PuzzleError::Parse {
                    line: index + 1,
                    message: e.to_string(),
                }
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Puzzle::new(clues)
}
