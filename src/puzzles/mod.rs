//! Puzzle configuration
//!
//! A puzzle is a static clue set sharing one code length. The default puzzle is
//! compiled into the binary; others are loaded from clue files.

mod embedded;
pub mod loader;

pub use embedded::{CLUES, CODE_LENGTH};
pub use loader::{PuzzleError, default_puzzle, load_from_file, parse_clues};

use crate::core::Clue;
use crate::solver::{SolveError, Solver};

/// A clue set for codes of one length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    length: usize,
    clues: Vec<Clue>,
}

impl Puzzle {
    /// Create a puzzle from clues sharing one guess length
    ///
    /// # Errors
    /// Returns `PuzzleError` if there are no clues or the guesses differ in length.
    pub fn new(clues: Vec<Clue>) -> Result<Self, PuzzleError> {
        let length = clues.first().ok_or(PuzzleError::Empty)?.guess().len();

        if let Some(clue) = clues.iter().find(|c| c.guess().len() != length) {
            return Err(PuzzleError::MixedLengths {
                label: clue.label().to_string(),
                expected: length,
                actual: clue.guess().len(),
            });
        }

        Ok(Self { length, clues })
    }

    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    /// Solver over this puzzle's clues
    ///
    /// # Errors
    /// Returns `SolveError` if the code length is unsupported.
    pub fn solver(&self) -> Result<Solver<'_>, SolveError> {
        Solver::new(&self.clues, self.length)
    }

    /// Render in the clue file format read by [`parse_clues`]
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for clue in &self.clues {
            text.push_str(&format!(
                "{} {} {}",
                clue.guess(),
                clue.digit_matches(),
                clue.position_matches()
            ));
            if !clue.label().is_empty() {
                text.push(' ');
                text.push_str(clue.label());
            }
            text.push('\n');
        }
        text
    }
}
