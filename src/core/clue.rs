//! Clue representation
//!
//! A clue pairs a guessed code with the counts the hidden code is known to
//! produce against it.

use super::{Code, Hint, Response};

/// Error type for invalid clues
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClueError {
    #[error("digit matches {count} exceed code length {length}")]
    DigitMatchesOutOfRange { count: u8, length: usize },
    #[error("position matches {count} exceed code length {length}")]
    PositionMatchesOutOfRange { count: u8, length: usize },
}

/// One guess and its target counts
///
/// Clues are immutable once built. A clue whose position matches exceed its
/// digit matches is accepted; no candidate can satisfy it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clue {
    label: String,
    guess: Code,
    digit_matches: u8,
    position_matches: u8,
}

impl Clue {
    /// Create a new clue
    ///
    /// # Errors
    /// Returns `ClueError` if either count exceeds the guess length.
    pub fn new(
        label: impl Into<String>,
        guess: Code,
        digit_matches: u8,
        position_matches: u8,
    ) -> Result<Self, ClueError> {
        let length = guess.len();

        if usize::from(digit_matches) > length {
            return Err(ClueError::DigitMatchesOutOfRange {
                count: digit_matches,
                length,
            });
        }
        if usize::from(position_matches) > length {
            return Err(ClueError::PositionMatchesOutOfRange {
                count: position_matches,
                length,
            });
        }

        Ok(Self {
            label: label.into(),
            guess,
            digit_matches,
            position_matches,
        })
    }

    /// Diagnostic label; never used in evaluation
    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Code {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn digit_matches(&self) -> u8 {
        self.digit_matches
    }

    #[inline]
    #[must_use]
    pub const fn position_matches(&self) -> u8 {
        self.position_matches
    }

    /// Target counts as a response
    #[must_use]
    pub const fn target(&self) -> Response {
        Response {
            digit_matches: self.digit_matches,
            position_matches: self.position_matches,
        }
    }

    /// Check whether some code could satisfy this clue
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.position_matches <= self.digit_matches
    }

    /// Evaluate raw digits of the guess length against this clue
    pub(crate) fn hint_for(&self, candidate: &[u8]) -> Hint {
        let response = Response::score(candidate, self.guess.digits());
        Hint {
            digit_matches: response.digit_matches,
            position_matches: response.position_matches,
            satisfies: response == self.target(),
        }
    }

    /// Whether raw digits of the guess length satisfy this clue
    #[inline]
    pub(crate) fn accepts(&self, candidate: &[u8]) -> bool {
        Response::score(candidate, self.guess.digits()) == self.target()
    }
}
