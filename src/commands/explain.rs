//! Code explanation command
//!
//! Spells out the digit and position counts a full code produces against
//! each clue, next to the counts the clue demands.

use crate::core::{Code, Hint, Response, evaluate};
use crate::puzzles::Puzzle;
use anyhow::{Context, Result};

/// Counts for one clue
pub struct ClueExplanation {
    pub label: String,
    pub guess: String,
    pub hint: Hint,
    /// Counts the clue demands
    pub target: Response,
}

/// Result of explaining a code
pub struct Explanation {
    pub code: Code,
    pub clues: Vec<ClueExplanation>,
}

impl Explanation {
    /// Whether every clue is satisfied
    #[must_use]
    pub fn satisfies_all(&self) -> bool {
        self.clues.iter().all(|c| c.hint.satisfies)
    }
}

/// Explain how `input` relates to every clue of `puzzle`
///
/// # Errors
///
/// Returns an error if the input is not a full code of the puzzle's length.
pub fn explain_code(puzzle: &Puzzle, input: &str) -> Result<Explanation> {
    let code: Code = input
        .parse()
        .with_context(|| format!("Invalid code '{input}'"))?;

    let clues = puzzle
        .clues()
        .iter()
        .map(|clue| -> Result<ClueExplanation> {
            let hint = evaluate(&code, clue)?;
            Ok(ClueExplanation {
                label: clue.label().to_string(),
                guess: clue.guess().to_string(),
                hint,
                target: clue.target(),
            })
        })
        .collect::<Result<Vec<_>>>()
        .with_context(|| format!("Cannot explain '{code}'"))?;

    Ok(Explanation { code, clues })
}
