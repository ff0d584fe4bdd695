//! Partial code checking command
//!
//! Judges an in-progress code against every clue, the way a live per-clue
//! status indicator would.

use crate::core::{PartialCode, Verdict};
use crate::puzzles::Puzzle;
use crate::solver::{DigitPolicy, SolutionSet};
use anyhow::{Context, Result};

/// Verdict for one clue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueVerdict {
    pub label: String,
    pub guess: String,
    pub verdict: Verdict,
}

/// Result of checking a partial code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub input: PartialCode,
    pub verdicts: Vec<ClueVerdict>,
    /// The digit policy allows the digits entered so far
    pub permitted: bool,
    /// Complete, permitted and a member of the solution set
    pub unlocked: bool,
}

impl CheckResult {
    /// Number of clues currently judged valid
    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.verdicts.iter().filter(|v| v.verdict.is_valid()).count()
    }
}

/// Check a partial code such as `"3_1_7"` against a puzzle
///
/// # Errors
///
/// Returns an error if:
/// - The input contains characters other than digits and placeholders
/// - The input length differs from the puzzle's code length
pub fn check_partial(
    puzzle: &Puzzle,
    solutions: &SolutionSet,
    input: &str,
    policy: DigitPolicy,
) -> Result<CheckResult> {
    let partial: PartialCode = input
        .parse()
        .with_context(|| format!("Invalid code '{input}'"))?;

    check(puzzle, solutions, partial, policy)
}

pub(crate) fn check(
    puzzle: &Puzzle,
    solutions: &SolutionSet,
    partial: PartialCode,
    policy: DigitPolicy,
) -> Result<CheckResult> {
    let verdicts = puzzle
        .solver()?
        .verdicts(&partial)
        .with_context(|| format!("Cannot check '{partial}'"))?;

    let verdicts = puzzle
        .clues()
        .iter()
        .zip(verdicts)
        .map(|(clue, verdict)| ClueVerdict {
            label: clue.label().to_string(),
            guess: clue.guess().to_string(),
            verdict,
        })
        .collect();

    let permitted = policy.permits_partial(&partial);
    let unlocked = permitted
        && partial
            .to_code()
            .is_some_and(|code| solutions.contains(&code));

    Ok(CheckResult {
        input: partial,
        verdicts,
        permitted,
        unlocked,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzles::{default_puzzle, parse_clues};

    fn setup() -> (Puzzle, SolutionSet) {
        let puzzle = default_puzzle().unwrap();
        let solutions = puzzle.solver().unwrap().solve();
        (puzzle, solutions)
    }

    #[test]
    fn incomplete_input_is_unknown_everywhere() {
        let (puzzle, solutions) = setup();
        let result = check_partial(&puzzle, &solutions, "39_57", DigitPolicy::Any).unwrap();

        assert!(result.verdicts.iter().all(|v| v.verdict.is_unknown()));
        assert!(!result.unlocked);
        assert_eq!(result.valid_count(), 0);
    }

    #[test]
    fn solution_unlocks() {
        let (puzzle, solutions) = setup();
        let result = check_partial(&puzzle, &solutions, "39157", DigitPolicy::Any).unwrap();

        assert_eq!(result.valid_count(), 5);
        assert!(result.unlocked);
    }

    #[test]
    fn wrong_code_reports_mixed_verdicts() {
        let (puzzle, solutions) = setup();
        let result = check_partial(&puzzle, &solutions, "39517", DigitPolicy::Any).unwrap();

        assert!(!result.unlocked);
        assert!(result.verdicts.iter().any(|v| v.verdict.is_invalid()));
        assert_eq!(result.verdicts[4].guess, "39517");
        assert!(result.verdicts[4].verdict.is_invalid());
    }

    #[test]
    fn policy_blocks_repeated_digits() {
        let puzzle = parse_clues("12 1 1\n").unwrap();
        let solutions = puzzle.solver().unwrap().solve();

        let result = check_partial(&puzzle, &solutions, "11", DigitPolicy::Distinct).unwrap();
        assert!(result.verdicts[0].verdict.is_valid());
        assert!(!result.permitted);
        assert!(!result.unlocked);

        let result = check_partial(&puzzle, &solutions, "11", DigitPolicy::Any).unwrap();
        assert!(result.unlocked);
    }

    #[test]
    fn rejects_wrong_length() {
        let (puzzle, solutions) = setup();
        assert!(check_partial(&puzzle, &solutions, "391", DigitPolicy::Any).is_err());
    }

    #[test]
    fn rejects_garbage() {
        let (puzzle, solutions) = setup();
        assert!(check_partial(&puzzle, &solutions, "39a57", DigitPolicy::Any).is_err());
    }
}
