//! Line-oriented play mode
//!
//! The player edits an in-progress code one line at a time and sees a live
//! verdict per clue until the code opens the lock.

use super::check::{CheckResult, check};
use crate::core::PartialCode;
use crate::output::print_check_result;
use crate::puzzles::Puzzle;
use crate::solver::{DigitPolicy, SolutionSet};
use anyhow::{Result, bail};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What a line of input did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayEvent {
    /// The in-progress code changed
    Updated(CheckResult),
    /// Input rejected; the code is unchanged
    Rejected(String),
    /// The code is a solution
    Unlocked(CheckResult),
    Quit,
}

/// In-progress code plus the puzzle it is checked against
pub struct PlaySession<'a> {
    puzzle: &'a Puzzle,
    solutions: &'a SolutionSet,
    policy: DigitPolicy,
    current: PartialCode,
}

impl<'a> PlaySession<'a> {
    /// Start with every position unset
    ///
    /// # Errors
    ///
    /// Returns an error if the puzzle's code length is unsupported.
    pub fn new(
        puzzle: &'a Puzzle,
        solutions: &'a SolutionSet,
        policy: DigitPolicy,
    ) -> Result<Self> {
        Ok(Self {
            puzzle,
            solutions,
            policy,
            current: PartialCode::unset(puzzle.code_length())?,
        })
    }

    #[must_use]
    pub const fn current(&self) -> &PartialCode {
        &self.current
    }

    /// Apply one line of input
    ///
    /// Accepted forms:
    /// - a whole code with placeholders, e.g. `3_15_`
    /// - `set <position> <digit>` (positions count from 1)
    /// - `clear <position>`, `reset`, `quit`
    ///
    /// # Errors
    ///
    /// Returns an error only if checking the current code fails.
    pub fn apply(&mut self, line: &str) -> Result<PlayEvent> {
        let mut words = line.split_whitespace();
        let edited = match (words.next(), words.next(), words.next()) {
            (None, ..) => return Ok(PlayEvent::Rejected("Enter a code".to_string())),
            (Some("quit" | "q" | "exit"), None, _) => return Ok(PlayEvent::Quit),
            (Some("reset" | "r"), None, _) => PartialCode::unset(self.current.len()),
            (Some("set" | "s"), Some(position), Some(digit)) => {
                let (Some(position), Ok(digit)) = (parse_position(position), digit.parse::<u8>())
                else {
                    return Ok(PlayEvent::Rejected(format!("Invalid edit '{line}'")));
                };
                let mut next = self.current.clone();
                next.set(position, digit).map(|()| next)
            }
            (Some("clear" | "c"), Some(position), None) => {
                let Some(position) = parse_position(position) else {
                    return Ok(PlayEvent::Rejected(format!("Invalid edit '{line}'")));
                };
                let mut next = self.current.clone();
                next.clear(position).map(|()| next)
            }
            (Some(code), None, _) => code.parse::<PartialCode>().and_then(|next| {
                if next.len() == self.current.len() {
                    Ok(next)
                } else {
                    Err(crate::core::CodeError::LengthMismatch {
                        expected: self.current.len(),
                        actual: next.len(),
                    })
                }
            }),
            _ => return Ok(PlayEvent::Rejected(format!("Unknown command '{line}'"))),
        };

        let next = match edited {
            Ok(next) => next,
            Err(e) => return Ok(PlayEvent::Rejected(e.to_string())),
        };

        if !self.policy.permits_partial(&next) {
            return Ok(PlayEvent::Rejected(
                "Each digit may be used only once".to_string(),
            ));
        }

        self.current = next;
        let result = check(self.puzzle, self.solutions, self.current.clone(), self.policy)?;

        if result.unlocked {
            Ok(PlayEvent::Unlocked(result))
        } else {
            Ok(PlayEvent::Updated(result))
        }
    }
}

fn parse_position(text: &str) -> Option<usize> {
    text.parse::<usize>().ok()?.checked_sub(1)
}

/// Run the interactive play loop on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input fails or the puzzle has no solution.
pub fn run_play(puzzle: &Puzzle, solutions: &SolutionSet, policy: DigitPolicy) -> Result<()> {
    if solutions.is_empty() {
        bail!("This puzzle has no solution; check the clue file");
    }

    let mut session = PlaySession::new(puzzle, solutions, policy)?;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Codebreaker - Play Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "Find the {}-digit code. Enter a code like '3_1__' or edit it:",
        puzzle.code_length()
    );
    println!("  - 'set <pos> <digit>' to fill a position (positions start at 1)");
    println!("  - 'clear <pos>' to empty one, 'reset' to start over, 'quit' to exit\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} > ", session.current());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };

        match session.apply(line?.trim())? {
            PlayEvent::Updated(result) => print_check_result(&result),
            PlayEvent::Rejected(reason) => println!("{} {reason}\n", "✗".red()),
            PlayEvent::Unlocked(result) => {
                print_check_result(&result);
                println!("{}", "═".repeat(60).bright_cyan());
                println!("{}", "    🔓  U N L O C K E D !  🔓    ".bright_green().bold());
                println!("{}\n", "═".repeat(60).bright_cyan());
                return Ok(());
            }
            PlayEvent::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzles::parse_clues;

    fn swap_puzzle() -> (Puzzle, SolutionSet) {
        let puzzle = parse_clues("12 2 0 swap\n").unwrap();
        let solutions = puzzle.solver().unwrap().solve();
        (puzzle, solutions)
    }

    #[test]
    fn edits_build_up_the_code() {
        let (puzzle, solutions) = swap_puzzle();
        let mut session = PlaySession::new(&puzzle, &solutions, DigitPolicy::Any).unwrap();

        match session.apply("set 2 1").unwrap() {
            PlayEvent::Updated(result) => {
                assert_eq!(result.input.to_string(), "_1");
                assert!(result.verdicts[0].verdict.is_unknown());
            }
            other => panic!("unexpected event: {other:?}"),
        }

        assert!(matches!(
            session.apply("set 1 2").unwrap(),
            PlayEvent::Unlocked(_)
        ));
    }

    #[test]
    fn wrong_code_is_invalid() {
        let (puzzle, solutions) = swap_puzzle();
        let mut session = PlaySession::new(&puzzle, &solutions, DigitPolicy::Any).unwrap();

        match session.apply("12").unwrap() {
            PlayEvent::Updated(result) => assert!(result.verdicts[0].verdict.is_invalid()),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn clear_and_reset() {
        let (puzzle, solutions) = swap_puzzle();
        let mut session = PlaySession::new(&puzzle, &solutions, DigitPolicy::Any).unwrap();

        session.apply("33").unwrap();
        session.apply("clear 1").unwrap();
        assert_eq!(session.current().to_string(), "_3");

        session.apply("reset").unwrap();
        assert_eq!(session.current().to_string(), "__");
    }

    #[test]
    fn rejected_input_keeps_code() {
        let (puzzle, solutions) = swap_puzzle();
        let mut session = PlaySession::new(&puzzle, &solutions, DigitPolicy::Distinct).unwrap();

        session.apply("3_").unwrap();
        for line in ["", "33", "123", "set 0 1", "set 3 1", "set 1 x", "dance"] {
            assert!(
                matches!(session.apply(line).unwrap(), PlayEvent::Rejected(_)),
                "{line}"
            );
        }
        assert_eq!(session.current().to_string(), "3_");
    }

    #[test]
    fn quit_command() {
        let (puzzle, solutions) = swap_puzzle();
        let mut session = PlaySession::new(&puzzle, &solutions, DigitPolicy::Any).unwrap();
        assert_eq!(session.apply("quit").unwrap(), PlayEvent::Quit);
    }
}
