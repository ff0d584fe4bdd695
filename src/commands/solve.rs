//! Puzzle solving command
//!
//! Enumerates the solution set of a puzzle and reports it.

use crate::puzzles::Puzzle;
use crate::solver::{DigitPolicy, SolutionSet};
use anyhow::Result;
use log::warn;
use std::time::{Duration, Instant};

/// Configuration for solving a puzzle
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveConfig {
    /// Scan on one thread instead of in parallel
    pub sequential: bool,
    /// Policy applied to the displayed solutions only
    pub policy: DigitPolicy,
}

/// Result of solving a puzzle
pub struct SolveReport {
    pub code_length: usize,
    pub clue_count: usize,
    pub space_size: u64,
    /// Every code consistent with the clues
    pub solutions: SolutionSet,
    /// Solutions the digit policy permits
    pub shown: SolutionSet,
    pub duration: Duration,
}

/// Solve a puzzle
///
/// An empty solution set is reported, not treated as an error.
///
/// # Errors
///
/// Returns an error if the puzzle's code length is unsupported.
pub fn run_solve(puzzle: &Puzzle, config: SolveConfig) -> Result<SolveReport> {
    let solver = puzzle.solver()?;
    let start = Instant::now();

    let solutions = if config.sequential {
        solver.solve_sequential()
    } else {
        solver.solve()
    };

    let duration = start.elapsed();

    if solutions.is_empty() {
        warn!(
            "No code satisfies all {} clues; the puzzle is misconfigured",
            puzzle.clues().len()
        );
    }

    let shown = solutions.filter_by(config.policy);

    Ok(SolveReport {
        code_length: solver.length(),
        clue_count: puzzle.clues().len(),
        space_size: solver.space_size(),
        solutions,
        shown,
        duration,
    })
}
