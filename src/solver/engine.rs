//! Exhaustive clue solver
//!
//! Scans every code of the configured length in ascending numeric order and
//! keeps the ones that satisfy all clues.

use super::SolutionSet;
use crate::core::{
    Clue, Code, CodeError, MAX_CODE_LENGTH, PartialCode, Verdict, check_length, evaluate,
    space_size, validate_partial, write_digits,
};
use log::debug;
use rayon::prelude::*;

/// Error type for unsolvable inputs
///
/// An empty solution set is not an error; these are contract violations only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    #[error(transparent)]
    Code(#[from] CodeError),
    #[error("clue '{label}' has a guess of length {actual}, expected {expected}")]
    ClueLengthMismatch {
        label: String,
        expected: usize,
        actual: usize,
    },
}

/// Clue set bound to a code length
///
/// Construction checks every clue against the length once, so the scan
/// itself cannot fail.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    clues: &'a [Clue],
    length: usize,
}

impl<'a> Solver<'a> {
    /// Create a solver for codes of `length` digits
    ///
    /// # Errors
    /// Returns `SolveError` if the length is unsupported or any clue's guess
    /// has a different length.
    pub fn new(clues: &'a [Clue], length: usize) -> Result<Self, SolveError> {
        check_length(length)?;

        if let Some(clue) = clues.iter().find(|c| c.guess().len() != length) {
            return Err(SolveError::ClueLengthMismatch {
                label: clue.label().to_string(),
                expected: length,
                actual: clue.guess().len(),
            });
        }

        Ok(Self { clues, length })
    }

    #[inline]
    #[must_use]
    pub const fn clues(&self) -> &'a [Clue] {
        self.clues
    }

    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Number of codes in the candidate space
    #[must_use]
    pub fn space_size(&self) -> u64 {
        space_size(self.length)
    }

    /// Find every code consistent with all clues, scanning in parallel
    ///
    /// The result is in ascending numeric order and identical to
    /// [`Solver::solve_sequential`].
    #[must_use]
    pub fn solve(&self) -> SolutionSet {
        debug!(
            "Scanning {} candidates against {} clues in parallel",
            self.space_size(),
            self.clues.len()
        );

        let codes: Vec<Code> = (0..self.space_size())
            .into_par_iter()
            .filter_map(|value| self.candidate(value))
            .collect();

        debug!("Found {} solutions", codes.len());
        SolutionSet::from_sorted(self.length, codes)
    }

    /// Reference scan on the current thread
    #[must_use]
    pub fn solve_sequential(&self) -> SolutionSet {
        debug!(
            "Scanning {} candidates against {} clues",
            self.space_size(),
            self.clues.len()
        );

        let codes: Vec<Code> = (0..self.space_size())
            .filter_map(|value| self.candidate(value))
            .collect();

        debug!("Found {} solutions", codes.len());
        SolutionSet::from_sorted(self.length, codes)
    }

    /// Check whether `code` satisfies every clue
    ///
    /// # Errors
    /// Returns `CodeError::LengthMismatch` for a code of the wrong length.
    pub fn is_consistent(&self, code: &Code) -> Result<bool, CodeError> {
        self.check_code_length(code.len())?;
        Ok(self.accepts(code.digits()))
    }

    /// Clues that `code` fails, in clue order
    ///
    /// # Errors
    /// Returns `CodeError::LengthMismatch` for a code of the wrong length.
    pub fn failing_clues(&self, code: &Code) -> Result<Vec<&'a Clue>, CodeError> {
        let mut failing = Vec::new();
        for clue in self.clues {
            if !evaluate(code, clue)?.satisfies {
                failing.push(clue);
            }
        }
        Ok(failing)
    }

    /// Live verdict of a partial code against each clue, in clue order
    ///
    /// # Errors
    /// Returns `CodeError::LengthMismatch` for a partial code of the wrong length.
    pub fn verdicts(&self, partial: &PartialCode) -> Result<Vec<Verdict>, CodeError> {
        self.check_code_length(partial.len())?;
        self.clues
            .iter()
            .map(|clue| validate_partial(partial, clue))
            .collect()
    }

    fn check_code_length(&self, actual: usize) -> Result<(), CodeError> {
        if actual == self.length {
            Ok(())
        } else {
            Err(CodeError::LengthMismatch {
                expected: self.length,
                actual,
            })
        }
    }

    fn accepts(&self, digits: &[u8]) -> bool {
        self.clues.iter().all(|clue| clue.accepts(digits))
    }

    /// Decode `value` and return it as a code if it satisfies every clue
    fn candidate(&self, value: u64) -> Option<Code> {
        let mut buf = [0u8; MAX_CODE_LENGTH];
        let digits = &mut buf[..self.length];
        write_digits(value, digits);

        self.accepts(digits)
            .then(|| Code::from_trusted(digits.to_vec()))
    }
}

/// Solve `clues` over all codes of `length` digits
///
/// # Errors
/// Returns `SolveError` if the length is unsupported or a clue has a guess of
/// a different length.
///
/// # Examples
/// ```
/// use codebreaker::core::Clue;
/// use codebreaker::solver::solve;
///
/// let clues = vec![Clue::new("swap", "12".parse().unwrap(), 2, 0).unwrap()];
/// let solutions = solve(&clues, 2).unwrap();
/// assert_eq!(solutions.len(), 1);
/// assert_eq!(solutions.codes()[0].to_string(), "21");
/// ```
pub fn solve(clues: &[Clue], length: usize) -> Result<SolutionSet, SolveError> {
    Ok(Solver::new(clues, length)?.solve())
}
