//! Random puzzle generation
//!
//! Draws a hidden code, then keeps adding the most informative of a batch of
//! random probe guesses as a clue until exactly one code remains.

use super::{SolveError, Solver};
use super::analysis::select_best_probe;
use crate::core::{Clue, ClueError, Code, CodeError, Response, check_length};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Longest code the generator will enumerate
pub const MAX_GENERATED_LENGTH: usize = 6;

/// Error type for puzzle generation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Code(#[from] CodeError),
    #[error(transparent)]
    Clue(#[from] ClueError),
    #[error(transparent)]
    Solve(#[from] SolveError),
    #[error("generated codes are limited to {max} digits, got {0}", max = MAX_GENERATED_LENGTH)]
    UnsupportedLength(usize),
    #[error("{clues} clues still leave {remaining} candidate codes")]
    NotUnique { clues: usize, remaining: usize },
}

/// Generator settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Digits per code
    pub length: usize,
    /// Give up after this many clues
    pub max_clues: usize,
    /// Random probes drawn per clue
    pub samples: usize,
    /// Draw the hidden code and probes without repeated digits
    pub distinct_digits: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: 5,
            max_clues: 8,
            samples: 64,
            distinct_digits: false,
        }
    }
}

/// A generated hidden code and clues that determine it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    pub secret: Code,
    pub clues: Vec<Clue>,
}

/// Puzzle generator over a random source
pub struct PuzzleGenerator<R: Rng> {
    config: GeneratorConfig,
    rng: R,
}

impl PuzzleGenerator<StdRng> {
    /// Create a reproducible generator
    #[must_use]
    pub fn seeded(config: GeneratorConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PuzzleGenerator<R> {
    pub const fn new(config: GeneratorConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Generate one puzzle with a unique solution
    ///
    /// # Errors
    /// Returns `GenerateError` if the length is unsupported or `max_clues`
    /// clues do not pin down a single code.
    pub fn generate(&mut self) -> Result<GeneratedPuzzle, GenerateError> {
        let length = self.config.length;
        check_length(length)?;
        if length > MAX_GENERATED_LENGTH {
            return Err(GenerateError::UnsupportedLength(length));
        }

        let secret = self.random_code();
        let mut candidates = Solver::new(&[], length)?.solve().into_vec();
        let mut clues: Vec<Clue> = Vec::new();

        while candidates.len() > 1 && clues.len() < self.config.max_clues {
            let probes: Vec<Code> = (0..self.config.samples.max(1))
                .map(|_| self.random_code())
                .filter(|probe| *probe != secret)
                .collect();

            let Some((probe, entropy)) = select_best_probe(&probes, &candidates) else {
                continue;
            };

            let response = Response::score(secret.digits(), probe.digits());
            let clue = Clue::new(
                format!("Clue {}", clues.len() + 1),
                probe.clone(),
                response.digit_matches,
                response.position_matches,
            )?;

            candidates.retain(|c| clue.accepts(c.digits()));
            debug!(
                "Added clue {} {}/{} ({entropy:.3} bits), {} candidates remain",
                clue.guess(),
                clue.digit_matches(),
                clue.position_matches(),
                candidates.len()
            );
            clues.push(clue);
        }

        if candidates.len() == 1 {
            Ok(GeneratedPuzzle { secret, clues })
        } else {
            Err(GenerateError::NotUnique {
                clues: clues.len(),
                remaining: candidates.len(),
            })
        }
    }

    fn random_code(&mut self) -> Code {
        let length = self.config.length;
        let digits = if self.config.distinct_digits {
            let mut pool: Vec<u8> = (0..=9).collect();
            pool.shuffle(&mut self.rng);
            pool.truncate(length);
            pool
        } else {
            (0..length).map(|_| self.rng.random_range(0..=9)).collect()
        };
        Code::from_trusted(digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve;

    fn config(length: usize) -> GeneratorConfig {
        GeneratorConfig {
            length,
            max_clues: 12,
            samples: 32,
            distinct_digits: false,
        }
    }

    #[test]
    fn generated_puzzle_has_unique_solution() {
        let mut generator = PuzzleGenerator::seeded(config(3), 7);
        let puzzle = generator.generate().unwrap();

        let solutions = solve(&puzzle.clues, 3).unwrap();
        assert_eq!(solutions.unique(), Some(&puzzle.secret));
    }

    #[test]
    fn same_seed_same_puzzle() {
        let a = PuzzleGenerator::seeded(config(3), 42).generate().unwrap();
        let b = PuzzleGenerator::seeded(config(3), 42).generate().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_digits_respected() {
        let mut generator = PuzzleGenerator::seeded(
            GeneratorConfig {
                distinct_digits: true,
                ..config(4)
            },
            3,
        );
        let puzzle = generator.generate().unwrap();

        assert!(puzzle.secret.has_distinct_digits());
        assert!(puzzle.clues.iter().all(|c| c.guess().has_distinct_digits()));
    }

    #[test]
    fn clues_are_true_of_secret() {
        let puzzle = PuzzleGenerator::seeded(config(4), 11).generate().unwrap();
        for clue in &puzzle.clues {
            assert!(clue.accepts(puzzle.secret.digits()), "{}", clue.label());
            assert_ne!(clue.guess(), &puzzle.secret);
        }
    }

    #[test]
    fn gives_up_without_enough_clues() {
        let mut generator = PuzzleGenerator::seeded(
            GeneratorConfig {
                max_clues: 0,
                ..config(3)
            },
            1,
        );
        assert_eq!(
            generator.generate(),
            Err(GenerateError::NotUnique {
                clues: 0,
                remaining: 1000
            })
        );
    }

    #[test]
    fn rejects_long_codes() {
        let mut generator = PuzzleGenerator::seeded(config(MAX_GENERATED_LENGTH + 1), 1);
        assert_eq!(
            generator.generate(),
            Err(GenerateError::UnsupportedLength(MAX_GENERATED_LENGTH + 1))
        );
    }
}
