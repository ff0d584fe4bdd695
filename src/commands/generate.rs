//! Puzzle generation command
//!
//! Generates one or more puzzles with unique solutions.

use crate::solver::{GenerateError, GeneratedPuzzle, GeneratorConfig, PuzzleGenerator};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};

/// Seeds tried per puzzle before giving up
const MAX_ATTEMPTS: u64 = 8;

/// Options for generating puzzles
#[derive(Debug, Clone, Copy)]
pub struct GenerateOptions {
    pub config: GeneratorConfig,
    /// Base seed; random when absent
    pub seed: Option<u64>,
    pub count: usize,
}

/// A generated puzzle and the seed that reproduces it
#[derive(Debug, Clone)]
pub struct SeededPuzzle {
    pub seed: u64,
    pub puzzle: GeneratedPuzzle,
}

/// Generate `count` puzzles
///
/// Each puzzle gets its own seed derived from the base seed. A seed whose
/// clues fail to pin down one code is skipped for the next one.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or a puzzle cannot be
/// generated within the attempt limit.
pub fn run_generate(options: &GenerateOptions) -> Result<Vec<SeededPuzzle>> {
    let base_seed = options.seed.unwrap_or_else(rand::random);
    info!("Generating {} puzzles from seed {base_seed}", options.count);

    let pb = (options.count > 1)
        .then(|| -> Result<ProgressBar> {
            let pb = ProgressBar::new(options.count as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")?
                    .progress_chars("█▓▒░"),
            );
            Ok(pb)
        })
        .transpose()?;

    let mut puzzles = Vec::with_capacity(options.count);
    let mut seed = base_seed;

    for _ in 0..options.count {
        let mut attempts = 0;
        let puzzle = loop {
            attempts += 1;
            let current = seed;
            seed = seed.wrapping_add(1);

            match PuzzleGenerator::seeded(options.config, current).generate() {
                Ok(puzzle) => {
                    break SeededPuzzle {
                        seed: current,
                        puzzle,
                    };
                }
                Err(e @ GenerateError::NotUnique { .. }) if attempts < MAX_ATTEMPTS => {
                    warn!("Seed {current}: {e}; trying the next seed");
                }
                Err(e) => return Err(e.into()),
            }
        };

        puzzles.push(puzzle);
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message("Complete!");
    }

    Ok(puzzles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve;

    fn options(count: usize) -> GenerateOptions {
        GenerateOptions {
            config: GeneratorConfig {
                length: 3,
                max_clues: 12,
                samples: 32,
                distinct_digits: false,
            },
            seed: Some(5),
            count,
        }
    }

    #[test]
    fn generates_requested_count() {
        let puzzles = run_generate(&options(3)).unwrap();
        assert_eq!(puzzles.len(), 3);

        for seeded in &puzzles {
            let solutions = solve(&seeded.puzzle.clues, 3).unwrap();
            assert_eq!(solutions.unique(), Some(&seeded.puzzle.secret));
        }
    }

    #[test]
    fn seeds_are_reproducible() {
        let first = run_generate(&options(1)).unwrap();
        let again = PuzzleGenerator::seeded(options(1).config, first[0].seed)
            .generate()
            .unwrap();
        assert_eq!(first[0].puzzle, again);
    }

    #[test]
    fn invalid_length_fails() {
        let mut opts = options(1);
        opts.config.length = 0;
        assert!(run_generate(&opts).is_err());
    }
}
