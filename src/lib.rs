//! Codebreaker
//!
//! A constraint-based engine for digit-lock puzzles: finds every code
//! consistent with a set of clues and judges in-progress codes clue by clue.
//!
//! # Quick Start
//!
//! ```rust
//! use codebreaker::core::{Clue, PartialCode, Verdict, validate_partial};
//! use codebreaker::solver::solve;
//!
//! // Both digits of 12 are in the code, neither in its place
//! let clues = vec![Clue::new("swap", "12".parse().unwrap(), 2, 0).unwrap()];
//!
//! let solutions = solve(&clues, 2).unwrap();
//! assert_eq!(solutions.unique().unwrap().to_string(), "21");
//!
//! let partial: PartialCode = "_1".parse().unwrap();
//! assert_eq!(validate_partial(&partial, &clues[0]).unwrap(), Verdict::Unknown);
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Puzzle configuration
pub mod puzzles;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
