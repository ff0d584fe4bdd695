//! Clue solving and analysis
//!
//! The exhaustive solver plus the tooling built on top of it: digit
//! policies, probe analysis and puzzle generation.

pub mod analysis;
mod engine;
pub mod generator;
mod policy;
mod solution;

pub use engine::{SolveError, Solver, solve};
pub use generator::{GenerateError, GeneratedPuzzle, GeneratorConfig, PuzzleGenerator};
pub use policy::DigitPolicy;
pub use solution::SolutionSet;
