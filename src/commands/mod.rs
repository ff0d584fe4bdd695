//! Command implementations

pub mod analyze;
pub mod check;
pub mod explain;
pub mod generate;
pub mod play;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_probe};
pub use check::{CheckResult, ClueVerdict, check_partial};
pub use explain::{ClueExplanation, Explanation, explain_code};
pub use generate::{GenerateOptions, SeededPuzzle, run_generate};
pub use play::{PlayEvent, PlaySession, run_play};
pub use solve::{SolveConfig, SolveReport, run_solve};
