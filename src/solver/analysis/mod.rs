//! Information analysis of probe guesses
//!
//! Rates how well a new guess would split a set of candidate codes, using the
//! same Shannon entropy measure for clue design and puzzle generation.

mod calculator;
mod selector;

pub use calculator::{
    ProbeMetrics, calculate_entropy, calculate_metrics, group_by_response, shannon_entropy,
};
pub use selector::select_best_probe;
