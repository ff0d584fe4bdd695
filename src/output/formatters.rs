//! Formatting utilities for terminal output

use crate::core::{PartialCode, Response, Verdict};

/// Format a partial code with spaced slots, e.g. `3 _ 1 _ 7`
#[must_use]
pub fn spaced_code(partial: &PartialCode) -> String {
    partial
        .slots()
        .iter()
        .map(|slot| slot.map_or_else(|| "_".to_string(), |d| d.to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Describe a response in words
#[must_use]
pub fn response_label(response: Response) -> String {
    let digits = if response.digit_matches == 1 {
        "digit"
    } else {
        "digits"
    };
    format!(
        "{} {digits}, {} in place",
        response.digit_matches, response.position_matches
    )
}

/// Status word for a verdict
#[must_use]
pub const fn verdict_label(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Valid => "matches",
        Verdict::Invalid => "conflicts",
        Verdict::Unknown => "waiting",
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the most a split of `candidates` can give
#[must_use]
pub fn entropy_bar(entropy: f64, candidates: usize, width: usize) -> String {
    let max_entropy = (candidates.max(1) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}
