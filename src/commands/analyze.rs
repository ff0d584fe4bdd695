//! Probe analysis command
//!
//! Measures how much a further clue built on a given guess would narrow the
//! current solution set.

use crate::core::{Code, Response};
use crate::solver::SolutionSet;
use crate::solver::analysis::{calculate_metrics, group_by_response};
use anyhow::{Context, Result, bail};

/// Result of analyzing a probe guess
pub struct AnalysisResult {
    pub probe: String,
    pub entropy: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub total_candidates: usize,
    /// Response groups, largest first
    pub partitions: Vec<(Response, usize)>,
}

/// Analyze a probe guess against the solutions of a puzzle
///
/// # Errors
///
/// Returns an error if:
/// - The probe is not a full code
/// - The probe length differs from the solutions' code length
pub fn analyze_probe(solutions: &SolutionSet, input: &str) -> Result<AnalysisResult> {
    let probe: Code = input
        .parse()
        .with_context(|| format!("Invalid probe '{input}'"))?;

    if probe.len() != solutions.code_length() {
        bail!(
            "Probe '{probe}' has {} digits, puzzle codes have {}",
            probe.len(),
            solutions.code_length()
        );
    }

    let metrics = calculate_metrics(&probe, solutions.codes());

    let mut partitions: Vec<(Response, usize)> = group_by_response(&probe, solutions.codes())
        .into_iter()
        .collect();
    partitions.sort_by(|(r1, n1), (r2, n2)| n2.cmp(n1).then(r2.cmp(r1)));

    Ok(AnalysisResult {
        probe: probe.to_string(),
        entropy: metrics.entropy,
        expected_remaining: metrics.expected_remaining,
        max_partition: metrics.max_partition,
        total_candidates: solutions.len(),
        partitions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzles::parse_clues;

    fn solutions(text: &str) -> SolutionSet {
        parse_clues(text).unwrap().solver().unwrap().solve()
    }

    #[test]
    fn analyze_splits_candidates() {
        let solutions = solutions("123 1 0\n");
        let result = analyze_probe(&solutions, "456").unwrap();

        assert_eq!(result.total_candidates, solutions.len());
        assert!(result.entropy > 0.0);
        assert!(result.entropy <= (solutions.len() as f64).log2());
        assert_eq!(
            result.partitions.iter().map(|(_, n)| n).sum::<usize>(),
            solutions.len()
        );
        assert_eq!(result.partitions[0].1, result.max_partition);
    }

    #[test]
    fn analyze_single_solution_has_no_entropy() {
        let solutions = solutions("12 2 0\n");
        let result = analyze_probe(&solutions, "34").unwrap();

        assert_eq!(result.total_candidates, 1);
        assert!(result.entropy.abs() < f64::EPSILON);
        assert_eq!(result.max_partition, 1);
    }

    #[test]
    fn analyze_rejects_wrong_length() {
        let solutions = solutions("12 2 0\n");
        assert!(analyze_probe(&solutions, "345").is_err());
        assert!(analyze_probe(&solutions, "3_").is_err());
    }
}
