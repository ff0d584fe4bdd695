//! Shannon entropy calculation for clue responses
//!
//! Given a probe guess and set of candidates, computes the expected information gain.

use crate::core::{Code, Response};
use rustc_hash::FxHashMap;

/// Metrics for evaluating a probe guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after learning the response
    pub expected_remaining: f64,
    /// Largest group of candidates sharing one response (worst case)
    pub max_partition: usize,
    /// Number of distinct responses the probe can produce
    pub partitions: usize,
}

/// Calculate Shannon entropy for a probe against candidates
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing response x.
///
/// # Examples
/// ```
/// use codebreaker::core::Code;
/// use codebreaker::solver::analysis::calculate_entropy;
///
/// let probe: Code = "12".parse().unwrap();
/// let candidates: Vec<Code> = vec!["12".parse().unwrap(), "34".parse().unwrap()];
///
/// let entropy = calculate_entropy(&probe, &candidates);
/// assert!((entropy - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn calculate_entropy(probe: &Code, candidates: &[Code]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    shannon_entropy(&group_by_response(probe, candidates))
}

/// Group candidates by the response they produce against the probe
#[must_use]
pub fn group_by_response(probe: &Code, candidates: &[Code]) -> FxHashMap<Response, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let response = Response::score(candidate.digits(), probe.digits());
        *counts.entry(response).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from a response distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one response with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n responses
#[must_use]
pub fn shannon_entropy<S>(response_counts: &std::collections::HashMap<Response, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = response_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    response_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate entropy, expected remaining and worst-case partition together
#[must_use]
pub fn calculate_metrics(probe: &Code, candidates: &[Code]) -> ProbeMetrics {
    if candidates.is_empty() {
        return ProbeMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
            partitions: 0,
        };
    }

    let groups = group_by_response(probe, candidates);
    let total = candidates.len() as f64;

    let expected_remaining: f64 = groups
        .values()
        .map(|&size| {
            let p = size as f64 / total;
            p * size as f64
        })
        .sum();

    ProbeMetrics {
        entropy: shannon_entropy(&groups),
        expected_remaining,
        max_partition: groups.values().copied().max().unwrap_or(0),
        partitions: groups.len(),
    }
}
