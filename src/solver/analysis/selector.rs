//! Entropy-maximizing probe selection

use super::calculator::calculate_entropy;
use crate::core::Code;
use rayon::prelude::*;

/// Select the probe with the highest entropy over `candidates`
///
/// Returns the probe and its entropy, or `None` if `probes` is empty.
/// Ties go to the later probe.
///
/// # Examples
/// ```
/// use codebreaker::core::Code;
/// use codebreaker::solver::analysis::select_best_probe;
///
/// let probes: Vec<Code> = vec!["99".parse().unwrap(), "12".parse().unwrap()];
/// let candidates: Vec<Code> = vec!["12".parse().unwrap(), "34".parse().unwrap()];
///
/// let (best, entropy) = select_best_probe(&probes, &candidates).unwrap();
/// assert_eq!(best.to_string(), "12");
/// assert!(entropy > 0.0);
/// ```
#[must_use]
pub fn select_best_probe<'a>(probes: &'a [Code], candidates: &[Code]) -> Option<(&'a Code, f64)> {
    probes
        .par_iter()
        .map(|probe| (probe, calculate_entropy(probe, candidates)))
        .max_by(|(_, e1), (_, e2)| e1.total_cmp(e2))
}
