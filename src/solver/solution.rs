//! Ordered set of codes consistent with a clue set

use super::DigitPolicy;
use crate::core::Code;

/// All codes satisfying a clue set, in ascending numeric order
///
/// May be empty (contradictory clues), a single code, or many codes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SolutionSet {
    length: usize,
    codes: Vec<Code>,
}

impl SolutionSet {
    pub(crate) fn from_sorted(length: usize, codes: Vec<Code>) -> Self {
        debug_assert!(codes.windows(2).all(|w| w[0] < w[1]), "codes must ascend");
        Self { length, codes }
    }

    /// Code length the set was solved for
    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Membership test for a submitted code
    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.codes.binary_search(code).is_ok()
    }

    /// The single solution, if there is exactly one
    #[must_use]
    pub fn unique(&self) -> Option<&Code> {
        match self.codes.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Code> {
        self.codes.iter()
    }

    /// Keep only the codes `policy` permits, preserving order
    #[must_use]
    pub fn filter_by(&self, policy: DigitPolicy) -> Self {
        Self {
            length: self.length,
            codes: self
                .codes
                .iter()
                .filter(|c| policy.permits(c))
                .cloned()
                .collect(),
        }
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Code> {
        self.codes
    }
}

impl<'a> IntoIterator for &'a SolutionSet {
    type Item = &'a Code;
    type IntoIter = std::slice::Iter<'a, Code>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}
