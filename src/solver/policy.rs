//! Optional digit-reuse policy for player input
//!
//! The solver never applies this; a host may use it to restrict what the
//! player can enter or which solutions it shows.

use crate::core::{Code, DIGIT_COUNT, PartialCode};

/// Whether a code may repeat digits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DigitPolicy {
    /// Any digit may appear any number of times
    #[default]
    Any,
    /// No digit may appear twice
    Distinct,
}

impl DigitPolicy {
    #[must_use]
    pub fn permits(self, code: &Code) -> bool {
        match self {
            Self::Any => true,
            Self::Distinct => code.has_distinct_digits(),
        }
    }

    /// Check the digits set so far; unset positions never conflict
    #[must_use]
    pub fn permits_partial(self, partial: &PartialCode) -> bool {
        match self {
            Self::Any => true,
            Self::Distinct => {
                let mut seen = [false; DIGIT_COUNT];
                partial
                    .slots()
                    .iter()
                    .flatten()
                    .all(|&d| !std::mem::replace(&mut seen[usize::from(d)], true))
            }
        }
    }
}
