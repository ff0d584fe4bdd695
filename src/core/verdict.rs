//! Live verdicts for in-progress codes

use super::code::{CodeError, MAX_CODE_LENGTH};
use super::{Clue, PartialCode};
use std::fmt;

/// Result of judging a partial code against one clue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Complete and satisfies the clue
    Valid,
    /// Complete and violates the clue
    Invalid,
    /// At least one position is unset
    Unknown,
}

impl Verdict {
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    #[must_use]
    pub const fn is_invalid(self) -> bool {
        matches!(self, Self::Invalid)
    }

    #[must_use]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Single-character status marker
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Valid => '✓',
            Self::Invalid => '✗',
            Self::Unknown => '?',
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Valid => "valid",
            Self::Invalid => "invalid",
            Self::Unknown => "unknown",
        };
        f.write_str(text)
    }
}

/// Judge an in-progress code against a single clue
///
/// Any unset position yields [`Verdict::Unknown`], whichever positions they
/// are. A complete code is evaluated exactly like a full candidate.
///
/// # Errors
/// Returns `CodeError::LengthMismatch` if the partial code and the clue's guess
/// differ in length.
///
/// # Examples
/// ```
/// use codebreaker::core::{Clue, PartialCode, Verdict, validate_partial};
///
/// let clue = Clue::new("swap", "12".parse().unwrap(), 2, 0).unwrap();
///
/// let partial: PartialCode = "_1".parse().unwrap();
/// assert_eq!(validate_partial(&partial, &clue).unwrap(), Verdict::Unknown);
///
/// let partial: PartialCode = "21".parse().unwrap();
/// assert_eq!(validate_partial(&partial, &clue).unwrap(), Verdict::Valid);
/// ```
pub fn validate_partial(partial: &PartialCode, clue: &Clue) -> Result<Verdict, CodeError> {
    let expected = clue.guess().len();
    if partial.len() != expected {
        return Err(CodeError::LengthMismatch {
            expected,
            actual: partial.len(),
        });
    }

    let mut digits = [0u8; MAX_CODE_LENGTH];
    for (slot, out) in partial.slots().iter().zip(digits.iter_mut()) {
        match *slot {
            Some(d) => *out = d,
            None => return Ok(Verdict::Unknown),
        }
    }

    if clue.accepts(&digits[..expected]) {
        Ok(Verdict::Valid)
    } else {
        Ok(Verdict::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swap_clue() -> Clue {
        Clue::new("swap", "12".parse().unwrap(), 2, 0).unwrap()
    }

    fn partial(s: &str) -> PartialCode {
        s.parse().unwrap()
    }

    #[test]
    fn unknown_when_any_position_unset() {
        let clue = swap_clue();
        for input in ["__", "_1", "2_", "1_", "_2"] {
            assert_eq!(
                validate_partial(&partial(input), &clue).unwrap(),
                Verdict::Unknown,
                "{input}"
            );
        }
    }

    #[test]
    fn valid_and_invalid_when_complete() {
        let clue = swap_clue();
        assert_eq!(
            validate_partial(&partial("21"), &clue).unwrap(),
            Verdict::Valid
        );
        assert_eq!(
            validate_partial(&partial("12"), &clue).unwrap(),
            Verdict::Invalid
        );
        assert_eq!(
            validate_partial(&partial("33"), &clue).unwrap(),
            Verdict::Invalid
        );
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let clue = swap_clue();
        assert_eq!(
            validate_partial(&partial("2_1"), &clue),
            Err(CodeError::LengthMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn verdict_helpers() {
        assert!(Verdict::Valid.is_valid());
        assert!(Verdict::Invalid.is_invalid());
        assert!(Verdict::Unknown.is_unknown());
        assert_eq!(Verdict::Unknown.symbol(), '?');
        assert_eq!(Verdict::Invalid.to_string(), "invalid");
    }
}
