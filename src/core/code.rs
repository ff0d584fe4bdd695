//! Fixed-length numeric code representation
//!
//! A code is an ordered sequence of decimal digits. Codes of the same length
//! order exactly like their zero-padded numeric values.

use std::fmt;
use std::str::FromStr;

/// Number of distinct digit values (0-9)
pub const DIGIT_COUNT: usize = 10;

/// Longest supported code; keeps the candidate space within `u64`
pub const MAX_CODE_LENGTH: usize = 10;

/// Error type for malformed codes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeError {
    #[error("code length must be between 1 and {max}, got {0}", max = MAX_CODE_LENGTH)]
    InvalidLength(usize),
    #[error("digit {digit} at position {position} is outside 0-9")]
    InvalidDigit { position: usize, digit: u8 },
    #[error("unexpected character {character:?} at position {position}")]
    InvalidCharacter { position: usize, character: char },
    #[error("value {value} does not fit in {length} digits")]
    ValueOutOfRange { value: u64, length: usize },
    #[error("position {position} is outside a code of length {length}")]
    PositionOutOfRange { position: usize, length: usize },
    #[error("expected a code of length {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// A fully specified code
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code {
    digits: Vec<u8>,
}

impl Code {
    /// Create a code from raw digits
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - Length is 0 or greater than [`MAX_CODE_LENGTH`]
    /// - Any digit is greater than 9
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::Code;
    ///
    /// let code = Code::new(vec![3, 9, 1, 5, 7]).unwrap();
    /// assert_eq!(code.to_string(), "39157");
    ///
    /// assert!(Code::new(vec![1, 10]).is_err());
    /// assert!(Code::new(vec![]).is_err());
    /// ```
    pub fn new(digits: Vec<u8>) -> Result<Self, CodeError> {
        check_length(digits.len())?;

        if let Some((position, &digit)) = digits.iter().enumerate().find(|&(_, &d)| d > 9) {
            return Err(CodeError::InvalidDigit { position, digit });
        }

        Ok(Self { digits })
    }

    /// Create the code whose zero-padded decimal form of width `length` is `value`
    ///
    /// # Errors
    /// Returns `CodeError` if the length is unsupported or `value >= 10^length`.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::Code;
    ///
    /// let code = Code::from_value(42, 4).unwrap();
    /// assert_eq!(code.digits(), &[0, 0, 4, 2]);
    /// assert_eq!(code.value(), 42);
    /// ```
    pub fn from_value(value: u64, length: usize) -> Result<Self, CodeError> {
        check_length(length)?;

        if value >= space_size(length) {
            return Err(CodeError::ValueOutOfRange { value, length });
        }

        let mut digits = vec![0; length];
        write_digits(value, &mut digits);
        Ok(Self { digits })
    }

    /// Wrap digits already known to be valid
    pub(crate) fn from_trusted(digits: Vec<u8>) -> Self {
        debug_assert!(check_length(digits.len()).is_ok());
        debug_assert!(digits.iter().all(|&d| d <= 9));
        Self { digits }
    }

    /// Get the digits of the code
    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Get the number of digits
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always false: a code holds at least one digit
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Numeric value of the code read as a base-10 number
    #[must_use]
    pub fn value(&self) -> u64 {
        self.digits
            .iter()
            .fold(0, |acc, &d| acc * 10 + u64::from(d))
    }

    /// Check whether no digit appears twice
    #[must_use]
    pub fn has_distinct_digits(&self) -> bool {
        let mut seen = [false; DIGIT_COUNT];
        self.digits
            .iter()
            .all(|&d| !std::mem::replace(&mut seen[usize::from(d)], true))
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.digits {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .trim()
            .chars()
            .enumerate()
            .map(|(position, character)| {
                character
                    .to_digit(10)
                    .map(|d| d as u8)
                    .ok_or(CodeError::InvalidCharacter {
                        position,
                        character,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(digits)
    }
}

impl TryFrom<&[u8]> for Code {
    type Error = CodeError;

    fn try_from(digits: &[u8]) -> Result<Self, Self::Error> {
        Self::new(digits.to_vec())
    }
}

pub(crate) fn check_length(length: usize) -> Result<(), CodeError> {
    if (1..=MAX_CODE_LENGTH).contains(&length) {
        Ok(())
    } else {
        Err(CodeError::InvalidLength(length))
    }
}

/// Size of the candidate space for codes of `length` digits
///
/// Callers guarantee `length <= MAX_CODE_LENGTH`.
pub(crate) fn space_size(length: usize) -> u64 {
    10u64.pow(length as u32)
}

/// Write `value` as zero-padded decimal digits filling `out`
pub(crate) fn write_digits(mut value: u64, out: &mut [u8]) {
    for slot in out.iter_mut().rev() {
        *slot = (value % 10) as u8;
        value /= 10;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_creation_valid() {
        let code = Code::new(vec![3, 9, 1, 5, 7]).unwrap();
        assert_eq!(code.digits(), &[3, 9, 1, 5, 7]);
        assert_eq!(code.len(), 5);
        assert_eq!(code.value(), 39157);
    }

    #[test]
    fn code_creation_invalid_length() {
        assert_eq!(Code::new(vec![]), Err(CodeError::InvalidLength(0)));
        assert_eq!(Code::new(vec![0; 11]), Err(CodeError::InvalidLength(11)));
    }

    #[test]
    fn code_creation_invalid_digit() {
        assert_eq!(
            Code::new(vec![1, 2, 12]),
            Err(CodeError::InvalidDigit {
                position: 2,
                digit: 12
            })
        );
    }

    #[test]
    fn code_try_from_slice() {
        let digits: &[u8] = &[0, 4, 2];
        let code = Code::try_from(digits).unwrap();
        assert_eq!(code.to_string(), "042");

        let bad: &[u8] = &[1, 10];
        assert_eq!(
            Code::try_from(bad),
            Err(CodeError::InvalidDigit {
                position: 1,
                digit: 10
            })
        );
    }

    #[test]
    fn code_parse() {
        let code: Code = "04020".parse().unwrap();
        assert_eq!(code.digits(), &[0, 4, 0, 2, 0]);
        assert_eq!(code.to_string(), "04020");
    }

    #[test]
    fn code_parse_rejects_non_digits() {
        assert_eq!(
            "12a4".parse::<Code>(),
            Err(CodeError::InvalidCharacter {
                position: 2,
                character: 'a'
            })
        );
        assert!("".parse::<Code>().is_err());
        assert!("1_3".parse::<Code>().is_err());
    }

    #[test]
    fn code_from_value_zero_padded() {
        let code = Code::from_value(7, 3).unwrap();
        assert_eq!(code.digits(), &[0, 0, 7]);

        let max = Code::from_value(99_999, 5).unwrap();
        assert_eq!(max.to_string(), "99999");
    }

    #[test]
    fn code_from_value_out_of_range() {
        assert_eq!(
            Code::from_value(100, 2),
            Err(CodeError::ValueOutOfRange {
                value: 100,
                length: 2
            })
        );
    }

    #[test]
    fn code_from_value_max_length() {
        let code = Code::from_value(9_999_999_999, MAX_CODE_LENGTH).unwrap();
        assert!(code.digits().iter().all(|&d| d == 9));
    }

    #[test]
    fn code_ordering_matches_numeric_value() {
        let a: Code = "01999".parse().unwrap();
        let b: Code = "10000".parse().unwrap();
        let c: Code = "10001".parse().unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn code_distinct_digits() {
        assert!("39157".parse::<Code>().unwrap().has_distinct_digits());
        assert!(!"39137".parse::<Code>().unwrap().has_distinct_digits());
        assert!("0".parse::<Code>().unwrap().has_distinct_digits());
    }

    #[test]
    fn write_digits_fills_buffer() {
        let mut buf = [9u8; 4];
        write_digits(305, &mut buf);
        assert_eq!(buf, [0, 3, 0, 5]);
    }

    #[test]
    fn space_size_powers_of_ten() {
        assert_eq!(space_size(1), 10);
        assert_eq!(space_size(5), 100_000);
        assert_eq!(space_size(MAX_CODE_LENGTH), 10_000_000_000);
    }
}
