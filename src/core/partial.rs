//! In-progress codes with unset positions

use super::code::{Code, CodeError, check_length};
use std::fmt;
use std::str::FromStr;

/// A code the player is still filling in
///
/// Each slot is either a digit or unset (`None`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartialCode {
    slots: Vec<Option<u8>>,
}

impl PartialCode {
    /// Create a partial code with every position unset
    ///
    /// # Errors
    /// Returns `CodeError::InvalidLength` for an unsupported length.
    pub fn unset(length: usize) -> Result<Self, CodeError> {
        check_length(length)?;
        Ok(Self {
            slots: vec![None; length],
        })
    }

    /// Create a partial code from raw slots
    ///
    /// # Errors
    /// Returns `CodeError` for an unsupported length or a digit above 9.
    pub fn new(slots: Vec<Option<u8>>) -> Result<Self, CodeError> {
        check_length(slots.len())?;

        for (position, slot) in slots.iter().enumerate() {
            if let Some(digit) = *slot
                && digit > 9
            {
                return Err(CodeError::InvalidDigit { position, digit });
            }
        }

        Ok(Self { slots })
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Option<u8>] {
        &self.slots
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Get the digit at `position`, or `None` if unset or out of range
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<u8> {
        self.slots.get(position).copied().flatten()
    }

    /// Set the digit at `position`
    ///
    /// # Errors
    /// Returns `CodeError` if the position is out of range or the digit is above 9.
    pub fn set(&mut self, position: usize, digit: u8) -> Result<(), CodeError> {
        if digit > 9 {
            return Err(CodeError::InvalidDigit { position, digit });
        }
        *self.slot_mut(position)? = Some(digit);
        Ok(())
    }

    /// Unset the digit at `position`
    ///
    /// # Errors
    /// Returns `CodeError::PositionOutOfRange` if the position is out of range.
    pub fn clear(&mut self, position: usize) -> Result<(), CodeError> {
        *self.slot_mut(position)? = None;
        Ok(())
    }

    /// Check whether every position holds a digit
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Number of positions still unset
    #[must_use]
    pub fn unset_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_none()).count()
    }

    /// Convert to a full code, or `None` while any position is unset
    #[must_use]
    pub fn to_code(&self) -> Option<Code> {
        let digits: Option<Vec<u8>> = self.slots.iter().copied().collect();
        digits.and_then(|d| Code::new(d).ok())
    }

    fn slot_mut(&mut self, position: usize) -> Result<&mut Option<u8>, CodeError> {
        let length = self.slots.len();
        self.slots
            .get_mut(position)
            .ok_or(CodeError::PositionOutOfRange { position, length })
    }
}

impl From<&Code> for PartialCode {
    fn from(code: &Code) -> Self {
        Self {
            slots: code.digits().iter().copied().map(Some).collect(),
        }
    }
}

impl fmt::Display for PartialCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                Some(d) => write!(f, "{d}")?,
                None => write!(f, "_")?,
            }
        }
        Ok(())
    }
}

impl FromStr for PartialCode {
    type Err = CodeError;

    /// Parse digits and placeholders (`_`, `.`, `?`, `*`, `-`) such as `"2_1__"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slots = s
            .trim()
            .chars()
            .enumerate()
            .map(|(position, character)| match character {
                '_' | '.' | '?' | '*' | '-' => Ok(None),
                c => c
                    .to_digit(10)
                    .map(|d| Some(d as u8))
                    .ok_or(CodeError::InvalidCharacter {
                        position,
                        character,
                    }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_has_no_digits() {
        let partial = PartialCode::unset(5).unwrap();
        assert_eq!(partial.len(), 5);
        assert_eq!(partial.unset_count(), 5);
        assert!(!partial.is_complete());
        assert_eq!(partial.to_string(), "_____");
    }

    #[test]
    fn unset_rejects_bad_length() {
        assert_eq!(PartialCode::unset(0), Err(CodeError::InvalidLength(0)));
    }

    #[test]
    fn parse_with_placeholders() {
        let partial: PartialCode = "2_1.?".parse().unwrap();
        assert_eq!(partial.slots(), &[Some(2), None, Some(1), None, None]);
        assert_eq!(partial.to_string(), "2_1__");
    }

    #[test]
    fn parse_rejects_letters() {
        assert_eq!(
            "2x".parse::<PartialCode>(),
            Err(CodeError::InvalidCharacter {
                position: 1,
                character: 'x'
            })
        );
    }

    #[test]
    fn set_and_clear() {
        let mut partial = PartialCode::unset(2).unwrap();
        partial.set(1, 1).unwrap();
        assert_eq!(partial.get(1), Some(1));
        assert!(!partial.is_complete());

        partial.set(0, 2).unwrap();
        assert!(partial.is_complete());
        assert_eq!(partial.to_code(), Some("21".parse().unwrap()));

        partial.clear(0).unwrap();
        assert_eq!(partial.get(0), None);
        assert_eq!(partial.to_code(), None);
    }

    #[test]
    fn set_out_of_range() {
        let mut partial = PartialCode::unset(2).unwrap();
        assert_eq!(
            partial.set(2, 1),
            Err(CodeError::PositionOutOfRange {
                position: 2,
                length: 2
            })
        );
        assert_eq!(
            partial.set(0, 10),
            Err(CodeError::InvalidDigit {
                position: 0,
                digit: 10
            })
        );
    }

    #[test]
    fn from_code_is_complete() {
        let code: Code = "39157".parse().unwrap();
        let partial = PartialCode::from(&code);
        assert!(partial.is_complete());
        assert_eq!(partial.to_code(), Some(code));
    }
}
