//! Hint evaluation between a candidate code and a clue
//!
//! The two counts are NOT classic black/white pegs:
//! - `position_matches` counts slots holding the same digit in both codes
//! - `digit_matches` is the full multiset overlap of the two codes' digits,
//!   including the digits already counted as position matches

use super::code::{CodeError, DIGIT_COUNT};
use super::{Clue, Code};

/// The pair of counts one code produces against another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Response {
    pub digit_matches: u8,
    pub position_matches: u8,
}

impl Response {
    /// Score `candidate` against `guess`
    ///
    /// # Errors
    /// Returns `CodeError::LengthMismatch` if the codes differ in length.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::{Code, Response};
    ///
    /// let candidate: Code = "11223".parse().unwrap();
    /// let guess: Code = "12133".parse().unwrap();
    /// let response = Response::between(&candidate, &guess).unwrap();
    /// assert_eq!(response.digit_matches, 4);
    /// assert_eq!(response.position_matches, 2);
    /// ```
    pub fn between(candidate: &Code, guess: &Code) -> Result<Self, CodeError> {
        if candidate.len() != guess.len() {
            return Err(CodeError::LengthMismatch {
                expected: guess.len(),
                actual: candidate.len(),
            });
        }

        Ok(Self::score(candidate.digits(), guess.digits()))
    }

    /// Unchecked kernel the solver runs for every candidate
    ///
    /// Callers guarantee equal lengths and digits in 0-9.
    #[must_use]
    pub(crate) fn score(candidate: &[u8], guess: &[u8]) -> Self {
        debug_assert_eq!(candidate.len(), guess.len(), "code lengths must agree");

        let mut candidate_counts = [0u8; DIGIT_COUNT];
        let mut guess_counts = [0u8; DIGIT_COUNT];
        let mut position_matches = 0;

        for (&c, &g) in candidate.iter().zip(guess) {
            candidate_counts[usize::from(c)] += 1;
            guess_counts[usize::from(g)] += 1;
            if c == g {
                position_matches += 1;
            }
        }

        let digit_matches = candidate_counts
            .iter()
            .zip(&guess_counts)
            .map(|(&c, &g)| c.min(g))
            .sum();

        Self {
            digit_matches,
            position_matches,
        }
    }
}

/// Outcome of evaluating one candidate against one clue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hint {
    pub digit_matches: u8,
    pub position_matches: u8,
    /// Both counts equal the clue's targets
    pub satisfies: bool,
}

impl Hint {
    #[must_use]
    pub const fn response(&self) -> Response {
        Response {
            digit_matches: self.digit_matches,
            position_matches: self.position_matches,
        }
    }
}

/// Evaluate a fully specified `candidate` against `clue`
///
/// # Errors
/// Returns `CodeError::LengthMismatch` if the candidate and the clue's guess
/// differ in length.
///
/// # Examples
/// ```
/// use codebreaker::core::{Clue, Code, evaluate};
///
/// let clue = Clue::new("swap", "12".parse().unwrap(), 2, 0).unwrap();
/// let hint = evaluate(&"21".parse().unwrap(), &clue).unwrap();
/// assert!(hint.satisfies);
///
/// let hint = evaluate(&"12".parse().unwrap(), &clue).unwrap();
/// assert_eq!((hint.digit_matches, hint.position_matches), (2, 2));
/// assert!(!hint.satisfies);
/// ```
pub fn evaluate(candidate: &Code, clue: &Clue) -> Result<Hint, CodeError> {
    let expected = clue.guess().len();
    if candidate.len() != expected {
        return Err(CodeError::LengthMismatch {
            expected,
            actual: candidate.len(),
        });
    }

    Ok(clue.hint_for(candidate.digits()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    #[test]
    fn score_identical_codes() {
        let response = Response::score(&[3, 9, 1, 5, 7], &[3, 9, 1, 5, 7]);
        assert_eq!(response.digit_matches, 5);
        assert_eq!(response.position_matches, 5);
    }

    #[test]
    fn score_disjoint_codes() {
        let response = Response::score(&[0, 1, 2], &[3, 4, 5]);
        assert_eq!(response.digit_matches, 0);
        assert_eq!(response.position_matches, 0);
    }

    #[test]
    fn digit_matches_include_position_matches() {
        // 39157 vs 39517: every digit shared, 3, 9 and 7 in place
        let response = Response::score(&[3, 9, 1, 5, 7], &[3, 9, 5, 1, 7]);
        assert_eq!(response.digit_matches, 5);
        assert_eq!(response.position_matches, 3);
    }

    #[test]
    fn digit_matches_use_multiset_minimum() {
        // candidate has three 0s, guess has one
        let response = Response::score(&[0, 0, 0, 1], &[2, 0, 3, 4]);
        assert_eq!(response.digit_matches, 1);
        assert_eq!(response.position_matches, 1);

        let response = Response::score(&[1, 1, 2, 2, 3], &[1, 2, 1, 3, 3]);
        assert_eq!(response.digit_matches, 4);
        assert_eq!(response.position_matches, 2);
    }

    #[test]
    fn score_is_symmetric() {
        let a = [4, 0, 8, 7, 5];
        let b = [0, 0, 7, 7, 1];
        assert_eq!(Response::score(&a, &b), Response::score(&b, &a));
    }

    #[test]
    fn between_checks_lengths() {
        let response = Response::between(&code("39157"), &code("39517")).unwrap();
        assert_eq!(response, Response::score(&[3, 9, 1, 5, 7], &[3, 9, 5, 1, 7]));

        assert_eq!(
            Response::between(&code("123"), &code("12")),
            Err(CodeError::LengthMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn hint_response_matches_counts() {
        let clue = Clue::new("a", code("40875"), 2, 0).unwrap();
        let hint = evaluate(&code("39157"), &clue).unwrap();
        assert_eq!(hint.response(), clue.target());
        assert_eq!(
            hint.response(),
            Response::between(&code("39157"), &code("40875")).unwrap()
        );
    }

    #[test]
    fn evaluate_reports_counts_and_verdict() {
        let clue = Clue::new("a", code("40875"), 2, 0).unwrap();

        let hint = evaluate(&code("39157"), &clue).unwrap();
        assert_eq!(hint.digit_matches, 2);
        assert_eq!(hint.position_matches, 0);
        assert!(hint.satisfies);

        let hint = evaluate(&code("40157"), &clue).unwrap();
        assert_eq!(hint.position_matches, 2);
        assert!(!hint.satisfies);
    }

    #[test]
    fn evaluate_rejects_length_mismatch() {
        let clue = Clue::new("a", code("12"), 2, 0).unwrap();
        assert_eq!(
            evaluate(&code("123"), &clue),
            Err(CodeError::LengthMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn inconsistent_clue_never_satisfied() {
        // more position matches than digit matches is impossible
        let clue = Clue::new("broken", code("12"), 1, 2).unwrap();
        for value in 0..100 {
            let candidate = Code::from_value(value, 2).unwrap();
            assert!(!evaluate(&candidate, &clue).unwrap().satisfies);
        }
    }
}
