//! Core domain types for the lock puzzle
//!
//! Pure value types with no I/O: codes, partial codes, clues and the
//! hint evaluation that relates them.

mod clue;
mod code;
mod hint;
mod partial;
mod verdict;

pub use clue::{Clue, ClueError};
pub use code::{Code, CodeError, DIGIT_COUNT, MAX_CODE_LENGTH};
pub use hint::{Hint, Response, evaluate};
pub use partial::PartialCode;
pub use verdict::{Verdict, validate_partial};

pub(crate) use code::{check_length, space_size, write_digits};
