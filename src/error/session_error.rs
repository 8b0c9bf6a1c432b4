use thiserror::Error;

use crate::error::{CalcError, ParseError};

#[derive(Debug, Error)]
/// Represents everything that can end an interactive calculator session.
pub enum SessionError {
    /// A line could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A calculation failed.
    #[error(transparent)]
    Calc(#[from] CalcError),
    /// Reading input or writing prompts and results failed.
    #[error("Error: I/O failure: {0}.")]
    Io(#[from] std::io::Error),
    /// The input ended while a line was still required.
    #[error("Error: Input ended while waiting for {expected}.")]
    EndOfInput {
        /// What the session was waiting for.
        expected: &'static str,
    },
    /// The area menu choice does not name a shape.
    #[error("Error: Unknown shape {choice}. Choose 1, 2 or 3.")]
    UnknownShape {
        /// The number that was entered.
        choice: i32,
    },
    /// The user typed `exit` at a prompt.
    #[error("Cancelled.")]
    Cancelled,
}
