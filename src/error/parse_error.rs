use std::fmt::Display;

use thiserror::Error;

/// Integer range that a parsed literal did not fit into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerWidth {
    /// The 64-bit range every integer literal is first read into.
    Long,
    /// The 32-bit range the calculators operate on.
    Int,
}

impl Display for IntegerWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Long => write!(f, "64-bit"),
            Self::Int => write!(f, "32-bit"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
/// Represents all errors that can occur while parsing tokens or equations.
pub enum ParseError {
    /// The token was an empty string.
    #[error("Error: Empty input.")]
    EmptyInput,
    /// No numeric prefix could be read from the token.
    #[error("Error: Unparsable input '{token}'.")]
    Unparsable {
        /// The rejected token.
        token: String,
    },
    /// A number was read, but characters were left over.
    #[error("Error: Trailing garbage '{rest}' after the number in '{token}'.")]
    TrailingGarbage {
        /// The rejected token.
        token: String,
        /// Everything after the numeric prefix.
        rest:  String,
    },
    /// An integer literal does not fit into the given width.
    #[error("Error: '{token}' does not fit into a {width} integer.")]
    IntegerOverflow {
        /// The rejected token.
        token: String,
        /// The range that was exceeded.
        width: IntegerWidth,
    },
    /// A real literal is too large to be represented.
    #[error("Error: '{token}' is out of range for a real number.")]
    NumericOverflow {
        /// The rejected token.
        token: String,
    },
    /// An equation line has fewer tokens than the `a + b = c` shape needs.
    #[error("Error: Invalid equation format. Expected at least 5 tokens but found {found} in '{line}'.")]
    InvalidFormat {
        /// The rejected line.
        line:  String,
        /// The number of tokens it contained.
        found: usize,
    },
    /// One coefficient of an equation line failed to parse.
    #[error("Error: Coefficient at position {position} is invalid. {source}")]
    InvalidCoefficient {
        /// Token position inside the equation line.
        position: usize,
        /// Why the token was rejected.
        #[source]
        source:   Box<ParseError>,
    },
}
