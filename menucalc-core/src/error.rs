//! Layered error types
//!
//! Input errors ([`ParseError`]) and evaluation errors ([`ErrorKind`]) are kept
//! apart: the reader knows nothing about arithmetic and the evaluator never
//! sees raw text. The `Display` output of each variant is the message shown to
//! the user.

use thiserror::Error;

/// Input-level errors (raised while turning a line of text into a value)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input stream is exhausted or failed
    #[error("Failed to read input")]
    ReadFailure,

    /// The line is not a complete numeric literal
    #[error("Invalid number format")]
    MalformedNumber {
        /// The offending text, after line-terminator removal and trimming
        input: String,
    },

    /// The selector parsed as an integer but lies outside the menu
    #[error("Operation must be between 1 and 7")]
    OutOfRange {
        /// The offending text, after line-terminator removal and trimming
        input: String,
    },
}

impl ParseError {
    pub(crate) fn malformed(input: impl Into<String>) -> Self {
        ParseError::MalformedNumber {
            input: input.into(),
        }
    }

    pub(crate) fn out_of_range(input: impl Into<String>) -> Self {
        ParseError::OutOfRange {
            input: input.into(),
        }
    }
}

/// Reason an input combination lies outside an operation's domain
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// `base < 0` raised to a non-integral exponent
    #[error("Negative base with non-integer exponent")]
    NegativeBaseFractionalExponent,

    /// `0` raised to a negative exponent
    #[error("Zero to negative power is undefined")]
    ZeroToNegativePower,

    /// Square root of a negative operand
    #[error("Square root of negative number is undefined")]
    NegativeSquareRoot,
}

/// Evaluation-level errors (no value could be produced)
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Divisor was zero (either sign)
    #[error("Division by zero is undefined")]
    DivisionByZero,

    /// Mathematically undefined input combination
    #[error("{0}")]
    InvalidDomain(#[from] DomainError),

    /// True result is outside the finite `f64` range
    #[error("Result would overflow")]
    Overflow,
}

/// Result type for input operations
pub type ParseResult<T> = std::result::Result<T, ParseError>;
