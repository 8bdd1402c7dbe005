//! Input validation and checked arithmetic for an interactive calculator
//!
//! The crate has two independent halves:
//! - [`input`]: turns one line of text into an [`Operand`] or an
//!   [`OperationSelector`], reporting a [`ParseError`] on malformed input
//! - [`evaluator`]: applies domain and overflow checks around each operation
//!   and reports an [`ErrorKind`] instead of ever producing a non-finite value
//!
//! Neither half keeps state between calls; streams are passed in explicitly.
//!
//! # Example
//!
//! ```rust
//! use menucalc_core::{parse_operand, BinaryOp, Expression, ErrorKind};
//!
//! let a = parse_operand("1.5").unwrap();
//! let b = parse_operand("0").unwrap();
//!
//! let sum = Expression::binary(BinaryOp::Add, a, b);
//! let result = sum.evaluate().unwrap();
//! assert_eq!(sum.render(result), "1.500000 + 0.000000 = 1.500000");
//!
//! let quotient = Expression::binary(BinaryOp::Divide, a, b);
//! assert_eq!(quotient.evaluate(), Err(ErrorKind::DivisionByZero));
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod evaluator;
pub mod format;
pub mod input;
pub mod operand;
pub mod selector;

pub use error::{DomainError, ErrorKind, ParseError, ParseResult};
pub use evaluator::{
    add, divide, multiply, power, square_root, subtract, BinaryOp, EvaluationResult, Expression,
};
pub use input::{parse_operand, parse_selector, InputReader, DEFAULT_MAX_LINE_LENGTH};
pub use operand::Operand;
pub use selector::{OperationSelector, MAX_SELECTOR, MIN_SELECTOR};
