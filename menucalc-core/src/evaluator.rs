//! Checked arithmetic
//!
//! Every entry point runs a domain/overflow pre-check before computing and a
//! finiteness post-check afterwards. The post-check stays even where the
//! pre-check already rules a non-finite result out, because rounding at the
//! edge of the `f64` range can still carry a sum past `MAX`.

use crate::error::{DomainError, ErrorKind};
use crate::format;
use crate::operand::Operand;

/// Outcome of one evaluation: a finite value or the reason there is none
pub type EvaluationResult = Result<Operand, ErrorKind>;

const MAX: f64 = f64::MAX;

/// `a + b`
pub fn add(a: Operand, b: Operand) -> EvaluationResult {
    let (a, b) = (a.value(), b.value());
    if sum_overflows(a, b) {
        return Err(ErrorKind::Overflow);
    }
    finite(a + b)
}

/// `a - b`
pub fn subtract(a: Operand, b: Operand) -> EvaluationResult {
    let (a, b) = (a.value(), b.value());
    // a - b == a + (-b); negation of a finite value is exact
    if sum_overflows(a, -b) {
        return Err(ErrorKind::Overflow);
    }
    finite(a - b)
}

/// `a * b`
pub fn multiply(a: Operand, b: Operand) -> EvaluationResult {
    let (a, b) = (a.value(), b.value());
    if a != 0.0 && b.abs() > MAX / a.abs() {
        return Err(ErrorKind::Overflow);
    }
    finite(a * b)
}

/// `dividend / divisor`
pub fn divide(dividend: Operand, divisor: Operand) -> EvaluationResult {
    let (a, b) = (dividend.value(), divisor.value());
    if b == 0.0 {
        return Err(ErrorKind::DivisionByZero);
    }
    finite(a / b)
}

/// `base ^ exponent`
pub fn power(base: Operand, exponent: Operand) -> EvaluationResult {
    let (base, exponent) = (base.value(), exponent.value());
    if base < 0.0 && exponent.floor() != exponent {
        return Err(DomainError::NegativeBaseFractionalExponent.into());
    }
    if base == 0.0 && exponent < 0.0 {
        return Err(DomainError::ZeroToNegativePower.into());
    }
    finite(base.powf(exponent))
}

/// `sqrt(a)`
pub fn square_root(a: Operand) -> EvaluationResult {
    let a = a.value();
    if a < 0.0 {
        return Err(DomainError::NegativeSquareRoot.into());
    }
    finite(a.sqrt())
}

/// True when `a + b` would leave `[-MAX, MAX]`, decided without forming the sum
fn sum_overflows(a: f64, b: f64) -> bool {
    (b > 0.0 && a > MAX - b) || (b < 0.0 && a < -MAX - b)
}

fn finite(value: f64) -> EvaluationResult {
    Operand::new(value).ok_or(ErrorKind::Overflow)
}

/// Two-operand operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `^`
    Power,
}

impl BinaryOp {
    /// Infix symbol used when echoing the expression
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Power => "^",
        }
    }

    /// Apply the checked operation
    pub fn apply(self, lhs: Operand, rhs: Operand) -> EvaluationResult {
        match self {
            BinaryOp::Add => add(lhs, rhs),
            BinaryOp::Subtract => subtract(lhs, rhs),
            BinaryOp::Multiply => multiply(lhs, rhs),
            BinaryOp::Divide => divide(lhs, rhs),
            BinaryOp::Power => power(lhs, rhs),
        }
    }
}

/// A fully-read calculation, ready to evaluate
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expression {
    /// `lhs op rhs`
    Binary {
        /// The operation
        op: BinaryOp,
        /// Left operand (dividend, base, ...)
        lhs: Operand,
        /// Right operand (divisor, exponent, ...)
        rhs: Operand,
    },
    /// `sqrt(operand)`
    SquareRoot(Operand),
}

impl Expression {
    /// Build a binary expression
    pub fn binary(op: BinaryOp, lhs: Operand, rhs: Operand) -> Self {
        Expression::Binary { op, lhs, rhs }
    }

    /// Evaluate with all pre- and post-checks
    pub fn evaluate(&self) -> EvaluationResult {
        let result = match *self {
            Expression::Binary { op, lhs, rhs } => op.apply(lhs, rhs),
            Expression::SquareRoot(operand) => square_root(operand),
        };
        match &result {
            Ok(value) => log::trace!("{self:?} evaluated to {value}"),
            Err(kind) => log::trace!("{self:?} rejected: {kind:?}"),
        }
        result
    }

    /// Echo the expression together with its result, six fractional digits each
    pub fn render(&self, result: Operand) -> String {
        match *self {
            Expression::Binary { op, lhs, rhs } => format::binary(lhs, op.symbol(), rhs, result),
            Expression::SquareRoot(operand) => format::square_root(operand, result),
        }
    }
}
