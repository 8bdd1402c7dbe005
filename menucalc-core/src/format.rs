//! Result rendering
//!
//! Values keep full `f64` precision until they reach this module; every
//! number is printed with exactly [`PRECISION`] fractional digits.

use crate::operand::Operand;

/// Fractional digits in every rendered number
pub const PRECISION: usize = 6;

/// Render a single value, e.g. `3.141593`
pub fn value(operand: Operand) -> String {
    format!("{:.*}", PRECISION, operand.value())
}

/// Render `lhs <symbol> rhs = result`.
///
/// `^` is written without surrounding spaces.
pub fn binary(lhs: Operand, symbol: &str, rhs: Operand, result: Operand) -> String {
    let separator = if symbol == "^" { "" } else { " " };
    format!(
        "{lhs}{separator}{symbol}{separator}{rhs} = {result}",
        lhs = value(lhs),
        rhs = value(rhs),
        result = value(result),
    )
}

/// Render `sqrt(operand) = result`
pub fn square_root(operand: Operand, result: Operand) -> String {
    format!("sqrt({}) = {}", value(operand), value(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(value: f64) -> Operand {
        Operand::new(value).unwrap()
    }

    #[test]
    fn test_value_has_six_digits() {
        assert_eq!(value(op(0.0)), "0.000000");
        assert_eq!(value(op(-2.5)), "-2.500000");
        assert_eq!(value(op(1.0 / 3.0)), "0.333333");
        assert_eq!(value(op(2.0 / 3.0)), "0.666667");
    }

    #[test]
    fn test_large_values_are_not_abbreviated() {
        assert_eq!(value(op(1e20)), "100000000000000000000.000000");
    }

    #[test]
    fn test_binary_layout() {
        assert_eq!(
            binary(op(7.0), "-", op(2.0), op(5.0)),
            "7.000000 - 2.000000 = 5.000000"
        );
        assert_eq!(
            binary(op(3.0), "^", op(2.0), op(9.0)),
            "3.000000^2.000000 = 9.000000"
        );
    }

    #[test]
    fn test_square_root_layout() {
        assert_eq!(square_root(op(9.0), op(3.0)), "sqrt(9.000000) = 3.000000");
    }
}
