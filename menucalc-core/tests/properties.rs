//! Property tests for the input and evaluation pipeline

use menucalc_core::*;
use proptest::prelude::*;

fn finite_f64() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("finite", |v| v.is_finite())
}

fn operand(value: f64) -> Operand {
    Operand::new(value).unwrap()
}

proptest! {
    #[test]
    fn six_digit_text_round_trips(x in -1.0e8f64..1.0e8) {
        let text = format!("{x:.6}");
        let parsed = parse_operand(&text).unwrap();
        prop_assert_eq!(format::value(parsed), text);
    }

    #[test]
    fn division_by_zero_never_computes(a in finite_f64(), negative in any::<bool>()) {
        let zero = if negative { -0.0 } else { 0.0 };
        prop_assert_eq!(divide(operand(a), operand(zero)), Err(ErrorKind::DivisionByZero));
    }

    #[test]
    fn negative_base_fractional_exponent_is_domain_error(
        base in -1.0e6f64..-1.0e-6,
        whole in -100i32..100,
        fraction in 0.01f64..0.99,
    ) {
        let exponent = f64::from(whole) + fraction;
        prop_assert_eq!(
            power(operand(base), operand(exponent)),
            Err(ErrorKind::InvalidDomain(DomainError::NegativeBaseFractionalExponent))
        );
    }

    #[test]
    fn square_root_squares_back(a in 1.0e-300f64..1.0e300) {
        let root = square_root(operand(a)).unwrap().value();
        prop_assert!((root * root - a).abs() <= a * 4.0 * f64::EPSILON);
    }

    #[test]
    fn square_root_of_negative_is_domain_error(
        a in finite_f64().prop_filter("negative", |v| *v < 0.0)
    ) {
        prop_assert_eq!(
            square_root(operand(a)),
            Err(ErrorKind::InvalidDomain(DomainError::NegativeSquareRoot))
        );
    }

    #[test]
    fn add_is_exact_or_overflow(a in finite_f64(), b in finite_f64()) {
        let raw = a + b;
        match add(operand(a), operand(b)) {
            Ok(value) => prop_assert_eq!(value.value(), raw),
            Err(kind) => prop_assert_eq!(kind, ErrorKind::Overflow),
        }
        if raw.is_infinite() {
            prop_assert_eq!(add(operand(a), operand(b)), Err(ErrorKind::Overflow));
        }
    }

    #[test]
    fn subtract_is_exact_or_overflow(a in finite_f64(), b in finite_f64()) {
        let raw = a - b;
        match subtract(operand(a), operand(b)) {
            Ok(value) => prop_assert_eq!(value.value(), raw),
            Err(kind) => prop_assert_eq!(kind, ErrorKind::Overflow),
        }
        if raw.is_infinite() {
            prop_assert_eq!(subtract(operand(a), operand(b)), Err(ErrorKind::Overflow));
        }
    }

    #[test]
    fn multiply_is_exact_or_overflow(a in finite_f64(), b in finite_f64()) {
        let raw = a * b;
        match multiply(operand(a), operand(b)) {
            Ok(value) => prop_assert_eq!(value.value(), raw),
            Err(kind) => prop_assert_eq!(kind, ErrorKind::Overflow),
        }
        if raw.is_infinite() {
            prop_assert_eq!(multiply(operand(a), operand(b)), Err(ErrorKind::Overflow));
        }
    }

    #[test]
    fn selectors_outside_menu_are_out_of_range(
        n in any::<i64>().prop_filter("outside", |n| !(MIN_SELECTOR..=MAX_SELECTOR).contains(n))
    ) {
        let text = n.to_string();
        prop_assert_eq!(
            parse_selector(&text),
            Err(ParseError::OutOfRange { input: text.clone() })
        );
    }
}
