use shunt::{Number, calculate};

fn assert_value(expression: &str, expected: f64) {
    match calculate(expression) {
        Ok(value) => {
            assert_eq!(value,
                       Number::Float(expected),
                       "'{expression}' evaluated to {value}, expected {expected}");
        },
        Err(e) => panic!("Expression '{expression}' failed: {e}"),
    }
}

fn assert_error(expression: &str, expected: &str) {
    match calculate(expression) {
        Ok(value) => {
            panic!("Expression '{expression}' evaluated to {value} but was expected to fail")
        },
        Err(e) => assert_eq!(e.to_string(), expected, "wrong error for '{expression}'"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("2+2", 4.0);
    assert_value("3 * 1 + 20", 23.0);
    assert_value("2 + 2 * 2", 6.0);
    assert_value("8 - 5", 3.0);
    assert_value("   43    -    13", 30.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(2 + 2) * 2", 8.0);
    assert_value("(((((((2 + 5))))) * 7)) + 0", 49.0);
    assert_value("(1+3)/(2.5-2)", 8.0);
}

#[test]
fn power_is_right_associative() {
    assert_value("2 ** 2 ** 3", 256.0);
    assert_value("2 ** 0", 1.0);
    assert_value("0 ** 2", 0.0);
}

#[test]
fn unary_signs_are_normalized() {
    assert_value("-5 + 10", 5.0);
    assert_value("+5 + 1", 6.0);
    assert_value("-(-3)", 3.0);
    assert_value("-0", 0.0);
    assert_value("+0", 0.0);
}

#[test]
fn division_family() {
    assert_value("4/2", 2.0);
    assert_value("7/2", 3.5);
    assert_value("10%3", 1.0);
    assert_value("10//3", 3.0);
    assert_value("10.0 / 4", 2.5);
}

#[test]
fn floor_division_and_modulo_follow_the_divisor_sign() {
    assert_value("-7 // 2", -4.0);
    assert_value("-7 % 2", 1.0);
    assert_value("7 // (-2)", -4.0);
    assert_value("7 % (-2)", -1.0);
}

#[test]
fn mixed_arithmetic_promotes_to_float() {
    assert_value("3 + 2.5", 5.5);
    assert_value("5.0 - 2", 3.0);
    assert_value("5.0  * 2", 10.0);
    assert_value("0.0000001 + 0.000002", 2.1e-6);
}

#[test]
fn integer_identity_is_preserved() {
    assert!(matches!(calculate("2 + 2"), Ok(Number::Int(4))));
    assert!(matches!(calculate("10 // 3"), Ok(Number::Int(3))));
    // True division always yields a float, even when it divides evenly.
    assert!(matches!(calculate("4 / 2"), Ok(Number::Float(_))));
}

#[test]
fn negative_exponents_yield_floats() {
    assert_value("2 ** (-1)", 0.5);
    assert_value("2 ** (-2)", 0.25);
}

#[test]
fn integer_overflow_promotes_to_float() {
    assert_value("9999999999 * 9999999999", 99_999_999_980_000_000_001.0);
}

#[test]
fn malformed_numbers_are_rejected() {
    assert_error("2.", "Invalid number format error: Invalid number format at position 1");
    assert_error("2..2", "Invalid number format error: Invalid number format at position 1");
    assert_error("111111111111",
                 "Invalid number format error: Number has more than 10 digits at position 0");
}

#[test]
fn unknown_symbols_are_rejected() {
    assert_error("1&2", "Unknown symbol error: & at position 1");
    assert_error("2 @ 2", "Unknown symbol error: @ at position 2");
}

#[test]
fn doubled_operators_are_rejected() {
    assert_error("1++2",
                 "Parsing error: Incorrect operator sequence '+' followed by '+' at position 2");
    assert_error("1*-2",
                 "Parsing error: Incorrect operator sequence '*' followed by '-' at position 2");
}

#[test]
fn unbalanced_brackets_point_at_the_offender() {
    assert_error("((1+2)", "Unbalanced brackets error: ( at position 0");
    assert_error("(1+2))", "Unbalanced brackets error: ) at position 5");
}

#[test]
fn blank_input_is_an_empty_expression() {
    assert_error("", "Invalid expression error: Empty expression at position 0");
    assert_error("        ", "Invalid expression error: Empty expression at position 0");
}

#[test]
fn starved_operators() {
    assert_error("+",
                 "Calculation error: Not enough operands for a unary operator $ at position 0");
    assert_error("(-)",
                 "Calculation error: Not enough operands for a unary operator ~ at position 1");
    assert_error("1-*",
                 "Calculation error: Not enough operands for a binary operator * at position 2");
}

#[test]
fn division_by_zero_points_at_the_operator() {
    assert_error("1/0", "Calculation error: Division by zero at position 1");
    assert_error("2/0.0", "Calculation error: Division by zero at position 1");
    assert_error("2//0", "Calculation error: Division by zero at position 1");
    assert_error("2%0", "Calculation error: Division by zero at position 1");
    assert_error("(1+3)/(3-3)", "Calculation error: Division by zero at position 5");
}

#[test]
fn floor_division_and_modulo_require_integers() {
    assert_error("4.5//5", "Calculation error: Operator // requires integers at position 3");
    assert_error("4.5%5", "Calculation error: Operator % requires integers at position 3");
    assert_error("5//2.5", "Calculation error: Operator // requires integers at position 1");
    assert_error("5%2.5", "Calculation error: Operator % requires integers at position 1");
    assert_error("(1.5+2.5)//2",
                 "Calculation error: Operator // requires integers at position 9");
}

#[test]
fn exponent_edge_cases() {
    assert_error("-2 ** 0.5", "Calculation error: Negative number under the root at position 3");
    assert_error("2 ** 11111111", "Calculation error: Too high a power to be raised at position 2");
}

#[test]
fn leftover_operands_are_rejected() {
    assert_error("1 2", "Invalid expression error: Too many operands");
}

#[test]
fn errors_expose_category_and_position() {
    let error = calculate("((1+2)").unwrap_err();
    assert_eq!(error.category(), "Unbalanced brackets");
    assert_eq!(error.position(), Some(0));

    let error = calculate("1 2").unwrap_err();
    assert_eq!(error.category(), "Invalid expression");
    assert_eq!(error.position(), None);
}

#[test]
fn repeated_evaluation_is_deterministic() {
    for expression in ["2 ** 2 ** 3", "7/2", "1/0", "((1+2)", ""] {
        assert_eq!(calculate(expression), calculate(expression));
    }
}
