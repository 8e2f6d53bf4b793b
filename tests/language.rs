use tally::{Context, Error, Value, evaluate_line};

fn eval_new(src: &str) -> Result<Value, Error> {
    let mut context = Context::new();
    evaluate_line(src, &mut context)
}

fn assert_integer(src: &str, expected: i64) {
    match eval_new(src) {
        Ok(Value::Integer(n)) => assert_eq!(n, expected, "wrong result for '{src}'"),
        Ok(Value::Real(r)) => panic!("'{src}' produced real {r}, expected integer {expected}"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_real(src: &str, expected: f64) {
    match eval_new(src) {
        Ok(Value::Real(r)) => {
            assert!((r - expected).abs() < 1e-9,
                    "'{src}' produced {r}, expected {expected}")
        },
        Ok(Value::Integer(n)) => panic!("'{src}' produced integer {n}, expected real {expected}"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match eval_new(src) {
        Ok(value) => panic!("'{src}' succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn precedence_and_grouping() {
    assert_integer("2 + 3 * 4", 14);
    assert_integer("(2 + 3) * 4", 20);
    assert_integer("10 - 4 - 3", 3);
    assert_integer("100 / 10 / 5", 2);
    assert_integer("7 % 4 + 1", 4);
    assert_real("2 * 3 ^ 2", 18.0);
}

#[test]
fn power_is_right_associative() {
    assert_real("2 ^ 3 ^ 2", 512.0);
    assert_real("2 ^ 2 ^ 3", 256.0);
}

#[test]
fn unary_minus_binds_looser_than_power() {
    assert_real("-2 ^ 2", -4.0);
    assert_real("(-2) ^ 2", 4.0);
    assert_integer("--5", 5);
    assert_integer("+7", 7);
    assert_integer("2 - -3", 5);
}

#[test]
fn integer_real_promotion() {
    assert_integer("2 + 3", 5);
    assert_real("2 + 3.0", 5.0);
    assert_integer("10 / 2", 5);
    assert_real("7 / 2", 3.5);
    assert_real("10.0 / 2", 5.0);
    assert_integer("7 % 3", 1);
    assert_real("7.5 % 2", 1.5);
    assert_integer("-7 % 3", -1);
    assert_real("2 ^ 2", 4.0);
}

#[test]
fn integer_overflow_is_an_error() {
    assert_failure("9223372036854775807 + 1");
    assert_failure("-9223372036854775807 - 2");
    assert_integer("9223372036854775807 + 0", i64::MAX);
}

#[test]
fn scientific_notation() {
    assert_real("2e3", 2000.0);
    assert_real("1.5e-2", 0.015);
    assert_real("2E+1 + 1", 21.0);
    assert_real(".5 * 2", 1.0);
}

#[test]
fn malformed_exponent_is_a_lex_error() {
    let e = assert_failure("10 + 2e");
    assert!(matches!(e, Error::Lex(_)), "expected a lex error, got {e:?}");
    assert!(e.to_string().contains("position 6"), "wrong offset in: {e}");

    assert_failure("1.5e+");
}

#[test]
fn exact_parse_error_offsets() {
    let e = assert_failure("2 + * 3");
    assert!(matches!(e, Error::Parse(_)), "expected a parse error, got {e:?}");
    let message = e.to_string();
    assert!(message.contains('*') && message.contains("position 4"),
            "wrong message: {message}");
}

#[test]
fn end_of_input_errors_point_past_the_input() {
    let e = assert_failure("2 +");
    assert!(matches!(e, Error::Parse(_)), "expected a parse error, got {e:?}");
    assert!(e.to_string().contains("position 3"), "wrong offset in: {e}");

    let e = assert_failure("(1 + 2");
    assert!(e.to_string().contains("position 6"), "wrong offset in: {e}");

    let e = assert_failure("min(1, 2");
    assert!(e.to_string().contains("position 8"), "wrong offset in: {e}");
}

#[test]
fn oversized_integers_promote_to_real() {
    assert_real("10000000000000000000 + 1", 1e19);
    assert_real("1152921504606846976 + 0.5", 1_152_921_504_606_846_976.0);
    assert_real("99999999999999999999 * 1", 1e20);
}

#[test]
fn trailing_tokens_and_empty_input_are_rejected() {
    assert_failure("2 + 3)");
    assert_failure("1 2");
    assert_failure("");
    assert_failure("   ");
    assert_failure("(1 + 2");
}

#[test]
fn assignment_is_an_expression() {
    let mut context = Context::new();

    let value = evaluate_line("x = 5 + 3", &mut context).unwrap();
    assert_eq!(value, Value::Integer(8));

    let value = evaluate_line("x + 1", &mut context).unwrap();
    assert_eq!(value, Value::Integer(9));

    let value = evaluate_line("y = x = 5", &mut context).unwrap();
    assert_eq!(value, Value::Integer(5));
    assert_eq!(context.variables().get("y"), Some(&Value::Integer(5)));
    assert_eq!(context.variables().get("x"), Some(&Value::Integer(5)));
}

#[test]
fn unknown_variable_is_an_error() {
    let e = assert_failure("nope + 1");
    assert!(e.to_string().contains("nope"), "wrong message: {e}");
}

#[test]
fn history_round_trip() {
    let mut context = Context::new();

    evaluate_line("2 + 2", &mut context).unwrap();
    evaluate_line("10 * 10", &mut context).unwrap();

    let value = evaluate_line("$1 + $2", &mut context).unwrap();
    assert_eq!(value, Value::Integer(104));

    // That line is now $3.
    let value = evaluate_line("$3", &mut context).unwrap();
    assert_eq!(value, Value::Integer(104));
    assert_eq!(context.history().len(), 4);
}

#[test]
fn history_out_of_range() {
    let mut context = Context::new();
    evaluate_line("1 + 1", &mut context).unwrap();

    assert!(evaluate_line("$0", &mut context).is_err());
    let e = evaluate_line("$2", &mut context).unwrap_err();
    assert!(e.to_string().contains("out of range"), "wrong message: {e}");

    // Failed lines are not recorded.
    assert_eq!(context.history().len(), 1);

    context.clear_history();
    assert!(evaluate_line("$1", &mut context).is_err());
}

#[test]
fn constants_are_protected() {
    let mut context = Context::new();

    let e = evaluate_line("pi = 3", &mut context).unwrap_err();
    assert!(e.to_string().contains("pi"), "wrong message: {e}");
    assert!(evaluate_line("e = 3", &mut context).is_err());

    // The check fires before the right-hand side runs.
    let e = evaluate_line("pi = 1 / 0", &mut context).unwrap_err();
    assert!(e.to_string().contains("pi"), "wrong message: {e}");

    let value = evaluate_line("pi", &mut context).unwrap();
    assert_eq!(value, Value::Real(std::f64::consts::PI));
    let value = evaluate_line("e", &mut context).unwrap();
    assert_eq!(value, Value::Real(std::f64::consts::E));
}

#[test]
fn builtin_functions() {
    assert_real("sin(0)", 0.0);
    assert_real("cos(0)", 1.0);
    assert_real("sqrt(16)", 4.0);
    assert_real("log(e)", 1.0);
    assert_real("log10(1000)", 3.0);
    assert_integer("abs(-5)", 5);
    assert_real("abs(-5.5)", 5.5);
    assert_integer("ceil(3)", 3);
    assert_real("ceil(3.2)", 4.0);
    assert_real("floor(3.8)", 3.0);
    assert_real("sin(pi / 2)", 1.0);
}

#[test]
fn min_max_are_variadic() {
    assert_integer("min(5, 3)", 3);
    assert_integer("max(5, 3, 9, 1)", 9);
    assert_real("min(2.5, 3)", 2.5);
    assert_real("max(1, 2, 2.5)", 2.5);

    let e = assert_failure("min(5)");
    assert!(e.to_string().contains("at least 2"), "wrong message: {e}");
}

#[test]
fn function_call_errors() {
    let e = assert_failure("sqrt(1, 2)");
    assert!(e.to_string().contains("sqrt"), "wrong message: {e}");

    let e = assert_failure("frobnicate(1)");
    assert!(e.to_string().contains("frobnicate"), "wrong message: {e}");
}

#[test]
fn domain_errors() {
    assert_failure("sqrt(-1)");
    assert_failure("log(0)");
    assert_failure("log(-1)");
    assert_failure("log10(0)");

    let division = assert_failure("1 / 0").to_string();
    let modulo = assert_failure("5 % 0").to_string();
    assert_ne!(division, modulo, "division and modulo by zero must read differently");

    assert_failure("1 / 0.0");
    assert_failure("1.5 % 0");
}

#[test]
fn committed_side_effects_survive_a_later_failure() {
    let mut context = Context::new();

    // The left operand assigns before the right operand fails.
    assert!(evaluate_line("(z = 7) + (1 / 0)", &mut context).is_err());
    assert_eq!(context.variables().get("z"), Some(&Value::Integer(7)));
    assert!(context.history().is_empty());
}

#[test]
fn re_evaluation_is_deterministic() {
    let mut context = Context::new();
    evaluate_line("a = 6", &mut context).unwrap();

    let first = evaluate_line("a * 7 - 2", &mut context).unwrap();
    let second = evaluate_line("a * 7 - 2", &mut context).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, Value::Integer(40));
}
