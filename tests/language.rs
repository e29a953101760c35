use std::fs;

use nestcalc::{
    error::{EvalError, Status},
    get_result,
    interpreter::environment::{Environment, EnvironmentConfig},
};
use pretty_assertions::assert_eq;

fn assert_value(src: &str, expected: i64) {
    match Environment::default().evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "`{src}`"),
        Err(e) => panic!("`{src}` failed: {e:?}"),
    }
}

fn assert_error(src: &str, expected: &EvalError) {
    match Environment::default().evaluate(src) {
        Ok(value) => panic!("`{src}` evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(&e, expected, "`{src}`"),
    }
}

fn limited(capacity: usize, max_depth: usize) -> Environment {
    Environment::new(EnvironmentConfig { capacity, max_depth })
}

#[test]
fn literals() {
    assert_value("0", 0);
    assert_value("42", 42);
    assert_value("  7\t", 7);
    assert_value("007", 7);
    assert_value("9223372036854775807", i64::MAX);
}

#[test]
fn multiplicative_operators_bind_tighter() {
    assert_value("2+3*4", 14);
    assert_value("2*3+4", 10);
    assert_value("2 - 3 * 4", -10);
    assert_value("1 + 2 * 3 - 4 / 2", 5);
    assert_value("20 / 2 / 5", 2);
    assert_value("7 % 4 * 3", 9);
}

#[test]
fn subtraction_is_left_associative() {
    assert_value("10 - 2 - 3", 5);
    assert_value("1 - 2 + 3", 2);
    assert_value("7 - 5 / 2", 5);
    assert_value("7 - 5 % 3", 5);
}

#[test]
fn division_truncates_towards_zero() {
    assert_value("7 / 2", 3);
    assert_value("-7 / 2", -3);
    assert_value("7 % 3", 1);
    assert_value("-7 % 3", -1);
    assert_value("7 % (-3)", 1);
}

#[test]
fn parentheses() {
    assert_value("(2+3)*4", 20);
    assert_value("((1))", 1);
    assert_value("2 * (3 + (4 - 1))", 12);
    assert_value("(1 + 2) * (3 + 4)", 21);
    assert_value("10 - (2 - 5)", 13);
    assert_value("(10 - 2) - 5", 3);
}

#[test]
fn unary_minus() {
    assert_value("-1+2", 1);
    assert_value("2*(-3)", -6);
    assert_value("--4", 4);
    assert_value("1 - -2", 3);
    assert_value("1 + -2", -1);
    assert_value("-(2 + 3)", -5);
    assert_value("-(-(-1))", -1);
    assert_value("-(2 + 3) * (-(1 - 4))", -15);
}

#[test]
fn minus_after_an_operator_is_dropped() {
    assert_value("2*-3", 6);
    assert_value("-2*-3", -6);
    assert_value("8 / -2", 4);
    assert_value("-(2 + 3) * -(1 - 4)", 15);

    let mut env = Environment::default();
    assert_eq!(env.evaluate("x = 4"), Ok(4));
    assert_eq!(env.evaluate("3 * -x"), Ok(12));
    assert_eq!(env.evaluate("3 * (-x)"), Ok(-12));
}

#[test]
fn assignment_and_lookup() {
    let mut env = Environment::default();
    assert_eq!(env.evaluate("x = 5"), Ok(5));
    assert_eq!(env.evaluate("x+1"), Ok(6));
    assert_eq!(env.evaluate("x = 7"), Ok(7));
    assert_eq!(env.evaluate("x"), Ok(7));
    assert_eq!(env.variables().len(), 1);

    assert_eq!(env.evaluate("y = 2 + 3 * 4"), Ok(14));
    assert_eq!(env.evaluate("(x + y) % 5"), Ok(1));
}

#[test]
fn assignment_is_terminal_and_chains() {
    let mut env = Environment::default();
    assert_eq!(env.evaluate("a = b = 3"), Ok(3));
    assert_eq!(env.evaluate("a * b"), Ok(9));
    assert_eq!(env.evaluate("(c = 2) * c"), Ok(4));
    assert_eq!(env.evaluate("1 + (d = 4) + d"), Ok(9));
}

#[test]
fn names_are_case_sensitive() {
    let mut env = Environment::default();
    assert_eq!(env.evaluate("Rate_1 = 2"), Ok(2));
    assert_eq!(env.evaluate("rate_1"),
               Err(EvalError::UndefinedVariable { name: "rate_1".to_string() }));
    assert_eq!(env.evaluate("_ = Rate_1 * 2"), Ok(4));
}

#[test]
fn undefined_variable_is_error() {
    assert_error("y", &EvalError::UndefinedVariable { name: "y".to_string() });
    assert_error("1 + 2 * missing",
                 &EvalError::UndefinedVariable { name: "missing".to_string() });
    assert_error("(1) + missing",
                 &EvalError::UndefinedVariable { name: "missing".to_string() });
}

#[test]
fn division_by_zero_is_error() {
    assert_error("1/0", &EvalError::DivisionByZero);
    assert_error("1%0", &EvalError::DivisionByZero);
    assert_error("5 / (3 - 3)", &EvalError::DivisionByZero);
}

#[test]
fn misplaced_or_unknown_symbols() {
    assert_error("1$2", &EvalError::InvalidOperator);
    assert_error("1 = 2", &EvalError::InvalidOperator);
    assert_error("1.5", &EvalError::InvalidOperator);
    assert_error("2 3", &EvalError::InvalidOperator);
    assert_error("2 (3)", &EvalError::InvalidOperator);
    assert_error("$2", &EvalError::InvalidInput);
    assert_error("= 2", &EvalError::InvalidInput);
    assert_error("2 * * 3", &EvalError::InvalidInput);
    assert_error("2 * + 3", &EvalError::InvalidInput);
}

#[test]
fn incomplete_input_is_invalid() {
    assert_error("1 +", &EvalError::InvalidInput);
    assert_error("1 *", &EvalError::InvalidInput);
    assert_error("x =", &EvalError::InvalidInput);
    assert_error("()", &EvalError::InvalidInput);
    assert_error("(", &EvalError::InvalidInput);
    assert_error("4 * ()", &EvalError::InvalidInput);
}

#[test]
fn unbalanced_parentheses_are_invalid() {
    assert_error("(1+2", &EvalError::InvalidInput);
    assert_error("((1)", &EvalError::InvalidInput);
    assert_error("1+2)", &EvalError::InvalidInput);
    assert_error("(1))", &EvalError::InvalidInput);
    assert_error(")", &EvalError::InvalidInput);
    assert_error("(1/0", &EvalError::InvalidInput);
    assert_error("(y", &EvalError::InvalidInput);
}

#[test]
fn open_group_overrides_errors_raised_inside_it() {
    assert_error("(1/0)", &EvalError::InvalidInput);
    assert_error("1 + (2 * missing)", &EvalError::InvalidInput);

    // A group that closes before the error is raised does not count.
    assert_error("(1) / 0", &EvalError::DivisionByZero);

    let mut env = limited(1, 64);
    assert_eq!(env.evaluate("a = 1"), Ok(1));
    assert_eq!(env.evaluate("(b = 2"), Err(EvalError::InvalidInput));
    assert_eq!(env.evaluate("b = 2"), Err(EvalError::StoreFull { capacity: 1 }));
}

#[test]
fn empty_input_only_at_top_level() {
    assert_error("", &EvalError::EmptyInput);
    assert_error("   \t ", &EvalError::EmptyInput);
    assert_error("( )", &EvalError::InvalidInput);
}

#[test]
fn oversized_literal_is_invalid() {
    assert_error("9223372036854775808", &EvalError::InvalidInput);
    assert_error("1 + 99999999999999999999", &EvalError::InvalidInput);
}

#[test]
fn overflow_wraps() {
    assert_value("9223372036854775807 + 1", i64::MIN);
    assert_value("-9223372036854775807 - 1", i64::MIN);
    assert_value("(-9223372036854775807 - 1) / (-1)", i64::MIN);
    assert_value("(-9223372036854775807 - 1) % (-1)", 0);
    assert_value("-(-9223372036854775807 - 1)", i64::MIN);
}

#[test]
fn failed_line_leaves_no_assignments() {
    let mut env = Environment::default();
    assert_eq!(env.evaluate("z = 5 + (1"), Err(EvalError::InvalidInput));
    assert_eq!(env.evaluate("q = 1 / 0"), Err(EvalError::DivisionByZero));
    assert_eq!(env.evaluate("(r = 3) + s"),
               Err(EvalError::UndefinedVariable { name: "s".to_string() }));
    assert!(env.variables().is_empty());

    assert_eq!(env.evaluate("z = 1"), Ok(1));
    assert_eq!(env.evaluate("z = 2 + (1"), Err(EvalError::InvalidInput));
    assert_eq!(env.evaluate("z"), Ok(1));
}

#[test]
fn store_capacity_is_enforced() {
    let mut env = limited(2, 64);
    assert_eq!(env.evaluate("a = 1"), Ok(1));
    assert_eq!(env.evaluate("b = 2"), Ok(2));
    assert_eq!(env.evaluate("c = 3"), Err(EvalError::StoreFull { capacity: 2 }));
    assert_eq!(env.evaluate("a = a + b"), Ok(3));
    assert_eq!(env.variables().len(), 2);
    assert_eq!(env.variables().capacity(), 2);
}

#[test]
fn store_capacity_counts_staged_names() {
    let mut env = limited(3, 64);
    assert_eq!(env.evaluate("a = 1"), Ok(1));
    assert_eq!(env.evaluate("b = 2"), Ok(2));
    assert_eq!(env.evaluate("c = (d = 1) + 1"), Err(EvalError::StoreFull { capacity: 3 }));
    assert_eq!(env.evaluate("d"), Err(EvalError::UndefinedVariable { name: "d".to_string() }));
    assert_eq!(env.evaluate("c = (c = 1) + 1"), Ok(2));
}

#[test]
fn variable_names_are_bounded() {
    let mut env = Environment::default();
    let longest = "v".repeat(254);
    assert_eq!(env.evaluate(&format!("{longest} = 1")), Ok(1));
    assert_eq!(env.evaluate(&format!("{longest}v = 1")), Err(EvalError::InvalidInput));
}

#[test]
fn nesting_beyond_the_depth_limit_is_invalid() {
    let mut env = limited(10, 8);
    assert_eq!(env.evaluate("(((((((1)))))))"), Ok(1));
    assert_eq!(env.evaluate("((((((((1))))))))"), Err(EvalError::InvalidInput));
    assert_eq!(env.evaluate("1+1+1+1+1+1+1+1"), Ok(8));
    assert_eq!(env.evaluate("1+1+1+1+1+1+1+1+1"), Err(EvalError::InvalidInput));
}

#[test]
fn deep_nesting_within_the_default_limit() {
    let depth = 200;
    let src = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_value(&src, 1);
}

#[test]
fn repeated_evaluation_is_idempotent() {
    let mut env = Environment::default();
    assert_eq!(env.evaluate("n = 6"), Ok(6));
    let first = env.evaluate("n * (n - 1) / 2");
    let second = env.evaluate("n * (n - 1) / 2");
    assert_eq!(first, Ok(15));
    assert_eq!(first, second);
    assert_eq!(env.evaluate("missing"), env.evaluate("missing"));
}

#[test]
fn teardown_and_init_clear_variables() {
    let mut env = Environment::default();
    env.teardown();
    assert_eq!(env.evaluate("x = 1"), Ok(1));
    env.teardown();
    env.teardown();
    assert_eq!(env.evaluate("x"), Err(EvalError::UndefinedVariable { name: "x".to_string() }));

    assert_eq!(env.evaluate("x = 2"), Ok(2));
    env.init();
    assert!(env.variables().is_empty());
}

#[test]
fn status_codes() {
    let mut env = Environment::default();
    let cases = [("1 + 1", Status::Success, 0),
                 (" ", Status::EmptyInput, 1),
                 ("1 ^ 2", Status::InvalidOperator, 2),
                 ("nope", Status::UndefinedVariable, 3),
                 ("(", Status::InvalidInput, 4),
                 ("1 % 0", Status::DivisionByZero, 5)];

    for (src, status, code) in cases {
        let result = env.evaluate(src);
        assert_eq!(Status::of(&result), status, "`{src}`");
        assert_eq!(status.code(), code);
    }
    assert_eq!(Status::from(&EvalError::StoreFull { capacity: 1 }).code(), 6);
}

#[test]
fn script_runs_line_by_line() {
    assert_eq!(get_result("a = 2\n\nb = a * 5\nb - a"), Ok(8));
    assert_eq!(get_result("\n  \n"), Err(EvalError::EmptyInput));
    assert_eq!(get_result("a = 1\na / 0\na"), Err(EvalError::DivisionByZero));
}

#[test]
fn example_script_works() {
    let script = fs::read_to_string("tests/example.calc").expect("missing file");
    assert_eq!(get_result(&script), Ok(14));
}
