//! # nestcalc
//!
//! nestcalc is a single-pass evaluator for nested integer arithmetic with
//! named variables. It scans a line once, lexing, applying precedence and
//! computing at the same time, without building a token list or a syntax
//! tree.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::EvalResult, interpreter::environment::Environment};

/// Provides the error and status types.
///
/// This module defines every error a line can produce and the numeric status
/// codes the shell and the binary report.
///
/// # Responsibilities
/// - Defines the closed set of evaluation errors.
/// - Maps errors onto status codes and user-facing messages.
pub mod error;
/// Evaluates expression lines against a persistent environment.
///
/// This module ties together the lazy lexer, the recursive scanner, the
/// arithmetic step and the variable store.
///
/// # Responsibilities
/// - Coordinates lexing and evaluation in one pass.
/// - Owns variables across lines and applies assignments atomically.
/// - Provides the lifecycle and evaluation entry points.
pub mod interpreter;
/// Dispatches interactive shell commands.
///
/// This module turns one input line into a [`session::Reply`]: a value, a
/// failure, help text, the variable listing or an exit request.
pub mod session;

/// Evaluates every non-blank line of `source` in a fresh environment and
/// returns the value of the last one.
///
/// Evaluation stops at the first failing line.
///
/// # Errors
/// Returns the error of the first failing line, or
/// [`EmptyInput`](error::EvalError::EmptyInput) if every line was blank.
///
/// # Examples
/// ```
/// use nestcalc::{error::EvalError, get_result};
///
/// let source = "width = 6\nheight = width - 2\nwidth * height";
/// assert_eq!(get_result(source), Ok(24));
///
/// // Intentional error (unknown variable).
/// assert_eq!(get_result("y = x + 1"),
///            Err(EvalError::UndefinedVariable { name: "x".to_string() }));
/// ```
pub fn get_result(source: &str) -> EvalResult<i64> {
    let mut env = Environment::default();
    let mut result = Err(error::EvalError::EmptyInput);

    for line in source.lines().filter(|line| !line.trim().is_empty()) {
        result = Ok(env.evaluate(line)?);
    }

    env.teardown();
    result
}
