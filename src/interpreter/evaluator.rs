/// The arithmetic step.
///
/// Applies `+ - * / %` to two integers with wrapping overflow and reports
/// division by zero and unsupported operator symbols.
pub mod arithmetic;

/// The single-pass scanner.
///
/// Contains the recursive frame evaluator that lexes, applies precedence and
/// computes in one walk over a line, tracking parenthesis depth and the
/// number of active frames.
pub mod core;
