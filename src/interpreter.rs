/// The environment ties the variable store and the evaluator together.
///
/// It owns the store across lines, holds the configuration, and exposes the
/// lifecycle (`init`, `teardown`) and the top-level `evaluate` entry point.
///
/// # Responsibilities
/// - Starts one scanner per line with a fresh store transaction.
/// - Commits assignments only when the whole line succeeds.
/// - Enforces the configured capacity and depth limits.
pub mod environment;
/// The evaluator computes a line in a single pass.
///
/// The evaluator pulls tokens lazily, folds operands into per-frame
/// accumulators, and recurses for groups, assignments and additive
/// continuations. No token list or syntax tree is built.
///
/// # Responsibilities
/// - Applies precedence of `* / %` over `+ -` without a parser.
/// - Handles unary minus, assignment and parenthesised groups.
/// - Reports malformed input, unknown variables and arithmetic errors.
pub mod evaluator;
/// The lexer classifies lexical units on demand.
///
/// It recognises integer literals, identifiers, parentheses and single
/// symbols, and skips whitespace. The evaluator decides what each symbol
/// means from its position.
pub mod lexer;
/// The variable store maps names to integer values.
///
/// A fixed-capacity hash map with a transaction type that stages the
/// assignments of one line until the line has evaluated successfully.
pub mod store;
