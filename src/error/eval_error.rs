use thiserror::Error;

/// Result type used by the evaluator and the variable store.
///
/// All fallible operations return either a value of type `T` or an
/// [`EvalError`] describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Represents all errors that can occur while evaluating one line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The line contained nothing but whitespace.
    ///
    /// Only the outermost frame reports this; an empty group, assignment or
    /// right-hand side is reported as [`EvalError::InvalidInput`] instead.
    #[error("Empty input")]
    EmptyInput,
    /// Two values were joined by a symbol that is not an arithmetic operator,
    /// or by no operator at all.
    #[error("Invalid operator")]
    InvalidOperator,
    /// A variable was read before anything was assigned to it.
    #[error("Undefined variable '{name}'")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// The line is malformed: unbalanced parentheses, a dangling operator, an
    /// out-of-range literal, a misplaced symbol or nesting that is too deep.
    #[error("Invalid input")]
    InvalidInput,
    /// Attempted `/` or `%` with a zero right-hand side.
    #[error("Division by zero")]
    DivisionByZero,
    /// An assignment would create a variable beyond the store's capacity.
    #[error("Variable store is full ({capacity} variables)")]
    StoreFull {
        /// The configured capacity of the store.
        capacity: usize,
    },
}

impl EvalError {
    /// Remaps an `EmptyInput` coming back from a nested frame.
    ///
    /// Nothing inside parentheses, after `=` or after an additive operator is
    /// malformed input rather than an empty line.
    #[must_use]
    pub fn nested(self) -> Self {
        match self {
            Self::EmptyInput => Self::InvalidInput,
            other => other,
        }
    }
}
