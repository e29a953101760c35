use crate::error::{EvalError, EvalResult};

/// The outcome class of one evaluation.
///
/// The discriminants are the numeric codes the shell has always used; the
/// binary exits with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Status {
    /// The line evaluated to a value.
    Success           = 0,
    /// The line was blank.
    EmptyInput        = 1,
    /// See [`EvalError::InvalidOperator`].
    InvalidOperator   = 2,
    /// See [`EvalError::UndefinedVariable`].
    UndefinedVariable = 3,
    /// See [`EvalError::InvalidInput`].
    InvalidInput      = 4,
    /// See [`EvalError::DivisionByZero`].
    DivisionByZero    = 5,
    /// See [`EvalError::StoreFull`].
    StoreFull         = 6,
}

impl Status {
    /// Classifies the result of an evaluation.
    ///
    /// # Example
    /// ```
    /// use nestcalc::error::{EvalError, Status};
    ///
    /// assert_eq!(Status::of(&Ok(3)), Status::Success);
    /// assert_eq!(Status::of(&Err(EvalError::DivisionByZero)), Status::DivisionByZero);
    /// assert_eq!(Status::DivisionByZero.code(), 5);
    /// ```
    #[must_use]
    pub fn of(result: &EvalResult<i64>) -> Self {
        match result {
            Ok(_) => Self::Success,
            Err(error) => error.into(),
        }
    }

    /// Returns the numeric code of this status.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl From<&EvalError> for Status {
    fn from(error: &EvalError) -> Self {
        match error {
            EvalError::EmptyInput => Self::EmptyInput,
            EvalError::InvalidOperator => Self::InvalidOperator,
            EvalError::UndefinedVariable { .. } => Self::UndefinedVariable,
            EvalError::InvalidInput => Self::InvalidInput,
            EvalError::DivisionByZero => Self::DivisionByZero,
            EvalError::StoreFull { .. } => Self::StoreFull,
        }
    }
}
