use crate::error::{EvalError, EvalResult};

/// The five supported arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, truncating towards zero.
    Div,
    /// `%`, with the sign of the left operand.
    Mod,
}

impl BinaryOperator {
    /// Maps an operator symbol to its operator, if it is one of `+ - * / %`.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '%' => Some(Self::Mod),
            _ => None,
        }
    }

    /// Returns `true` for the operators that bind tighter than `+` and `-`.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div | Self::Mod)
    }

    /// Applies the operator.
    ///
    /// Overflow wraps around in two's complement, so `i64::MIN / -1` is
    /// `i64::MIN` and `i64::MIN % -1` is `0`.
    ///
    /// # Errors
    /// [`EvalError::DivisionByZero`] for `/` or `%` with a zero `right`.
    pub const fn apply(self, left: i64, right: i64) -> EvalResult<i64> {
        match self {
            Self::Add => Ok(left.wrapping_add(right)),
            Self::Sub => Ok(left.wrapping_sub(right)),
            Self::Mul => Ok(left.wrapping_mul(right)),
            Self::Div | Self::Mod if right == 0 => Err(EvalError::DivisionByZero),
            Self::Div => Ok(left.wrapping_div(right)),
            Self::Mod => Ok(left.wrapping_rem(right)),
        }
    }
}

/// Combines two values with the operator written as `symbol`.
///
/// This is the fold step's arithmetic: any symbol the scanner accepted as an
/// operator reaches this function, and only `+ - * / %` compute.
///
/// # Errors
/// - [`EvalError::DivisionByZero`] for `/` or `%` with a zero `right`.
/// - [`EvalError::InvalidOperator`] for any other symbol.
///
/// # Example
/// ```
/// use nestcalc::{error::EvalError, interpreter::evaluator::arithmetic::combine};
///
/// assert_eq!(combine(7, '/', 2), Ok(3));
/// assert_eq!(combine(-7, '%', 3), Ok(-1));
/// assert_eq!(combine(1, '%', 0), Err(EvalError::DivisionByZero));
/// assert_eq!(combine(1, '$', 2), Err(EvalError::InvalidOperator));
/// ```
pub fn combine(left: i64, symbol: char, right: i64) -> EvalResult<i64> {
    BinaryOperator::from_symbol(symbol).ok_or(EvalError::InvalidOperator)?
                                       .apply(left, right)
}
