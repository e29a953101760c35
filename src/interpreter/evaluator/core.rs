use std::iter::Peekable;

use logos::{Lexer, Logos};

use crate::{
    error::{EvalError, EvalResult},
    interpreter::{
        evaluator::arithmetic::{BinaryOperator, combine},
        lexer::Token,
        store::Transaction,
    },
};

/// Default maximum number of nested frames one line may open.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// The state of one recursive evaluation.
///
/// A frame accumulates a single value. Multiplicative operators stay pending
/// inside the frame; additive operators hand the rest of the line to a new
/// frame and combine its result.
#[derive(Debug, Default)]
struct Frame {
    /// The value folded so far, `None` until the first operand.
    accumulator: Option<i64>,
    /// The operator waiting for its right operand.
    pending:     Option<char>,
    /// Whether the next operand is negated.
    negated:     bool,
}

impl Frame {
    const fn negated() -> Self {
        Self { accumulator: None,
               pending:     None,
               negated:     true, }
    }

    /// Folds a freshly scanned operand into the accumulator.
    ///
    /// A pending negation only applies to the frame's first operand; after an
    /// operator it is consumed without effect, so `2*-3` is `6` and negative
    /// right operands must be parenthesised, as in `2*(-3)`.
    fn fold(&mut self, value: i64) -> EvalResult<()> {
        let negated = std::mem::take(&mut self.negated);

        self.accumulator = Some(match self.accumulator {
                                    Some(left) => {
                                        let op = self.pending
                                                     .take()
                                                     .ok_or(EvalError::InvalidOperator)?;
                                        combine(left, op, value)?
                                    },
                                    None if negated => value.wrapping_neg(),
                                    None => value,
                                });
        Ok(())
    }

    /// Resolves the frame once its input ends.
    fn finish(self) -> EvalResult<i64> {
        let value = self.accumulator.ok_or(EvalError::EmptyInput)?;
        if self.pending.is_some() {
            return Err(EvalError::InvalidInput);
        }
        Ok(value)
    }
}

/// Single-pass scanner over one expression line.
///
/// The scanner lexes, parses and computes in one left-to-right walk: it pulls
/// one token at a time from a lazy lexer and folds it into the current frame.
/// Parenthesised groups, assignment right-hand sides and additive
/// continuations are evaluated by recursive frames that share the scanner's
/// cursor, so a nested frame leaves the cursor just past whatever ended it.
///
/// All scan state (cursor, scope depth, frame count, staged assignments) is
/// owned by the scanner, which lives for exactly one line.
pub struct Scanner<'src, 'txn, 'store> {
    tokens:    Peekable<Lexer<'src, Token<'src>>>,
    variables: &'txn mut Transaction<'store>,
    /// Open parenthesised groups.
    depth:     usize,
    /// Active frames.
    frames:    usize,
    max_depth: usize,
}

impl<'src, 'txn, 'store> Scanner<'src, 'txn, 'store> {
    /// Creates a scanner positioned at the start of `source`.
    pub fn new(source: &'src str,
               variables: &'txn mut Transaction<'store>,
               max_depth: usize)
               -> Self {
        Self { tokens: Token::lexer(source).peekable(),
               variables,
               depth: 0,
               frames: 0,
               max_depth }
    }

    /// Evaluates the whole line as the outermost frame.
    ///
    /// # Errors
    /// Any [`EvalError`]. `EmptyInput` is only returned for a blank line.
    /// A group still open when the scan stops overrides every other outcome
    /// with `InvalidInput`, including an error raised inside that group.
    pub fn run(mut self) -> EvalResult<i64> {
        let result = self.eval_frame(Frame::default());

        if self.depth != 0 {
            tracing::trace!(depth = self.depth, ?result, "unclosed parentheses");
            return Err(EvalError::InvalidInput);
        }
        result
    }

    /// Evaluates the rest of the input as a nested frame.
    fn eval_nested(&mut self, frame: Frame) -> EvalResult<i64> {
        self.eval_frame(frame).map_err(EvalError::nested)
    }

    fn eval_frame(&mut self, mut frame: Frame) -> EvalResult<i64> {
        if self.frames >= self.max_depth {
            tracing::trace!(max_depth = self.max_depth, "frame limit reached");
            return Err(EvalError::InvalidInput);
        }
        self.frames += 1;
        let result = self.scan(&mut frame).and_then(|assigned| match assigned {
                                                       Some(value) => Ok(value),
                                                       None => frame.finish(),
                                                   });
        self.frames -= 1;
        result
    }

    /// Scans tokens into `frame` until the frame ends.
    ///
    /// Returns `Some(value)` when an assignment ended the frame, `None` when
    /// the frame has to be resolved from its accumulator.
    fn scan(&mut self, frame: &mut Frame) -> EvalResult<Option<i64>> {
        while let Some(token) = self.tokens.next() {
            let token = token.map_err(|()| EvalError::InvalidInput)?;
            tracing::trace!(?token, frame = self.frames, depth = self.depth, "scan");

            match token {
                Token::Integer(value) => frame.fold(value)?,
                Token::Identifier(name) => {
                    if self.tokens
                           .next_if(|next| next.as_ref().is_ok_and(|t| t.is_symbol('=')))
                           .is_some()
                    {
                        return self.assign(name).map(Some);
                    }
                    let value = self.variables.get(name)?;
                    frame.fold(value)?;
                },
                Token::LParen => {
                    self.depth += 1;
                    let value = self.eval_nested(Frame::default())?;
                    frame.fold(value)?;
                },
                Token::RParen => {
                    self.depth = self.depth.checked_sub(1).ok_or(EvalError::InvalidInput)?;
                    break;
                },
                Token::Symbol(symbol) => {
                    if frame.accumulator.is_none() || frame.pending.is_some() {
                        if symbol != '-' {
                            return Err(EvalError::InvalidInput);
                        }
                        frame.negated = !frame.negated;
                        continue;
                    }

                    let operator = BinaryOperator::from_symbol(symbol);
                    if operator.is_some_and(BinaryOperator::is_multiplicative) {
                        frame.pending = Some(symbol);
                        continue;
                    }

                    // Lower precedence: the rest of the line is the right operand.
                    let (op, right) = if symbol == '-' {
                        ('+', self.eval_nested(Frame::negated())?)
                    } else {
                        (symbol, self.eval_nested(Frame::default())?)
                    };
                    frame.pending = Some(op);
                    frame.fold(right)?;
                    break;
                },
                Token::Ignored => {},
            }
        }
        Ok(None)
    }

    /// Evaluates the right-hand side of `name = ...` and stages the result.
    fn assign(&mut self, name: &str) -> EvalResult<i64> {
        let value = self.eval_nested(Frame::default())?;
        self.variables.set(name, value)?;
        tracing::debug!(name, value, "staged assignment");
        Ok(value)
    }
}
