/// Evaluation errors.
///
/// Defines every way a single line can fail to evaluate: empty input,
/// unsupported operators, unknown variables, malformed input, division by zero
/// and a full variable store.
pub mod eval_error;
/// Numeric status codes.
///
/// Maps evaluation outcomes onto the small closed set of codes the shell
/// reports and the binary uses as its exit status.
pub mod status;

pub use eval_error::{EvalError, EvalResult};
pub use status::Status;
