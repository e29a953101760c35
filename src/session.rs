use std::fmt;

use crate::{
    error::{EvalError, Status},
    interpreter::environment::{Environment, EnvironmentConfig},
};

/// Greeting printed when the interactive shell starts.
pub const BANNER: &str = "Simple REPL shell. Type \"help\" for help, or \"exit\" to exit the shell.";

/// Text printed by the `help` command.
pub const HELP: &str = "\
A simple interpreter that can calculate arbitrarily nested mathematical expressions.
It supports:
- operators +, -, *, /, %.
- variable assignments, e.g. x = 1 or x = 1 + 1
- variable value retrieval
- operation nesting, e.g. (x + 1) * (-(2 - x))
Note that it is integer-based and does not understand floating point numbers or float division.
Commands: help, vars, exit.";

/// What the shell should do in response to one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The line evaluated to a value.
    Value(i64),
    /// The line was blank; print nothing.
    Nothing,
    /// The user asked for help.
    Help,
    /// The user asked for the defined variables, sorted by name.
    Variables(Vec<(String, i64)>),
    /// The line failed to evaluate.
    Failure(EvalError),
    /// The user asked to leave.
    Exit,
}

impl Reply {
    /// Returns the status code this reply corresponds to.
    #[must_use]
    pub fn status(&self) -> Status {
        match self {
            Self::Failure(error) => error.into(),
            Self::Nothing => Status::EmptyInput,
            _ => Status::Success,
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Nothing | Self::Exit => Ok(()),
            Self::Help => f.write_str(HELP),
            Self::Variables(variables) => {
                for (i, (name, value)) in variables.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{name} = {value}")?;
                }
                Ok(())
            },
            Self::Failure(error) => write!(f, "{error}"),
        }
    }
}

/// A shell session over one [`Environment`].
///
/// The session only dispatches commands; reading lines and printing replies
/// is left to the caller.
///
/// # Example
/// ```
/// use nestcalc::session::{Reply, Session};
///
/// let mut session = Session::default();
/// assert_eq!(session.respond("x = 4"), Reply::Value(4));
/// assert_eq!(session.respond("x % 3"), Reply::Value(1));
/// assert_eq!(session.respond("   "), Reply::Nothing);
/// assert_eq!(session.respond("exit"), Reply::Exit);
/// ```
#[derive(Debug, Default)]
pub struct Session {
    env: Environment,
}

impl Session {
    #[must_use]
    pub fn new(config: EnvironmentConfig) -> Self {
        Self { env: Environment::new(config) }
    }

    /// Handles one line of input.
    pub fn respond(&mut self, line: &str) -> Reply {
        match line.trim() {
            "exit" => Reply::Exit,
            "help" => Reply::Help,
            "vars" => Reply::Variables(self.env.variables().snapshot()),
            _ => match self.env.evaluate(line) {
                Ok(value) => Reply::Value(value),
                Err(EvalError::EmptyInput) => Reply::Nothing,
                Err(error) => Reply::Failure(error),
            },
        }
    }

    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.env
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.env.teardown();
    }
}
