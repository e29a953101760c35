use crate::{
    error::EvalResult,
    interpreter::{
        evaluator::core::{DEFAULT_MAX_DEPTH, Scanner},
        store::{DEFAULT_CAPACITY, VariableStore},
    },
};

/// Limits applied by an [`Environment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentConfig {
    /// Maximum number of variables.
    pub capacity:  usize,
    /// Maximum number of nested frames one line may open. Every
    /// parenthesised group, assignment and `+`/`-` continuation opens one.
    pub max_depth: usize,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self { capacity:  DEFAULT_CAPACITY,
               max_depth: DEFAULT_MAX_DEPTH, }
    }
}

/// Stores the evaluation environment.
///
/// An `Environment` owns the variables that persist from one line to the
/// next. Each call to [`Environment::evaluate`] scans one line against it.
///
/// ## Usage
///
/// `Environment` is created once (which initialises it), reused for every
/// line, and torn down when the caller is done with it.
///
/// ```
/// use nestcalc::{error::EvalError, interpreter::environment::Environment};
///
/// let mut env = Environment::default();
/// assert_eq!(env.evaluate("x = 2 + 3 * 4"), Ok(14));
/// assert_eq!(env.evaluate("(x - 4) / 3"), Ok(3));
/// assert_eq!(env.evaluate("y"),
///            Err(EvalError::UndefinedVariable { name: "y".to_string() }));
/// env.teardown();
/// ```
#[derive(Debug, Clone, Default)]
pub struct Environment {
    variables: VariableStore,
    config:    EnvironmentConfig,
}

impl Environment {
    /// Creates an initialised environment with the given limits.
    #[must_use]
    pub fn new(config: EnvironmentConfig) -> Self {
        Self { variables: VariableStore::with_capacity(config.capacity),
               config }
    }

    /// Clears every variable, returning the environment to its initial
    /// state.
    pub fn init(&mut self) {
        self.variables.reset();
    }

    /// Releases every variable. Safe to call on an environment with no
    /// variables, and more than once.
    pub fn teardown(&mut self) {
        tracing::debug!(variables = self.variables.len(), "tearing down environment");
        self.variables.reset();
    }

    /// Evaluates one line and returns its value.
    ///
    /// Assignments made by the line become visible to later lines only if
    /// the whole line evaluates successfully.
    ///
    /// # Errors
    /// Any [`EvalError`](crate::error::EvalError); see its variants.
    #[tracing::instrument(level = "debug", skip(self), ret, err(level = "debug"))]
    pub fn evaluate(&mut self, line: &str) -> EvalResult<i64> {
        let mut transaction = self.variables.begin();
        let value = Scanner::new(line, &mut transaction, self.config.max_depth).run()?;
        transaction.commit();
        Ok(value)
    }

    /// Returns the variable store.
    #[must_use]
    pub const fn variables(&self) -> &VariableStore {
        &self.variables
    }
}
