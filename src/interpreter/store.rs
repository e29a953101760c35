use std::collections::HashMap;

use crate::error::{EvalError, EvalResult};

/// Default number of variables a store accepts.
pub const DEFAULT_CAPACITY: usize = 100;
/// Longest accepted variable name, in bytes.
pub const MAX_NAME_LENGTH: usize = 254;

/// A fixed-capacity table of integer variables.
///
/// Names are unique and case-sensitive. A variable is created by its first
/// assignment, overwritten by later ones, and only ever removed by
/// [`VariableStore::reset`].
///
/// The evaluator never writes to the store directly: it stages assignments in
/// a [`Transaction`] that is committed once the whole line has evaluated.
///
/// # Example
/// ```
/// use nestcalc::{error::EvalError, interpreter::store::VariableStore};
///
/// let mut store = VariableStore::with_capacity(1);
/// store.set("x", 5).unwrap();
/// store.set("x", 6).unwrap();
/// assert_eq!(store.get("x"), Ok(6));
/// assert_eq!(store.set("y", 1), Err(EvalError::StoreFull { capacity: 1 }));
/// ```
#[derive(Debug, Clone)]
pub struct VariableStore {
    variables: HashMap<String, i64>,
    capacity:  usize,
}

impl Default for VariableStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl VariableStore {
    /// Creates an empty store holding at most `capacity` variables.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { variables: HashMap::new(),
               capacity }
    }

    /// Assigns `value` to `name`, creating the variable if needed.
    ///
    /// # Errors
    /// - [`EvalError::InvalidInput`] if the name is longer than
    ///   [`MAX_NAME_LENGTH`].
    /// - [`EvalError::StoreFull`] if `name` is new and the store is at
    ///   capacity.
    pub fn set(&mut self, name: &str, value: i64) -> EvalResult<()> {
        validate_name(name)?;
        if let Some(slot) = self.variables.get_mut(name) {
            *slot = value;
            return Ok(());
        }
        if self.variables.len() >= self.capacity {
            return Err(EvalError::StoreFull { capacity: self.capacity });
        }
        self.variables.insert(name.to_string(), value);
        Ok(())
    }

    /// Returns the value of `name`.
    ///
    /// # Errors
    /// [`EvalError::UndefinedVariable`] if nothing was assigned to `name`.
    pub fn get(&self, name: &str) -> EvalResult<i64> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| EvalError::UndefinedVariable { name: name.to_string() })
    }

    /// Removes every variable. Calling it on an empty store does nothing.
    pub fn reset(&mut self) {
        self.variables.clear();
    }

    /// Returns `true` if `name` holds a committed value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Returns the number of committed variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if no variable is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Returns the maximum number of distinct names the store accepts.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns every variable, sorted by name.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(String, i64)> {
        let mut variables: Vec<_> = self.variables
                                        .iter()
                                        .map(|(name, value)| (name.clone(), *value))
                                        .collect();
        variables.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        variables
    }

    /// Opens a transaction over this store.
    ///
    /// Reads through the transaction see its own staged assignments first.
    /// Nothing reaches the store until [`Transaction::commit`]; dropping the
    /// transaction discards the staged assignments.
    pub fn begin(&mut self) -> Transaction<'_> {
        Transaction { store:  self,
                      staged: HashMap::new(), }
    }
}

/// Assignments staged during one evaluation.
#[derive(Debug)]
pub struct Transaction<'s> {
    store:  &'s mut VariableStore,
    staged: HashMap<String, i64>,
}

impl Transaction<'_> {
    /// Stages `value` under `name`.
    ///
    /// Capacity is checked against the store plus every new name already
    /// staged, so a successful `set` guarantees a successful commit.
    ///
    /// # Errors
    /// Same as [`VariableStore::set`].
    pub fn set(&mut self, name: &str, value: i64) -> EvalResult<()> {
        validate_name(name)?;
        if let Some(slot) = self.staged.get_mut(name) {
            *slot = value;
            return Ok(());
        }
        if !self.store.contains(name) && self.store.len() + self.new_names() >= self.store.capacity {
            return Err(EvalError::StoreFull { capacity: self.store.capacity });
        }
        self.staged.insert(name.to_string(), value);
        Ok(())
    }

    /// Returns the staged value of `name`, or its value in the store.
    ///
    /// # Errors
    /// [`EvalError::UndefinedVariable`] if neither has it.
    pub fn get(&self, name: &str) -> EvalResult<i64> {
        match self.staged.get(name) {
            Some(value) => Ok(*value),
            None => self.store.get(name),
        }
    }

    /// Applies every staged assignment to the store.
    pub fn commit(self) {
        let Self { store, staged } = self;
        if !staged.is_empty() {
            tracing::debug!(assignments = staged.len(), "committing assignments");
        }
        store.variables.extend(staged);
    }

    fn new_names(&self) -> usize {
        self.staged
            .keys()
            .filter(|name| !self.store.contains(name))
            .count()
    }
}

fn validate_name(name: &str) -> EvalResult<()> {
    if name.len() > MAX_NAME_LENGTH {
        return Err(EvalError::InvalidInput);
    }
    Ok(())
}
