//! The option registry: declared option names and their parameter types.

use std::collections::HashMap;

use tracing::trace;

use crate::error::{ArgsError, Result};
use crate::types::ParameterType;

/// Mapping from option name to declared [`ParameterType`].
///
/// Names are case-sensitive, are stored without the marker character and are
/// unique within one schema. Registration order is preserved for iteration.
///
/// # Examples
///
/// ```
/// use typed_args_core::{OptionSchema, ParameterType};
///
/// let mut schema = OptionSchema::new();
/// schema.register("name", ParameterType::String).unwrap();
/// schema.register("age", ParameterType::Number).unwrap();
///
/// assert_eq!(schema.lookup("age"), Some(ParameterType::Number));
/// assert_eq!(schema.lookup("Age"), None);
/// assert!(schema.register("name", ParameterType::Flag).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct OptionSchema {
    entries: Vec<(String, ParameterType)>,
    index: HashMap<String, usize>,
}

impl OptionSchema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares an option.
    ///
    /// # Errors
    ///
    /// Returns [`ArgsError::DuplicateOption`] if `name` is already registered;
    /// the schema is left unchanged.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        parameter_type: ParameterType,
    ) -> Result<()> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(ArgsError::DuplicateOption(name));
        }
        trace!(option = %name, %parameter_type, "registered option");
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, parameter_type));
        Ok(())
    }

    /// Chaining form of [`register`](Self::register).
    ///
    /// # Errors
    ///
    /// Same as [`register`](Self::register).
    pub fn with_option(
        mut self,
        name: impl Into<String>,
        parameter_type: ParameterType,
    ) -> Result<Self> {
        self.register(name, parameter_type)?;
        Ok(self)
    }

    /// Builds a schema from `(name, type)` pairs, in order.
    ///
    /// # Errors
    ///
    /// Returns [`ArgsError::DuplicateOption`] for the first repeated name.
    pub fn from_options<I, N>(options: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, ParameterType)>,
        N: Into<String>,
    {
        let mut schema = OptionSchema::new();
        for (name, parameter_type) in options {
            schema.register(name, parameter_type)?;
        }
        Ok(schema)
    }

    /// Returns the declared type of `name`, or `None` if it is not registered.
    pub fn lookup(&self, name: &str) -> Option<ParameterType> {
        self.index.get(name).map(|&slot| self.entries[slot].1)
    }

    /// Number of registered options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no option is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, type)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ParameterType)> {
        self.entries.iter().map(|(name, ty)| (name.as_str(), *ty))
    }
}
