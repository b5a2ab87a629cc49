//! Schema files for the command-line front end.
//!
//! A schema file is YAML, or JSON when its extension is `.json`, listing
//! the options to register:
//!
//! ```yaml
//! program: demo
//! marker: "-"
//! options:
//!   - name: name
//!     type: string
//!     description: The name of the person
//!   - name: efficiency
//!     type: range
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use typed_args_core::{ArgsError, DEFAULT_MARKER, HelpPage, OptionSchema, ParameterType};

/// Errors raised while loading a schema file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// The option list is not a valid schema.
    #[error("invalid schema: {0}")]
    InvalidSchema(#[from] ArgsError),
}

/// One option declared in a schema file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionConfig {
    /// Option name without the marker.
    pub name: String,
    /// Declared parameter type.
    #[serde(rename = "type")]
    pub parameter_type: ParameterType,
    /// Description shown by `help`.
    #[serde(default)]
    pub description: String,
}

/// Top-level schema file contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaConfig {
    /// Program name used in the help header.
    #[serde(default)]
    pub program: Option<String>,
    /// Marker character; defaults to `-`.
    #[serde(default = "default_marker")]
    pub marker: char,
    /// Declared options, in order.
    pub options: Vec<OptionConfig>,
}

fn default_marker() -> char {
    DEFAULT_MARKER
}

impl SchemaConfig {
    /// Loads and validates a schema file.
    ///
    /// Files ending in `.json` are read as JSON, everything else as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::IoError`] if the file cannot be read,
    /// [`ConfigError::JsonError`] or [`ConfigError::YamlError`] if it does
    /// not parse, and [`ConfigError::InvalidSchema`] if an option name is
    /// repeated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config = if is_json {
            Self::from_json_str(&raw)?
        } else {
            Self::from_yaml_str(&raw)?
        };
        debug!(path = %path.display(), options = config.options.len(), "loaded schema file");
        Ok(config)
    }

    /// Parses YAML schema file contents.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load), minus I/O.
    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: SchemaConfig = serde_yaml::from_str(raw)?;
        config.schema()?;
        Ok(config)
    }

    /// Parses JSON schema file contents.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load), minus I/O.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: SchemaConfig = serde_json::from_str(raw)?;
        config.schema()?;
        Ok(config)
    }

    /// Builds the option registry.
    ///
    /// # Errors
    ///
    /// Returns [`ArgsError::DuplicateOption`] for a repeated name.
    pub fn schema(&self) -> Result<OptionSchema, ArgsError> {
        OptionSchema::from_options(
            self.options
                .iter()
                .map(|option| (option.name.clone(), option.parameter_type)),
        )
    }

    /// Builds the help page, using `program` over the file's own name.
    pub fn help_page(&self, program: Option<&str>) -> HelpPage {
        let program = program
            .or(self.program.as_deref())
            .unwrap_or("this program");
        let mut help = HelpPage::new(program).with_marker(self.marker);
        for option in &self.options {
            help.document(
                option.name.clone(),
                option.parameter_type,
                option.description.clone(),
            );
        }
        help
    }
}
