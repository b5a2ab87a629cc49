//! Help page rendering for declared options.
//!
//! A [`HelpPage`] lists each option with its readable parameter type and a
//! description. It can register the option in an [`OptionSchema`] in the same
//! call, but never influences parsing.

use std::io::{self, Write};

use crate::error::Result;
use crate::registry::OptionSchema;
use crate::types::{DEFAULT_MARKER, ParameterType};

/// One documented option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    /// Option name without the marker.
    pub name: String,
    /// Declared parameter type.
    pub parameter_type: ParameterType,
    /// Free-form description.
    pub description: String,
}

/// Human-readable list of options for a program.
///
/// # Examples
///
/// ```
/// use typed_args_core::{HelpPage, OptionSchema, ParameterType};
///
/// let mut schema = OptionSchema::new();
/// let mut help = HelpPage::new("Demo");
/// help.register("age", ParameterType::Number, "The age of the person", &mut schema)
///     .unwrap();
///
/// assert_eq!(schema.lookup("age"), Some(ParameterType::Number));
/// assert_eq!(
///     help.render(),
///     "Help for Demo\n  -age [A single number]\n     The age of the person\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct HelpPage {
    program: String,
    marker: char,
    entries: Vec<HelpEntry>,
}

impl HelpPage {
    /// Creates an empty page for `program`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            marker: DEFAULT_MARKER,
            entries: Vec::new(),
        }
    }

    /// Uses `marker` instead of `-` when printing option names.
    pub fn with_marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }

    /// Documented entries, in insertion order.
    pub fn entries(&self) -> &[HelpEntry] {
        &self.entries
    }

    /// Adds an entry without touching any schema.
    pub fn document(
        &mut self,
        name: impl Into<String>,
        parameter_type: ParameterType,
        description: impl Into<String>,
    ) {
        self.entries.push(HelpEntry {
            name: name.into(),
            parameter_type,
            description: description.into(),
        });
    }

    /// Registers the option in `schema` and documents it.
    ///
    /// # Errors
    ///
    /// Returns [`ArgsError::DuplicateOption`](crate::ArgsError::DuplicateOption)
    /// if the schema already has the name; nothing is documented then.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        parameter_type: ParameterType,
        description: impl Into<String>,
        schema: &mut OptionSchema,
    ) -> Result<()> {
        let name = name.into();
        schema.register(name.clone(), parameter_type)?;
        self.document(name, parameter_type, description);
        Ok(())
    }

    /// Renders the page as text, one line per row.
    pub fn render(&self) -> String {
        let mut out = format!("Help for {}\n", self.program);
        for entry in &self.entries {
            out.push_str(&format!(
                "  {}{} [{}]\n     {}\n",
                self.marker,
                entry.name,
                entry.parameter_type.readable_name(),
                entry.description
            ));
        }
        out
    }

    /// Writes the rendered page to `writer`.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from the writer.
    pub fn write_to(&self, mut writer: impl Write) -> io::Result<()> {
        writer.write_all(self.render().as_bytes())
    }
}
