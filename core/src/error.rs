//! Error types for schema construction and argument parsing.
//!
//! Strict parsing surfaces the first [`ArgsError`] it meets; lenient parsing
//! absorbs them and leaves the failing option out of the result. Schema
//! construction errors are always surfaced.

use thiserror::Error;

use crate::types::{ParameterType, RangeComponent};

/// Coarse error category, independent of the detailed variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A token that must be an option is not one, or value tokens are missing.
    MalformedArgument,
    /// An option name was registered twice.
    DuplicateOption,
    /// A token could not be coerced to a number.
    NumberParse,
    /// One half of a range could not be coerced to a number.
    IncompleteRange,
}

/// Errors raised while building a schema or parsing arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    /// A token at an option position does not start with the marker.
    #[error("expected an option at argument {index} but '{token}' does not begin with '{marker}'")]
    NotAnOption {
        /// The offending token.
        token: String,
        /// Position of the token in the argument vector.
        index: usize,
        /// The marker character in effect.
        marker: char,
    },

    /// An empty token was found where it had to be classified.
    #[error("argument {index} is empty")]
    EmptyToken {
        /// Position of the token in the argument vector.
        index: usize,
    },

    /// The arguments ended before the option's value tokens.
    #[error(
        "failed to parse option '{option}' ({}): missing value at end of arguments",
        .parameter_type.readable_name()
    )]
    MissingValue {
        /// Option name without the marker.
        option: String,
        /// Declared type of the option.
        parameter_type: ParameterType,
    },

    /// The same option name was registered twice.
    #[error("option '{0}' is already registered")]
    DuplicateOption(String),

    /// A number or number-array value could not be parsed.
    #[error(
        "failed to parse option '{option}' ({}): '{token}' is not a number{}",
        number_type_name(.element),
        array_index_suffix(.element)
    )]
    InvalidNumber {
        /// Option name without the marker.
        option: String,
        /// The token that failed to parse.
        token: String,
        /// Index within the array for number-array options.
        element: Option<usize>,
    },

    /// The start or end token of a range could not be parsed.
    #[error(
        "failed to parse option '{option}' ({}): the {component} of the range, '{token}', is not a number",
        ParameterType::Range.readable_name()
    )]
    IncompleteRange {
        /// Option name without the marker.
        option: String,
        /// Which half failed.
        component: RangeComponent,
        /// The token that failed to parse.
        token: String,
    },
}

impl ArgsError {
    /// Returns the error category.
    ///
    /// # Examples
    ///
    /// ```
    /// use typed_args_core::{ArgsError, ErrorKind};
    ///
    /// let err = ArgsError::DuplicateOption("name".into());
    /// assert_eq!(err.kind(), ErrorKind::DuplicateOption);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArgsError::NotAnOption { .. }
            | ArgsError::EmptyToken { .. }
            | ArgsError::MissingValue { .. } => ErrorKind::MalformedArgument,
            ArgsError::DuplicateOption(_) => ErrorKind::DuplicateOption,
            ArgsError::InvalidNumber { .. } => ErrorKind::NumberParse,
            ArgsError::IncompleteRange { .. } => ErrorKind::IncompleteRange,
        }
    }

    /// Returns `true` for number failures, including incomplete ranges.
    pub fn is_number_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::NumberParse | ErrorKind::IncompleteRange
        )
    }

    /// Returns the option the error is about, when there is one.
    pub fn option(&self) -> Option<&str> {
        match self {
            ArgsError::MissingValue { option, .. }
            | ArgsError::InvalidNumber { option, .. }
            | ArgsError::IncompleteRange { option, .. } => Some(option),
            ArgsError::DuplicateOption(name) => Some(name),
            ArgsError::NotAnOption { .. } | ArgsError::EmptyToken { .. } => None,
        }
    }
}

fn number_type_name(element: &Option<usize>) -> &'static str {
    match element {
        Some(_) => ParameterType::NumberArray.readable_name(),
        None => ParameterType::Number.readable_name(),
    }
}

fn array_index_suffix(element: &Option<usize>) -> String {
    element
        .map(|index| format!(" (array index {index})"))
        .unwrap_or_default()
}

/// Convenience alias for results with [`ArgsError`].
pub type Result<T> = std::result::Result<T, ArgsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_range_is_a_number_error() {
        let err = ArgsError::IncompleteRange {
            option: "eff".into(),
            component: RangeComponent::End,
            token: "x".into(),
        };
        assert_eq!(err.kind(), ErrorKind::IncompleteRange);
        assert!(err.is_number_error());
        assert_eq!(err.option(), Some("eff"));
    }

    #[test]
    fn test_messages_name_option_and_type() {
        let err = ArgsError::InvalidNumber {
            option: "sizes".into(),
            token: "big".into(),
            element: Some(2),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse option 'sizes' (An array of numbers): 'big' is not a number (array index 2)"
        );

        let err = ArgsError::MissingValue {
            option: "name".into(),
            parameter_type: ParameterType::String,
        };
        assert_eq!(
            err.to_string(),
            "failed to parse option 'name' (A string value): missing value at end of arguments"
        );
    }

    #[test]
    fn test_not_an_option_message() {
        let err = ArgsError::NotAnOption {
            token: "stray".into(),
            index: 3,
            marker: '-',
        };
        assert_eq!(err.kind(), ErrorKind::MalformedArgument);
        assert_eq!(
            err.to_string(),
            "expected an option at argument 3 but 'stray' does not begin with '-'"
        );
        assert!(!err.is_number_error());
    }
}
