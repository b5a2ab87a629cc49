//! Option type definitions shared by the registry, the parser and the
//! parsed result.
//!
//! The types here are plain values designed for serialization with
//! [`serde`], so schema files and parse results can round-trip through JSON
//! and YAML.

use serde::{Deserialize, Serialize};

/// Character that marks a token as an option name (e.g. `-verbose`).
pub const DEFAULT_MARKER: char = '-';

/// Separator placed between array elements by
/// [`ParsedOptions::snapshot_as_text`](crate::ParsedOptions::snapshot_as_text).
///
/// U+0085 (NEXT LINE), a C1 control code point.
pub const ARRAY_SEPARATOR: char = '\u{0085}';

/// Separator placed between the two ends of a range by
/// [`ParsedOptions::snapshot_as_text`](crate::ParsedOptions::snapshot_as_text).
///
/// U+001D (GROUP SEPARATOR).
pub const RANGE_SEPARATOR: char = '\u{001D}';

/// Declared value shape of an option.
///
/// Each option name has exactly one parameter type for the lifetime of an
/// [`OptionSchema`](crate::OptionSchema); the type decides how many tokens
/// the parser consumes after the option token.
///
/// # Examples
///
/// ```
/// use typed_args_core::ParameterType;
///
/// assert_eq!(ParameterType::Range.readable_name(), "A Number range between two values");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParameterType {
    /// Present or absent; consumes no value token.
    Flag,
    /// Exactly one verbatim value token.
    String,
    /// One numeric token, with optional force suffix.
    Number,
    /// Two numeric tokens: start then end.
    Range,
    /// Every following value token up to the next option token.
    StringArray,
    /// Every following numeric token up to the next option token.
    NumberArray,
}

impl ParameterType {
    /// All parameter types, in declaration order.
    pub const ALL: [ParameterType; 6] = [
        ParameterType::Flag,
        ParameterType::String,
        ParameterType::Number,
        ParameterType::Range,
        ParameterType::StringArray,
        ParameterType::NumberArray,
    ];

    /// Human-readable description used by help pages and error messages.
    pub fn readable_name(self) -> &'static str {
        match self {
            ParameterType::Flag => "A flag",
            ParameterType::String => "A string value",
            ParameterType::Number => "A single number",
            ParameterType::Range => "A Number range between two values",
            ParameterType::StringArray => "An array of text",
            ParameterType::NumberArray => "An array of numbers",
        }
    }
}

impl std::fmt::Display for ParameterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ParameterType::Flag => "flag",
            ParameterType::String => "string",
            ParameterType::Number => "number",
            ParameterType::Range => "range",
            ParameterType::StringArray => "string-array",
            ParameterType::NumberArray => "number-array",
        };
        f.write_str(name)
    }
}

/// An ordered pair of numbers attached to a [`ParameterType::Range`] option.
///
/// The pair is directional: `start` may be greater than `end`.
///
/// # Examples
///
/// ```
/// use typed_args_core::Range;
///
/// let range = Range::new(40.7, -2.5);
/// assert_eq!(range.floored(), (40, -3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    /// First value token.
    pub start: f64,
    /// Second value token.
    pub end: f64,
}

impl Range {
    /// Creates a range from its two components.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Returns both ends floored to integers.
    pub fn floored(&self) -> (i64, i64) {
        (floor_to_int(self.start), floor_to_int(self.end))
    }
}

/// Which half of a range failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeComponent {
    /// The first value token.
    Start,
    /// The second value token.
    End,
}

impl std::fmt::Display for RangeComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangeComponent::Start => f.write_str("start"),
            RangeComponent::End => f.write_str("end"),
        }
    }
}

/// Floors a value and converts it to an integer.
///
/// Out-of-range values saturate and NaN becomes `0`, following `as` casts.
pub(crate) fn floor_to_int(value: f64) -> i64 {
    value.floor() as i64
}
