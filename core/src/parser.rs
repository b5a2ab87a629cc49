//! The parsing engine.
//!
//! One parse walks the token stream from the configured start offset. At each
//! position the token must be an option token; its name is looked up in the
//! [`OptionSchema`] and the declared [`ParameterType`] decides how many value
//! tokens follow. Both modes share the same dispatch and boundary rules and
//! differ only in what happens to a failure:
//!
//! - [`ParseMode::Strict`] returns the first error and no result.
//! - [`ParseMode::Lenient`] drops the failing entry and carries on.
//!
//! Two inherited behaviours are kept on purpose:
//!
//! - An option token that is not registered is skipped on its own. Any value
//!   tokens that belonged to it are then read as if they were at an option
//!   position (a stray value in strict mode, ignored in lenient mode).
//! - Single values (string, number, range) are taken verbatim from the next
//!   tokens, so `-age -5` works. Arrays stop at the first option token, so a
//!   negative number cannot be an array element with the default marker.

use tracing::debug;

use crate::cursor::{Cursor, Token, TokenStream};
use crate::error::{ArgsError, Result};
use crate::number::parse_number;
use crate::options::{Accumulator, ParsedOptions};
use crate::registry::OptionSchema;
use crate::types::{DEFAULT_MARKER, ParameterType, Range, RangeComponent};

/// How failures are handled during a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Abort on the first error.
    #[default]
    Strict,
    /// Drop failing entries and keep going.
    Lenient,
}

impl ParseMode {
    /// Returns `true` for [`ParseMode::Strict`].
    pub fn aborts_on_error(self) -> bool {
        matches!(self, ParseMode::Strict)
    }
}

/// Settings for an [`ArgsParser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Character that starts an option token.
    pub marker: char,
    /// Index of the first token to parse.
    pub start: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER,
            start: 0,
        }
    }
}

/// A value consumed for one option, tagged by parameter type.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    /// The flag was present.
    Flag,
    /// A verbatim string.
    String(String),
    /// A number after force-suffix coercion.
    Number(f64),
    /// A start/end pair.
    Range(Range),
    /// Verbatim strings up to the boundary token.
    StringArray(Vec<String>),
    /// Numbers up to the boundary token.
    NumberArray(Vec<f64>),
}

impl OptionValue {
    /// The parameter type this value belongs to.
    pub fn parameter_type(&self) -> ParameterType {
        match self {
            OptionValue::Flag => ParameterType::Flag,
            OptionValue::String(_) => ParameterType::String,
            OptionValue::Number(_) => ParameterType::Number,
            OptionValue::Range(_) => ParameterType::Range,
            OptionValue::StringArray(_) => ParameterType::StringArray,
            OptionValue::NumberArray(_) => ParameterType::NumberArray,
        }
    }
}

/// Parses argument vectors against an [`OptionSchema`].
///
/// The parser holds no per-parse state: every call builds its own stores, so
/// one parser can be reused and shared freely.
///
/// # Examples
///
/// ```
/// use typed_args_core::{ArgsParser, OptionSchema, ParameterType};
///
/// let schema = OptionSchema::from_options([
///     ("name", ParameterType::String),
///     ("arr", ParameterType::StringArray),
///     ("doit", ParameterType::Flag),
/// ])
/// .unwrap();
/// let parser = ArgsParser::new(&schema);
///
/// let args = ["-name", "hhhh", "-arr", "okay", "then", "-doit"];
/// let options = parser.parse(&args).unwrap();
/// assert_eq!(options.string("name"), Some("hhhh"));
/// assert_eq!(options.string_array("arr").unwrap(), ["okay", "then"]);
/// assert!(options.has_flag("doit"));
///
/// // Strict parsing rejects a stray value; lenient parsing skips it.
/// let args = ["stray", "-doit"];
/// assert!(parser.parse(&args).is_err());
/// assert!(parser.parse_lenient(&args).has_flag("doit"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ArgsParser<'s> {
    schema: &'s OptionSchema,
    config: ParserConfig,
}

impl<'s> ArgsParser<'s> {
    /// Creates a parser with the default configuration.
    pub fn new(schema: &'s OptionSchema) -> Self {
        Self::with_config(schema, ParserConfig::default())
    }

    /// Creates a parser with an explicit configuration.
    pub fn with_config(schema: &'s OptionSchema, config: ParserConfig) -> Self {
        Self { schema, config }
    }

    /// Overrides the marker character.
    pub fn with_marker(mut self, marker: char) -> Self {
        self.config.marker = marker;
        self
    }

    /// Starts parsing at token `start` instead of `0`.
    pub fn starting_at(mut self, start: usize) -> Self {
        self.config.start = start;
        self
    }

    /// Parses in strict mode.
    ///
    /// # Errors
    ///
    /// Returns the first [`ArgsError`] met; no partial result is returned.
    pub fn parse<S: AsRef<str>>(&self, args: &[S]) -> Result<ParsedOptions> {
        self.parse_with_mode(args, ParseMode::Strict)
    }

    /// Parses in lenient mode. Never fails; failing options are left out.
    pub fn parse_lenient<S: AsRef<str>>(&self, args: &[S]) -> ParsedOptions {
        // Lenient runs absorb every failure, so the error arm is never taken.
        self.parse_with_mode(args, ParseMode::Lenient)
            .unwrap_or_default()
    }

    /// Parses in the given mode.
    ///
    /// # Errors
    ///
    /// In strict mode, returns the first [`ArgsError`] met. Lenient mode
    /// always returns `Ok`.
    pub fn parse_with_mode<S: AsRef<str>>(
        &self,
        args: &[S],
        mode: ParseMode,
    ) -> Result<ParsedOptions> {
        let stream = TokenStream::with_marker(args, self.config.marker);
        let mut acc = Accumulator::default();
        let mut cursor = Cursor::at(self.config.start);

        while let Some(token) = stream.peek_token(cursor) {
            let index = cursor.position();
            cursor = cursor.advance();

            let name = match token {
                Token::Option(name) => name,
                Token::Value(raw) => {
                    if mode.aborts_on_error() {
                        return Err(ArgsError::NotAnOption {
                            token: raw.to_string(),
                            index,
                            marker: stream.marker(),
                        });
                    }
                    continue;
                }
                Token::Empty => {
                    if mode.aborts_on_error() {
                        return Err(ArgsError::EmptyToken { index });
                    }
                    continue;
                }
            };

            let Some(parameter_type) = self.schema.lookup(name) else {
                debug!(option = name, index, "skipping unregistered option");
                continue;
            };

            match consume(parameter_type, name, &stream, cursor, mode) {
                Ok((value, next)) => {
                    record(&mut acc, name, value);
                    cursor = next;
                }
                Err(failure) => {
                    if mode.aborts_on_error() {
                        return Err(failure.error);
                    }
                    cursor = failure.resume;
                }
            }
        }

        let options = acc.finish();
        debug!(?mode, parsed = options.len(), tokens = stream.len(), "parsed arguments");
        Ok(options)
    }
}

/// Parses `args` against `schema` with the default configuration.
///
/// # Errors
///
/// Same as [`ArgsParser::parse_with_mode`].
pub fn parse_args<S: AsRef<str>>(
    schema: &OptionSchema,
    args: &[S],
    mode: ParseMode,
) -> Result<ParsedOptions> {
    ArgsParser::new(schema).parse_with_mode(args, mode)
}

/// A failed consumption and where the loop resumes if it is absorbed.
#[derive(Debug)]
struct Failure {
    error: ArgsError,
    resume: Cursor,
}

type Consumed = std::result::Result<(OptionValue, Cursor), Failure>;

/// Consumes the value tokens of one option, starting right after its token.
fn consume(
    parameter_type: ParameterType,
    option: &str,
    stream: &TokenStream<'_>,
    cursor: Cursor,
    mode: ParseMode,
) -> Consumed {
    match parameter_type {
        ParameterType::Flag => Ok((OptionValue::Flag, cursor)),
        ParameterType::String => consume_string(option, stream, cursor),
        ParameterType::Number => consume_number(option, stream, cursor),
        ParameterType::Range => consume_range(option, stream, cursor),
        ParameterType::StringArray => consume_string_array(stream, cursor, mode),
        ParameterType::NumberArray => consume_number_array(option, stream, cursor, mode),
    }
}

fn missing_value(option: &str, parameter_type: ParameterType, resume: Cursor) -> Failure {
    Failure {
        error: ArgsError::MissingValue {
            option: option.to_string(),
            parameter_type,
        },
        resume,
    }
}

fn consume_string(option: &str, stream: &TokenStream<'_>, cursor: Cursor) -> Consumed {
    let (token, next) = stream
        .next(cursor)
        .ok_or_else(|| missing_value(option, ParameterType::String, cursor))?;
    Ok((OptionValue::String(token.to_string()), next))
}

fn consume_number(option: &str, stream: &TokenStream<'_>, cursor: Cursor) -> Consumed {
    let (token, next) = stream
        .next(cursor)
        .ok_or_else(|| missing_value(option, ParameterType::Number, cursor))?;
    let value = parse_number(token).map_err(|err| Failure {
        error: ArgsError::InvalidNumber {
            option: option.to_string(),
            token: err.token,
            element: None,
        },
        resume: next,
    })?;
    Ok((OptionValue::Number(value), next))
}

fn consume_range(option: &str, stream: &TokenStream<'_>, cursor: Cursor) -> Consumed {
    let (start, next) = range_component(option, stream, cursor, RangeComponent::Start)?;
    let (end, next) = range_component(option, stream, next, RangeComponent::End)?;
    Ok((OptionValue::Range(Range::new(start, end)), next))
}

fn range_component(
    option: &str,
    stream: &TokenStream<'_>,
    cursor: Cursor,
    component: RangeComponent,
) -> std::result::Result<(f64, Cursor), Failure> {
    let (token, next) = stream
        .next(cursor)
        .ok_or_else(|| missing_value(option, ParameterType::Range, cursor))?;
    let value = parse_number(token).map_err(|err| Failure {
        error: ArgsError::IncompleteRange {
            option: option.to_string(),
            component,
            token: err.token,
        },
        resume: next,
    })?;
    Ok((value, next))
}

/// Reads the next array element, or `None` at a boundary token or the end.
///
/// Empty tokens are an error in strict mode and an ordinary element in
/// lenient mode.
fn next_element<'a>(
    stream: &TokenStream<'a>,
    cursor: Cursor,
    mode: ParseMode,
) -> std::result::Result<Option<&'a str>, Failure> {
    match stream.peek_token(cursor) {
        None | Some(Token::Option(_)) => Ok(None),
        Some(Token::Value(raw)) => Ok(Some(raw)),
        Some(Token::Empty) if mode.aborts_on_error() => Err(Failure {
            error: ArgsError::EmptyToken {
                index: cursor.position(),
            },
            resume: cursor.advance(),
        }),
        Some(Token::Empty) => Ok(Some("")),
    }
}

fn consume_string_array(stream: &TokenStream<'_>, mut cursor: Cursor, mode: ParseMode) -> Consumed {
    let mut values = Vec::new();
    while let Some(raw) = next_element(stream, cursor, mode)? {
        values.push(raw.to_string());
        cursor = cursor.advance();
    }
    Ok((OptionValue::StringArray(values), cursor))
}

fn consume_number_array(
    option: &str,
    stream: &TokenStream<'_>,
    mut cursor: Cursor,
    mode: ParseMode,
) -> Consumed {
    let first = cursor;
    let mut values = Vec::new();
    while let Some(raw) = next_element(stream, cursor, mode)? {
        let element = cursor.position() - first.position();
        cursor = cursor.advance();
        match parse_number(raw) {
            Ok(value) => values.push(value),
            Err(err) if mode.aborts_on_error() => {
                return Err(Failure {
                    error: ArgsError::InvalidNumber {
                        option: option.to_string(),
                        token: err.token,
                        element: Some(element),
                    },
                    resume: cursor,
                });
            }
            Err(_) => {}
        }
    }
    Ok((OptionValue::NumberArray(values), cursor))
}

fn record(acc: &mut Accumulator, name: &str, value: OptionValue) {
    match value {
        OptionValue::Flag => acc.flag(name),
        OptionValue::String(value) => acc.string(name, value),
        OptionValue::Number(value) => acc.number(name, value),
        OptionValue::Range(value) => acc.range(name, value),
        OptionValue::StringArray(values) => acc.string_array(name, values),
        OptionValue::NumberArray(values) => acc.number_array(name, values),
    }
}
