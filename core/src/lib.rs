//! Typed command-line option parsing.
//!
//! This crate turns a raw argument vector into typed values:
//!
//! - [`OptionSchema`]: the registry of option names and their
//!   [`ParameterType`] (flag, string, number, range, string array, number
//!   array).
//! - [`ArgsParser`]: walks the arguments and dispatches on each option's
//!   declared type, in [strict](ParseMode::Strict) or
//!   [lenient](ParseMode::Lenient) mode.
//! - [`ParsedOptions`]: the immutable result with typed accessors and a flat
//!   text snapshot.
//! - [`parse_number`]: the force-suffix number grammar (`42i`, `1.5d`).
//! - [`HelpPage`]: a plain-text listing of documented options.
//!
//! Strict parsing fails with an [`ArgsError`] on the first problem; lenient
//! parsing never fails and leaves failing options out of the result.
//!
//! # Example
//!
//! ```
//! use typed_args_core::*;
//!
//! let mut schema = OptionSchema::new();
//! schema.register("name", ParameterType::String).unwrap();
//! schema.register("age", ParameterType::Number).unwrap();
//! schema.register("eff", ParameterType::Range).unwrap();
//! schema.register("ids", ParameterType::NumberArray).unwrap();
//! schema.register("doit", ParameterType::Flag).unwrap();
//!
//! let args = ["-name", "jake", "-age", "69.9i", "-eff", "21", "40", "-ids", "1", "2", "-doit"];
//! let options = ArgsParser::new(&schema).parse(&args).unwrap();
//!
//! assert_eq!(options.string("name"), Some("jake"));
//! assert_eq!(options.number("age"), Some(69.0));
//! assert_eq!(options.range("eff"), Some(Range::new(21.0, 40.0)));
//! assert_eq!(options.number_array_floored("ids"), Some(vec![1, 2]));
//! assert!(options.has_flag("doit"));
//!
//! // A stray value aborts strict parsing but is skipped by lenient parsing.
//! let args = ["-doit", "stray", "-age", "3"];
//! let err = ArgsParser::new(&schema).parse(&args).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::MalformedArgument);
//! let options = ArgsParser::new(&schema).parse_lenient(&args);
//! assert_eq!(options.number("age"), Some(3.0));
//! ```

mod cursor;
mod error;
mod help;
mod number;
mod options;
mod parser;
mod registry;
mod types;

pub use cursor::{Cursor, Token, TokenStream};
pub use error::{ArgsError, ErrorKind, Result};
pub use help::{HelpEntry, HelpPage};
pub use number::{ForceSuffix, NumberFormatError, parse_number};
pub use options::ParsedOptions;
pub use parser::{ArgsParser, OptionValue, ParseMode, ParserConfig, parse_args};
pub use registry::OptionSchema;
pub use types::*;
