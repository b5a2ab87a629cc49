//! Force-suffix number coercion.
//!
//! A numeric token may end in a force suffix:
//!
//! - `i` / `I` forces integer semantics: the value is floored (`2.7i` → `2`).
//! - `d` / `D` forces floating semantics: the value is kept as is.
//!
//! Without a suffix the whole token is parsed as a floating literal.
//!
//! Only the suffix character itself is stripped, so `42i` is `42`.

use thiserror::Error;

/// Rounding rule implied by a token's force suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForceSuffix {
    /// No suffix; the literal is parsed as written.
    None,
    /// `i`/`I`: floor to a whole number.
    Integer,
    /// `d`/`D`: floating, no rounding.
    Double,
}

impl ForceSuffix {
    /// Classifies the last character of `token`.
    pub fn of(token: &str) -> Self {
        match token.chars().next_back() {
            Some('i' | 'I') => ForceSuffix::Integer,
            Some('d' | 'D') => ForceSuffix::Double,
            _ => ForceSuffix::None,
        }
    }
}

/// A token that is not a valid number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{token}' is not a valid number")]
pub struct NumberFormatError {
    /// The rejected token, as given.
    pub token: String,
}

/// Parses `token` as a number, honouring a trailing force suffix.
///
/// # Errors
///
/// Returns [`NumberFormatError`] if the token, minus any suffix, is not a
/// floating literal.
///
/// # Examples
///
/// ```
/// use typed_args_core::parse_number;
///
/// assert_eq!(parse_number("42").unwrap(), 42.0);
/// assert_eq!(parse_number("2.7i").unwrap(), 2.0);
/// assert_eq!(parse_number("-2.5I").unwrap(), -3.0);
/// assert_eq!(parse_number("1.5d").unwrap(), 1.5);
/// assert!(parse_number("abc").is_err());
/// ```
pub fn parse_number(token: &str) -> Result<f64, NumberFormatError> {
    let suffix = ForceSuffix::of(token);
    let literal = match suffix {
        ForceSuffix::None => token,
        // Suffix chars are ASCII, so the byte slice stays on a char boundary.
        ForceSuffix::Integer | ForceSuffix::Double => &token[..token.len() - 1],
    };

    let value = parse_literal(literal).ok_or_else(|| NumberFormatError {
        token: token.to_string(),
    })?;

    Ok(match suffix {
        ForceSuffix::Integer => value.floor(),
        ForceSuffix::None | ForceSuffix::Double => value,
    })
}

fn parse_literal(literal: &str) -> Option<f64> {
    let trimmed = literal.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
