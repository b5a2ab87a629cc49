//! Token cursor over a raw argument vector.
//!
//! [`TokenStream`] owns the read-only view of the arguments and the marker
//! character; [`Cursor`] is a plain position value. Consumption routines take
//! a cursor and hand back the advanced one, so pushing back a boundary token
//! is just a matter of returning the cursor that still points at it.

use crate::types::DEFAULT_MARKER;

/// A classified token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Starts with the marker; holds the rest of the token.
    Option(&'a str),
    /// Anything else that is not empty.
    Value(&'a str),
    /// An empty string, which cannot be classified.
    Empty,
}

/// Read-only arguments plus the marker character used to classify them.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    tokens: Vec<&'a str>,
    marker: char,
}

impl<'a> TokenStream<'a> {
    /// Creates a stream with the default `-` marker.
    pub fn new<S: AsRef<str>>(args: &'a [S]) -> Self {
        Self::with_marker(args, DEFAULT_MARKER)
    }

    /// Creates a stream with a custom marker character.
    pub fn with_marker<S: AsRef<str>>(args: &'a [S], marker: char) -> Self {
        Self {
            tokens: args.iter().map(|arg| arg.as_ref()).collect(),
            marker,
        }
    }

    /// The marker character.
    pub fn marker(&self) -> char {
        self.marker
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns `true` iff the first character of `token` is the marker.
    ///
    /// An empty token is never an option token.
    pub fn is_option_token(&self, token: &str) -> bool {
        token.starts_with(self.marker)
    }

    /// Classifies `token` against the marker.
    pub fn classify(&self, token: &'a str) -> Token<'a> {
        if token.is_empty() {
            Token::Empty
        } else if let Some(name) = token.strip_prefix(self.marker) {
            Token::Option(name)
        } else {
            Token::Value(token)
        }
    }

    /// The raw token under the cursor, if any.
    pub fn peek(&self, cursor: Cursor) -> Option<&'a str> {
        self.tokens.get(cursor.position()).copied()
    }

    /// The classified token under the cursor, if any.
    pub fn peek_token(&self, cursor: Cursor) -> Option<Token<'a>> {
        self.peek(cursor).map(|token| self.classify(token))
    }

    /// Reads the raw token under the cursor and returns it with the cursor
    /// moved past it.
    pub fn next(&self, cursor: Cursor) -> Option<(&'a str, Cursor)> {
        self.peek(cursor).map(|token| (token, cursor.advance()))
    }

    /// Returns `true` once the cursor has passed the last token.
    pub fn is_exhausted(&self, cursor: Cursor) -> bool {
        cursor.position() >= self.tokens.len()
    }
}

/// A position within a [`TokenStream`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Cursor(usize);

impl Cursor {
    /// A cursor at `position`.
    pub fn at(position: usize) -> Self {
        Self(position)
    }

    /// The index of the token under the cursor.
    pub fn position(self) -> usize {
        self.0
    }

    /// The cursor one token further on.
    pub fn advance(self) -> Self {
        Self(self.0 + 1)
    }

    /// The cursor one token back; stays at zero.
    pub fn rewind(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_tokens() {
        let args = ["-name", "jake", ""];
        let stream = TokenStream::new(&args);

        assert_eq!(stream.classify("-name"), Token::Option("name"));
        assert_eq!(stream.classify("jake"), Token::Value("jake"));
        assert_eq!(stream.classify(""), Token::Empty);
    }

    #[test]
    fn test_only_the_first_marker_is_stripped() {
        let args: [&str; 0] = [];
        let stream = TokenStream::new(&args);
        assert_eq!(stream.classify("--long"), Token::Option("-long"));
        assert_eq!(stream.classify("-"), Token::Option(""));
    }

    #[test]
    fn test_custom_marker() {
        let args = vec!["/flag".to_string(), "-5".to_string()];
        let stream = TokenStream::with_marker(&args, '/');

        assert!(stream.is_option_token("/flag"));
        assert!(!stream.is_option_token("-5"));
        assert_eq!(stream.peek_token(Cursor::at(1)), Some(Token::Value("-5")));
    }

    #[test]
    fn test_next_returns_the_advanced_cursor() {
        let args = ["a", "b"];
        let stream = TokenStream::new(&args);

        let start = Cursor::default();
        let (first, after_first) = stream.next(start).unwrap();
        assert_eq!(first, "a");
        assert_eq!(after_first.position(), 1);
        assert_eq!(start.position(), 0);

        let (second, end) = stream.next(after_first).unwrap();
        assert_eq!(second, "b");
        assert!(stream.is_exhausted(end));
        assert!(stream.next(end).is_none());
        assert_eq!(end.rewind(), after_first);
    }

    #[test]
    fn test_rewind_saturates_at_zero() {
        assert_eq!(Cursor::at(0).rewind(), Cursor::at(0));
    }
}
