use thiserror::Error;

/// Coarse taxonomy of parse failures.
///
/// Every [`ErrorKind`] belongs to exactly one class; see [`ErrorKind::class`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The tokenizer rejected a character: bad escape, bad number shape,
    /// unknown literal, unexpected character.
    Lexical,
    /// The token sequence did not form a well-nested document: missing comma
    /// or colon, value after the root completed, and so on.
    Structural,
    /// The input bytes were not valid UTF-8.
    Encoding,
    /// The input ended with unfinished tokens or unclosed containers.
    UnexpectedEof,
}

/// The specific violation that terminated the stream.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("invalid character '{0}'")]
    InvalidCharacter(char),
    #[error("number has a leading zero")]
    LeadingZero,
    #[error("invalid escape character '{0}'")]
    InvalidEscape(char),
    #[error("invalid character '{0}' in unicode escape")]
    InvalidUnicodeEscape(char),
    #[error("unpaired surrogate \\u{0:04X}")]
    UnpairedSurrogate(u32),
    #[error("unescaped control character {0:?} in string")]
    ControlCharacter(char),
    #[error("expected ':' after object key, found '{0}'")]
    ExpectedColon(char),
    #[error("expected ',' or '{close}', found '{found}'")]
    ExpectedCommaOrClose { found: char, close: char },
    #[error("expected object key, found '{0}'")]
    ExpectedPropertyName(char),
    #[error("unexpected character '{0}' after the top-level value")]
    TrailingCharacter(char),
    #[error("unexpected {0} token")]
    MisplacedToken(&'static str),
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("input is not valid UTF-8")]
    InvalidUtf8,
    #[error("input ended inside a multi-byte UTF-8 sequence")]
    TruncatedUtf8,
}

impl ErrorKind {
    /// The taxonomy class this kind belongs to.
    #[must_use]
    pub fn class(&self) -> ErrorClass {
        use ErrorKind::*;
        match self {
            InvalidCharacter(_) | LeadingZero | InvalidEscape(_) | InvalidUnicodeEscape(_)
            | UnpairedSurrogate(_) | ControlCharacter(_) => ErrorClass::Lexical,
            ExpectedColon(_)
            | ExpectedCommaOrClose { .. }
            | ExpectedPropertyName(_)
            | TrailingCharacter(_)
            | MisplacedToken(_) => ErrorClass::Structural,
            UnexpectedEndOfInput => ErrorClass::UnexpectedEof,
            InvalidUtf8 | TruncatedUtf8 => ErrorClass::Encoding,
        }
    }
}

/// A fatal parse error.
///
/// All errors terminate the stream: no further events or values are produced
/// after one is returned. The error carries the one-based line and column and
/// the zero-based byte offset at which the violation was detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at line {line}, column {column} (byte {offset})")]
pub struct ParseError {
    pub(crate) kind: ErrorKind,
    pub(crate) line: usize,
    pub(crate) column: usize,
    pub(crate) offset: usize,
}

impl ParseError {
    /// The specific violation.
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The taxonomy class of the violation.
    #[must_use]
    pub fn class(&self) -> ErrorClass {
        self.kind.class()
    }

    /// One-based line of the violation.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// One-based column of the violation.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Zero-based byte offset of the violation.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}
