//! Error types for parsing operations.

use thiserror::Error;

/// The reason a parse attempt failed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The input was empty, or contained nothing but whitespace.
    #[error("empty input")]
    EmptyInput,

    /// The first significant byte matches no value production.
    #[error("unrecognized token")]
    UnrecognizedToken,

    /// A scanned numeric literal fits neither `i64` nor a finite `f64`.
    #[error("malformed number literal")]
    MalformedNumber,

    /// End of input was reached inside a string literal.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// An object key position parsed to something other than a string.
    #[error("object key is not a string")]
    NonStringKey,
}

/// A parse failure with the byte offset where it was detected.
///
/// Nested failures (a bad array element, a bad object key or value) bubble
/// out unchanged, so the offset always points at the innermost offending
/// byte rather than the enclosing container.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at byte {offset}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// Byte position in the input where the error was detected.
    pub offset: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

/// Convenience alias used throughout jsonlet-core.
pub type Result<T> = std::result::Result<T, ParseError>;
