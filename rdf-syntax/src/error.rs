//! Error handling.

use nom::error::{ErrorKind, ParseError};
use nom::Err as NErr;

/// Type alias for `Result` with default `Error`.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Maximal length of context given for syntax errors.
pub const MAX_CTX_LEN: usize = 48;

/// Errors that are raised by this crate.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The parser failed to match any rule at the given position.
    #[error("syntax error at {ctx:?}: expected {expected}")]
    SyntaxError {
        /// A bounded snippet of the input where the failure occurred.
        ctx: String,
        /// What the parser expected to find there.
        expected: String,
    },
    /// The given text is not a valid absolute IRI.
    #[error("{0:?} is not a valid IRI")]
    InvalidIri(String),
    /// A prefixed name used a prefix that was never declared.
    #[error("prefix {0:?} is not defined")]
    UnknownPrefix(String),
    /// A datatype IRI could not be resolved to a known XSD datatype.
    #[error("{0:?} is not a known datatype")]
    UnknownDatatype(String),
    /// An AST-level inconsistency that should be unreachable for any
    /// document accepted by the grammar.
    #[error("structural error: {0}")]
    StructuralError(String),
}

impl Error {
    /// Builds a [`Error::SyntaxError`], truncating the context to
    /// [`MAX_CTX_LEN`].
    pub fn syntax(ctx: &str, expected: impl Into<String>) -> Self {
        let ctx = if ctx.len() > MAX_CTX_LEN {
            format!("{}...", &ctx[..MAX_CTX_LEN])
        } else {
            ctx.to_owned()
        };
        Error::SyntaxError {
            ctx,
            expected: expected.into(),
        }
    }
}

impl<'a> From<(&'a str, ErrorKind)> for Error {
    fn from((i, kind): (&'a str, ErrorKind)) -> Self {
        Error::syntax(i, format!("{:?}", kind))
    }
}

impl<'a> ParseError<&'a str> for Error {
    fn from_error_kind(input: &'a str, kind: ErrorKind) -> Self {
        Error::from((input, kind))
    }
    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

/// Parser result using this crate's error type directly as `nom`'s error.
pub type PResult<'a, O> = nom::IResult<&'a str, O, Error>;

/// Turns a bare `nom::Err` failure into an owned [`Error`] for callers that
/// drive the parser to completion.
pub fn finish<'a, O>(result: PResult<'a, O>) -> Result<(&'a str, O)> {
    result.map_err(|e| match e {
        NErr::Error(err) | NErr::Failure(err) => err,
        NErr::Incomplete(_) => Error::syntax("", "more input"),
    })
}

