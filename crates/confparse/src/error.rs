use std::io;

use thiserror::Error;

use crate::value::ConvertError;

/// Failures produced while parsing configuration text or reading it from
/// a resource.
///
/// Parse failures abort the parse call at the offending line; nothing is
/// retried or recovered. Each syntax variant carries the 1-based line
/// number, also available through [`Error::line`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// No character from the delimiter set occurs on the line.
    #[error("syntax error at line {line}: no delimiter found")]
    NoDelimiter { line: usize },

    /// The delimiter is the first character of the line, leaving no key.
    #[error("syntax error at line {line}: empty key, delimiter at start of line")]
    EmptyKey { line: usize },

    /// The delimiter is the last character of the line and empty values
    /// are disallowed.
    #[error("syntax error at line {line}: empty value, delimiter at end of line")]
    EmptyValue { line: usize },

    /// The line is blank after preprocessing and blank lines are
    /// disallowed.
    #[error("syntax error at line {line}: empty line not allowed")]
    EmptyLine { line: usize },

    /// The named resource could not be read.
    #[error("failed to read resource '{name}': {source}")]
    Resource { name: String, source: io::Error },

    /// A cell's text could not be converted to the requested type.
    #[error("conversion error: {0}")]
    Convert(#[from] ConvertError),
}

impl Error {
    /// The 1-based line the parser stopped at, for syntax errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::NoDelimiter { line }
            | Error::EmptyKey { line }
            | Error::EmptyValue { line }
            | Error::EmptyLine { line } => Some(*line),
            Error::Resource { .. } | Error::Convert(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
