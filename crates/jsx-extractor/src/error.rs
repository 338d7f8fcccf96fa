//! Markup parse errors.

use thiserror::Error;

/// An error produced when component source fails to parse.
#[derive(Debug, Clone, Error)]
#[error("failed to parse component: {message}")]
pub struct ParseError {
    /// Human-readable description from the parser.
    pub message: String,
}

impl From<swc_ecma_parser::error::Error> for ParseError {
    fn from(err: swc_ecma_parser::error::Error) -> Self {
        Self {
            message: err.into_kind().msg().into_owned(),
        }
    }
}
