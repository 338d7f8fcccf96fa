//! Stylesheet compilation errors.

use thiserror::Error;

/// An error produced when stylesheet source fails to compile.
///
/// The inner compiler error carries the syntax-level detail, including the
/// offending line.
#[derive(Debug, Error)]
#[error("failed to compile stylesheet: {0}")]
pub struct CompileError(#[from] Box<grass::Error>);
