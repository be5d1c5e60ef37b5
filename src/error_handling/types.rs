//! Error type definitions.
//!
//! This module defines the error types used throughout the crate. The touch
//! check itself never fails; these errors cover the boundary where untyped
//! input becomes a `Website`, file reads in the CLI, and logger setup.

use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for building a website from caller-supplied input.
///
/// A missing required field is a caller-contract violation and is reported
/// here rather than being treated as "no legacy support found".
#[derive(Error, Debug)]
pub enum TouchCheckError {
    /// The input did not satisfy the website contract.
    #[error("Invalid input ({kind}): {detail}")]
    InvalidInput {
        /// What was wrong with the input
        kind: InputErrorKind,
        /// Human-readable description, usually from the deserializer
        detail: String,
    },

    /// A local asset or manifest could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Path that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl TouchCheckError {
    /// Builds an `InvalidInput` error from a kind and description.
    pub fn invalid_input(kind: InputErrorKind, detail: impl Into<String>) -> Self {
        TouchCheckError::InvalidInput {
            kind,
            detail: detail.into(),
        }
    }

    /// Returns the input error kind, if this is an input error.
    pub fn input_kind(&self) -> Option<InputErrorKind> {
        match self {
            TouchCheckError::InvalidInput { kind, .. } => Some(*kind),
            TouchCheckError::Io { .. } => None,
        }
    }
}

/// Classification of invalid website input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InputErrorKind {
    /// A required field (`css`, `js`, `report`, `messages`, `rule`, `id`, `content`) is absent
    MissingField,
    /// A field is present but has the wrong type (e.g. `content: null`)
    WrongType,
    /// The document is not well-formed JSON
    Syntax,
    /// The document ended early
    UnexpectedEof,
}

impl std::fmt::Display for InputErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl InputErrorKind {
    /// Returns a human-readable description of the error kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputErrorKind::MissingField => "missing required field",
            InputErrorKind::WrongType => "wrong field type",
            InputErrorKind::Syntax => "malformed JSON",
            InputErrorKind::UnexpectedEof => "unexpected end of input",
        }
    }
}
