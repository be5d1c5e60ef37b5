//! Error categorization.
//!
//! This module maps deserializer failures onto `InputErrorKind` so callers can
//! tell a missing field apart from malformed JSON.

use serde_json::error::Category;

use super::types::{InputErrorKind, TouchCheckError};

/// Categorizes a `serde_json::Error` into an `InputErrorKind`.
///
/// `serde_json` reports missing fields and type mismatches under the same
/// `Data` category, so the message is inspected to separate them.
///
/// # Arguments
///
/// * `error` - The `serde_json::Error` to categorize
///
/// # Returns
///
/// The appropriate `InputErrorKind` for the error.
pub fn categorize_json_error(error: &serde_json::Error) -> InputErrorKind {
    match error.classify() {
        Category::Data => {
            if error.to_string().starts_with("missing field") {
                InputErrorKind::MissingField
            } else {
                InputErrorKind::WrongType
            }
        }
        Category::Eof => InputErrorKind::UnexpectedEof,
        // Io only occurs when reading from a stream; manifests are read up front
        Category::Syntax | Category::Io => InputErrorKind::Syntax,
    }
}

impl From<serde_json::Error> for TouchCheckError {
    fn from(error: serde_json::Error) -> Self {
        TouchCheckError::invalid_input(categorize_json_error(&error), error.to_string())
    }
}
