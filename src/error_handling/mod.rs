//! Error handling.
//!
//! This module provides:
//! - Error type definitions (`InitializationError`, `TouchCheckError`)
//! - Classification of invalid input (`InputErrorKind`)
//! - Categorization of deserializer failures
//!
//! The touch check never reports an error of its own: when no evidence is
//! found it reports `passed = false`. Errors only arise at the input boundary.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_json_error;
pub use types::{InitializationError, InputErrorKind, TouchCheckError};
