//! Application configuration and constants.
//!
//! This module provides:
//! - Check and lint rule constants (names, identifiers, diagnostic text)
//! - Logging option types and the library `Config`

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
