//! Application initialization.
//!
//! This module provides the explicit, once-per-process setup steps:
//! - Logger installation
//! - Registration of the touch check's lint rule into the shared registry

mod logger;

pub use logger::init_logger_with;

use crate::lint::Registration;
use crate::touch;

/// Registers the `pointer-support` lint rule into the process-wide registry.
///
/// Safe to call more than once: later calls leave the registry unchanged and
/// return `Registration::AlreadyPresent`.
pub fn init_lint_rules() -> Registration {
    touch::init()
}
