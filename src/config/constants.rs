//! Configuration constants.
//!
//! This module defines the identifiers and fixed strings shared by the touch
//! check, its lint rule, and the CLI.

/// Name reported in every `CheckResult` produced by the touch check.
pub const TOUCH_TEST_NAME: &str = "touch";

/// Identifier of the lint rule that flags stylesheets without legacy touch CSS.
pub const POINTER_SUPPORT_RULE_ID: &str = "pointer-support";
/// Human-readable name of the `pointer-support` rule.
pub const POINTER_SUPPORT_RULE_NAME: &str = "w3c pointer support";
/// Description of the `pointer-support` rule.
pub const POINTER_SUPPORT_RULE_DESC: &str = "checks if a website supports the W3C Pointers specs";
/// Browsers the `pointer-support` rule applies to.
pub const POINTER_SUPPORT_RULE_BROWSERS: &str = "All";

/// Diagnostic text emitted at the end of a stylesheet with no legacy touch property.
///
/// The message is always reported at line 0, column 0 with empty evidence.
pub const NO_CSS_TOUCH_MESSAGE: &str = "No CSS Touch found";

/// Module name used for per-module log filtering.
pub const CRATE_LOG_TARGET: &str = "touch_check";
