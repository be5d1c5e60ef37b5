//! Website and asset records consumed by the touch check.
//!
//! These mirror the records the audit harness hands to every check. Required
//! fields are enforced at deserialization time so a missing `content` or
//! `report` is rejected as invalid input instead of reading as "not found".

use serde::{Deserialize, Serialize};

use crate::error_handling::TouchCheckError;

/// Reference to the lint rule that produced a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleRef {
    /// Rule identifier, e.g. `pointer-support`
    pub id: String,
}

/// One diagnostic produced while linting a stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintMessage {
    /// Rule that produced the message (required)
    pub rule: RuleRef,
    /// Diagnostic text
    #[serde(default)]
    pub message: String,
    /// Line of the offending source; 0 for stylesheet-wide messages
    #[serde(default)]
    pub line: usize,
    /// Column of the offending source; 0 for stylesheet-wide messages
    #[serde(default)]
    pub col: usize,
    /// Source excerpt, if any
    #[serde(default)]
    pub evidence: String,
}

impl LintMessage {
    /// Identifier of the rule that produced this message.
    pub fn rule_id(&self) -> &str {
        &self.rule.id
    }
}

/// All diagnostics produced for one stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintReport {
    /// Messages in the order rules reported them
    pub messages: Vec<LintMessage>,
}

impl LintReport {
    /// Messages produced by the rule with the given id.
    pub fn messages_for_rule<'a>(&'a self, rule_id: &'a str) -> impl Iterator<Item = &'a LintMessage> {
        self.messages.iter().filter(move |m| m.rule_id() == rule_id)
    }
}

/// A stylesheet that has already been through the linter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssAsset {
    /// Where the stylesheet came from, for logging only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Lint report for the stylesheet (required)
    pub report: LintReport,
}

impl CssAsset {
    /// Wraps a lint report in an asset with no source URL.
    pub fn new(report: LintReport) -> Self {
        Self { url: None, report }
    }
}

/// Raw script source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsAsset {
    /// Where the script came from, for logging only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Script source text (required)
    pub content: String,
}

impl JsAsset {
    /// Wraps script text in an asset with no source URL.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            url: None,
            content: content.into(),
        }
    }
}

/// The assets of one website, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Website {
    /// Site address, for logging only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Linted stylesheets (required, may be empty)
    pub css: Vec<CssAsset>,
    /// Scripts (required, may be empty)
    pub js: Vec<JsAsset>,
}

impl Website {
    /// Builds an unnamed website from its assets.
    pub fn new(css: Vec<CssAsset>, js: Vec<JsAsset>) -> Self {
        Self { url: None, css, js }
    }

    /// Parses a website from the harness's JSON shape.
    ///
    /// # Errors
    ///
    /// Returns `TouchCheckError::InvalidInput` when the document is malformed or
    /// a required field (`css`, `js`, `report`, `messages`, `rule.id`, `content`)
    /// is missing or has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, TouchCheckError> {
        let website: Website = serde_json::from_str(json)?;
        log::debug!(
            "Parsed website {}: {} stylesheet(s), {} script(s)",
            website.url.as_deref().unwrap_or("<unnamed>"),
            website.css.len(),
            website.js.len()
        );
        Ok(website)
    }
}
