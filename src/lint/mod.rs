//! Stylesheet lint engine seam.
//!
//! Rules plug into the engine through the [`Rule`] trait and observe a stream
//! of [`StylesheetEvent`]s, either supplied by the caller or produced from raw
//! text by [`stylesheet_events`]. Any diagnostics they emit go through a
//! [`Reporter`] into a [`LintReport`].
//!
//! Rules are registered explicitly into a [`RuleRegistry`]. A process-wide
//! registry is available through [`global_registry`], but nothing is
//! registered into it until the caller asks.

mod declarations;
mod registry;

pub use declarations::stylesheet_events;
pub use registry::{global_registry, Registration, RuleRegistry};

use crate::models::{LintMessage, LintReport, RuleRef};

/// Event emitted while walking a stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StylesheetEvent {
    /// Emitted once before any declaration
    StartStylesheet,
    /// A `name: value` declaration. Positions are 1-based.
    Property {
        /// Property name as written
        name: String,
        /// Value text, trimmed
        value: String,
        /// Line of the property name
        line: usize,
        /// Column of the property name
        col: usize,
    },
    /// Emitted once after the last declaration
    EndStylesheet,
}

/// Static description of a lint rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMeta {
    /// Unique rule identifier carried by every message the rule reports
    pub id: &'static str,
    /// Short human-readable name
    pub name: &'static str,
    /// What the rule checks
    pub desc: &'static str,
    /// Browsers the rule is relevant to
    pub browsers: &'static str,
}

/// A pluggable lint rule.
///
/// `init` is called once per stylesheet and returns the listener that holds
/// that stylesheet's state, so rules themselves stay immutable and shareable.
pub trait Rule: Send + Sync {
    /// Static description of the rule.
    fn meta(&self) -> &RuleMeta;

    /// Rule identifier; registries key rules by it.
    fn id(&self) -> &'static str {
        self.meta().id
    }

    /// Creates the listener for one stylesheet.
    fn init(&self) -> Box<dyn RuleListener>;
}

/// Per-stylesheet state of a rule.
pub trait RuleListener {
    /// Observes one event, reporting diagnostics through `reporter`.
    fn on_event(&mut self, event: &StylesheetEvent, reporter: &mut Reporter);
}

/// Collects the messages emitted during one lint pass.
#[derive(Debug, Default)]
pub struct Reporter {
    messages: Vec<LintMessage>,
}

impl Reporter {
    /// Creates an empty reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one message attributed to `rule`.
    pub fn report(&mut self, message: &str, line: usize, col: usize, rule: &RuleMeta, evidence: &str) {
        log::trace!("{} reported at {}:{}: {}", rule.id, line, col, message);
        self.messages.push(LintMessage {
            rule: RuleRef {
                id: rule.id.to_string(),
            },
            message: message.to_string(),
            line,
            col,
            evidence: evidence.to_string(),
        });
    }

    /// Finishes the pass and returns the collected messages.
    pub fn into_report(self) -> LintReport {
        LintReport {
            messages: self.messages,
        }
    }
}
