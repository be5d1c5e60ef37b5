//! The `pointer-support` lint rule.
//!
//! Polarity is inverted: the rule reports a message when a stylesheet has no
//! legacy touch property, so the *absence* of its message is the positive
//! signal. `check_css` is the only place that reads it.

use std::sync::Arc;

use super::patterns::is_legacy_css_property;
use crate::config::{
    NO_CSS_TOUCH_MESSAGE, POINTER_SUPPORT_RULE_BROWSERS, POINTER_SUPPORT_RULE_DESC,
    POINTER_SUPPORT_RULE_ID, POINTER_SUPPORT_RULE_NAME,
};
use crate::lint::{
    global_registry, Registration, Reporter, Rule, RuleListener, RuleMeta, RuleRegistry,
    StylesheetEvent,
};

pub(crate) static POINTER_SUPPORT_META: RuleMeta = RuleMeta {
    id: POINTER_SUPPORT_RULE_ID,
    name: POINTER_SUPPORT_RULE_NAME,
    desc: POINTER_SUPPORT_RULE_DESC,
    browsers: POINTER_SUPPORT_RULE_BROWSERS,
};

/// Lint rule flagging stylesheets that declare none of the legacy touch properties.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerSupportRule;

#[derive(Debug, Default)]
struct PointerSupportListener {
    found: bool,
}

impl Rule for PointerSupportRule {
    fn meta(&self) -> &RuleMeta {
        &POINTER_SUPPORT_META
    }

    fn init(&self) -> Box<dyn RuleListener> {
        Box::new(PointerSupportListener::default())
    }
}

impl RuleListener for PointerSupportListener {
    fn on_event(&mut self, event: &StylesheetEvent, reporter: &mut Reporter) {
        match event {
            StylesheetEvent::StartStylesheet => self.found = false,
            StylesheetEvent::Property { name, line, col, .. } => {
                if !self.found && is_legacy_css_property(name) {
                    log::trace!("Legacy touch property {} at {}:{}", name, line, col);
                    self.found = true;
                }
            }
            StylesheetEvent::EndStylesheet => {
                if !self.found {
                    reporter.report(NO_CSS_TOUCH_MESSAGE, 0, 0, &POINTER_SUPPORT_META, "");
                }
            }
        }
    }
}

/// Registers [`PointerSupportRule`] into `registry`.
///
/// Idempotent: a second call returns `Registration::AlreadyPresent`.
pub fn register_pointer_support_rule(registry: &RuleRegistry) -> Registration {
    registry.add_rule(Arc::new(PointerSupportRule))
}

/// Registers [`PointerSupportRule`] into the process-wide registry.
pub fn init() -> Registration {
    register_pointer_support_rule(global_registry())
}
