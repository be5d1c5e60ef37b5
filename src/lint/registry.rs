//! Rule registry and lint driver.

use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use super::{stylesheet_events, Reporter, Rule, StylesheetEvent};
use crate::models::LintReport;

static GLOBAL_REGISTRY: LazyLock<RuleRegistry> = LazyLock::new(RuleRegistry::new);

/// Returns the process-wide rule registry shared by all checks.
pub fn global_registry() -> &'static RuleRegistry {
    &GLOBAL_REGISTRY
}

/// Outcome of [`RuleRegistry::add_rule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// The rule was added
    Added,
    /// A rule with the same id was already registered; the registry is unchanged.
    AlreadyPresent,
}

/// Ordered set of lint rules, keyed by rule id.
pub struct RuleRegistry {
    rules: RwLock<Vec<Arc<dyn Rule>>>,
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.rule_ids())
            .finish()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            rules: RwLock::new(Vec::new()),
        }
    }

    /// Registers a rule unless one with the same id is already present.
    pub fn add_rule(&self, rule: Arc<dyn Rule>) -> Registration {
        let mut rules = self.rules.write().unwrap_or_else(PoisonError::into_inner);
        if rules.iter().any(|existing| existing.id() == rule.id()) {
            log::debug!("Lint rule '{}' already registered", rule.id());
            return Registration::AlreadyPresent;
        }
        log::debug!("Registering lint rule '{}'", rule.id());
        rules.push(rule);
        Registration::Added
    }

    /// Returns true if a rule with this id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.snapshot().iter().any(|rule| rule.id() == id)
    }

    /// Ids of the registered rules, in registration order.
    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.snapshot().iter().map(|rule| rule.id()).collect()
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    /// Returns true if no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Runs every registered rule over one stylesheet's event stream.
    ///
    /// Each rule gets a fresh listener, so no state leaks between stylesheets.
    pub fn lint_events<I>(&self, events: I) -> LintReport
    where
        I: IntoIterator<Item = StylesheetEvent>,
    {
        let mut listeners: Vec<_> = self.snapshot().iter().map(|rule| rule.init()).collect();
        let mut reporter = Reporter::new();

        for event in events {
            for listener in listeners.iter_mut() {
                listener.on_event(&event, &mut reporter);
            }
        }

        reporter.into_report()
    }

    /// Scans raw stylesheet text for declarations and lints it.
    pub fn lint_stylesheet(&self, css: &str) -> LintReport {
        self.lint_events(stylesheet_events(css))
    }

    // Clone the rule handles so listeners run without holding the lock
    fn snapshot(&self) -> Vec<Arc<dyn Rule>> {
        self.rules
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
