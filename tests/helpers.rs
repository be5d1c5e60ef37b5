// Shared test helpers for building linted stylesheets and websites.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use touch_check::initialization::init_lint_rules;
use touch_check::lint::global_registry;
use touch_check::{CssAsset, JsAsset, Website};

/// Lints stylesheet text with the process-wide registry.
/// Registers the `pointer-support` rule first; repeated calls are harmless.
#[allow(dead_code)] // Used by other test files
pub fn linted_css(css: &str) -> CssAsset {
    init_lint_rules();
    CssAsset::new(global_registry().lint_stylesheet(css))
}

/// A stylesheet declaring a legacy touch property.
#[allow(dead_code)]
pub fn css_with_legacy_property() -> CssAsset {
    linted_css(".viewer {\n  -ms-content-zooming: zoom;\n  -ms-content-zoom-limit-max: 400%;\n}")
}

/// A stylesheet using only standard properties.
#[allow(dead_code)]
pub fn css_without_legacy_property() -> CssAsset {
    linted_css("html { touch-action: manipulation; }\n.viewer { overflow: auto; }")
}

#[allow(dead_code)]
pub fn website(css: Vec<CssAsset>, js: Vec<&str>) -> Website {
    Website::new(css, js.into_iter().map(JsAsset::new).collect())
}
