//! Known legacy touch/pointer tokens.
//!
//! Both tables are static and read-only. The CSS table is matched by exact,
//! case-sensitive property name; the JS table is a list of regexes searched in
//! order against raw script text.

use regex::Regex;
use std::sync::LazyLock;

/// Vendor-prefixed CSS properties tied to pre-standard touch, scroll-snap and
/// content-zoom behavior.
pub const LEGACY_CSS_PROPERTIES: [&str; 15] = [
    "-ms-touch-action",
    "-ms-scroll-snap-points-x",
    "-ms-scroll-snap-points-y",
    "-ms-scroll-snap-type",
    "-ms-scroll-snap-x",
    "-ms-scroll-snap-y",
    "-ms-scroll-chaining",
    "-ms-content-zooming",
    "-ms-content-zoom-limit",
    "-ms-content-zoom-limit-max",
    "-ms-content-zoom-limit-min",
    "-ms-content-zoom-chaining",
    "-ms-content-zoom-snap-points",
    "-ms-content-zoom-snap-type",
    "-ms-content-zoom-snap",
];

// Legacy pointer/gesture/zoom JS APIs, in evaluation order.
// The dots in the navigator patterns are regex wildcards.
const LEGACY_JS_PATTERN_SOURCES: [&str; 5] = [
    r"MS[Gg]esture",
    r"MSPointer",
    r"msContentZoomFactor",
    r"navigator.msPointerEnabled",
    r"navigator.msMaxTouchPoints",
];

/// Compiles a built-in pattern; a failure here is a bug in the pattern table.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

/// Compiled legacy JS patterns, in the same order as their sources.
pub static LEGACY_JS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    LEGACY_JS_PATTERN_SOURCES
        .iter()
        .map(|pattern| compile_regex_unsafe(pattern, "LEGACY_JS_PATTERNS"))
        .collect()
});

/// Returns true if `name` is exactly one of the legacy CSS properties.
pub fn is_legacy_css_property(name: &str) -> bool {
    LEGACY_CSS_PROPERTIES.contains(&name)
}
