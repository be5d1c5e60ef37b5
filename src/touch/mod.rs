//! Pointer Events support check ("touch").
//!
//! Looks for evidence that a website targets the W3C Pointer Events API by
//! finding legacy vendor-prefixed touch mechanisms in its assets:
//! 1. Stylesheets, via the `pointer-support` lint rule's report
//! 2. Scripts, via a fixed list of legacy API patterns (only if step 1 found nothing)
//!
//! Only assets present in the fetched documents are seen; anything added to
//! the page dynamically is not analyzed.
//!
//! The CSS signal is weak: any legacy scroll-snap or content-zoom property
//! counts, whether or not the site actually handles pointer input.

mod css;
mod js;
mod patterns;
mod rule;

pub use css::check_css;
pub use js::check_js;
pub use patterns::{is_legacy_css_property, LEGACY_CSS_PROPERTIES, LEGACY_JS_PATTERNS};
pub use rule::{init, register_pointer_support_rule, PointerSupportRule};

use serde::{Deserialize, Serialize};

use crate::config::TOUCH_TEST_NAME;
use crate::models::Website;

/// Outcome of one check run, in the shape the audit harness aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    /// Always `"touch"`; serialized as `testName`
    pub test_name: String,
    /// Whether any asset showed evidence
    pub passed: bool,
}

/// Per-asset evidence in evaluation order: every stylesheet, then every
/// script only when no stylesheet showed evidence.
pub(crate) fn collect_evidence(website: &Website) -> Vec<bool> {
    let mut results: Vec<bool> = website.css.iter().map(check_css).collect();

    if results.iter().any(|&found| found) {
        log::debug!("Legacy touch CSS found; skipping {} script(s)", website.js.len());
        return results;
    }

    results.extend(website.js.iter().map(check_js));
    results
}

/// Runs the touch check against a website's assets.
///
/// Never fails: a site with no evidence yields `passed = false`. The work is
/// synchronous, so the returned future is ready on first poll; it is async to
/// match the other checks the harness drives.
pub async fn check(website: &Website) -> CheckResult {
    let evidence = collect_evidence(website);
    let passed = evidence.iter().any(|&found| found);

    log::debug!(
        "touch check for {}: {} of {} asset(s) evaluated, passed={}",
        website.url.as_deref().unwrap_or("<unnamed>"),
        evidence.len(),
        website.css.len() + website.js.len(),
        passed
    );

    CheckResult {
        test_name: TOUCH_TEST_NAME.to_string(),
        passed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::RuleRegistry;
    use crate::models::{CssAsset, JsAsset};
    use futures::FutureExt;
    use proptest::prelude::*;

    fn linted(css: &str) -> CssAsset {
        let registry = RuleRegistry::new();
        register_pointer_support_rule(&registry);
        CssAsset::new(registry.lint_stylesheet(css))
    }

    fn with_legacy_css() -> CssAsset {
        linted(".scroller { -ms-scroll-snap-type: mandatory; }")
    }

    fn without_legacy_css() -> CssAsset {
        linted("body { margin: 0; touch-action: manipulation; }")
    }

    #[tokio::test]
    async fn test_legacy_css_passes_without_js() {
        let website = Website::new(vec![with_legacy_css()], vec![]);
        assert_eq!(
            check(&website).await,
            CheckResult {
                test_name: "touch".to_string(),
                passed: true
            }
        );
    }

    #[tokio::test]
    async fn test_js_fallback_finds_gesture() {
        let website = Website::new(
            vec![without_legacy_css()],
            vec![JsAsset::new("var gesture = new MSGesture();")],
        );
        let result = check(&website).await;
        assert_eq!(result.test_name, "touch");
        assert!(result.passed);
    }

    #[tokio::test]
    async fn test_empty_website_fails() {
        let result = check(&Website::default()).await;
        assert_eq!(result.test_name, "touch");
        assert!(!result.passed);
    }

    #[tokio::test]
    async fn test_no_evidence_anywhere_fails() {
        let website = Website::new(
            vec![without_legacy_css(), without_legacy_css()],
            vec![JsAsset::new("document.addEventListener('pointerdown', f);")],
        );
        assert!(!check(&website).await.passed);
    }

    #[test]
    fn test_css_evidence_skips_scripts() {
        let website = Website::new(
            vec![without_legacy_css(), with_legacy_css()],
            vec![JsAsset::new("MSPointerDown"), JsAsset::new("")],
        );
        assert_eq!(collect_evidence(&website), vec![false, true]);
    }

    #[test]
    fn test_scripts_appended_after_css() {
        let website = Website::new(
            vec![without_legacy_css()],
            vec![JsAsset::new("plain()"), JsAsset::new("navigator.msMaxTouchPoints")],
        );
        assert_eq!(collect_evidence(&website), vec![false, false, true]);
    }

    #[test]
    fn test_future_is_ready_immediately() {
        let website = Website::new(vec![with_legacy_css()], vec![]);
        let result = check(&website).now_or_never();
        assert_eq!(result.map(|r| r.passed), Some(true));
    }

    #[test]
    fn test_result_serializes_with_test_name_key() {
        let result = CheckResult {
            test_name: "touch".to_string(),
            passed: false,
        };
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"testName":"touch","passed":false}"#
        );
    }

    proptest! {
        #[test]
        fn test_asset_order_does_not_change_outcome(
            css_flags in prop::collection::vec(any::<bool>(), 0..6),
            js_flags in prop::collection::vec(any::<bool>(), 0..6),
            rotate_css in 0usize..6,
            rotate_js in 0usize..6,
        ) {
            let css: Vec<CssAsset> = css_flags
                .iter()
                .map(|&legacy| if legacy { with_legacy_css() } else { without_legacy_css() })
                .collect();
            let js: Vec<JsAsset> = js_flags
                .iter()
                .map(|&legacy| JsAsset::new(if legacy { "MSPointerMove" } else { "noop()" }))
                .collect();

            let mut shuffled_css = css.clone();
            let mut shuffled_js = js.clone();
            if !shuffled_css.is_empty() {
                let n = rotate_css % shuffled_css.len();
                shuffled_css.rotate_left(n);
                shuffled_css.reverse();
            }
            if !shuffled_js.is_empty() {
                let n = rotate_js % shuffled_js.len();
                shuffled_js.rotate_left(n);
            }

            let original = check(&Website::new(css, js)).now_or_never().unwrap();
            let shuffled = check(&Website::new(shuffled_css, shuffled_js)).now_or_never().unwrap();

            prop_assert_eq!(original.passed, shuffled.passed);
            prop_assert_eq!(
                original.passed,
                css_flags.iter().any(|&f| f) || js_flags.iter().any(|&f| f)
            );
        }
    }
}
