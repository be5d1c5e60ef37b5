//! JS evidence: searches raw script text for legacy pointer/gesture APIs.

use super::patterns::LEGACY_JS_PATTERNS;
use crate::models::JsAsset;

/// Returns true on the first legacy pattern found in the script.
pub fn check_js(asset: &JsAsset) -> bool {
    match LEGACY_JS_PATTERNS
        .iter()
        .find(|pattern| pattern.is_match(&asset.content))
    {
        Some(pattern) => {
            log::debug!(
                "Legacy pointer API /{}/ found in {}",
                pattern.as_str(),
                asset.url.as_deref().unwrap_or("<inline script>")
            );
            true
        }
        None => false,
    }
}
