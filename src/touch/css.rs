//! CSS evidence: reads the `pointer-support` diagnostic of a linted stylesheet.

use crate::config::POINTER_SUPPORT_RULE_ID;
use crate::models::CssAsset;

/// Returns true if the stylesheet declared a legacy touch property.
///
/// The rule reports when nothing was found, so this is true exactly when the
/// report carries no `pointer-support` message.
pub fn check_css(asset: &CssAsset) -> bool {
    asset
        .report
        .messages_for_rule(POINTER_SUPPORT_RULE_ID)
        .next()
        .is_none()
}
