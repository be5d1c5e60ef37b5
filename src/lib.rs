//! touch_check library: Pointer Events support check for site audits
//!
//! This library decides whether a website's stylesheets and scripts show
//! evidence of pointer-aware input handling, by looking for the legacy
//! vendor-prefixed touch/gesture mechanisms that preceded the W3C Pointer
//! Events API. It is one check in a larger audit suite; fetching assets and
//! aggregating results across checks belong to the harness.
//!
//! # Example
//!
//! ```no_run
//! use touch_check::lint::RuleRegistry;
//! use touch_check::models::{CssAsset, JsAsset, Website};
//! use touch_check::touch::{check, register_pointer_support_rule};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let registry = RuleRegistry::new();
//! register_pointer_support_rule(&registry);
//!
//! let report = registry.lint_stylesheet("body { margin: 0 }");
//! let website = Website::new(
//!     vec![CssAsset::new(report)],
//!     vec![JsAsset::new("el.addEventListener('MSPointerDown', f)")],
//! );
//!
//! let result = check(&website).await;
//! assert!(result.passed);
//! # }
//! ```
//!
//! # Requirements
//!
//! `check` is async for uniformity with sibling checks but does no I/O; any
//! executor can drive it. `run_check` reads local files and needs a Tokio
//! runtime.

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod lint;
pub mod models;
pub mod touch;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{InputErrorKind, TouchCheckError};
pub use models::{CssAsset, JsAsset, Website};
pub use run::run_check;
pub use touch::{check, check_css, check_js, CheckResult};

// Internal run module (loads assets and runs the check)
mod run {
    use log::info;

    use crate::app::load_website;
    use crate::config::Config;
    use crate::error_handling::TouchCheckError;
    use crate::initialization::init_lint_rules;
    use crate::lint::global_registry;
    use crate::touch::{check, CheckResult};

    /// Runs the touch check over the assets described by `config`.
    ///
    /// Registers the `pointer-support` rule into the process-wide registry
    /// (a no-op if already registered), loads the website, and checks it.
    ///
    /// # Errors
    ///
    /// Returns an error if an asset cannot be read or the manifest is invalid.
    /// A website with no evidence is not an error; it yields `passed = false`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use touch_check::{run_check, Config};
    /// use std::path::PathBuf;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = Config {
    ///     css: vec![PathBuf::from("site.css")],
    ///     ..Default::default()
    /// };
    /// let result = run_check(&config).await?;
    /// println!("{}: {}", result.test_name, result.passed);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run_check(config: &Config) -> Result<CheckResult, TouchCheckError> {
        init_lint_rules();

        let website = load_website(config, global_registry()).await?;
        info!(
            "Checking {} stylesheet(s) and {} script(s)",
            website.css.len(),
            website.js.len()
        );

        Ok(check(&website).await)
    }
}
