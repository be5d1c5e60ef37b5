//! Local asset loading.
//!
//! Builds a `Website` either from a JSON manifest already in the harness's
//! shape, or from local stylesheet and script files. Stylesheets read from disk
//! are linted with the given registry so their reports carry the same
//! diagnostics a harness-supplied report would.

use std::path::Path;

use crate::config::Config;
use crate::error_handling::TouchCheckError;
use crate::lint::RuleRegistry;
use crate::models::{CssAsset, JsAsset, Website};

/// Reads a local file as UTF-8 text.
pub async fn read_asset(path: &Path) -> Result<String, TouchCheckError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| TouchCheckError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Loads the website described by `config`.
///
/// A manifest (`config.website`) takes precedence over the `css`/`js` lists.
///
/// # Errors
///
/// Returns `TouchCheckError::Io` if a file cannot be read and
/// `TouchCheckError::InvalidInput` if the manifest violates the input contract.
pub async fn load_website(
    config: &Config,
    registry: &RuleRegistry,
) -> Result<Website, TouchCheckError> {
    if let Some(manifest) = &config.website {
        if !config.css.is_empty() || !config.js.is_empty() {
            log::warn!(
                "Manifest {} given; ignoring {} css and {} js file argument(s)",
                manifest.display(),
                config.css.len(),
                config.js.len()
            );
        }
        let json = read_asset(manifest).await?;
        return Website::from_json(&json);
    }

    let mut css = Vec::with_capacity(config.css.len());
    for path in &config.css {
        let text = read_asset(path).await?;
        let report = registry.lint_stylesheet(&text);
        log::debug!(
            "Linted {}: {} message(s)",
            path.display(),
            report.messages.len()
        );
        css.push(CssAsset {
            url: Some(display_path(path)),
            report,
        });
    }

    let mut js = Vec::with_capacity(config.js.len());
    for path in &config.js {
        js.push(JsAsset {
            url: Some(display_path(path)),
            content: read_asset(path).await?,
        });
    }

    Ok(Website { url: None, css, js })
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::InputErrorKind;
    use crate::touch::register_pointer_support_rule;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn temp_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write temp file");
        file
    }

    fn registry() -> RuleRegistry {
        let registry = RuleRegistry::new();
        register_pointer_support_rule(&registry);
        registry
    }

    #[tokio::test]
    async fn test_load_from_files_lints_css() {
        let css = temp_file("a { -ms-touch-action: none; }");
        let plain_css = temp_file("a { color: red; }");
        let js = temp_file("navigator.msPointerEnabled");
        let config = Config {
            css: vec![css.path().to_path_buf(), plain_css.path().to_path_buf()],
            js: vec![js.path().to_path_buf()],
            ..Default::default()
        };

        let website = load_website(&config, &registry()).await.unwrap();
        assert_eq!(website.css.len(), 2);
        assert!(website.css[0].report.messages.is_empty());
        assert_eq!(website.css[1].report.messages.len(), 1);
        assert_eq!(website.js[0].content, "navigator.msPointerEnabled");
        assert!(website.js[0].url.is_some());
    }

    #[tokio::test]
    async fn test_manifest_takes_precedence() {
        let manifest = temp_file(r#"{"css": [], "js": [{"content": "MSPointerDown"}]}"#);
        let config = Config {
            website: Some(manifest.path().to_path_buf()),
            css: vec![PathBuf::from("does-not-exist.css")],
            ..Default::default()
        };

        let website = load_website(&config, &registry()).await.unwrap();
        assert!(website.css.is_empty());
        assert_eq!(website.js.len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_manifest_is_rejected() {
        let manifest = temp_file(r#"{"css": [{}], "js": []}"#);
        let config = Config {
            website: Some(manifest.path().to_path_buf()),
            ..Default::default()
        };

        let err = load_website(&config, &registry()).await.unwrap_err();
        assert_eq!(err.input_kind(), Some(InputErrorKind::MissingField));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let config = Config {
            js: vec![PathBuf::from("/nonexistent/touch_check/app.js")],
            ..Default::default()
        };

        let err = load_website(&config, &registry()).await.unwrap_err();
        assert!(matches!(err, TouchCheckError::Io { .. }));
    }
}
