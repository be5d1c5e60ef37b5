//! Main application modules.
//!
//! This module provides the asset loading used by the CLI and `run_check`:
//! turning a manifest or a list of local files into a `Website`.

pub mod assets;

// Re-export public API
pub use assets::load_website;
