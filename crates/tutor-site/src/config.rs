//! Site configuration

use std::path::PathBuf;

/// Runtime settings read from the environment
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// JSON array of tutor attribute objects; the built-in featured
    /// listing is used when unset
    pub listing_path: Option<PathBuf>,
    /// Directory served under `/assets`
    pub assets_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            listing_path: std::env::var("TUTOR_LISTING")
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            assets_dir: std::env::var("ASSETS_DIR").unwrap_or_else(|_| "assets".to_string()),
        }
    }
}
