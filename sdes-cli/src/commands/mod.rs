//! Subcommands and the loaders they share.

pub mod feed;
pub mod render;
pub mod shortcodes;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use sdes_core::{InMemoryContent, ThemeConfig};

/// `<config dir>/sdes/theme.yaml`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sdes").join("theme.yaml"))
}

/// Load the theme config from `path`, or from the default location.
/// A missing file yields the defaults.
pub fn load_config(path: Option<&Path>) -> Result<ThemeConfig> {
    let Some(path) = path.map(Path::to_path_buf).or_else(default_config_path) else {
        return Ok(ThemeConfig::default());
    };
    ThemeConfig::load_at(&path)
        .with_context(|| format!("failed to load theme config from {}", path.display()))
}

/// Load a content fixture; without one the site has no menus or posts.
pub fn load_content(path: Option<&Path>) -> Result<InMemoryContent> {
    match path {
        Some(path) => InMemoryContent::load_at(path)
            .with_context(|| format!("failed to load content fixture {}", path.display())),
        None => Ok(InMemoryContent::new()),
    }
}
