//! Theme configuration.
//!
//! Loaded from a YAML file; every field has a default so an absent file or a
//! partial file is valid.
//!
//! ```yaml
//! feed:
//!   host: http://events.ucf.edu
//!   timeout_secs: 10
//!   calendar_id: "41"
//!   timezone: America/New_York
//! default_url_scheme: "http://"
//! template_dir: /srv/theme/templates
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::escape::DEFAULT_SCHEME;

/// Settings for the events feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Base URL the calendar query is appended to.
    pub host: String,
    /// Base URL of the "More Events" footer link.
    pub more_events_host: String,
    pub timeout_secs: u64,
    /// Calendar shown when the shortcode gives no `id`.
    pub calendar_id: String,
    pub limit: usize,
    /// IANA zone event start times are read in.
    pub timezone: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            host: "http://events.ucf.edu".to_string(),
            more_events_host: "//events.ucf.edu".to_string(),
            timeout_secs: 10,
            calendar_id: "41".to_string(),
            limit: 6,
            timezone: "America/New_York".to_string(),
        }
    }
}

impl FeedConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Root of the theme configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub feed: FeedConfig,
    /// Prefix for URLs without a scheme.
    pub default_url_scheme: String,
    /// Campus map base URL used by the contact block.
    pub map_host: String,
    /// Directory of `*.tera` files overriding the embedded widget templates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<PathBuf>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            feed: FeedConfig::default(),
            default_url_scheme: DEFAULT_SCHEME.to_string(),
            map_host: "http://map.ucf.edu".to_string(),
            template_dir: None,
        }
    }
}

impl ThemeConfig {
    /// Load from `path`; a missing file yields the defaults.
    pub fn load_at(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ThemeConfig =
            serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.feed.timeout_secs == 0 {
            return Err(ConfigError::Invalid("feed.timeout_secs must be at least 1".into()));
        }
        if self.feed.host.trim().is_empty() {
            return Err(ConfigError::Invalid("feed.host must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().expect("tempdir");
        let config = ThemeConfig::load_at(&dir.path().join("theme.yaml")).expect("load");
        assert_eq!(config, ThemeConfig::default());
        assert_eq!(config.feed.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("theme.yaml");
        std::fs::write(&path, "feed:\n  calendar_id: \"7\"\n").expect("write");
        let config = ThemeConfig::load_at(&path).expect("load");
        assert_eq!(config.feed.calendar_id, "7");
        assert_eq!(config.feed.limit, 6);
        assert_eq!(config.default_url_scheme, "http://");
    }

    #[test]
    fn zero_timeout_is_invalid() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("theme.yaml");
        std::fs::write(&path, "feed:\n  timeout_secs: 0\n").expect("write");
        let err = ThemeConfig::load_at(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "got: {err}");
    }
}
