//! `sdes render`: expand the shortcodes in a content file.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Args;

use sdes_feed::{FeedError, FeedSource, HttpFeedSource};
use sdes_shortcodes::{PageRequest, ShortcodeRenderer};

use super::{load_config, load_content};

/// Arguments for `sdes render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Page content containing shortcodes.
    pub file: PathBuf,

    /// YAML fixture of menus and contact posts.
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Theme config (defaults to the user config dir).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Render as a viewer who can edit posts (shows error detail).
    #[arg(long)]
    pub can_edit: bool,

    /// Whole-page time budget in milliseconds; caps feed requests.
    #[arg(long, value_name = "MS")]
    pub budget_ms: Option<u64>,

    /// Never contact the events feed; event widgets fail as if unreachable.
    #[arg(long)]
    pub offline: bool,
}

fn offline_feed(_: &str, _: Duration) -> Result<String, FeedError> {
    Err(FeedError::Transport("offline mode".into()))
}

impl RenderArgs {
    pub fn run(self) -> Result<()> {
        let source = std::fs::read_to_string(&self.file)
            .with_context(|| format!("failed to read {}", self.file.display()))?;
        let config = load_config(self.config.as_deref())?;
        let content = load_content(self.content.as_deref())?;
        let renderer = ShortcodeRenderer::new(config).context("failed to set up shortcodes")?;

        let feeds: &dyn FeedSource = if self.offline {
            &offline_feed
        } else {
            &HttpFeedSource
        };
        let page = PageRequest {
            content: &content,
            feeds,
            viewer: &self.can_edit,
            deadline: self
                .budget_ms
                .map(|ms| Instant::now() + Duration::from_millis(ms)),
        };

        tracing::debug!(file = %self.file.display(), bytes = source.len(), "rendering content");
        print!("{}", renderer.do_shortcode(&source, &page));
        Ok(())
    }
}
