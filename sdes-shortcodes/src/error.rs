//! Error types for sdes-shortcodes.

use std::path::PathBuf;

use thiserror::Error;

use sdes_core::{HostError, InvalidAttr, RegistryError};
use sdes_feed::FeedError;

/// Errors from the template engine and renderer setup.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// JSON serialization error (building tera context).
    #[error("context serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem error while loading override templates.
    #[error("template io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("widget registration failed: {0}")]
    Registry(#[from] RegistryError),
}

/// Who may see the message of a failed widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Detail for editors only; everyone else gets an HTML comment.
    Gated,
    /// Shown to every viewer.
    Always,
}

/// Why a single widget could not produce its markup.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// Something the invocation names does not exist.
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Validation(#[from] InvalidAttr),

    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Host(#[from] HostError),

    /// No published contact matched. `any_contacts` is false when the site
    /// has no contacts at all.
    #[error("no matching contact block (contacts exist: {any_contacts})")]
    ContactMissing { any_contacts: bool },

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl WidgetError {
    pub fn visibility(&self) -> Visibility {
        match self {
            WidgetError::Feed(FeedError::Parse { .. }) | WidgetError::ContactMissing { .. } => {
                Visibility::Always
            }
            _ => Visibility::Gated,
        }
    }
}
