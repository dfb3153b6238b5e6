//! Error types for sdes-feed.

use thiserror::Error;

/// Failures fetching or reading the events feed.
///
/// Transport and parse failures are kept apart: the events widget shows
/// parser diagnostics to every viewer but hides transport detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// The request failed, timed out, or returned a non-success status.
    #[error("feed transport error: {0}")]
    Transport(String),

    /// The response was not a readable feed. One message per diagnostic.
    #[error("feed could not be parsed: {}", .messages.join("; "))]
    Parse { messages: Vec<String> },
}

impl FeedError {
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        FeedError::Parse {
            messages: vec![message.into()],
        }
    }
}
