//! Error types for sdes-core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or querying the widget registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A second widget tried to claim an existing command.
    #[error("shortcode [{command}] is already registered")]
    Duplicate { command: String },

    /// No widget is registered under the tag.
    #[error("no shortcode registered for [{tag}]")]
    NotFound { tag: String },
}

/// An attribute value that a widget could not use.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("attribute `{key}` has invalid value \"{value}\": expected {expected}")]
pub struct InvalidAttr {
    pub key: String,
    pub value: String,
    pub expected: &'static str,
}

/// Errors loading the theme configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error, with the offending file path.
    #[error("failed to parse theme config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid theme config: {0}")]
    Invalid(String),
}

/// Failures reported by the host CMS collaborators.
#[derive(Debug, Error)]
pub enum HostError {
    /// The host could not answer a content query.
    #[error("content query failed: {0}")]
    Query(String),

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content fixture YAML was malformed.
    #[error("failed to parse content fixture at {path}: {source}")]
    Fixture {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
