//! SDES theme core library — widget schema types, attribute resolution,
//! the widget registry, content scanning, host collaborators, configuration.
//!
//! - [`types`] — widget definitions, parameter schema, invocations
//! - [`attrs`] — default merging and boolean coercion
//! - [`escape`] — HTML escaping, URL normalisation, [`escape::Escaped`]
//! - [`registry`] — [`WidgetRegistry`]
//! - [`parser`] — shortcode scanner for page content
//! - [`host`] — [`ContentQuery`] / [`Viewer`] and an in-memory host
//! - [`config`] — [`ThemeConfig`]

pub mod attrs;
pub mod config;
pub mod error;
pub mod escape;
pub mod host;
pub mod parser;
pub mod registry;
pub mod types;

pub use attrs::{parse_bool, ResolvedAttrs};
pub use config::{FeedConfig, ThemeConfig};
pub use error::{ConfigError, HostError, InvalidAttr, RegistryError};
pub use escape::Escaped;
pub use host::{ContentQuery, InMemoryContent, MenuItem, NavMenu, PostSummary, Viewer};
pub use registry::{Shortcode, WidgetRegistry};
pub use types::{
    AttrValue, Choice, ParamDefault, ParamSpec, ParamType, PostId, RawInvocation,
    WidgetDefinition,
};
