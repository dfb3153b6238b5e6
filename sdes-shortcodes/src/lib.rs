//! # sdes-shortcodes
//!
//! The SDES theme's shortcode widgets and the pipeline that renders them:
//! registry lookup, attribute defaults, widget data fetching, Tera markup,
//! and fallback output when a widget fails.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sdes_core::{InMemoryContent, ThemeConfig};
//! use sdes_feed::HttpFeedSource;
//! use sdes_shortcodes::{PageRequest, ShortcodeRenderer};
//!
//! fn preview(html: &str) {
//!     let Ok(renderer) = ShortcodeRenderer::new(ThemeConfig::default()) else {
//!         return;
//!     };
//!     let content = InMemoryContent::new();
//!     let page = PageRequest {
//!         content: &content,
//!         feeds: &HttpFeedSource,
//!         viewer: &false,
//!         deadline: None,
//!     };
//!     println!("{}", renderer.do_shortcode(html, &page));
//! }
//! ```

pub mod admin;
pub mod context;
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod widgets;

pub use admin::{describe, ParamUi, ShortcodeUi};
pub use context::RenderContext;
pub use engine::TemplateEngine;
pub use error::{RenderError, Visibility, WidgetError};
pub use pipeline::{fallback, PageRequest, ShortcodeRenderer};
pub use widgets::Widget;
