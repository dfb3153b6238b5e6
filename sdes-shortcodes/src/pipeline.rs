//! Render pipeline: tag → widget → attributes → data → HTML.
//!
//! No error leaves [`ShortcodeRenderer::render`]. A failing widget is turned
//! into fallback markup by [`fallback`], and an unregistered tag comes back
//! as its original source text.

use std::collections::BTreeMap;
use std::time::Instant;

use sdes_core::attrs::resolve;
use sdes_core::escape::escape_html;
use sdes_core::parser::{scan, Segment};
use sdes_core::{ContentQuery, RawInvocation, ThemeConfig, Viewer, WidgetRegistry};
use sdes_feed::{FeedError, FeedSource};

use crate::engine::TemplateEngine;
use crate::error::{RenderError, Visibility, WidgetError};
use crate::widgets::{self, Widget, WidgetEnv};

/// Per-request collaborators for one page render.
pub struct PageRequest<'a> {
    pub content: &'a dyn ContentQuery,
    pub feeds: &'a dyn FeedSource,
    pub viewer: &'a dyn Viewer,
    /// Wall-clock budget for the whole page; caps feed timeouts.
    pub deadline: Option<Instant>,
}

/// Registry, templates and config, fixed at construction.
pub struct ShortcodeRenderer {
    registry: WidgetRegistry<Widget>,
    engine: TemplateEngine,
    config: ThemeConfig,
}

impl ShortcodeRenderer {
    /// Register every built-in widget.
    pub fn new(config: ThemeConfig) -> Result<Self, RenderError> {
        Self::with_widgets(config, widgets::builtin())
    }

    /// Register only `widgets`. Fails on a repeated command.
    pub fn with_widgets(
        config: ThemeConfig,
        widgets: impl IntoIterator<Item = Widget>,
    ) -> Result<Self, RenderError> {
        let mut registry = WidgetRegistry::new();
        registry.register(widgets)?;
        let engine = TemplateEngine::new(config.template_dir.as_deref())?;
        tracing::debug!(widgets = registry.len(), "shortcode renderer ready");
        Ok(ShortcodeRenderer {
            registry,
            engine,
            config,
        })
    }

    pub fn registry(&self) -> &WidgetRegistry<Widget> {
        &self.registry
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Render one invocation. Unregistered tags return `invocation.raw`.
    pub fn render(&self, invocation: &RawInvocation, page: &PageRequest<'_>) -> String {
        let Ok(widget) = self.registry.resolve(&invocation.tag) else {
            return invocation.raw.clone();
        };
        tracing::debug!(tag = %invocation.tag, "rendering shortcode");
        match self.try_render(widget, invocation, page) {
            Ok(html) => html,
            Err(err) => {
                tracing::warn!(tag = %invocation.tag, error = %err, "shortcode fell back");
                fallback(&invocation.tag, &err, page.viewer)
            }
        }
    }

    /// Render a tag given its parts rather than scanned source.
    pub fn render_tag(
        &self,
        tag: &str,
        attrs: BTreeMap<String, String>,
        body: Option<String>,
        page: &PageRequest<'_>,
    ) -> String {
        self.render(&RawInvocation::new(tag, attrs, body), page)
    }

    /// Replace every registered shortcode in `content` with its markup.
    pub fn do_shortcode(&self, content: &str, page: &PageRequest<'_>) -> String {
        let mut out = String::with_capacity(content.len());
        for segment in scan(content, |tag| self.registry.contains(tag)) {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Shortcode(invocation) => out.push_str(&self.render(&invocation, page)),
            }
        }
        out
    }

    fn try_render(
        &self,
        widget: &Widget,
        invocation: &RawInvocation,
        page: &PageRequest<'_>,
    ) -> Result<String, WidgetError> {
        let attrs = resolve(&widget.defaults(&self.config), &invocation.attrs);
        let env = WidgetEnv {
            config: &self.config,
            page,
        };
        let ctx = widget.validate_and_fetch(&attrs, &env)?;
        Ok(self.engine.render(&ctx)?)
    }
}

/// Markup shown in place of a widget that failed.
///
/// Always-visible diagnostics are shown to everyone. Other errors show their
/// message to viewers who can edit posts and a bare comment to everyone else.
pub fn fallback(tag: &str, err: &WidgetError, viewer: &dyn Viewer) -> String {
    if err.visibility() == Visibility::Always {
        match err {
            WidgetError::Feed(FeedError::Parse { messages }) => {
                let mut html = String::from("<li>Failed loading XML</li>");
                for message in messages {
                    html.push_str(&format!("<li>{}</li>", escape_html(message)));
                }
                return html;
            }
            WidgetError::ContactMissing { any_contacts: true } => {
                return r#"<div class="alert alert-danger">No contact block exists with this name.</div>"#
                    .to_string();
            }
            WidgetError::ContactMissing { any_contacts: false } => {
                return r#"<div class="alert alert-danger">Go to contact and add a contact named Main.</div>"#
                    .to_string();
            }
            _ => {}
        }
    }

    if viewer.can_edit_posts() {
        format!(
            r#"<p class="bg-danger text-danger">Admin Alert: {}</p>"#,
            escape_html(&err.to_string())
        )
    } else {
        format!("<!-- shortcode [{}] unavailable -->", escape_html(tag))
    }
}
