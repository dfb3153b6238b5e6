//! `[iframe]`: embed another page.

use sdes_core::{Escaped, ParamSpec, ResolvedAttrs, WidgetDefinition};

use super::WidgetEnv;
use crate::context::{IframeCtx, RenderContext};

pub const DEFINITION: WidgetDefinition = WidgetDefinition {
    command: "iframe",
    name: "IFrame",
    description: "",
    params: &[
        ParamSpec::text("IFrame Url", "if_url", ""),
        ParamSpec::text("Width", "if_width", ""),
        ParamSpec::text("Height", "if_height", ""),
    ],
    accepts_body: false,
    wysiwyg_visible: true,
};

pub fn build(attrs: &ResolvedAttrs, env: &WidgetEnv<'_>) -> RenderContext {
    let url = attrs.text("if_url");
    RenderContext::Iframe(IframeCtx {
        src: Escaped::url(&url, &env.config.default_url_scheme),
        width: Escaped::attr(&attrs.text("if_width")),
        height: Escaped::attr(&attrs.text("if_height")),
        // YouTube embeds need fullscreen; other pages don't get it.
        allow_fullscreen: url.contains("youtube"),
    })
}
