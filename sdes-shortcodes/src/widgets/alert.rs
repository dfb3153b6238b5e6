//! `[alert]`: a single ad-hoc alert in page content.

use sdes_core::{Escaped, ParamDefault, ParamSpec, ParamType, ResolvedAttrs, WidgetDefinition};

use super::WidgetEnv;
use crate::context::{AlertCtx, RenderContext};

pub const DEFINITION: WidgetDefinition = WidgetDefinition {
    command: "alert",
    name: "Alert (Ad hoc)",
    description: "Show an alert on a single page.",
    params: &[
        ParamSpec::text("Is Unplanned", "is_unplanned", "Show the alert as red instead of yellow.")
            .of_type(ParamType::Checkbox)
            .with_default(ParamDefault::Bool(true)),
        ParamSpec::text("Title", "title", "A title for the alert (shown in bold).")
            .with_default(ParamDefault::Text("ALERT")),
        ParamSpec::text("Message", "message", "Message text for the alert.")
            .with_default(ParamDefault::Text("Alert")),
        ParamSpec::text("URL", "url", "Make the alert a link.").with_default(ParamDefault::Text("")),
    ],
    accepts_body: false,
    wysiwyg_visible: true,
};

/// Always succeeds.
pub fn build(attrs: &ResolvedAttrs, env: &WidgetEnv<'_>) -> RenderContext {
    RenderContext::Alert(AlertCtx {
        unplanned: attrs.flag("is_unplanned"),
        title: Escaped::text(&attrs.text("title")),
        message: Escaped::text(&attrs.text("message")),
        url: Escaped::url(&attrs.text("url"), &env.config.default_url_scheme),
    })
}
