//! `[redirect]`: send the browser elsewhere, with a no-JavaScript link.

use sdes_core::{Escaped, InvalidAttr, ParamSpec, ResolvedAttrs, WidgetDefinition};

use super::WidgetEnv;
use crate::context::{RedirectCtx, RenderContext};
use crate::error::WidgetError;

pub const DEFINITION: WidgetDefinition = WidgetDefinition {
    command: "redirect",
    name: "Redirect",
    description: "",
    params: &[ParamSpec::text("Redirect Url", "redirect_url", "")],
    accepts_body: false,
    wysiwyg_visible: true,
};

pub fn validate_and_fetch(
    attrs: &ResolvedAttrs,
    env: &WidgetEnv<'_>,
) -> Result<RenderContext, WidgetError> {
    let raw = attrs.text("redirect_url");
    let url = sdes_core::escape::url_ensure_prefix(&raw, &env.config.default_url_scheme);
    if url.is_empty() {
        return Err(InvalidAttr {
            key: "redirect_url".into(),
            value: raw.into_owned(),
            expected: "a URL to redirect to",
        }
        .into());
    }
    Ok(RenderContext::Redirect(RedirectCtx {
        href: Escaped::attr(&url),
        text: Escaped::text(&url),
        script_url: Escaped::script_string(&url),
    }))
}
