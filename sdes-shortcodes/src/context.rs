//! Render contexts: the escaped, typed payload each widget hands its template.
//!
//! Every string that reaches a template is an [`Escaped`], so a context can
//! only be built from values that went through the escaping constructors.

use serde::Serialize;

use sdes_core::Escaped;

use crate::error::RenderError;

/// Payload for one widget render, one variant per widget.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RenderContext {
    MenuPanel(MenuPanelCtx),
    Events(EventsCtx),
    Alert(AlertCtx),
    Contact(ContactCtx),
    SocialMedia(SocialMediaCtx),
    Iframe(IframeCtx),
    Redirect(RedirectCtx),
}

impl RenderContext {
    /// Name of the template that renders this context.
    pub fn template_name(&self) -> &'static str {
        match self {
            RenderContext::MenuPanel(_) => "menu_panel.html.tera",
            RenderContext::Events(_) => "events.html.tera",
            RenderContext::Alert(_) => "alert.html.tera",
            RenderContext::Contact(_) => "contact_block.html.tera",
            RenderContext::SocialMedia(_) => "social_media.html.tera",
            RenderContext::Iframe(_) => "iframe.html.tera",
            RenderContext::Redirect(_) => "redirect.html.tera",
        }
    }

    /// Convert into a Tera context; the variant's fields become top-level
    /// template variables.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}

// ---------------------------------------------------------------------------
// menuPanel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct MenuPanelCtx {
    pub heading: Escaped,
    /// Inline CSS for the panel container.
    pub style: Escaped,
    pub items: Vec<MenuLinkCtx>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuLinkCtx {
    pub url: Escaped,
    /// Host-assigned classes, space separated.
    pub classes: Escaped,
    pub title: Escaped,
}

// ---------------------------------------------------------------------------
// events
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct EventsCtx {
    pub header: Escaped,
    /// The feed had no items at all (as opposed to a limit of zero).
    pub no_events: bool,
    pub events: Vec<EventCtx>,
    pub more_events_url: Escaped,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventCtx {
    pub month: Escaped,
    pub day: Escaped,
    pub link: Escaped,
    pub title: Escaped,
    pub location: Escaped,
}

// ---------------------------------------------------------------------------
// alert
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct AlertCtx {
    pub unplanned: bool,
    pub title: Escaped,
    pub message: Escaped,
    /// Empty when the alert is not a link.
    pub url: Escaped,
}

// ---------------------------------------------------------------------------
// contactblock
// ---------------------------------------------------------------------------

/// Contact rows; empty fields are left out of the table.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContactCtx {
    pub hours: Escaped,
    pub phone: Escaped,
    pub phone_href: Escaped,
    pub fax: Escaped,
    pub email: Escaped,
    pub email_href: Escaped,
    pub location: Option<LocationCtx>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationCtx {
    pub href: Escaped,
    pub building: Escaped,
    pub room: Escaped,
}

// ---------------------------------------------------------------------------
// social_media
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct SocialMediaCtx {
    pub links: Vec<SocialLinkCtx>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialLinkCtx {
    /// Button class, e.g. `gplus`.
    pub class: Escaped,
    /// Font Awesome icon class.
    pub icon: Escaped,
    pub label: Escaped,
    pub url: Escaped,
}

// ---------------------------------------------------------------------------
// iframe / redirect
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct IframeCtx {
    pub src: Escaped,
    pub width: Escaped,
    pub height: Escaped,
    pub allow_fullscreen: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RedirectCtx {
    pub href: Escaped,
    pub text: Escaped,
    /// JavaScript string literal, quotes included.
    pub script_url: Escaped,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_fields_are_top_level_template_variables() {
        let ctx = RenderContext::Iframe(IframeCtx {
            src: Escaped::url("youtube.com/embed/x", "https://"),
            width: Escaped::attr("560"),
            height: Escaped::attr("315"),
            allow_fullscreen: true,
        });
        let tera_ctx = ctx.to_tera_context().expect("context conversion");
        let json = tera_ctx.into_json();
        assert_eq!(json["src"], "https://youtube.com/embed/x");
        assert_eq!(json["allow_fullscreen"], true);
        assert_eq!(ctx.template_name(), "iframe.html.tera");
    }
}
