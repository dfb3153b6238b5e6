//! `[social_media]`: one button per configured platform.

use sdes_core::{Escaped, ParamSpec, ResolvedAttrs, WidgetDefinition};

use super::WidgetEnv;
use crate::context::{RenderContext, SocialLinkCtx, SocialMediaCtx};

struct Platform {
    id: &'static str,
    class: &'static str,
    icon: &'static str,
    label: &'static str,
}

const PLATFORMS: &[Platform] = &[
    Platform { id: "facebook", class: "facebook", icon: "fa-facebook-official", label: "Facebook" },
    Platform { id: "flickr", class: "flickr", icon: "fa-flickr", label: "Flickr" },
    Platform { id: "google_plus", class: "gplus", icon: "fa-google-plus", label: "Google+" },
    Platform { id: "instagram", class: "instagram", icon: "fa-instagram", label: "Instagram" },
    Platform { id: "linkedin", class: "linkedin", icon: "fa-linkedin", label: "LinkedIn" },
    Platform { id: "pinterest", class: "pinterest", icon: "fa-pinterest", label: "Pinterest" },
    Platform { id: "twitter", class: "twitter", icon: "fa-twitter", label: "Twitter" },
    Platform { id: "tumblr", class: "tumblr", icon: "fa-tumblr", label: "Tumblr" },
    Platform { id: "vimeo", class: "vimeo", icon: "fa-vimeo", label: "Vimeo" },
    Platform { id: "youtube", class: "youtube", icon: "fa-youtube", label: "YouTube" },
];

pub const DEFINITION: WidgetDefinition = WidgetDefinition {
    command: "social_media",
    name: "Social Media",
    description: "",
    params: &[
        ParamSpec::text("Facebook Url", "facebook", ""),
        ParamSpec::text("Flickr Url", "flickr", ""),
        ParamSpec::text("Google+ Url", "google_plus", ""),
        ParamSpec::text("Instagram Url", "instagram", ""),
        ParamSpec::text("LinkedIn Url", "linkedin", ""),
        ParamSpec::text("Pinterest Url", "pinterest", ""),
        ParamSpec::text("Twitter Url", "twitter", ""),
        ParamSpec::text("Tumblr Url", "tumblr", ""),
        ParamSpec::text("Vimeo Url", "vimeo", ""),
        ParamSpec::text("Youtube Url", "youtube", ""),
    ],
    accepts_body: false,
    wysiwyg_visible: true,
};

/// Platforms with an empty URL are left out.
pub fn build(attrs: &ResolvedAttrs, env: &WidgetEnv<'_>) -> RenderContext {
    let scheme = &env.config.default_url_scheme;
    let links = PLATFORMS
        .iter()
        .filter_map(|p| {
            let url = attrs.text(p.id);
            if url.trim().is_empty() {
                return None;
            }
            Some(SocialLinkCtx {
                class: Escaped::trusted(p.class),
                icon: Escaped::trusted(p.icon),
                label: Escaped::text(p.label),
                url: Escaped::url(&url, scheme),
            })
        })
        .collect();
    RenderContext::SocialMedia(SocialMediaCtx { links })
}
