//! `[contactblock]`: the contact table for a named contact post.

use std::collections::BTreeMap;

use sdes_core::{Escaped, ParamSpec, ResolvedAttrs, WidgetDefinition};

use super::WidgetEnv;
use crate::context::{ContactCtx, LocationCtx, RenderContext};
use crate::error::WidgetError;

pub const DEFINITION: WidgetDefinition = WidgetDefinition {
    command: "contactblock",
    name: "Contact",
    description: "Show the contact information box without custumizer or cms.",
    params: &[ParamSpec::text(
        "Contact Block",
        "contactname",
        "This is the Title of the Contact block you would like to display.",
    )],
    accepts_body: false,
    wysiwyg_visible: true,
};

const CONTACT_POST_TYPE: &str = "contact";

pub fn validate_and_fetch(
    attrs: &ResolvedAttrs,
    env: &WidgetEnv<'_>,
) -> Result<RenderContext, WidgetError> {
    let content = env.page.content;
    let contacts = content.posts_of_type(CONTACT_POST_TYPE)?;
    if contacts.is_empty() {
        return Err(WidgetError::ContactMissing { any_contacts: false });
    }

    let wanted = attrs.text("contactname").to_lowercase();
    let contact = contacts
        .iter()
        .find(|c| c.title.to_lowercase() == wanted)
        .ok_or(WidgetError::ContactMissing { any_contacts: true })?;

    let meta = content.post_meta(contact.id)?;
    let config = env.config;
    Ok(RenderContext::Contact(contact_ctx(
        &meta,
        &config.map_host,
        &config.default_url_scheme,
    )))
}

fn contact_ctx(meta: &BTreeMap<String, String>, map_host: &str, scheme: &str) -> ContactCtx {
    let field = |key: &str| meta.get(key).map(|v| v.trim()).unwrap_or("");

    let phone = field("contact_phone");
    let email = field("contact_email");
    let (room, building) = (field("contact_room"), field("contact_building"));
    let location = (!room.is_empty() && !building.is_empty()).then(|| LocationCtx {
        href: Escaped::url(
            &format!(
                "{}/?show={}",
                map_host.trim_end_matches('/'),
                field("contact_map_id")
            ),
            scheme,
        ),
        building: Escaped::text(building),
        room: Escaped::text(room),
    });

    ContactCtx {
        hours: Escaped::text(field("contact_Hours")),
        phone: Escaped::text(phone),
        phone_href: Escaped::attr(&format!("tel:{phone}")),
        fax: Escaped::text(field("contact_fax")),
        email: Escaped::text(email),
        email_href: Escaped::attr(&format!("mailto:{email}")),
        location,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn location_needs_room_and_building() {
        let ctx = contact_ctx(&meta(&[("contact_room", "101")]), "http://map.ucf.edu", "http://");
        assert!(ctx.location.is_none());

        let ctx = contact_ctx(
            &meta(&[
                ("contact_room", "101"),
                ("contact_building", "Millican Hall"),
                ("contact_map_id", "1"),
            ]),
            "http://map.ucf.edu/",
            "http://",
        );
        let location = ctx.location.expect("location row");
        assert_eq!(location.href.as_str(), "http://map.ucf.edu/?show=1");
        assert_eq!(location.building.as_str(), "Millican Hall");
    }

    #[test]
    fn phone_and_email_links() {
        let ctx = contact_ctx(
            &meta(&[("contact_phone", "407-823-4625"), ("contact_email", "sdes@ucf.edu")]),
            "http://map.ucf.edu",
            "http://",
        );
        assert_eq!(ctx.phone_href.as_str(), "tel:407-823-4625");
        assert_eq!(ctx.email_href.as_str(), "mailto:sdes@ucf.edu");
        assert!(ctx.hours.is_empty());
    }
}
