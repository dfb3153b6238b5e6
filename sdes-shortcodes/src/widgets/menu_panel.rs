//! `[menuPanel]`: a card listing the items of a navigation menu.
//!
//! ```text
//! [menuPanel name="Other Resources" heading="An Alternate heading"]
//! ```

use std::borrow::Cow;
use std::collections::BTreeMap;

use sdes_core::{
    AttrValue, Choice, ContentQuery, Escaped, HostError, ParamSpec, ResolvedAttrs,
    WidgetDefinition,
};

use super::WidgetEnv;
use crate::context::{MenuLinkCtx, MenuPanelCtx, RenderContext};
use crate::error::WidgetError;

pub const DEFINITION: WidgetDefinition = WidgetDefinition {
    command: "menuPanel",
    name: "Menu Panel",
    description: "Show panelled menu, usually in sidecolumns.",
    params: &[
        ParamSpec::text("Menu Name", "name", "The menu to display."),
        ParamSpec::text("Heading", "heading", "A heading to display (optional)."),
    ],
    accepts_body: false,
    wysiwyg_visible: true,
};

const DEFAULT_MENU: &str = "Pages";
const DEFAULT_STYLE: &str = "max-width: 697px;";

/// Menu and panel style used when the tag leaves them out. Not offered in
/// the insertion dialog.
pub(super) fn runtime_defaults(defaults: &mut BTreeMap<String, AttrValue>) {
    defaults.insert("name".into(), AttrValue::from(DEFAULT_MENU));
    defaults.insert("style".into(), AttrValue::from(DEFAULT_STYLE));
}

/// Live menus as dropdown choices for the `name` parameter.
pub fn menu_choices(content: &dyn ContentQuery) -> Result<Vec<Choice>, HostError> {
    Ok(content
        .nav_menus()?
        .into_iter()
        .map(|m| Choice {
            value: Cow::Owned(m.slug),
            name: Cow::Owned(m.name),
        })
        .collect())
}

pub fn validate_and_fetch(
    attrs: &ResolvedAttrs,
    env: &WidgetEnv<'_>,
) -> Result<RenderContext, WidgetError> {
    let name = attrs.text("name");
    let items = env
        .page
        .content
        .nav_menu_items(&name)?
        .ok_or_else(|| WidgetError::NotFound(format!("Could not find a nav menu named \"{name}\"")))?;

    // Heading falls back to the menu name actually used.
    let heading = match attrs.get("heading") {
        Some(h) => h.as_text(),
        None => name.clone(),
    };
    let scheme = &env.config.default_url_scheme;

    Ok(RenderContext::MenuPanel(MenuPanelCtx {
        heading: Escaped::text(&heading),
        style: Escaped::attr(&attrs.text("style")),
        items: items
            .iter()
            .map(|item| MenuLinkCtx {
                url: Escaped::url(&item.url, scheme),
                classes: Escaped::attr(&item.classes.join(" ")),
                title: Escaped::text(&item.title),
            })
            .collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::snippet;

    #[test]
    fn dialog_offers_only_name_and_heading() {
        let ids: Vec<_> = DEFINITION.params.iter().map(|p| p.id).collect();
        assert_eq!(ids, ["name", "heading"]);
        assert_eq!(snippet(&DEFINITION), r#"[menuPanel name="" heading=""]"#);
    }

    #[test]
    fn runtime_defaults_fill_menu_and_style() {
        let mut defaults = BTreeMap::new();
        runtime_defaults(&mut defaults);
        assert_eq!(defaults["name"], AttrValue::from("Pages"));
        assert_eq!(defaults["style"], AttrValue::from("max-width: 697px;"));
    }
}
