//! The built-in shortcode widgets.
//!
//! Each widget module owns a `const DEFINITION` (its admin schema) and a
//! `validate_and_fetch` that turns resolved attributes into a
//! [`RenderContext`]. [`Widget`] ties them together for the registry.

use std::collections::BTreeMap;

use sdes_core::{AttrValue, ResolvedAttrs, Shortcode, ThemeConfig, WidgetDefinition};

use crate::context::RenderContext;
use crate::error::WidgetError;
use crate::pipeline::PageRequest;

pub mod alert;
pub mod contact_block;
pub mod events;
pub mod iframe;
pub mod menu_panel;
pub mod redirect;
pub mod social_media;

/// Everything a widget may consult while rendering one invocation.
pub struct WidgetEnv<'a> {
    pub config: &'a ThemeConfig,
    pub page: &'a PageRequest<'a>,
}

/// A registered shortcode widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    Alert,
    MenuPanel,
    Events,
    ContactBlock,
    SocialMedia,
    Iframe,
    Redirect,
}

/// Every built-in widget, in registration order.
pub fn builtin() -> [Widget; 7] {
    [
        Widget::Alert,
        Widget::MenuPanel,
        Widget::Events,
        Widget::ContactBlock,
        Widget::SocialMedia,
        Widget::Iframe,
        Widget::Redirect,
    ]
}

impl Shortcode for Widget {
    fn definition(&self) -> &'static WidgetDefinition {
        match self {
            Widget::Alert => &alert::DEFINITION,
            Widget::MenuPanel => &menu_panel::DEFINITION,
            Widget::Events => &events::DEFINITION,
            Widget::ContactBlock => &contact_block::DEFINITION,
            Widget::SocialMedia => &social_media::DEFINITION,
            Widget::Iframe => &iframe::DEFINITION,
            Widget::Redirect => &redirect::DEFINITION,
        }
    }
}

impl Widget {
    /// Runtime defaults: the declared ones, plus any that come from config.
    pub fn defaults(&self, config: &ThemeConfig) -> BTreeMap<String, AttrValue> {
        let mut defaults = self.definition().param_defaults();
        match self {
            Widget::Events => events::config_defaults(config, &mut defaults),
            Widget::MenuPanel => menu_panel::runtime_defaults(&mut defaults),
            _ => {}
        }
        defaults
    }

    /// Validate `attrs`, fetch whatever data the widget needs, and build its
    /// render context.
    pub fn validate_and_fetch(
        &self,
        attrs: &ResolvedAttrs,
        env: &WidgetEnv<'_>,
    ) -> Result<RenderContext, WidgetError> {
        match self {
            Widget::Alert => Ok(alert::build(attrs, env)),
            Widget::MenuPanel => menu_panel::validate_and_fetch(attrs, env),
            Widget::Events => events::validate_and_fetch(attrs, env),
            Widget::ContactBlock => contact_block::validate_and_fetch(attrs, env),
            Widget::SocialMedia => Ok(social_media::build(attrs, env)),
            Widget::Iframe => Ok(iframe::build(attrs, env)),
            Widget::Redirect => redirect::validate_and_fetch(attrs, env),
        }
    }
}
