//! Data for the editor's shortcode insertion dialog.

use serde::Serialize;

use sdes_core::{
    AttrValue, Choice, ContentQuery, ParamSpec, ParamType, Shortcode, WidgetDefinition,
    WidgetRegistry,
};

use crate::widgets::menu_panel;

/// One parameter as the insertion UI shows it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamUi {
    pub name: &'static str,
    pub id: &'static str,
    pub help_text: &'static str,
    #[serde(rename = "type")]
    pub param_type: ParamType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<AttrValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<Choice>,
}

impl From<&ParamSpec> for ParamUi {
    fn from(spec: &ParamSpec) -> Self {
        ParamUi {
            name: spec.name,
            id: spec.id,
            help_text: spec.help_text,
            param_type: spec.param_type,
            default: spec.default.map(|d| d.to_value()),
            choices: spec.choices.to_vec(),
        }
    }
}

/// One insertable shortcode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortcodeUi {
    pub name: &'static str,
    pub command: &'static str,
    pub description: &'static str,
    pub closing_tag: bool,
    pub params: Vec<ParamUi>,
    /// Markup inserted into the editor.
    pub snippet: String,
}

/// Describe every insertable shortcode, in registration order.
///
/// Menu choices for `menuPanel` are read from `content` now, not when the
/// widget was defined.
pub fn describe<W: Shortcode>(
    registry: &WidgetRegistry<W>,
    content: &dyn ContentQuery,
) -> Vec<ShortcodeUi> {
    registry
        .iter()
        .map(Shortcode::definition)
        .filter(|def| def.wysiwyg_visible)
        .map(|def| {
            let params = def
                .params
                .iter()
                .map(|spec| param_ui(def, spec, content))
                .collect();
            ShortcodeUi {
                name: def.name,
                command: def.command,
                description: def.description,
                closing_tag: def.accepts_body,
                params,
                snippet: snippet(def),
            }
        })
        .collect()
}

fn param_ui(def: &WidgetDefinition, spec: &ParamSpec, content: &dyn ContentQuery) -> ParamUi {
    let mut ui = ParamUi::from(spec);
    if def.command == menu_panel::DEFINITION.command && spec.id == "name" {
        match menu_panel::menu_choices(content) {
            Ok(choices) => {
                ui.param_type = ParamType::Dropdown;
                ui.choices = choices;
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not list menus; menu name stays free text");
            }
        }
    }
    ui
}

/// `[tag id="default" …]`, plus `[/tag]` for widgets that take a body.
pub fn snippet(def: &WidgetDefinition) -> String {
    let mut out = format!("[{}", def.command);
    for spec in def.params {
        let value = spec.default.map(|d| d.to_value().to_string()).unwrap_or_default();
        out.push_str(&format!(" {}=\"{}\"", spec.id, value));
    }
    out.push(']');
    if def.accepts_body {
        out.push_str(&format!("[/{}]", def.command));
    }
    out
}
