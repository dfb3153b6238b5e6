//! Domain types for the shortcode registry.
//!
//! Widget schemas are `'static` data so each widget declares its definition as
//! a `const` next to the code that implements it. Nothing here performs I/O.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attrs::parse_bool;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Identifier of a post (contact record, page, …) in the host CMS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PostId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for PostId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Input control used for a parameter in the insertion UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    #[default]
    Text,
    Number,
    Checkbox,
    Dropdown,
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Text => write!(f, "text"),
            ParamType::Number => write!(f, "number"),
            ParamType::Checkbox => write!(f, "checkbox"),
            ParamType::Dropdown => write!(f, "dropdown"),
        }
    }
}

/// A parameter default as declared in a widget schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamDefault {
    Text(&'static str),
    Number(i64),
    Bool(bool),
}

impl ParamDefault {
    pub fn to_value(self) -> AttrValue {
        match self {
            ParamDefault::Text(s) => AttrValue::Text(s.to_owned()),
            ParamDefault::Number(n) => AttrValue::Number(n),
            ParamDefault::Bool(b) => AttrValue::Bool(b),
        }
    }
}

/// A runtime attribute value after default resolution.
///
/// Supplied attributes are always `Text`; typed variants only come from
/// declared defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    Text(String),
    Number(i64),
    Bool(bool),
}

impl AttrValue {
    /// String form, as a template or URL would see it. `true` is `"1"` and
    /// `false` is empty.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            AttrValue::Text(s) => Cow::Borrowed(s.as_str()),
            AttrValue::Number(n) => Cow::Owned(n.to_string()),
            AttrValue::Bool(true) => Cow::Borrowed("1"),
            AttrValue::Bool(false) => Cow::Borrowed(""),
        }
    }

    /// Permissive boolean reading, see [`parse_bool`].
    pub fn as_bool(&self) -> bool {
        match self {
            AttrValue::Text(s) => parse_bool(s),
            AttrValue::Number(n) => *n == 1,
            AttrValue::Bool(b) => *b,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

impl From<i64> for AttrValue {
    fn from(n: i64) -> Self {
        AttrValue::Number(n)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

// ---------------------------------------------------------------------------
// Widget schema
// ---------------------------------------------------------------------------

/// One selectable value of a dropdown parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub value: Cow<'static, str>,
    pub name: Cow<'static, str>,
}

/// Admin-facing description of one widget parameter.
///
/// This drives the insertion UI only; runtime validation lives in the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParamSpec {
    pub name: &'static str,
    pub id: &'static str,
    pub help_text: &'static str,
    #[serde(rename = "type")]
    pub param_type: ParamType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<ParamDefault>,
    #[serde(skip_serializing_if = "no_choices")]
    pub choices: &'static [Choice],
}

impl ParamSpec {
    /// A text parameter with no default.
    pub const fn text(name: &'static str, id: &'static str, help_text: &'static str) -> Self {
        Self {
            name,
            id,
            help_text,
            param_type: ParamType::Text,
            default: None,
            choices: &[],
        }
    }

    pub const fn of_type(self, param_type: ParamType) -> Self {
        Self { param_type, ..self }
    }

    pub const fn with_default(self, default: ParamDefault) -> Self {
        Self {
            default: Some(default),
            ..self
        }
    }
}

fn no_choices(choices: &&'static [Choice]) -> bool {
    choices.is_empty()
}

/// Declarative record for a single shortcode widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WidgetDefinition {
    /// Tag used in content, e.g. `menuPanel`.
    pub command: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub params: &'static [ParamSpec],
    /// Whether `[tag]…[/tag]` body content is meaningful.
    pub accepts_body: bool,
    /// Whether the widget is offered in the insertion UI.
    pub wysiwyg_visible: bool,
}

impl WidgetDefinition {
    pub fn param(&self, id: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.id == id)
    }

    /// Declared parameter defaults as runtime values.
    pub fn param_defaults(&self) -> BTreeMap<String, AttrValue> {
        self.params
            .iter()
            .filter_map(|p| p.default.map(|d| (p.id.to_owned(), d.to_value())))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Invocations
// ---------------------------------------------------------------------------

/// One shortcode occurrence found in page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInvocation {
    pub tag: String,
    /// Untrusted attribute values, keys lower-cased.
    pub attrs: BTreeMap<String, String>,
    pub body: Option<String>,
    /// Exact source text of the occurrence.
    pub raw: String,
}

impl RawInvocation {
    /// Build an invocation that did not come from scanned content; `raw` is
    /// synthesized from the parts.
    pub fn new(
        tag: impl Into<String>,
        attrs: BTreeMap<String, String>,
        body: Option<String>,
    ) -> Self {
        let mut inv = RawInvocation {
            tag: tag.into(),
            attrs,
            body,
            raw: String::new(),
        };
        inv.raw = inv.to_markup();
        inv
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Shortcode markup equivalent to this invocation.
    pub fn to_markup(&self) -> String {
        let mut out = format!("[{}", self.tag);
        for (key, value) in &self.attrs {
            if value.contains('"') {
                out.push_str(&format!(" {key}='{value}'"));
            } else {
                out.push_str(&format!(" {key}=\"{value}\""));
            }
        }
        out.push(']');
        if let Some(body) = &self.body {
            out.push_str(body);
            out.push_str(&format!("[/{}]", self.tag));
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
