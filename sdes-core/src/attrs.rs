//! Attribute resolution: caller-supplied values merged over declared defaults.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::InvalidAttr;
use crate::types::AttrValue;

/// Permissive string-to-boolean parsing for editor-authored attributes.
///
/// `true`, `1`, `yes` and `on` (any case, surrounding whitespace ignored) are
/// true; every other value is false.
pub fn parse_bool(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

/// Merge `supplied` over `defaults`.
///
/// Supplied keys win; missing keys take the default; supplied keys without a
/// default are passed through unchanged.
pub fn resolve(
    defaults: &BTreeMap<String, AttrValue>,
    supplied: &BTreeMap<String, String>,
) -> ResolvedAttrs {
    let mut merged = defaults.clone();
    for (key, value) in supplied {
        merged.insert(key.clone(), AttrValue::Text(value.clone()));
    }
    ResolvedAttrs(merged)
}

/// Attributes after default resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedAttrs(BTreeMap<String, AttrValue>);

impl ResolvedAttrs {
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.0.get(key)
    }

    /// String value; missing keys read as empty.
    pub fn text(&self, key: &str) -> Cow<'_, str> {
        self.0
            .get(key)
            .map(AttrValue::as_text)
            .unwrap_or(Cow::Borrowed(""))
    }

    /// Boolean value; missing keys read as false.
    pub fn flag(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(AttrValue::as_bool)
    }

    /// Non-negative integer value.
    pub fn count(&self, key: &str) -> Result<usize, InvalidAttr> {
        let invalid = |value: String| InvalidAttr {
            key: key.to_owned(),
            value,
            expected: "a non-negative integer",
        };
        match self.0.get(key) {
            Some(AttrValue::Number(n)) => usize::try_from(*n).map_err(|_| invalid(n.to_string())),
            Some(AttrValue::Text(s)) => s.trim().parse::<usize>().map_err(|_| invalid(s.clone())),
            Some(AttrValue::Bool(b)) => Err(invalid(b.to_string())),
            None => Err(invalid(String::new())),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttrValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, AttrValue>> for ResolvedAttrs {
    fn from(map: BTreeMap<String, AttrValue>) -> Self {
        Self(map)
    }
}
