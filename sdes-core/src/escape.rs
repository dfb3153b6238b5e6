//! Output escaping for widget templates.
//!
//! Templates are not auto-escaped, so every interpolated value is an
//! [`Escaped`]. Its constructors are the only way to build one, which keeps
//! raw attribute or host data from reaching markup unescaped.

use std::fmt;

use serde::Serialize;

/// Scheme prepended by [`url_ensure_prefix`] unless configured otherwise.
pub const DEFAULT_SCHEME: &str = "http://";

const KEPT_PREFIXES: &[&str] = &["http://", "https://", "//", "mailto:", "tel:"];

/// Escape `& < > " '` for HTML text and attribute contexts.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Guarantee an absolute or protocol-relative URL.
///
/// Empty input stays empty. URLs already starting with `http://`, `https://`,
/// `//`, `mailto:` or `tel:` (case-insensitive) are returned trimmed; anything
/// else gets `default_scheme` in front, which also neutralises
/// `javascript:`-style values.
pub fn url_ensure_prefix(url: &str, default_scheme: &str) -> String {
    let url = url.trim();
    if url.is_empty() {
        return String::new();
    }
    let lower = url.to_ascii_lowercase();
    if KEPT_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        url.to_owned()
    } else {
        format!("{default_scheme}{url}")
    }
}

/// A string that is safe to interpolate into widget markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Escaped(String);

impl Escaped {
    /// Free text inside an element.
    pub fn text(raw: &str) -> Self {
        Self(escape_html(raw))
    }

    /// Value of a quoted HTML attribute.
    pub fn attr(raw: &str) -> Self {
        Self(escape_html(raw))
    }

    /// Value of an `href`/`src` attribute.
    pub fn url(raw: &str, default_scheme: &str) -> Self {
        Self(escape_html(&url_ensure_prefix(raw, default_scheme)))
    }

    /// A double-quoted JavaScript string literal, safe inside `<script>`.
    pub fn script_string(raw: &str) -> Self {
        let mut out = String::with_capacity(raw.len() + 2);
        out.push('"');
        for c in raw.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '"' => out.push_str("\\\""),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '<' => out.push_str("\\u003C"),
                '>' => out.push_str("\\u003E"),
                '&' => out.push_str("\\u0026"),
                '\'' => out.push_str("\\u0027"),
                '\u{2028}' => out.push_str("\\u2028"),
                '\u{2029}' => out.push_str("\\u2029"),
                c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
                c => out.push(c),
            }
        }
        out.push('"');
        Self(out)
    }

    /// Literal markup owned by the theme itself.
    pub fn trusted(markup: &'static str) -> Self {
        Self(markup.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Escaped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
