//! Shortcode scanner for page content.
//!
//! Recognised forms, for registered tags only:
//!
//! ```text
//! [tag a="1" b='2' c=3 "positional"]
//! [tag /]
//! [tag]body[/tag]
//! [[tag]]            -> literal "[tag]"
//! ```
//!
//! Anything else, including tags that are not registered, stays text.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::RawInvocation;

static OPEN_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(\[?)([\w-]+)(\s[^\]]*?)?(/)?\]").expect("open-tag pattern is valid")
});

static ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"([\w-]+)\s*=\s*"([^"]*)"(?:\s|$)"#,
        r#"|([\w-]+)\s*=\s*'([^']*)'(?:\s|$)"#,
        r#"|([\w-]+)\s*=\s*([^\s'"]+)(?:\s|$)"#,
        r#"|"([^"]*)"(?:\s|$)"#,
        r#"|'([^']*)'(?:\s|$)"#,
        r#"|(\S+)(?:\s|$)"#,
    ))
    .expect("attribute pattern is valid")
});

/// A piece of scanned content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Shortcode(RawInvocation),
}

/// Split `content` into text and shortcode occurrences.
pub fn scan<'a>(content: &'a str, is_registered: impl Fn(&str) -> bool) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    let mut cursor = 0;
    let mut search_from = 0;

    while let Some(caps) = OPEN_TAG.captures_at(content, search_from) {
        let whole = caps.get(0).map_or(0..0, |m| m.range());
        let tag = &caps[2];
        if !is_registered(tag) {
            search_from = whole.start + 1;
            continue;
        }

        let escaped_open = !caps[1].is_empty();
        let mut end = whole.end;
        let mut body = None;
        if caps.get(4).is_none() {
            let close = format!("[/{tag}]");
            if let Some(pos) = content[end..].find(&close) {
                body = Some(content[end..end + pos].to_owned());
                end += pos + close.len();
            }
        }

        // `[[tag]]`: emit the inner text literally.
        if escaped_open && content[end..].starts_with(']') {
            push_text(&mut segments, &content[cursor..whole.start]);
            push_text(&mut segments, &content[whole.start + 1..end]);
            cursor = end + 1;
            search_from = cursor;
            continue;
        }

        // A lone leading `[` stays in front of the rendered tag.
        let start = if escaped_open { whole.start + 1 } else { whole.start };
        push_text(&mut segments, &content[cursor..start]);
        segments.push(Segment::Shortcode(RawInvocation {
            tag: tag.to_owned(),
            attrs: parse_attrs(caps.get(3).map_or("", |m| m.as_str())),
            body,
            raw: content[start..end].to_owned(),
        }));
        cursor = end;
        search_from = end;
    }

    push_text(&mut segments, &content[cursor..]);
    segments
}

fn push_text<'a>(segments: &mut Vec<Segment<'a>>, text: &'a str) {
    if !text.is_empty() {
        segments.push(Segment::Text(text));
    }
}

/// Parse the attribute part of an opening tag.
///
/// Keys are lower-cased; positional values get keys `0`, `1`, ….
pub fn parse_attrs(text: &str) -> BTreeMap<String, String> {
    let text = text.replace(['\u{00a0}', '\u{200b}'], " ");
    let mut attrs = BTreeMap::new();
    let mut positional = 0usize;

    for caps in ATTR.captures_iter(&text) {
        let named = [(1, 2), (3, 4), (5, 6)]
            .into_iter()
            .find_map(|(k, v)| Some((caps.get(k)?, caps.get(v)?)));
        if let Some((key, value)) = named {
            attrs.insert(key.as_str().to_lowercase(), value.as_str().to_owned());
            continue;
        }
        if let Some(value) = [7, 8, 9].into_iter().find_map(|i| caps.get(i)) {
            attrs.insert(positional.to_string(), value.as_str().to_owned());
            positional += 1;
        }
    }
    attrs
}
