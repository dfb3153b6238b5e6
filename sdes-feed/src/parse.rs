//! RSS reader for the events calendar.
//!
//! Reads `<root>/channel/item` elements and the `ucfevent:` extension fields.
//! The `ucfevent` prefix is matched literally, as the calendar publishes it.

use chrono_tz::Tz;
use quick_xml::events::Event as XmlEvent;
use quick_xml::Reader;

use crate::error::FeedError;
use crate::model::{parse_start, Feed, FeedItem};

const LOCATION: &str = "ucfevent:location";

#[derive(Debug, Default)]
struct RawItem {
    title: String,
    link: String,
    location_name: String,
    map_url: String,
    start: String,
}

impl RawItem {
    /// Field addressed by the element path below `<item>`.
    fn field_mut(&mut self, rel: &[String]) -> Option<&mut String> {
        match rel {
            [one] if one == "title" => Some(&mut self.title),
            [one] if one == "link" => Some(&mut self.link),
            [one] if one == "ucfevent:startdate" => Some(&mut self.start),
            [loc, one] if loc == LOCATION && one == "ucfevent:name" => Some(&mut self.location_name),
            [loc, one] if loc == LOCATION && one == "ucfevent:mapurl" => Some(&mut self.map_url),
            _ => None,
        }
    }
}

fn is_channel_path(path: &[String]) -> bool {
    path.len() == 2 && path[1] == "channel"
}

/// Parse a feed document, reading start times in `tz`.
///
/// A well-formed document without a channel has no items. Malformed XML,
/// unclosed elements and an empty document are reported as
/// [`FeedError::Parse`]. Start dates that cannot be read are left unset and
/// only reported by [`Feed::upcoming`].
pub fn parse_feed(xml: &str, tz: Tz) -> Result<Feed, FeedError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut path: Vec<String> = Vec::new();
    let mut raw_items: Vec<RawItem> = Vec::new();
    let mut current: Option<(usize, RawItem)> = None;
    let mut saw_root = false;

    loop {
        match reader.read_event() {
            Ok(XmlEvent::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                saw_root = true;
                if name == "item" && is_channel_path(&path) {
                    current = Some((path.len() + 1, RawItem::default()));
                }
                path.push(name);
            }
            Ok(XmlEvent::Empty(_)) => saw_root = true,
            Ok(XmlEvent::End(_)) => {
                path.pop();
                if current.as_ref().is_some_and(|(depth, _)| path.len() < *depth) {
                    if let Some((_, item)) = current.take() {
                        raw_items.push(item);
                    }
                }
            }
            Ok(XmlEvent::Text(t)) => {
                let text = t.unescape().map_err(|e| {
                    FeedError::parse(format!("{e} at byte {}", reader.buffer_position()))
                })?;
                append_text(&mut current, &path, &text);
            }
            Ok(XmlEvent::CData(c)) => {
                let text = String::from_utf8_lossy(&c.into_inner()).into_owned();
                append_text(&mut current, &path, &text);
            }
            Ok(XmlEvent::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(FeedError::parse(format!(
                    "{e} at byte {}",
                    reader.error_position()
                )));
            }
        }
    }

    let mut messages = Vec::new();
    if !saw_root {
        messages.push("Start tag expected, '<' not found".to_string());
    }
    if let Some(open) = path.last() {
        messages.push(format!("Premature end of data in tag {open}"));
    }
    if !messages.is_empty() {
        return Err(FeedError::Parse { messages });
    }

    let items = raw_items
        .into_iter()
        .map(|raw| FeedItem {
            start: parse_start(&raw.start, tz),
            title: raw.title,
            link: raw.link,
            location_name: raw.location_name,
            map_url: raw.map_url,
            start_raw: raw.start,
        })
        .collect();
    Ok(Feed { items })
}

fn append_text(current: &mut Option<(usize, RawItem)>, path: &[String], text: &str) {
    if let Some((depth, item)) = current.as_mut() {
        if let Some(field) = path.get(*depth..).and_then(|rel| item.field_mut(rel)) {
            field.push_str(text);
        }
    }
}
