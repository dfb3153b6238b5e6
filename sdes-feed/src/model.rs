//! Parsed feed items and their display helpers.

use chrono::{DateTime, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

use crate::error::FeedError;

/// Titles longer than this many characters are cut.
pub const TITLE_MAX_CHARS: usize = 50;
/// Length a long title is cut to. No ellipsis is added.
pub const TITLE_TRUNCATED_CHARS: usize = 45;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// One `<item>` of the events feed.
///
/// `start` is `None` when `start_raw` could not be read; such an item is
/// only an error once it is listed (see [`Feed::upcoming`]).
#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    pub location_name: String,
    pub map_url: String,
    pub start_raw: String,
    pub start: Option<DateTime<Tz>>,
}

impl FeedItem {
    /// Title as listed: cut to 45 characters when longer than 50.
    pub fn display_title(&self) -> &str {
        truncate_title(&self.title)
    }

    /// ISO 8601 start, e.g. `2026-10-19T14:00:00-0400`.
    pub fn iso_start(&self) -> String {
        self.format_start("%Y-%m-%dT%H:%M:%S%z")
    }

    /// Abbreviated month, e.g. `Oct`.
    pub fn month(&self) -> String {
        self.format_start("%b")
    }

    /// Day of month without padding, e.g. `9`.
    pub fn day(&self) -> String {
        self.format_start("%-d")
    }

    fn format_start(&self, fmt: &str) -> String {
        self.start
            .map(|start| start.format(fmt).to_string())
            .unwrap_or_default()
    }
}

/// All items of a fetched feed, in feed order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feed {
    pub items: Vec<FeedItem>,
}

impl Feed {
    /// The first `limit` items, or all of them when fewer exist.
    ///
    /// Start dates are checked for these items only: an unreadable date
    /// further down the feed does not hide the events above it.
    pub fn upcoming(&self, limit: usize) -> Result<&[FeedItem], FeedError> {
        let listed = &self.items[..limit.min(self.items.len())];
        let messages: Vec<String> = listed
            .iter()
            .enumerate()
            .filter(|(_, item)| item.start.is_none())
            .map(|(n, item)| {
                format!("item {}: invalid ucfevent:startdate \"{}\"", n + 1, item.start_raw)
            })
            .collect();
        if messages.is_empty() {
            Ok(listed)
        } else {
            Err(FeedError::Parse { messages })
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

pub fn truncate_title(title: &str) -> &str {
    if title.chars().count() <= TITLE_MAX_CHARS {
        return title;
    }
    match title.char_indices().nth(TITLE_TRUNCATED_CHARS) {
        Some((idx, _)) => &title[..idx],
        None => title,
    }
}

/// Parse an event start time.
///
/// Values carrying an offset (RFC 2822, RFC 3339) are converted into `tz`;
/// naive `YYYY-MM-DD HH:MM[:SS]` values are read as local time in `tz`.
pub fn parse_start(raw: &str, tz: Tz) -> Option<DateTime<Tz>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&tz));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&tz));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .and_then(|naive| tz.from_local_datetime(&naive).earliest())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::America::New_York;

    fn item(title: &str, start_raw: &str) -> FeedItem {
        FeedItem {
            title: title.into(),
            link: String::new(),
            location_name: String::new(),
            map_url: String::new(),
            start_raw: start_raw.into(),
            start: parse_start(start_raw, New_York),
        }
    }

    #[test]
    fn naive_start_is_local_to_zone() {
        let item = item("Career Fair", "2026-10-09 14:00:00");
        assert_eq!(item.iso_start(), "2026-10-09T14:00:00-0400");
        assert_eq!(item.month(), "Oct");
        assert_eq!(item.day(), "9");
    }

    #[test]
    fn offset_start_is_converted() {
        let start = parse_start("Mon, 19 Jan 2026 17:00:00 +0000", New_York).expect("parse");
        assert_eq!(start.format("%H:%M %z").to_string(), "12:00 -0500");
    }

    #[test]
    fn garbage_start_is_rejected() {
        assert!(parse_start("next tuesday", New_York).is_none());
        assert!(parse_start("", New_York).is_none());
    }

    #[test]
    fn undated_items_fail_only_when_listed() {
        let feed = Feed {
            items: vec![
                item("a", "2026-10-09 14:00:00"),
                item("b", "soon"),
                item("c", ""),
            ],
        };
        assert_eq!(feed.upcoming(1).expect("first is dated").len(), 1);
        match feed.upcoming(3).unwrap_err() {
            FeedError::Parse { messages } => assert_eq!(
                messages,
                [
                    "item 2: invalid ucfevent:startdate \"soon\"",
                    "item 3: invalid ucfevent:startdate \"\"",
                ]
            ),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn undated_item_formats_empty() {
        let item = item("TBA", "");
        assert_eq!(item.month(), "");
        assert_eq!(item.iso_start(), "");
    }

    #[test]
    fn title_truncation_threshold() {
        let fifty = "x".repeat(50);
        assert_eq!(truncate_title(&fifty), fifty);
        let sixty = "y".repeat(60);
        assert_eq!(truncate_title(&sixty), "y".repeat(45));
        let accented = "é".repeat(51);
        assert_eq!(truncate_title(&accented).chars().count(), 45);
    }
}
