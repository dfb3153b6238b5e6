//! `[events]`: upcoming events from the calendar feed.

use std::collections::BTreeMap;

use chrono_tz::Tz;

use sdes_core::{
    AttrValue, Escaped, InvalidAttr, ParamDefault, ParamSpec, ParamType, ResolvedAttrs,
    ThemeConfig, WidgetDefinition,
};
use sdes_feed::{FeedItem, FeedQuery};

use super::WidgetEnv;
use crate::context::{EventCtx, EventsCtx, RenderContext};
use crate::error::WidgetError;

pub const DEFINITION: WidgetDefinition = WidgetDefinition {
    command: "events",
    name: "Events",
    description: "Show events calendar from a feed",
    params: &[
        ParamSpec::text("Event Id", "id", "The calendar_id of the events.ucf.edu calendar."),
        ParamSpec::text("Header", "header", "A header for this events calendar.")
            .with_default(ParamDefault::Text("Upcoming Events")),
        ParamSpec::text("Limit", "limit", "Only show this many items.")
            .of_type(ParamType::Number)
            .with_default(ParamDefault::Number(6)),
    ],
    accepts_body: false,
    wysiwyg_visible: true,
};

/// Calendar, limit and zone come from the theme config.
pub(super) fn config_defaults(config: &ThemeConfig, defaults: &mut BTreeMap<String, AttrValue>) {
    defaults.insert("id".into(), AttrValue::from(config.feed.calendar_id.as_str()));
    defaults.insert(
        "limit".into(),
        AttrValue::Number(i64::try_from(config.feed.limit).unwrap_or(i64::MAX)),
    );
    defaults.insert("timezone".into(), AttrValue::from(config.feed.timezone.as_str()));
}

fn calendar_id(attrs: &ResolvedAttrs) -> Result<String, InvalidAttr> {
    let id = attrs.text("id").trim().to_owned();
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(id)
    } else {
        Err(InvalidAttr {
            key: "id".into(),
            value: id,
            expected: "a calendar id of letters, digits, '-' or '_'",
        })
    }
}

fn timezone(attrs: &ResolvedAttrs) -> Result<Tz, InvalidAttr> {
    let name = attrs.text("timezone");
    name.trim().parse::<Tz>().map_err(|_| InvalidAttr {
        key: "timezone".into(),
        value: name.into_owned(),
        expected: "an IANA time zone name",
    })
}

fn event_ctx(item: &FeedItem, scheme: &str) -> EventCtx {
    EventCtx {
        month: Escaped::text(&item.month()),
        day: Escaped::text(&item.day()),
        link: Escaped::url(&item.link, scheme),
        title: Escaped::text(item.display_title()),
        location: Escaped::text(&item.location_name),
    }
}

pub fn validate_and_fetch(
    attrs: &ResolvedAttrs,
    env: &WidgetEnv<'_>,
) -> Result<RenderContext, WidgetError> {
    let id = calendar_id(attrs)?;
    let limit = attrs.count("limit")?;
    let tz = timezone(attrs)?;
    let feed_config = &env.config.feed;

    let feed = sdes_feed::fetch(
        env.page.feeds,
        &FeedQuery {
            host: &feed_config.host,
            calendar_id: &id,
            timeout: feed_config.timeout(),
            deadline: env.page.deadline,
            tz,
        },
    )?;

    let listed = feed.upcoming(limit)?;
    let scheme = &env.config.default_url_scheme;
    let more_events = format!(
        "{}/?calendar_id={id}&upcoming=upcoming",
        feed_config.more_events_host.trim_end_matches('/')
    );
    Ok(RenderContext::Events(EventsCtx {
        header: Escaped::text(&attrs.text("header")),
        no_events: feed.is_empty(),
        events: listed.iter().map(|item| event_ctx(item, scheme)).collect(),
        more_events_url: Escaped::url(&more_events, scheme),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdes_core::attrs::resolve;

    fn attrs(pairs: &[(&str, &str)]) -> ResolvedAttrs {
        let mut defaults = BTreeMap::new();
        config_defaults(&ThemeConfig::default(), &mut defaults);
        let supplied = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        resolve(&defaults, &supplied)
    }

    #[test]
    fn calendar_id_rejects_query_injection() {
        assert_eq!(calendar_id(&attrs(&[])), Ok("41".to_string()));
        assert!(calendar_id(&attrs(&[("id", "41&format=json")])).is_err());
        assert!(calendar_id(&attrs(&[("id", "")])).is_err());
    }

    #[test]
    fn event_rows_carry_only_listed_fields() {
        let item = FeedItem {
            title: "Graduate Fair".into(),
            link: "https://events.ucf.edu/event/3/".into(),
            location_name: "Student Union".into(),
            map_url: "https://map.ucf.edu/?show=52".into(),
            start_raw: "2026-10-21 10:00:00".into(),
            start: sdes_feed::model::parse_start("2026-10-21 10:00:00", chrono_tz::America::New_York),
        };
        let json = serde_json::to_value(event_ctx(&item, "http://")).expect("serialize");
        let mut keys: Vec<_> = json.as_object().expect("object").keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["day", "link", "location", "month", "title"]);
        assert_eq!(json["month"], "Oct");
    }

    #[test]
    fn unknown_timezone_is_invalid() {
        assert_eq!(timezone(&attrs(&[])), Ok(chrono_tz::America::New_York));
        let err = timezone(&attrs(&[("timezone", "Mars/Olympus")])).unwrap_err();
        assert_eq!(err.key, "timezone");
    }
}
