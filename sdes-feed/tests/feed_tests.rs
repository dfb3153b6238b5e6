//! Feed adapter behaviour through the public API, with in-test sources.

use std::cell::RefCell;
use std::time::Duration;

use chrono_tz::America::New_York;
use rstest::rstest;
use sdes_feed::{fetch, parse_feed, FeedError, FeedQuery};

fn feed_with(count: usize) -> String {
    let items: String = (1..=count)
        .map(|i| {
            format!(
                "<item><title>Event {i}</title><link>https://events.ucf.edu/event/{i}/</link>\
                 <ucfevent:startdate>2026-11-{i:02} 09:30:00</ucfevent:startdate>\
                 <ucfevent:location><ucfevent:name>Room {i}</ucfevent:name>\
                 <ucfevent:mapurl>https://map.ucf.edu/?show={i}</ucfevent:mapurl></ucfevent:location></item>"
            )
        })
        .collect();
    format!(
        "<?xml version=\"1.0\"?><rss xmlns:ucfevent=\"http://events.ucf.edu\"><channel>{items}</channel></rss>"
    )
}

fn query(calendar_id: &str) -> FeedQuery<'_> {
    FeedQuery {
        host: "http://events.ucf.edu",
        calendar_id,
        timeout: Duration::from_secs(10),
        deadline: None,
        tz: New_York,
    }
}

#[rstest]
#[case(10, 6, 6)]
#[case(3, 6, 3)]
#[case(0, 6, 0)]
#[case(10, 0, 0)]
fn upcoming_is_clamped(#[case] available: usize, #[case] limit: usize, #[case] expected: usize) {
    let feed = parse_feed(&feed_with(available), New_York).expect("parse");
    assert_eq!(feed.len(), available);
    assert_eq!(feed.upcoming(limit).expect("dated items").len(), expected);
}

#[test]
fn trailing_undated_item_only_fails_when_listed() {
    let xml = feed_with(9).replace(
        "</channel>",
        "<item><title>Event 10</title><link>https://events.ucf.edu/event/10/</link></item></channel>",
    );
    let feed = parse_feed(&xml, New_York).expect("parse");
    assert_eq!(feed.len(), 10);
    assert_eq!(feed.upcoming(6).expect("first six are dated").len(), 6);
    assert_eq!(feed.upcoming(9).expect("first nine are dated").len(), 9);
    match feed.upcoming(10).unwrap_err() {
        FeedError::Parse { messages } => {
            assert_eq!(messages, ["item 10: invalid ucfevent:startdate \"\""]);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn items_keep_feed_order() {
    let feed = parse_feed(&feed_with(3), New_York).expect("parse");
    let titles: Vec<_> = feed.items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, ["Event 1", "Event 2", "Event 3"]);
    assert_eq!(feed.items[1].location_name, "Room 2");
    assert_eq!(feed.items[1].iso_start(), "2026-11-02T09:30:00-0500");
}

#[test]
fn fetch_requests_templated_url_with_timeout() {
    let seen = RefCell::new(Vec::new());
    let source = |url: &str, timeout: Duration| -> Result<String, FeedError> {
        seen.borrow_mut().push((url.to_string(), timeout));
        Ok(feed_with(2))
    };
    let feed = fetch(&source, &query("77")).expect("fetch");
    assert_eq!(feed.len(), 2);
    assert_eq!(
        seen.borrow()[0],
        (
            "http://events.ucf.edu/?calendar_id=77&upcoming=upcoming&format=rss".to_string(),
            Duration::from_secs(10)
        )
    );
}

#[test]
fn html_error_page_is_a_parse_error_not_transport() {
    let source = |_: &str, _: Duration| -> Result<String, FeedError> {
        Ok("<html><body><p>Service Unavailable</body></html>".to_string())
    };
    let err = fetch(&source, &query("41")).unwrap_err();
    assert!(matches!(err, FeedError::Parse { .. }), "got: {err:?}");
}
