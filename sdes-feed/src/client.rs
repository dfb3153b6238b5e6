//! Feed transport and the fetch entrypoint.

use std::io::Read;
use std::time::{Duration, Instant};

use chrono_tz::Tz;

use crate::error::FeedError;
use crate::model::Feed;
use crate::parse::parse_feed;

/// Largest response body read from the calendar.
const MAX_BODY_BYTES: u64 = 5 * 1024 * 1024;

/// Something that can return the raw XML at a URL within a timeout.
pub trait FeedSource {
    fn fetch_xml(&self, url: &str, timeout: Duration) -> Result<String, FeedError>;
}

impl<F> FeedSource for F
where
    F: Fn(&str, Duration) -> Result<String, FeedError>,
{
    fn fetch_xml(&self, url: &str, timeout: Duration) -> Result<String, FeedError> {
        self(url, timeout)
    }
}

/// Blocking HTTP transport.
#[derive(Debug, Clone, Default)]
pub struct HttpFeedSource;

impl FeedSource for HttpFeedSource {
    fn fetch_xml(&self, url: &str, timeout: Duration) -> Result<String, FeedError> {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        let response = agent.get(url).call().map_err(|e| match e {
            ureq::Error::Status(code, _) => FeedError::Transport(format!("HTTP {code} from {url}")),
            ureq::Error::Transport(t) => FeedError::Transport(t.to_string()),
        })?;

        // Bodies are not always UTF-8; decode lossily rather than fail.
        let mut bytes = Vec::new();
        response
            .into_reader()
            .take(MAX_BODY_BYTES)
            .read_to_end(&mut bytes)
            .map_err(|e| FeedError::Transport(format!("reading body from {url}: {e}")))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Parameters of one feed request.
#[derive(Debug, Clone)]
pub struct FeedQuery<'a> {
    pub host: &'a str,
    pub calendar_id: &'a str,
    pub timeout: Duration,
    /// Page-level deadline; the request never outlives it.
    pub deadline: Option<Instant>,
    pub tz: Tz,
}

/// `{host}/?calendar_id={id}&upcoming=upcoming&format=rss`
pub fn feed_url(host: &str, calendar_id: &str) -> String {
    format!(
        "{}/?calendar_id={calendar_id}&upcoming=upcoming&format=rss",
        host.trim_end_matches('/')
    )
}

/// Time the request may take: the configured timeout, capped by whatever is
/// left before `deadline`. `None` once the deadline has passed.
pub fn effective_timeout(
    timeout: Duration,
    deadline: Option<Instant>,
    now: Instant,
) -> Option<Duration> {
    match deadline {
        None => Some(timeout),
        Some(deadline) => {
            let remaining = deadline.checked_duration_since(now)?;
            (!remaining.is_zero()).then(|| timeout.min(remaining))
        }
    }
}

/// Fetch and parse the calendar feed.
pub fn fetch(source: &dyn FeedSource, query: &FeedQuery<'_>) -> Result<Feed, FeedError> {
    let timeout = effective_timeout(query.timeout, query.deadline, Instant::now()).ok_or_else(
        || FeedError::Transport("page render deadline passed before the feed was requested".into()),
    )?;
    let url = feed_url(query.host, query.calendar_id);

    let started = Instant::now();
    let xml = source.fetch_xml(&url, timeout)?;
    tracing::info!(
        url = %url,
        elapsed_ms = started.elapsed().as_millis() as u64,
        bytes = xml.len(),
        "fetched events feed"
    );
    parse_feed(&xml, query.tz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn url_is_templated_with_calendar_id() {
        assert_eq!(
            feed_url("http://events.ucf.edu/", "41"),
            "http://events.ucf.edu/?calendar_id=41&upcoming=upcoming&format=rss"
        );
    }

    #[test]
    fn deadline_caps_timeout() {
        let now = Instant::now();
        let ten = Duration::from_secs(10);
        assert_eq!(effective_timeout(ten, None, now), Some(ten));
        assert_eq!(
            effective_timeout(ten, Some(now + Duration::from_secs(2)), now),
            Some(Duration::from_secs(2))
        );
        assert_eq!(effective_timeout(ten, Some(now), now), None);
    }

    #[test]
    fn expired_deadline_skips_the_request() {
        let calls = RefCell::new(0);
        let source = |_: &str, _: Duration| -> Result<String, FeedError> {
            *calls.borrow_mut() += 1;
            Ok("<rss/>".into())
        };
        let query = FeedQuery {
            host: "http://events.ucf.edu",
            calendar_id: "41",
            timeout: Duration::from_secs(10),
            deadline: Some(Instant::now() - Duration::from_millis(1)),
            tz: chrono_tz::America::New_York,
        };
        let err = fetch(&source, &query).unwrap_err();
        assert!(matches!(err, FeedError::Transport(_)));
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn transport_errors_pass_through() {
        let source = |_: &str, _: Duration| -> Result<String, FeedError> {
            Err(FeedError::Transport("connection refused".into()))
        };
        let query = FeedQuery {
            host: "http://events.ucf.edu",
            calendar_id: "41",
            timeout: Duration::from_secs(1),
            deadline: None,
            tz: chrono_tz::America::New_York,
        };
        assert_eq!(
            fetch(&source, &query).unwrap_err(),
            FeedError::Transport("connection refused".into())
        );
    }
}
