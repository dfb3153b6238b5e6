//! # sdes-feed
//!
//! Client for the events calendar RSS feed: blocking HTTP transport with a
//! hard timeout, a `quick-xml` reader for the `ucfevent` extension, and
//! timezone-aware start dates.
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use sdes_feed::{fetch, FeedQuery, HttpFeedSource};
//!
//! let query = FeedQuery {
//!     host: "http://events.ucf.edu",
//!     calendar_id: "41",
//!     timeout: Duration::from_secs(10),
//!     deadline: None,
//!     tz: chrono_tz::America::New_York,
//! };
//! if let Ok(feed) = fetch(&HttpFeedSource, &query) {
//!     for item in feed.upcoming(6).unwrap_or_default() {
//!         println!("{} {} {}", item.month(), item.day(), item.display_title());
//!     }
//! }
//! ```

pub mod client;
pub mod error;
pub mod model;
pub mod parse;

pub use client::{effective_timeout, feed_url, fetch, FeedQuery, FeedSource, HttpFeedSource};
pub use error::FeedError;
pub use model::{truncate_title, Feed, FeedItem};
pub use parse::parse_feed;
