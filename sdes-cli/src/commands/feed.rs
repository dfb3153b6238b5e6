//! `sdes feed`: fetch a calendar and list its upcoming events.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono_tz::Tz;
use clap::Args;
use colored::Colorize;

use sdes_feed::{fetch, FeedError, FeedQuery, HttpFeedSource};

use super::load_config;

/// Arguments for `sdes feed`.
#[derive(Args, Debug)]
pub struct FeedArgs {
    /// Calendar to fetch (defaults to `feed.calendar_id` from config).
    pub calendar_id: Option<String>,

    /// Show at most this many events (defaults to `feed.limit`).
    #[arg(long)]
    pub limit: Option<usize>,

    /// Theme config (defaults to the user config dir).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl FeedArgs {
    pub fn run(self) -> Result<()> {
        let config = load_config(self.config.as_deref())?;
        let feed_config = &config.feed;
        let calendar_id = self.calendar_id.as_deref().unwrap_or(&feed_config.calendar_id);
        let limit = self.limit.unwrap_or(feed_config.limit);
        let tz: Tz = feed_config
            .timezone
            .parse()
            .map_err(|_| anyhow::anyhow!("unknown time zone '{}' in config", feed_config.timezone))?;

        let query = FeedQuery {
            host: &feed_config.host,
            calendar_id,
            timeout: feed_config.timeout(),
            deadline: None,
            tz,
        };
        let listed = fetch(&HttpFeedSource, &query).and_then(|feed| {
            let listed = feed.upcoming(limit)?.to_vec();
            Ok((feed.len(), listed))
        });
        let (available, listed) = match listed {
            Ok(found) => found,
            Err(FeedError::Parse { messages }) => {
                eprintln!("{}", "Failed loading XML".red().bold());
                for message in &messages {
                    eprintln!("  {message}");
                }
                anyhow::bail!("calendar {calendar_id} did not return a readable feed");
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to fetch calendar {calendar_id}"))
            }
        };

        println!(
            "{} | calendar {} | {} of {} events",
            "Upcoming Events".bold(),
            calendar_id,
            listed.len(),
            available
        );
        if available == 0 {
            println!("{}", "Sorry, no events could be found.".yellow());
            return Ok(());
        }
        for item in &listed {
            println!(
                "{:>3} {:>2}  {}  {}",
                item.month().cyan(),
                item.day().cyan(),
                item.display_title().bold(),
                item.location_name.bright_black()
            );
            println!("         {}", item.link.bright_black());
        }
        Ok(())
    }
}
