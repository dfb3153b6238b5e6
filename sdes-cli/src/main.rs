//! sdes — preview tool for the SDES theme's shortcodes.
//!
//! # Usage
//!
//! ```text
//! sdes render <file> [--content <yaml>] [--config <yaml>] [--can-edit] [--budget-ms <ms>] [--offline]
//! sdes shortcodes [--content <yaml>] [--config <yaml>] [--json]
//! sdes feed [<calendar-id>] [--limit <n>] [--config <yaml>]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{feed::FeedArgs, render::RenderArgs, shortcodes::ShortcodesArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "sdes",
    version,
    about = "Render and inspect SDES theme shortcodes",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Expand every shortcode in a content file and print the HTML.
    Render(RenderArgs),

    /// List the shortcodes offered in the editor.
    Shortcodes(ShortcodesArgs),

    /// Fetch an events calendar and list upcoming events.
    Feed(FeedArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Render(args) => args.run(),
        Commands::Shortcodes(args) => args.run(),
        Commands::Feed(args) => args.run(),
    }
}
