//! `sdes shortcodes`: what the editor's insertion dialog offers.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use sdes_shortcodes::{describe, ShortcodeRenderer, ShortcodeUi};

use super::{load_config, load_content};

/// Arguments for `sdes shortcodes`.
#[derive(Args, Debug)]
pub struct ShortcodesArgs {
    /// YAML fixture used for live choices (menus).
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Theme config (defaults to the user config dir).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Tabled)]
struct ShortcodeRow {
    #[tabled(rename = "command")]
    command: String,
    #[tabled(rename = "name")]
    name: String,
    #[tabled(rename = "parameters")]
    params: String,
    #[tabled(rename = "snippet")]
    snippet: String,
}

impl ShortcodesArgs {
    pub fn run(self) -> Result<()> {
        let config = load_config(self.config.as_deref())?;
        let content = load_content(self.content.as_deref())?;
        let renderer = ShortcodeRenderer::new(config).context("failed to set up shortcodes")?;
        let ui = describe(renderer.registry(), &content);

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&ui).context("failed to serialize shortcode JSON")?
            );
            return Ok(());
        }
        print_table(&ui);
        Ok(())
    }
}

fn param_summary(ui: &ShortcodeUi) -> String {
    ui.params
        .iter()
        .map(|p| {
            if p.choices.is_empty() {
                format!("{} ({})", p.id, p.param_type)
            } else {
                let values: Vec<&str> = p.choices.iter().map(|c| c.value.as_ref()).collect();
                format!("{} ({}: {})", p.id, p.param_type, values.join(", "))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn print_table(ui: &[ShortcodeUi]) {
    println!(
        "{} v{} | {} shortcodes",
        "sdes".bold(),
        env!("CARGO_PKG_VERSION"),
        ui.len()
    );
    let rows: Vec<ShortcodeRow> = ui
        .iter()
        .map(|s| ShortcodeRow {
            command: s.command.to_string(),
            name: s.name.to_string(),
            params: param_summary(s),
            snippet: s.snippet.clone(),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
}
