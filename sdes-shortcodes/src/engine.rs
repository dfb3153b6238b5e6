//! Tera rendering engine for widget markup.
//!
//! Templates are named `*.html.tera` so Tera's autoescape (which keys off a
//! trailing `.html`) stays off: contexts carry pre-escaped values and
//! escaping them again would double-encode entities.
//!
//! # Overrides
//!
//! A theme may point `template_dir` at a directory of `.tera` files. A file
//! whose relative path matches an embedded template name (case-insensitive)
//! replaces it, e.g. `events.html.tera`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tera::Tera;

use crate::context::RenderContext;
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates, baked into the binary via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    ("menu_panel.html.tera", include_str!("templates/menu_panel.html.tera")),
    ("events.html.tera", include_str!("templates/events.html.tera")),
    ("alert.html.tera", include_str!("templates/alert.html.tera")),
    (
        "contact_block.html.tera",
        include_str!("templates/contact_block.html.tera"),
    ),
    (
        "social_media.html.tera",
        include_str!("templates/social_media.html.tera"),
    ),
    ("iframe.html.tera", include_str!("templates/iframe.html.tera")),
    ("redirect.html.tera", include_str!("templates/redirect.html.tera")),
];

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

fn normalize_template_name(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/").to_lowercase()
}

fn collect_template_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), RenderError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_template_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

fn load_override_templates(dir: &Path) -> Result<Vec<(String, String)>, RenderError> {
    if !dir.exists() {
        return Ok(vec![]);
    }
    let mut files = Vec::new();
    collect_template_files(dir, &mut files)?;
    let mut templates = Vec::new();
    for path in files {
        if path.extension().and_then(|s| s.to_str()) != Some("tera") {
            continue;
        }
        let rel = path.strip_prefix(dir).unwrap_or(path.as_path());
        let name = normalize_template_name(rel);
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        tracing::debug!(template = %name, path = %path.display(), "loaded template override");
        templates.push((name, contents));
    }
    Ok(templates)
}

fn build_tera(template_dir: Option<&Path>) -> Result<Tera, RenderError> {
    let mut templates: HashMap<String, String> = TPLS
        .iter()
        .map(|(name, content)| (normalize_template_name(Path::new(name)), (*content).to_string()))
        .collect();
    if let Some(dir) = template_dir {
        templates.extend(load_override_templates(dir)?);
    }

    let mut tera = Tera::default();
    tera.autoescape_on(vec![]);
    tera.add_raw_templates(templates)?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Embedded widget templates plus optional overrides.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Load the embedded templates, then any overrides under `template_dir`.
    /// A missing directory is not an error.
    pub fn new(template_dir: Option<&Path>) -> Result<Self, RenderError> {
        Ok(TemplateEngine {
            tera: build_tera(template_dir)?,
        })
    }

    /// Render `ctx` with the template its widget owns.
    pub fn render(&self, ctx: &RenderContext) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        Ok(self.tera.render(ctx.template_name(), &tera_ctx)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
