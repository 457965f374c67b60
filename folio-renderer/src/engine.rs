//! Tera rendering engine: [`TemplateEngine`] and [`Renderer`].
//!
//! # Templates
//!
//! | Name                       | Escaping | Purpose                          |
//! |----------------------------|----------|----------------------------------|
//! | `portfolio.html`           | HTML     | the page shell                   |
//! | `partials/<section>.html`  | HTML     | one per page section             |
//! | `partials/script.html`     | HTML     | theme toggle + scroll behaviour  |
//! | `styles.css`               | none     | stylesheet, inlined in the page  |
//!
//! The stylesheet is not escaped: every value it receives is a validated CSS
//! color or a fixed palette constant.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tera::Tera;

use folio_core::{config, ConfigFormat, PortfolioConfig};

use crate::context::{StyleCtx, TemplateContext};
use crate::error::RenderError;
use crate::filters;

// ---------------------------------------------------------------------------
// Embedded templates, baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

pub const PAGE_TEMPLATE: &str = "portfolio.html";
pub const STYLES_TEMPLATE: &str = "styles.css";

const TPLS: &[(&str, &str)] = &[
    (PAGE_TEMPLATE, include_str!("templates/portfolio.html.tera")),
    (STYLES_TEMPLATE, include_str!("templates/styles.css.tera")),
    ("partials/header.html", include_str!("templates/_partials/header.html.tera")),
    ("partials/skills.html", include_str!("templates/_partials/skills.html.tera")),
    ("partials/about.html", include_str!("templates/_partials/about.html.tera")),
    (
        "partials/experience.html",
        include_str!("templates/_partials/experience.html.tera"),
    ),
    (
        "partials/education.html",
        include_str!("templates/_partials/education.html.tera"),
    ),
    ("partials/projects.html", include_str!("templates/_partials/projects.html.tera")),
    ("partials/contact.html", include_str!("templates/_partials/contact.html.tera")),
    ("partials/script.html", include_str!("templates/_partials/script.html.tera")),
];

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

/// `Partials/Header.html.tera` → `partials/header.html`
fn normalize_template_name(path: &Path) -> String {
    let name = path.to_string_lossy().replace('\\', "/").to_lowercase();
    match name.strip_suffix(".tera") {
        Some(stripped) => stripped.to_string(),
        None => name,
    }
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

fn load_user_templates(dir: &Path) -> Result<Vec<(String, String)>, RenderError> {
    if !dir.exists() {
        tracing::warn!("template directory {} does not exist; using built-ins", dir.display());
        return Ok(vec![]);
    }
    let mut files = Vec::new();
    collect_template_files(dir, &mut files)?;
    files.sort();
    let mut templates = Vec::new();
    for path in files {
        if path.extension().and_then(|s| s.to_str()) != Some("tera") {
            continue;
        }
        let rel = path.strip_prefix(dir).unwrap_or(path.as_path());
        let name = normalize_template_name(rel);
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        tracing::debug!("template override: {name} <- {}", path.display());
        templates.push((name, contents));
    }
    Ok(templates)
}

fn build_tera(user_template_dir: Option<&Path>) -> Result<Tera, RenderError> {
    let mut templates: HashMap<String, String> = HashMap::new();
    for (name, content) in TPLS {
        templates.insert((*name).to_string(), (*content).to_string());
    }
    if let Some(dir) = user_template_dir {
        for (name, content) in load_user_templates(dir)? {
            templates.insert(name, content);
        }
    }

    let mut tera = Tera::default();
    tera.autoescape_on(vec![".html"]);
    tera.register_filter("safe_url", filters::safe_url);
    let count = templates.len();
    tera.add_raw_templates(templates.into_iter().collect::<Vec<_>>())?;
    tracing::debug!("registered {count} templates");
    Ok(tera)
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Tera-based engine for rendering templates with optional user overrides.
///
/// `user_template_dir` may contain `.tera` files that override embedded
/// defaults by relative name, e.g. `partials/projects.html.tera`.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Construct a new [`TemplateEngine`], loading embedded templates plus any
    /// overrides found in `user_template_dir`.
    pub fn new(user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        let tera = build_tera(user_template_dir)?;
        Ok(TemplateEngine { tera })
    }

    /// Render one registered template.
    pub fn render(&self, name: &str, ctx: &tera::Context) -> Result<String, RenderError> {
        Ok(self.tera.render(name, ctx)?)
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Output of [`Renderer::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// The complete HTML document.
    pub html: String,
    /// Normalized serialization of the config that produced `html`.
    pub config_text: String,
    pub config_format: ConfigFormat,
}

/// Turns a [`PortfolioConfig`] plus a timestamp into page text.
///
/// Holds no per-render state; create once and reuse, including across threads.
pub struct Renderer {
    engine: TemplateEngine,
}

impl Renderer {
    /// Construct a new [`Renderer`] with embedded templates.
    pub fn new() -> Result<Self, RenderError> {
        Ok(Renderer { engine: TemplateEngine::new(None)? })
    }

    /// Construct a [`Renderer`] whose templates may be overridden from `dir`.
    pub fn with_template_dir(dir: &Path) -> Result<Self, RenderError> {
        Ok(Renderer { engine: TemplateEngine::new(Some(dir))? })
    }

    /// Stylesheet text for `config.style`. Unknown themes and non-color values
    /// are rejected.
    pub fn generate_styles(&self, config: &PortfolioConfig) -> Result<String, RenderError> {
        config.style.validate()?;
        let style = StyleCtx::from_config(config)?;
        let mut ctx = tera::Context::new();
        ctx.insert("style", &style);
        self.engine.render(STYLES_TEMPLATE, &ctx)
    }

    /// The complete HTML document, stylesheet inlined.
    pub fn generate_markup(
        &self,
        config: &PortfolioConfig,
        generated_at: DateTime<Utc>,
    ) -> Result<String, RenderError> {
        config.validate()?;
        let styles = self.generate_styles(config)?;
        let mut ctx = TemplateContext::from_config(config, generated_at)?.to_tera_context()?;
        ctx.insert("styles", &styles);
        self.engine.render(PAGE_TEMPLATE, &ctx)
    }

    /// HTML plus the JSON serialization of `config`.
    pub fn render(
        &self,
        config: &PortfolioConfig,
        generated_at: DateTime<Utc>,
    ) -> Result<Rendered, RenderError> {
        self.render_with_format(config, generated_at, ConfigFormat::Json)
    }

    /// HTML plus the serialization of `config` in `format`.
    pub fn render_with_format(
        &self,
        config: &PortfolioConfig,
        generated_at: DateTime<Utc>,
        format: ConfigFormat,
    ) -> Result<Rendered, RenderError> {
        let html = self.generate_markup(config, generated_at)?;
        let config_text = config::to_string(config, format)?;
        Ok(Rendered { html, config_text, config_format: format })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
