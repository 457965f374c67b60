//! # folio-renderer
//!
//! Tera-based template engine that renders a self-contained portfolio page
//! (HTML, inline CSS, small script) from a [`folio_core::PortfolioConfig`].
//!
//! Every interpolated value is escaped for where it lands: HTML text and
//! attributes via tera autoescape, URLs via the `safe_url` filter, and CSS by
//! accepting only validated color literals.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use folio_core::PortfolioConfig;
//! use folio_renderer::Renderer;
//!
//! fn render_sample() {
//!     if let Ok(renderer) = Renderer::new() {
//!         if let Ok(out) = renderer.render(&PortfolioConfig::sample(), Utc::now()) {
//!             println!("{} bytes of HTML", out.html.len());
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod filters;
pub mod palette;

pub use context::TemplateContext;
pub use engine::{Renderer, Rendered, TemplateEngine};
pub use error::RenderError;
pub use palette::Palette;
