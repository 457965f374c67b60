//! Error types for folio-renderer.

use std::path::PathBuf;

use thiserror::Error;

use folio_core::ConfigError;

/// All errors that can arise from rendering a portfolio.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The config failed validation (or could not be serialized).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Tera template engine error.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// JSON serialization error (building tera context).
    #[error("context serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem error while loading user templates.
    #[error("template io error at {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
}

impl RenderError {
    /// `true` when rendering was refused because the config is invalid.
    pub fn is_validation(&self) -> bool {
        matches!(self, RenderError::Config(e) if e.is_validation())
    }
}
