//! Error types for folio-publish.

use std::path::PathBuf;

use thiserror::Error;

use folio_renderer::RenderError;

/// All errors that can arise while publishing a page.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The config was rejected or the templates failed to render.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// An output file could not be staged or moved into place.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PublishError {
    /// `true` when publishing stopped because the config failed validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, PublishError::Render(e) if e.is_validation())
    }
}

/// Convenience constructor for [`PublishError::Write`].
pub(crate) fn write_err(path: impl Into<PathBuf>, source: std::io::Error) -> PublishError {
    PublishError::Write {
        path: path.into(),
        source,
    }
}
