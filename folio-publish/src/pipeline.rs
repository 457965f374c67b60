//! Render-then-write orchestration.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use folio_core::{ConfigFormat, PortfolioConfig};
use folio_renderer::Renderer;

use crate::error::PublishError;
use crate::paths::OutputPaths;
use crate::writer::{write_outputs, WriteResult};

/// Inputs for one publish run.
#[derive(Debug, Clone)]
pub struct PublishOptions {
    /// Requested page path; see [`OutputPaths::for_output`].
    pub output: PathBuf,
    /// Format of the sibling config copy.
    pub format: ConfigFormat,
    /// Timestamp stamped into the footer.
    pub generated_at: DateTime<Utc>,
    /// Optional directory of `.tera` overrides.
    pub template_dir: Option<PathBuf>,
}

impl PublishOptions {
    pub fn new(output: impl Into<PathBuf>, generated_at: DateTime<Utc>) -> Self {
        PublishOptions {
            output: output.into(),
            format: ConfigFormat::default(),
            generated_at,
            template_dir: None,
        }
    }
}

/// What [`publish`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    pub html_path: PathBuf,
    pub config_path: PathBuf,
    /// Per-file outcome, page first.
    pub writes: Vec<WriteResult>,
}

/// Validate and render `config`, then write the page and its config copy.
///
/// Nothing touches the filesystem until rendering has succeeded, so an
/// invalid config leaves any previous output in place.
pub fn publish(
    config: &PortfolioConfig,
    options: &PublishOptions,
) -> Result<PublishReport, PublishError> {
    let renderer = match &options.template_dir {
        Some(dir) => Renderer::with_template_dir(dir)?,
        None => Renderer::new()?,
    };
    let rendered = renderer.render_with_format(config, options.generated_at, options.format)?;

    let paths = OutputPaths::for_output(&options.output, rendered.config_format);
    let writes = write_outputs(&paths, &rendered)?;

    tracing::info!(
        html = %paths.html.display(),
        config = %paths.config.display(),
        "published portfolio"
    );
    Ok(PublishReport {
        html_path: paths.html,
        config_path: paths.config,
        writes,
    })
}
