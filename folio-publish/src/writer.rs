//! Two-file atomic writer.
//!
//! ## Protocol
//!
//! 1. Normalise line endings to LF.
//! 2. Compare each file with what is already on disk; identical files are
//!    left untouched.
//! 3. Stage every changed file to `<path>.folio.tmp`.
//! 4. Only once everything is staged, rename each temporary into place.
//!
//! A failure in step 3 or 4 removes every temporary that still exists, so a
//! failed publish never leaves a new page next to a stale config.

use std::path::{Path, PathBuf};

use folio_renderer::Rendered;

use crate::error::{write_err, PublishError};
use crate::paths::OutputPaths;

// ---------------------------------------------------------------------------
// Write result
// ---------------------------------------------------------------------------

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (content changed or did not previously exist).
    Written { path: PathBuf },
    /// File was skipped; it already held exactly this content.
    Unchanged { path: PathBuf },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path } | WriteResult::Unchanged { path } => path,
        }
    }
}

// ---------------------------------------------------------------------------
// Staging
// ---------------------------------------------------------------------------

struct Staged {
    target: PathBuf,
    /// `None` when the target is already up to date.
    tmp: Option<PathBuf>,
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut s = path.as_os_str().to_os_string();
    s.push(".folio.tmp");
    PathBuf::from(s)
}

fn is_current(path: &Path, content: &str) -> bool {
    match std::fs::read(path) {
        Ok(existing) => existing == content.as_bytes(),
        Err(_) => false,
    }
}

fn stage(path: &Path, content: &str) -> Result<Staged, PublishError> {
    let normalized = content.replace("\r\n", "\n");

    if is_current(path, &normalized) {
        tracing::debug!("unchanged: {}", path.display());
        return Ok(Staged { target: path.to_path_buf(), tmp: None });
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| write_err(parent, e))?;
    }

    let tmp = tmp_path(path);
    if let Err(e) = std::fs::write(&tmp, normalized) {
        let _ = std::fs::remove_file(&tmp);
        return Err(write_err(path, e));
    }
    Ok(Staged { target: path.to_path_buf(), tmp: Some(tmp) })
}

fn discard(staged: &[Staged]) {
    for tmp in staged.iter().filter_map(|s| s.tmp.as_ref()) {
        let _ = std::fs::remove_file(tmp);
    }
}

// ---------------------------------------------------------------------------
// write_outputs
// ---------------------------------------------------------------------------

/// Write the page and its config copy to `paths`.
///
/// Results are returned page first, config second.
pub fn write_outputs(
    paths: &OutputPaths,
    rendered: &Rendered,
) -> Result<Vec<WriteResult>, PublishError> {
    let contents = [rendered.html.as_str(), rendered.config_text.as_str()];
    let files = paths.all().into_iter().zip(contents);

    let mut staged = Vec::with_capacity(contents.len());
    for (path, content) in files {
        match stage(path, content) {
            Ok(s) => staged.push(s),
            Err(e) => {
                discard(&staged);
                return Err(e);
            }
        }
    }

    let mut results = Vec::with_capacity(staged.len());
    for (i, s) in staged.iter().enumerate() {
        let Some(tmp) = &s.tmp else {
            results.push(WriteResult::Unchanged { path: s.target.clone() });
            continue;
        };
        if let Err(e) = std::fs::rename(tmp, &s.target) {
            discard(&staged[i..]);
            return Err(write_err(&s.target, e));
        }
        tracing::info!("wrote: {}", s.target.display());
        results.push(WriteResult::Written { path: s.target.clone() });
    }
    Ok(results)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
