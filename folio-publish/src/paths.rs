//! Where a rendered page and its config copy land on disk.

use std::path::{Path, PathBuf};

use folio_core::ConfigFormat;

/// The two files produced by one publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub html: PathBuf,
    pub config: PathBuf,
}

impl OutputPaths {
    /// Derive both paths from the requested output.
    ///
    /// `site/me.html` → `site/me.html` + `site/me_config.json`.
    /// `site/me` → `site/me.html` + `site/me_config.json`.
    pub fn for_output(output: &Path, format: ConfigFormat) -> OutputPaths {
        let (html, base) = if has_html_extension(output) {
            (output.to_path_buf(), output.with_extension(""))
        } else {
            (append_extension(output, "html"), output.to_path_buf())
        };

        let stem = base
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "portfolio".to_string());
        let config = base.with_file_name(format!("{stem}_config.{}", format.extension()));

        OutputPaths { html, config }
    }

    /// Both paths, page first.
    pub fn all(&self) -> [&Path; 2] {
        [self.html.as_path(), self.config.as_path()]
    }
}

fn has_html_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("html") || e.eq_ignore_ascii_case("htm"))
}

// `with_extension` would clobber `me.v2`; keep the dot-suffix and append.
fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut s = path.as_os_str().to_os_string();
    s.push(".");
    s.push(ext);
    PathBuf::from(s)
}
