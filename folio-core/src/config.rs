//! Config file loading and normalized serialization.
//!
//! # Formats
//!
//! | Extension       | Format |
//! |-----------------|--------|
//! | `.yaml`, `.yml` | YAML   |
//! | anything else   | JSON   |
//!
//! The serialized form is what gets written next to the rendered page, so it
//! always carries every default that was filled in during parsing.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::types::PortfolioConfig;

// ---------------------------------------------------------------------------
// 1. Format
// ---------------------------------------------------------------------------

/// On-disk representation of a [`PortfolioConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigFormat {
    #[default]
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Pick a format from a path's extension.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => ConfigFormat::Yaml,
            _ => ConfigFormat::Json,
        }
    }

    /// Extension used for the sibling `<base>_config.<ext>` file.
    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            ConfigFormat::Yaml => "yaml",
        }
    }
}

// ---------------------------------------------------------------------------
// 2. Parse / serialize
// ---------------------------------------------------------------------------

/// Parse config text. `origin` is only used to annotate errors.
pub fn from_str(
    text: &str,
    format: ConfigFormat,
    origin: &Path,
) -> Result<PortfolioConfig, ConfigError> {
    match format {
        ConfigFormat::Json => serde_json::from_str(text).map_err(|e| ConfigError::ParseJson {
            path: origin.to_path_buf(),
            source: e,
        }),
        ConfigFormat::Yaml => serde_yaml::from_str(text).map_err(|e| ConfigError::ParseYaml {
            path: origin.to_path_buf(),
            source: e,
        }),
    }
}

/// Normalized serialization: JSON is pretty-printed with two-space indent.
/// Both forms end with a newline.
pub fn to_string(config: &PortfolioConfig, format: ConfigFormat) -> Result<String, ConfigError> {
    let mut text = match format {
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        ConfigFormat::Yaml => serde_yaml::to_string(config)?,
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

// ---------------------------------------------------------------------------
// 3. Load
// ---------------------------------------------------------------------------

/// Load a config file, picking the format from its extension.
///
/// Returns `ConfigError::NotFound` if absent, `ConfigError::Io` on any other
/// read failure, `ConfigError::Encoding` for non-UTF-8 bytes, and a parse
/// error (with path + line context) if malformed.
pub fn load_at(path: &Path) -> Result<PortfolioConfig, ConfigError> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound { path: path.to_path_buf() }
        } else {
            ConfigError::Io { path: path.to_path_buf(), source: e }
        }
    })?;
    let contents = String::from_utf8(bytes)
        .map_err(|source| ConfigError::Encoding { path: path.to_path_buf(), source })?;
    from_str(&contents, ConfigFormat::from_path(path), path)
}

/// Where a [`Loaded`] config came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from this file.
    File(PathBuf),
    /// The built-in sample.
    Sample,
}

/// Result of [`load_or_sample`].
#[derive(Debug, Clone)]
pub struct Loaded {
    pub config: PortfolioConfig,
    pub source: ConfigSource,
    /// Format for the serialized copy; follows the input file when there is one.
    pub format: ConfigFormat,
}

/// Load `path` if given and readable, otherwise fall back to
/// [`PortfolioConfig::sample`]. Only malformed input is an error.
pub fn load_or_sample(path: Option<&Path>) -> Result<Loaded, ConfigError> {
    let Some(path) = path else {
        tracing::debug!("no config path given; using built-in sample");
        return Ok(sample());
    };

    match load_at(path) {
        Ok(config) => {
            tracing::debug!("loaded config from {}", path.display());
            Ok(Loaded {
                config,
                source: ConfigSource::File(path.to_path_buf()),
                format: ConfigFormat::from_path(path),
            })
        }
        Err(err @ (ConfigError::NotFound { .. } | ConfigError::Io { .. })) => {
            tracing::warn!("{err}; using built-in sample config");
            Ok(sample())
        }
        Err(err) => Err(err),
    }
}

fn sample() -> Loaded {
    Loaded {
        config: PortfolioConfig::sample(),
        source: ConfigSource::Sample,
        format: ConfigFormat::Json,
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
