//! Error types for folio-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from loading, saving, or validating a config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file did not exist at the given path.
    #[error("config not found at {path}")]
    NotFound { path: PathBuf },

    /// Underlying I/O failure other than a missing file.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid UTF-8.
    #[error("config at {path} is not valid UTF-8: {source}")]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Malformed JSON on load; includes line/column context from serde_json.
    #[error("failed to parse config at {path}: {source}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Malformed YAML on load; includes line context from serde_yaml.
    #[error("failed to parse config at {path}: {source}")]
    ParseYaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// JSON serialization error (save path).
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error (save path).
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Structurally valid config with a missing or out-of-range value.
    #[error("invalid config: {field}: {reason}")]
    Validation { field: String, reason: String },
}

impl ConfigError {
    /// `true` for malformed-input errors, including bad encoding.
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            ConfigError::Encoding { .. } | ConfigError::ParseJson { .. } | ConfigError::ParseYaml { .. }
        )
    }

    /// `true` for [`ConfigError::Validation`].
    pub fn is_validation(&self) -> bool {
        matches!(self, ConfigError::Validation { .. })
    }
}

/// Convenience constructor for [`ConfigError::Validation`].
pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> ConfigError {
    ConfigError::Validation {
        field: field.into(),
        reason: reason.into(),
    }
}
