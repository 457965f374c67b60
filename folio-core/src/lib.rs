//! Folio core library: portfolio config types, built-in sample, load/save,
//! validation, errors.
//!
//! - [`types`]: [`PortfolioConfig`] and its sections
//! - [`config`]: file loading, format detection, normalized serialization
//! - [`error`]: [`ConfigError`]
//!
//! Validation lives on [`PortfolioConfig::validate`]; the sample profile on
//! [`PortfolioConfig::sample`].

pub mod config;
mod defaults;
pub mod error;
pub mod types;
mod validate;

pub use config::{ConfigFormat, ConfigSource, Loaded};
pub use error::ConfigError;
pub use types::{
    Education, Experience, Language, PersonalInfo, PortfolioConfig, Project, StyleConfig, Theme,
};
pub use validate::is_css_color;
