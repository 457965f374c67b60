//! Semantic checks run before anything is rendered.
//!
//! Colors are validated here rather than escaped later: they land inside a
//! `<style>` element where HTML entities are not decoded, so the only safe
//! treatment is to accept plain CSS color literals and nothing else.

use crate::error::{invalid, ConfigError};
use crate::types::{PortfolioConfig, StyleConfig, Theme};

impl StyleConfig {
    /// Resolve the theme and check the three colors. Everything the
    /// stylesheet needs, nothing more.
    pub fn validate(&self) -> Result<Theme, ConfigError> {
        let theme = self.theme()?;
        check_color("style.primary_color", &self.primary_color)?;
        check_color("style.secondary_color", &self.secondary_color)?;
        check_color("style.accent_color", &self.accent_color)?;
        Ok(theme)
    }
}

impl PortfolioConfig {
    /// Reject configs that cannot produce a well-formed page.
    ///
    /// The error names the first offending field path, e.g. `experience[1].title`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let info = &self.personal_info;
        require("personal_info.name", &info.name)?;
        require("personal_info.title", &info.title)?;

        self.style.validate()?;

        for platform in self.social_links.keys() {
            require("social_links", platform)?;
        }
        for category in self.skills.keys() {
            require("skills", category)?;
        }
        for (i, exp) in self.experience.iter().enumerate() {
            require(&format!("experience[{i}].title"), &exp.title)?;
            require(&format!("experience[{i}].company"), &exp.company)?;
        }
        for (i, edu) in self.education.iter().enumerate() {
            require(&format!("education[{i}].degree"), &edu.degree)?;
            require(&format!("education[{i}].institution"), &edu.institution)?;
        }
        for (i, project) in self.projects.iter().enumerate() {
            require(&format!("projects[{i}].name"), &project.name)?;
        }
        for (i, lang) in self.languages.iter().enumerate() {
            require(&format!("languages[{i}].name"), &lang.name)?;
        }
        Ok(())
    }
}

fn require(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(invalid(field, "must not be empty"));
    }
    Ok(())
}

fn check_color(field: &str, value: &str) -> Result<(), ConfigError> {
    if is_css_color(value) {
        Ok(())
    } else {
        Err(invalid(field, format!("'{value}' is not a CSS color literal")))
    }
}

/// `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb()/rgba()/hsl()/hsla()` with
/// numeric arguments, or a bare keyword such as `rebeccapurple`.
pub fn is_css_color(value: &str) -> bool {
    let v = value.trim();
    if let Some(hex) = v.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }

    let lower = v.to_ascii_lowercase();
    for func in ["rgba(", "rgb(", "hsla(", "hsl("] {
        if let Some(args) = lower.strip_prefix(func) {
            let Some(args) = args.strip_suffix(')') else {
                return false;
            };
            return !args.trim().is_empty()
                && args
                    .chars()
                    .all(|c| c.is_ascii_digit() || matches!(c, '.' | '%' | ',' | '/' | '-' | ' '));
        }
    }

    !v.is_empty() && v.chars().all(|c| c.is_ascii_alphabetic())
}
