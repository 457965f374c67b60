//! Template context: serializable rendering payload built from a
//! [`PortfolioConfig`] and the generation timestamp.
//!
//! Mappings are flattened into ordered lists here so that display order does
//! not depend on how tera stores objects. Empty optional strings become
//! `None`, which is what the templates test for.

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use folio_core::{PortfolioConfig, Theme};

use crate::error::RenderError;
use crate::palette::Palette;

/// Everything the page templates can see.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext {
    pub identity: IdentityCtx,
    pub social_links: Vec<LinkCtx>,
    pub skills: Vec<SkillCategoryCtx>,
    pub experience: Vec<ExperienceCtx>,
    pub education: Vec<EducationCtx>,
    pub projects: Vec<ProjectCtx>,
    pub certifications: Vec<String>,
    pub languages: Vec<LanguageCtx>,
    pub contact: Vec<ContactCtx>,
    pub facts: Vec<FactCtx>,
    pub style: StyleCtx,
    pub meta: MetaCtx,
}

#[derive(Debug, Clone, Serialize)]
pub struct IdentityCtx {
    pub name: String,
    pub title: String,
    pub bio: Option<String>,
    pub summary: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkCtx {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillCategoryCtx {
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceCtx {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub period: String,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationCtx {
    pub degree: String,
    pub institution: String,
    pub location: Option<String>,
    pub period: String,
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectCtx {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguageCtx {
    pub name: String,
    pub level: String,
}

/// One card in the contact grid. `href` is `None` for plain text items.
#[derive(Debug, Clone, Serialize)]
pub struct ContactCtx {
    pub icon: &'static str,
    pub label: &'static str,
    pub href: Option<String>,
    pub value: String,
}

/// One badge in the "Quick Facts" block.
#[derive(Debug, Clone, Serialize)]
pub struct FactCtx {
    pub icon: &'static str,
    pub text: String,
}

/// Resolved palette plus the palette the in-page toggle switches to.
#[derive(Debug, Clone, Serialize)]
pub struct StyleCtx {
    pub theme: String,
    pub palette: Palette,
    pub toggle_theme: String,
    pub toggle_palette: Palette,
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetaCtx {
    pub generator_version: String,
    pub year: i32,
    /// e.g. `October 16, 2026`.
    pub last_updated: String,
}

impl StyleCtx {
    /// Resolve the configured theme. Unknown themes are rejected, never
    /// defaulted.
    pub fn from_config(config: &PortfolioConfig) -> Result<Self, RenderError> {
        let theme: Theme = config.style.theme()?;
        let toggle = theme.opposite();
        Ok(StyleCtx {
            theme: theme.to_string(),
            palette: Palette::for_theme(theme),
            toggle_theme: toggle.to_string(),
            toggle_palette: Palette::for_theme(toggle),
            primary_color: config.style.primary_color.trim().to_string(),
            secondary_color: config.style.secondary_color.trim().to_string(),
            accent_color: config.style.accent_color.trim().to_string(),
        })
    }
}

impl TemplateContext {
    /// Build a [`TemplateContext`] from a config and the generation time.
    pub fn from_config(
        config: &PortfolioConfig,
        generated_at: DateTime<Utc>,
    ) -> Result<Self, RenderError> {
        let info = &config.personal_info;

        let social_links = config
            .social_links
            .iter()
            .map(|(label, url)| LinkCtx { label: label.clone(), url: url.clone() })
            .collect();

        let skills = config
            .skills
            .iter()
            .map(|(name, skills)| SkillCategoryCtx { name: name.clone(), skills: skills.clone() })
            .collect();

        let experience = config
            .experience
            .iter()
            .map(|e| ExperienceCtx {
                title: e.title.clone(),
                company: e.company.clone(),
                location: present(&e.location),
                period: e.period.clone(),
                description: e.description.clone(),
                achievements: e.achievements.clone(),
            })
            .collect();

        let education = config
            .education
            .iter()
            .map(|e| EducationCtx {
                degree: e.degree.clone(),
                institution: e.institution.clone(),
                location: present(&e.location),
                period: e.period.clone(),
                gpa: present(&e.gpa),
            })
            .collect();

        let projects = config
            .projects
            .iter()
            .map(|p| ProjectCtx {
                name: p.name.clone(),
                description: p.description.clone(),
                technologies: p.technologies.clone(),
                link: present(&p.link),
                github: present(&p.github),
            })
            .collect();

        let languages = config
            .languages
            .iter()
            .map(|l| LanguageCtx { name: l.name.clone(), level: l.level.clone() })
            .collect();

        Ok(TemplateContext {
            identity: IdentityCtx {
                name: info.name.clone(),
                title: info.title.clone(),
                bio: present(&info.bio),
                summary: present(&info.summary),
                photo_url: present(&info.photo_url),
            },
            social_links,
            skills,
            experience,
            education,
            projects,
            certifications: config.certifications.clone(),
            languages,
            contact: contact_items(config),
            facts: quick_facts(config),
            style: StyleCtx::from_config(config)?,
            meta: MetaCtx {
                generator_version: env!("CARGO_PKG_VERSION").to_string(),
                year: generated_at.year(),
                last_updated: generated_at.format("%B %d, %Y").to_string(),
            },
        })
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}

fn present(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.trim().is_empty()).cloned()
}

/// Email, phone, location, website, in that order, skipping absent ones.
fn contact_items(config: &PortfolioConfig) -> Vec<ContactCtx> {
    let info = &config.personal_info;
    let mut items = Vec::new();

    if let Some(email) = present(&info.email) {
        items.push(ContactCtx {
            icon: "📧",
            label: "Email",
            href: Some(format!("mailto:{}", email.trim())),
            value: email,
        });
    }
    if let Some(phone) = present(&info.phone) {
        let dial: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
        items.push(ContactCtx {
            icon: "📱",
            label: "Phone",
            href: Some(format!("tel:{dial}")),
            value: phone,
        });
    }
    if let Some(location) = present(&info.location) {
        items.push(ContactCtx { icon: "📍", label: "Location", href: None, value: location });
    }
    if let Some(website) = present(&info.website) {
        let trimmed = website.trim();
        let href = if trimmed.contains("://") {
            trimmed.to_string()
        } else {
            format!("https://{}", trimmed.trim_start_matches('/'))
        };
        items.push(ContactCtx { icon: "🌐", label: "Website", href: Some(href), value: website });
    }
    items
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

fn quick_facts(config: &PortfolioConfig) -> Vec<FactCtx> {
    let mut facts = Vec::new();
    if let Some(location) = present(&config.personal_info.location) {
        facts.push(FactCtx { icon: "📍", text: location });
    }
    facts.push(FactCtx {
        icon: "🎓",
        text: plural(config.education.len(), "Degree", "Degrees"),
    });
    facts.push(FactCtx {
        icon: "💼",
        text: plural(config.experience.len(), "Position", "Positions"),
    });
    facts.push(FactCtx {
        icon: "🚀",
        text: plural(config.projects.len(), "Project", "Projects"),
    });
    facts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap()
    }

    #[test]
    fn context_fields_populated() {
        let ctx = TemplateContext::from_config(&PortfolioConfig::sample(), at()).unwrap();
        assert_eq!(ctx.identity.name, "Alex Johnson");
        assert_eq!(ctx.social_links[0].label, "GitHub");
        assert_eq!(ctx.skills[4].name, "Data Science");
        assert_eq!(ctx.contact.len(), 4);
        assert_eq!(ctx.style.theme, "dark");
        assert_eq!(ctx.style.toggle_theme, "light");
        assert_eq!(ctx.meta.year, 2024);
        assert_eq!(ctx.meta.last_updated, "March 05, 2024");
    }

    #[test]
    fn empty_optionals_are_dropped() {
        let mut cfg = PortfolioConfig::sample();
        cfg.personal_info.email = Some("  ".to_string());
        cfg.personal_info.phone = None;
        cfg.education[0].gpa = Some(String::new());
        let ctx = TemplateContext::from_config(&cfg, at()).unwrap();
        let labels: Vec<_> = ctx.contact.iter().map(|c| c.label).collect();
        assert_eq!(labels, ["Location", "Website"]);
        assert!(ctx.education[0].gpa.is_none());
    }

    #[test]
    fn contact_hrefs() {
        let ctx = TemplateContext::from_config(&PortfolioConfig::sample(), at()).unwrap();
        assert_eq!(ctx.contact[0].href.as_deref(), Some("mailto:alex.johnson@example.com"));
        assert_eq!(ctx.contact[1].href.as_deref(), Some("tel:+1(555)123-4567"));
        assert!(ctx.contact[2].href.is_none());
        assert_eq!(ctx.contact[3].href.as_deref(), Some("https://www.alexjohnson.dev"));
    }

    #[test]
    fn protocol_relative_website_gets_single_scheme() {
        let mut cfg = PortfolioConfig::sample();
        cfg.personal_info.website = Some("//me.dev".to_string());
        let ctx = TemplateContext::from_config(&cfg, at()).unwrap();
        assert_eq!(ctx.contact[3].href.as_deref(), Some("https://me.dev"));
        assert_eq!(ctx.contact[3].value, "//me.dev");
    }

    #[test]
    fn quick_facts_pluralize() {
        let mut cfg = PortfolioConfig::sample();
        cfg.projects.truncate(1);
        let ctx = TemplateContext::from_config(&cfg, at()).unwrap();
        let texts: Vec<_> = ctx.facts.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(texts, ["San Francisco, CA", "2 Degrees", "2 Positions", "1 Project"]);
    }

    #[test]
    fn unknown_theme_fails() {
        let mut cfg = PortfolioConfig::sample();
        cfg.style.theme = "sepia".to_string();
        let err = TemplateContext::from_config(&cfg, at()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn to_tera_context_exposes_sections() {
        let ctx = TemplateContext::from_config(&PortfolioConfig::sample(), at()).unwrap();
        let tera_ctx = ctx.to_tera_context().expect("context conversion");
        assert_eq!(
            tera_ctx.get("identity").and_then(|v| v.get("name")),
            Some(&tera::Value::from("Alex Johnson"))
        );
        assert!(tera_ctx.get("meta").is_some());
    }
}
