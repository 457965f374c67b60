use chrono::{DateTime, TimeZone, Utc};
use folio_core::{
    config::{self, ConfigFormat},
    Experience, PersonalInfo, PortfolioConfig, Project, StyleConfig,
};
use folio_renderer::{palette, Renderer};
use rstest::rstest;

fn at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 27, 15, 30, 0).unwrap()
}

fn renderer() -> Renderer {
    Renderer::new().expect("renderer")
}

fn minimal() -> PortfolioConfig {
    PortfolioConfig {
        personal_info: PersonalInfo {
            name: "Robin Park".to_string(),
            title: "Systems Engineer".to_string(),
            ..PersonalInfo::default()
        },
        ..PortfolioConfig::default()
    }
}

fn job(title: &str, achievements: &[&str]) -> Experience {
    Experience {
        title: title.to_string(),
        company: "Acme".to_string(),
        location: None,
        period: "2021 - 2023".to_string(),
        description: "Built things.".to_string(),
        achievements: achievements.iter().map(|s| (*s).to_string()).collect(),
    }
}

fn project(name: &str, link: Option<&str>, github: Option<&str>) -> Project {
    Project {
        name: name.to_string(),
        description: "A project".to_string(),
        technologies: vec!["Rust".to_string()],
        link: link.map(str::to_string),
        github: github.map(str::to_string),
    }
}

// ---------------------------------------------------------------------------
// Identity and escaping
// ---------------------------------------------------------------------------

#[test]
fn document_contains_escaped_name() {
    let mut cfg = minimal();
    cfg.personal_info.name = "Zoë <b>O'Neil</b> & \"Co\"".to_string();
    let html = renderer().generate_markup(&cfg, at()).unwrap();

    let escaped = tera::escape_html(&cfg.personal_info.name);
    assert!(html.contains(&escaped), "escaped name missing");
    assert!(!html.contains("<b>O'Neil</b>"), "raw markup leaked");
}

#[test]
fn hostile_text_never_reaches_markup_raw() {
    let mut cfg = PortfolioConfig::sample();
    let payload = "<script>alert(1)</script>";
    cfg.personal_info.bio = Some(payload.to_string());
    cfg.experience[0].achievements.push(payload.to_string());
    cfg.certifications.push(payload.to_string());
    cfg.skills.insert(payload.to_string(), vec![payload.to_string()]);

    let html = renderer().generate_markup(&cfg, at()).unwrap();
    assert!(!html.contains(payload));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;&#x2F;script&gt;"));
}

#[test]
fn script_urls_are_neutralised() {
    let mut cfg = minimal();
    cfg.social_links.insert("Evil".to_string(), "javascript:alert(1)".to_string());
    cfg.social_links.insert("Quote".to_string(), "https://x.test/\" onmouseover=\"x".to_string());
    cfg.projects.push(project("P", Some(" JAVASCRIPT:alert(2)"), None));
    cfg.personal_info.photo_url = Some("data:image/svg+xml,<svg onload=alert(3)>".to_string());

    let html = renderer().generate_markup(&cfg, at()).unwrap();
    let lower = html.to_lowercase();
    assert!(!lower.contains("javascript:"));
    assert!(!lower.contains("data:image"));
    assert!(!html.contains("\" onmouseover=\""));
    assert!(html.contains("href=\"#\" class=\"social-link\""));
}

// ---------------------------------------------------------------------------
// Palettes
// ---------------------------------------------------------------------------

#[rstest]
#[case("dark", palette::DARK, palette::LIGHT)]
#[case("light", palette::LIGHT, palette::DARK)]
fn stylesheet_uses_only_the_selected_palette(
    #[case] theme: &str,
    #[case] chosen: palette::Palette,
    #[case] other: palette::Palette,
) {
    let mut cfg = minimal();
    cfg.style = StyleConfig { theme: theme.to_string(), ..StyleConfig::default() };
    let css = renderer().generate_styles(&cfg).unwrap();

    assert!(css.contains(chosen.background));
    assert!(!css.contains(other.background));
    assert!(css.contains(chosen.text));
    assert!(!css.contains(other.text));
}

#[test]
fn unknown_theme_is_rejected_not_defaulted() {
    let mut cfg = minimal();
    cfg.style.theme = "purple".to_string();
    let r = renderer();

    let err = r.generate_styles(&cfg).unwrap_err();
    assert!(err.is_validation(), "got: {err}");
    let err = r.render(&cfg, at()).unwrap_err();
    assert!(err.is_validation(), "got: {err}");
}

#[test]
fn light_theme_starts_with_sun_icon() {
    let mut cfg = minimal();
    cfg.style.theme = "light".to_string();
    let html = renderer().generate_markup(&cfg, at()).unwrap();
    assert!(html.contains("<body class=\"theme-light\">"));
    assert!(html.contains("fas fa-sun"));
}

// ---------------------------------------------------------------------------
// Repeated fragments
// ---------------------------------------------------------------------------

#[test]
fn one_skill_tag_per_skill() {
    let cfg = PortfolioConfig::sample();
    let html = renderer().generate_markup(&cfg, at()).unwrap();
    assert_eq!(html.matches("class=\"skill-tag\"").count(), cfg.skill_count());
}

#[test]
fn achievements_list_only_when_present() {
    let mut cfg = minimal();
    cfg.experience = vec![job("Quiet", &[]), job("Loud", &["first win", "second win", "third win"])];
    let html = renderer().generate_markup(&cfg, at()).unwrap();

    assert_eq!(html.matches("<ul class=\"achievements\">").count(), 1);
    assert_eq!(html.matches("<li>").count(), 3);

    let quiet = html.find("Quiet").unwrap();
    let loud = html.find("Loud").unwrap();
    let list = html.find("<ul class=\"achievements\">").unwrap();
    assert!(quiet < loud && loud < list, "list must belong to the second entry");

    let first = html.find("<li>first win</li>").unwrap();
    let second = html.find("<li>second win</li>").unwrap();
    let third = html.find("<li>third win</li>").unwrap();
    assert!(first < second && second < third);
}

#[test]
fn project_links_follow_presence() {
    let mut cfg = minimal();
    cfg.projects = vec![
        project("Linked", Some("https://demo.test"), Some("https://github.com/x/y")),
        project("Bare", None, None),
    ];
    let html = renderer().generate_markup(&cfg, at()).unwrap();

    assert_eq!(html.matches("class=\"project-link\"").count(), 2);
    let bare = html.find("Bare").unwrap();
    assert!(!html[bare..].contains("class=\"project-link\""));
    assert!(!html[bare..].contains("project-links"));
}

#[test]
fn gpa_only_when_non_empty() {
    let mut cfg = PortfolioConfig::sample();
    cfg.education[0].gpa = Some("   ".to_string());
    cfg.education[1].gpa = None;
    let html = renderer().generate_markup(&cfg, at()).unwrap();
    assert!(!html.contains("GPA:"));

    cfg.education[1].gpa = Some("4.0".to_string());
    let html = renderer().generate_markup(&cfg, at()).unwrap();
    assert_eq!(html.matches("GPA: 4.0").count(), 1);
}

#[test]
fn collections_render_in_declared_order() {
    let mut cfg = minimal();
    for label in ["Zulu", "Alpha", "Mike"] {
        cfg.social_links.insert(label.to_string(), format!("https://{label}.test"));
    }
    let html = renderer().generate_markup(&cfg, at()).unwrap();
    let z = html.find("<span>Zulu</span>").unwrap();
    let a = html.find("<span>Alpha</span>").unwrap();
    let m = html.find("<span>Mike</span>").unwrap();
    assert!(z < a && a < m);
}

#[test]
fn empty_sections_are_omitted() {
    let html = renderer().generate_markup(&minimal(), at()).unwrap();
    for absent in [
        "id=\"skills\"",
        "id=\"experience\"",
        "id=\"education\"",
        "id=\"projects\"",
        "id=\"contact\"",
        "class=\"social-links\"",
        "class=\"profile-image\"",
        "Certifications",
        "Languages",
    ] {
        assert!(!html.contains(absent), "unexpected fragment: {absent}");
    }
    assert!(html.contains("id=\"about\""));
}

#[test]
fn sample_renders_every_section() {
    let html = renderer().generate_markup(&PortfolioConfig::sample(), at()).unwrap();
    assert_eq!(html.matches("class=\"social-link\"").count(), 4);
    assert_eq!(html.matches("class=\"cert-tag\"").count(), 4);
    assert_eq!(html.matches("class=\"language-tag\"").count(), 3);
    assert_eq!(html.matches("class=\"contact-item\"").count(), 4);
    assert_eq!(html.matches("class=\"project-card\"").count(), 3);
    assert_eq!(html.matches("class=\"timeline-item\"").count(), 4);
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[rstest]
#[case(ConfigFormat::Json)]
#[case(ConfigFormat::Yaml)]
fn serialized_config_rerenders_identically(#[case] format: ConfigFormat) {
    let r = renderer();
    let cfg = PortfolioConfig::sample();
    let first = r.render_with_format(&cfg, at(), format).unwrap();

    let reparsed = config::from_str(&first.config_text, format, std::path::Path::new("rt"))
        .expect("reparse");
    let second = r.render_with_format(&reparsed, at(), format).unwrap();
    assert_eq!(first.html, second.html);
    assert_eq!(first.config_text, second.config_text);
}

#[test]
fn render_is_idempotent_for_fixed_timestamp() {
    let r = renderer();
    let cfg = PortfolioConfig::sample();
    assert_eq!(r.render(&cfg, at()).unwrap(), r.render(&cfg, at()).unwrap());
}

#[test]
fn renderer_can_be_shared_across_threads() {
    let r = renderer();
    let cfg = PortfolioConfig::sample();
    let expected = r.generate_markup(&cfg, at()).unwrap();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| r.generate_markup(&cfg, at()).unwrap()))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}
