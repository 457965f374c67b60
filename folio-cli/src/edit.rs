//! Interactive prompt for the `personal_info` block.

use std::io::{self, BufRead, Write};

use folio_core::PortfolioConfig;

enum Slot<'a> {
    Required(&'a mut String),
    Optional(&'a mut Option<String>),
}

impl Slot<'_> {
    fn current(&self) -> &str {
        match self {
            Slot::Required(v) => v.as_str(),
            Slot::Optional(v) => v.as_deref().unwrap_or(""),
        }
    }

    fn set(&mut self, value: String) {
        match self {
            Slot::Required(v) => **v = value,
            Slot::Optional(v) => **v = Some(value),
        }
    }
}

/// Read one line. `None` on EOF.
fn read_answer(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Prompt for name, title, email, phone, location, website and bio.
///
/// A non-blank answer (trimmed) replaces the field; a blank one keeps it.
/// On EOF the remaining fields are left as they are.
pub fn edit_personal_info(
    config: &mut PortfolioConfig,
    mut input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    writeln!(output, "Portfolio Configuration Editor")?;
    writeln!(output, "{}", "=".repeat(40))?;

    let info = &mut config.personal_info;
    let bio_current = info.bio.is_some();
    let mut slots = [
        ("name", Slot::Required(&mut info.name)),
        ("title", Slot::Required(&mut info.title)),
        ("email", Slot::Optional(&mut info.email)),
        ("phone", Slot::Optional(&mut info.phone)),
        ("location", Slot::Optional(&mut info.location)),
        ("website", Slot::Optional(&mut info.website)),
        ("bio", Slot::Optional(&mut info.bio)),
    ];

    for (label, slot) in slots.iter_mut() {
        // bio is too long to echo back
        if *label == "bio" {
            let hint = if bio_current { "press Enter to keep" } else { "press Enter to skip" };
            write!(output, "Your bio ({hint}): ")?;
        } else {
            write!(output, "Your {label} [{}]: ", slot.current())?;
        }
        output.flush()?;

        let Some(answer) = read_answer(&mut input)? else {
            writeln!(output)?;
            tracing::debug!("input closed at '{label}'; keeping remaining fields");
            break;
        };
        let answer = answer.trim();
        if !answer.is_empty() {
            slot.set(answer.to_string());
        }
    }

    writeln!(output)?;
    writeln!(output, "Configuration updated!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::PersonalInfo;

    fn run(config: &mut PortfolioConfig, answers: &str) -> String {
        let mut out = Vec::new();
        edit_personal_info(config, answers.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn answers_overwrite_in_prompt_order() {
        let mut cfg = PortfolioConfig::sample();
        run(
            &mut cfg,
            "Sam Lee\nSRE\nsam@x.test\n+1 555\nOslo\nsam.dev\nHello there\n",
        );
        let info = &cfg.personal_info;
        assert_eq!(info.name, "Sam Lee");
        assert_eq!(info.title, "SRE");
        assert_eq!(info.email.as_deref(), Some("sam@x.test"));
        assert_eq!(info.phone.as_deref(), Some("+1 555"));
        assert_eq!(info.location.as_deref(), Some("Oslo"));
        assert_eq!(info.website.as_deref(), Some("sam.dev"));
        assert_eq!(info.bio.as_deref(), Some("Hello there"));
    }

    #[test]
    fn blank_answers_keep_previous_values() {
        let mut cfg = PortfolioConfig::sample();
        let before = cfg.personal_info.clone();
        run(&mut cfg, "\n   \n\n\t\n\n\n\n");
        assert_eq!(cfg.personal_info, before);
    }

    #[test]
    fn blank_answer_keeps_absent_optional_absent() {
        let mut cfg = PortfolioConfig {
            personal_info: PersonalInfo {
                name: "A".to_string(),
                title: "B".to_string(),
                ..PersonalInfo::default()
            },
            ..PortfolioConfig::default()
        };
        run(&mut cfg, "\n\n\n\n\n\n\n");
        assert!(cfg.personal_info.email.is_none());
        assert!(cfg.personal_info.bio.is_none());
    }

    #[test]
    fn answers_are_trimmed() {
        let mut cfg = PortfolioConfig::sample();
        run(&mut cfg, "  Padded Name  \r\n");
        assert_eq!(cfg.personal_info.name, "Padded Name");
    }

    #[test]
    fn eof_keeps_remaining_fields() {
        let mut cfg = PortfolioConfig::sample();
        let before = cfg.personal_info.clone();
        run(&mut cfg, "New Name\n");
        assert_eq!(cfg.personal_info.name, "New Name");
        assert_eq!(cfg.personal_info.title, before.title);
        assert_eq!(cfg.personal_info.bio, before.bio);
    }

    #[test]
    fn prompts_show_current_values() {
        let mut cfg = PortfolioConfig::sample();
        let name = cfg.personal_info.name.clone();
        let out = run(&mut cfg, "");
        assert!(out.contains(&format!("Your name [{name}]: ")));
        assert!(!out.contains("Your title"), "EOF stops prompting");
    }

    #[test]
    fn bio_prompt_does_not_echo_text() {
        let mut cfg = PortfolioConfig::sample();
        let bio = cfg.personal_info.bio.clone().unwrap();
        let out = run(&mut cfg, "\n\n\n\n\n\n\n");
        assert!(out.contains("Your bio (press Enter to keep): "));
        assert!(!out.contains(&bio));
    }
}
