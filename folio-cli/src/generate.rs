//! Load, optionally edit, then publish.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use colored::Colorize;

use folio_core::{config, ConfigSource, Loaded};
use folio_publish::{publish, PublishOptions, PublishReport, WriteResult};

use crate::edit::edit_personal_info;
use crate::Cli;

pub fn run(cli: Cli, generated_at: DateTime<Utc>) -> Result<()> {
    // With no path (always the case for `--quick`) this is the sample.
    let Loaded { mut config, source, format } = load(cli.config.as_deref())?;

    if cli.edit {
        let stdin = io::stdin();
        edit_personal_info(&mut config, stdin.lock(), io::stdout())
            .context("interactive edit failed")?;
    }

    let options = PublishOptions {
        output: cli.output,
        format,
        generated_at,
        template_dir: cli.templates,
    };
    let report = publish(&config, &options)
        .with_context(|| format!("failed to generate '{}'", options.output.display()))?;

    print_report(&report, &source);
    Ok(())
}

fn load(path: Option<&Path>) -> Result<Loaded> {
    config::load_or_sample(path).with_context(|| match path {
        Some(p) => format!("cannot use config '{}'", p.display()),
        None => "cannot load built-in config".to_string(),
    })
}

fn print_report(report: &PublishReport, source: &ConfigSource) {
    let written = report
        .writes
        .iter()
        .filter(|w| matches!(w, WriteResult::Written { .. }))
        .count();
    let unchanged = report.writes.len() - written;

    println!(
        "{} Portfolio generated: {} ({written} written, {unchanged} unchanged)",
        "✓".green().bold(),
        report.html_path.display()
    );
    for write in &report.writes {
        let marker = match write {
            WriteResult::Written { .. } => "✎",
            WriteResult::Unchanged { .. } => "·",
        };
        println!("  {marker}  {}", write.path().display());
    }
    if let ConfigSource::Sample = source {
        println!("  {}", "(built from the sample profile)".dimmed());
    }

    println!();
    println!("Open {} in your browser to view it.", report.html_path.display());
    println!();
    println!("{}", "Next steps:".bold());
    println!("  1. Edit {} with your own information", report.config_path.display());
    println!("  2. Replace the photo URL with your own image");
    println!("  3. Add your real projects, experience, and skills");
    println!("  4. Customize colors and theme in the config");
    println!("  5. Host it on GitHub Pages or any web server");
}
