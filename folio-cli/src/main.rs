//! Folio: static portfolio page generator.
//!
//! # Usage
//!
//! ```text
//! folio [--config <file>] [--output <file>] [--edit] [--templates <dir>] [--date YYYY-MM-DD]
//! folio --quick [--output <file>]
//! ```

mod edit;
mod generate;

use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::Parser;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    version,
    about = "Generate a personal portfolio website",
    long_about = None,
)]
pub struct Cli {
    /// Path to a JSON or YAML configuration file.
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output HTML filename; the config copy is written next to it.
    #[arg(long, short = 'o', value_name = "FILE", default_value = "portfolio.html")]
    pub output: PathBuf,

    /// Edit personal info interactively before generating.
    #[arg(long, short = 'e')]
    pub edit: bool,

    /// Generate straight from the built-in sample profile.
    #[arg(long, short = 'q', conflicts_with_all = ["config", "edit"])]
    pub quick: bool,

    /// Directory of `.tera` files overriding the built-in templates.
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Date shown as "Last updated" (defaults to today, UTC).
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,
}

impl Cli {
    /// The single clock reading used for the whole run.
    fn generated_at(&self) -> DateTime<Utc> {
        match self.date {
            Some(date) => date.and_time(NaiveTime::MIN).and_utc(),
            None => Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let generated_at = cli.generated_at();
    generate::run(cli, generated_at)
}
