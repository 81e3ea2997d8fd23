//! `absence` CLI — diff, compress and summarise absence dates from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Which selected days are not recorded yet (JSON array on stdout)
//! absence diff --selected 2025-10-21,2025-10-28 --existing 2025-10-21,2025-10-27
//!
//! # Collapse days into consecutive ranges (JSON array of {start, end})
//! absence ranges --dates 2025-09-01,2025-09-02,2025-09-05
//!
//! # Prose or bulleted message
//! absence message --name "Emma Johnson" --phrase "on holiday" --dates 2025-09-10
//! absence message --style bulleted --name Emma --phrase holiday --dates 2025-09-01,2025-09-02
//!
//! # Upcoming-absence summary for one reason code
//! absence summary --name Emma --reason sick --dates 2025-09-01 --today 2025-08-30
//!
//! # Summary of a recorded absence object ({"YYYY-MM-DD": "reason", ...})
//! absence record -i absences.json --name Emma
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`);
//! `-v` switches the default to `debug`.

use std::collections::BTreeSet;
use std::io::{self, Read};

use absence_engine::{date, AbsenceRecord};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "absence",
    version,
    about = "Absence date diffing and summary messages"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log engine internals at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the selected dates that are not already recorded
    Diff {
        /// Comma-separated YYYY-MM-DD dates picked by the user
        #[arg(long, value_delimiter = ',')]
        selected: Vec<String>,
        /// Comma-separated YYYY-MM-DD dates already on record
        #[arg(long, value_delimiter = ',')]
        existing: Vec<String>,
    },
    /// Collapse dates into consecutive-day ranges
    Ranges {
        /// Comma-separated YYYY-MM-DD dates
        #[arg(long, value_delimiter = ',')]
        dates: Vec<String>,
    },
    /// Render a prose or bulleted absence message
    Message {
        /// Display name of the kid
        #[arg(long)]
        name: String,
        /// Phrase after "is" (prose, e.g. "on holiday") or after "is on" (bulleted, e.g. "holiday")
        #[arg(long)]
        phrase: String,
        /// Comma-separated YYYY-MM-DD dates
        #[arg(long, value_delimiter = ',')]
        dates: Vec<String>,
        #[arg(long, value_enum, default_value_t = Style::Prose)]
        style: Style,
    },
    /// Summarise upcoming absences for one reason code
    Summary {
        /// Display name of the kid
        #[arg(long)]
        name: String,
        /// Reason code ("holiday", "sick", ...)
        #[arg(long)]
        reason: String,
        /// Comma-separated YYYY-MM-DD dates
        #[arg(long, value_delimiter = ',')]
        dates: Vec<String>,
        /// Reference day for dropping past dates (defaults to the local date)
        #[arg(long)]
        today: Option<String>,
    },
    /// Summarise a recorded absence object, one block per reason
    Record {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Display name of the kid
        #[arg(long)]
        name: String,
        /// Reference day for dropping past dates (defaults to the local date)
        #[arg(long)]
        today: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Style {
    Prose,
    Bulleted,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Diff { selected, existing } => {
            let selected = parse_dates(&selected)?;
            let existing = parse_dates(&existing)?;
            let new_dates = absence_engine::compute_new_dates(&selected, &existing);
            let out: Vec<String> = new_dates
                .iter()
                .map(|d| d.format(date::ISO_FORMAT).to_string())
                .collect();
            println!("{}", serde_json::to_string(&out)?);
        }
        Commands::Ranges { dates } => {
            let dates = parse_dates(&dates)?;
            let ranges = absence_engine::compress_to_ranges(&dates);
            println!("{}", serde_json::to_string_pretty(&ranges)?);
        }
        Commands::Message {
            name,
            phrase,
            dates,
            style,
        } => {
            let dates = parse_dates(&dates)?;
            let msg = match style {
                Style::Prose => absence_engine::format_prose_message(&name, &phrase, &dates),
                Style::Bulleted => absence_engine::format_bulleted_message(&name, &phrase, &dates),
            };
            print_message(&msg);
        }
        Commands::Summary {
            name,
            reason,
            dates,
            today,
        } => {
            let dates = parse_dates(&dates)?;
            let today = resolve_today(today.as_deref())?;
            let msg = absence_engine::format_absence_summary(&name, &dates, &reason, today);
            print!("{}", msg);
        }
        Commands::Record { input, name, today } => {
            let json = read_input(input.as_deref())?;
            let record =
                AbsenceRecord::from_json(&json).context("Failed to parse absence record")?;
            let today = resolve_today(today.as_deref())?;
            print!("{}", record.summary(&name, today));
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .init();
}

fn parse_dates(raw: &[String]) -> Result<BTreeSet<NaiveDate>> {
    let non_empty: Vec<&str> = raw
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    date::parse_dates(&non_empty).context("Failed to parse dates")
}

/// The `--today` value, or the local calendar date when absent.
fn resolve_today(today: Option<&str>) -> Result<NaiveDate> {
    match today {
        Some(raw) => date::parse_date(raw).context("Failed to parse --today"),
        None => Ok(Local::now().date_naive()),
    }
}

/// Prose messages carry no trailing newline; bulleted ones already end with one.
fn print_message(msg: &str) {
    if msg.ends_with('\n') {
        print!("{}", msg);
    } else {
        println!("{}", msg);
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
