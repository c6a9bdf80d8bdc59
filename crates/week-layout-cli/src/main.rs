//! `week-layout` CLI — split, pack, and lay out calendar events from the command line.
//!
//! Events are read as a JSON array of `{id, startTime, endTime, ...}` objects.
//! Any extra fields are passed through to the output untouched.
//!
//! ## Usage
//!
//! ```sh
//! # Split multi-day events into per-day fragments (stdin → stdout)
//! cat events.json | week-layout split
//!
//! # Pack the events of one day-column
//! week-layout pack -i monday.json --pixels-per-hour 48
//!
//! # Lay out the week containing a date
//! week-layout week --date 2024-01-03 -i events.json -o layout.json
//!
//! # Lay out an arbitrary run of days
//! week-layout range --start 2024-01-01 --days 3 -i events.json
//! ```

mod config;

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use week_layout::event::{parse_events_json, JsonEvent};
use week_layout::time::parse_date;

use crate::config::Config;

/// Upper bound on `range --days`: one leap year of columns.
const MAX_DAYS: i64 = 366;

#[derive(Parser)]
#[command(
    name = "week-layout",
    version,
    about = "Lay out calendar events on a weekly grid"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Pixels per hour of the vertical time axis (overrides config)
    #[arg(long, global = true)]
    pixels_per_hour: Option<f64>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Split events crossing midnight into one fragment per day
    Split {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Pack the events of a single day-column into side-by-side slots
    Pack {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Lay out the week containing a date
    Week {
        /// Any date inside the week (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Lay out a run of consecutive days
    Range {
        /// First day of the range (YYYY-MM-DD)
        #[arg(long)]
        start: String,
        /// Number of day-columns (at most 366)
        #[arg(
            long,
            default_value_t = 7,
            value_parser = clap::value_parser!(u32).range(0..=MAX_DAYS)
        )]
        days: u32,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config =
        Config::load_from(cli.config.as_deref()).context("Failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    let layout = config
        .layout(cli.pixels_per_hour)
        .context("Invalid layout configuration")?;

    match cli.command {
        Commands::Split { input, output } => {
            let events = read_events(input.as_deref())?;
            let fragments = week_layout::split_all(events);
            write_json(output.as_deref(), &fragments)?;
        }
        Commands::Pack { input, output } => {
            let events = read_events(input.as_deref())?;
            let positioned = week_layout::pack_day_column(&events, layout.pixels_per_hour);
            write_json(output.as_deref(), &positioned)?;
        }
        Commands::Week {
            date,
            input,
            output,
        } => {
            let date = parse_date(&date).context("Invalid --date")?;
            let first_day = week_layout::week_start(date, config.week_starts_on)
                .context("Invalid --date")?;
            let events = read_events(input.as_deref())?;
            let columns = week_layout::layout_week(events, first_day, &layout);
            write_json(output.as_deref(), &columns)?;
        }
        Commands::Range {
            start,
            days,
            input,
            output,
        } => {
            let first_day = parse_date(&start).context("Invalid --start")?;
            let events = read_events(input.as_deref())?;
            let columns = week_layout::layout_days(events, first_day, days, &layout);
            write_json(output.as_deref(), &columns)?;
        }
    }

    Ok(())
}

fn read_events(path: Option<&str>) -> Result<Vec<JsonEvent>> {
    let json = read_input(path)?;
    let events = parse_events_json(&json).context("Failed to parse events")?;
    tracing::debug!(count = events.len(), "read events");
    Ok(events)
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

fn write_json<T: Serialize>(path: Option<&str>, value: &T) -> Result<()> {
    let mut content =
        serde_json::to_string_pretty(value).context("Failed to serialize layout")?;
    content.push('\n');
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
