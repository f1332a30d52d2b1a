mod entry;
mod menu;
mod prompt;
mod view;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use attendance_core::model::{month_from_ordinal, parse_month};
use attendance_core::{AttendanceRecord, AttendanceService, FileRecordRepository, Month, Target};
use chrono::{Datelike, Local};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "attendance")]
#[command(about = "Track a month of school attendance and plan your leaves", long_about = None)]
struct Cli {
    /// Directory holding the saved record (default: ~/.attendance)
    #[arg(long, global = true, env = "ATTENDANCE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Show debug logs
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only show errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the interactive menu (default)
    Menu,
    /// Record month totals without day-wise marks
    Quick {
        /// Working days this month
        #[arg(value_parser = clap::value_parser!(u32).range(1..=31))]
        total: u32,
        /// Days present
        #[arg(value_parser = clap::value_parser!(u32).range(0..=31))]
        present: u32,
        /// Month name or number (default: current month)
        #[arg(long, short)]
        month: Option<String>,
    },
    /// Show the attendance summary
    Summary,
    /// Check attendance against the 75% minimum
    Status,
    /// Show the day-wise record
    Daily,
    /// Days to attend for 75/80/85% by month end
    Project {
        /// Working days left this month
        #[arg(value_parser = clap::value_parser!(u32).range(0..=31))]
        remaining: u32,
    },
    /// Leaves that can be taken while keeping a target
    Leaves {
        /// Working days left this month
        #[arg(value_parser = clap::value_parser!(u32).range(0..=31))]
        remaining: u32,
        /// Target percentage: 75, 80, 85 or 90
        #[arg(long, short, default_value = "75", value_parser = parse_target)]
        target: Target,
    },
    /// Show the monthly report
    Report,
    /// Delete the saved record
    Reset,
}

fn parse_target(s: &str) -> Result<Target, String> {
    s.trim_end_matches('%')
        .parse::<u32>()
        .ok()
        .and_then(Target::from_percent)
        .ok_or_else(|| format!("'{}' is not one of 75, 80, 85, 90", s))
}

fn resolve_month(arg: Option<&str>) -> Result<Month> {
    match arg {
        Some(s) => parse_month(s).ok_or_else(|| anyhow!("Unknown month: '{}'", s)),
        None => month_from_ordinal(Local::now().month())
            .ok_or_else(|| anyhow!("Could not determine the current month")),
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_env("ATTENDANCE_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize tracing subscriber: {e}"))?;

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let repo = FileRecordRepository::new(cli.data_dir.clone())?;
    let mut service = AttendanceService::open(repo)?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            menu::run(&mut service)?;
        }
        Commands::Quick { total, present, month } => {
            let month = resolve_month(month.as_deref())?;
            let record = AttendanceRecord::quick(month, total, present)?;
            let record = service.replace(record)?;
            if cli.json {
                print_json(record)?;
            } else {
                println!("{}", view::entry_recorded(record));
            }
        }
        Commands::Summary => {
            let summary = service.summary()?;
            if cli.json {
                print_json(&summary)?;
            } else {
                println!("{}", view::summary(&summary));
            }
        }
        Commands::Status => {
            let summary = service.summary()?;
            if cli.json {
                print_json(&summary)?;
            } else {
                println!("{}", view::status(&summary));
            }
        }
        Commands::Daily => {
            let record = service.record()?;
            if cli.json {
                print_json(record)?;
            } else {
                println!("{}", view::daily_record(record));
            }
        }
        Commands::Project { remaining } => {
            let projection = service.projection(remaining)?;
            match (cli.json, projection) {
                (true, projection) => print_json(&projection)?,
                (false, Some(projection)) => println!("{}", view::projection(&projection)),
                (false, None) => println!("○ No remaining days to calculate."),
            }
        }
        Commands::Leaves { remaining, target } => {
            let leaves = service.safe_leaves(remaining, target)?;
            if cli.json {
                print_json(&leaves)?;
            } else {
                println!("{}", view::safe_leaves(&leaves));
            }
        }
        Commands::Report => {
            let summary = service.summary()?;
            if cli.json {
                print_json(&summary)?;
            } else {
                println!("{}", view::report(&summary));
            }
        }
        Commands::Reset => {
            if service.clear()? {
                println!("Saved attendance data deleted.");
            } else {
                println!("No saved attendance data.");
            }
        }
    }
    Ok(())
}
