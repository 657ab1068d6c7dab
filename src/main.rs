use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rover_fleet::MissionControl;
use rover_fleet::telemetry::init_tracing;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

const USAGE: &str = "rover-fleet requires a single argument, the name of a plain text file \
containing a plateau definition and rover instructions.";

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum ReportFormat {
    /// One "x y heading" line per rover
    #[default]
    Text,
    /// The report as a JSON document
    Json,
}

#[derive(Parser)]
#[command(name = "rover-fleet")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Drive a fleet of plateau rovers and report where they end up", long_about = None)]
struct Cli {
    /// Plain text file with the plateau definition and rover instructions
    files: Vec<PathBuf>,

    /// Report format
    #[arg(long, value_enum, env = "ROVER_FORMAT", default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    json_logs: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    init_tracing(cli.json_logs, level);

    // Exactly one existing file, anything else is a usage error.
    let path = match cli.files.as_slice() {
        [path] if path.is_file() => path,
        _ => {
            println!("{USAGE}");
            return Ok(ExitCode::from(1));
        }
    };

    let mut mission = MissionControl::from_path(path)
        .with_context(|| format!("Failed to load fleet from {}", path.display()))?;
    let report = mission.execute().context("Failed to drive fleet")?;

    match cli.format {
        ReportFormat::Text => print!("{report}"),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(ExitCode::SUCCESS)
}
