// vansplit CLI - split email validation reports by contact
// Logging: VANSPLIT_LOG (or RUST_LOG) filter, stderr only.

mod exit_codes;
mod hash;
mod split;
mod util;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vansplit_engine::status::STATUS_TABLE;
use vansplit_engine::SplitError;

use exit_codes::{split_exit_code, EXIT_CONFIG, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "vansplit")]
#[command(about = "Split an email validation report into VALID/INVALID/RISKY contact files")]
#[command(long_version = long_version())]
#[command(version)]
struct Cli {
    /// Settings file (default: <config dir>/vansplit/settings.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Join a validation report to a contacts export and split by status
    #[command(after_help = "\
Examples:
  vansplit split --validation report.csv --contacts contacts.csv
  vansplit split -v report.csv -c contacts.csv --out-dir out --json
  cat report.csv | vansplit split -v - -c contacts.csv
  vansplit split -v report.csv -c contacts.csv --risky-name risky_emailsrdl.csv")]
    Split(split::SplitArgs),

    /// Append a SHA-256 HashedEmail column to a CSV
    #[command(after_help = "\
Examples:
  vansplit hash contacts.csv
  vansplit hash contacts.csv -o hashed.csv --out-dir out
  cat contacts.csv | vansplit hash - --json")]
    Hash(hash::HashArgs),

    /// List the status table used for classification
    Statuses {
        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        " (", env!("VANSPLIT_GIT_HASH"), ")",
        "\ntarget:  ", env!("VANSPLIT_TARGET"),
        "\nengine:  vansplit-engine ", env!("CARGO_PKG_VERSION"),
    )
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Commands::Split(args) => split::cmd_split(args, cli.config),
        Commands::Hash(args) => hash::cmd_hash(args, cli.config),
        Commands::Statuses { json } => cmd_statuses(json),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

/// Log to stderr, filtered by VANSPLIT_LOG or RUST_LOG (default: warn).
fn init_logging() {
    let filter = EnvFilter::try_from_env("VANSPLIT_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn cmd_statuses(json: bool) -> Result<(), CliError> {
    if json {
        let rows: Vec<serde_json::Value> = STATUS_TABLE
            .iter()
            .map(|(status, category)| serde_json::json!({ "status": status, "category": category }))
            .collect();
        let out = serde_json::to_string_pretty(&rows)
            .map_err(|e| CliError::new(exit_codes::EXIT_ERROR, format!("JSON serialization failed: {e}")))?;
        println!("{}", out);
        return Ok(());
    }

    let width = STATUS_TABLE.iter().map(|(s, _)| s.len()).max().unwrap_or(0);
    for (status, category) in STATUS_TABLE {
        println!("{:<width$}  {}", status, category, width = width);
    }
    Ok(())
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn new(code: u8, msg: impl Into<String>) -> Self {
        Self { code, message: msg.into(), hint: None }
    }

    pub fn args(msg: impl Into<String>) -> Self {
        Self::new(EXIT_USAGE, msg)
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self {
            code: EXIT_CONFIG,
            message: msg.into(),
            hint: Some("fix or remove the settings file, or pass --config".to_string()),
        }
    }

    /// Create error from a split failure with the matching exit code.
    pub fn split(err: SplitError) -> Self {
        let code = split_exit_code(&err);
        let hint = match &err {
            SplitError::InputMissing(_) => {
                Some("every input file is required; see --help".to_string())
            }
            SplitError::UnsupportedUpload { .. } => {
                Some("only CSV files are accepted (.csv, or --*-type text/csv)".to_string())
            }
            SplitError::InvalidOutputName(_) => {
                Some("output names must be distinct plain file names; use --out-dir for the directory".to_string())
            }
            _ => None,
        };
        Self { code, message: err.to_string(), hint }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
