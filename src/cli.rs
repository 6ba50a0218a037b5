//! Command-line interface definition using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::attribution::UnknownPolicy;

/// Normalize Discord CSV and Instagram JSON chat exports and compute
/// per-participant statistics.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats --discord chat.csv --instagram messages.json --mapping mapping.json
    chatstats --discord chat.csv --instagram m1.json --instagram m2.json \\
        --user1-discord 'alice#1234' --user1-instagram alice.ig \\
        --user2-discord 'bob#5678' --user2-instagram bob.ig
    chatstats --discord chat.csv --instagram messages.json --mapping mapping.json \\
        --unknown exclude --format json -o stats.json")]
pub struct Args {
    /// Path to the Discord CSV export
    #[arg(long, value_name = "FILE")]
    pub discord: PathBuf,

    /// Path to an Instagram JSON export (repeat for multiple files)
    #[arg(long = "instagram", value_name = "FILE", required = true)]
    pub instagram: Vec<PathBuf>,

    /// Path to a JSON username mapping
    /// ({"user1": {"discord": ..., "instagram": ...}, "user2": ...})
    #[arg(long, value_name = "FILE")]
    pub mapping: Option<PathBuf>,

    /// user1's Discord author name (alternative to --mapping)
    #[arg(long, value_name = "HANDLE")]
    pub user1_discord: Option<String>,

    /// user1's Instagram sender name (alternative to --mapping)
    #[arg(long, value_name = "HANDLE")]
    pub user1_instagram: Option<String>,

    /// user2's Discord author name (alternative to --mapping)
    #[arg(long, value_name = "HANDLE")]
    pub user2_discord: Option<String>,

    /// user2's Instagram sender name (alternative to --mapping)
    #[arg(long, value_name = "HANDLE")]
    pub user2_instagram: Option<String>,

    /// What to do with authors matching neither participant
    #[arg(long, value_enum, default_value = "fail")]
    pub unknown: UnknownArg,

    /// Path to the statistics output file
    #[arg(short, long, default_value = "stats.csv")]
    pub output: PathBuf,

    /// Statistics output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Also dump the canonical records (JSON unless the path ends in .csv)
    #[arg(long, value_name = "FILE")]
    pub messages: Option<PathBuf>,
}

/// CLI-facing spelling of [`UnknownPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnknownArg {
    /// Abort the batch on an unmatched author
    Fail,
    /// Drop unmatched records from aggregation
    Exclude,
    /// Count unmatched records as user2 (legacy behavior)
    User2,
}

impl From<UnknownArg> for UnknownPolicy {
    fn from(arg: UnknownArg) -> Self {
        match arg {
            UnknownArg::Fail => UnknownPolicy::Fail,
            UnknownArg::Exclude => UnknownPolicy::Exclude,
            UnknownArg::User2 => UnknownPolicy::AssumeUser2,
        }
    }
}

/// Statistics output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated values with a header row
    Csv,
    /// Pretty-printed JSON array
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}
