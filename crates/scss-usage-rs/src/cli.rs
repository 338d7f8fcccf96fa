//! CLI argument parsing.

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};

/// Unused SCSS class detector for React projects.
#[derive(Debug, Parser)]
#[command(name = "scss-usage-rs")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory to analyze
    #[arg(default_value = ".")]
    pub directory: Utf8PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub output: OutputFormat,

    /// Glob patterns to exclude from analysis (repeatable)
    #[arg(long)]
    pub ignore: Vec<String>,

    /// Exit non-zero when unused classes are found
    #[arg(long)]
    pub fail_on_unused: bool,

    /// Re-run the analysis whenever a stylesheet or component changes
    #[arg(long)]
    pub watch: bool,

    /// Keep previous output on screen between watch runs
    #[arg(long)]
    pub preserve_watch_output: bool,

    /// Print a timing breakdown to stderr after the run
    #[arg(long)]
    pub timings: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable report (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}
