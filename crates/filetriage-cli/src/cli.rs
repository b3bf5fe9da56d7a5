//! CLI argument parsing with clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// filetriage - filename classification and triage reporting
///
/// Classifies a batch of filenames into categories by extension,
/// assigns each a processing priority, and reports the priority-ordered
/// results with distribution statistics. Filenames are taken as given;
/// no file on disk is ever read, moved, or modified.
#[derive(Parser, Debug)]
#[command(name = "filetriage")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Filenames to classify
    pub filenames: Vec<String>,

    /// Use the built-in demonstration dataset instead of arguments
    #[arg(long)]
    pub demo: bool,

    /// Report output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write the report to a file instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// How the finished report is rendered.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Box-drawn console tables
    Table,
    /// Machine-readable JSON document (records + summary)
    Json,
    /// CSV, one row per record
    Csv,
}
