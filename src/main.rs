//! filetriage — filename classification and triage reporting.
//!
//! Thin binary entry point. All logic lives in the `filetriage-core`
//! and `filetriage-cli` crates.

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = filetriage_cli::Cli::parse();

    // Initialise structured logging. Logs go to stderr so stdout stays
    // clean for report output.
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("filetriage starting");

    filetriage_cli::run(cli)
}
