/// Frontend orchestration — from parsed arguments to a rendered report.
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;

use filetriage_core::analysis::report;
use filetriage_core::classify::classify_batch;
use filetriage_core::export::{write_csv, write_json};

use crate::cli::{Cli, OutputFormat};
use crate::demo::DEMO_FILENAMES;
use crate::progress::{classify_with_progress, render_bar};
use crate::render;

/// Run one triage pass: pick the input batch, classify it, and emit the
/// report in the requested format.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let filenames: Vec<String> = if cli.demo {
        DEMO_FILENAMES.iter().map(|s| s.to_string()).collect()
    } else if cli.filenames.is_empty() {
        anyhow::bail!("no filenames to classify (pass filenames as arguments, or --demo)");
    } else {
        cli.filenames.clone()
    };

    tracing::info!(count = filenames.len(), "starting triage");

    // The progress bar only makes sense for interactive table output;
    // machine formats classify in one parallel batch.
    let show_progress = !cli.no_progress && cli.format == OutputFormat::Table;
    let records = if show_progress {
        let records = classify_with_progress(&filenames, |done, total| {
            eprint!("\r{}", render_bar(done, total));
        });
        eprintln!();
        records
    } else {
        classify_batch(&filenames)
    };

    let (sorted, summary) = report(records);
    tracing::info!(
        total = summary.total,
        categories = summary.per_category.len(),
        "triage complete"
    );

    let mut sink = open_sink(cli.output.as_deref())?;
    match cli.format {
        OutputFormat::Table => {
            let mut rendered = render::banner();
            rendered.push_str(&render::results_table(&sorted));
            rendered.push_str(&render::statistics_report(&summary));
            sink.write_all(rendered.as_bytes())?;
        }
        OutputFormat::Json => write_json(&sorted, &summary, &mut sink)?,
        OutputFormat::Csv => write_csv(&sorted, &mut sink)?,
    }
    sink.flush()?;

    Ok(())
}

/// Open the report destination: a file when `--output` is given,
/// standard output otherwise.
fn open_sink(path: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create output file {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
