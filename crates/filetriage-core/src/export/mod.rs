/// Report export — CSV and JSON serialization of classified batches.
///
/// The only fallible surface of the crate: classification itself cannot
/// fail, but writing through an arbitrary `io::Write` can.
use std::io::Write;

use serde::Serialize;
use thiserror::Error;

use crate::analysis::BatchSummary;
use crate::model::ClassificationRecord;

/// Errors surfaced while writing a report to a sink.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON write failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The JSON export document: sorted records plus the batch summary.
#[derive(Serialize)]
struct ReportDocument<'a> {
    records: &'a [ClassificationRecord],
    summary: &'a BatchSummary,
}

/// Write records as CSV, one row per record with a header row
/// (`filename`, `extension`, `category`, `priority`).
pub fn write_csv<W: Write>(records: &[ClassificationRecord], writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    tracing::debug!(rows = records.len(), "wrote CSV report");
    Ok(())
}

/// Write the full report (records + summary) as a single pretty-printed
/// JSON document.
pub fn write_json<W: Write>(
    records: &[ClassificationRecord],
    summary: &BatchSummary,
    mut writer: W,
) -> Result<(), ExportError> {
    let document = ReportDocument { records, summary };
    serde_json::to_writer_pretty(&mut writer, &document)?;
    writer.write_all(b"\n")?;
    Ok(())
}
