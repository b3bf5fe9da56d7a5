/// Priority ordering and the combined report entry point.
use crate::model::ClassificationRecord;

use super::distribution::{summarize, BatchSummary};

/// Order records by ascending priority (most urgent first).
///
/// The sort is stable: records sharing a priority keep their relative
/// input order, so "first seen" wins ties. Sorting an already-sorted
/// batch is a no-op.
pub fn sort_by_priority(mut records: Vec<ClassificationRecord>) -> Vec<ClassificationRecord> {
    records.sort_by_key(|r| r.priority);
    records
}

/// Produce the full report for a batch: priority-ordered records plus
/// the distribution summary.
///
/// Both reductions are single passes over the complete batch and run on
/// the calling thread.
pub fn report(records: Vec<ClassificationRecord>) -> (Vec<ClassificationRecord>, BatchSummary) {
    let summary = summarize(&records);
    let sorted = sort_by_priority(records);
    tracing::debug!(total = summary.total, "report assembled");
    (sorted, summary)
}
