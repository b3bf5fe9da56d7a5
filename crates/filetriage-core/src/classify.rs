/// Filename classification — extension extraction and record building.
///
/// Classification is pure and total: every input string, however
/// malformed, yields a valid record. There is no error path; unknown or
/// missing extensions land in `Miscellaneous` at the lowest priority.
use compact_str::CompactString;
use rayon::prelude::*;

use crate::model::ClassificationRecord;
use crate::registry;

/// Extract the lowercased extension from a filename.
///
/// Only the *last* dot is significant (`archive.tar.gz` → `gz`). A
/// filename with no dot, or with a trailing dot, has no extension and
/// yields the empty string.
pub fn extract_extension(filename: &str) -> CompactString {
    match filename.rfind('.') {
        Some(pos) if pos + 1 < filename.len() => {
            let mut ext = CompactString::new(&filename[pos + 1..]);
            ext.make_ascii_lowercase();
            ext
        }
        _ => CompactString::default(),
    }
}

/// Classify a single filename into a record.
///
/// Deterministic and side-effect-free: the same filename always yields
/// the same record.
pub fn classify(filename: &str) -> ClassificationRecord {
    let extension = extract_extension(filename);
    let category = registry::lookup(&extension);
    ClassificationRecord::new(CompactString::new(filename), extension, category)
}

/// Classify a batch of filenames, preserving input order.
///
/// One record per input filename. Individual classifications share no
/// mutable state, so the batch is mapped in parallel; rayon's indexed
/// collect keeps the output aligned with the input order.
pub fn classify_batch<S>(filenames: &[S]) -> Vec<ClassificationRecord>
where
    S: AsRef<str> + Sync,
{
    let records: Vec<ClassificationRecord> = filenames
        .par_iter()
        .map(|f| classify(f.as_ref()))
        .collect();
    tracing::debug!(count = records.len(), "classified batch");
    records
}
