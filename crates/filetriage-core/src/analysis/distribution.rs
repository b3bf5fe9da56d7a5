/// Distribution statistics over a classified batch.
///
/// Tallies how many records fell into each category and each priority
/// level. The summary is derived — recomputed per batch, never stored.
use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::percent::percent_of;
use crate::model::{Category, ClassificationRecord};

/// Per-batch distribution statistics.
///
/// Only buckets actually present in the batch appear in the maps, so an
/// empty batch has `total == 0` and empty maps. `BTreeMap` keeps bucket
/// iteration deterministic: categories in priority order, priority
/// levels ascending.
#[derive(Debug, Default, Clone, Serialize)]
pub struct BatchSummary {
    /// Record count per category present in the batch.
    pub per_category: BTreeMap<Category, u64>,
    /// Record count per priority level present in the batch.
    pub per_priority: BTreeMap<u8, u64>,
    /// Total number of records in the batch.
    pub total: u64,
}

impl BatchSummary {
    /// Share of the batch in `category`, 0.0–100.0. Empty batches
    /// report 0.0 for every bucket.
    pub fn category_percent(&self, category: Category) -> f64 {
        let count = self.per_category.get(&category).copied().unwrap_or(0);
        percent_of(count, self.total)
    }

    /// Share of the batch at `priority`, 0.0–100.0.
    pub fn priority_percent(&self, priority: u8) -> f64 {
        let count = self.per_priority.get(&priority).copied().unwrap_or(0);
        percent_of(count, self.total)
    }
}

/// Tally category and priority distributions for a batch.
///
/// A single sequential pass; the input order does not affect the result.
pub fn summarize(records: &[ClassificationRecord]) -> BatchSummary {
    let mut summary = BatchSummary::default();

    for record in records {
        *summary.per_category.entry(record.category).or_insert(0) += 1;
        *summary.per_priority.entry(record.priority).or_insert(0) += 1;
    }
    summary.total = records.len() as u64;
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;

    fn batch(names: &[&str]) -> Vec<ClassificationRecord> {
        names.iter().map(|n| classify(n)).collect()
    }

    /// An empty batch must summarize to zero totals and no buckets,
    /// without any division-by-zero in the percentage accessors.
    #[test]
    fn empty_batch_yields_empty_summary() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert!(summary.per_category.is_empty());
        assert!(summary.per_priority.is_empty());
        assert_eq!(summary.category_percent(Category::Documents), 0.0);
        assert_eq!(summary.priority_percent(1), 0.0);
    }

    #[test]
    fn counts_per_category() {
        let summary = summarize(&batch(&["a.txt", "b.pdf", "c.png", "readme"]));
        assert_eq!(summary.per_category[&Category::Documents], 2);
        assert_eq!(summary.per_category[&Category::Multimedia], 1);
        assert_eq!(summary.per_category[&Category::Miscellaneous], 1);
        assert!(!summary.per_category.contains_key(&Category::Video));
    }

    /// Categories sharing a priority level fold into one priority bucket.
    #[test]
    fn counts_per_priority_fold_media_together() {
        let summary = summarize(&batch(&["a.png", "b.mp3", "c.mp4", "d.txt"]));
        assert_eq!(summary.per_priority[&3], 3);
        assert_eq!(summary.per_priority[&1], 1);
    }

    /// Bucket counts must always sum back to the total, on both axes.
    #[test]
    fn bucket_counts_sum_to_total() {
        let summary = summarize(&batch(&[
            "a.txt", "b.cpp", "c.png", "d.mp3", "e.mp4", "f.zip", "g_misc", "h.docx",
        ]));
        assert_eq!(summary.total, 8);
        assert_eq!(summary.per_category.values().sum::<u64>(), 8);
        assert_eq!(summary.per_priority.values().sum::<u64>(), 8);
    }

    #[test]
    fn percentages_reflect_bucket_shares() {
        let summary = summarize(&batch(&["a.txt", "b.txt", "c.png", "d.zip"]));
        assert_eq!(summary.category_percent(Category::Documents), 50.0);
        assert_eq!(summary.category_percent(Category::Multimedia), 25.0);
        assert_eq!(summary.category_percent(Category::Video), 0.0);
        assert_eq!(summary.priority_percent(1), 50.0);
    }

    /// Input order must not change the summary.
    #[test]
    fn summary_is_order_independent() {
        let forward = summarize(&batch(&["a.txt", "b.png", "c.zip"]));
        let reverse = summarize(&batch(&["c.zip", "b.png", "a.txt"]));
        assert_eq!(forward.per_category, reverse.per_category);
        assert_eq!(forward.per_priority, reverse.per_priority);
        assert_eq!(forward.total, reverse.total);
    }
}
