/// Console progress display for per-file classification.
///
/// The engine never reports progress itself; this module drives
/// classification one filename at a time and invokes a caller-supplied
/// hook between calls, keeping the display concern out of the engine.
use filetriage_core::classify::classify;
use filetriage_core::model::ClassificationRecord;
use filetriage_core::model::percent::percent_of;

/// Width of the progress bar in glyphs.
pub const BAR_WIDTH: usize = 40;

/// Render a fixed-width progress bar, e.g. `[████░░░░…] 42.5%`.
///
/// `total == 0` renders as fully complete rather than dividing by zero.
pub fn render_bar(current: usize, total: usize) -> String {
    let percent = if total == 0 {
        100.0
    } else {
        percent_of(current as u64, total as u64)
    };
    let filled = ((percent / 100.0) * BAR_WIDTH as f64) as usize;

    let mut bar = String::with_capacity(BAR_WIDTH * 3 + 16);
    bar.push('[');
    for i in 0..BAR_WIDTH {
        bar.push(if i < filled { '█' } else { '░' });
    }
    bar.push_str(&format!("] {percent:.1}%"));
    bar
}

/// Classify filenames one at a time, invoking `on_progress(done, total)`
/// after each record.
///
/// Equivalent to the engine's batch API, but sequential so the hook sees
/// every step in order.
pub fn classify_with_progress<S, F>(filenames: &[S], mut on_progress: F) -> Vec<ClassificationRecord>
where
    S: AsRef<str>,
    F: FnMut(usize, usize),
{
    let total = filenames.len();
    let mut records = Vec::with_capacity(total);
    for (done, filename) in filenames.iter().enumerate() {
        records.push(classify(filename.as_ref()));
        on_progress(done + 1, total);
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_is_empty_at_start() {
        let bar = render_bar(0, 32);
        assert!(bar.starts_with('['));
        assert!(bar.ends_with("] 0.0%"));
        assert!(!bar.contains('█'));
    }

    #[test]
    fn bar_is_full_at_completion() {
        let bar = render_bar(32, 32);
        assert!(bar.ends_with("] 100.0%"));
        assert!(!bar.contains('░'));
        assert_eq!(bar.chars().filter(|&c| c == '█').count(), BAR_WIDTH);
    }

    #[test]
    fn bar_at_half_is_half_filled() {
        let bar = render_bar(16, 32);
        assert!(bar.ends_with("] 50.0%"));
        assert_eq!(bar.chars().filter(|&c| c == '█').count(), BAR_WIDTH / 2);
    }

    /// A zero-length batch must not divide by zero.
    #[test]
    fn bar_with_zero_total_renders_complete() {
        let bar = render_bar(0, 0);
        assert!(bar.ends_with("] 100.0%"));
    }

    /// The hook must fire once per filename, in order, and the records
    /// must match what the engine's batch API produces.
    #[test]
    fn progress_hook_fires_per_file() {
        let names = ["a.txt", "b.png", "c"];
        let mut seen = Vec::new();
        let records = classify_with_progress(&names, |done, total| seen.push((done, total)));

        assert_eq!(seen, vec![(1, 3), (2, 3), (3, 3)]);
        assert_eq!(records, filetriage_core::classify::classify_batch(&names));
    }

    #[test]
    fn progress_over_empty_batch_never_fires() {
        let names: [&str; 0] = [];
        let mut calls = 0;
        let records = classify_with_progress(&names, |_, _| calls += 1);
        assert!(records.is_empty());
        assert_eq!(calls, 0);
    }
}
