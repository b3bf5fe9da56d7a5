/// Percentage helpers for distribution reporting.
///
/// All internal counts are `u64`. Floating point is only used at the
/// display-formatting boundary.

/// Share of `count` in `total`, as a value in 0.0–100.0.
///
/// An empty batch (`total == 0`) yields 0.0 rather than dividing by zero.
pub fn percent_of(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 / total as f64) * 100.0
}

/// Format a percentage with one decimal place, e.g. `"15.6%"`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of_zero_total() {
        assert_eq!(percent_of(0, 0), 0.0);
        assert_eq!(percent_of(5, 0), 0.0);
    }

    #[test]
    fn test_percent_of_whole() {
        assert_eq!(percent_of(32, 32), 100.0);
        assert_eq!(percent_of(0, 10), 0.0);
    }

    #[test]
    fn test_percent_of_fraction() {
        assert_eq!(percent_of(1, 4), 25.0);
        assert_eq!(percent_of(5, 32), 15.625);
    }

    #[test]
    fn test_format_percent_one_decimal() {
        assert_eq!(format_percent(15.625), "15.6%");
        assert_eq!(format_percent(100.0), "100.0%");
        assert_eq!(format_percent(0.0), "0.0%");
    }
}
