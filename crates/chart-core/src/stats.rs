// File: crates/chart-core/src/stats.rs
// Summary: Box-plot statistics (count, extremes, median, quartiles) over a selection range.

use crate::telemetry::TelemetryField;
use crate::types::SelectionRange;

/// Five-number summary of a field within a range.
///
/// With fewer than two samples every statistic is `0.0`; that is the
/// "insufficient data" value, not an error.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoxStats {
    pub sample_count: usize,
    pub minimum: f64,
    pub maximum: f64,
    pub median: f64,
    pub lower_quartile: f64,
    pub upper_quartile: f64,
}

impl BoxStats {
    /// Summarize the resolved sample values of `field` with timestamps in `range`.
    pub fn compute(field: &TelemetryField, range: SelectionRange) -> Self {
        let mut values: Vec<f64> = field.points_in_range(range).iter().map(|p| p.value.resolve()).collect();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Exclusive-median quartiles over already sorted values.
    pub fn from_sorted(values: &[f64]) -> Self {
        let n = values.len();
        if n < 2 {
            return Self { sample_count: n, ..Self::default() };
        }
        Self {
            sample_count: n,
            minimum: values[0],
            maximum: values[n - 1],
            median: median_of(values, 0, n),
            lower_quartile: median_of(values, 0, n / 2),
            upper_quartile: median_of(values, n / 2 + n % 2, n),
        }
    }

    /// Linear rescale of the five statistics; the count is untouched.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            sample_count: self.sample_count,
            minimum: self.minimum * factor,
            maximum: self.maximum * factor,
            median: self.median * factor,
            lower_quartile: self.lower_quartile * factor,
            upper_quartile: self.upper_quartile * factor,
        }
    }
}

/// Median of `values[lo..hi]`: the middle element for odd lengths,
/// the mean of the two central elements for even lengths.
/// Returns `0.0` for an empty sub-range.
pub fn median_of(values: &[f64], lo: usize, hi: usize) -> f64 {
    if hi <= lo {
        return 0.0;
    }
    let len = hi - lo;
    let mid = lo + len / 2;
    if len % 2 == 1 {
        values[mid]
    } else {
        (values[mid - 1] + values[mid]) * 0.5
    }
}
