// File: crates/chart-render-skia/src/grid.rs
// Summary: Grid and tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Tick positions at multiples of `interval` inside `[min, max]`.
/// Empty when the interval is unusable or would produce more than `limit` ticks.
pub fn ticks(min: f64, max: f64, interval: f64, limit: usize) -> Vec<f64> {
    if !(interval > 0.0) || !(max >= min) || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    let first = (min / interval).ceil();
    let last = (max / interval).floor();
    if last < first || (last - first) as usize >= limit {
        return Vec::new();
    }
    (first as i64..=last as i64).map(|k| k as f64 * interval).collect()
}
