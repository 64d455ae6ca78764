// File: crates/chart-core/src/series.rs
// Summary: Renderable series model and the sticky-value line builder.
// Notes:
// - Telemetry values hold until the next recorded change, so the line builder
//   emits a flat step before any jump that follows a long gap instead of
//   letting the renderer interpolate a slope across it.

use crate::stats::BoxStats;
use crate::telemetry::TelemetryField;
use crate::types::{Color, MemoryScaling, TelemetryUnit};

/// Default minimum gap (in timestamp units) that triggers a sticky step.
pub const DEFAULT_GAP_THRESHOLD: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
    BoxPlot,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SeriesData {
    Line(Vec<(f64, f64)>),
    Box(BoxStats),
}

/// One series handed to a render target.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub color: Color,
    /// Unit of the vertical axis the series is attached to.
    pub y_axis: TelemetryUnit,
    pub data: SeriesData,
}

impl Series {
    pub fn line(name: impl Into<String>, color: Color, y_axis: TelemetryUnit, points: Vec<(f64, f64)>) -> Self {
        Self { name: name.into(), color, y_axis, data: SeriesData::Line(points) }
    }

    pub fn boxplot(name: impl Into<String>, color: Color, y_axis: TelemetryUnit, stats: BoxStats) -> Self {
        Self { name: name.into(), color, y_axis, data: SeriesData::Box(stats) }
    }

    pub fn series_type(&self) -> SeriesType {
        match self.data {
            SeriesData::Line(_) => SeriesType::Line,
            SeriesData::Box(_) => SeriesType::BoxPlot,
        }
    }

    pub fn points(&self) -> &[(f64, f64)] {
        match &self.data {
            SeriesData::Line(p) => p,
            SeriesData::Box(_) => &[],
        }
    }

    pub fn box_stats(&self) -> Option<&BoxStats> {
        match &self.data {
            SeriesData::Box(s) => Some(s),
            SeriesData::Line(_) => None,
        }
    }
}

/// Displayed value of a single sample for the field's unit.
#[inline]
fn display_value(field: &TelemetryField, raw: f64, scaling: MemoryScaling) -> f64 {
    match field.unit {
        TelemetryUnit::Memory => scaling.scale(raw),
        _ => raw,
    }
}

/// Build the line points for `field` over its full history.
///
/// Before each real sample at least `gap_threshold` after the previous one, a
/// synthetic point at the new timestamp repeats the previous value. The implicit
/// state before the first sample is timestamp 0 with value 0.
pub fn build_line_points(field: &TelemetryField, scaling: MemoryScaling, gap_threshold: f64) -> Vec<(f64, f64)> {
    let points = field.data_points();
    let mut out = Vec::with_capacity(points.len() * 2);

    let mut last_time = 0.0f64;
    let mut last_value = 0.0f64;

    for p in points {
        if p.timestamp - last_time >= gap_threshold {
            out.push((p.timestamp, last_value));
        }
        let value = display_value(field, p.value.resolve(), scaling);
        out.push((p.timestamp, value));

        last_time = p.timestamp;
        last_value = value;
    }
    out
}
