// File: crates/chart-core/src/render.rs
// Summary: Renderer-agnostic capability trait plus an in-memory recording backend.

use std::collections::{BTreeMap, HashMap};

use crate::stats::BoxStats;
use crate::series::{Series, SeriesData};
use crate::types::{ChartType, Color, TelemetryUnit};

/// Opaque handle for a series registered with a render target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeriesHandle(pub u64);

/// Axes a target has to know about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisId {
    /// Horizontal axis of the line chart.
    Timeline,
    /// Horizontal axis of the box chart.
    Category,
    /// Vertical per-unit axis, shared by both charts.
    Vertical(TelemetryUnit),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
    Bottom,
}

/// Operations the chart controller drives on a painting backend.
/// Calls only happen as a consequence of controller mutations.
pub trait RenderTarget {
    fn add_axis(&mut self, axis: AxisId, title: &str, alignment: Alignment);
    fn add_series(&mut self, handle: SeriesHandle, series: Series);
    fn remove_series(&mut self, handle: SeriesHandle);
    fn set_series_visible(&mut self, handle: SeriesHandle, visible: bool);
    fn set_box_values(&mut self, handle: SeriesHandle, stats: BoxStats);
    fn set_legend_color(&mut self, handle: SeriesHandle, color: Color);
    fn set_axis_visible(&mut self, axis: AxisId, visible: bool);
    fn set_axis_range(&mut self, axis: AxisId, min: f64, max: f64);
    fn set_tick_interval(&mut self, axis: AxisId, interval: f64);
    fn set_active_chart(&mut self, chart: ChartType);
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedSeries {
    pub series: Series,
    pub visible: bool,
    pub legend_color: Option<Color>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedAxis {
    pub title: String,
    pub alignment: Alignment,
    pub visible: bool,
    pub range: Option<(f64, f64)>,
    pub tick_interval: Option<f64>,
}

/// Headless target that keeps the latest state pushed by the controller.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    pub series: BTreeMap<SeriesHandle, RecordedSeries>,
    pub axes: HashMap<AxisId, RecordedAxis>,
    pub active_chart: ChartType,
    /// Number of `remove_series` calls received.
    pub removals: usize,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn axis(&self, axis: AxisId) -> Option<&RecordedAxis> {
        self.axes.get(&axis)
    }

    pub fn series(&self, handle: SeriesHandle) -> Option<&RecordedSeries> {
        self.series.get(&handle)
    }
}

impl RenderTarget for RecordingTarget {
    fn add_axis(&mut self, axis: AxisId, title: &str, alignment: Alignment) {
        self.axes.insert(axis, RecordedAxis {
            title: title.to_string(),
            alignment,
            visible: false,
            range: None,
            tick_interval: None,
        });
    }

    fn add_series(&mut self, handle: SeriesHandle, series: Series) {
        self.series.insert(handle, RecordedSeries { series, visible: true, legend_color: None });
    }

    fn remove_series(&mut self, handle: SeriesHandle) {
        self.removals += 1;
        self.series.remove(&handle);
    }

    fn set_series_visible(&mut self, handle: SeriesHandle, visible: bool) {
        if let Some(s) = self.series.get_mut(&handle) {
            s.visible = visible;
        }
    }

    fn set_box_values(&mut self, handle: SeriesHandle, stats: BoxStats) {
        if let Some(s) = self.series.get_mut(&handle) {
            if let SeriesData::Box(current) = &mut s.series.data {
                *current = stats;
            }
        }
    }

    fn set_legend_color(&mut self, handle: SeriesHandle, color: Color) {
        if let Some(s) = self.series.get_mut(&handle) {
            s.legend_color = Some(color);
        }
    }

    fn set_axis_visible(&mut self, axis: AxisId, visible: bool) {
        if let Some(a) = self.axes.get_mut(&axis) {
            a.visible = visible;
        }
    }

    fn set_axis_range(&mut self, axis: AxisId, min: f64, max: f64) {
        if let Some(a) = self.axes.get_mut(&axis) {
            a.range = Some((min, max));
        }
    }

    fn set_tick_interval(&mut self, axis: AxisId, interval: f64) {
        if let Some(a) = self.axes.get_mut(&axis) {
            a.tick_interval = Some(interval);
        }
    }

    fn set_active_chart(&mut self, chart: ChartType) {
        self.active_chart = chart;
    }
}
