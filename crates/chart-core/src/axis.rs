// File: crates/chart-core/src/axis.rs
// Summary: Per-unit vertical axes, the timeline axis, and the auto-scaling policy.

use log::debug;

use crate::render::{Alignment, AxisId, RenderTarget};
use crate::scale::{pow2_ceiling, round_down_to, round_up_to};
use crate::types::{MemoryScaling, SelectionRange, TelemetryUnit};

/// Upper bound of the time axis regardless of data.
pub const TIME_AXIS_CAP: f64 = 0.1;

/// One vertical axis. Extrema are accumulated from raw (unscaled) entry values.
#[derive(Clone, Debug)]
pub struct AxisState {
    pub unit: TelemetryUnit,
    pub title: &'static str,
    pub alignment: Alignment,
    pub minimum: f64,
    pub maximum: f64,
    pub visible: bool,
    /// Finalized `(min, max)` shown by the backend; `None` while hidden.
    pub display: Option<(f64, f64)>,
}

impl AxisState {
    fn new(unit: TelemetryUnit, title: &'static str) -> Self {
        let alignment = match unit {
            TelemetryUnit::Memory | TelemetryUnit::Fps => Alignment::Right,
            _ => Alignment::Left,
        };
        Self {
            unit,
            title,
            alignment,
            minimum: f64::INFINITY,
            maximum: 0.0,
            visible: false,
            display: None,
        }
    }

    fn reset(&mut self) {
        self.minimum = f64::INFINITY;
        self.maximum = 0.0;
        self.visible = false;
        self.display = None;
    }

    fn widen(&mut self, min: f64, max: f64) {
        self.visible = true;
        self.minimum = self.minimum.min(min);
        self.maximum = self.maximum.max(max);
    }

    pub fn id(&self) -> AxisId {
        AxisId::Vertical(self.unit)
    }
}

/// Horizontal axis of the line chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineAxis {
    pub min: f64,
    pub max: f64,
    pub tick_interval: f64,
}

impl TimelineAxis {
    fn for_range(range: SelectionRange) -> Self {
        Self {
            min: range.start as f64,
            max: range.end as f64,
            tick_interval: tick_interval(range.width()),
        }
    }
}

/// Tick spacing for a selection window of width `w`.
pub fn tick_interval(w: u64) -> f64 {
    if w >= 5 * 60 {
        60.0
    } else if w >= 50 {
        10.0
    } else {
        1.0
    }
}

/// Display range of a visible axis from its accumulated raw extrema.
/// The lower bound is never positive.
pub fn display_range(unit: TelemetryUnit, minimum: f64, maximum: f64, scaling: MemoryScaling) -> (f64, f64) {
    let (min, max) = match unit {
        TelemetryUnit::Value => (round_down_to(minimum, 1.0), round_up_to(maximum + 1.0, 1.0)),
        TelemetryUnit::Fps => (minimum, round_up_to(maximum, 5.0)),
        TelemetryUnit::Time => (minimum, round_up_to(maximum, 0.01).min(TIME_AXIS_CAP)),
        TelemetryUnit::Memory => (scaling.scale(minimum), pow2_ceiling(scaling.scale(maximum))),
        TelemetryUnit::Duration => (minimum, maximum),
    };
    (round_down_to(min, 1.0).min(0.0), max)
}

/// Owns the fixed axis set for the lifetime of a chart.
#[derive(Clone, Debug)]
pub struct AxisManager {
    axes: Vec<AxisState>,
    timeline: TimelineAxis,
}

impl Default for AxisManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AxisManager {
    pub fn new() -> Self {
        let axes = vec![
            AxisState::new(TelemetryUnit::Time, "Time"),
            AxisState::new(TelemetryUnit::Value, "Value"),
            AxisState::new(TelemetryUnit::Fps, "FPS"),
            AxisState::new(TelemetryUnit::Memory, "Memory"),
        ];
        Self { axes, timeline: TimelineAxis::for_range(SelectionRange::default()) }
    }

    /// Announce every axis to a freshly attached target.
    pub fn register<R: RenderTarget + ?Sized>(&self, target: &mut R) {
        target.add_axis(AxisId::Timeline, "Timeline", Alignment::Bottom);
        target.add_axis(AxisId::Category, "Fields", Alignment::Bottom);
        for axis in &self.axes {
            target.add_axis(axis.id(), axis.title, axis.alignment);
        }
    }

    /// Unit of the axis a field with `unit` is drawn against.
    /// Units without a dedicated axis fall back to the first `Value` axis.
    pub fn axis_unit_for(&self, unit: TelemetryUnit) -> TelemetryUnit {
        let mut fallback = None;
        for axis in &self.axes {
            if axis.unit == unit {
                return axis.unit;
            }
            if fallback.is_none() && axis.unit == TelemetryUnit::Value {
                fallback = Some(axis.unit);
            }
        }
        fallback.unwrap_or(TelemetryUnit::Value)
    }

    /// Reset, accumulate the visible entries' `(axis, min, max)` extents, and finalize.
    pub fn recompute<I>(&mut self, extents: I, scaling: MemoryScaling, range: SelectionRange)
    where
        I: IntoIterator<Item = (TelemetryUnit, f64, f64)>,
    {
        for axis in &mut self.axes {
            axis.reset();
        }

        for (unit, min, max) in extents {
            if let Some(axis) = self.axes.iter_mut().find(|a| a.unit == unit) {
                axis.widen(min, max);
            }
        }

        for axis in self.axes.iter_mut().filter(|a| a.visible) {
            axis.display = Some(display_range(axis.unit, axis.minimum, axis.maximum, scaling));
            debug!("axis {:?} -> {:?} (raw {}..{})", axis.unit, axis.display, axis.minimum, axis.maximum);
        }

        self.timeline = TimelineAxis::for_range(range);
    }

    /// Push visibility, ranges and tick interval to the backend.
    pub fn apply<R: RenderTarget + ?Sized>(&self, target: &mut R) {
        for axis in &self.axes {
            target.set_axis_visible(axis.id(), axis.visible);
            if let Some((min, max)) = axis.display {
                target.set_axis_range(axis.id(), min, max);
            }
        }
        target.set_tick_interval(AxisId::Timeline, self.timeline.tick_interval);
        target.set_axis_range(AxisId::Timeline, self.timeline.min, self.timeline.max);
    }

    pub fn axes(&self) -> &[AxisState] {
        &self.axes
    }

    pub fn axis(&self, unit: TelemetryUnit) -> Option<&AxisState> {
        self.axes.iter().find(|a| a.unit == unit)
    }

    pub fn timeline(&self) -> TimelineAxis {
        self.timeline
    }
}
