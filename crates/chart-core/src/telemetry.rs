// File: crates/chart-core/src/telemetry.rs
// Summary: Telemetry field model, source trait and a simple in-memory container.

use crate::error::TelemetryError;
use crate::types::{Color, FieldId, SelectionRange, TelemetryUnit};

/// Sample payload, resolved once at ingestion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SampleValue {
    Scalar(f64),
    Interval { start: f64, end: f64 },
}

impl SampleValue {
    /// Scalar used for statistics and extrema; intervals collapse to their length.
    #[inline]
    pub fn resolve(&self) -> f64 {
        match *self {
            SampleValue::Scalar(v) => v,
            SampleValue::Interval { start, end } => end - start,
        }
    }

    fn is_finite(&self) -> bool {
        match *self {
            SampleValue::Scalar(v) => v.is_finite(),
            SampleValue::Interval { start, end } => start.is_finite() && end.is_finite(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataPoint {
    pub timestamp: f64,
    pub value: SampleValue,
}

impl DataPoint {
    pub fn scalar(timestamp: f64, value: f64) -> Self {
        Self { timestamp, value: SampleValue::Scalar(value) }
    }

    pub fn interval(timestamp: f64, start: f64, end: f64) -> Self {
        Self { timestamp, value: SampleValue::Interval { start, end } }
    }
}

/// A named, unit-tagged channel with a time-ascending sample history.
#[derive(Clone, Debug)]
pub struct TelemetryField {
    pub id: FieldId,
    pub title: String,
    pub color: Color,
    pub unit: TelemetryUnit,
    data_points: Vec<DataPoint>,
}

impl TelemetryField {
    pub fn new(id: FieldId, title: impl Into<String>, unit: TelemetryUnit) -> Self {
        Self { id, title: title.into(), color: Color::default(), unit, data_points: Vec::new() }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Append a sample. Timestamps must be non-decreasing and the value kind
    /// must match the unit (`Duration` takes intervals, everything else scalars).
    pub fn push(&mut self, point: DataPoint) -> Result<(), TelemetryError> {
        if !point.timestamp.is_finite() || !point.value.is_finite() {
            return Err(TelemetryError::NonFinite { timestamp: point.timestamp });
        }
        match (self.unit, point.value) {
            (TelemetryUnit::Duration, SampleValue::Scalar(_)) => {
                return Err(TelemetryError::ValueKind { unit: self.unit, expected: "interval" });
            }
            (TelemetryUnit::Duration, SampleValue::Interval { .. }) => {}
            (_, SampleValue::Interval { .. }) => {
                return Err(TelemetryError::ValueKind { unit: self.unit, expected: "scalar" });
            }
            _ => {}
        }
        if let Some(last) = self.data_points.last() {
            if point.timestamp < last.timestamp {
                return Err(TelemetryError::OutOfOrder { previous: last.timestamp, timestamp: point.timestamp });
            }
        }
        self.data_points.push(point);
        Ok(())
    }

    pub fn data_points(&self) -> &[DataPoint] {
        &self.data_points
    }

    pub fn len(&self) -> usize {
        self.data_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data_points.is_empty()
    }

    /// Samples with `start <= timestamp <= end`, located by binary search.
    pub fn points_in_range(&self, range: SelectionRange) -> &[DataPoint] {
        let lo = self.data_points.partition_point(|p| p.timestamp < range.start as f64);
        let hi = self.data_points.partition_point(|p| p.timestamp <= range.end as f64);
        if lo >= hi {
            return &[];
        }
        &self.data_points[lo..hi]
    }

    /// Resolved (min, max) over the range; `(0, 0)` when nothing falls inside.
    pub fn extrema_in_range(&self, range: SelectionRange) -> (f64, f64) {
        let points = self.points_in_range(range);
        if points.is_empty() {
            return (0.0, 0.0);
        }
        points.iter().map(|p| p.value.resolve()).fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        })
    }
}

/// Ordered sample source the chart reads from. Fields are owned by the source;
/// the chart only keeps their ids.
pub trait TelemetrySource {
    fn field(&self, id: FieldId) -> Option<&TelemetryField>;

    fn extrema_in_range(&self, id: FieldId, range: SelectionRange) -> Option<(f64, f64)> {
        self.field(id).map(|f| f.extrema_in_range(range))
    }
}

/// Minimal in-memory source keeping fields in creation order.
#[derive(Default)]
pub struct TelemetryContainer {
    fields: Vec<TelemetryField>,
    next_id: u32,
}

impl TelemetryContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty field; its color is allocated from the palette by creation index.
    pub fn add_field(&mut self, title: impl Into<String>, unit: TelemetryUnit) -> FieldId {
        let id = FieldId(self.next_id);
        let color = Color::palette(self.next_id as usize);
        self.next_id += 1;
        self.fields.push(TelemetryField::new(id, title, unit).with_color(color));
        id
    }

    pub fn field_mut(&mut self, id: FieldId) -> Option<&mut TelemetryField> {
        self.fields.iter_mut().find(|f| f.id == id)
    }

    pub fn find_by_title(&self, title: &str) -> Option<&TelemetryField> {
        self.fields.iter().find(|f| f.title == title)
    }

    pub fn remove_field(&mut self, id: FieldId) -> Option<TelemetryField> {
        let idx = self.fields.iter().position(|f| f.id == id)?;
        Some(self.fields.remove(idx))
    }

    pub fn fields(&self) -> &[TelemetryField] {
        &self.fields
    }
}

impl TelemetrySource for TelemetryContainer {
    fn field(&self, id: FieldId) -> Option<&TelemetryField> {
        self.fields.iter().find(|f| f.id == id)
    }
}
