// File: crates/chart-core/src/types.rs
// Summary: Shared types (units, scaling, chart type, selection range, colors, field ids).

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Identifier of a telemetry field inside a [`crate::TelemetrySource`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub u32);

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field#{}", self.0)
    }
}

/// Unit tag carried by every telemetry field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TelemetryUnit {
    Value,
    Memory,
    Fps,
    Time,
    /// Samples are intervals; the rendered value is `end - start`.
    Duration,
}

impl TelemetryUnit {
    pub fn name(&self) -> &'static str {
        match self {
            TelemetryUnit::Value => "value",
            TelemetryUnit::Memory => "memory",
            TelemetryUnit::Fps => "fps",
            TelemetryUnit::Time => "time",
            TelemetryUnit::Duration => "duration",
        }
    }
}

impl FromStr for TelemetryUnit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "value" => Ok(TelemetryUnit::Value),
            "memory" => Ok(TelemetryUnit::Memory),
            "fps" => Ok(TelemetryUnit::Fps),
            "time" => Ok(TelemetryUnit::Time),
            "duration" => Ok(TelemetryUnit::Duration),
            _ => Err(ParseError::Unit(s.to_string())),
        }
    }
}

/// Display unit applied to memory fields. Each step divides by 1024.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MemoryScaling {
    Bytes,
    Kilobytes,
    #[default]
    Megabytes,
    Gigabytes,
}

impl MemoryScaling {
    /// Multiplier turning raw bytes into this unit.
    pub fn factor(&self) -> f64 {
        match self {
            MemoryScaling::Bytes => 1.0,
            MemoryScaling::Kilobytes => 1.0 / 1024.0,
            MemoryScaling::Megabytes => 1.0 / 1024.0 / 1024.0,
            MemoryScaling::Gigabytes => 1.0 / 1024.0 / 1024.0 / 1024.0,
        }
    }

    /// Convert a raw byte count into this unit.
    #[inline]
    pub fn scale(&self, bytes: f64) -> f64 {
        bytes * self.factor()
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            MemoryScaling::Bytes => "B",
            MemoryScaling::Kilobytes => "KB",
            MemoryScaling::Megabytes => "MB",
            MemoryScaling::Gigabytes => "GB",
        }
    }
}

impl FromStr for MemoryScaling {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "b" | "bytes" => Ok(MemoryScaling::Bytes),
            "kb" | "kilobytes" => Ok(MemoryScaling::Kilobytes),
            "mb" | "megabytes" => Ok(MemoryScaling::Megabytes),
            "gb" | "gigabytes" => Ok(MemoryScaling::Gigabytes),
            _ => Err(ParseError::MemoryScaling(s.to_string())),
        }
    }
}

/// Which chart is currently presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChartType {
    #[default]
    Line,
    BoxPlot,
}

impl FromStr for ChartType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "line" => Ok(ChartType::Line),
            "box" | "boxplot" => Ok(ChartType::BoxPlot),
            _ => Err(ParseError::ChartType(s.to_string())),
        }
    }
}

/// Selected timestamp window `[start, end]`, both ends inclusive.
/// Drives statistics and vertical axis extent, never the line series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionRange {
    pub start: i32,
    pub end: i32,
}

impl SelectionRange {
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Absolute window width, computed without overflow.
    pub fn width(&self) -> u64 {
        (self.end as i64 - self.start as i64).unsigned_abs()
    }

    #[inline]
    pub fn contains(&self, timestamp: f64) -> bool {
        timestamp >= self.start as f64 && timestamp <= self.end as f64
    }
}

impl Default for SelectionRange {
    fn default() -> Self {
        Self::new(0, i32::MAX)
    }
}

/// Straight RGBA color; backends convert it to their own color type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Distinct color for the `index`-th field, cycling through a fixed palette.
    pub fn palette(index: usize) -> Self {
        const PALETTE: [Color; 10] = [
            Color::from_rgb(31, 119, 180),
            Color::from_rgb(255, 127, 14),
            Color::from_rgb(44, 160, 44),
            Color::from_rgb(214, 39, 40),
            Color::from_rgb(148, 103, 189),
            Color::from_rgb(140, 86, 75),
            Color::from_rgb(227, 119, 194),
            Color::from_rgb(127, 127, 127),
            Color::from_rgb(188, 189, 34),
            Color::from_rgb(23, 190, 207),
        ];
        PALETTE[index % PALETTE.len()]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::palette(0)
    }
}
