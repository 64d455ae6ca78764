// File: crates/chart-core/src/error.rs
// Summary: Error types for telemetry ingestion, controller lookups and string parsing.

use thiserror::Error;

use crate::types::{FieldId, TelemetryUnit};

/// Rejected sample during ingestion into a [`crate::TelemetryField`].
#[derive(Debug, Error, PartialEq)]
pub enum TelemetryError {
    #[error("timestamp {timestamp} precedes previous sample at {previous}")]
    OutOfOrder { previous: f64, timestamp: f64 },
    #[error("non-finite sample at timestamp {timestamp}")]
    NonFinite { timestamp: f64 },
    #[error("{unit:?} field expects {expected} samples")]
    ValueKind { unit: TelemetryUnit, expected: &'static str },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    #[error("{0} is not provided by the telemetry source")]
    UnknownField(FieldId),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown telemetry unit '{0}'")]
    Unit(String),
    #[error("unknown memory scaling '{0}' (expected b, kb, mb or gb)")]
    MemoryScaling(String),
    #[error("unknown chart type '{0}' (expected line or boxplot)")]
    ChartType(String),
}
