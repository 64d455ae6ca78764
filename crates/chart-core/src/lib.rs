// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; telemetry-to-chart pipeline (statistics, line series, axis policy, controller).

pub mod axis;
pub mod chart;
pub mod error;
pub mod render;
pub mod scale;
pub mod series;
pub mod stats;
pub mod telemetry;
pub mod types;

pub use axis::{AxisManager, AxisState, TimelineAxis};
pub use chart::{ChartConfig, ChartController, ChartEntry};
pub use error::{ChartError, ParseError, TelemetryError};
pub use render::{Alignment, AxisId, RecordingTarget, RenderTarget, SeriesHandle};
pub use series::{build_line_points, Series, SeriesData, SeriesType};
pub use stats::{median_of, BoxStats};
pub use telemetry::{DataPoint, SampleValue, TelemetryContainer, TelemetryField, TelemetrySource};
pub use types::{ChartType, Color, FieldId, MemoryScaling, SelectionRange, TelemetryUnit};
