// File: crates/chart-core/src/chart.rs
// Summary: Chart controller; owns per-field entries and drives statistics, series and axes on every mutation.

use log::{debug, trace, warn};

use crate::axis::{AxisManager, AxisState, TimelineAxis};
use crate::error::ChartError;
use crate::render::{RenderTarget, SeriesHandle};
use crate::series::{build_line_points, Series, DEFAULT_GAP_THRESHOLD};
use crate::stats::BoxStats;
use crate::telemetry::{TelemetryField, TelemetrySource};
use crate::types::{ChartType, Color, FieldId, MemoryScaling, SelectionRange, TelemetryUnit};

/// Controller settings; `Default` matches a freshly opened chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartConfig {
    pub chart_type: ChartType,
    pub memory_scaling: MemoryScaling,
    pub range: SelectionRange,
    /// Minimum timestamp gap before the line builder inserts a sticky step.
    pub gap_threshold: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            chart_type: ChartType::Line,
            memory_scaling: MemoryScaling::Megabytes,
            range: SelectionRange::default(),
            gap_threshold: DEFAULT_GAP_THRESHOLD,
        }
    }
}

/// Chart-side state of one tracked field.
#[derive(Clone, Debug)]
pub struct ChartEntry {
    field: FieldId,
    unit: TelemetryUnit,
    axis: TelemetryUnit,
    color: Color,
    min_value: f64,
    max_value: f64,
    stats: BoxStats,
    points: Vec<(f64, f64)>,
    hidden: bool,
    line: SeriesHandle,
    boxplot: SeriesHandle,
}

impl ChartEntry {
    pub fn field(&self) -> FieldId { self.field }
    pub fn unit(&self) -> TelemetryUnit { self.unit }
    /// Unit of the vertical axis this entry is drawn against.
    pub fn axis(&self) -> TelemetryUnit { self.axis }
    pub fn color(&self) -> Color { self.color }
    /// Raw extrema over the current selection range.
    pub fn extrema(&self) -> (f64, f64) { (self.min_value, self.max_value) }
    /// Box statistics over the current range, in display units.
    pub fn stats(&self) -> &BoxStats { &self.stats }
    /// Line points over the full history, in display units.
    pub fn points(&self) -> &[(f64, f64)] { &self.points }
    pub fn is_hidden(&self) -> bool { self.hidden }
    pub fn line_handle(&self) -> SeriesHandle { self.line }
    pub fn box_handle(&self) -> SeriesHandle { self.boxplot }
}

#[inline]
fn box_factor(unit: TelemetryUnit, scaling: MemoryScaling) -> f64 {
    match unit {
        TelemetryUnit::Memory => scaling.factor(),
        _ => 1.0,
    }
}

fn detach<R: RenderTarget>(target: &mut R, entry: &ChartEntry) {
    target.remove_series(entry.line);
    target.remove_series(entry.boxplot);
}

pub struct ChartController<R: RenderTarget> {
    target: R,
    axes: AxisManager,
    entries: Vec<ChartEntry>,
    chart_type: ChartType,
    memory_scaling: MemoryScaling,
    range: SelectionRange,
    gap_threshold: f64,
    next_handle: u64,
}

impl<R: RenderTarget> ChartController<R> {
    pub fn new(target: R) -> Self {
        Self::with_config(target, ChartConfig::default())
    }

    pub fn with_config(mut target: R, config: ChartConfig) -> Self {
        let axes = AxisManager::new();
        axes.register(&mut target);
        target.set_active_chart(config.chart_type);

        let mut chart = Self {
            target,
            axes,
            entries: Vec::new(),
            chart_type: config.chart_type,
            memory_scaling: config.memory_scaling,
            range: config.range,
            gap_threshold: config.gap_threshold,
            next_handle: 0,
        };
        chart.rescale_axes();
        chart
    }

    // ---- field lifecycle ----------------------------------------------------

    /// Track `id` (creating its entry if needed) and make it visible.
    pub fn add_data(&mut self, source: &dyn TelemetrySource, id: FieldId) -> Result<(), ChartError> {
        let idx = self.get_or_create(source, id)?;
        let entry = &mut self.entries[idx];
        if entry.hidden {
            entry.hidden = false;
            self.target.set_series_visible(entry.line, true);
            self.target.set_series_visible(entry.boxplot, true);
        }
        self.rescale_axes();
        Ok(())
    }

    pub fn show_data(&mut self, source: &dyn TelemetrySource, id: FieldId) -> Result<(), ChartError> {
        self.add_data(source, id)
    }

    /// Hide `id` while keeping its materialized series.
    pub fn hide_data(&mut self, source: &dyn TelemetrySource, id: FieldId) -> Result<(), ChartError> {
        let idx = self.get_or_create(source, id)?;
        if !self.entries[idx].hidden {
            self.hide_entry(idx);
            self.rescale_axes();
        }
        Ok(())
    }

    /// Stop tracking `id`. Returns whether an entry was removed.
    pub fn remove_data(&mut self, id: FieldId) -> bool {
        if !self.discard_entry(id) {
            return false;
        }
        self.rescale_axes();
        true
    }

    pub fn clear(&mut self) {
        for entry in &self.entries {
            detach(&mut self.target, entry);
        }
        self.entries.clear();
        self.rescale_axes();
    }

    /// Drop entries whose field the source no longer provides.
    pub fn sync_with_source(&mut self, source: &dyn TelemetrySource) -> Vec<FieldId> {
        let stale: Vec<FieldId> = self
            .entries
            .iter()
            .filter(|e| source.field(e.field).is_none())
            .map(|e| e.field)
            .collect();
        self.prune(&stale);
        if !stale.is_empty() {
            self.rescale_axes();
        }
        stale
    }

    // ---- view settings ------------------------------------------------------

    /// Select a new window; refreshes cached extrema and box statistics, not line series.
    pub fn set_range(&mut self, source: &dyn TelemetrySource, start: i32, end: i32) {
        let range = SelectionRange::new(start, end);
        if self.range == range {
            return;
        }
        debug!("selection range {}..{}", start, end);
        self.range = range;

        let mut stale = Vec::new();
        for entry in &mut self.entries {
            let Some(field) = source.field(entry.field) else {
                stale.push(entry.field);
                continue;
            };
            (entry.min_value, entry.max_value) = source.extrema_in_range(entry.field, range).unwrap_or((0.0, 0.0));
            entry.stats = BoxStats::compute(field, range).scaled(box_factor(entry.unit, self.memory_scaling));
            self.target.set_box_values(entry.boxplot, entry.stats);
        }
        self.prune(&stale);

        self.rescale_axes();
    }

    pub fn set_type(&mut self, chart_type: ChartType) {
        if self.chart_type == chart_type {
            return;
        }
        self.chart_type = chart_type;
        self.target.set_active_chart(chart_type);
        self.rescale_axes();
    }

    /// Change the memory display unit; every memory entry is removed and rebuilt
    /// from raw bytes. Hidden entries stay hidden.
    pub fn set_memory_scaling(&mut self, source: &dyn TelemetrySource, scaling: MemoryScaling) {
        if self.memory_scaling == scaling {
            return;
        }
        debug!("memory scaling {:?} -> {:?}", self.memory_scaling, scaling);
        self.memory_scaling = scaling;

        let rebuild: Vec<(FieldId, bool)> = self
            .entries
            .iter()
            .filter(|e| e.axis == TelemetryUnit::Memory)
            .map(|e| (e.field, e.hidden))
            .collect();

        for &(id, _) in &rebuild {
            self.discard_entry(id);
        }
        for (id, hidden) in rebuild {
            match self.get_or_create(source, id) {
                Ok(idx) if hidden => self.hide_entry(idx),
                Ok(_) => {}
                Err(err) => warn!("dropping chart entry: {err}"),
            }
        }

        self.rescale_axes();
    }

    // ---- accessors ----------------------------------------------------------

    pub fn entries(&self) -> &[ChartEntry] {
        &self.entries
    }

    pub fn entry(&self, id: FieldId) -> Option<&ChartEntry> {
        self.entries.iter().find(|e| e.field == id)
    }

    pub fn axes(&self) -> &[AxisState] {
        self.axes.axes()
    }

    pub fn axis(&self, unit: TelemetryUnit) -> Option<&AxisState> {
        self.axes.axis(unit)
    }

    pub fn timeline(&self) -> TimelineAxis {
        self.axes.timeline()
    }

    pub fn range(&self) -> SelectionRange {
        self.range
    }

    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    pub fn memory_scaling(&self) -> MemoryScaling {
        self.memory_scaling
    }

    pub fn target(&self) -> &R {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut R {
        &mut self.target
    }

    pub fn into_target(self) -> R {
        self.target
    }

    // ---- internals ----------------------------------------------------------

    fn get_or_create(&mut self, source: &dyn TelemetrySource, id: FieldId) -> Result<usize, ChartError> {
        if let Some(idx) = self.entries.iter().position(|e| e.field == id) {
            return Ok(idx);
        }
        let field = source.field(id).ok_or(ChartError::UnknownField(id))?;
        let (min_value, max_value) = source.extrema_in_range(id, self.range).unwrap_or((0.0, 0.0));
        let entry = self.build_entry(field, min_value, max_value);
        trace!("tracking {} '{}' on {:?} axis", id, field.title, entry.axis);
        self.entries.push(entry);
        Ok(self.entries.len() - 1)
    }

    fn build_entry(&mut self, field: &TelemetryField, min_value: f64, max_value: f64) -> ChartEntry {
        let axis = self.axes.axis_unit_for(field.unit);
        let stats = BoxStats::compute(field, self.range).scaled(box_factor(field.unit, self.memory_scaling));
        let points = build_line_points(field, self.memory_scaling, self.gap_threshold);

        let line = self.allocate_handle();
        let boxplot = self.allocate_handle();
        self.target.add_series(line, Series::line(field.title.clone(), field.color, axis, points.clone()));
        self.target.add_series(boxplot, Series::boxplot(field.title.clone(), field.color, axis, stats));

        ChartEntry {
            field: field.id,
            unit: field.unit,
            axis,
            color: field.color,
            min_value,
            max_value,
            stats,
            points,
            hidden: false,
            line,
            boxplot,
        }
    }

    fn allocate_handle(&mut self) -> SeriesHandle {
        let handle = SeriesHandle(self.next_handle);
        self.next_handle += 1;
        handle
    }

    fn hide_entry(&mut self, idx: usize) {
        let entry = &mut self.entries[idx];
        entry.hidden = true;
        self.target.set_series_visible(entry.line, false);
        self.target.set_series_visible(entry.boxplot, false);
    }

    /// Detach and drop the entry for `id` without touching the axes.
    fn discard_entry(&mut self, id: FieldId) -> bool {
        let Some(idx) = self.entries.iter().position(|e| e.field == id) else {
            return false;
        };
        let entry = self.entries.remove(idx);
        detach(&mut self.target, &entry);
        trace!("untracked {}", id);
        true
    }

    fn prune(&mut self, stale: &[FieldId]) {
        for &id in stale {
            warn!("{id} vanished from the telemetry source; dropping its chart entry");
            self.discard_entry(id);
        }
    }

    fn rescale_axes(&mut self) {
        let extents = self
            .entries
            .iter()
            .filter(|e| !e.hidden)
            .map(|e| (e.axis, e.min_value, e.max_value));
        self.axes.recompute(extents, self.memory_scaling, self.range);
        self.axes.apply(&mut self.target);

        for entry in self.entries.iter().filter(|e| !e.hidden) {
            self.target.set_legend_color(entry.boxplot, entry.color);
        }
    }
}
