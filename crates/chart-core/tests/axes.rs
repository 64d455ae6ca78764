// File: crates/chart-core/tests/axes.rs
// Purpose: Per-unit axis finalization, visibility reset, and timeline tick steps.

use chart_core::axis::{display_range, tick_interval};
use chart_core::scale::pow2_ceiling;
use chart_core::{Alignment, AxisManager, MemoryScaling, SelectionRange, TelemetryUnit};

const MB: f64 = 1_048_576.0;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn value_axis_rounds_outward_with_headroom() {
    assert_eq!(display_range(TelemetryUnit::Value, 2.4, 7.2, MemoryScaling::Bytes), (0.0, 9.0));
    assert_eq!(display_range(TelemetryUnit::Value, -3.5, 4.0, MemoryScaling::Bytes), (-4.0, 5.0));
}

#[test]
fn fps_axis_rounds_max_to_five() {
    assert_eq!(display_range(TelemetryUnit::Fps, 28.0, 61.0, MemoryScaling::Bytes), (0.0, 65.0));
    assert_eq!(display_range(TelemetryUnit::Fps, 28.0, 60.0, MemoryScaling::Bytes), (0.0, 60.0));
}

#[test]
fn time_axis_is_capped() {
    let (min, max) = display_range(TelemetryUnit::Time, 0.011, 0.034, MemoryScaling::Bytes);
    assert_eq!(min, 0.0);
    assert!(approx(max, 0.04), "got {max}");

    let (_, capped) = display_range(TelemetryUnit::Time, 0.0, 0.5, MemoryScaling::Bytes);
    assert_eq!(capped, 0.1);
}

#[test]
fn memory_axis_uses_power_of_two_ceiling() {
    assert_eq!(display_range(TelemetryUnit::Memory, MB, 3.0 * MB, MemoryScaling::Megabytes), (0.0, 4.0));
    assert_eq!(display_range(TelemetryUnit::Memory, MB, 4.0 * MB, MemoryScaling::Megabytes), (0.0, 4.0));
    assert_eq!(
        display_range(TelemetryUnit::Memory, 0.0, 3_000_000.0, MemoryScaling::Bytes),
        (0.0, 4_194_304.0)
    );
}

#[test]
fn unit_without_rule_passes_raw_extent() {
    assert_eq!(display_range(TelemetryUnit::Duration, -0.5, 2.5, MemoryScaling::Bytes), (-1.0, 2.5));
}

#[test]
fn lower_bound_never_positive() {
    let cases = [
        (TelemetryUnit::Value, 12.0, 40.0),
        (TelemetryUnit::Fps, 55.5, 144.0),
        (TelemetryUnit::Time, 0.02, 0.05),
        (TelemetryUnit::Memory, 512.0 * MB, 900.0 * MB),
        (TelemetryUnit::Value, -7.25, -1.0),
    ];
    for (unit, min, max) in cases {
        let (lo, _) = display_range(unit, min, max, MemoryScaling::Megabytes);
        assert!(lo <= 0.0, "{unit:?} lower bound {lo}");
    }
}

#[test]
fn pow2_ceiling_edges() {
    assert_eq!(pow2_ceiling(0.0), 1.0);
    assert_eq!(pow2_ceiling(0.3), 1.0);
    assert_eq!(pow2_ceiling(1.0), 1.0);
    assert_eq!(pow2_ceiling(1.5), 2.0);
    assert_eq!(pow2_ceiling(1024.0), 1024.0);
    assert_eq!(pow2_ceiling(1025.0), 2048.0);
}

#[test]
fn tick_interval_steps() {
    assert_eq!(tick_interval(49), 1.0);
    assert_eq!(tick_interval(50), 10.0);
    assert_eq!(tick_interval(299), 10.0);
    assert_eq!(tick_interval(300), 60.0);
}

#[test]
fn recompute_resets_and_accumulates() {
    let mut axes = AxisManager::new();
    axes.recompute(
        vec![(TelemetryUnit::Fps, 40.0, 58.0), (TelemetryUnit::Fps, 30.0, 72.0)],
        MemoryScaling::Megabytes,
        SelectionRange::new(10, 70),
    );
    let fps = axes.axis(TelemetryUnit::Fps).unwrap();
    assert!(fps.visible);
    assert_eq!((fps.minimum, fps.maximum), (30.0, 72.0));
    assert_eq!(fps.display, Some((0.0, 75.0)));
    assert!(!axes.axis(TelemetryUnit::Value).unwrap().visible);

    let timeline = axes.timeline();
    assert_eq!((timeline.min, timeline.max, timeline.tick_interval), (10.0, 70.0, 10.0));

    axes.recompute(Vec::new(), MemoryScaling::Megabytes, SelectionRange::new(10, 70));
    let fps = axes.axis(TelemetryUnit::Fps).unwrap();
    assert!(!fps.visible);
    assert_eq!(fps.minimum, f64::INFINITY);
    assert_eq!(fps.maximum, 0.0);
    assert_eq!(fps.display, None);
}

#[test]
fn fixed_axis_set_and_fallback() {
    let axes = AxisManager::new();
    let units: Vec<_> = axes.axes().iter().map(|a| a.unit).collect();
    assert_eq!(units, vec![TelemetryUnit::Time, TelemetryUnit::Value, TelemetryUnit::Fps, TelemetryUnit::Memory]);
    assert_eq!(axes.axis_unit_for(TelemetryUnit::Duration), TelemetryUnit::Value);
    assert_eq!(axes.axis_unit_for(TelemetryUnit::Memory), TelemetryUnit::Memory);
    assert_eq!(axes.axis(TelemetryUnit::Memory).unwrap().alignment, Alignment::Right);
    assert_eq!(axes.axis(TelemetryUnit::Time).unwrap().alignment, Alignment::Left);
}
