// File: crates/chart-core/tests/telemetry.rs
// Purpose: Sample ingestion rules, range lookup and the in-memory container.

use chart_core::{
    Color, DataPoint, FieldId, MemoryScaling, SelectionRange, TelemetryContainer, TelemetryError, TelemetryField,
    TelemetrySource, TelemetryUnit,
};

#[test]
fn rejects_out_of_order_and_non_finite() {
    let mut f = TelemetryField::new(FieldId(0), "fps", TelemetryUnit::Fps);
    f.push(DataPoint::scalar(1.0, 60.0)).unwrap();
    f.push(DataPoint::scalar(1.0, 61.0)).unwrap();
    assert_eq!(
        f.push(DataPoint::scalar(0.5, 59.0)),
        Err(TelemetryError::OutOfOrder { previous: 1.0, timestamp: 0.5 })
    );
    assert!(matches!(f.push(DataPoint::scalar(2.0, f64::NAN)), Err(TelemetryError::NonFinite { .. })));
    assert_eq!(f.len(), 2);
}

#[test]
fn value_kind_must_match_unit() {
    let mut dur = TelemetryField::new(FieldId(0), "gpu", TelemetryUnit::Duration);
    assert!(matches!(dur.push(DataPoint::scalar(0.0, 1.0)), Err(TelemetryError::ValueKind { .. })));
    dur.push(DataPoint::interval(0.0, 1.0, 2.0)).unwrap();

    let mut mem = TelemetryField::new(FieldId(1), "heap", TelemetryUnit::Memory);
    assert!(matches!(mem.push(DataPoint::interval(0.0, 1.0, 2.0)), Err(TelemetryError::ValueKind { .. })));
}

#[test]
fn range_lookup_is_inclusive() {
    let mut f = TelemetryField::new(FieldId(0), "v", TelemetryUnit::Value);
    for t in 0..10 {
        f.push(DataPoint::scalar(t as f64, (t * t) as f64)).unwrap();
    }
    let pts = f.points_in_range(SelectionRange::new(3, 5));
    assert_eq!(pts.len(), 3);
    assert_eq!(pts[0].timestamp, 3.0);
    assert_eq!(f.extrema_in_range(SelectionRange::new(3, 5)), (9.0, 25.0));
    assert_eq!(f.extrema_in_range(SelectionRange::new(20, 30)), (0.0, 0.0));
    assert!(f.points_in_range(SelectionRange::new(6, 2)).is_empty());
}

#[test]
fn container_assigns_ids_and_colors() {
    let mut c = TelemetryContainer::new();
    let a = c.add_field("A", TelemetryUnit::Value);
    let b = c.add_field("B", TelemetryUnit::Memory);
    assert_ne!(a, b);
    assert_eq!(c.field(a).unwrap().color, Color::palette(0));
    assert_eq!(c.field(b).unwrap().color, Color::palette(1));
    assert_eq!(c.find_by_title("B").unwrap().id, b);

    c.field_mut(b).unwrap().push(DataPoint::scalar(0.0, 2048.0)).unwrap();
    assert_eq!(c.extrema_in_range(b, SelectionRange::default()), Some((2048.0, 2048.0)));

    assert!(c.remove_field(a).is_some());
    assert!(c.field(a).is_none());
    assert_eq!(c.extrema_in_range(a, SelectionRange::default()), None);
}

#[test]
fn parses_settings_from_strings() {
    assert_eq!("MB".parse::<MemoryScaling>().unwrap(), MemoryScaling::Megabytes);
    assert_eq!("duration".parse::<TelemetryUnit>().unwrap(), TelemetryUnit::Duration);
    assert!("furlongs".parse::<TelemetryUnit>().is_err());
    assert_eq!(MemoryScaling::Gigabytes.scale(1024.0 * 1024.0 * 1024.0), 1.0);
    assert_eq!(SelectionRange::new(10, -5).width(), 15);
}
