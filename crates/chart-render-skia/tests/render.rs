// File: crates/chart-render-skia/tests/render.rs
// Purpose: End-to-end render of both chart types through the controller, decoded back with `image`.

use chart_core::{AxisId, ChartController, ChartType, DataPoint, TelemetryContainer, TelemetryUnit};
use chart_render_skia::{RenderOptions, SkiaTarget};

fn sample_source() -> TelemetryContainer {
    let mut source = TelemetryContainer::new();
    let fps = source.add_field("FPS", TelemetryUnit::Fps);
    let heap = source.add_field("Heap", TelemetryUnit::Memory);
    for i in 0..40 {
        let t = i as f64 * 0.5;
        source.field_mut(fps).unwrap().push(DataPoint::scalar(t, 50.0 + (i % 7) as f64)).unwrap();
        source.field_mut(heap).unwrap().push(DataPoint::scalar(t, (200 + i) as f64 * 1_048_576.0)).unwrap();
    }
    source
}

fn opts() -> RenderOptions {
    RenderOptions { width: 320, height: 200, draw_labels: false, ..RenderOptions::default() }
}

#[test]
fn renders_line_and_box_charts() {
    let source = sample_source();
    let mut chart = ChartController::new(SkiaTarget::new());
    for field in source.fields() {
        chart.add_data(&source, field.id).expect("known field");
    }
    chart.set_range(&source, 0, 20);

    let line = chart.target().render_to_png_bytes(&opts()).expect("line render");
    assert!(line.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&line).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (320, 200));
    assert_eq!(img.get_pixel(0, 0).0[3], 255);

    chart.set_type(ChartType::BoxPlot);
    assert_eq!(chart.target().scene().active_chart, ChartType::BoxPlot);
    let boxes = chart.target().render_to_png_bytes(&opts()).expect("box render");
    let img = image::load_from_memory(&boxes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (320, 200));
    assert_ne!(line, boxes);
}

#[test]
fn scene_mirrors_controller_state() {
    let source = sample_source();
    let mut chart = ChartController::new(SkiaTarget::new());
    let heap = source.find_by_title("Heap").unwrap().id;
    chart.add_data(&source, heap).unwrap();

    let axis = chart.target().scene().axis(AxisId::Vertical(TelemetryUnit::Memory)).unwrap();
    assert!(axis.visible);
    assert_eq!(axis.title, "Memory");
    assert_eq!(axis.range, Some((0.0, 256.0)));

    chart.remove_data(heap);
    assert!(chart.target().scene().series.is_empty());
}

#[test]
fn writes_png_file() {
    let chart = ChartController::new(SkiaTarget::new());
    let out = std::path::PathBuf::from("target/test_out/empty_chart.png");
    chart.target().render_to_png(&opts(), &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}
