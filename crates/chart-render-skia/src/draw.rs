// File: crates/chart-render-skia/src/draw.rs
// Summary: Skia painting of the recorded scene (grid, line chart, box chart, axes).

use chart_core::{Alignment, AxisId, Color, RecordingTarget, SeriesData, TelemetryUnit};
use skia_safe as skia;

use crate::geometry::PlotRect;
use crate::grid::{linspace, ticks};
use crate::theme::Theme;

/// Upper bound on drawn timeline tick marks; denser ticks are skipped.
const MAX_TICKS: usize = 400;

pub(crate) fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn vertical_range(scene: &RecordingTarget, unit: TelemetryUnit) -> Option<(f64, f64)> {
    let axis = scene.axis(AxisId::Vertical(unit))?;
    if !axis.visible {
        return None;
    }
    axis.range
}

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

pub(crate) fn draw_grid(canvas: &skia::Canvas, rect: &PlotRect, theme: &Theme) {
    let paint = stroke(theme.grid, 1.0);
    for x in linspace(rect.left as f64, rect.right as f64, 10) {
        canvas.draw_line((x as f32, rect.top), (x as f32, rect.bottom), &paint);
    }
    for y in linspace(rect.top as f64, rect.bottom as f64, 6) {
        canvas.draw_line((rect.left, y as f32), (rect.right, y as f32), &paint);
    }
}

pub(crate) fn draw_line_chart(canvas: &skia::Canvas, rect: &PlotRect, scene: &RecordingTarget, theme: &Theme) {
    let timeline = scene.axis(AxisId::Timeline);
    let (x_min, x_max) = timeline.and_then(|a| a.range).unwrap_or((0.0, 1.0));

    canvas.save();
    canvas.clip_rect(skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom), skia::ClipOp::Intersect, true);
    for recorded in scene.series.values().filter(|s| s.visible) {
        let SeriesData::Line(points) = &recorded.series.data else { continue };
        let Some((y_min, y_max)) = vertical_range(scene, recorded.series.y_axis) else { continue };
        if points.len() < 2 {
            continue;
        }

        let mut path = skia::Path::new();
        let (x0, y0) = points[0];
        path.move_to((rect.sx(x0, x_min, x_max), rect.sy(y0, y_min, y_max)));
        for &(x, y) in points.iter().skip(1) {
            path.line_to((rect.sx(x, x_min, x_max), rect.sy(y, y_min, y_max)));
        }
        canvas.draw_path(&path, &stroke(to_skia(recorded.series.color), 2.0));
    }
    canvas.restore();

    if let Some(interval) = timeline.and_then(|a| a.tick_interval) {
        let paint = stroke(theme.tick, 1.0);
        for t in ticks(x_min, x_max, interval, MAX_TICKS) {
            let x = rect.sx(t, x_min, x_max);
            canvas.draw_line((x, rect.bottom), (x, rect.bottom + 5.0), &paint);
        }
    }
}

pub(crate) fn draw_box_chart(canvas: &skia::Canvas, rect: &PlotRect, scene: &RecordingTarget, theme: &Theme) {
    let boxes: Vec<_> = scene
        .series
        .values()
        .filter(|s| s.visible)
        .filter_map(|s| match &s.series.data {
            SeriesData::Box(stats) => Some((s, stats)),
            SeriesData::Line(_) => None,
        })
        .collect();
    if boxes.is_empty() {
        return;
    }

    let slot = rect.width() / boxes.len() as f32;
    let half = (slot * 0.3).min(40.0);
    let median = stroke(theme.median, 2.0);

    for (i, (recorded, stats)) in boxes.iter().enumerate() {
        let Some((y_min, y_max)) = vertical_range(scene, recorded.series.y_axis) else { continue };
        let color = recorded.legend_color.unwrap_or(recorded.series.color);
        let sy = |v: f64| rect.sy(v, y_min, y_max);
        let cx = rect.left + slot * (i as f32 + 0.5);

        let outline = stroke(to_skia(color), 1.5);
        canvas.draw_line((cx, sy(stats.minimum)), (cx, sy(stats.maximum)), &outline);
        for cap in [stats.minimum, stats.maximum] {
            canvas.draw_line((cx - half * 0.5, sy(cap)), (cx + half * 0.5, sy(cap)), &outline);
        }

        let top = sy(stats.upper_quartile);
        let bottom = sy(stats.lower_quartile).max(top + 1.0);
        let body = skia::Rect::from_ltrb(cx - half, top, cx + half, bottom);
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(to_skia(Color { a: theme.box_fill_alpha, ..color }));
        canvas.draw_rect(body, &fill);
        canvas.draw_rect(body, &outline);

        let my = sy(stats.median);
        canvas.draw_line((cx - half, my), (cx + half, my), &median);
    }
}

pub(crate) fn draw_axes(
    canvas: &skia::Canvas,
    rect: &PlotRect,
    scene: &RecordingTarget,
    theme: &Theme,
    draw_labels: bool,
    horizontal: AxisId,
) {
    let line = stroke(theme.axis_line, 1.5);
    canvas.draw_line((rect.left, rect.bottom), (rect.right, rect.bottom), &line);

    let visible: Vec<_> = [TelemetryUnit::Time, TelemetryUnit::Value, TelemetryUnit::Fps, TelemetryUnit::Memory]
        .into_iter()
        .filter_map(|u| scene.axis(AxisId::Vertical(u)))
        .filter(|a| a.visible)
        .collect();

    if visible.iter().any(|a| a.alignment == Alignment::Left) {
        canvas.draw_line((rect.left, rect.top), (rect.left, rect.bottom), &line);
    }
    if visible.iter().any(|a| a.alignment == Alignment::Right) {
        canvas.draw_line((rect.right, rect.top), (rect.right, rect.bottom), &line);
    }

    if !draw_labels {
        return;
    }

    let mut text = skia::Paint::default();
    text.set_anti_alias(true);
    text.set_color(theme.axis_label);
    let mut font = skia::Font::default();
    font.set_size(13.0);

    let (mut left_row, mut right_row) = (0.0f32, 0.0f32);
    for axis in &visible {
        let label = match axis.range {
            Some((lo, hi)) => format!("{} [{}, {}]", axis.title, fmt_bound(lo), fmt_bound(hi)),
            None => axis.title.clone(),
        };
        match axis.alignment {
            Alignment::Right => {
                canvas.draw_str(&label, (rect.right - 150.0, rect.top + 14.0 + right_row), &font, &text);
                right_row += 16.0;
            }
            _ => {
                canvas.draw_str(&label, (rect.left + 6.0, rect.top + 14.0 + left_row), &font, &text);
                left_row += 16.0;
            }
        }
    }

    if let Some(axis) = scene.axis(horizontal) {
        let label = match (horizontal, axis.range) {
            (AxisId::Timeline, Some((lo, hi))) => format!("{} [{}, {}]", axis.title, fmt_bound(lo), fmt_bound(hi)),
            _ => axis.title.clone(),
        };
        canvas.draw_str(&label, (rect.left, rect.bottom + 28.0), &font, &text);
    }
}

fn fmt_bound(v: f64) -> String {
    if v.fract() == 0.0 { format!("{v:.0}") } else { format!("{v:.3}") }
}
