// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia CPU raster backend; records controller calls into a scene and paints it to PNG.

use anyhow::Result;
use chart_core::{
    Alignment, AxisId, BoxStats, ChartType, Color, RecordingTarget, RenderTarget, Series, SeriesHandle,
};
use log::debug;
use skia_safe as skia;

mod draw;
pub mod geometry;
pub mod grid;
pub mod theme;

pub use geometry::{Insets, PlotRect};
pub use theme::Theme;

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Axis titles and bounds; off for pixel-stable output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
        }
    }
}

/// Render target painting with Skia. Scene state is kept by a [`RecordingTarget`];
/// nothing is drawn until one of the `render_*` methods is called.
#[derive(Default)]
pub struct SkiaTarget {
    scene: RecordingTarget,
}

impl SkiaTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scene(&self) -> &RecordingTarget {
        &self.scene
    }

    /// Paint the active chart and encode it as PNG.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);

        let rect = PlotRect::from_insets(opts.width, opts.height, &opts.insets);
        draw::draw_grid(canvas, &rect, &opts.theme);

        let horizontal = match self.scene.active_chart {
            ChartType::Line => {
                draw::draw_line_chart(canvas, &rect, &self.scene, &opts.theme);
                AxisId::Timeline
            }
            ChartType::BoxPlot => {
                draw::draw_box_chart(canvas, &rect, &self.scene, &opts.theme);
                AxisId::Category
            }
        };
        draw::draw_axes(canvas, &rect, &self.scene, &opts.theme, opts.draw_labels, horizontal);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        debug!("rendered {:?} chart, {} bytes", self.scene.active_chart, data.len());
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a PNG file at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

impl RenderTarget for SkiaTarget {
    fn add_axis(&mut self, axis: AxisId, title: &str, alignment: Alignment) {
        self.scene.add_axis(axis, title, alignment);
    }

    fn add_series(&mut self, handle: SeriesHandle, series: Series) {
        self.scene.add_series(handle, series);
    }

    fn remove_series(&mut self, handle: SeriesHandle) {
        self.scene.remove_series(handle);
    }

    fn set_series_visible(&mut self, handle: SeriesHandle, visible: bool) {
        self.scene.set_series_visible(handle, visible);
    }

    fn set_box_values(&mut self, handle: SeriesHandle, stats: BoxStats) {
        self.scene.set_box_values(handle, stats);
    }

    fn set_legend_color(&mut self, handle: SeriesHandle, color: Color) {
        self.scene.set_legend_color(handle, color);
    }

    fn set_axis_visible(&mut self, axis: AxisId, visible: bool) {
        self.scene.set_axis_visible(axis, visible);
    }

    fn set_axis_range(&mut self, axis: AxisId, min: f64, max: f64) {
        self.scene.set_axis_range(axis, min, max);
    }

    fn set_tick_interval(&mut self, axis: AxisId, interval: f64) {
        self.scene.set_tick_interval(axis, interval);
    }

    fn set_active_chart(&mut self, chart: ChartType) {
        self.scene.set_active_chart(chart);
    }
}
