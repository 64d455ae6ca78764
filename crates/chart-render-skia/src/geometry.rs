// File: crates/chart-render-skia/src/geometry.rs
// Summary: Plot-area rectangle and value-to-pixel mapping.

/// Screen margins, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    // wide on both sides: left and right hold per-unit axes
    fn default() -> Self {
        Self::new(88, 88, 24, 56)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    pub fn from_insets(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as f32;
        let top = insets.top as f32;
        let right = (width as f32 - insets.right as f32).max(left + 1.0);
        let bottom = (height as f32 - insets.bottom as f32).max(top + 1.0);
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }

    /// Map `x` in `[min, max]` onto the horizontal pixel span.
    #[inline]
    pub fn sx(&self, x: f64, min: f64, max: f64) -> f32 {
        let span = (max - min).max(1e-9);
        self.left + ((x - min) / span) as f32 * self.width()
    }

    /// Map `y` in `[min, max]` onto the vertical pixel span (larger values higher up).
    #[inline]
    pub fn sy(&self, y: f64, min: f64, max: f64) -> f32 {
        let span = (max - min).max(1e-9);
        self.bottom - ((y - min) / span) as f32 * self.height()
    }
}
