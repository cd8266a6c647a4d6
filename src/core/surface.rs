//! Immediate-mode 2D drawing interface the simulation paints through.
//!
//! The browser implementation wraps `CanvasRenderingContext2d`; tests use a
//! recorder. Colors are CSS color strings.

use glam::DVec2;

pub trait DrawSurface {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn set_line_width(&mut self, width: f64);

    /// Stroke a single straight segment with the current line width.
    fn stroke_line(&mut self, from: DVec2, to: DVec2, color: &str);

    /// Fill a circle of `radius` around `center` with a radial gradient that
    /// runs from `inner` at the center to `outer` at the rim.
    fn fill_radial_glow(&mut self, center: DVec2, radius: f64, inner: &str, outer: &str);
}
