// Recording draw surface shared by the host-side tests.

use crate::sim::DrawSurface;
use glam::DVec2;

#[derive(Default, Debug)]
pub struct Recorder {
    pub clears: Vec<[f64; 4]>,
    pub line_widths: Vec<f64>,
    pub lines: Vec<(DVec2, DVec2, String)>,
    pub glows: Vec<(DVec2, f64, String, String)>,
}

impl DrawSurface for Recorder {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.clears.push([x, y, width, height]);
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_widths.push(width);
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, color: &str) {
        self.lines.push((from, to, color.to_string()));
    }

    fn fill_radial_glow(&mut self, center: DVec2, radius: f64, inner: &str, outer: &str) {
        self.glows
            .push((center, radius, inner.to_string(), outer.to_string()));
    }
}

/// Alpha component of an `rgba(r,g,b,a)` string.
pub fn rgba_alpha(color: &str) -> f64 {
    color
        .trim_end_matches(')')
        .rsplit(',')
        .next()
        .and_then(|a| a.parse().ok())
        .unwrap_or(f64::NAN)
}
