//! Canvas metrics in CSS and device pixels.

use super::constants::MAX_DPR;
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub css_width: f64,
    pub css_height: f64,
    pub dpr: f64,
    /// Backing-store width in device pixels.
    pub width: f64,
    /// Backing-store height in device pixels.
    pub height: f64,
}

impl Viewport {
    /// Build metrics from the host's CSS viewport and raw device-pixel-ratio.
    ///
    /// Non-finite or negative sizes collapse to zero and a missing ratio
    /// falls back to 1, so nothing downstream sees NaN.
    pub fn new(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        let css_width = sanitize_extent(css_width);
        let css_height = sanitize_extent(css_height);
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio.min(MAX_DPR)
        } else {
            1.0
        };
        Self {
            css_width,
            css_height,
            dpr,
            width: (css_width * dpr).floor(),
            height: (css_height * dpr).floor(),
        }
    }

    #[inline]
    pub fn css_area(&self) -> f64 {
        self.css_width * self.css_height
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }
}

fn sanitize_extent(v: f64) -> f64 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}
