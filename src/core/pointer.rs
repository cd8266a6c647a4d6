use super::viewport::Viewport;
use glam::DVec2;

/// Last known pointer position in device pixels, plus whether it is still
/// inside the viewport.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub position: Option<DVec2>,
    pub active: bool,
}

impl PointerState {
    pub fn on_move(&mut self, client_x: f64, client_y: f64, dpr: f64) {
        self.position = Some(DVec2::new(client_x * dpr, client_y * dpr));
        self.active = true;
    }

    /// Position is kept so a later click still bursts from the last spot.
    pub fn on_leave(&mut self) {
        self.active = false;
    }

    /// Point particles are pulled toward, if any.
    #[inline]
    pub fn attractor(&self) -> Option<DVec2> {
        if self.active {
            self.position
        } else {
            None
        }
    }

    /// Spawn point for pointer-anchored effects.
    #[inline]
    pub fn anchor(&self, viewport: &Viewport) -> DVec2 {
        self.position.unwrap_or_else(|| viewport.center())
    }
}

/// Client-space rectangle of a peripheral card element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Pointer position relative to a card, in percent of its size.
///
/// Values go outside 0..100 when the pointer is outside the card. Returns
/// `None` for collapsed rects.
#[inline]
pub fn card_halo(client_x: f64, client_y: f64, rect: CardRect) -> Option<[f64; 2]> {
    if !(rect.width > 0.0 && rect.height > 0.0) {
        return None;
    }
    let mx = (client_x - rect.left) / rect.width * 100.0;
    let my = (client_y - rect.top) / rect.height * 100.0;
    (mx.is_finite() && my.is_finite()).then_some([mx, my])
}
