//! The owned simulation context driven by the frame loop and host events.
//!
//! Everything the browser front end mutates lives behind this one value; each
//! host callback holds a single borrow of it for its whole duration.

use super::connections::draw_connections;
use super::constants::FieldParams;
use super::field::{BurstPicks, ParticleField};
use super::pointer::PointerState;
use super::surface::DrawSurface;
use super::viewport::Viewport;

/// What one frame did, for diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    pub particles: usize,
    pub connections: usize,
}

pub struct Simulation {
    pub viewport: Viewport,
    pub pointer: PointerState,
    pub field: ParticleField,
}

impl Simulation {
    pub fn new(viewport: Viewport, params: FieldParams, seed: u64) -> Self {
        let mut sim = Self {
            viewport,
            pointer: PointerState::default(),
            field: ParticleField::new(params, seed),
        };
        sim.init_particles();
        sim
    }

    pub fn init_particles(&mut self) {
        self.field.init_particles(&self.viewport, &self.pointer);
    }

    /// Adopt new metrics and rebuild the pool from scratch.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.init_particles();
    }

    /// Pointer coordinates arrive in CSS pixels.
    pub fn on_pointer_move(&mut self, client_x: f64, client_y: f64) {
        self.pointer.on_move(client_x, client_y, self.viewport.dpr);
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer.on_leave();
    }

    pub fn on_click(&mut self) -> BurstPicks {
        self.field.burst(&self.viewport, &self.pointer)
    }

    /// One frame: clear, move and paint every particle, then link neighbours.
    pub fn tick<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> TickStats {
        let vp = self.viewport;
        surface.clear_rect(0.0, 0.0, vp.width, vp.height);
        self.field.update_and_draw_all(&vp, &self.pointer, surface);
        let connections =
            draw_connections(&self.field.particles, vp.dpr, surface, &self.field.params);
        TickStats {
            particles: self.field.len(),
            connections,
        }
    }
}
