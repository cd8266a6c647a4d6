use super::color::Gold;
use super::constants::{FieldParams, GLOW_RADIUS_FACTOR};
use super::pointer::PointerState;
use super::random::{random_velocity, rnd};
use super::surface::DrawSurface;
use super::viewport::Viewport;
use glam::DVec2;
use rand::Rng;

/// A single drifting gold mote. Lengths and speeds are in device pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
    pub alpha: f64,
    pub color: Gold,
}

impl Particle {
    pub fn new<R: Rng + ?Sized>(
        viewport: &Viewport,
        pointer: &PointerState,
        params: &FieldParams,
        rng: &mut R,
    ) -> Self {
        let mut p = Particle {
            pos: DVec2::ZERO,
            vel: DVec2::ZERO,
            radius: params.radius.0 * viewport.dpr,
            alpha: params.alpha.0,
            color: Gold::Bright,
        };
        p.reset(true, viewport, pointer, params, rng);
        p
    }

    /// Re-randomize in place. Without `spawn_anywhere` the particle reappears
    /// at the pointer, or at the viewport center before the first move.
    pub fn reset<R: Rng + ?Sized>(
        &mut self,
        spawn_anywhere: bool,
        viewport: &Viewport,
        pointer: &PointerState,
        params: &FieldParams,
        rng: &mut R,
    ) {
        let dpr = viewport.dpr;
        self.pos = if spawn_anywhere {
            DVec2::new(
                rnd(rng, 0.0, viewport.width),
                rnd(rng, 0.0, viewport.height),
            )
        } else {
            pointer.anchor(viewport)
        };
        self.vel = random_velocity(rng, params.drift_speed, dpr);
        self.radius = rnd(rng, params.radius.0, params.radius.1) * dpr;
        self.alpha = rnd(rng, params.alpha.0, params.alpha.1);
        self.color = Gold::pick(rng);
    }

    pub fn update(&mut self, viewport: &Viewport, pointer: &PointerState, params: &FieldParams) {
        let dpr = viewport.dpr;
        if let Some(target) = pointer.attractor() {
            let d = target - self.pos;
            let influence = params.pointer_influence * dpr;
            if d.length_squared() < influence * influence {
                self.vel += d * (params.pointer_force * dpr);
            }
        }

        self.pos += self.vel;

        // Soft bounce: flip and clamp, no reflection of the overshoot.
        if self.pos.x < 0.0 || self.pos.x > viewport.width {
            self.vel.x = -self.vel.x;
            self.pos.x = self.pos.x.clamp(0.0, viewport.width);
        }
        if self.pos.y < 0.0 || self.pos.y > viewport.height {
            self.vel.y = -self.vel.y;
            self.pos.y = self.pos.y.clamp(0.0, viewport.height);
        }
    }

    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        let inner = self.color.rgba(self.alpha.min(1.0));
        let outer = self.color.rgba(0.0);
        surface.fill_radial_glow(self.pos, self.radius * GLOW_RADIUS_FACTOR, &inner, &outer);
    }
}
