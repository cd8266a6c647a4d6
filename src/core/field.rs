use super::constants::FieldParams;
use super::particle::Particle;
use super::pointer::PointerState;
use super::random::random_velocity;
use super::surface::DrawSurface;
use super::viewport::Viewport;
use rand::prelude::*;
use smallvec::SmallVec;

/// Indices touched by one click burst, with replacement.
pub type BurstPicks = SmallVec<[usize; 8]>;

/// Fixed-size pool of particles, rebuilt on resize and otherwise only
/// mutated in place.
pub struct ParticleField {
    pub particles: Vec<Particle>,
    pub params: FieldParams,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(params: FieldParams, seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            params,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pool size for a viewport: one particle per `area_per_particle` CSS px²,
    /// clamped to the configured bounds.
    pub fn target_count(&self, viewport: &Viewport) -> usize {
        let per = self.params.area_per_particle.max(1.0);
        let raw = (viewport.css_area() / per).floor();
        // `as` saturates, so huge areas land on the upper clamp
        (raw as usize)
            .max(self.params.min_particles)
            .min(self.params.max_particles)
    }

    pub fn init_particles(&mut self, viewport: &Viewport, pointer: &PointerState) {
        let target = self.target_count(viewport);
        let params = &self.params;
        let rng = &mut self.rng;
        self.particles = (0..target)
            .map(|_| Particle::new(viewport, pointer, params, &mut *rng))
            .collect();
    }

    pub fn update_and_draw_all<S: DrawSurface + ?Sized>(
        &mut self,
        viewport: &Viewport,
        pointer: &PointerState,
        surface: &mut S,
    ) {
        for p in &mut self.particles {
            p.update(viewport, pointer, &self.params);
            p.draw(surface);
        }
    }

    /// Relaunch a random sample of particles out of the pointer.
    pub fn burst(&mut self, viewport: &Viewport, pointer: &PointerState) -> BurstPicks {
        let mut picks = BurstPicks::new();
        if self.particles.is_empty() {
            return picks;
        }
        let origin = pointer.anchor(viewport);
        for _ in 0..self.params.burst_count {
            let i = self.rng.gen_range(0..self.particles.len());
            let p = &mut self.particles[i];
            p.pos = origin;
            p.vel = random_velocity(&mut self.rng, self.params.burst_speed, viewport.dpr);
            p.alpha = self.params.burst_alpha;
            picks.push(i);
        }
        picks
    }

    /// Re-randomize a particle at the pointer (or center) instead of
    /// anywhere in the viewport.
    pub fn respawn_at_pointer(&mut self, index: usize, viewport: &Viewport, pointer: &PointerState) {
        if let Some(p) = self.particles.get_mut(index) {
            p.reset(false, viewport, pointer, &self.params, &mut self.rng);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
