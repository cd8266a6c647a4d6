use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

/// Uniform value in `[min, max)`. Collapses to `min` when the range is empty.
#[inline]
pub fn rnd<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    rng.gen::<f64>() * (max - min) + min
}

/// Random heading scaled by a speed drawn from `[min, max)`.
#[inline]
pub fn random_velocity<R: Rng + ?Sized>(
    rng: &mut R,
    (min, max): (f64, f64),
    scale: f64,
) -> DVec2 {
    let speed = rnd(rng, min, max) * scale;
    let angle = rnd(rng, 0.0, TAU);
    DVec2::new(angle.cos(), angle.sin()) * speed
}
