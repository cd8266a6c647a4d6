use super::color::rgb_to_rgba;
use super::constants::{FieldParams, CONNECTION_RGB};
use super::particle::Particle;
use super::surface::DrawSurface;

/// Stroke alpha for two particles `dist` apart; zero at `max_dist`.
#[inline]
pub fn connection_alpha(dist: f64, max_dist: f64, max_alpha: f64) -> f64 {
    max_alpha * (1.0 - dist / max_dist)
}

/// Link every pair closer than the connection distance with a line that
/// fades out toward that distance. Full pairwise scan; the pool is capped
/// small enough for this to stay cheap. Returns the number of lines drawn.
pub fn draw_connections<S: DrawSurface + ?Sized>(
    particles: &[Particle],
    dpr: f64,
    surface: &mut S,
    params: &FieldParams,
) -> usize {
    let max_dist = params.connection_distance * dpr;
    if !(max_dist > 0.0) {
        return 0;
    }
    let max_d2 = max_dist * max_dist;
    surface.set_line_width(params.connection_line_width * dpr);

    let mut drawn = 0;
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let d2 = a.pos.distance_squared(b.pos);
            if d2 < max_d2 {
                let alpha = connection_alpha(d2.sqrt(), max_dist, params.connection_max_alpha);
                surface.stroke_line(a.pos, b.pos, &rgb_to_rgba(CONNECTION_RGB, alpha));
                drawn += 1;
            }
        }
    }
    drawn
}
