/// Motion, sizing and connection tuning for the gold particle field.
///
/// Every length below is in CSS pixels and gets multiplied by the
/// device-pixel-ratio at the point of use.
// Device-pixel-ratio cap
pub const MAX_DPR: f64 = 2.0;

// Pool sizing
pub const AREA_PER_PARTICLE: f64 = 15_000.0; // CSS px² per particle
pub const MIN_PARTICLES: usize = 60;
pub const MAX_PARTICLES: usize = 160;

// Spawn ranges
pub const DRIFT_SPEED_MIN: f64 = 0.05;
pub const DRIFT_SPEED_MAX: f64 = 0.35;
pub const RADIUS_MIN: f64 = 0.8;
pub const RADIUS_MAX: f64 = 2.2;
pub const ALPHA_MIN: f64 = 0.25;
pub const ALPHA_MAX: f64 = 0.9;

// Glow extends past the core radius by this factor
pub const GLOW_RADIUS_FACTOR: f64 = 3.0;

// Pointer attraction
pub const POINTER_INFLUENCE: f64 = 120.0;
pub const POINTER_FORCE: f64 = 0.0008;

// Click burst
pub const BURST_COUNT: usize = 6;
pub const BURST_SPEED_MIN: f64 = 0.6;
pub const BURST_SPEED_MAX: f64 = 1.6;
pub const BURST_ALPHA: f64 = 0.95;

// Connections
pub const CONNECTION_DISTANCE: f64 = 120.0;
pub const CONNECTION_MAX_ALPHA: f64 = 0.25;
pub const CONNECTION_LINE_WIDTH: f64 = 0.6;
pub const CONNECTION_RGB: [u8; 3] = [255, 215, 0];

/// Tunables consumed by the particle, field and connection passes.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub area_per_particle: f64,
    pub min_particles: usize,
    pub max_particles: usize,
    pub drift_speed: (f64, f64),
    pub radius: (f64, f64),
    pub alpha: (f64, f64),
    pub pointer_influence: f64,
    pub pointer_force: f64,
    pub burst_count: usize,
    pub burst_speed: (f64, f64),
    pub burst_alpha: f64,
    pub connection_distance: f64,
    pub connection_max_alpha: f64,
    pub connection_line_width: f64,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            area_per_particle: AREA_PER_PARTICLE,
            min_particles: MIN_PARTICLES,
            max_particles: MAX_PARTICLES,
            drift_speed: (DRIFT_SPEED_MIN, DRIFT_SPEED_MAX),
            radius: (RADIUS_MIN, RADIUS_MAX),
            alpha: (ALPHA_MIN, ALPHA_MAX),
            pointer_influence: POINTER_INFLUENCE,
            pointer_force: POINTER_FORCE,
            burst_count: BURST_COUNT,
            burst_speed: (BURST_SPEED_MIN, BURST_SPEED_MAX),
            burst_alpha: BURST_ALPHA,
            connection_distance: CONNECTION_DISTANCE,
            connection_max_alpha: CONNECTION_MAX_ALPHA,
            connection_line_width: CONNECTION_LINE_WIDTH,
        }
    }
}
