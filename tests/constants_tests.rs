// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn spawn_ranges_are_ordered_and_positive() {
    assert!(DRIFT_SPEED_MIN > 0.0 && DRIFT_SPEED_MIN < DRIFT_SPEED_MAX);
    assert!(RADIUS_MIN > 0.0 && RADIUS_MIN < RADIUS_MAX);
    assert!(ALPHA_MIN >= 0.0 && ALPHA_MIN < ALPHA_MAX && ALPHA_MAX <= 1.0);
    assert!(BURST_SPEED_MIN < BURST_SPEED_MAX);
    // Bursts should visibly outrun the ambient drift
    assert!(BURST_SPEED_MIN > DRIFT_SPEED_MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pool_bounds_are_consistent() {
    assert!(MIN_PARTICLES <= MAX_PARTICLES);
    assert!(AREA_PER_PARTICLE > 0.0);
    assert!(BURST_COUNT > 0);
    assert!(MAX_DPR >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn opacities_stay_in_unit_range() {
    assert!(BURST_ALPHA > 0.0 && BURST_ALPHA <= 1.0);
    assert!(CONNECTION_MAX_ALPHA > 0.0 && CONNECTION_MAX_ALPHA <= 1.0);
}

#[test]
fn default_params_mirror_constants() {
    let p = FieldParams::default();
    assert_eq!(p.min_particles, MIN_PARTICLES);
    assert_eq!(p.max_particles, MAX_PARTICLES);
    assert_eq!(p.radius, (RADIUS_MIN, RADIUS_MAX));
    assert_eq!(p.pointer_influence, POINTER_INFLUENCE);
    assert_eq!(p.connection_distance, CONNECTION_DISTANCE);
    assert_eq!(p.burst_count, BURST_COUNT);
}

#[test]
fn dom_hooks_are_named() {
    assert_eq!(CANVAS_ID, "bg");
    assert!(LINK_CARD_SELECTOR.starts_with('.'));
    assert!(HALO_X_PROPERTY.starts_with("--") && HALO_Y_PROPERTY.starts_with("--"));
    assert!(FPS_LOG_INTERVAL_SEC > 0.0);
}
