/// DOM hooks and frame-loop diagnostics for the web front end.
///
/// Simulation tuning lives in `core::constants`; this file only names the
/// page elements the front end talks to.
// Page elements
pub const CANVAS_ID: &str = "bg";
pub const FOOTER_YEAR_ID: &str = "y";
pub const LINK_CARD_SELECTOR: &str = ".link-card";

// Card halo custom properties
pub const HALO_X_PROPERTY: &str = "--mx";
pub const HALO_Y_PROPERTY: &str = "--my";

// Frame-rate log cadence (seconds)
pub const FPS_LOG_INTERVAL_SEC: f32 = 5.0;
