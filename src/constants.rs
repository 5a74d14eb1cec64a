//! Constants used throughout the tracker

/// Yaw magnitude beyond which a sample counts as looking to a side
pub const DEFAULT_YAW_SIDE_THRESHOLD: f32 = 30.0;

/// Pitch magnitude beyond which a sample counts as looking up or down
pub const DEFAULT_PITCH_THRESHOLD: f32 = 15.0;

/// Yaw/pitch magnitude below which a sample counts as looking straight ahead.
/// Must stay below both directional thresholds so center and a directional
/// zone can never hold for the same sample.
pub const DEFAULT_CENTER_THRESHOLD: f32 = 10.0;

/// Fraction of the reference radius within which the face center is accepted
pub const DEFAULT_CONTAINMENT_TOLERANCE: f64 = 0.8;

/// Duration of the per-zone fill animation in milliseconds
pub const DEFAULT_FILL_DURATION_MS: u64 = 350;

/// Number of zones a subject must cover (8 peripheral + center)
pub const ZONE_COUNT: usize = 9;

/// Default replay display surface (portrait, matching the original capture setup)
pub const DEFAULT_DISPLAY_WIDTH: i32 = 1080;

/// Default replay display height
pub const DEFAULT_DISPLAY_HEIGHT: i32 = 1920;

/// Default reference circle radius for the replay harness
pub const DEFAULT_CIRCLE_RADIUS: f64 = 400.0;
