//! Tuning constants for the three backdrops.

// Pool sizes (fixed at build time, not re-tunable per tick)
pub const STAR_COUNT: usize = 150;
pub const ORB_COUNT: usize = 60;
pub const MOTE_COUNT: usize = 80;

// Starfield
pub const STAR_DRIFT: f64 = 0.3;
pub const STAR_SIZE_MIN: f64 = 0.5;
pub const STAR_SIZE_MAX: f64 = 2.0;
pub const TWINKLE_SPEED_MIN: f64 = 0.01;
pub const TWINKLE_SPEED_MAX: f64 = 0.03;

// Shooting star
pub const STREAK_INTERVAL_MS: f64 = 4000.0;
pub const STREAK_DX_MIN: f64 = 4.0;
pub const STREAK_DX_MAX: f64 = 8.0;
pub const STREAK_DY_MIN: f64 = 2.0;
pub const STREAK_DY_MAX: f64 = 4.0;
pub const STREAK_LENGTH_FACTOR: f64 = 8.0;
pub const STREAK_DECAY: f64 = 0.03;

// Orb field
pub const ORB_SPEED: f64 = 0.6;
pub const ORB_RADIUS_MIN: f64 = 1.0;
pub const ORB_RADIUS_MAX: f64 = 3.5;
pub const WRAP_MARGIN: f64 = 10.0;
pub const CONNECT_DIST: f64 = 160.0;
pub const CONNECT_ALPHA: f64 = 0.25;

// Rising motes
pub const RISE_SPEED: f64 = 1.2;
pub const MOTE_DRIFT: f64 = 0.5;
pub const MOTE_RADIUS_MIN: f64 = 1.0;
pub const MOTE_RADIUS_MAX: f64 = 3.0;
pub const MOTE_TOP_EXIT: f64 = -20.0;
pub const MOTE_SPAWN_DEPTH: f64 = 120.0;
pub const WOBBLE_AMPLITUDE: f64 = 0.4;
pub const WOBBLE_SPEED_MIN: f64 = 0.01;
pub const WOBBLE_SPEED_MAX: f64 = 0.05;

// Viewport
pub const RESIZE_QUIET_MS: f64 = 150.0;
