//! Hoppy Bunny - An endless tap-to-hop obstacle runner
//!
//! Core modules:
//! - `sim`: Deterministic gameplay loop (frame update, tap, contacts)
//! - `game`: Session driver wiring the sim to a host engine
//! - `platform`: Host engine adapter trait and a headless implementation
//! - `tuning`: Data-driven game balance
//! - `ui`: HUD labels, bonus star and restart button

pub mod audio;
pub mod game;
pub mod highscores;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use game::Game;
pub use highscores::HighScores;
pub use settings::Settings;
pub use tuning::{GameMode, Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Nominal frame timestep (60 Hz)
    pub const FIXED_DT: f32 = 1.0 / 60.0;

    /// Hero vertical velocity cap (units/s)
    pub const MAX_RISE_SPEED: f32 = 400.0;
    /// Rotation limits (degrees)
    pub const MIN_ROTATION_DEG: f32 = -90.0;
    pub const MAX_ROTATION_DEG: f32 = 30.0;
    /// Angular velocity limit (rad/s, symmetric)
    pub const MAX_ANGULAR_SPEED: f32 = 2.0;

    /// Seconds without a tap before the hero starts to nose-dive
    pub const NOSE_DIVE_DELAY: f32 = 0.1;
    /// Nose-dive angular impulse per second of frame time
    pub const NOSE_DIVE_RATE: f32 = -2000.0;

    /// Tap response
    pub const TAP_IMPULSE: f32 = 250.0;
    pub const TAP_ANGULAR_IMPULSE: f32 = 1.0;

    /// Bonus star stays up this long after a goal
    pub const STAR_DURATION: f32 = 0.1;

    /// Engine gravity convention: metres/s², scaled to points by the host
    pub const POINTS_PER_METER: f32 = 150.0;
    pub const DEFAULT_GRAVITY: f32 = -9.8;

    /// Name tag carried by the goal trigger between obstacle halves
    pub const GOAL_TAG: &str = "goal";
}

/// Convert degrees to radians
#[inline]
pub fn degrees_to_radians(deg: f32) -> f32 {
    deg * std::f32::consts::PI / 180.0
}
