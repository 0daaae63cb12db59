//! Duel Pong - a two-player arena Pong simulation
//!
//! Core modules:
//! - `sim`: Simulation (motion, wall clamping, paddle collisions, scoring, camera)
//! - `platform`: Host-facing pieces (clock, input accumulation, session loop, input scripts)
//! - `settings`: Key bindings and host options

pub mod error;
pub mod platform;
pub mod settings;
pub mod sim;

pub use error::LoadError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation step used by the headless host (120 Hz)
    pub const SIM_DT: f64 = 1.0 / 120.0;
    /// Largest frame delta the host hands to the simulation
    pub const MAX_FRAME_DT: f64 = 0.25;

    /// Arena dimensions (x = side walls, z = back boundaries)
    pub const ARENA_WIDTH: f32 = 4.0;
    pub const ARENA_DEPTH: f32 = 6.0;
    pub const WALL_THICKNESS: f32 = 0.1;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 0.5;
    pub const PADDLE_DEPTH: f32 = 0.25;
    /// Distance of each paddle from the arena centre along z
    pub const PADDLE_Z: f32 = 2.5;
    /// Paddle speed along x (units/s)
    pub const PADDLE_SPEED: f32 = 1.2;

    /// Ball defaults
    pub const BALL_WIDTH: f32 = 0.25;
    pub const BALL_SPEED: f32 = 1.5;

    /// Cosmetic ball spin (degrees/s)
    pub const ROTATION_RATE: f32 = 90.0;

    /// Number of fixed camera viewpoints
    pub const MAX_CAMS: u8 = 3;
}

/// Advance an angle in degrees, resetting to 0 once it passes a full turn
#[inline]
pub fn advance_degrees(angle: f32, delta: f32) -> f32 {
    let next = angle + delta;
    if next > 360.0 { 0.0 } else { next }
}
