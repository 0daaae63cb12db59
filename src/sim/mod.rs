//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of I/O:
//! - Time arrives as an explicit delta
//! - Input arrives as an explicit `TickInput`
//! - No rendering or platform dependencies

pub mod bounds;
pub mod camera;
pub mod collision;
pub mod state;
pub mod tick;

pub use bounds::{ArenaBounds, WallPair, WallSide};
pub use camera::{CameraSelector, Viewpoint};
pub use collision::{CollisionLatch, overlaps};
pub use state::{
    BallBody, GameEvent, PaddleBody, Player, ScoreBoard, SimulationState, Snapshot,
};
pub use tick::{TickInput, sanitize_dt, tick};
