//! Camera selection
//!
//! The selector only moves when a change is requested. Viewpoints are derived
//! from the current snapshot so presentation can build a view matrix without
//! touching simulation state.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use super::state::Snapshot;
use crate::consts::MAX_CAMS;

/// Bounded camera index in `1..=max`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraSelector {
    index: u8,
    max: u8,
}

impl Default for CameraSelector {
    fn default() -> Self {
        Self::new(MAX_CAMS)
    }
}

impl CameraSelector {
    /// Start at camera 1. A `max` of 0 is treated as 1.
    pub fn new(max: u8) -> Self {
        Self {
            index: 1,
            max: max.max(1),
        }
    }

    /// Current camera (never changes the selection)
    pub fn current(&self) -> u8 {
        self.index
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    /// Move to the next camera, wrapping back to 1 after `max`
    pub fn advance(&mut self) -> u8 {
        self.index = if self.index >= self.max { 1 } else { self.index + 1 };
        self.index
    }

    /// Jump straight to a camera; out-of-range indices are ignored
    pub fn select(&mut self, index: u8) -> bool {
        if (1..=self.max).contains(&index) {
            self.index = index;
            true
        } else {
            false
        }
    }
}

/// Where a camera sits and what it looks at
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewpoint {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Viewpoint {
    /// Viewpoint for a camera index given the latest snapshot.
    ///
    /// 1 chases paddle one, 2 chases paddle two, anything else looks down
    /// on the whole arena.
    pub fn for_camera(index: u8, snapshot: &Snapshot) -> Self {
        match index {
            1 => Self::behind(snapshot.paddle1),
            2 => Self::behind(snapshot.paddle2),
            _ => Self {
                eye: Vec3::new(0.0, 8.0, 0.01),
                target: Vec3::ZERO,
                up: Vec3::Y,
            },
        }
    }

    /// Two units up and three units behind a paddle, looking just above it
    fn behind(paddle: Vec3) -> Self {
        let back = if paddle.z < 0.0 { -3.0 } else { 3.0 };
        Self {
            eye: Vec3::new(paddle.x, 2.0, paddle.z + back),
            target: paddle + Vec3::Y,
            up: Vec3::Y,
        }
    }

    /// Right-handed view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}
