//! Ball/paddle overlap detection and the bounce latch
//!
//! Gameplay happens on the x/z plane, so the y axis never takes part in a
//! collision test.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Axis-aligned overlap between a paddle and the ball on x and z.
///
/// `paddle_half_extents` holds the paddle's half width (x) and half depth (z).
/// Faces that merely touch do not overlap.
#[inline]
pub fn overlaps(paddle_pos: Vec3, paddle_half_extents: Vec2, ball_pos: Vec3, ball_half: f32) -> bool {
    let dx = (paddle_pos.x - ball_pos.x).abs();
    let dz = (paddle_pos.z - ball_pos.z).abs();
    dx < paddle_half_extents.x + ball_half && dz < paddle_half_extents.y + ball_half
}

/// Suppresses repeated bounces while the ball stays inside a paddle
///
/// | state   | overlapping | next    | flip |
/// |---------|-------------|---------|------|
/// | Clear   | yes         | Engaged | yes  |
/// | Engaged | yes         | Engaged | no   |
/// | any     | no          | Clear   | no   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CollisionLatch {
    #[default]
    Clear,
    Engaged,
}

impl CollisionLatch {
    /// Feed this tick's overlap result; returns true when the ball should bounce
    pub fn update(&mut self, overlapping: bool) -> bool {
        match (*self, overlapping) {
            (CollisionLatch::Clear, true) => {
                *self = CollisionLatch::Engaged;
                true
            }
            (CollisionLatch::Engaged, true) => false,
            (_, false) => {
                *self = CollisionLatch::Clear;
                false
            }
        }
    }

    pub fn is_colliding(&self) -> bool {
        *self == CollisionLatch::Engaged
    }
}
