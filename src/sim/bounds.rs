//! Arena extents and wall clamping
//!
//! The arena is a box centred on the origin. Side walls sit on the x axis,
//! back boundaries on the z axis. Each wall pair is half-embedded: an item of
//! half extent `h` may travel up to `half_extent - h - wall_thickness / 2`.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which wall of a pair is being tested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    /// Negative side
    Low,
    /// Positive side
    High,
}

impl WallSide {
    pub const BOTH: [WallSide; 2] = [WallSide::Low, WallSide::High];
}

/// A pair of opposing walls along one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallPair {
    /// Distance from the centre to the middle of each wall
    pub half_extent: f32,
    /// Full wall thickness
    pub wall_thickness: f32,
}

impl WallPair {
    pub const fn new(half_extent: f32, wall_thickness: f32) -> Self {
        Self {
            half_extent,
            wall_thickness,
        }
    }

    /// Furthest legal centre coordinate for an item on the given side
    #[inline]
    pub fn limit(&self, side: WallSide, item_half_extent: f32) -> f32 {
        let reach = self.half_extent - item_half_extent - self.wall_thickness / 2.0;
        match side {
            WallSide::Low => -reach,
            WallSide::High => reach,
        }
    }

    /// Clamp a coordinate against one wall.
    ///
    /// Returns the (possibly) clamped coordinate and whether a clamp happened.
    /// A coordinate sitting exactly on the limit is not a clamp.
    pub fn clamp(&self, coordinate: f32, side: WallSide, item_half_extent: f32) -> (f32, bool) {
        let limit = self.limit(side, item_half_extent);
        let exceeded = match side {
            WallSide::Low => coordinate < limit,
            WallSide::High => coordinate > limit,
        };
        if exceeded {
            (limit, true)
        } else {
            (coordinate, false)
        }
    }

    /// Clamp against both walls, reporting whether either clamped
    pub fn clamp_both(&self, coordinate: f32, item_half_extent: f32) -> (f32, bool) {
        let mut clamped = false;
        let mut value = coordinate;
        for side in WallSide::BOTH {
            let (next, hit) = self.clamp(value, side, item_half_extent);
            value = next;
            clamped |= hit;
        }
        (value, clamped)
    }
}

/// Arena dimensions and body extents, fixed for a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaBounds {
    pub half_width: f32,
    pub half_depth: f32,
    pub wall_thickness: f32,
    pub paddle_half_width: f32,
    pub paddle_half_depth: f32,
    pub ball_half_width: f32,
}

impl ArenaBounds {
    /// The arena every session plays in
    pub const STANDARD: ArenaBounds = ArenaBounds {
        half_width: ARENA_WIDTH / 2.0,
        half_depth: ARENA_DEPTH / 2.0,
        wall_thickness: WALL_THICKNESS,
        paddle_half_width: PADDLE_WIDTH / 2.0,
        paddle_half_depth: PADDLE_DEPTH / 2.0,
        ball_half_width: BALL_WIDTH / 2.0,
    };

    /// Side walls (x axis)
    pub fn x_walls(&self) -> WallPair {
        WallPair::new(self.half_width, self.wall_thickness)
    }

    /// Back boundaries (z axis)
    pub fn z_walls(&self) -> WallPair {
        WallPair::new(self.half_depth, self.wall_thickness)
    }

    /// Largest |x| a paddle centre may reach
    pub fn paddle_x_limit(&self) -> f32 {
        self.x_walls().limit(WallSide::High, self.paddle_half_width)
    }

    /// Largest |x| the ball centre may reach
    pub fn ball_x_limit(&self) -> f32 {
        self.x_walls().limit(WallSide::High, self.ball_half_width)
    }

    /// Depth past which the ball's leading edge counts as a miss
    pub fn goal_line(&self) -> f32 {
        self.half_depth - self.wall_thickness / 2.0
    }
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self::STANDARD
    }
}
