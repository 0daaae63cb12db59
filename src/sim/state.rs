//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`SimulationState`].

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::bounds::ArenaBounds;
use super::camera::CameraSelector;
use super::collision::CollisionLatch;
use crate::consts::*;

/// A player, identified by the back boundary they defend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Defends the negative-z boundary
    One,
    /// Defends the positive-z boundary
    Two,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::One, Player::Two];

    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball hit a side wall
    WallBounce,
    /// Ball entered a paddle
    PaddleHit(Player),
    /// Ball passed a back boundary; the player scored
    Scored(Player),
    /// Active camera changed
    CameraChanged(u8),
}

/// A player's paddle. Only ever moves along x.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaddleBody {
    pub pos: Vec3,
    /// Signed movement intent, usually in -2..=2
    pub direction: f32,
    pub half_width: f32,
    pub half_depth: f32,
}

impl PaddleBody {
    pub fn new(z: f32, bounds: &ArenaBounds) -> Self {
        Self {
            pos: Vec3::new(0.0, 0.0, z),
            direction: 0.0,
            half_width: bounds.paddle_half_width,
            half_depth: bounds.paddle_half_depth,
        }
    }

    /// Half extents on the play plane (x, z)
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.half_width, self.half_depth)
    }
}

/// The ball. `direction` is a raw vector: it is only ever negated per component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BallBody {
    pub pos: Vec3,
    pub direction: Vec3,
    pub speed: f32,
    pub half_width: f32,
}

impl BallBody {
    /// Serve direction for a fresh game
    pub const SERVE: Vec3 = Vec3::new(1.0, 0.0, 1.0);

    pub fn new(bounds: &ArenaBounds) -> Self {
        Self {
            pos: Vec3::ZERO,
            direction: Self::SERVE,
            speed: BALL_SPEED,
            half_width: bounds.ball_half_width,
        }
    }
}

/// Points per player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub player1: u32,
    pub player2: u32,
}

impl ScoreBoard {
    pub fn award(&mut self, player: Player) {
        match player {
            Player::One => self.player1 += 1,
            Player::Two => self.player2 += 1,
        }
    }
}

/// Read-only view handed to presentation after each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub paddle1: Vec3,
    pub paddle2: Vec3,
    pub ball: Vec3,
    /// Cosmetic ball spin in degrees
    pub ball_angle: f32,
    pub player1_score: u32,
    pub player2_score: u32,
    pub camera: u8,
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    /// Arena the session plays in
    pub bounds: ArenaBounds,
    /// Paddle speed along x (units/s)
    pub paddle_speed: f32,
    /// Paddles, indexed by [`Player::index`]
    pub paddles: [PaddleBody; 2],
    pub ball: BallBody,
    pub scores: ScoreBoard,
    pub latch: CollisionLatch,
    pub camera: CameraSelector,
    /// Cosmetic ball spin in degrees, `0..=360`
    pub angle: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationState {
    /// Fresh game in the standard arena
    pub fn new() -> Self {
        Self::with_bounds(ArenaBounds::STANDARD)
    }

    /// Fresh game in a custom arena
    pub fn with_bounds(bounds: ArenaBounds) -> Self {
        Self {
            bounds,
            paddle_speed: PADDLE_SPEED,
            paddles: [
                PaddleBody::new(-PADDLE_Z, &bounds),
                PaddleBody::new(PADDLE_Z, &bounds),
            ],
            ball: BallBody::new(&bounds),
            scores: ScoreBoard::default(),
            latch: CollisionLatch::Clear,
            camera: CameraSelector::default(),
            angle: 0.0,
            time_ticks: 0,
        }
    }

    pub fn paddle(&self, player: Player) -> &PaddleBody {
        &self.paddles[player.index()]
    }

    pub fn paddle_mut(&mut self, player: Player) -> &mut PaddleBody {
        &mut self.paddles[player.index()]
    }

    /// Player credited if the ball is currently past a back boundary
    pub fn miss_scorer(&self) -> Option<Player> {
        let z = self.ball.pos.z;
        if z.abs() + self.ball.half_width > self.bounds.goal_line() {
            // Player one defends the negative end
            let defender = if z < 0.0 { Player::One } else { Player::Two };
            Some(defender.opponent())
        } else {
            None
        }
    }

    /// Put the ball back at the centre and reverse the serve
    pub fn reset_ball(&mut self) {
        self.ball.direction = -self.ball.direction;
        self.ball.pos = Vec3::ZERO;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            paddle1: self.paddles[0].pos,
            paddle2: self.paddles[1].pos,
            ball: self.ball.pos,
            ball_angle: self.angle,
            player1_score: self.scores.player1,
            player2_score: self.scores.player2,
            camera: self.camera.current(),
        }
    }
}
