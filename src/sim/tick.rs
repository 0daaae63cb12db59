//! Simulation tick
//!
//! Advances the game by one variable-length step. Step order matters:
//! paddles, ball motion, wall bounce, paddle collision, scoring, camera, spin.

use serde::{Deserialize, Serialize};

use super::collision::overlaps;
use super::state::{GameEvent, Player, SimulationState};
use crate::advance_degrees;
use crate::consts::ROTATION_RATE;

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    /// Signed movement intent per paddle, indexed by [`Player::index`]
    pub paddle_intent: [f32; 2],
    /// Advance to the next camera (one-shot)
    pub camera_change: bool,
}

/// Clamp a raw frame delta to something safe to integrate with
#[inline]
pub fn sanitize_dt(dt: f64) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt as f32
    } else {
        if dt != 0.0 {
            log::trace!("Ignoring degenerate frame delta {}", dt);
        }
        0.0
    }
}

/// Advance the simulation by `dt` seconds, returning what happened
pub fn tick(state: &mut SimulationState, input: &TickInput, dt: f64) -> Vec<GameEvent> {
    let dt = sanitize_dt(dt);
    let mut events = Vec::new();
    state.time_ticks += 1;

    let x_walls = state.bounds.x_walls();

    // Paddles slide along x only
    for (paddle, intent) in state.paddles.iter_mut().zip(input.paddle_intent) {
        paddle.direction = intent;
        paddle.pos.x += state.paddle_speed * dt * paddle.direction;
        paddle.pos.x = x_walls.clamp_both(paddle.pos.x, paddle.half_width).0;
    }

    // Ball moves along its raw direction vector
    let ball = &mut state.ball;
    ball.pos += ball.direction * ball.speed * dt;

    let (x, wall_hit) = x_walls.clamp_both(ball.pos.x, ball.half_width);
    ball.pos.x = x;
    if wall_hit {
        ball.direction.x = -ball.direction.x;
        events.push(GameEvent::WallBounce);
    }

    // Paddle collision, latched so a ball lingering inside flips once
    let hit = Player::BOTH.into_iter().find(|&player| {
        let paddle = &state.paddles[player.index()];
        overlaps(paddle.pos, paddle.half_extents(), ball.pos, ball.half_width)
    });
    if state.latch.update(hit.is_some()) {
        ball.direction.z = -ball.direction.z;
        if let Some(player) = hit {
            log::debug!("Paddle hit by player {:?} at x={:.3}", player, ball.pos.x);
            events.push(GameEvent::PaddleHit(player));
        }
    }

    // Scoring
    if let Some(scorer) = state.miss_scorer() {
        state.scores.award(scorer);
        state.reset_ball();
        log::info!(
            "Player {:?} scores ({} - {})",
            scorer,
            state.scores.player1,
            state.scores.player2
        );
        events.push(GameEvent::Scored(scorer));
    }

    if input.camera_change {
        let camera = state.camera.advance();
        log::debug!("Camera -> {}", camera);
        events.push(GameEvent::CameraChanged(camera));
    }

    state.angle = advance_degrees(state.angle, dt * ROTATION_RATE);

    events
}
