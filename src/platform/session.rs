//! Outer frame loop
//!
//! One call to [`Session::run_frame`] is one iteration of the host loop:
//! input, clock, tick, then the termination check. A quit request never
//! interrupts a tick; the frame that sees it still completes.

use super::input::{HostEvent, InputAccumulator, KeyBinding};
use super::time::Clock;
use crate::consts::MAX_FRAME_DT;
use crate::sim::{GameEvent, SimulationState, Snapshot, tick};

/// A running game: simulation state plus the host-side plumbing that feeds it
pub struct Session<C: Clock> {
    state: SimulationState,
    input: InputAccumulator,
    clock: C,
    max_frame_dt: f64,
    frame_count: u64,
    elapsed: f64,
    running: bool,
}

impl<C: Clock> Session<C> {
    pub fn new(clock: C, bindings: Vec<KeyBinding>) -> Self {
        log::info!("Session started");
        Self {
            state: SimulationState::new(),
            input: InputAccumulator::new(bindings),
            clock,
            max_frame_dt: MAX_FRAME_DT,
            frame_count: 0,
            elapsed: 0.0,
            running: true,
        }
    }

    /// Cap applied to each frame delta before it reaches the simulation
    pub fn with_max_frame_dt(mut self, max_frame_dt: f64) -> Self {
        self.max_frame_dt = max_frame_dt;
        self
    }

    /// Run one frame. Does nothing once the session has ended.
    pub fn run_frame<'a, I>(&mut self, events: I) -> Vec<GameEvent>
    where
        I: IntoIterator<Item = &'a HostEvent>,
    {
        if !self.running {
            return Vec::new();
        }

        self.input.handle_all(events);
        let input = self.input.tick_input();

        // NaN, infinite and negative deltas become a zero-length step
        let raw = self.clock.elapsed();
        let dt = if raw.is_finite() && raw > 0.0 {
            raw.min(self.max_frame_dt)
        } else {
            0.0
        };
        let events = tick(&mut self.state, &input, dt);
        self.elapsed += dt;
        self.frame_count += 1;

        if self.input.quit_requested() {
            self.running = false;
            log::info!(
                "Session ended after {} frames ({} - {})",
                self.frame_count,
                self.state.scores.player1,
                self.state.scores.player2
            );
        }

        events
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Simulated seconds so far (sum of the deltas handed to `tick`)
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Read-only view of the simulation
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::input::{Key, KeyEvent};
    use crate::platform::time::FixedClock;
    use crate::sim::Player;

    const NO_EVENTS: [HostEvent; 0] = [];

    /// Clock that always reports the same raw delta, unsanitized
    struct ConstClock(f64);

    impl Clock for ConstClock {
        fn elapsed(&mut self) -> f64 {
            self.0
        }
    }

    fn session() -> Session<FixedClock> {
        Session::new(FixedClock::new(0.01), KeyBinding::defaults())
    }

    #[test]
    fn test_frames_advance_state() {
        let mut session = session();
        session.run_frame(&NO_EVENTS);
        session.run_frame(&NO_EVENTS);
        assert_eq!(session.frame_count(), 2);
        assert!((session.elapsed() - 0.02).abs() < 1e-12);
        assert_ne!(session.snapshot().ball, glam::Vec3::ZERO);
    }

    #[test]
    fn test_held_key_moves_paddle_each_frame() {
        let mut session = session();
        session.run_frame(&[HostEvent::Key(KeyEvent::down(Key::Char('a')))]);
        let after_one = session.state.paddle(Player::One).pos.x;
        session.run_frame(&NO_EVENTS);
        let after_two = session.state.paddle(Player::One).pos.x;
        assert!(after_one > 0.0);
        assert!(after_two > after_one);

        session.run_frame(&[HostEvent::Key(KeyEvent::up(Key::Char('a')))]);
        let stopped = session.state.paddle(Player::One).pos.x;
        session.run_frame(&NO_EVENTS);
        assert_eq!(session.state.paddle(Player::One).pos.x, stopped);
    }

    #[test]
    fn test_quit_finishes_current_frame() {
        let mut session = session();
        let before = session.snapshot().ball;
        session.run_frame(&[HostEvent::Key(KeyEvent::down(Key::Escape))]);
        assert!(!session.is_running());
        assert_eq!(session.frame_count(), 1);
        assert_ne!(session.snapshot().ball, before);

        // Further frames are ignored
        let frozen = session.snapshot();
        assert!(session.run_frame(&NO_EVENTS).is_empty());
        assert_eq!(session.snapshot(), frozen);
        assert_eq!(session.frame_count(), 1);
    }

    #[test]
    fn test_camera_key_advances_once() {
        let mut session = session();
        let events = session.run_frame(&[
            HostEvent::Key(KeyEvent::down(Key::Char('c'))),
            HostEvent::Key(KeyEvent::down(Key::Char('c')).repeated()),
        ]);
        assert!(events.contains(&GameEvent::CameraChanged(2)));
        session.run_frame(&[HostEvent::Key(KeyEvent::up(Key::Char('c')))]);
        assert_eq!(session.snapshot().camera, 2);
    }

    #[test]
    fn test_frame_delta_is_capped() {
        let mut session =
            Session::new(FixedClock::new(10.0), KeyBinding::defaults()).with_max_frame_dt(0.05);
        session.run_frame(&NO_EVENTS);
        assert!((session.elapsed() - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_clock_deltas_do_not_move_anything() {
        for raw in [f64::NAN, -0.5, f64::INFINITY, f64::NEG_INFINITY] {
            let mut session = Session::new(ConstClock(raw), KeyBinding::defaults());
            session.run_frame(&[HostEvent::Key(KeyEvent::down(Key::Char('a')))]);
            session.run_frame(&NO_EVENTS);
            assert_eq!(session.frame_count(), 2, "raw delta {raw}");
            assert_eq!(session.elapsed(), 0.0, "raw delta {raw}");
            assert_eq!(session.snapshot().ball, glam::Vec3::ZERO, "raw delta {raw}");
            assert_eq!(session.state().paddle(Player::One).pos.x, 0.0, "raw delta {raw}");
            assert_eq!(session.snapshot().ball_angle, 0.0, "raw delta {raw}");
        }
    }

    #[test]
    fn test_state_view_matches_snapshot() {
        let mut session = session();
        session.run_frame(&NO_EVENTS);
        assert_eq!(session.state().snapshot(), session.snapshot());
    }
}
