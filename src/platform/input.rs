//! Keyboard input accumulation
//!
//! The host reports every key transition. Paddle keys add their contribution
//! on key-down and take it back on key-up, so holding both keys of a pair
//! cancels out and releasing one leaves the other in effect.

use serde::{Deserialize, Serialize};

use crate::sim::{Player, TickInput};

/// Key identifiers the host can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Printable key, stored lowercase
    Char(char),
    Left,
    Right,
    Up,
    Down,
    Space,
    Escape,
}

impl Key {
    fn normalized(self) -> Key {
        match self {
            Key::Char(c) => Key::Char(c.to_ascii_lowercase()),
            other => other,
        }
    }
}

/// Key transition direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyTransition {
    Down,
    Up,
}

/// A single key transition as delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
    pub transition: KeyTransition,
    /// Set on auto-repeat while the key is held
    #[serde(default)]
    pub repeat: bool,
}

impl KeyEvent {
    pub fn down(key: Key) -> Self {
        Self {
            key,
            transition: KeyTransition::Down,
            repeat: false,
        }
    }

    pub fn up(key: Key) -> Self {
        Self {
            key,
            transition: KeyTransition::Up,
            repeat: false,
        }
    }

    pub fn repeated(mut self) -> Self {
        self.repeat = true;
        self
    }
}

/// Events the host delivers between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostEvent {
    Key(KeyEvent),
    /// Window closed / OS asked us to stop
    Quit,
}

impl From<KeyEvent> for HostEvent {
    fn from(event: KeyEvent) -> Self {
        HostEvent::Key(event)
    }
}

/// What a bound key does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Push a paddle towards +x
    PaddleIncrease(Player),
    /// Push a paddle towards -x
    PaddleDecrease(Player),
    CycleCamera,
    Quit,
}

impl Action {
    /// Paddle and signed contribution for movement actions
    pub fn paddle_contribution(self) -> Option<(Player, f32)> {
        match self {
            Action::PaddleIncrease(player) => Some((player, 1.0)),
            Action::PaddleDecrease(player) => Some((player, -1.0)),
            Action::CycleCamera | Action::Quit => None,
        }
    }
}

/// Maps one key to one action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub key: Key,
    pub action: Action,
}

impl KeyBinding {
    pub fn new(key: Key, action: Action) -> Self {
        Self { key, action }
    }

    /// A/S drive paddle one, Left/Right drive paddle two, C cycles the camera
    pub fn defaults() -> Vec<KeyBinding> {
        vec![
            KeyBinding::new(Key::Char('a'), Action::PaddleIncrease(Player::One)),
            KeyBinding::new(Key::Char('s'), Action::PaddleDecrease(Player::One)),
            KeyBinding::new(Key::Left, Action::PaddleIncrease(Player::Two)),
            KeyBinding::new(Key::Right, Action::PaddleDecrease(Player::Two)),
            KeyBinding::new(Key::Char('c'), Action::CycleCamera),
            KeyBinding::new(Key::Escape, Action::Quit),
        ]
    }
}

/// Turns key transitions into per-tick paddle intent and one-shot requests
#[derive(Debug, Clone)]
pub struct InputAccumulator {
    bindings: Vec<KeyBinding>,
    paddle_intent: [f32; 2],
    camera_requested: bool,
    quit_requested: bool,
}

impl Default for InputAccumulator {
    fn default() -> Self {
        Self::new(KeyBinding::defaults())
    }
}

impl InputAccumulator {
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        Self {
            bindings,
            paddle_intent: [0.0; 2],
            camera_requested: false,
            quit_requested: false,
        }
    }

    fn action_for(&self, key: Key) -> Option<Action> {
        let key = key.normalized();
        self.bindings
            .iter()
            .find(|b| b.key.normalized() == key)
            .map(|b| b.action)
    }

    /// Apply one host event
    pub fn handle(&mut self, event: &HostEvent) {
        let key_event = match event {
            HostEvent::Quit => {
                self.quit_requested = true;
                return;
            }
            HostEvent::Key(key_event) => key_event,
        };

        if key_event.repeat {
            return;
        }
        let Some(action) = self.action_for(key_event.key) else {
            return;
        };

        if let Some((player, contribution)) = action.paddle_contribution() {
            let intent = &mut self.paddle_intent[player.index()];
            match key_event.transition {
                KeyTransition::Down => *intent += contribution,
                KeyTransition::Up => *intent -= contribution,
            }
            return;
        }

        if key_event.transition == KeyTransition::Down {
            match action {
                Action::CycleCamera => self.camera_requested = true,
                Action::Quit => self.quit_requested = true,
                _ => {}
            }
        }
    }

    /// Apply a batch of host events in order
    pub fn handle_all<'a, I>(&mut self, events: I)
    where
        I: IntoIterator<Item = &'a HostEvent>,
    {
        for event in events {
            self.handle(event);
        }
    }

    /// Current signed intent for a paddle
    pub fn intent(&self, player: Player) -> f32 {
        self.paddle_intent[player.index()]
    }

    pub fn camera_requested(&self) -> bool {
        self.camera_requested
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Build the next tick's input, consuming the camera request
    pub fn tick_input(&mut self) -> TickInput {
        TickInput {
            paddle_intent: self.paddle_intent,
            camera_change: std::mem::take(&mut self.camera_requested),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn press(acc: &mut InputAccumulator, key: Key) {
        acc.handle(&KeyEvent::down(key).into());
    }

    fn release(acc: &mut InputAccumulator, key: Key) {
        acc.handle(&KeyEvent::up(key).into());
    }

    #[test]
    fn test_single_key_press_and_release() {
        let mut acc = InputAccumulator::default();
        press(&mut acc, Key::Char('a'));
        assert_eq!(acc.intent(Player::One), 1.0);
        assert_eq!(acc.intent(Player::Two), 0.0);
        release(&mut acc, Key::Char('a'));
        assert_eq!(acc.intent(Player::One), 0.0);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let mut acc = InputAccumulator::default();
        press(&mut acc, Key::Left);
        press(&mut acc, Key::Right);
        assert_eq!(acc.intent(Player::Two), 0.0);
        release(&mut acc, Key::Left);
        assert_eq!(acc.intent(Player::Two), -1.0);
    }

    #[test]
    fn test_repeat_events_ignored() {
        let mut acc = InputAccumulator::default();
        press(&mut acc, Key::Char('s'));
        for _ in 0..5 {
            acc.handle(&KeyEvent::down(Key::Char('s')).repeated().into());
        }
        assert_eq!(acc.intent(Player::One), -1.0);
        release(&mut acc, Key::Char('s'));
        assert_eq!(acc.intent(Player::One), 0.0);
    }

    #[test]
    fn test_uppercase_char_matches_binding() {
        let mut acc = InputAccumulator::default();
        press(&mut acc, Key::Char('A'));
        assert_eq!(acc.intent(Player::One), 1.0);
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let mut acc = InputAccumulator::default();
        press(&mut acc, Key::Char('z'));
        press(&mut acc, Key::Space);
        let input = acc.tick_input();
        assert_eq!(input, TickInput::default());
        assert!(!acc.quit_requested());
    }

    #[test]
    fn test_camera_request_only_on_down_edge() {
        let mut acc = InputAccumulator::default();
        release(&mut acc, Key::Char('c'));
        assert!(!acc.camera_requested());
        acc.handle(&KeyEvent::down(Key::Char('c')).repeated().into());
        assert!(!acc.camera_requested());

        press(&mut acc, Key::Char('c'));
        assert!(acc.camera_requested());
        assert!(acc.tick_input().camera_change);
        // One-shot
        assert!(!acc.tick_input().camera_change);
    }

    #[test]
    fn test_quit_from_escape_and_window_close() {
        let mut acc = InputAccumulator::default();
        release(&mut acc, Key::Escape);
        assert!(!acc.quit_requested());
        press(&mut acc, Key::Escape);
        assert!(acc.quit_requested());

        let mut acc = InputAccumulator::default();
        acc.handle(&HostEvent::Quit);
        assert!(acc.quit_requested());
    }

    #[test]
    fn test_custom_bindings() {
        let mut acc = InputAccumulator::new(vec![KeyBinding::new(
            Key::Up,
            Action::PaddleDecrease(Player::Two),
        )]);
        press(&mut acc, Key::Up);
        press(&mut acc, Key::Left);
        assert_eq!(acc.intent(Player::Two), -1.0);
    }

    proptest! {
        #[test]
        fn prop_release_leaves_held_key(first_a in any::<bool>(), release_a in any::<bool>()) {
            let mut acc = InputAccumulator::default();
            let (a, s) = (Key::Char('a'), Key::Char('s'));
            if first_a {
                press(&mut acc, a);
                press(&mut acc, s);
            } else {
                press(&mut acc, s);
                press(&mut acc, a);
            }
            prop_assert_eq!(acc.intent(Player::One), 0.0);

            if release_a {
                release(&mut acc, a);
                prop_assert_eq!(acc.intent(Player::One), -1.0);
            } else {
                release(&mut acc, s);
                prop_assert_eq!(acc.intent(Player::One), 1.0);
            }
        }
    }
}
