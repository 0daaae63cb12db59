//! Timed input scripts for the headless host
//!
//! A script is a JSON array of `{ "at": seconds, "event": HostEvent }`
//! entries. Entries are replayed in time order.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::input::HostEvent;
use crate::error::{LoadError, load_json};

/// One scripted event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptedEvent {
    /// Session time in seconds at which the event is delivered
    pub at: f64,
    pub event: HostEvent,
}

/// Replays host events as session time advances
#[derive(Debug, Clone, Default)]
pub struct InputScript {
    events: Vec<ScriptedEvent>,
    cursor: usize,
}

impl InputScript {
    /// Build a script; entries are stably sorted by time
    pub fn new(mut events: Vec<ScriptedEvent>) -> Self {
        events.sort_by(|a, b| a.at.total_cmp(&b.at));
        Self { events, cursor: 0 }
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let events: Vec<ScriptedEvent> = load_json(path)?;
        log::info!("Loaded {} scripted events from {}", events.len(), path.display());
        Ok(Self::new(events))
    }

    /// Events due at or before `time` that have not been delivered yet
    pub fn drain_until(&mut self, time: f64) -> Vec<HostEvent> {
        let start = self.cursor;
        while self.cursor < self.events.len() && self.events[self.cursor].at <= time {
            self.cursor += 1;
        }
        self.events[start..self.cursor].iter().map(|e| e.event).collect()
    }

    /// Time of the last scripted event
    pub fn end_time(&self) -> f64 {
        self.events.last().map(|e| e.at).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::input::{Key, KeyEvent};

    #[test]
    fn test_parse_script_json() {
        let json = r#"[
            {"at": 0.5, "event": {"Key": {"key": {"Char": "a"}, "transition": "Down"}}},
            {"at": 1.0, "event": {"Key": {"key": "Left", "transition": "Up", "repeat": true}}},
            {"at": 2.0, "event": "Quit"}
        ]"#;
        let events: Vec<ScriptedEvent> = serde_json::from_str(json).unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].event, HostEvent::Key(KeyEvent::down(Key::Char('a'))));
        assert_eq!(
            events[1].event,
            HostEvent::Key(KeyEvent::up(Key::Left).repeated())
        );
        assert_eq!(events[2].event, HostEvent::Quit);
    }

    #[test]
    fn test_drain_in_time_order() {
        let mut script = InputScript::new(vec![
            ScriptedEvent { at: 1.0, event: HostEvent::Quit },
            ScriptedEvent { at: 0.1, event: KeyEvent::down(Key::Left).into() },
            ScriptedEvent { at: 0.2, event: KeyEvent::up(Key::Left).into() },
        ]);
        assert_eq!(script.end_time(), 1.0);
        assert!(script.drain_until(0.05).is_empty());
        assert_eq!(
            script.drain_until(0.5),
            vec![
                HostEvent::Key(KeyEvent::down(Key::Left)),
                HostEvent::Key(KeyEvent::up(Key::Left)),
            ]
        );
        assert_eq!(script.drain_until(1.0), vec![HostEvent::Quit]);
        assert!(script.drain_until(10.0).is_empty());
    }
}
