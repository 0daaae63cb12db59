//! Platform abstraction layer
//!
//! Everything between the host window/event loop and the simulation:
//! - Time/ticks
//! - Input events
//! - The per-frame session loop
//! - Scripted input for headless runs

pub mod input;
pub mod script;
pub mod session;
pub mod time;

pub use input::{Action, HostEvent, InputAccumulator, Key, KeyBinding, KeyEvent, KeyTransition};
pub use script::{InputScript, ScriptedEvent};
pub use session::Session;
pub use time::{Clock, FixedClock, MonotonicClock};
