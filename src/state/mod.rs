//! State management module
//!
//! This module contains the Pomodoro controller, the session recorder and the
//! application state that owns them.

pub mod app_state;
pub mod phase;
pub mod pomodoro;
pub mod recorder;
pub mod tick_source;

// Re-export main types
pub use app_state::{AppState, PomodoroEvent};
pub use phase::{Phase, PomodoroDurations};
pub use pomodoro::{PomodoroController, PomodoroSnapshot};
pub use recorder::{RecordedSession, RecorderState, SessionRecorder};
pub use tick_source::{ManualTickSource, TickSource, WatchTickSource};
