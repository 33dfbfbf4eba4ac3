//! pomo-hud - A state-managed HTTP server driving a Pomodoro phase timer
//!
//! This library provides the Pomodoro phase controller, the HUD helpers that
//! render it, and the HTTP service that owns a controller and ticks it once a
//! second.

pub mod config;
pub mod display;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, Phase, PomodoroController, PomodoroDurations, TickSource};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
