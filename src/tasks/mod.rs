//! Background tasks module
//!
//! This module contains background tasks that run alongside the HTTP server.

pub mod phase_announcer;
pub mod pomodoro_ticker;

// Re-export main functions
pub use phase_announcer::phase_announcer_task;
pub use pomodoro_ticker::pomodoro_ticker_task;
