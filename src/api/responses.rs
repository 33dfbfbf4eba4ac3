//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    display::PomodoroView,
    state::{PomodoroSnapshot, RecorderState},
};

/// Response for the Pomodoro endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PomodoroResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub pomodoro: PomodoroSnapshot,
    pub view: PomodoroView,
}

impl PomodoroResponse {
    /// Create a new response, status derived from whether the countdown runs
    pub fn new(message: String, pomodoro: PomodoroSnapshot) -> Self {
        let status = if pomodoro.running { "running" } else { "paused" };
        Self {
            status: status.to_string(),
            message,
            timestamp: Utc::now(),
            view: PomodoroView::from_snapshot(&pomodoro),
            pomodoro,
        }
    }
}

/// Response for the session recorder endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecorderResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub recorder: RecorderState,
}

impl RecorderResponse {
    pub fn new(message: String, recorder: RecorderState) -> Self {
        let status = if recorder.recording { "recording" } else { "idle" };
        Self {
            status: status.to_string(),
            message,
            timestamp: Utc::now(),
            recorder,
        }
    }
}

/// Digital clock response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockResponse {
    /// Local time as `HH:MM`
    pub time: String,
    pub timestamp: DateTime<Utc>,
}

/// Server status with timer and recorder information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub pomodoro: PomodoroSnapshot,
    pub recorder: RecorderState,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
