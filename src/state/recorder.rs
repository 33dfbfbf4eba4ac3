//! Work session recorder

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::display::clock::format_clock;

/// A finished recording, ready to be logged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedSession {
    /// Start time as `HH:MM`
    pub start: String,
    /// End time as `HH:MM`
    pub end: String,
    pub duration_minutes: i64,
}

/// Serializable view of the recorder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecorderState {
    pub recording: bool,
    pub started_at: Option<String>,
    pub last_session: Option<RecordedSession>,
}

/// Start/stop recorder for a work session
#[derive(Debug, Clone, Default)]
pub struct SessionRecorder {
    started_at: Option<NaiveDateTime>,
    last_session: Option<RecordedSession>,
}

impl SessionRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_recording(&self) -> bool {
        self.started_at.is_some()
    }

    /// Start a recording at `now`, or stop the current one and capture it
    pub fn toggle(&mut self, now: NaiveDateTime) -> RecorderState {
        match self.started_at.take() {
            None => {
                self.started_at = Some(now);
                self.last_session = None;
            }
            Some(start) => {
                self.last_session = Some(RecordedSession {
                    start: format_clock(start.time()),
                    end: format_clock(now.time()),
                    duration_minutes: (now - start).num_minutes().max(0),
                });
            }
        }
        self.state()
    }

    /// Drop the captured session and any recording in progress
    pub fn reset(&mut self) -> RecorderState {
        self.started_at = None;
        self.last_session = None;
        self.state()
    }

    pub fn state(&self) -> RecorderState {
        RecorderState {
            recording: self.is_recording(),
            started_at: self.started_at.map(|start| format_clock(start.time())),
            last_session: self.last_session.clone(),
        }
    }
}
