//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, watch};
use tracing::{info, warn};

use super::{
    Phase, PomodoroController, PomodoroDurations, PomodoroSnapshot, RecorderState,
    SessionRecorder, WatchTickSource,
};

/// Notifications published by the Pomodoro controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PomodoroEvent {
    Tick { seconds_remaining: u64, phase: Phase },
    PhaseComplete { phase: Phase, completed_work_cycles: u32 },
}

/// Main application state that owns the Pomodoro timer and the session recorder
#[derive(Debug)]
pub struct AppState {
    /// The single Pomodoro controller for this server
    pub pomodoro: Arc<Mutex<PomodoroController<WatchTickSource>>>,
    /// Work session recorder
    pub recorder: Arc<Mutex<SessionRecorder>>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Channel for controller tick and phase notifications
    pub event_tx: broadcast::Sender<PomodoroEvent>,
    /// Tick flag the ticker task listens on
    ticking_rx: watch::Receiver<bool>,
}

impl AppState {
    /// Create a new AppState with a paused controller at the start of a work phase
    pub fn new(port: u16, host: String, durations: PomodoroDurations) -> Self {
        let (event_tx, _) = broadcast::channel(100);
        let (tick_source, ticking_rx) = WatchTickSource::new();

        let mut pomodoro = PomodoroController::new(durations, tick_source);

        let tick_tx = event_tx.clone();
        pomodoro.on_tick(move |seconds_remaining, phase| {
            // No subscribers is fine
            let _ = tick_tx.send(PomodoroEvent::Tick { seconds_remaining, phase });
        });
        let phase_tx = event_tx.clone();
        pomodoro.on_phase_complete(move |phase, completed_work_cycles| {
            let _ = phase_tx.send(PomodoroEvent::PhaseComplete { phase, completed_work_cycles });
        });

        Self {
            pomodoro: Arc::new(Mutex::new(pomodoro)),
            recorder: Arc::new(Mutex::new(SessionRecorder::new())),
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            event_tx,
            ticking_rx,
        }
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Start or pause the Pomodoro countdown
    pub fn toggle_pomodoro(&self) -> Result<PomodoroSnapshot, String> {
        let mut pomodoro = self.pomodoro.lock()
            .map_err(|e| format!("Failed to lock pomodoro state: {}", e))?;

        pomodoro.toggle_running();
        let snapshot = pomodoro.snapshot();
        drop(pomodoro); // Release the lock early

        self.record_action(if snapshot.running { "pomodoro-start" } else { "pomodoro-pause" });
        Ok(snapshot)
    }

    /// Deliver one tick to the Pomodoro controller
    pub fn tick_pomodoro(&self) -> Result<PomodoroSnapshot, String> {
        let mut pomodoro = self.pomodoro.lock()
            .map_err(|e| format!("Failed to lock pomodoro state: {}", e))?;

        pomodoro.tick();
        Ok(pomodoro.snapshot())
    }

    /// Get current Pomodoro state
    pub fn get_pomodoro_snapshot(&self) -> Result<PomodoroSnapshot, String> {
        self.pomodoro.lock()
            .map(|pomodoro| pomodoro.snapshot())
            .map_err(|e| format!("Failed to lock pomodoro state: {}", e))
    }

    /// Start or stop the session recorder at the current local time
    pub fn toggle_recording(&self) -> Result<RecorderState, String> {
        let mut recorder = self.recorder.lock()
            .map_err(|e| format!("Failed to lock recorder state: {}", e))?;

        let state = recorder.toggle(Local::now().naive_local());
        drop(recorder);

        if state.recording {
            info!("Session recording started");
            self.record_action("record-start");
        } else {
            info!("Session recording stopped: {:?}", state.last_session);
            self.record_action("record-stop");
        }
        Ok(state)
    }

    /// Clear the recorder after a session has been logged
    pub fn reset_recording(&self) -> Result<RecorderState, String> {
        let mut recorder = self.recorder.lock()
            .map_err(|e| format!("Failed to lock recorder state: {}", e))?;

        let state = recorder.reset();
        drop(recorder);

        self.record_action("record-reset");
        Ok(state)
    }

    /// Get current recorder state
    pub fn get_recorder_state(&self) -> Result<RecorderState, String> {
        self.recorder.lock()
            .map(|recorder| recorder.state())
            .map_err(|e| format!("Failed to lock recorder state: {}", e))
    }

    /// Subscribe to controller notifications
    pub fn subscribe_events(&self) -> broadcast::Receiver<PomodoroEvent> {
        self.event_tx.subscribe()
    }

    /// Receiver for the tick flag, set while the countdown is running
    pub fn ticking(&self) -> watch::Receiver<bool> {
        self.ticking_rx.clone()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }

    /// Pause the countdown if it is running, used on shutdown
    pub fn pause_pomodoro(&self) -> Result<(), String> {
        let mut pomodoro = self.pomodoro.lock()
            .map_err(|e| format!("Failed to lock pomodoro state: {}", e))?;

        if pomodoro.is_running() {
            warn!("Pausing running pomodoro with {}s remaining", pomodoro.seconds_remaining());
            pomodoro.toggle_running();
        }
        Ok(())
    }
}
