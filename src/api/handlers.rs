//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use tracing::{error, info};

use crate::{display::clock::local_clock, state::AppState};
use super::responses::{
    ClockResponse, HealthResponse, PomodoroResponse, RecorderResponse, StatusResponse,
};

/// Handle POST /pomodoro/toggle - Start or pause the countdown
pub async fn pomodoro_toggle_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PomodoroResponse>, StatusCode> {
    match state.toggle_pomodoro() {
        Ok(snapshot) => {
            let message = if snapshot.running {
                format!("{} started", snapshot.phase)
            } else {
                format!("{} paused", snapshot.phase)
            };
            info!("Pomodoro toggle endpoint called - {}", message);
            Ok(Json(PomodoroResponse::new(message, snapshot)))
        }
        Err(e) => {
            error!("Failed to toggle pomodoro: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /pomodoro - Return the current countdown and HUD view
pub async fn pomodoro_status_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PomodoroResponse>, StatusCode> {
    match state.get_pomodoro_snapshot() {
        Ok(snapshot) => Ok(Json(PomodoroResponse::new(
            format!("{} phase", snapshot.phase),
            snapshot,
        ))),
        Err(e) => {
            error!("Failed to get pomodoro state: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /record/toggle - Start or stop a session recording
pub async fn record_toggle_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RecorderResponse>, StatusCode> {
    match state.toggle_recording() {
        Ok(recorder) => {
            let message = if recorder.recording {
                "Session recording started"
            } else {
                "Session recording stopped"
            };
            Ok(Json(RecorderResponse::new(message.to_string(), recorder)))
        }
        Err(e) => {
            error!("Failed to toggle session recording: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /record - Return the recorder state
pub async fn record_status_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RecorderResponse>, StatusCode> {
    match state.get_recorder_state() {
        Ok(recorder) => Ok(Json(RecorderResponse::new(
            "Session recorder state".to_string(),
            recorder,
        ))),
        Err(e) => {
            error!("Failed to get recorder state: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /record/reset - Clear the captured session
pub async fn record_reset_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RecorderResponse>, StatusCode> {
    match state.reset_recording() {
        Ok(recorder) => {
            info!("Record reset endpoint called - recorder cleared");
            Ok(Json(RecorderResponse::new(
                "Session recorder cleared".to_string(),
                recorder,
            )))
        }
        Err(e) => {
            error!("Failed to reset session recorder: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /clock - Current local time
pub async fn clock_handler() -> Json<ClockResponse> {
    Json(ClockResponse {
        time: local_clock(),
        timestamp: Utc::now(),
    })
}

/// Handle GET /status - Return current server status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let pomodoro = match state.get_pomodoro_snapshot() {
        Ok(p) => p,
        Err(e) => {
            error!("Failed to get pomodoro state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let recorder = match state.get_recorder_state() {
        Ok(r) => r,
        Err(e) => {
            error!("Failed to get recorder state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        pomodoro,
        recorder,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
