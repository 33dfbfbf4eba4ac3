//! Phase announcer background task

use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, trace, warn};

use crate::{
    display::status_text,
    state::{AppState, PomodoroEvent},
};

/// Background task that logs Pomodoro phase boundaries
pub async fn phase_announcer_task(state: Arc<AppState>) {
    info!("Starting phase announcer task");

    let mut events = state.subscribe_events();

    loop {
        match events.recv().await {
            Ok(PomodoroEvent::PhaseComplete { phase, completed_work_cycles }) => {
                info!(
                    "{} ({}/{} work cycles)",
                    status_text(phase),
                    completed_work_cycles,
                    state.get_pomodoro_snapshot()
                        .map(|s| s.cycles_before_long)
                        .unwrap_or_default()
                );
            }
            Ok(PomodoroEvent::Tick { seconds_remaining, phase }) => {
                trace!("{} tick, {}s remaining", phase, seconds_remaining);
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!("Phase announcer lagged, skipped {} events", skipped);
            }
            Err(RecvError::Closed) => {
                info!("Event channel closed, stopping phase announcer");
                break;
            }
        }
    }
}
