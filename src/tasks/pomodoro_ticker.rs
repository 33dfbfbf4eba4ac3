//! Pomodoro ticker background task

use std::{sync::Arc, time::Duration};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::state::AppState;

/// Background task that delivers one tick per second while the countdown runs.
///
/// The controller's tick source flips a watch flag; this task is the only
/// interval in the process and drops it as soon as the flag clears, so a
/// paused or completed phase leaves no timer behind.
pub async fn pomodoro_ticker_task(state: Arc<AppState>) {
    info!("Starting pomodoro ticker task");

    let mut ticking_rx = state.ticking();

    loop {
        // Wait for the countdown to be started
        while !*ticking_rx.borrow_and_update() {
            if ticking_rx.changed().await.is_err() {
                info!("Tick source dropped, stopping pomodoro ticker");
                return;
            }
        }

        debug!("Tick source active, starting one-second interval");
        let mut ticker = interval(Duration::from_secs(1));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick of an interval completes immediately
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match state.tick_pomodoro() {
                        Ok(snapshot) if !snapshot.running => {
                            debug!("Countdown stopped after tick, phase now {}", snapshot.phase);
                        }
                        Ok(_) => {}
                        Err(e) => error!("Failed to tick pomodoro: {}", e),
                    }
                }

                changed = ticking_rx.changed() => {
                    if changed.is_err() {
                        info!("Tick source dropped, stopping pomodoro ticker");
                        return;
                    }
                    if !*ticking_rx.borrow_and_update() {
                        debug!("Tick source stopped, dropping interval");
                        break;
                    }
                    // Paused and resumed before this task woke: the next tick
                    // is a full second after the resume
                    ticker.reset();
                }
            }
        }
    }
}
