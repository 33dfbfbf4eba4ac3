//! pomo-hud - A state-managed HTTP server driving a Pomodoro phase timer
//!
//! This is the main entry point for the pomo-hud application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use pomo_hud::{
    config::Config,
    state::AppState,
    api::create_router,
    tasks::{phase_announcer_task, pomodoro_ticker_task},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("pomo_hud={},tower_http=info", config.log_level()))
        .init();

    let durations = config.durations()?;

    info!("Starting pomo-hud server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, work={}s, short_break={}s, long_break={}s, cycles={}",
          config.host, config.port, durations.work, durations.short_break,
          durations.long_break, durations.cycles_before_long);

    // Create application state
    let state = Arc::new(AppState::new(config.port, config.host.clone(), durations));

    // Start the background tasks
    let ticker_state = Arc::clone(&state);
    tokio::spawn(async move {
        pomodoro_ticker_task(ticker_state).await;
    });
    let announcer_state = Arc::clone(&state);
    tokio::spawn(async move {
        phase_announcer_task(announcer_state).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /pomodoro/toggle - Start or pause the countdown");
    info!("  GET  /pomodoro        - Countdown and HUD view");
    info!("  POST /record/toggle   - Start or stop a session recording");
    info!("  GET  /record          - Session recorder state");
    info!("  POST /record/reset    - Clear the captured session");
    info!("  GET  /clock           - Local time");
    info!("  GET  /status          - Check current status");
    info!("  GET  /health          - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    if let Err(e) = state.pause_pomodoro() {
        tracing::warn!("Failed to pause pomodoro on shutdown: {}", e);
    }

    info!("Server shutdown complete");
    Ok(())
}
