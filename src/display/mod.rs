//! HUD rendering helpers
//!
//! Everything the dashboard draws around the timer is derived from a
//! [`PomodoroSnapshot`]; nothing here holds state.

pub mod clock;

use serde::{Deserialize, Serialize};

use crate::state::{Phase, PomodoroSnapshot};

/// What the HUD shows for the Pomodoro timer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PomodoroView {
    pub countdown: String,
    pub title: String,
    pub progress_percent: f64,
    pub status_text: String,
    pub accent_color: String,
    pub button_label: String,
    /// One entry per work cycle before a long break, lit when completed
    pub cycle_dots: Vec<bool>,
}

impl PomodoroView {
    pub fn from_snapshot(snapshot: &PomodoroSnapshot) -> Self {
        Self {
            countdown: format_countdown(snapshot.seconds_remaining),
            title: format!(
                "({}:{}) {}",
                snapshot.seconds_remaining / 60,
                snapshot.seconds_remaining % 60,
                phase_label(snapshot.phase)
            ),
            progress_percent: progress_percent(snapshot),
            status_text: status_text(snapshot.phase).to_string(),
            accent_color: accent_color(snapshot.phase).to_string(),
            button_label: button_label(snapshot).to_string(),
            cycle_dots: cycle_dots(snapshot.completed_work_cycles, snapshot.cycles_before_long),
        }
    }
}

/// `MM:SS`, minutes padded to at least two digits
pub fn format_countdown(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Share of the current phase already elapsed, 0 to 100
pub fn progress_percent(snapshot: &PomodoroSnapshot) -> f64 {
    if snapshot.phase_duration == 0 {
        return 0.0;
    }
    let elapsed = snapshot.phase_duration.saturating_sub(snapshot.seconds_remaining);
    elapsed as f64 / snapshot.phase_duration as f64 * 100.0
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Work => "FOCUS",
        Phase::ShortBreak => "SHORT BREAK",
        Phase::LongBreak => "LONG BREAK",
    }
}

pub fn status_text(phase: Phase) -> &'static str {
    match phase {
        Phase::Work => ">>> READY TO FOCUS <<<",
        Phase::ShortBreak => ">>> STANDBY MODE (SHORT BREAK) <<<",
        Phase::LongBreak => ">>> SYSTEM COOLING (LONG BREAK) <<<",
    }
}

pub fn accent_color(phase: Phase) -> &'static str {
    match phase {
        Phase::Work => "#cccccc",
        Phase::ShortBreak => "#2ecc71",
        Phase::LongBreak => "#3498db",
    }
}

pub fn button_label(snapshot: &PomodoroSnapshot) -> &'static str {
    if snapshot.running {
        return if snapshot.phase.is_break() { "PAUSE BREAK" } else { "PAUSE FOCUS" };
    }
    if snapshot.seconds_remaining == snapshot.phase_duration {
        if snapshot.phases_completed == 0 {
            "INITIALIZE SEQUENCE"
        } else {
            "START NEXT PHASE"
        }
    } else {
        "RESUME"
    }
}

pub fn cycle_dots(completed: u32, total: u32) -> Vec<bool> {
    (0..total).map(|i| i < completed).collect()
}
