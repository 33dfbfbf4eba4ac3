//! Pomodoro phases and their durations

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default length of a focus phase in seconds
pub const WORK_DURATION: u64 = 25 * 60;
/// Default length of a short break in seconds
pub const SHORT_BREAK_DURATION: u64 = 3 * 60;
/// Default length of a long break in seconds
pub const LONG_BREAK_DURATION: u64 = 15 * 60;
/// Completed work phases needed before a long break
pub const CYCLES_BEFORE_LONG: u32 = 4;

/// One phase of the Pomodoro cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    Work,
    ShortBreak,
    LongBreak,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Work => "WORK",
            Phase::ShortBreak => "SHORT_BREAK",
            Phase::LongBreak => "LONG_BREAK",
        }
    }

    /// Whether this phase is one of the two breaks
    pub fn is_break(&self) -> bool {
        !matches!(self, Phase::Work)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phase lengths and the long-break threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomodoroDurations {
    pub work: u64,
    pub short_break: u64,
    pub long_break: u64,
    pub cycles_before_long: u32,
}

impl PomodoroDurations {
    /// Full length of `phase` in seconds
    pub fn of(&self, phase: Phase) -> u64 {
        match phase {
            Phase::Work => self.work,
            Phase::ShortBreak => self.short_break,
            Phase::LongBreak => self.long_break,
        }
    }
}

impl Default for PomodoroDurations {
    fn default() -> Self {
        Self {
            work: WORK_DURATION,
            short_break: SHORT_BREAK_DURATION,
            long_break: LONG_BREAK_DURATION,
            cycles_before_long: CYCLES_BEFORE_LONG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_durations_match_the_classic_cycle() {
        let durations = PomodoroDurations::default();
        assert_eq!(durations.of(Phase::Work), 1500);
        assert_eq!(durations.of(Phase::ShortBreak), 180);
        assert_eq!(durations.of(Phase::LongBreak), 900);
        assert_eq!(durations.cycles_before_long, 4);
    }

    #[test]
    fn phases_serialize_in_screaming_case() {
        let json = serde_json::to_string(&Phase::ShortBreak).unwrap();
        assert_eq!(json, "\"SHORT_BREAK\"");
        let phase: Phase = serde_json::from_str("\"LONG_BREAK\"").unwrap();
        assert_eq!(phase, Phase::LongBreak);
        assert!(phase.is_break());
        assert!(!Phase::Work.is_break());
    }
}
