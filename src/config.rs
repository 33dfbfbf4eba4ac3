//! Configuration and CLI argument handling

use clap::Parser;
use thiserror::Error;

use crate::state::phase::{
    PomodoroDurations, CYCLES_BEFORE_LONG, LONG_BREAK_DURATION, SHORT_BREAK_DURATION,
    WORK_DURATION,
};

/// Invalid timer configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be greater than zero")]
    ZeroDuration { name: &'static str },
    #[error("cycles before a long break must be at least 1")]
    NoCycles,
}

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "pomo-hud")]
#[command(about = "A state-managed HTTP server driving a Pomodoro phase timer")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, env = "POMO_HUD_PORT", default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, env = "POMO_HUD_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Length of a focus phase in seconds
    #[arg(long, env = "POMO_HUD_WORK_SECS", default_value_t = WORK_DURATION)]
    pub work_secs: u64,

    /// Length of a short break in seconds
    #[arg(long, env = "POMO_HUD_SHORT_BREAK_SECS", default_value_t = SHORT_BREAK_DURATION)]
    pub short_break_secs: u64,

    /// Length of a long break in seconds
    #[arg(long, env = "POMO_HUD_LONG_BREAK_SECS", default_value_t = LONG_BREAK_DURATION)]
    pub long_break_secs: u64,

    /// Completed focus phases before a long break
    #[arg(long, env = "POMO_HUD_CYCLES_BEFORE_LONG", default_value_t = CYCLES_BEFORE_LONG)]
    pub cycles_before_long: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Validated timer durations
    pub fn durations(&self) -> Result<PomodoroDurations, ConfigError> {
        for (name, secs) in [
            ("work duration", self.work_secs),
            ("short break duration", self.short_break_secs),
            ("long break duration", self.long_break_secs),
        ] {
            if secs == 0 {
                return Err(ConfigError::ZeroDuration { name });
            }
        }
        if self.cycles_before_long == 0 {
            return Err(ConfigError::NoCycles);
        }

        Ok(PomodoroDurations {
            work: self.work_secs,
            short_break: self.short_break_secs,
            long_break: self.long_break_secs,
            cycles_before_long: self.cycles_before_long,
        })
    }
}
