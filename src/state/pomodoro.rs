//! Pomodoro phase controller
//!
//! Owns the countdown and the WORK -> SHORT_BREAK/LONG_BREAK -> WORK cycle.
//! The controller never advances on its own: a [`TickSource`] delivers one
//! `tick()` per second while the timer is running, and a completed phase always
//! stops and waits for the next `toggle_running()`.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{
    phase::{Phase, PomodoroDurations},
    tick_source::TickSource,
};

type TickObserver = Box<dyn FnMut(u64, Phase) + Send>;
type PhaseObserver = Box<dyn FnMut(Phase, u32) + Send>;

/// Point-in-time copy of the controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomodoroSnapshot {
    pub phase: Phase,
    pub seconds_remaining: u64,
    pub running: bool,
    pub completed_work_cycles: u32,
    pub phases_completed: u64,
    /// Full length of the current phase
    pub phase_duration: u64,
    pub cycles_before_long: u32,
}

/// The Pomodoro state machine
pub struct PomodoroController<T: TickSource> {
    durations: PomodoroDurations,
    phase: Phase,
    seconds_remaining: u64,
    running: bool,
    completed_work_cycles: u32,
    phases_completed: u64,
    tick_source: T,
    tick_observers: Vec<TickObserver>,
    phase_observers: Vec<PhaseObserver>,
}

impl<T: TickSource> PomodoroController<T> {
    /// Create a paused controller at the start of a work phase
    pub fn new(durations: PomodoroDurations, tick_source: T) -> Self {
        Self {
            durations,
            phase: Phase::Work,
            seconds_remaining: durations.work,
            running: false,
            completed_work_cycles: 0,
            phases_completed: 0,
            tick_source,
            tick_observers: Vec::new(),
            phase_observers: Vec::new(),
        }
    }

    /// Register a callback for per-second display refreshes
    pub fn on_tick<F>(&mut self, observer: F)
    where
        F: FnMut(u64, Phase) + Send + 'static,
    {
        self.tick_observers.push(Box::new(observer));
    }

    /// Register a callback for phase boundaries
    pub fn on_phase_complete<F>(&mut self, observer: F)
    where
        F: FnMut(Phase, u32) + Send + 'static,
    {
        self.phase_observers.push(Box::new(observer));
    }

    /// Start the countdown if paused, pause it if running.
    ///
    /// Pausing keeps `seconds_remaining` exactly where it is.
    pub fn toggle_running(&mut self) {
        if self.running {
            self.running = false;
            self.tick_source.stop();
            info!(
                "Pomodoro paused in {} with {}s remaining",
                self.phase, self.seconds_remaining
            );
        } else {
            if self.tick_source.is_active() {
                warn!("Tick source already active, not starting another one");
            } else {
                self.tick_source.start();
            }
            self.running = true;
            info!(
                "Pomodoro started in {} with {}s remaining",
                self.phase, self.seconds_remaining
            );
        }
        self.notify_tick();
    }

    /// Advance the countdown by one second.
    ///
    /// A tick that arrives at zero completes the phase. Ticks delivered while
    /// paused are ignored.
    pub fn tick(&mut self) {
        if !self.running {
            debug!("Ignoring tick while paused");
            return;
        }

        if self.seconds_remaining > 0 {
            self.seconds_remaining -= 1;
            self.notify_tick();
        } else {
            self.complete_phase();
            self.notify_tick();
        }
    }

    fn complete_phase(&mut self) {
        self.tick_source.stop();
        self.running = false;

        let finished = self.phase;
        let next = match finished {
            Phase::Work => {
                self.completed_work_cycles += 1;
                if self.completed_work_cycles >= self.durations.cycles_before_long {
                    self.completed_work_cycles = 0;
                    Phase::LongBreak
                } else {
                    Phase::ShortBreak
                }
            }
            Phase::ShortBreak | Phase::LongBreak => Phase::Work,
        };

        self.phase = next;
        self.seconds_remaining = self.durations.of(next);
        self.phases_completed += 1;

        info!(
            "{} complete, next phase {} ({} work cycles toward long break)",
            finished, next, self.completed_work_cycles
        );

        for observer in self.phase_observers.iter_mut() {
            observer(next, self.completed_work_cycles);
        }
    }

    fn notify_tick(&mut self) {
        let (remaining, phase) = (self.seconds_remaining, self.phase);
        for observer in self.tick_observers.iter_mut() {
            observer(remaining, phase);
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn seconds_remaining(&self) -> u64 {
        self.seconds_remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn completed_work_cycles(&self) -> u32 {
        self.completed_work_cycles
    }

    /// Total phase completions since creation
    pub fn phases_completed(&self) -> u64 {
        self.phases_completed
    }

    pub fn durations(&self) -> &PomodoroDurations {
        &self.durations
    }

    pub fn tick_source(&self) -> &T {
        &self.tick_source
    }

    pub fn snapshot(&self) -> PomodoroSnapshot {
        PomodoroSnapshot {
            phase: self.phase,
            seconds_remaining: self.seconds_remaining,
            running: self.running,
            completed_work_cycles: self.completed_work_cycles,
            phases_completed: self.phases_completed,
            phase_duration: self.durations.of(self.phase),
            cycles_before_long: self.durations.cycles_before_long,
        }
    }
}

impl<T: TickSource + fmt::Debug> fmt::Debug for PomodoroController<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PomodoroController")
            .field("durations", &self.durations)
            .field("phase", &self.phase)
            .field("seconds_remaining", &self.seconds_remaining)
            .field("running", &self.running)
            .field("completed_work_cycles", &self.completed_work_cycles)
            .field("phases_completed", &self.phases_completed)
            .field("tick_source", &self.tick_source)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::state::tick_source::ManualTickSource;

    fn controller() -> PomodoroController<ManualTickSource> {
        PomodoroController::new(PomodoroDurations::default(), ManualTickSource::new())
    }

    fn short_controller() -> PomodoroController<ManualTickSource> {
        let durations = PomodoroDurations {
            work: 5,
            short_break: 2,
            long_break: 3,
            cycles_before_long: 4,
        };
        PomodoroController::new(durations, ManualTickSource::new())
    }

    fn ticks(pomodoro: &mut PomodoroController<ManualTickSource>, n: u64) {
        for _ in 0..n {
            pomodoro.tick();
        }
    }

    /// Run the current phase to completion: full countdown plus the completing tick
    fn finish_phase(pomodoro: &mut PomodoroController<ManualTickSource>) {
        if !pomodoro.is_running() {
            pomodoro.toggle_running();
        }
        let remaining = pomodoro.seconds_remaining();
        ticks(pomodoro, remaining + 1);
    }

    #[test]
    fn toggle_does_not_start_a_second_tick_source() {
        let mut pomodoro =
            PomodoroController::new(PomodoroDurations::default(), ManualTickSource::already_active());
        pomodoro.toggle_running();
        assert!(pomodoro.is_running());
        assert!(pomodoro.tick_source().is_active());
        assert_eq!(pomodoro.tick_source().starts, 0);

        pomodoro.tick();
        assert_eq!(pomodoro.seconds_remaining(), 1499);
    }

    #[test]
    fn starts_paused_at_full_work_duration() {
        let pomodoro = controller();
        assert_eq!(pomodoro.phase(), Phase::Work);
        assert_eq!(pomodoro.seconds_remaining(), 1500);
        assert!(!pomodoro.is_running());
        assert_eq!(pomodoro.completed_work_cycles(), 0);
        assert!(!pomodoro.tick_source().is_active());
    }

    #[test]
    fn ticks_decrement_without_changing_phase() {
        let mut pomodoro = controller();
        pomodoro.toggle_running();
        for n in [1u64, 10, 100, 1000] {
            let before = pomodoro.seconds_remaining();
            ticks(&mut pomodoro, n);
            assert_eq!(pomodoro.seconds_remaining(), before - n);
            assert_eq!(pomodoro.phase(), Phase::Work);
        }
    }

    #[test]
    fn pause_and_resume_preserve_the_countdown() {
        let mut pomodoro = controller();
        pomodoro.toggle_running();
        ticks(&mut pomodoro, 42);

        pomodoro.toggle_running();
        assert!(!pomodoro.is_running());
        assert!(!pomodoro.tick_source().is_active());
        assert_eq!(pomodoro.seconds_remaining(), 1458);

        pomodoro.toggle_running();
        assert!(pomodoro.is_running());
        assert_eq!(pomodoro.seconds_remaining(), 1458);
        assert_eq!(pomodoro.phase(), Phase::Work);
        assert_eq!(pomodoro.tick_source().starts, 2);
        assert_eq!(pomodoro.tick_source().stops, 1);
    }

    #[test]
    fn ticks_while_paused_are_ignored() {
        let mut pomodoro = controller();
        ticks(&mut pomodoro, 10);
        assert_eq!(pomodoro.seconds_remaining(), 1500);

        pomodoro.toggle_running();
        ticks(&mut pomodoro, 3);
        pomodoro.toggle_running();
        ticks(&mut pomodoro, 3);
        assert_eq!(pomodoro.seconds_remaining(), 1497);
    }

    #[test]
    fn fresh_controller_completes_first_work_phase() {
        let mut pomodoro = controller();
        pomodoro.toggle_running();
        ticks(&mut pomodoro, 1500);
        assert_eq!(pomodoro.seconds_remaining(), 0);
        assert_eq!(pomodoro.phase(), Phase::Work);
        assert!(pomodoro.is_running());

        pomodoro.tick();
        assert_eq!(pomodoro.phase(), Phase::ShortBreak);
        assert_eq!(pomodoro.seconds_remaining(), 180);
        assert_eq!(pomodoro.completed_work_cycles(), 1);
        assert!(!pomodoro.is_running());
        assert!(!pomodoro.tick_source().is_active());
    }

    #[test]
    fn work_completion_below_threshold_enters_short_break() {
        let mut pomodoro = short_controller();
        for k in 0..3 {
            assert_eq!(pomodoro.phase(), Phase::Work);
            assert_eq!(pomodoro.completed_work_cycles(), k);
            finish_phase(&mut pomodoro);
            assert_eq!(pomodoro.phase(), Phase::ShortBreak);
            assert_eq!(pomodoro.completed_work_cycles(), k + 1);
            finish_phase(&mut pomodoro);
        }
    }

    #[test]
    fn fourth_work_completion_enters_long_break_and_resets_cycles() {
        let mut pomodoro = short_controller();
        for _ in 0..3 {
            finish_phase(&mut pomodoro);
            finish_phase(&mut pomodoro);
        }
        assert_eq!(pomodoro.completed_work_cycles(), 3);

        finish_phase(&mut pomodoro);
        assert_eq!(pomodoro.phase(), Phase::LongBreak);
        assert_eq!(pomodoro.seconds_remaining(), 3);
        assert_eq!(pomodoro.completed_work_cycles(), 0);
    }

    #[test]
    fn four_short_break_cycles_then_long_break_with_five_cycle_threshold() {
        let durations = PomodoroDurations {
            work: 4,
            short_break: 2,
            long_break: 6,
            cycles_before_long: 5,
        };
        let mut pomodoro = PomodoroController::new(durations, ManualTickSource::new());
        for _ in 0..4 {
            finish_phase(&mut pomodoro);
            assert_eq!(pomodoro.phase(), Phase::ShortBreak);
            finish_phase(&mut pomodoro);
            assert_eq!(pomodoro.phase(), Phase::Work);
        }

        finish_phase(&mut pomodoro);
        assert_eq!(pomodoro.phase(), Phase::LongBreak);
        assert_eq!(pomodoro.completed_work_cycles(), 0);
    }

    #[test]
    fn breaks_always_return_to_full_work_phase() {
        let mut pomodoro = short_controller();
        finish_phase(&mut pomodoro);
        assert_eq!(pomodoro.phase(), Phase::ShortBreak);
        finish_phase(&mut pomodoro);
        assert_eq!(pomodoro.phase(), Phase::Work);
        assert_eq!(pomodoro.seconds_remaining(), 5);

        for _ in 0..3 {
            finish_phase(&mut pomodoro);
            finish_phase(&mut pomodoro);
        }
        // three more work phases: the last one went to a long break and back
        assert_eq!(pomodoro.phase(), Phase::Work);
        assert_eq!(pomodoro.seconds_remaining(), 5);
        assert_eq!(pomodoro.completed_work_cycles(), 0);
    }

    #[test]
    fn completion_never_auto_chains() {
        let mut pomodoro = short_controller();
        finish_phase(&mut pomodoro);
        ticks(&mut pomodoro, 10);
        assert_eq!(pomodoro.phase(), Phase::ShortBreak);
        assert_eq!(pomodoro.seconds_remaining(), 2);
        assert_eq!(pomodoro.tick_source().starts, 1);
        assert_eq!(pomodoro.tick_source().stops, 1);
    }

    #[test]
    fn seconds_remaining_stays_within_phase_duration() {
        let mut pomodoro = short_controller();
        pomodoro.toggle_running();
        for _ in 0..200 {
            pomodoro.tick();
            if !pomodoro.is_running() {
                pomodoro.toggle_running();
            }
            let snapshot = pomodoro.snapshot();
            assert!(snapshot.seconds_remaining <= snapshot.phase_duration);
            assert!(snapshot.completed_work_cycles < snapshot.cycles_before_long);
        }
    }

    #[test]
    fn observers_see_ticks_and_phase_completions() {
        let tick_log = Arc::new(Mutex::new(Vec::new()));
        let phase_log = Arc::new(Mutex::new(Vec::new()));

        let mut pomodoro = short_controller();
        let sink = Arc::clone(&tick_log);
        pomodoro.on_tick(move |remaining, phase| sink.lock().unwrap().push((remaining, phase)));
        let sink = Arc::clone(&phase_log);
        pomodoro.on_phase_complete(move |phase, cycles| sink.lock().unwrap().push((phase, cycles)));

        finish_phase(&mut pomodoro);

        let ticks = tick_log.lock().unwrap().clone();
        // toggle refresh, five decrements, then the completion refresh
        assert_eq!(ticks.len(), 7);
        assert_eq!(ticks[0], (5, Phase::Work));
        assert_eq!(ticks[5], (0, Phase::Work));
        assert_eq!(ticks[6], (2, Phase::ShortBreak));

        assert_eq!(*phase_log.lock().unwrap(), vec![(Phase::ShortBreak, 1)]);
    }

    #[test]
    fn phases_completed_counts_every_boundary() {
        let mut pomodoro = short_controller();
        assert_eq!(pomodoro.phases_completed(), 0);
        finish_phase(&mut pomodoro);
        finish_phase(&mut pomodoro);
        assert_eq!(pomodoro.phases_completed(), 2);
    }
}
