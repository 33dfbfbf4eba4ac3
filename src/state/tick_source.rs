//! Tick sources that drive the Pomodoro countdown

use tokio::sync::watch;

/// A periodic one-second tick the controller can switch on and off.
///
/// The controller owns its tick source and is the only caller of `start` and
/// `stop`. Whatever delivers the ticks calls back into the controller's
/// `tick()` while the source is active.
pub trait TickSource {
    /// Begin delivering ticks
    fn start(&mut self);
    /// Stop delivering ticks
    fn stop(&mut self);
    /// Whether ticks are currently being delivered
    fn is_active(&self) -> bool;
}

/// Tick source backed by a watch flag.
///
/// `pomodoro_ticker_task` waits on the receiving side and runs a one-second
/// interval for as long as the flag is set.
#[derive(Debug)]
pub struct WatchTickSource {
    tx: watch::Sender<bool>,
}

impl WatchTickSource {
    /// Create an inactive tick source and the receiver the ticker listens on
    pub fn new() -> (Self, watch::Receiver<bool>) {
        let (tx, rx) = watch::channel(false);
        (Self { tx }, rx)
    }
}

impl TickSource for WatchTickSource {
    fn start(&mut self) {
        self.tx.send_replace(true);
    }

    fn stop(&mut self) {
        self.tx.send_replace(false);
    }

    fn is_active(&self) -> bool {
        *self.tx.borrow()
    }
}

/// Tick source that only records start/stop calls; ticks are delivered by
/// calling the controller's `tick()` by hand.
#[derive(Debug, Default, Clone)]
pub struct ManualTickSource {
    active: bool,
    pub starts: u32,
    pub stops: u32,
}

impl ManualTickSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source that is already delivering ticks
    pub fn already_active() -> Self {
        Self { active: true, ..Self::default() }
    }
}

impl TickSource for ManualTickSource {
    fn start(&mut self) {
        self.active = true;
        self.starts += 1;
    }

    fn stop(&mut self) {
        self.active = false;
        self.stops += 1;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_source_flips_the_shared_flag() {
        let (mut source, rx) = WatchTickSource::new();
        assert!(!source.is_active());
        assert!(!*rx.borrow());

        source.start();
        assert!(source.is_active());
        assert!(*rx.borrow());

        source.stop();
        assert!(!source.is_active());
        assert!(!*rx.borrow());
    }

    #[test]
    fn watch_source_works_without_receivers() {
        let (mut source, rx) = WatchTickSource::new();
        drop(rx);
        source.start();
        assert!(source.is_active());
    }
}
