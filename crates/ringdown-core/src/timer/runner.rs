//! Async countdown runner.
//!
//! Bridges the deterministic engine to real time: awaits a tokio interval,
//! advances the engine once per boundary, and delivers the registered
//! tick/finish callbacks. Single cooperative task - no locking, no shared
//! mutable state beyond the engine owned by the runner.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;
use tokio::time::MissedTickBehavior;

use super::config::TimerConfig;
use super::engine::{CountdownEngine, CountdownState};
use crate::events::Event;

type TickFn = Box<dyn FnMut(u64) + Send>;
type FinishFn = Box<dyn FnOnce() + Send>;
type EventFn = Box<dyn FnMut(&Event) + Send>;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Ran to zero; the finish callback has fired.
    Completed,
    /// Stopped before completion with this much time left; no finish fired.
    Stopped { remaining_ms: u64 },
}

/// Stop control for a running countdown.
///
/// Cloneable so it can be handed to a signal handler; stopping more than
/// once is a no-op. A stop requested before the run begins takes effect on
/// the first boundary.
#[derive(Debug, Clone)]
pub struct CountdownHandle {
    stop: Arc<Notify>,
}

impl CountdownHandle {
    pub fn stop(&self) {
        self.stop.notify_one();
    }
}

/// Drives a [`CountdownEngine`] on a real-time interval.
pub struct CountdownRunner {
    engine: CountdownEngine,
    stop: Arc<Notify>,
    on_tick: Option<TickFn>,
    on_finish: Option<FinishFn>,
    on_event: Option<EventFn>,
}

impl CountdownRunner {
    pub fn new(config: TimerConfig) -> (Self, CountdownHandle) {
        let stop = Arc::new(Notify::new());
        let runner = Self {
            engine: CountdownEngine::new(config),
            stop: Arc::clone(&stop),
            on_tick: None,
            on_finish: None,
            on_event: None,
        };
        (runner, CountdownHandle { stop })
    }

    /// Called on every interval boundary with the remaining milliseconds.
    pub fn on_tick(mut self, f: impl FnMut(u64) + Send + 'static) -> Self {
        self.on_tick = Some(Box::new(f));
        self
    }

    /// Called exactly once when the countdown reaches zero.
    pub fn on_finish(mut self, f: impl FnOnce() + Send + 'static) -> Self {
        self.on_finish = Some(Box::new(f));
        self
    }

    /// Observes every event the engine produces, in order.
    pub fn on_event(mut self, f: impl FnMut(&Event) + Send + 'static) -> Self {
        self.on_event = Some(Box::new(f));
        self
    }

    /// Run to completion or until stopped. Consumes the runner; a completed
    /// countdown must be re-created to run again.
    pub async fn run(mut self) -> Outcome {
        let mut ticker =
            tokio::time::interval(Duration::from_millis(self.engine.interval_ms()));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick of a tokio interval resolves immediately.
        ticker.tick().await;

        if let Some(event) = self.engine.start() {
            self.emit(&event);
        }

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    for event in self.engine.tick() {
                        if let Event::Tick { remaining_ms, .. } = event {
                            if let Some(f) = self.on_tick.as_mut() {
                                f(remaining_ms);
                            }
                        }
                        self.emit(&event);
                    }
                    if self.engine.state() == CountdownState::Completed {
                        if let Some(f) = self.on_finish.take() {
                            f();
                        }
                        return Outcome::Completed;
                    }
                }
                _ = self.stop.notified() => {
                    let remaining_ms = self.engine.remaining_ms();
                    if let Some(event) = self.engine.stop() {
                        self.emit(&event);
                    }
                    return Outcome::Stopped { remaining_ms };
                }
            }
        }
    }

    fn emit(&mut self, event: &Event) {
        if let Some(f) = self.on_event.as_mut() {
            f(event);
        }
    }
}
