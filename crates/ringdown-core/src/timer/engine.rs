//! Countdown engine implementation.
//!
//! The engine is a deterministic state machine. It does not use internal
//! threads or the wall clock - the caller is responsible for calling `tick()`
//! once per interval boundary.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> (Idle via stop | Completed)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = CountdownEngine::new(TimerConfig::default());
//! engine.start();
//! // Once per interval:
//! engine.tick(); // Yields a Tick event, plus Completed at zero
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::config::TimerConfig;
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountdownState {
    Idle,
    Running,
    /// Ran to zero. The engine is inert; build a new one to run again.
    Completed,
}

/// Core countdown engine.
///
/// Advances by exactly one interval per `tick()` call, so tick N always
/// reports `duration - N * interval` remaining (saturating at zero).
#[derive(Debug, Clone)]
pub struct CountdownEngine {
    config: TimerConfig,
    state: CountdownState,
    /// Remaining time in milliseconds.
    remaining_ms: u64,
    /// Ticks delivered during the current run.
    ticks: u64,
}

impl CountdownEngine {
    /// Create a new engine in the `Idle` state with the full duration remaining.
    pub fn new(config: TimerConfig) -> Self {
        Self {
            config,
            state: CountdownState::Idle,
            remaining_ms: config.duration_ms(),
            ticks: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    pub fn total_ms(&self) -> u64 {
        self.config.duration_ms()
    }

    pub fn interval_ms(&self) -> u64 {
        self.config.interval_ms()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// 1.0 .. 0.0 fraction of time remaining; drives the ring display.
    pub fn progress(&self) -> f64 {
        self.remaining_ms as f64 / self.config.duration_ms() as f64
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            state: self.state,
            remaining_ms: self.remaining_ms,
            total_ms: self.total_ms(),
            progress: self.progress(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        match self.state {
            CountdownState::Idle => {
                self.state = CountdownState::Running;
                self.ticks = 0;
                Some(Event::Started {
                    duration_ms: self.config.duration_ms(),
                    interval_ms: self.config.interval_ms(),
                    at: Utc::now(),
                })
            }
            // Already running, or completed and therefore inert.
            CountdownState::Running | CountdownState::Completed => None,
        }
    }

    /// Halt tick delivery before completion. No completion fires; the
    /// remaining time resets to the full duration and the engine returns
    /// to `Idle`, ready for another `start()`.
    pub fn stop(&mut self) -> Option<Event> {
        match self.state {
            CountdownState::Running => {
                let halted_with = self.remaining_ms;
                self.state = CountdownState::Idle;
                self.remaining_ms = self.config.duration_ms();
                self.ticks = 0;
                Some(Event::Stopped {
                    remaining_ms: halted_with,
                    at: Utc::now(),
                })
            }
            _ => None,
        }
    }

    /// Advance by one interval. Returns the events produced at this
    /// boundary: a `Tick` always, plus `Completed` when the countdown
    /// reaches zero. Empty outside of `Running`.
    pub fn tick(&mut self) -> Vec<Event> {
        if self.state != CountdownState::Running {
            return Vec::new();
        }
        self.remaining_ms = self.remaining_ms.saturating_sub(self.config.interval_ms());
        self.ticks += 1;
        let mut events = vec![Event::Tick {
            remaining_ms: self.remaining_ms,
            total_ms: self.total_ms(),
            at: Utc::now(),
        }];
        if self.remaining_ms == 0 {
            self.state = CountdownState::Completed;
            events.push(Event::Completed {
                total_ms: self.total_ms(),
                ticks: self.ticks,
                at: Utc::now(),
            });
            // Invariant: remaining resets to the full duration on completion.
            self.remaining_ms = self.config.duration_ms();
        }
        events
    }
}
