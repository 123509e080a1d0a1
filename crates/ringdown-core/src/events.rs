use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::CountdownState;

/// Every state change in the countdown produces an Event.
/// The CLI prints them in `--json` mode; tests assert on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    Started {
        duration_ms: u64,
        interval_ms: u64,
        at: DateTime<Utc>,
    },
    Tick {
        remaining_ms: u64,
        total_ms: u64,
        at: DateTime<Utc>,
    },
    /// Stopped before completion; no `Completed` follows.
    Stopped {
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    /// Fires exactly once, when the remaining time reaches zero.
    Completed {
        total_ms: u64,
        ticks: u64,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: CountdownState,
        remaining_ms: u64,
        total_ms: u64,
        progress: f64,
        at: DateTime<Utc>,
    },
}
