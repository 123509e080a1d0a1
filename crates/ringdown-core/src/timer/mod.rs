mod config;
mod engine;
mod runner;

pub use config::{TimerConfig, DEFAULT_DURATION_MS, DEFAULT_INTERVAL_MS};
pub use engine::{CountdownEngine, CountdownState};
pub use runner::{CountdownHandle, CountdownRunner, Outcome};
