//! # Ringdown Core Library
//!
//! Core logic for the Ringdown countdown timer. All operations are available
//! through the library API; the CLI binary is a thin presentation layer over
//! this crate that renders the ring display.
//!
//! ## Key Components
//!
//! - [`CountdownEngine`]: deterministic caller-driven countdown state machine
//! - [`CountdownRunner`]: async driver that delivers tick/finish callbacks
//! - [`Config`]: TOML-backed application configuration
//! - [`Event`]: state-change notifications, serialized for the `--json` mode

pub mod error;
pub mod events;
pub mod format;
pub mod storage;
pub mod timer;

pub use error::{ConfigError, CoreError, ValidationError};
pub use events::Event;
pub use storage::Config;
pub use timer::{
    CountdownEngine, CountdownHandle, CountdownRunner, CountdownState, Outcome, TimerConfig,
};
