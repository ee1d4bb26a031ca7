//! # activity-hook
//!
//! Throttled activity signalling for time trackers.
//!
//! A host application (an editor, a shell, a game loop) calls the hook on every
//! raw input event. The hook lets at most one event per interval through and,
//! for each one that passes, launches an external recorder (by default an
//! `hours` executable on `PATH`) to append an activity record. Every other
//! event is dropped without any I/O.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use activity_hook::{ActivityHook, CommandEmitter, HookConfig, SystemClock};
//!
//! // Resolve the log file once, at registration
//! let config = HookConfig::from_home().unwrap();
//! let emitter = CommandEmitter::new(&config);
//! let mut hook = ActivityHook::new(SystemClock::new(), emitter, config.interval).unwrap();
//!
//! // From the host's input dispatch
//! hook.on_input_event();
//! ```
//!
//! ## The Gate
//!
//! [`ThrottleGate`] holds a single deadline. An event at `now` passes only if
//! `now` is strictly after the deadline, and a pass moves the deadline to
//! `now + interval`. The comparison is strict: with whole-second clocks an
//! event landing exactly on the deadline is common, and it is suppressed.
//!
//! ```
//! use activity_hook::ThrottleGate;
//! use std::time::Duration;
//!
//! let mut gate = ThrottleGate::<u64>::new(Duration::from_secs(2)).unwrap();
//! let decisions: Vec<bool> = [100, 100, 101, 103, 104, 106]
//!     .into_iter()
//!     .map(|t| gate.evaluate(t))
//!     .collect();
//!
//! assert_eq!(decisions, [true, false, false, true, false, true]);
//! ```
//!
//! ## Failure Handling
//!
//! A failed emission (recorder missing, spawn error) is logged with
//! `tracing::warn!` and counted in [`Metrics`]; it is never returned to the
//! host. There are no retries: the next event past the deadline simply tries
//! again.
//!
//! ## Threading
//!
//! The hook is not synchronized. Hosts delivering events from several threads
//! must serialize access, for example by wrapping it in a `Mutex`.

// Domain layer - pure throttling logic
pub mod domain;

// Application layer - orchestration
pub mod application;

// Infrastructure layer - external adapters
pub mod infrastructure;

pub use domain::gate::{Deadline, GateError, ThrottleGate, Timeline};

pub use application::{
    hook::ActivityHook,
    metrics::{Metrics, MetricsSnapshot},
    ports::{Clock, EmitError, Emitter},
};

pub use infrastructure::{
    clock::{EpochSecondsClock, SystemClock},
    command::{CommandEmitter, DEFAULT_MAX_PENDING},
    config::{ConfigError, HookConfig, DEFAULT_INTERVAL, DEFAULT_PROGRAM},
    host::LineEventSource,
};
