//! Clock adapters for time operations.
//!
//! Provides a monotonic `SystemClock` and a whole-second wall clock.
//!
//! # Testing
//!
//! See `MockClock` (in `crate::infrastructure::mocks`) for a controllable test clock.
//! Available with the `test-helpers` feature or in test builds:
//!
//! ```toml
//! [dev-dependencies]
//! activity-hook = { version = "*", features = ["test-helpers"] }
//! ```

use crate::application::ports::Clock;
use std::time::{Instant, SystemTime};

/// System clock implementation using `Instant::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock.
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Wall clock reporting whole seconds since the Unix epoch.
///
/// With one-second resolution, an event landing exactly on the throttle
/// deadline is common and is suppressed. A system clock set before the epoch
/// reads as `0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EpochSecondsClock;

impl EpochSecondsClock {
    /// Create a new epoch-seconds clock.
    pub fn new() -> Self {
        Self
    }
}

impl Clock for EpochSecondsClock {
    type Instant = u64;

    fn now(&self) -> u64 {
        SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}
