//! Mock clock for testing.

use crate::application::ports::Clock;
use crate::domain::gate::Timeline;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Mock clock for testing.
///
/// Allows tests to control time progression explicitly, enabling deterministic
/// testing of the throttle interval. Works with any `Timeline`, so the same
/// mock drives both `Instant`-based and whole-second hooks.
///
/// # Examples
///
/// ```
/// use activity_hook::infrastructure::mocks::MockClock;
/// use activity_hook::application::ports::Clock;
/// use std::time::Duration;
///
/// let clock = MockClock::new(100u64);
/// assert_eq!(clock.now(), 100);
///
/// clock.advance(Duration::from_secs(3));
/// assert_eq!(clock.now(), 103);
///
/// clock.set(90);
/// assert_eq!(clock.now(), 90);
/// ```
///
/// # Thread Safety
///
/// All clones share the same underlying time value, so advancing time in
/// one clone affects all clones.
#[derive(Debug, Clone)]
pub struct MockClock<T = Instant> {
    current_time: Arc<Mutex<T>>,
}

impl<T> MockClock<T>
where
    T: Timeline + Send + 'static,
{
    /// Create a mock clock starting at `start`.
    pub fn new(start: T) -> Self {
        Self {
            current_time: Arc::new(Mutex::new(start)),
        }
    }

    /// Advance the clock by a duration.
    ///
    /// Panics if the result falls past the end of the timeline.
    pub fn advance(&self, duration: Duration) {
        let mut time = self
            .current_time
            .lock()
            .expect("MockClock mutex poisoned - a test thread panicked while holding the lock");
        *time = time
            .advance(duration)
            .expect("MockClock advanced past the end of its timeline");
    }

    /// Set the clock to a specific point, including one in the past.
    pub fn set(&self, instant: T) {
        let mut time = self
            .current_time
            .lock()
            .expect("MockClock mutex poisoned - a test thread panicked while holding the lock");
        *time = instant;
    }
}

impl<T> Clock for MockClock<T>
where
    T: Timeline + Send + 'static,
{
    type Instant = T;

    fn now(&self) -> T {
        *self
            .current_time
            .lock()
            .expect("MockClock mutex poisoned - a test thread panicked while holding the lock")
    }
}
