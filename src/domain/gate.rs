//! Throttle gate for activity emissions.
//!
//! The gate is a single deadline compared against time. An event passes only
//! when it arrives strictly after the deadline; a pass moves the deadline to
//! `now + interval`. Everything else is suppressed without touching state.

use std::time::{Duration, Instant, SystemTime};

/// Error returned when gate construction fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateError {
    /// Throttle interval must be greater than zero
    ZeroInterval,
}

impl std::fmt::Display for GateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GateError::ZeroInterval => write!(f, "throttle interval must be greater than 0"),
        }
    }
}

impl std::error::Error for GateError {}

/// A point on a time axis the gate can compare and advance.
///
/// Advancing must never panic. A point past the end of the representable
/// range is reported as `None`.
pub trait Timeline: Copy + PartialOrd + std::fmt::Debug {
    /// Return the point `interval` after `self`, if it can be represented.
    fn advance(self, interval: Duration) -> Option<Self>;
}

impl Timeline for Instant {
    fn advance(self, interval: Duration) -> Option<Self> {
        self.checked_add(interval)
    }
}

impl Timeline for SystemTime {
    fn advance(self, interval: Duration) -> Option<Self> {
        self.checked_add(interval)
    }
}

/// Whole seconds.
///
/// Sub-second intervals round up to the next second so that a pass always
/// moves the deadline strictly past the event time.
impl Timeline for u64 {
    fn advance(self, interval: Duration) -> Option<Self> {
        let mut secs = interval.as_secs();
        if interval.subsec_nanos() > 0 {
            secs = secs.checked_add(1)?;
        }
        self.checked_add(secs)
    }
}

/// Where the gate currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deadline<T> {
    /// No event has passed yet; the next one will.
    Open,
    /// Events strictly after this point pass.
    At(T),
    /// `now + interval` fell past the end of the timeline; nothing passes again.
    Never,
}

/// Throttle gate deciding which activity events trigger an emission.
///
/// The first event always passes. After a pass at `now`, every event up to
/// and including `now + interval` is suppressed. If `now + interval` cannot
/// be represented on the timeline, the gate stays closed for good.
///
/// # Example
/// ```
/// use activity_hook::ThrottleGate;
/// use std::time::Duration;
///
/// let mut gate = ThrottleGate::<u64>::new(Duration::from_secs(2)).unwrap();
///
/// assert!(gate.evaluate(100)); // first event always passes
/// assert!(!gate.evaluate(101));
/// assert!(!gate.evaluate(102)); // exactly at the deadline: suppressed
/// assert!(gate.evaluate(103));
/// ```
#[derive(Debug, Clone)]
pub struct ThrottleGate<T: Timeline> {
    deadline: Deadline<T>,
    interval: Duration,
}

impl<T: Timeline> ThrottleGate<T> {
    /// Create a new gate.
    ///
    /// # Errors
    /// Returns `GateError::ZeroInterval` if `interval` is zero.
    pub fn new(interval: Duration) -> Result<Self, GateError> {
        if interval.is_zero() {
            return Err(GateError::ZeroInterval);
        }
        Ok(Self {
            deadline: Deadline::Open,
            interval,
        })
    }

    /// Decide whether an event at `now` should trigger an emission.
    ///
    /// Returns `true` and advances the deadline when `now` is strictly after
    /// it. Returns `false` otherwise, including when `now` went backwards.
    pub fn evaluate(&mut self, now: T) -> bool {
        let passes = match self.deadline {
            Deadline::Open => true,
            Deadline::At(deadline) => now > deadline,
            Deadline::Never => false,
        };

        if passes {
            self.deadline = match now.advance(self.interval) {
                Some(next) => Deadline::At(next),
                None => Deadline::Never,
            };
        }
        passes
    }

    /// The configured throttle interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// The current deadline state.
    pub fn deadline(&self) -> Deadline<T> {
        self.deadline
    }

    /// The current deadline, or `None` if there is no finite one.
    pub fn next_allowed(&self) -> Option<T> {
        match self.deadline {
            Deadline::At(deadline) => Some(deadline),
            Deadline::Open | Deadline::Never => None,
        }
    }
}
