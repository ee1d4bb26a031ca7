//! Activity hook coordination logic.
//!
//! The hook binds a clock, a throttle gate and an emitter. A host registers it
//! as the callback fired on every raw input event.

use crate::application::metrics::Metrics;
use crate::application::ports::{Clock, Emitter};
use crate::domain::gate::{GateError, ThrottleGate};
use std::time::Duration;

/// Throttled activity hook.
///
/// Owns the only `ThrottleGate` for its registration. Not synchronized: hosts
/// that deliver events from several threads must serialize calls, e.g. by
/// wrapping the hook in a `Mutex`.
#[derive(Debug)]
pub struct ActivityHook<C, E>
where
    C: Clock,
    E: Emitter,
{
    gate: ThrottleGate<C::Instant>,
    clock: C,
    emitter: E,
    metrics: Metrics,
}

impl<C, E> ActivityHook<C, E>
where
    C: Clock,
    E: Emitter,
{
    /// Create a new hook.
    ///
    /// # Errors
    /// Returns `GateError::ZeroInterval` if `interval` is zero.
    pub fn new(clock: C, emitter: E, interval: Duration) -> Result<Self, GateError> {
        Ok(Self {
            gate: ThrottleGate::new(interval)?,
            clock,
            emitter,
            metrics: Metrics::new(),
        })
    }

    /// Handle one raw input event.
    ///
    /// Reads the clock and asks the gate. On a pass the emitter is invoked
    /// exactly once. Emission failures are logged and counted, never returned,
    /// so the host's event dispatch is never disturbed.
    ///
    /// Returns `true` if the event passed the gate.
    pub fn on_input_event(&mut self) -> bool {
        let now = self.clock.now();

        if !self.gate.evaluate(now) {
            self.metrics.record_suppressed();
            tracing::trace!(?now, "activity event suppressed");
            return false;
        }

        self.metrics.record_emitted();
        tracing::debug!(?now, deadline = ?self.gate.deadline(), "emitting activity");

        if let Err(e) = self.emitter.emit() {
            self.metrics.record_emission_failure();
            tracing::warn!(error = %e, "activity emission failed");
        }

        true
    }

    /// Turn the hook into a plain callback for host registration.
    pub fn into_callback(mut self) -> impl FnMut() {
        move || {
            self.on_input_event();
        }
    }

    /// Get the hook metrics.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Get the throttle gate.
    pub fn gate(&self) -> &ThrottleGate<C::Instant> {
        &self.gate
    }

    /// Get the emitter.
    pub fn emitter(&self) -> &E {
        &self.emitter
    }
}
