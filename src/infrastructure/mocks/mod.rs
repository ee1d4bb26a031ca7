//! Mock implementations for testing.
//!
//! This module provides test doubles for infrastructure adapters,
//! enabling controlled testing of the hook without real time or processes.

pub mod clock;
pub mod emitter;
pub mod layer;

pub use clock::MockClock;
pub use emitter::MockEmitter;
pub use layer::{CapturedEvent, MockCaptureLayer};
