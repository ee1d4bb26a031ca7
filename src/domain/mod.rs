//! Domain layer - pure throttling logic with no external dependencies.
//!
//! This layer contains the throttle gate and the time abstraction it
//! compares against. Nothing here performs I/O or reads a clock.

pub mod gate;
