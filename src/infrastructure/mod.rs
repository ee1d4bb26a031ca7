//! Infrastructure layer - external adapters and integrations.
//!
//! This layer provides adapters for:
//! - Clock abstraction (monotonic, whole-second wall clock, mock)
//! - Configuration resolved once at registration
//! - Recorder process invocation
//! - Line-driven host event delivery

pub mod clock;
pub mod command;
pub mod config;
pub mod host;

/// Mock implementations for testing.
///
/// This module is only available when the `test-helpers` feature is enabled,
/// or during test builds.
///
/// To use these mocks in integration tests, add to your `Cargo.toml`:
/// ```toml
/// [dev-dependencies]
/// activity-hook = { version = "*", features = ["test-helpers"] }
/// ```
#[cfg(any(test, feature = "test-helpers"))]
pub mod mocks;
