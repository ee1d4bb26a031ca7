//! Application layer - orchestration of domain logic.
//!
//! This layer coordinates the throttle gate with its collaborators:
//! - Activity hook (clock read, gate decision, emission)
//! - Metrics (emitted, suppressed and failed counts)
//!
//! ## Ports
//!
//! The application layer defines ports (traits) that infrastructure
//! adapters must implement. This keeps the application layer independent
//! from infrastructure details.

pub mod hook;
pub mod metrics;
pub mod ports;
