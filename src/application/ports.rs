//! Ports (interfaces) for the application layer.
//!
//! In hexagonal architecture, ports define the interfaces that the application
//! layer needs. Infrastructure adapters implement these ports.

use crate::domain::gate::Timeline;
use std::fmt::Debug;
use std::path::PathBuf;

/// Port for obtaining current time.
///
/// This abstraction allows the hook to work with time without depending on
/// system clock implementation details. Infrastructure provides concrete
/// implementations (SystemClock, EpochSecondsClock, MockClock).
pub trait Clock: Send + Sync + Debug {
    /// Point-in-time type produced by this clock.
    type Instant: Timeline;

    /// Get the current instant.
    fn now(&self) -> Self::Instant;
}

/// Error returned when an emission could not be started.
#[derive(Debug)]
pub enum EmitError {
    /// The recorder process failed to launch
    Spawn {
        program: PathBuf,
        source: std::io::Error,
    },
    /// Any other adapter-specific failure
    Other(String),
}

impl std::fmt::Display for EmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmitError::Spawn { program, source } => {
                write!(f, "failed to launch {}: {}", program.display(), source)
            }
            EmitError::Other(msg) => write!(f, "emission failed: {}", msg),
        }
    }
}

impl std::error::Error for EmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EmitError::Spawn { source, .. } => Some(source),
            EmitError::Other(_) => None,
        }
    }
}

/// Port for signalling activity to an external recorder.
///
/// One call is one emission. Implementations must not wait for the recorder
/// to finish; delivery is not guaranteed.
pub trait Emitter: Debug {
    /// Start one emission.
    ///
    /// # Errors
    /// Returns `EmitError` if the emission could not be started. Callers log
    /// and drop the error; there are no retries.
    fn emit(&mut self) -> Result<(), EmitError>;
}
