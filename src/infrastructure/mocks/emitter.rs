//! Mock emitter for testing.

use crate::application::ports::{EmitError, Emitter};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Emitter that counts emissions instead of launching anything.
///
/// Clones share their counters, so a test can keep one handle while the hook
/// owns another.
///
/// ```
/// use activity_hook::infrastructure::mocks::MockEmitter;
/// use activity_hook::application::ports::Emitter;
///
/// let emitter = MockEmitter::new();
/// let mut owned = emitter.clone();
///
/// emitter.fail_next(true);
/// assert!(owned.emit().is_err());
/// assert!(owned.emit().is_ok());
/// assert_eq!(emitter.count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockEmitter {
    attempts: Arc<AtomicUsize>,
    fail_next: Arc<AtomicBool>,
}

impl MockEmitter {
    /// Create a new mock emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of emissions attempted, including failed ones.
    pub fn count(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    /// Make the next emission fail (one-shot).
    pub fn fail_next(&self, fail: bool) {
        self.fail_next.store(fail, Ordering::SeqCst);
    }
}

impl Emitter for MockEmitter {
    fn emit(&mut self) -> Result<(), EmitError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(EmitError::Other("mock failure".to_string()));
        }
        Ok(())
    }
}
