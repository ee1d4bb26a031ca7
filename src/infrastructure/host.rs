//! Line-driven host adapter.
//!
//! For hosts that cannot link the library directly (an editor plugin, a shell
//! hook): the host writes one line per raw input event to a pipe, and every
//! line fires the registered callback once. Line contents are ignored.

use std::io::{self, BufRead};

/// Delivers one event per input line to a callback.
#[derive(Debug)]
pub struct LineEventSource<R> {
    reader: R,
}

impl<R: BufRead> LineEventSource<R> {
    /// Create a source reading events from `reader`.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Read until end of input, firing `on_event` once per line.
    ///
    /// A trailing line without a newline still counts as an event.
    ///
    /// # Errors
    /// Returns the underlying I/O error if reading fails. Events delivered
    /// before the error have already been handled.
    pub fn run<F>(mut self, mut on_event: F) -> io::Result<u64>
    where
        F: FnMut(),
    {
        let mut delivered = 0u64;
        let mut line = Vec::new();

        loop {
            line.clear();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            on_event();
            delivered += 1;
        }

        tracing::debug!(delivered, "event source exhausted");
        Ok(delivered)
    }
}
