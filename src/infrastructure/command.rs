//! Fire-and-forget recorder invocation.
//!
//! Each emission launches the recorder as
//! `<program> --file <log_file> record --auto [--project <name>]` with all
//! standard streams detached. The child is never waited on and its exit
//! status is never looked at.

use crate::application::ports::{EmitError, Emitter};
use crate::infrastructure::config::HookConfig;
use std::collections::VecDeque;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

/// Default bound on children tracked for reaping.
pub const DEFAULT_MAX_PENDING: usize = 16;

/// Emitter that spawns the external recorder process.
///
/// At most `max_pending` children are tracked. Past that, the oldest handle
/// is released: the process keeps running but is no longer reaped, so a
/// hanging recorder cannot grow the emitter without bound.
#[derive(Debug)]
pub struct CommandEmitter {
    program: PathBuf,
    args: Vec<OsString>,
    /// Children still running at the last emission, oldest first.
    running: VecDeque<Child>,
    max_pending: usize,
}

impl CommandEmitter {
    /// Build the emitter from a resolved configuration.
    pub fn new(config: &HookConfig) -> Self {
        let mut args: Vec<OsString> = vec![
            "--file".into(),
            config.log_file.clone().into_os_string(),
            "record".into(),
            "--auto".into(),
        ];
        if let Some(project) = &config.project {
            args.push("--project".into());
            args.push(project.into());
        }

        Self {
            program: config.program.clone(),
            args,
            running: VecDeque::new(),
            max_pending: DEFAULT_MAX_PENDING,
        }
    }

    /// Set how many unfinished children are tracked. Clamped to at least 1.
    pub fn with_max_pending(mut self, max_pending: usize) -> Self {
        self.max_pending = max_pending.max(1);
        self
    }

    /// The recorder executable.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// The fixed argument list passed on every emission.
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Number of spawned children not yet observed as finished.
    pub fn pending(&self) -> usize {
        self.running.len()
    }

    /// Drop children that have exited so they do not linger as zombies.
    fn reap(&mut self) {
        self.running
            .retain_mut(|child| !matches!(child.try_wait(), Ok(Some(_)) | Err(_)));
    }
}

impl Emitter for CommandEmitter {
    fn emit(&mut self) -> Result<(), EmitError> {
        self.reap();

        let child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| EmitError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        tracing::trace!(pid = child.id(), "recorder spawned");
        self.running.push_back(child);

        while self.running.len() > self.max_pending {
            if let Some(oldest) = self.running.pop_front() {
                tracing::debug!(pid = oldest.id(), "recorder still running, no longer tracked");
            }
        }
        Ok(())
    }
}
