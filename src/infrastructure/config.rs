//! Hook configuration resolved once at registration.
//!
//! Nothing in here is consulted on the event path. The home directory lookup
//! happens in `HookConfig::from_home` and the resulting path is carried as a
//! plain value into the emitter.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default throttle interval between two emissions.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(2);

/// Default recorder executable, looked up on `PATH`.
pub const DEFAULT_PROGRAM: &str = "hours";

/// Default log file name, relative to the home directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "hours.log.json";

/// Error returned when configuration cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No home directory could be determined for the current user
    NoHomeDirectory,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoHomeDirectory => {
                write!(f, "could not determine home directory for the activity log")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Configuration for an activity hook registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookConfig {
    /// Minimum time between two emissions
    pub interval: Duration,
    /// Recorder executable
    pub program: PathBuf,
    /// Activity log the recorder appends to
    pub log_file: PathBuf,
    /// Project forwarded to the recorder, if any
    pub project: Option<String>,
}

impl HookConfig {
    /// Create a config with default interval and program for `log_file`.
    pub fn new(log_file: impl Into<PathBuf>) -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            program: PathBuf::from(DEFAULT_PROGRAM),
            log_file: log_file.into(),
            project: None,
        }
    }

    /// Resolve the default log file under the current user's home directory.
    ///
    /// # Errors
    /// Returns `ConfigError::NoHomeDirectory` if the home directory is unknown.
    pub fn from_home() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
        Ok(Self::in_dir(&home))
    }

    /// Use the default log file name inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(DEFAULT_LOG_FILE_NAME))
    }

    /// Set the throttle interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set the recorder executable.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Set the activity log path.
    pub fn with_log_file(mut self, log_file: impl Into<PathBuf>) -> Self {
        self.log_file = log_file.into();
        self
    }

    /// Set the project name forwarded to the recorder.
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }
}
