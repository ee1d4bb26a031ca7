// activity-hook - feed raw input events on stdin, one per line, and the
// recorder is launched at most once per interval.
//
//   nvim ... | activity-hook --project website

use activity_hook::{
    ActivityHook, Clock, CommandEmitter, EpochSecondsClock, HookConfig, LineEventSource,
    SystemClock, DEFAULT_PROGRAM,
};
use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

/// Throttled activity hook for the hours time recorder
#[derive(Parser, Debug)]
#[command(name = "activity-hook")]
#[command(version)]
#[command(about = "Launch a time recorder at most once per interval while input events arrive on stdin", long_about = None)]
struct Args {
    /// Minimum seconds between two recorder launches
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u64).range(1..))]
    interval_secs: u64,

    /// Recorder executable
    #[arg(long, default_value = DEFAULT_PROGRAM)]
    program: PathBuf,

    /// Activity log file (defaults to ~/hours.log.json)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Project to record activity against
    #[arg(short, long)]
    project: Option<String>,

    /// Compare whole wall-clock seconds instead of the monotonic clock
    #[arg(long)]
    wall_clock: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn resolve_config(&self) -> Result<HookConfig> {
        let mut config = match &self.file {
            Some(file) => HookConfig::new(file),
            None => HookConfig::from_home().context("no --file given")?,
        };

        config = config
            .with_interval(Duration::from_secs(self.interval_secs))
            .with_program(&self.program);
        if let Some(project) = &self.project {
            config = config.with_project(project);
        }
        Ok(config)
    }
}

fn run<C: Clock>(clock: C, config: &HookConfig) -> Result<()> {
    let mut hook = ActivityHook::new(clock, CommandEmitter::new(config), config.interval)
        .context("invalid throttle interval")?;

    let stdin = io::stdin();
    let delivered = LineEventSource::new(stdin.lock())
        .run(|| {
            hook.on_input_event();
        })
        .context("failed to read input events")?;

    let snapshot = hook.metrics().snapshot();
    info!(
        delivered,
        emitted = snapshot.events_emitted,
        suppressed = snapshot.events_suppressed,
        failures = snapshot.emission_failures,
        "input closed"
    );
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();

    let config = args.resolve_config()?;
    info!(
        program = %config.program.display(),
        log_file = %config.log_file.display(),
        interval = ?config.interval,
        "activity hook registered"
    );

    if args.wall_clock {
        run(EpochSecondsClock::new(), &config)
    } else {
        run(SystemClock::new(), &config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults_with_file() {
        let args = Args::parse_from(["activity-hook", "--file", "/tmp/log.json"]);
        let config = args.resolve_config().unwrap();

        assert_eq!(config, HookConfig::new("/tmp/log.json"));
        assert!(!args.wall_clock);
    }

    #[test]
    fn test_args_overrides() {
        let args = Args::parse_from([
            "activity-hook",
            "-i",
            "5",
            "--program",
            "/opt/hours",
            "-f",
            "log.json",
            "-p",
            "website",
            "--wall-clock",
        ]);
        let config = args.resolve_config().unwrap();

        assert_eq!(config.interval, Duration::from_secs(5));
        assert_eq!(config.program, PathBuf::from("/opt/hours"));
        assert_eq!(config.project.as_deref(), Some("website"));
        assert!(args.wall_clock);
    }

    #[test]
    fn test_zero_interval_rejected_by_parser() {
        let result = Args::try_parse_from(["activity-hook", "--interval-secs", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
