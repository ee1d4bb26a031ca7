//! Simulated editor session.
//!
//! Replays a burst of keystrokes against a mock clock and shows which ones
//! would launch the recorder with the default 2 second interval.
//!
//! Run with: cargo run --example editor_hook --features test-helpers

use activity_hook::infrastructure::mocks::{MockClock, MockEmitter};
use activity_hook::{ActivityHook, DEFAULT_INTERVAL};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("activity_hook=debug"))
        .init();

    let clock = MockClock::new(1_700_000_000u64);
    let emitter = MockEmitter::new();
    let mut hook = ActivityHook::new(clock.clone(), emitter.clone(), DEFAULT_INTERVAL)
        .expect("default interval is non-zero");

    println!("=== Editor Hook Example ===\n");

    // Seconds between consecutive keystrokes
    let gaps = [0, 0, 1, 2, 1, 0, 3, 1, 1, 1, 5, 0];
    for (i, gap) in gaps.iter().enumerate() {
        clock.advance(Duration::from_secs(*gap));
        let emitted = hook.on_input_event();
        println!(
            "keystroke {:>2} at t+{:>2}s -> {}",
            i + 1,
            clock_offset(&clock),
            if emitted { "record" } else { "drop" }
        );
    }

    let snapshot = hook.metrics().snapshot();
    println!(
        "\n{} keystrokes, {} recorder launches ({:.0}% suppressed)",
        snapshot.total_events(),
        emitter.count(),
        snapshot.suppression_rate() * 100.0
    );
}

fn clock_offset(clock: &MockClock<u64>) -> u64 {
    use activity_hook::Clock;
    clock.now() - 1_700_000_000
}
