use activity_hook::{Deadline, ThrottleGate, Timeline};
use proptest::prelude::*;
use std::time::{Duration, Instant, SystemTime};

fn gate(interval: u64) -> ThrottleGate<u64> {
    ThrottleGate::new(Duration::from_secs(interval)).unwrap()
}

#[test]
fn test_boundary_tick_is_suppressed() {
    let mut gate = gate(2);

    assert!(gate.evaluate(100));
    assert!(!gate.evaluate(102));
    assert!(gate.evaluate(103));
}

#[test]
fn test_editor_burst_scenario() {
    let mut gate = gate(2);

    let decisions: Vec<bool> = [100, 100, 101, 103, 104, 106]
        .iter()
        .map(|&t| gate.evaluate(t))
        .collect();

    assert_eq!(decisions, vec![true, false, false, true, false, true]);
}

#[test]
fn test_steady_typing_emits_every_third_second() {
    // One keystroke per second with a 2s interval: deadline ticks are dropped
    let mut gate = gate(2);

    let passed: Vec<u64> = (0..10).filter(|&t| gate.evaluate(t)).collect();

    assert_eq!(passed, vec![0, 3, 6, 9]);
}

/// Intervals from one nanosecond up to `Duration::MAX`, biased towards the top.
fn any_interval() -> impl Strategy<Value = Duration> {
    prop_oneof![
        (1u64..3_600_000).prop_map(Duration::from_millis),
        (u64::MAX - 1_000..=u64::MAX, 0u32..1_000_000_000)
            .prop_map(|(secs, nanos)| Duration::new(secs, nanos)),
        Just(Duration::MAX),
        (1u64..1_000).prop_map(Duration::from_nanos),
    ]
}

/// After a pass at `now`, the deadline is exactly `now + interval`, or the
/// gate is closed when that point does not exist.
fn assert_deadline_after_pass<T>(
    gate: &ThrottleGate<T>,
    now: T,
    interval: Duration,
) -> Result<(), TestCaseError>
where
    T: Timeline + Eq,
{
    match now.advance(interval) {
        Some(expected) => {
            prop_assert_eq!(gate.deadline(), Deadline::At(expected));
            prop_assert!(gate.next_allowed() > Some(now));
        }
        None => prop_assert_eq!(gate.deadline(), Deadline::Never),
    }
    Ok(())
}

proptest! {
    #[test]
    fn instant_deadline_strictly_after_pass(
        offsets in prop::collection::vec(0u64..10_000_000, 1..100),
        interval in any_interval(),
    ) {
        let base = Instant::now();
        let mut gate = ThrottleGate::new(interval).unwrap();
        let mut last_pass: Option<Instant> = None;

        for offset in offsets {
            let now = base + Duration::from_micros(offset);
            let passed = gate.evaluate(now);

            if passed {
                assert_deadline_after_pass(&gate, now, interval)?;
            }
            if let Some(prev) = last_pass {
                // Within the interval of the last pass, or past a closed gate
                let within = prev.checked_add(interval).map_or(true, |d| now <= d);
                if within {
                    prop_assert!(!passed);
                }
            }
            if passed {
                last_pass = Some(now);
            }
        }
    }

    #[test]
    fn system_time_deadline_strictly_after_pass(
        start_secs in 0u64..4_000_000_000,
        steps in prop::collection::vec(0u64..10_000, 1..100),
        interval in any_interval(),
    ) {
        let mut now = SystemTime::UNIX_EPOCH + Duration::from_secs(start_secs);
        let mut gate = ThrottleGate::new(interval).unwrap();
        let mut passes = 0;

        for step in steps {
            now += Duration::from_millis(step);
            if gate.evaluate(now) {
                passes += 1;
                assert_deadline_after_pass(&gate, now, interval)?;
            }
        }

        if now.checked_add(interval).is_none() {
            // Huge intervals close the gate after the very first event
            prop_assert_eq!(passes, 1);
        }
    }


    #[test]
    fn first_call_always_passes(now in any::<u64>(), interval in 1u64..3600) {
        let mut gate = gate(interval);
        prop_assert!(gate.evaluate(now));
    }

    #[test]
    fn emissions_bounded_by_elapsed_time(
        times in prop::collection::btree_set(0u64..100_000, 1..300),
        interval in 1u64..50,
    ) {
        let times: Vec<u64> = times.into_iter().collect();
        let mut gate = gate(interval);

        let passes = times.iter().filter(|&&t| gate.evaluate(t)).count() as u64;

        let span = times[times.len() - 1] - times[0];
        let bound = span.div_ceil(interval) + 1;
        prop_assert!(passes <= bound, "{} passes exceeds bound {}", passes, bound);
    }

    #[test]
    fn nothing_passes_within_interval_of_a_pass(
        times in prop::collection::vec(0u64..10_000, 1..300),
        interval in 1u64..50,
    ) {
        let mut gate = gate(interval);
        let mut last_pass: Option<u64> = None;

        for t in times {
            let passed = gate.evaluate(t);
            if let Some(prev) = last_pass {
                if t <= prev + interval {
                    prop_assert!(!passed, "event at {} passed within {}s of {}", t, interval, prev);
                }
            }
            if passed {
                last_pass = Some(t);
            }
        }
    }

    #[test]
    fn deadline_never_moves_backwards(
        times in prop::collection::vec(0u64..10_000, 1..300),
        interval in 1u64..50,
    ) {
        let mut gate = gate(interval);
        let mut previous = None;

        for t in times {
            if gate.evaluate(t) {
                prop_assert_eq!(gate.next_allowed(), Some(t + interval));
            }
            let current = gate.next_allowed();
            prop_assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn repeated_time_is_suppressed(now in 0u64..1_000_000, repeats in 1usize..50) {
        let mut gate = gate(2);
        prop_assert!(gate.evaluate(now));

        for _ in 0..repeats {
            prop_assert!(!gate.evaluate(now));
        }
        prop_assert!(gate.evaluate(now + 3));
    }
}
