use activity_hook::infrastructure::mocks::{MockClock, MockEmitter};
use activity_hook::{ActivityHook, SystemClock, ThrottleGate};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Benchmark the bare gate decision on both timelines
fn bench_gate_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("gate_evaluate");
    group.throughput(Throughput::Elements(1));

    group.bench_function("epoch_seconds_suppressed", |b| {
        let mut gate = ThrottleGate::<u64>::new(Duration::from_secs(2)).unwrap();
        gate.evaluate(1_000);
        b.iter(|| gate.evaluate(black_box(1_001)))
    });

    group.bench_function("instant_suppressed", |b| {
        let mut gate = ThrottleGate::new(Duration::from_secs(3600)).unwrap();
        let now = Instant::now();
        gate.evaluate(now);
        b.iter(|| gate.evaluate(black_box(now)))
    });

    group.bench_function("epoch_seconds_always_passing", |b| {
        let mut gate = ThrottleGate::<u64>::new(Duration::from_secs(2)).unwrap();
        let mut t = 0u64;
        b.iter(|| {
            t += 3;
            gate.evaluate(black_box(t))
        })
    });

    group.finish();
}

/// Benchmark the full hook path (clock read, gate, metrics) for a burst of events
fn bench_hook_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("hook_burst");

    for burst in [10u64, 100, 1_000] {
        group.throughput(Throughput::Elements(burst));

        group.bench_with_input(BenchmarkId::new("system_clock", burst), &burst, |b, &n| {
            let mut hook =
                ActivityHook::new(SystemClock::new(), MockEmitter::new(), Duration::from_secs(3600))
                    .unwrap();
            b.iter(|| {
                for _ in 0..n {
                    black_box(hook.on_input_event());
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("mock_clock", burst), &burst, |b, &n| {
            let clock = MockClock::new(0u64);
            let mut hook =
                ActivityHook::new(clock.clone(), MockEmitter::new(), Duration::from_secs(2))
                    .unwrap();
            b.iter(|| {
                for _ in 0..n {
                    clock.advance(Duration::from_secs(1));
                    black_box(hook.on_input_event());
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_gate_evaluate, bench_hook_burst);
criterion_main!(benches);
