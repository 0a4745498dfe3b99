//! # Execute Benchmarks
//!
//! Cost of the guarded hot path around a trivial behavior.
//!
//! Run with: `cargo bench -p dspai-comp`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dspai_comp::{Behavior, CompError, Component, Execution, Lifecycle};
use std::hint::black_box;

/// Accumulates a ramp; never completes on its own.
struct Ramp {
    acc: u64,
    limit: u64,
}

impl Behavior for Ramp {
    fn do_initialize(&mut self) -> Result<(), CompError> {
        self.acc = 0;
        Ok(())
    }

    fn do_reset(&mut self) {
        self.acc = 0;
    }

    fn do_execute(&mut self) -> bool {
        self.acc = self.acc.wrapping_add(black_box(1));
        self.acc >= self.limit
    }

    fn do_terminate(&mut self) {}
}

fn ready_component(limit: u64) -> Component<Ramp> {
    let mut component = Component::new(Ramp { acc: 0, limit });
    let _ = component.initialize();
    component
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_execute(c: &mut Criterion) {
    let mut component = ready_component(u64::MAX);

    c.bench_function("execute_running", |b| {
        b.iter(|| black_box(component.execute()));
    });
}

fn bench_run_until_done(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_until_done");

    for steps in [100u64, 1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(steps), steps, |b, &steps| {
            let mut component = ready_component(steps);
            b.iter(|| {
                component.reset();
                black_box(component.run_until_done(steps))
            });
        });
    }

    group.finish();
}

fn bench_done_noop(c: &mut Criterion) {
    let mut component = ready_component(1);
    component.execute();

    c.bench_function("execute_done_noop", |b| {
        b.iter(|| black_box(component.execute()));
    });
}

criterion_group!(benches, bench_execute, bench_run_until_done, bench_done_noop);
criterion_main!(benches);
