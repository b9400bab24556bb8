//! Benchmarks for control-value smoothing.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use modular_dsp::graph::control::ControlValue;
use modular_dsp::graph::node::Processor;

use crate::BLOCK_SIZES;

pub fn bench_control(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/control");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        let mut smoothed = ControlValue::new(0.0).with_glide_ms(100.0);
        smoothed.set_target(1.0);
        group.bench_with_input(BenchmarkId::new("glide", size), &size, |b, _| {
            b.iter(|| {
                smoothed.process(black_box(&mut buffer), 1);
            })
        });

        let mut stepped = ControlValue::new(0.0).with_glide_ms(0.0);
        stepped.set_target(1.0);
        group.bench_with_input(BenchmarkId::new("stepped", size), &size, |b, _| {
            b.iter(|| {
                stepped.process(black_box(&mut buffer), 1);
            })
        });
    }

    group.finish();
}
