//! Benchmarks for the feedback delay line.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use modular_dsp::graph::delay::Delay;
use modular_dsp::graph::node::Processor;

use crate::BLOCK_SIZES;

pub fn bench_delay(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/delay");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.01f32; size];
        let mut delay = Delay::new().with_delay_ms(250.0);
        group.bench_with_input(BenchmarkId::new("feedback", size), &size, |b, _| {
            b.iter(|| {
                delay.process(black_box(&mut buffer), 1);
            })
        });
    }

    group.finish();
}
