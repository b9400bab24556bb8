//! Benchmarks for the ladder filter.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use modular_dsp::dsp::ladder::LadderFilter;
use modular_dsp::graph::control::ControlValue;
use modular_dsp::graph::filter::Ladder;
use modular_dsp::graph::node::Processor;

use crate::BLOCK_SIZES;

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.1f32; size];

        // Bare core, fixed coefficients
        let mut core = LadderFilter::new();
        group.bench_with_input(BenchmarkId::new("core", size), &size, |b, _| {
            b.iter(|| {
                for s in buffer.iter_mut() {
                    *s = core.next_sample(black_box(*s), 0.5, 1.0);
                }
            })
        });

        // Full node with control inputs rendered per block
        let mut node = Ladder::new()
            .with_cutoff(ControlValue::new(0.5))
            .with_resonance(ControlValue::new(1.0));
        group.bench_with_input(BenchmarkId::new("node", size), &size, |b, _| {
            b.iter(|| {
                node.process(black_box(&mut buffer), 1);
            })
        });
    }

    group.finish();
}
