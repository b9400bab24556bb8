//! Benchmarks for oscillator waveform generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use modular_dsp::graph::control::ControlValue;
use modular_dsp::graph::node::Processor;
use modular_dsp::graph::oscillator::Oscillator;

use crate::BLOCK_SIZES;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Sine - polynomial approximation
        let mut osc = Oscillator::sine().with_frequency(ControlValue::new(0.55));
        group.bench_with_input(BenchmarkId::new("sine", size), &size, |b, _| {
            b.iter(|| {
                osc.process(black_box(&mut buffer), 1);
            })
        });

        // Sawtooth - linear ramp
        let mut osc = Oscillator::sawtooth().with_frequency(ControlValue::new(0.55));
        group.bench_with_input(BenchmarkId::new("sawtooth", size), &size, |b, _| {
            b.iter(|| {
                osc.process(black_box(&mut buffer), 1);
            })
        });

        // Noise - xorshift PRNG
        let mut osc = Oscillator::noise().with_frequency(ControlValue::new(0.55));
        group.bench_with_input(BenchmarkId::new("noise", size), &size, |b, _| {
            b.iter(|| {
                osc.process(black_box(&mut buffer), 1);
            })
        });

        // FM pair - modulator oscillator feeding the carrier's phase input
        let modulator = Oscillator::sine().with_frequency(ControlValue::new(0.35));
        let mut osc = Oscillator::sine()
            .with_frequency(ControlValue::new(0.55))
            .with_phase_mod(modulator);
        group.bench_with_input(BenchmarkId::new("fm_pair", size), &size, |b, _| {
            b.iter(|| {
                osc.process(black_box(&mut buffer), 1);
            })
        });
    }

    group.finish();
}
