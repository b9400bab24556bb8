//! Benchmark for a realistic full voice chain.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use modular_dsp::graph::amplify::Amplifier;
use modular_dsp::graph::chain::Chain;
use modular_dsp::graph::control::ControlValue;
use modular_dsp::graph::envelope::Envelope;
use modular_dsp::graph::filter::Ladder;
use modular_dsp::graph::node::Processor;
use modular_dsp::graph::oscillator::Oscillator;

use crate::BLOCK_SIZES;

pub fn bench_voice(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/voice");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        let gate = ControlValue::new(1.0).with_glide_ms(1.0);
        let mut voice = Chain::new()
            .then(Oscillator::sawtooth().with_frequency(ControlValue::new(0.55)))
            .then(
                Ladder::new()
                    .with_cutoff(ControlValue::new(0.4))
                    .with_resonance(ControlValue::new(1.5)),
            )
            .then(
                Amplifier::new()
                    .with_gain(Envelope::new().with_times_ms(10.0, 300.0).with_gate(gate)),
            );

        group.bench_with_input(BenchmarkId::new("saw_ladder_env", size), &size, |b, _| {
            b.iter(|| {
                voice.process(black_box(&mut buffer), 1);
            })
        });
    }

    group.finish();
}
