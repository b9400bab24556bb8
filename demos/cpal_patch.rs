//! Live patch: FM sine pair through the ladder filter, gate and pitch driven
//! from a worker thread the way a MIDI listener would drive them.
//!
//! Run with: cargo run --example cpal_patch

use std::thread;
use std::time::Duration;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use modular_dsp::graph::amplify::Amplifier;
use modular_dsp::graph::chain::Chain;
use modular_dsp::graph::envelope::Envelope;
use modular_dsp::graph::filter::Ladder;
use modular_dsp::graph::node::Processor;
use modular_dsp::graph::oscillator::Oscillator;
use modular_dsp::io::midi::{MidiControls, MidiEvent};

fn main() {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .expect("no default output device available");
    let config = device
        .default_output_config()
        .expect("failed to fetch default output config");
    let sample_rate = config.sample_rate().0;
    let channels = config.channels() as usize;

    let mut midi = MidiControls::new();

    // FM pair: a quieter modulator bends the carrier's phase.
    let modulator = Chain::new()
        .then(
            Oscillator::sine()
                .with_sample_rate(sample_rate)
                .with_frequency(midi.cv()),
        )
        .then(Amplifier::new().with_gain(midi.control(71)));

    let carrier = Oscillator::sine()
        .with_sample_rate(sample_rate)
        .with_frequency(midi.cv())
        .with_phase_mod(modulator);

    let mut patch = Chain::new()
        .then(carrier)
        .then(
            Ladder::new()
                .with_cutoff(midi.control(72))
                .with_resonance(midi.control(73)),
        )
        .then(
            Amplifier::new().with_gain(
                Envelope::new()
                    .with_sample_rate(sample_rate)
                    .with_times_ms(20.0, 400.0)
                    .with_gate(midi.gate()),
            ),
        );

    let stream = device
        .build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                patch.process(data, channels);
            },
            move |err| eprintln!("stream error: {err}"),
            None,
        )
        .expect("failed to build output stream");
    stream.play().expect("failed to start output stream");

    // Fake control source: open the filter, then walk an arpeggio.
    midi.apply(MidiEvent::ControlChange {
        channel: 0,
        controller: 72,
        value: 96,
    });
    midi.apply(MidiEvent::ControlChange {
        channel: 0,
        controller: 73,
        value: 75,
    });
    midi.apply(MidiEvent::ControlChange {
        channel: 0,
        controller: 71,
        value: 70,
    });

    for &note in [57u8, 60, 64, 67, 64, 60].iter().cycle().take(24) {
        midi.apply(MidiEvent::NoteOn {
            channel: 0,
            key: note,
            velocity: 100,
        });
        thread::sleep(Duration::from_millis(350));
        midi.apply(MidiEvent::NoteOff {
            channel: 0,
            key: note,
            velocity: 0,
        });
        thread::sleep(Duration::from_millis(150));
    }
}
