//! Offline render walk-through: a quantized glide melody, no audio device.
//!
//! Events travel through an rtrb ring buffer exactly as they would from a
//! device callback thread, and the graph renders block by block.
//!
//! Run with: cargo run --example offline_patch

use modular_dsp::graph::amplify::Amplifier;
use modular_dsp::graph::chain::Chain;
use modular_dsp::graph::control::ControlValue;
use modular_dsp::graph::node::Processor;
use modular_dsp::graph::oscillator::Oscillator;
use modular_dsp::graph::quantizer::{Quantizer, Scale};
use modular_dsp::io::midi::{pump_events, MidiControls, MidiEvent};
use modular_dsp::MAX_BLOCK_SIZE;
use rtrb::RingBuffer;

fn main() {
    println!("=== Offline Patch Demo ===\n");

    let (mut tx, mut rx) = RingBuffer::<MidiEvent>::new(64);
    let mut midi = MidiControls::new();

    // A slow glide snapped onto the minor pentatonic grid: the classic
    // quantized-arpeggio patch.
    let glide = ControlValue::new(0.0).with_glide_ms(2_000.0);
    let glide_handle = glide.handle();
    glide_handle.set(0.3);

    let mut patch = Chain::new()
        .then(
            Oscillator::sawtooth()
                .with_frequency(Quantizer::new(Scale::minor_pentatonic()).with_input(glide)),
        )
        .then(Amplifier::new().with_gain(midi.gate()));

    // Hold one key so the gate is open while the quantized pitch climbs.
    tx.push(MidiEvent::NoteOn {
        channel: 0,
        key: 60,
        velocity: 110,
    })
    .unwrap();

    let mut buffer = vec![0.0f32; MAX_BLOCK_SIZE];
    for block in 0..16 {
        pump_events(&mut rx, &mut midi);
        patch.process(&mut buffer, 1);

        let peak = buffer.iter().fold(0.0f32, |acc, &s| acc.max(s.abs()));
        println!("block {block:2}: peak {peak:.3}");
    }

    tx.push(MidiEvent::NoteOff {
        channel: 0,
        key: 60,
        velocity: 0,
    })
    .unwrap();
    pump_events(&mut rx, &mut midi);
    patch.process(&mut buffer, 1);
    println!("\nafter note off: peak {:.3}", buffer.iter().fold(0.0f32, |acc, &s| acc.max(s.abs())));
}
