use crate::graph::control::ControlValue;
use crate::graph::node::{ensure_scratch, Processor};
use crate::DEFAULT_SAMPLE_RATE;

/*
Envelope
========

Not a state-machine ADSR: the envelope reuses the glide smoother as its
output shaper and switches the smoother's time constant per frame based on
the gate.

    gate above threshold  ->  smoother glides at the attack time
    gate below threshold  ->  smoother glides at the release time

The smoother's target is the rendered gate value itself, so a velocity-
scaled gate gives a velocity-scaled envelope for free, and releasing
mid-attack releases from the current level with no click.

The attack/decay/sustain/release sub-inputs are each independently smoothed
control nodes, rendered every block so they can be driven by other
modulators. Only the attack/release time switch currently shapes the output;
decay and sustain are wiring points for a full ADSR law that is deliberately
not inferred here (see DESIGN.md).
*/

/// Gate values above this count as "note held".
const GATE_THRESHOLD: f32 = 0.05;

/// Default sub-input: a 10 ms-smoothed control resting at `value`.
fn sub_input(value: f32, sample_rate: u32) -> ControlValue {
    ControlValue::new(value)
        .with_glide_ms(10.0)
        .with_sample_rate(sample_rate)
}

pub struct Envelope {
    pub gate: Option<Box<dyn Processor>>,
    pub attack: Box<dyn Processor>,
    pub decay: Box<dyn Processor>,
    pub sustain: Box<dyn Processor>,
    pub release: Box<dyn Processor>,
    attack_ms: f32,
    release_ms: f32,
    attack_buffer: Vec<f32>,
    decay_buffer: Vec<f32>,
    sustain_buffer: Vec<f32>,
    release_buffer: Vec<f32>,
    smoother: ControlValue,
}

impl Envelope {
    pub fn new() -> Self {
        Self {
            gate: None,
            attack: Box::new(sub_input(0.0, DEFAULT_SAMPLE_RATE)),
            decay: Box::new(sub_input(0.0, DEFAULT_SAMPLE_RATE)),
            sustain: Box::new(sub_input(1.0, DEFAULT_SAMPLE_RATE)),
            release: Box::new(sub_input(0.0, DEFAULT_SAMPLE_RATE)),
            attack_ms: 1_000.0,
            release_ms: 1_000.0,
            attack_buffer: Vec::new(),
            decay_buffer: Vec::new(),
            sustain_buffer: Vec::new(),
            release_buffer: Vec::new(),
            smoother: ControlValue::new(0.0).with_glide_ms(1_000.0),
        }
    }

    pub fn with_gate(mut self, gate: impl Processor + 'static) -> Self {
        self.gate = Some(Box::new(gate));
        self
    }

    pub fn with_times_ms(mut self, attack_ms: f32, release_ms: f32) -> Self {
        self.attack_ms = attack_ms.max(0.0);
        self.release_ms = release_ms.max(0.0);
        self
    }

    /// Builder: sample rate for the output smoother and the default
    /// sub-inputs, which are rebuilt at the new rate. Call before wiring
    /// custom sub-inputs. Panics on a zero rate.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.attack = Box::new(sub_input(0.0, sample_rate));
        self.decay = Box::new(sub_input(0.0, sample_rate));
        self.sustain = Box::new(sub_input(1.0, sample_rate));
        self.release = Box::new(sub_input(0.0, sample_rate));
        self.smoother = ControlValue::new(0.0)
            .with_glide_ms(1_000.0)
            .with_sample_rate(sample_rate);
        self
    }

    pub fn set_attack_ms(&mut self, attack_ms: f32) {
        self.attack_ms = attack_ms.max(0.0);
    }

    pub fn set_release_ms(&mut self, release_ms: f32) {
        self.release_ms = release_ms.max(0.0);
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor for Envelope {
    fn process(&mut self, data: &mut [f32], channels: usize) {
        let channels = channels.max(1);
        if let Some(gate) = &mut self.gate {
            gate.process(data, channels);
        }

        // Sub-inputs render every block so external modulators stay wired
        // and glide-smoothed even while unused by the output law.
        ensure_scratch(&mut self.attack_buffer, data.len());
        self.attack.process(&mut self.attack_buffer[..data.len()], channels);
        ensure_scratch(&mut self.decay_buffer, data.len());
        self.decay.process(&mut self.decay_buffer[..data.len()], channels);
        ensure_scratch(&mut self.sustain_buffer, data.len());
        self.sustain.process(&mut self.sustain_buffer[..data.len()], channels);
        ensure_scratch(&mut self.release_buffer, data.len());
        self.release.process(&mut self.release_buffer[..data.len()], channels);

        for frame in data.chunks_mut(channels) {
            let gate_value = frame[0];
            if gate_value > GATE_THRESHOLD {
                self.smoother.set_glide_ms(self.attack_ms);
            } else {
                self.smoother.set_glide_ms(self.release_ms);
            }
            self.smoother.set_target(gate_value);
            let level = self.smoother.next_value();
            frame.fill(level);
        }
    }
}
