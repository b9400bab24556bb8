use std::f32::consts::{PI, TAU};

use crate::dsp::cv::normalised_cv_to_frequency;
use crate::dsp::wave::{Waveform, Xorshift32};
use crate::graph::node::{ensure_scratch, Processor};
use crate::DEFAULT_SAMPLE_RATE;

/*
Oscillator
==========

A phase-accumulating generator. The frequency input is itself a processor:
it is rendered INTO the destination buffer first, so for a moment the buffer
holds control voltage; the oscillator then reads each frame's CV, converts it
to Hz through the volt-per-octave law, and overwrites the slot with the
waveform sample. Buffer reuse, no extra allocation, and the frequency input
can be an arbitrary graph (an Add of keyboard CV and an LFO, another
oscillator for FM, a quantizer...).

Phase modulation is a separate input with different semantics: its output is
rendered to a private scratch buffer and added to the phase ARGUMENT at
evaluation time. It offsets where the waveform is read, not how fast the
accumulator runs.

One phase accumulator per channel, kept in [-π, π). Accumulators are reset
only when the channel count changes; frequency changes glide the phase
continuously, which is exactly what keeps FM click-free.
*/

pub struct Oscillator {
    waveform: Waveform,
    sample_rate: f32,
    phases: Vec<f32>,
    /// Frequency input, rendered as normalized CV. Absent: the destination
    /// buffer's existing contents are taken as the CV.
    pub frequency: Option<Box<dyn Processor>>,
    /// Phase modulation input, added to the waveform's phase argument.
    pub phase_mod: Option<Box<dyn Processor>>,
    phase_buffer: Vec<f32>,
    noise: Xorshift32,
}

impl Oscillator {
    pub fn new(waveform: Waveform) -> Self {
        Self {
            waveform,
            sample_rate: DEFAULT_SAMPLE_RATE as f32,
            phases: Vec::new(),
            frequency: None,
            phase_mod: None,
            phase_buffer: Vec::new(),
            noise: Xorshift32::default(),
        }
    }

    pub fn sine() -> Self {
        Self::new(Waveform::Sine)
    }

    pub fn triangle() -> Self {
        Self::new(Waveform::Triangle)
    }

    pub fn square() -> Self {
        Self::new(Waveform::Square)
    }

    pub fn sawtooth() -> Self {
        Self::new(Waveform::Sawtooth)
    }

    pub fn noise() -> Self {
        Self::new(Waveform::Noise)
    }

    /// Builder: wire the frequency input.
    pub fn with_frequency(mut self, frequency: impl Processor + 'static) -> Self {
        self.frequency = Some(Box::new(frequency));
        self
    }

    /// Builder: wire the phase-modulation input.
    pub fn with_phase_mod(mut self, phase_mod: impl Processor + 'static) -> Self {
        self.phase_mod = Some(Box::new(phase_mod));
        self
    }

    /// Builder: set the sample rate. Panics on a zero rate.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        assert!(sample_rate > 0, "sample rate must be positive");
        self.sample_rate = sample_rate as f32;
        self
    }

    /// Swap the waveform. Phase is preserved, so switching is click-free
    /// apart from the waveform discontinuity itself.
    pub fn set_waveform(&mut self, waveform: Waveform) {
        self.waveform = waveform;
    }
}

/// Wrap an arbitrary phase argument back into `[-π, π)`.
#[inline]
fn wrap_phase(phase: f32) -> f32 {
    (phase + PI).rem_euclid(TAU) - PI
}

impl Processor for Oscillator {
    fn process(&mut self, data: &mut [f32], channels: usize) {
        let channels = channels.max(1);
        if self.phases.len() != channels {
            self.phases = vec![0.0; channels];
        }

        if let Some(frequency) = &mut self.frequency {
            frequency.process(data, channels);
        }

        let modulated = self.phase_mod.is_some();
        if let Some(phase_mod) = &mut self.phase_mod {
            ensure_scratch(&mut self.phase_buffer, data.len());
            let scratch = &mut self.phase_buffer[..data.len()];
            scratch.fill(0.0);
            phase_mod.process(scratch, channels);
        }

        for i in (0..data.len()).step_by(channels) {
            for ch in 0..channels.min(data.len() - i) {
                let slot = ch + i;
                let increment =
                    TAU * normalised_cv_to_frequency(data[slot]) / self.sample_rate;
                let arg = if modulated {
                    wrap_phase(self.phases[ch] + self.phase_buffer[slot])
                } else {
                    self.phases[ch]
                };
                data[slot] = self.waveform.eval(arg, &mut self.noise);
                self.phases[ch] += increment;
                if self.phases[ch] > PI {
                    self.phases[ch] -= TAU;
                }
            }
        }
    }
}
