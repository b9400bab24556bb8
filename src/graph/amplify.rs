use crate::graph::node::{ensure_scratch, Processor};

/// Multiplies the signal by a gain input, frame by frame.
///
/// The gain is any processor (a smoothed gate for note articulation, an
/// envelope, an LFO for tremolo), rendered into a private scratch buffer.
/// No gain wired means identity: an absent modulation source is a valid
/// silent default, not an error.
pub struct Amplifier {
    pub gain: Option<Box<dyn Processor>>,
    gain_buffer: Vec<f32>,
}

impl Amplifier {
    pub fn new() -> Self {
        Self {
            gain: None,
            gain_buffer: Vec::new(),
        }
    }

    pub fn with_gain(mut self, gain: impl Processor + 'static) -> Self {
        self.gain = Some(Box::new(gain));
        self
    }
}

impl Default for Amplifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor for Amplifier {
    fn process(&mut self, data: &mut [f32], channels: usize) {
        let Some(gain) = &mut self.gain else {
            return;
        };
        ensure_scratch(&mut self.gain_buffer, data.len());
        let gain_block = &mut self.gain_buffer[..data.len()];
        gain.process(gain_block, channels);
        for (sample, &g) in data.iter_mut().zip(gain_block.iter()) {
            *sample *= g;
        }
    }
}
