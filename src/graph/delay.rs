use crate::dsp::delay::DelayLine;
use crate::graph::node::Processor;
use crate::DEFAULT_SAMPLE_RATE;

/// Feedback echo over an interleaved circular buffer.
///
/// `set_delay_ms` converts the time to a sample count and grows the line
/// (zero-filling); it never shrinks, so shortening the delay mid-session
/// keeps old echoes until they fade. The write position persists across
/// blocks and advances modulo the line length.
///
/// This is an accumulating delay (each pass adds into the line), so an
/// undamped input builds up level; gate or attenuate upstream.
pub struct Delay {
    sample_rate: u32,
    delay_samples: usize,
    channels: usize,
    line: DelayLine,
}

impl Delay {
    pub fn new() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            delay_samples: 0,
            channels: 1,
            line: DelayLine::new(),
        }
    }

    /// Builder: set the sample rate. Panics on a zero rate.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        assert!(sample_rate > 0, "sample rate must be positive");
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_delay_ms(mut self, delay_ms: f32) -> Self {
        self.set_delay_ms(delay_ms);
        self
    }

    pub fn set_delay_ms(&mut self, delay_ms: f32) {
        self.delay_samples = (delay_ms.max(0.0) * self.sample_rate as f32 / 1000.0) as usize;
        self.line.ensure_len(self.delay_samples * self.channels);
    }

    pub fn reset(&mut self) {
        self.line.reset();
    }
}

impl Default for Delay {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor for Delay {
    fn process(&mut self, data: &mut [f32], channels: usize) {
        let channels = channels.max(1);
        if channels != self.channels {
            self.channels = channels;
            self.line.ensure_len(self.delay_samples * channels);
        }
        for sample in data.iter_mut() {
            *sample = self.line.next_sample(*sample);
        }
    }
}
