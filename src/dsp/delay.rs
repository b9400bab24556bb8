/// Feedback delay line over a grow-only circular buffer.
///
/// Each step ADDS the incoming sample into the cell at the write position and
/// returns the accumulated cell as output, so the line echoes with feedback
/// rather than a clean one-shot repeat. Repeated writes without external
/// damping accumulate without bound; callers gate or attenuate the input.
///
/// The buffer never shrinks: shortening the delay would otherwise drop
/// history mid-render. New capacity is zero-filled.
#[derive(Debug, Clone, Default)]
pub struct DelayLine {
    buffer: Vec<f32>,
    pos: usize,
}

impl DelayLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grow the line to at least `samples` cells. Never shrinks.
    pub fn ensure_len(&mut self, samples: usize) {
        if self.buffer.len() < samples {
            self.buffer.resize(samples, 0.0);
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Accumulate `input` into the current cell, emit it, advance.
    #[inline]
    pub fn next_sample(&mut self, input: f32) -> f32 {
        if self.buffer.is_empty() {
            return input;
        }
        self.buffer[self.pos] += input;
        let out = self.buffer[self.pos];
        self.pos = (self.pos + 1) % self.buffer.len();
        out
    }

    pub fn reset(&mut self) {
        self.buffer.fill(0.0);
        self.pos = 0;
    }
}
