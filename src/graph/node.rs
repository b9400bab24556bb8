/// Core trait for signal-graph nodes.
///
/// `data` is an interleaved multi-channel block (`data[ch + frame *
/// channels]`) owned by the caller for the duration of the call. A node
/// reads whatever its upstream inputs left in the buffer, computes its own
/// transform, and writes the result in place; length and shape are never
/// changed.
///
/// Contract:
/// - Must be callable repeatedly at a fixed cadence (once per output block)
///   without blocking, sleeping, or unbounded work.
/// - Must tolerate `channels` changing between calls (per-channel state such
///   as oscillator phase is resized to match).
/// - The only permitted allocation is amortized scratch-buffer growth, which
///   stops recurring once block sizes stabilize.
pub trait Processor: Send {
    fn process(&mut self, data: &mut [f32], channels: usize);
}

/// Allow boxed processors to be used directly (for dynamic dispatch).
impl Processor for Box<dyn Processor> {
    fn process(&mut self, data: &mut [f32], channels: usize) {
        (**self).process(data, channels)
    }
}

/// Grow `buffer` so `buffer[..len]` is valid. Grow-only: shrinking would
/// re-trigger allocation when block sizes alternate.
#[inline]
pub(crate) fn ensure_scratch(buffer: &mut Vec<f32>, len: usize) {
    if buffer.len() < len {
        buffer.resize(len, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Gain(f32);

    impl Processor for Gain {
        fn process(&mut self, data: &mut [f32], _channels: usize) {
            for s in data.iter_mut() {
                *s *= self.0;
            }
        }
    }

    #[test]
    fn boxed_processor_dispatches() {
        let mut node: Box<dyn Processor> = Box::new(Gain(2.0));
        let mut buffer = vec![1.0, -0.5, 0.25];
        node.process(&mut buffer, 1);
        assert_eq!(buffer, vec![2.0, -1.0, 0.5]);
    }

    #[test]
    fn scratch_grows_monotonically() {
        let mut scratch = Vec::new();
        ensure_scratch(&mut scratch, 64);
        assert_eq!(scratch.len(), 64);
        ensure_scratch(&mut scratch, 16);
        assert_eq!(scratch.len(), 64);
        ensure_scratch(&mut scratch, 128);
        assert_eq!(scratch.len(), 128);
    }
}
