use crate::dsp::ladder::LadderFilter;
use crate::graph::node::{ensure_scratch, Processor};

/// 4-pole resonant low-pass node.
///
/// Cutoff and resonance are processor inputs rendered per block into private
/// scratch buffers, so both can be driven by any graph (an envelope sweeping
/// the cutoff, an LFO on resonance). An unconnected input leaves its scratch
/// at zero, i.e. the filter sits fully closed until a cutoff source is wired.
///
/// The stage registers are shared across channels: the node has a single
/// transfer-function history, matching its use at the end of a mono voice
/// chain. The core clamps cutoff to `[0, 1]` and resonance to `[0, 4]` per
/// sample, so modulation can never push the cascade out of its stable region.
pub struct Ladder {
    pub cutoff: Option<Box<dyn Processor>>,
    pub resonance: Option<Box<dyn Processor>>,
    cutoff_buffer: Vec<f32>,
    resonance_buffer: Vec<f32>,
    core: LadderFilter,
}

impl Ladder {
    pub fn new() -> Self {
        Self {
            cutoff: None,
            resonance: None,
            cutoff_buffer: Vec::new(),
            resonance_buffer: Vec::new(),
            core: LadderFilter::new(),
        }
    }

    pub fn with_cutoff(mut self, cutoff: impl Processor + 'static) -> Self {
        self.cutoff = Some(Box::new(cutoff));
        self
    }

    pub fn with_resonance(mut self, resonance: impl Processor + 'static) -> Self {
        self.resonance = Some(Box::new(resonance));
        self
    }

    /// Clear the filter's memory.
    pub fn reset(&mut self) {
        self.core.reset();
    }
}

impl Default for Ladder {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor for Ladder {
    fn process(&mut self, data: &mut [f32], channels: usize) {
        ensure_scratch(&mut self.cutoff_buffer, data.len());
        if let Some(cutoff) = &mut self.cutoff {
            cutoff.process(&mut self.cutoff_buffer[..data.len()], channels);
        }
        ensure_scratch(&mut self.resonance_buffer, data.len());
        if let Some(resonance) = &mut self.resonance {
            resonance.process(&mut self.resonance_buffer[..data.len()], channels);
        }

        for (i, sample) in data.iter_mut().enumerate() {
            *sample = self
                .core
                .next_sample(*sample, self.cutoff_buffer[i], self.resonance_buffer[i]);
        }
    }
}
