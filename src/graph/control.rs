use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use crate::dsp::glide::Glide;
use crate::graph::node::Processor;
use crate::DEFAULT_SAMPLE_RATE;

/*
ControlValue
============

The bridge between the control-producing context (a MIDI listener, a UI
thread) and the render context. A ControlValue holds:

  target    shared, written by the control context at any time
  current   the glide smoother's state, owned by the render context only

The single-writer-per-field split is the whole concurrency story: the render
thread may observe a stale or fresh target non-deterministically, but never a
torn one, and neither side ever waits. The glide smoothing then makes the
exact interleaving inaudible - a target landing mid-buffer just starts the
slide one block earlier or later.

The smoother advances once per FRAME and the frame's value is written to all
channels, so glide speed does not depend on channel count.

Cloning shares the target atomic but gives the clone its own smoother, so
one control source can feed several places in a graph (the same pitch CV
driving a carrier and a modulator oscillator, say) while each consumer
smooths independently.
*/

/// An atomic f32 for lock-free parameter updates (bit-cast over `AtomicU32`).
#[derive(Debug)]
pub struct AtomicF32(AtomicU32);

impl AtomicF32 {
    pub const fn new(value: f32) -> Self {
        Self(AtomicU32::new(value.to_bits()))
    }

    #[inline]
    pub fn get(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Relaxed))
    }

    #[inline]
    pub fn set(&self, value: f32) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }
}

/// A glide-smoothed scalar control signal.
#[derive(Debug, Clone)]
pub struct ControlValue {
    target: Arc<AtomicF32>,
    glide: Glide,
}

impl ControlValue {
    /// New control value resting at `value`, with the default 100 ms glide.
    pub fn new(value: f32) -> Self {
        Self {
            target: Arc::new(AtomicF32::new(value)),
            glide: Glide::new(value, 100.0, DEFAULT_SAMPLE_RATE),
        }
    }

    /// Builder: set the glide time in milliseconds. Zero disables smoothing
    /// (the target is emitted on the very next frame).
    pub fn with_glide_ms(mut self, glide_ms: f32) -> Self {
        self.glide.set_glide_ms(glide_ms);
        self
    }

    /// Builder: set the sample rate. Panics on a zero rate.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.glide = Glide::new(self.glide.value(), self.glide.glide_ms(), sample_rate);
        self
    }

    pub fn set_glide_ms(&mut self, glide_ms: f32) {
        self.glide.set_glide_ms(glide_ms);
    }

    /// Write a new target. Safe to race against the render thread; two
    /// control threads writing the same target is a wiring bug.
    pub fn set_target(&self, value: f32) {
        self.target.set(value);
    }

    pub fn target(&self) -> f32 {
        self.target.get()
    }

    /// A `Send + Sync` setter for the control thread.
    pub fn handle(&self) -> ControlHandle {
        ControlHandle {
            target: Arc::clone(&self.target),
        }
    }

    /// Advance the smoother one frame toward the current target.
    #[inline]
    pub fn next_value(&mut self) -> f32 {
        self.glide.next(self.target.get())
    }
}

impl Processor for ControlValue {
    fn process(&mut self, data: &mut [f32], channels: usize) {
        let channels = channels.max(1);
        for frame in data.chunks_mut(channels) {
            let value = self.next_value();
            frame.fill(value);
        }
    }
}

/// Control-thread handle to a [`ControlValue`] target.
#[derive(Debug, Clone)]
pub struct ControlHandle {
    target: Arc<AtomicF32>,
}

impl ControlHandle {
    pub fn set(&self, value: f32) {
        self.target.set(value);
    }

    pub fn get(&self) -> f32 {
        self.target.get()
    }
}
