/*
Glide (Slew / Portamento) Smoothing
===================================

A first-order exponential tracker: each step moves the current value a fixed
fraction of the way toward the target.

    current += (target - current) / (glide_secs * sample_rate)

The step response is an exponential with a time constant proportional to the
glide time, which is what turns an abrupt target change (a knob turn, a new
note) into an audible slide instead of a click.

A glide time of zero is a special case: the smoother emits the target
directly, one-sample jump, no division. Used for controls that are meant to
step discretely (e.g. pitch CV driven by a keyboard).

Ownership contract: `Glide` lives on the render thread. The target it chases
may come from a concurrently written atomic, but the smoother state itself
has exactly one writer.
*/

use crate::DEFAULT_SAMPLE_RATE;

#[derive(Debug, Clone)]
pub struct Glide {
    current: f32,
    glide_secs: f32,
    sample_rate: f32,
}

impl Glide {
    /// New smoother starting at `initial`, with the glide time in ms.
    ///
    /// Panics if `sample_rate` is zero; a graph with a zero sample rate is a
    /// construction bug, caught here rather than mid-render.
    pub fn new(initial: f32, glide_ms: f32, sample_rate: u32) -> Self {
        assert!(sample_rate > 0, "sample rate must be positive");
        Self {
            current: initial,
            glide_secs: glide_ms.max(0.0) / 1000.0,
            sample_rate: sample_rate as f32,
        }
    }

    pub fn with_default_rate(initial: f32, glide_ms: f32) -> Self {
        Self::new(initial, glide_ms, DEFAULT_SAMPLE_RATE)
    }

    pub fn set_glide_ms(&mut self, glide_ms: f32) {
        self.glide_secs = glide_ms.max(0.0) / 1000.0;
    }

    pub fn glide_ms(&self) -> f32 {
        self.glide_secs * 1000.0
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate as u32
    }

    /// Advance one step toward `target` and return the new current value.
    #[inline]
    pub fn next(&mut self, target: f32) -> f32 {
        if self.glide_secs == 0.0 {
            self.current = target;
        } else {
            self.current += (target - self.current) / (self.glide_secs * self.sample_rate);
        }
        self.current
    }

    pub fn value(&self) -> f32 {
        self.current
    }
}
