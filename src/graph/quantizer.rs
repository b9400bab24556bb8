use crate::dsp::cv::MAX_ABS_VOLTAGE;
use crate::graph::node::Processor;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Quantizer
=========

Snaps a continuous control voltage onto the discrete grid of a musical
scale. A scale is a cyclic sequence of intervals (semitone counts); the
quantizer walks up from a root voltage, adding one interval at a time, and
returns the first step at or above the input. Feed it a slow glide and you
get an arpeggio instead of a smear.

The previous (raw, quantized) pair is memoized as node state. This is more
than a cache: for a control signal that holds still - the common case, a
knob that is not moving - it guarantees the same raw input maps to the same
output bit-for-bit, immune to any floating-point sensitivity in the walk.
*/

/// One scale step, counted in semitones.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval(pub f32);

pub const SEMITONE: Interval = Interval(1.0);
pub const TONE: Interval = Interval(2.0);

impl Interval {
    /// Size of this step in normalized CV. One semitone is 1/12 volt,
    /// scaled down by the ±`MAX_ABS_VOLTAGE` volt normalization.
    #[inline]
    pub fn to_voltage(self) -> f32 {
        self.0 / (MAX_ABS_VOLTAGE * 12.0)
    }
}

/// Normalized voltage of A0, the quantizer's default root.
pub const A0: f32 = 0.034375;

/// Highest input [`Scale::quantize`] will walk towards, comfortably above
/// the top of the normalized CV range.
pub const INPUT_CEILING: f32 = 2.0;

/// A cyclic sequence of intervals rooted anywhere.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Scale(Vec<Interval>);

/// The major scale's step pattern; the seven modes are its rotations.
const MAJOR_STEPS: [f32; 7] = [2.0, 2.0, 1.0, 2.0, 2.0, 2.0, 1.0];

impl Scale {
    pub fn new(intervals: Vec<Interval>) -> Self {
        assert!(!intervals.is_empty(), "a scale needs at least one interval");
        assert!(
            intervals.iter().all(|i| i.0 > 0.0),
            "scale intervals must be strictly positive"
        );
        Self(intervals)
    }

    fn mode(rotation: usize) -> Self {
        let steps = (0..7)
            .map(|i| Interval(MAJOR_STEPS[(i + rotation) % 7]))
            .collect();
        Self(steps)
    }

    pub fn chromatic() -> Self {
        Self(vec![SEMITONE])
    }

    /// The major scale (first mode).
    pub fn major() -> Self {
        Self::mode(0)
    }

    pub fn ionian() -> Self {
        Self::mode(0)
    }

    pub fn dorian() -> Self {
        Self::mode(1)
    }

    pub fn phrygian() -> Self {
        Self::mode(2)
    }

    pub fn lydian() -> Self {
        Self::mode(3)
    }

    pub fn mixolydian() -> Self {
        Self::mode(4)
    }

    pub fn aeolian() -> Self {
        Self::mode(5)
    }

    pub fn locrian() -> Self {
        Self::mode(6)
    }

    /// Natural minor, i.e. the aeolian mode.
    pub fn natural_minor() -> Self {
        Self::aeolian()
    }

    pub fn minor_pentatonic() -> Self {
        Self(vec![
            Interval(3.0),
            Interval(2.0),
            Interval(2.0),
            Interval(3.0),
            Interval(2.0),
        ])
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.0
    }

    /// Walk up from `root` through the cyclic interval sequence and return
    /// the first scale step at or above `input`.
    ///
    /// The input is capped at [`INPUT_CEILING`]: a normalized CV lives in
    /// roughly `[-1, 1]`, and an unbounded walk towards a wild input would
    /// stall the render thread once `voltage += step` falls below f32
    /// precision.
    pub fn quantize(&self, root: f32, input: f32) -> f32 {
        let input = input.min(INPUT_CEILING);
        let mut voltage = root;
        let mut step = 0usize;
        while voltage < input {
            voltage += self.0[step % self.0.len()].to_voltage();
            step += 1;
        }
        voltage
    }
}

/// Snaps its input signal onto a scale's voltage grid.
pub struct Quantizer {
    pub input: Option<Box<dyn Processor>>,
    scale: Scale,
    root: f32,
    last_raw: f32,
    last_quantized: f32,
}

impl Quantizer {
    pub fn new(scale: Scale) -> Self {
        Self {
            input: None,
            scale,
            root: A0,
            last_raw: 0.0,
            last_quantized: 0.0,
        }
    }

    pub fn with_input(mut self, input: impl Processor + 'static) -> Self {
        self.input = Some(Box::new(input));
        self
    }

    pub fn with_root(mut self, root: f32) -> Self {
        self.root = root;
        self
    }
}

impl Processor for Quantizer {
    fn process(&mut self, data: &mut [f32], channels: usize) {
        if let Some(input) = &mut self.input {
            input.process(data, channels);
        }
        for sample in data.iter_mut() {
            // Bit-identical input short-circuits to the previous result.
            if *sample == self.last_raw {
                *sample = self.last_quantized;
            } else {
                self.last_raw = *sample;
                self.last_quantized = self.scale.quantize(self.root, *sample);
                *sample = self.last_quantized;
            }
        }
    }
}
