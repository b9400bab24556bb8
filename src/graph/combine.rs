use crate::graph::node::{ensure_scratch, Processor};

/*
Parallel Composition
====================

Add and Multiply render two sub-graphs and combine them element-wise: `a`
straight into the destination buffer, `b` into a private scratch buffer that
grows to the largest block seen and then stops allocating.

These are what make modulation routing composable. A frequency input is just
a processor, so

    Add(keyboard_cv, lfo)          vibrato
    Multiply(envelope, velocity)   scaled contour
    Add(cv, Multiply(env, depth))  filter sweep that tracks the keyboard

all slot into any node's input without a special control-rate type.
*/

pub struct Add<A, B> {
    pub a: A,
    pub b: B,
    scratch: Vec<f32>,
}

impl<A, B> Add<A, B> {
    pub fn new(a: A, b: B) -> Self {
        Self {
            a,
            b,
            scratch: Vec::new(),
        }
    }
}

impl<A: Processor, B: Processor> Processor for Add<A, B> {
    fn process(&mut self, data: &mut [f32], channels: usize) {
        self.a.process(data, channels);
        ensure_scratch(&mut self.scratch, data.len());
        let scratch = &mut self.scratch[..data.len()];
        scratch.fill(0.0);
        self.b.process(scratch, channels);
        for (sample, &other) in data.iter_mut().zip(scratch.iter()) {
            *sample += other;
        }
    }
}

pub struct Multiply<A, B> {
    pub a: A,
    pub b: B,
    scratch: Vec<f32>,
}

impl<A, B> Multiply<A, B> {
    pub fn new(a: A, b: B) -> Self {
        Self {
            a,
            b,
            scratch: Vec::new(),
        }
    }
}

impl<A: Processor, B: Processor> Processor for Multiply<A, B> {
    fn process(&mut self, data: &mut [f32], channels: usize) {
        self.a.process(data, channels);
        ensure_scratch(&mut self.scratch, data.len());
        let scratch = &mut self.scratch[..data.len()];
        scratch.fill(0.0);
        self.b.process(scratch, channels);
        for (sample, &other) in data.iter_mut().zip(scratch.iter()) {
            *sample *= other;
        }
    }
}
