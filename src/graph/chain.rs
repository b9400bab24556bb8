use crate::graph::node::Processor;

/// Sequential composition: applies an ordered list of processors to the same
/// buffer, so processor *i*'s output is processor *i + 1*'s input.
///
/// The classic subtractive voice is a chain:
/// oscillator → filter → amplifier → delay.
pub struct Chain {
    stages: Vec<Box<dyn Processor>>,
}

impl Chain {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Builder: append a stage.
    pub fn then(mut self, stage: impl Processor + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    pub fn push(&mut self, stage: impl Processor + 'static) {
        self.stages.push(Box::new(stage));
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor for Chain {
    fn process(&mut self, data: &mut [f32], channels: usize) {
        for stage in &mut self.stages {
            stage.process(data, channels);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AddConst(f32);
    struct MulConst(f32);

    impl Processor for AddConst {
        fn process(&mut self, data: &mut [f32], _channels: usize) {
            for s in data.iter_mut() {
                *s += self.0;
            }
        }
    }

    impl Processor for MulConst {
        fn process(&mut self, data: &mut [f32], _channels: usize) {
            for s in data.iter_mut() {
                *s *= self.0;
            }
        }
    }

    #[test]
    fn applies_stages_in_order() {
        // (x + 1) * 2 is not (x * 2) + 1; order must hold.
        let mut chain = Chain::new().then(AddConst(1.0)).then(MulConst(2.0));
        let mut buffer = vec![0.0f32, 1.0];
        chain.process(&mut buffer, 1);
        assert_eq!(buffer, vec![2.0, 4.0]);
    }

    #[test]
    fn chain_equals_sequential_application() {
        let mut chained = Chain::new().then(AddConst(0.5)).then(MulConst(3.0));
        let mut chained_out = vec![0.25f32; 8];
        chained.process(&mut chained_out, 1);

        let mut manual_out = vec![0.25f32; 8];
        AddConst(0.5).process(&mut manual_out, 1);
        MulConst(3.0).process(&mut manual_out, 1);

        assert_eq!(chained_out, manual_out);
    }

    #[test]
    fn empty_chain_is_identity() {
        let mut chain = Chain::new();
        let mut buffer = vec![0.5f32, -0.5];
        chain.process(&mut buffer, 1);
        assert_eq!(buffer, vec![0.5, -0.5]);
    }
}
