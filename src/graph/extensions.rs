use crate::graph::{
    amplify::Amplifier,
    chain::Chain,
    combine::{Add, Multiply},
    node::Processor,
};

/// Fluent combinators so patches read in signal-flow order.
///
/// ```ignore
/// let voice = Oscillator::sawtooth()
///     .with_frequency(cv)
///     .through(filter)
///     .amplify(gate);
/// ```
pub trait NodeExt: Processor + Sized {
    /// Parallel composition, summed.
    fn add<B: Processor>(self, other: B) -> Add<Self, B> {
        Add::new(self, other)
    }

    /// Parallel composition, multiplied.
    fn multiply<B: Processor>(self, other: B) -> Multiply<Self, B> {
        Multiply::new(self, other)
    }

    /// Serial composition: `self` then `next`.
    fn through(self, next: impl Processor + 'static) -> Chain
    where
        Self: 'static,
    {
        Chain::new().then(self).then(next)
    }

    /// Multiply this signal by a gain source.
    fn amplify(self, gain: impl Processor + 'static) -> Chain
    where
        Self: 'static,
    {
        self.through(Amplifier::new().with_gain(gain))
    }
}

impl<T: Processor> NodeExt for T {}
