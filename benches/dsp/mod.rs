//! Benchmark groups for the core primitives and a realistic voice chain.

mod control;
mod delay;
mod filter;
mod oscillator;
mod voice;

pub use control::bench_control;
pub use delay::bench_delay;
pub use filter::bench_filter;
pub use oscillator::bench_oscillator;
pub use voice::bench_voice;
