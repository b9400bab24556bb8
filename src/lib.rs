pub mod dsp;
pub mod graph; // Composable signal-graph nodes
pub mod io;

/// Largest block a single `process` call is expected to see, in frames.
pub const MAX_BLOCK_SIZE: usize = 2048;

/// Sample rate nodes assume unless configured otherwise.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;
