//! Composable building blocks for constructing signal-processing graphs.
//!
//! Every node implements the same one-method [`node::Processor`] contract, so
//! an audio signal, a frequency input, and a gain input are interchangeable:
//! any node can modulate any parameter of any other node. Graphs are plain
//! ownership trees built once at patch time; rendering is a synchronous
//! depth-first pull from the root, once per output block.

/// Multiply a signal by an optional gain input.
pub mod amplify;
/// Serial composition of an ordered list of processors.
pub mod chain;
/// Parallel composition: render two nodes and add or multiply their outputs.
pub mod combine;
/// Glide-smoothed control values writable from another thread.
pub mod control;
/// Feedback delay effect.
pub mod delay;
/// Gate-driven attack/release envelope shaper.
pub mod envelope;
/// Fluent combinators (`.add()`, `.multiply()`, `.through()`).
pub mod extensions;
/// 4-pole resonant low-pass filter node.
pub mod filter;
/// The core `Processor` trait shared by all graph nodes.
pub mod node;
/// Phase-accumulating audio-band oscillators.
pub mod oscillator;
/// Snap a control signal onto a musical scale's voltage grid.
pub mod quantizer;

pub use control::{ControlHandle, ControlValue};
pub use node::Processor;
