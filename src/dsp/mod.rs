//! Low-level DSP primitives used by the higher level graph nodes.
//!
//! These components are allocation-free and realtime-safe, making them safe to
//! embed directly inside graph nodes. They intentionally stay focused on the
//! signal-processing math so the graph layer can handle wiring, scratch
//! buffers, and cross-thread control.

/// Control-voltage conversion laws (volt-per-octave, MIDI mapping).
pub mod cv;
/// Feedback delay line with a grow-only circular buffer.
pub mod delay;
/// Exponential glide/slew smoothing.
pub mod glide;
/// 4-pole Moog-style ladder filter core.
pub mod ladder;
/// Waveform functions and the noise generator.
pub mod wave;

pub use wave::Waveform;
