//! Control-voltage conversion laws.
//!
//! The engine's pitch convention is a normalized control voltage in roughly
//! `[-1, 1]`, mapped to Hz with an exponential volt-per-octave law. The
//! constants are chosen so a CV of `0.55` lands exactly on A4 (440 Hz).

/// Frequency at the reference voltage, in Hz.
pub const BASE_FREQUENCY: f32 = 440.0;
/// Voltage (in volts, not normalized) that produces [`BASE_FREQUENCY`].
pub const BASE_VOLTAGE: f32 = 2.75;
/// A normalized CV of 1.0 corresponds to this many volts.
pub const MAX_ABS_VOLTAGE: f32 = 5.0;

/// Convert a normalized control voltage to a frequency in Hz.
///
/// `frequency = BASE_FREQUENCY / 2^BASE_VOLTAGE * 2^(value * MAX_ABS_VOLTAGE)`
///
/// Each 0.2 step of normalized CV is one octave.
#[inline]
pub fn normalised_cv_to_frequency(value: f32) -> f32 {
    BASE_FREQUENCY / 2.0_f32.powf(BASE_VOLTAGE) * 2.0_f32.powf(value * MAX_ABS_VOLTAGE)
}

/// Map a MIDI note number onto the normalized CV range.
///
/// Note 60 (middle C) maps to 0; the 0-127 key range covers a bit more than
/// `[-1, 1]`.
#[inline]
pub fn midi_to_normalised_cv(note: u8) -> f32 {
    (note as f32 / 60.0) - 1.0
}
