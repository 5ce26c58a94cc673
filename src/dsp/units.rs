//! SoundFont generator unit conversions.

/// Absolute cents to Hz (0 cents = 8.176 Hz, MIDI note 0).
pub fn cents_to_hertz(cents: f32) -> f32 {
    8.176 * cents_to_multiplying_factor(cents)
}

/// Relative cents to a frequency ratio.
pub fn cents_to_multiplying_factor(cents: f32) -> f32 {
    (cents / 1200.0).exp2()
}

pub fn decibels_to_linear(db: f32) -> f32 {
    10.0_f32.powf(0.05 * db)
}
