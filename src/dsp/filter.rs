//! Resonant low-pass biquad — one instance per voice.
//!
//! Coefficients come from the Audio EQ Cookbook (Robert Bristow-Johnson)
//! low-pass prototype, with the Q derived from the requested resonance
//! peak height. The recurrence runs in Direct Form I so the history cells
//! always hold real input/output samples, which lets the filter keep
//! tracking the signal while it is bypassed.

use std::f64::consts::PI;

/// Offset between the requested resonance and the Q that produces it.
const RESONANCE_PEAK_OFFSET: f32 = (1.0 - std::f64::consts::FRAC_1_SQRT_2) as f32;

/// Cutoffs at or above this fraction of the sample rate bypass the filter.
const NYQUIST_GUARD: f32 = 0.499;

/// A second-order low-pass IIR filter.
///
/// The sample rate is not stored: callers pass the current rate to
/// [`BiQuadFilter::set_low_pass_filter`], so a rate change only takes
/// effect on the next reconfiguration.
#[derive(Debug, Clone, Default)]
pub struct BiQuadFilter {
    active: bool,

    // Normalized coefficients: b0/a0, b1/a0, b2/a0, a1/a0, a2/a0
    a0: f32,
    a1: f32,
    a2: f32,
    a3: f32,
    a4: f32,

    x1: f32,
    x2: f32,
    y1: f32,
    y2: f32,
}

impl BiQuadFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the input/output history.
    pub fn clear_buffer(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
    }

    /// Configure the filter for a cutoff in Hz and a linear resonance peak.
    ///
    /// A cutoff at or above `0.499 * sample_rate` (or NaN) leaves the
    /// coefficients untouched and switches the filter to pass-through.
    pub fn set_low_pass_filter(&mut self, sample_rate: i32, cutoff_frequency: f32, resonance: f32) {
        let below_guard = cutoff_frequency < NYQUIST_GUARD * sample_rate as f32;
        if !below_guard {
            self.active = false;
            return;
        }

        self.active = true;

        // Keeps the realized peak height within 3% of the requested one.
        let q = resonance - RESONANCE_PEAK_OFFSET / (1.0 + 6.0 * (resonance - 1.0));

        let w = 2.0 * PI * cutoff_frequency as f64 / sample_rate as f64;
        let cos_w = w.cos();
        let alpha = w.sin() / (2.0 * q) as f64;

        let b0 = (1.0 - cos_w) / 2.0;
        let b1 = 1.0 - cos_w;
        let b2 = (1.0 - cos_w) / 2.0;
        let a0 = 1.0 + alpha;
        let a1 = -2.0 * cos_w;
        let a2 = 1.0 - alpha;

        self.set_coefficients(a0 as f32, a1 as f32, a2 as f32, b0 as f32, b1 as f32, b2 as f32);
    }

    /// Filter a block in place.
    ///
    /// While bypassed the block is left as is, but the last two samples
    /// still become the history so a later activation starts from the
    /// actual signal. An empty block is a no-op; a single-sample block
    /// shifts that one sample into the history.
    pub fn process(&mut self, block: &mut [f32]) {
        if self.active {
            for sample in block.iter_mut() {
                let input = *sample;
                let output = self.a0 * input + self.a1 * self.x1 + self.a2 * self.x2
                    - self.a3 * self.y1
                    - self.a4 * self.y2;

                self.x2 = self.x1;
                self.x1 = input;
                self.y2 = self.y1;
                self.y1 = output;

                *sample = output;
            }
            return;
        }

        match *block {
            [] => {}
            [last] => {
                self.x2 = self.x1;
                self.x1 = last;
                self.y2 = self.x2;
                self.y1 = self.x1;
            }
            [.., second_last, last] => {
                self.x2 = second_last;
                self.x1 = last;
                self.y2 = self.x2;
                self.y1 = self.x1;
            }
        }
    }

    /// Whether the recurrence is applied (`false` means pass-through).
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Normalized coefficients in recurrence order.
    pub fn coefficients(&self) -> [f32; 5] {
        [self.a0, self.a1, self.a2, self.a3, self.a4]
    }

    fn set_coefficients(&mut self, a0: f32, a1: f32, a2: f32, b0: f32, b1: f32, b2: f32) {
        self.a0 = b0 / a0;
        self.a1 = b1 / a0;
        self.a2 = b2 / a0;
        self.a3 = a1 / a0;
        self.a4 = a2 / a0;
    }
}
