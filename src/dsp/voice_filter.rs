//! Voice filter stage — drives a [`BiQuadFilter`] from SoundFont
//! generator values and per-block cutoff modulation.

use super::filter::BiQuadFilter;
use super::units::{cents_to_hertz, cents_to_multiplying_factor, decibels_to_linear};

/// Filter settings last applied to the biquad.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Applied {
    sample_rate: i32,
    cutoff: f32,
    resonance: f32,
}

/// Low-pass filter state for a single voice.
///
/// Until [`VoiceFilter::start`] is called the cutoff is infinite, so the
/// filter passes audio through.
#[derive(Debug, Clone)]
pub struct VoiceFilter {
    filter: BiQuadFilter,
    /// Unmodulated cutoff in Hz.
    cutoff: f32,
    /// Linear resonance peak.
    resonance: f32,
    /// Cutoff actually used, limited to one octave of movement per block.
    smoothed_cutoff: f32,
    applied: Option<Applied>,
}

impl Default for VoiceFilter {
    fn default() -> Self {
        VoiceFilter {
            filter: BiQuadFilter::new(),
            cutoff: f32::INFINITY,
            resonance: 1.0,
            smoothed_cutoff: f32::INFINITY,
            applied: None,
        }
    }
}

impl VoiceFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepare for a new note.
    ///
    /// `initial_cutoff_cents` is in absolute cents and `initial_q_centibels`
    /// in centibels, as stored in a SoundFont zone.
    pub fn start(&mut self, initial_cutoff_cents: i32, initial_q_centibels: i32) {
        self.filter.clear_buffer();
        self.cutoff = cents_to_hertz(initial_cutoff_cents as f32);
        self.resonance = decibels_to_linear(0.1 * initial_q_centibels as f32);
        self.smoothed_cutoff = self.cutoff;
        self.applied = None;
    }

    /// Filter one block, shifting the cutoff by `cutoff_cents_offset`.
    pub fn process(&mut self, sample_rate: i32, block: &mut [f32], cutoff_cents_offset: f32) {
        let target = self.cutoff * cents_to_multiplying_factor(cutoff_cents_offset);

        let lower_limit = 0.5 * self.smoothed_cutoff;
        let upper_limit = 2.0 * self.smoothed_cutoff;
        // max/min rather than clamp: a NaN target keeps the previous limits.
        self.smoothed_cutoff = target.max(lower_limit).min(upper_limit);

        let next = Applied {
            sample_rate,
            cutoff: self.smoothed_cutoff,
            resonance: self.resonance,
        };
        if self.applied != Some(next) {
            self.filter.set_low_pass_filter(sample_rate, next.cutoff, next.resonance);
            self.applied = Some(next);
        }

        self.filter.process(block);
    }

    pub fn smoothed_cutoff(&self) -> f32 {
        self.smoothed_cutoff
    }

    pub fn filter(&self) -> &BiQuadFilter {
        &self.filter
    }
}
