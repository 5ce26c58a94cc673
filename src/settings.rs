//! Synthesizer configuration.
//!
//! The sample rate lives here and is handed to each voice filter when it
//! is reconfigured. Settings are plain data: change them only while no
//! voices are rendering.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

const SAMPLE_RATE_RANGE: std::ops::RangeInclusive<i32> = 16000..=192000;
const BLOCK_SIZE_RANGE: std::ops::RangeInclusive<usize> = 8..=1024;
const POLYPHONY_RANGE: std::ops::RangeInclusive<usize> = 8..=256;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SynthesizerSettings {
    /// Output sample rate in Hz.
    pub sample_rate: i32,
    /// Samples rendered per block; filters are reconfigured once per block.
    pub block_size: usize,
    pub maximum_polyphony: usize,
    pub enable_reverb_and_chorus: bool,
}

impl Default for SynthesizerSettings {
    fn default() -> Self {
        SynthesizerSettings {
            sample_rate: 44100,
            block_size: 64,
            maximum_polyphony: 64,
            enable_reverb_and_chorus: true,
        }
    }
}

impl SynthesizerSettings {
    pub fn new(sample_rate: i32) -> Result<Self, SettingsError> {
        let settings = SynthesizerSettings {
            sample_rate,
            ..Default::default()
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: SynthesizerSettings = serde_json::from_str(json)?;
        settings.validate()?;
        debug!(
            "Loaded settings: {} Hz, block {}, polyphony {}",
            settings.sample_rate, settings.block_size, settings.maximum_polyphony
        );
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !SAMPLE_RATE_RANGE.contains(&self.sample_rate) {
            return Err(SettingsError::SampleRateOutOfRange {
                value: self.sample_rate,
            });
        }
        if !BLOCK_SIZE_RANGE.contains(&self.block_size) {
            return Err(SettingsError::BlockSizeOutOfRange {
                value: self.block_size,
            });
        }
        if !POLYPHONY_RANGE.contains(&self.maximum_polyphony) {
            return Err(SettingsError::PolyphonyOutOfRange {
                value: self.maximum_polyphony,
            });
        }
        Ok(())
    }
}
