pub mod dsp;
pub mod error;
pub mod settings;
pub mod soundfont;

use crate::dsp::filter::BiQuadFilter;
use wasm_bindgen::prelude::*;

pub use crate::dsp::voice_filter::VoiceFilter;
pub use crate::settings::SynthesizerSettings;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the crate version string.
#[wasm_bindgen]
pub fn core_version() -> String {
    VERSION.to_string()
}

/// Low-pass a mono buffer with fresh filter state.
pub fn lowpass(samples: &mut [f32], sample_rate: i32, cutoff_frequency: f32, resonance: f32) {
    let mut filter = BiQuadFilter::new();
    filter.set_low_pass_filter(sample_rate, cutoff_frequency, resonance);
    filter.process(samples);
}

/// WASM-exposed: low-pass a mono f32 buffer and return the result.
#[wasm_bindgen]
pub fn lowpass_block(
    mut samples: Vec<f32>,
    sample_rate: i32,
    cutoff_frequency: f32,
    resonance: f32,
) -> Vec<f32> {
    lowpass(&mut samples, sample_rate, cutoff_frequency, resonance);
    samples
}

/// WASM-exposed: parse an `inst` chunk body into a list of instrument records.
#[wasm_bindgen]
pub fn read_instrument_list(chunk: &[u8]) -> Result<JsValue, JsValue> {
    let mut reader = chunk;
    let instruments = soundfont::read_instruments_from_chunk(&mut reader, chunk.len())
        .map_err(|e| JsValue::from_str(&format!("{e}")))?;
    serde_wasm_bindgen::to_value(&instruments).map_err(|e| JsValue::from_str(&format!("{e}")))
}
