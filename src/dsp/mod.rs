//! DSP — per-voice low-pass filtering.
//!
//! Everything here is allocation-free and runs on the audio thread. Each
//! voice owns its own filter; voices may render on separate threads but a
//! single filter is never shared.

pub mod filter;
pub mod units;
pub mod voice_filter;
