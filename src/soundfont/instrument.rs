//! Instrument list (`inst` sub-chunk of `pdta`).

use std::io::Read;

use log::debug;
use serde::Serialize;

use super::{read_fixed_length_string, read_u16_le};
use crate::error::LoadError;

/// Size of one `inst` record: 20-byte name + u16 zone index.
pub const INSTRUMENT_RECORD_SIZE: usize = 22;

const NAME_LENGTH: usize = 20;

/// One instrument header and the range of zones it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentInfo {
    pub name: String,
    pub zone_start_index: i32,
    /// Inclusive. `None` until the following record (or the caller) fixes it.
    pub zone_end_index: Option<i32>,
}

/// Read `size` bytes of instrument records from `reader`.
///
/// Each record's zone range ends one before the next record's start. The
/// last record is left open; see [`resolve_last_zone_end`].
pub fn read_instruments_from_chunk<R: Read>(
    reader: &mut R,
    size: usize,
) -> Result<Vec<InstrumentInfo>, LoadError> {
    if size % INSTRUMENT_RECORD_SIZE != 0 {
        return Err(LoadError::InvalidInstrumentList { size });
    }

    let count = size / INSTRUMENT_RECORD_SIZE;
    let mut instruments = Vec::with_capacity(count);

    for _ in 0..count {
        let name = read_fixed_length_string(reader, NAME_LENGTH)?;
        let zone_start_index = read_u16_le(reader)? as i32;
        instruments.push(InstrumentInfo {
            name,
            zone_start_index,
            zone_end_index: None,
        });
    }

    for i in 1..instruments.len() {
        instruments[i - 1].zone_end_index = Some(instruments[i].zone_start_index - 1);
    }

    debug!("Read {count} instrument records");
    Ok(instruments)
}

/// Close the last record's zone range given the total number of zones.
pub fn resolve_last_zone_end(instruments: &mut [InstrumentInfo], total_zone_count: i32) {
    if let Some(last) = instruments.last_mut() {
        last.zone_end_index = Some(total_zone_count - 1);
    }
}

impl InstrumentInfo {
    /// Number of zones, once the range is resolved.
    pub fn zone_count(&self) -> Option<i32> {
        self.zone_end_index.map(|end| end - self.zone_start_index + 1)
    }
}
