//! SoundFont chunk readers.

pub mod instrument;

pub use instrument::{InstrumentInfo, read_instruments_from_chunk, resolve_last_zone_end};

use std::io::Read;

/// Read a NUL-padded ASCII field of `length` bytes.
///
/// Everything from the first NUL on is dropped; non-UTF-8 bytes are
/// replaced rather than rejected.
pub(crate) fn read_fixed_length_string<R: Read>(
    reader: &mut R,
    length: usize,
) -> std::io::Result<String> {
    let mut buf = vec![0u8; length];
    reader.read_exact(&mut buf)?;
    let end = buf.iter().position(|&b| b == 0).unwrap_or(length);
    Ok(String::from_utf8_lossy(&buf[..end]).into_owned())
}

pub(crate) fn read_u16_le<R: Read>(reader: &mut R) -> std::io::Result<u16> {
    let mut buf = [0u8; 2];
    reader.read_exact(&mut buf)?;
    Ok(u16::from_le_bytes(buf))
}
