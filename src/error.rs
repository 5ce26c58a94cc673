use std::fmt;
use std::io;

/// Failure while reading SoundFont chunk data.
#[derive(Debug)]
pub enum LoadError {
    /// The instrument list size is not a whole number of records.
    InvalidInstrumentList { size: usize },
    /// The underlying reader failed or ran out of data.
    Io(io::Error),
}

/// Rejected synthesizer configuration.
#[derive(Debug)]
pub enum SettingsError {
    SampleRateOutOfRange { value: i32 },
    BlockSizeOutOfRange { value: usize },
    PolyphonyOutOfRange { value: usize },
    Json(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::InvalidInstrumentList { size } => {
                write!(f, "The instrument list is invalid (chunk size {size})")
            }
            LoadError::Io(e) => write!(f, "Read error: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::SampleRateOutOfRange { value } => {
                write!(f, "The sample rate must be between 16000 and 192000, got {value}")
            }
            SettingsError::BlockSizeOutOfRange { value } => {
                write!(f, "The block size must be between 8 and 1024, got {value}")
            }
            SettingsError::PolyphonyOutOfRange { value } => {
                write!(f, "The maximum polyphony must be between 8 and 256, got {value}")
            }
            SettingsError::Json(e) => write!(f, "Invalid settings JSON: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Json(e)
    }
}
