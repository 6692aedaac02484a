//! Error types for the signal generator

use std::io;
use thiserror::Error;

/// Result type for signal generation
pub type SignalResult<T> = Result<T, SignalError>;

/// Errors surfaced at the input boundary or while writing results.
///
/// The encoders, scramblers and analyzers themselves are infallible; every
/// variant here is raised before a stage runs or after the last one finished.
#[derive(Error, Debug)]
pub enum SignalError {
    /// Out-of-range scheme, scrambling or modulation choice
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// Input longer than the configured maximum
    #[error("Input too long: {len} bits exceeds the maximum of {max}")]
    CapacityExceeded { len: usize, max: usize },

    /// Non-binary character in a bit string
    #[error("Invalid bit '{ch}' at position {position}")]
    InvalidBit { ch: char, position: usize },

    /// PCM bit depth outside the supported range
    #[error("Invalid bits per sample: {0} (expected 1..={max})", max = crate::utils::consts::MAX_BITS_PER_SAMPLE)]
    InvalidBitDepth(u32),

    /// Analog sample that failed to parse or is not finite
    #[error("Invalid analog sample '{0}'")]
    InvalidSample(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}
