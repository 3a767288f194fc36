//! Error types for the audio backend.

use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, EncodeError>;

/// Errors from WAV serialization.
///
/// Validation happens before any byte reaches the sink, so a failed encode
/// never leaves a partial file behind.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Sample rate of zero cannot be declared in the format chunk.
    #[error("invalid sample rate: {sample_rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        sample_rate: u32,
    },

    /// PCM payload exceeds what the 32-bit RIFF size field can declare.
    #[error("PCM payload of {data_len} bytes exceeds the RIFF size limit")]
    TooLarge {
        /// Payload length in bytes.
        data_len: usize,
    },

    /// I/O error while writing to the sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
