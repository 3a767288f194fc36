//! Deterministic WAV file writer.
//!
//! Serializes mono `f64` sample buffers as RIFF/WAVE with 16-bit PCM and
//! no metadata chunks, so the same samples always produce byte-identical
//! files. The BLAKE3 hash of the PCM payload is surfaced through
//! [`WavResult`] for determinism validation.

use std::io::Write;
use std::path::Path;

use crate::error::{AudioResult, EncodeError};

/// Bytes preceding the data payload: RIFF header plus fmt and data chunk
/// headers.
const HEADER_SIZE: u32 = 44;

/// Converts f64 samples to 16-bit little-endian PCM bytes.
///
/// Each sample is clamped to `[-1.0, 1.0]`, scaled by 32767 and truncated
/// toward zero, so -1.0 maps to -32767 (never -32768). Truncation, not
/// rounding, is the established mapping for this library.
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        let value = (sample.clamp(-1.0, 1.0) * 32767.0) as i16;
        pcm.extend_from_slice(&value.to_le_bytes());
    }
    pcm
}

/// Encode samples as a complete mono 16-bit PCM WAV file in memory.
///
/// Fails with [`EncodeError::InvalidSampleRate`] on a zero sample rate and
/// [`EncodeError::TooLarge`] when the PCM payload cannot be declared in
/// the 32-bit RIFF size field. Validation happens before any byte is
/// produced.
pub fn encode(samples: &[f64], sample_rate: u32) -> AudioResult<Vec<u8>> {
    if sample_rate == 0 {
        return Err(EncodeError::InvalidSampleRate { sample_rate });
    }
    let data_len = samples.len() * 2;
    if data_len > (u32::MAX - HEADER_SIZE) as usize {
        return Err(EncodeError::TooLarge { data_len });
    }
    let data_size = data_len as u32;

    let mut out = Vec::with_capacity(HEADER_SIZE as usize + data_len);

    // RIFF header
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_size).to_le_bytes());
    out.extend_from_slice(b"WAVE");

    // fmt chunk: PCM, mono, 16 bits
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&(sample_rate * 2).to_le_bytes());
    out.extend_from_slice(&2u16.to_le_bytes());
    out.extend_from_slice(&16u16.to_le_bytes());

    // data chunk
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_size.to_le_bytes());
    out.extend_from_slice(&samples_to_pcm16(samples));

    Ok(out)
}

/// Encode samples and write the file to a writer.
pub fn write_to<W: Write>(samples: &[f64], sample_rate: u32, writer: &mut W) -> AudioResult<()> {
    let data = encode(samples, sample_rate)?;
    writer.write_all(&data)?;
    Ok(())
}

/// Encode samples and write the file to a path.
///
/// Parent directories are the caller's responsibility.
pub fn write_file<P: AsRef<Path>>(samples: &[f64], sample_rate: u32, path: P) -> AudioResult<()> {
    let data = encode(samples, sample_rate)?;
    std::fs::write(path, data)?;
    Ok(())
}

/// Result of WAV file generation.
#[derive(Debug)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM payload only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Encode mono samples and capture the PCM hash alongside the bytes.
    pub fn from_mono(samples: &[f64], sample_rate: u32) -> AudioResult<Self> {
        let wav_data = encode(samples, sample_rate)?;
        let pcm_hash = blake3::hash(&wav_data[HEADER_SIZE as usize..])
            .to_hex()
            .to_string();
        Ok(Self {
            wav_data,
            pcm_hash,
            sample_rate,
            num_samples: samples.len(),
        })
    }
}
