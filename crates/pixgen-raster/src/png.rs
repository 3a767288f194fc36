//! Deterministic PNG writer.
//!
//! Serializes a [`PixelCanvas`] into a minimal 8-bit RGBA PNG: the 8-byte
//! signature followed by IHDR, IDAT and IEND chunks. Scanlines carry filter
//! type 0 and the zlib stream uses a fixed compression level, so the same
//! canvas always produces byte-identical output.
//!
//! Decoding is out of scope; tests verify the output against an independent
//! decoder instead.

use std::io::Write;
use std::path::Path;

use crate::canvas::PixelCanvas;
use crate::error::{EncodeError, EncodeResult};

/// PNG file signature.
const SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Largest dimension the IHDR chunk may declare (2^31 - 1).
const MAX_DIMENSION: u32 = 0x7FFF_FFFF;

/// zlib compression level. Fixed so output bytes never vary between runs.
const COMPRESSION_LEVEL: u8 = 9;

/// Encode the canvas as a complete PNG file in memory.
pub fn encode(canvas: &PixelCanvas) -> EncodeResult<Vec<u8>> {
    let (width, height) = (canvas.width(), canvas.height());
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(EncodeError::TooLarge {
            width,
            height,
            max: MAX_DIMENSION,
        });
    }

    // IHDR: width, height, bit depth 8, color type 6 (RGBA),
    // compression 0, filter 0, interlace 0.
    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.extend_from_slice(&[8, 6, 0, 0, 0]);

    let compressed =
        miniz_oxide::deflate::compress_to_vec_zlib(&scanlines(canvas), COMPRESSION_LEVEL);

    let mut out = Vec::new();
    out.extend_from_slice(&SIGNATURE);
    write_chunk(&mut out, b"IHDR", &ihdr)?;
    write_chunk(&mut out, b"IDAT", &compressed)?;
    write_chunk(&mut out, b"IEND", &[])?;
    Ok(out)
}

/// Encode the canvas and return the bytes with their BLAKE3 hex digest.
pub fn encode_with_hash(canvas: &PixelCanvas) -> EncodeResult<(Vec<u8>, String)> {
    let data = encode(canvas)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

/// Encode the canvas and write it to a writer.
///
/// Encoding happens fully in memory first; a validation failure never
/// reaches the sink.
pub fn write_to<W: Write>(canvas: &PixelCanvas, writer: &mut W) -> EncodeResult<()> {
    let data = encode(canvas)?;
    writer.write_all(&data)?;
    Ok(())
}

/// Encode the canvas and write it to a file.
///
/// Parent directories are the caller's responsibility.
pub fn write_file<P: AsRef<Path>>(canvas: &PixelCanvas, path: P) -> EncodeResult<()> {
    let data = encode(canvas)?;
    std::fs::write(path, data)?;
    Ok(())
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Raw scanline stream: each row prefixed with filter byte 0, pixels
/// left-to-right as R, G, B, A.
fn scanlines(canvas: &PixelCanvas) -> Vec<u8> {
    let width = canvas.width() as usize;
    let mut raw = Vec::with_capacity(canvas.height() as usize * (1 + width * 4));
    for (i, pixel) in canvas.pixels().iter().enumerate() {
        if i % width == 0 {
            raw.push(0);
        }
        raw.extend_from_slice(&[pixel.r, pixel.g, pixel.b, pixel.a]);
    }
    raw
}

/// Append one chunk: big-endian payload length, 4-byte type, payload,
/// big-endian CRC-32 over type + payload.
fn write_chunk(out: &mut Vec<u8>, ctype: &[u8; 4], payload: &[u8]) -> EncodeResult<()> {
    if payload.len() > MAX_DIMENSION as usize {
        return Err(EncodeError::ChunkTooLarge { len: payload.len() });
    }

    let mut crc = crc32fast::Hasher::new();
    crc.update(ctype);
    crc.update(payload);

    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(ctype);
    out.extend_from_slice(payload);
    out.extend_from_slice(&crc.finalize().to_be_bytes());
    Ok(())
}
