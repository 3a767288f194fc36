//! Pixgen Audio Backend
//!
//! Deterministic sample synthesis and WAV encoding for offline asset
//! generation.
//!
//! # Overview
//!
//! A generator builds a mono `Vec<f64>` buffer from the generators in
//! [`synthesis`], shapes it with [`envelope`], combines buffers with
//! [`mixer`] and serializes the result with [`wav`]:
//!
//! ```
//! use pixgen_audio::{envelope::Adsr, mixer, synthesis, wav};
//!
//! let sr = 22050;
//! let tone = synthesis::square_wave(440.0, 0.2, 0.3, sr);
//! let hiss = synthesis::white_noise(0.2, 0.1, 42, sr);
//! let shaped = Adsr::default().apply(&mixer::mix(&tone, &hiss), sr);
//! let bytes = wav::encode(&shaped, sr)?;
//! assert_eq!(&bytes[0..4], b"RIFF");
//! # Ok::<(), pixgen_audio::EncodeError>(())
//! ```
//!
//! # Determinism
//!
//! All synthesis is deterministic. Noise takes an explicit seed routed
//! through [`rng`], and the WAV writer emits no timestamps or variable
//! metadata, so the same calls always produce byte-identical files. The
//! PCM hash in [`wav::WavResult`] exists to verify exactly that.
//!
//! # Crate Structure
//!
//! - [`synthesis`] - square, sine, noise, pitch sweep, silence
//! - [`envelope`] - attack/sustain/release amplitude shaping
//! - [`mixer`] - mix, concat, repeat
//! - [`wav`] - mono 16-bit PCM RIFF/WAVE writer
//! - [`rng`] - deterministic RNG with seed expansion
//! - [`error`] - error types

pub mod envelope;
pub mod error;
pub mod mixer;
pub mod rng;
pub mod synthesis;
pub mod wav;

pub use error::{AudioResult, EncodeError};
