//! Pixgen Raster Backend
//!
//! Deterministic pixel-art canvas, drawing operations and PNG encoding for
//! offline asset generation.
//!
//! # Overview
//!
//! A generator builds a [`PixelCanvas`] with the primitives in [`draw`],
//! then serializes it with [`png`]:
//!
//! ```
//! use pixgen_raster::{draw, png, PixelCanvas, Rgba};
//!
//! let mut canvas = PixelCanvas::new(16, 16)?;
//! draw::fill_circle(&mut canvas, 8, 8, 5, Rgba::opaque(200, 40, 40));
//! let outlined = draw::outline(&canvas, Rgba::BLACK);
//! let bytes = png::encode(&outlined)?;
//! assert_eq!(&bytes[1..4], b"PNG");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Determinism
//!
//! Every operation is a pure function of its inputs. Randomness (noise
//! fills) goes through [`rng`] with explicit seeds, and the PNG writer uses
//! fixed compression settings, so the same calls always produce
//! byte-identical files.
//!
//! # Crate Structure
//!
//! - [`canvas`] - the RGBA pixel grid
//! - [`color`] - the [`Rgba`] value type
//! - [`draw`] - lines, disks, ellipses, noise, outline, scale, blit, aura
//! - [`png`] - minimal chunked PNG container writer
//! - [`rng`] - deterministic RNG with seed expansion
//! - [`error`] - error types

pub mod canvas;
pub mod color;
pub mod draw;
pub mod error;
pub mod png;
pub mod rng;

pub use canvas::PixelCanvas;
pub use color::Rgba;
pub use error::{EncodeError, EncodeResult, RasterError, RasterResult};
