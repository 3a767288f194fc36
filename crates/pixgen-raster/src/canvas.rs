//! RGBA pixel canvas.
//!
//! The canvas is the drawing surface every raster operation works on: a
//! fixed-size row-major grid of [`Rgba`] pixels with origin at the top-left.
//! Coordinate accessors take `i32` and clip, so drawing code never has to
//! bounds-check before writing.

use std::collections::HashMap;

use crate::color::Rgba;
use crate::error::{RasterError, RasterResult};

/// A 2D RGBA pixel grid.
///
/// Pixels are stored row-major. All pixels start fully transparent.
/// Out-of-bounds reads return [`Rgba::TRANSPARENT`]; out-of-bounds writes
/// are silently dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl PixelCanvas {
    /// Create a fully transparent canvas.
    ///
    /// Fails with [`RasterError::InvalidDimension`] if either dimension is
    /// zero or the pixel count would overflow.
    pub fn new(width: u32, height: u32) -> RasterResult<Self> {
        let size = (width as usize)
            .checked_mul(height as usize)
            .filter(|_| width > 0 && height > 0)
            .ok_or(RasterError::InvalidDimension { width, height })?;

        Ok(Self {
            width,
            height,
            pixels: vec![Rgba::TRANSPARENT; size],
        })
    }

    /// Canvas width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw pixel buffer, row-major.
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Read the pixel at `(x, y)`, or [`Rgba::TRANSPARENT`] when the
    /// coordinate is off-canvas.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Rgba {
        match self.index(x, y) {
            Some(idx) => self.pixels[idx],
            None => Rgba::TRANSPARENT,
        }
    }

    /// Write the pixel at `(x, y)`. Off-canvas coordinates are ignored.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = color;
        }
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    /// Fill the half-open rectangle `[x, x+w) x [y, y+h)`.
    ///
    /// Cells outside the canvas are skipped.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgba) {
        for dy in 0..h as i32 {
            for dx in 0..w as i32 {
                self.set(x + dx, y + dy, color);
            }
        }
    }

    /// Stamp an ASCII-art grid onto the canvas starting at the origin.
    ///
    /// The grid string is trimmed, then read line by line top to bottom.
    /// Each character mapped in `palette` sets the corresponding pixel;
    /// unmapped characters (conventionally `.`) leave the pixel untouched.
    pub fn stamp_grid(&mut self, grid: &str, palette: &HashMap<char, Rgba>) {
        for (y, row) in grid.trim().lines().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if let Some(&color) = palette.get(&ch) {
                    self.set(x as i32, y as i32, color);
                }
            }
        }
    }
}
