//! Color utilities for sprite generation.

/// RGBA color with 8-bit components.
///
/// Alpha 0 is fully transparent, 255 fully opaque. Channels are never
/// premultiplied; any pixel with alpha above zero counts as opaque for
/// blitting and outlining.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black, the blank-canvas color.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    /// Opaque black.
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    /// Opaque white.
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    /// Create a new color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color (alpha = 255).
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Returns true if the color is fully transparent (alpha = 0).
    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// The same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Scale R, G, B toward black. Channels truncate toward zero; alpha is
    /// unchanged.
    pub fn darken(self, factor: f64) -> Self {
        Self {
            r: scale_channel(self.r, factor),
            g: scale_channel(self.g, factor),
            b: scale_channel(self.b, factor),
            a: self.a,
        }
    }

    /// Scale R, G, B toward white, saturating at 255. Alpha is unchanged.
    pub fn lighten(self, factor: f64) -> Self {
        // Same channel math as darken; the clamp does the saturation.
        self.darken(factor)
    }
}

fn scale_channel(channel: u8, factor: f64) -> u8 {
    (f64::from(channel) * factor).clamp(0.0, 255.0) as u8
}
