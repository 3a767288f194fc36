//! Stateless drawing algorithms over a [`PixelCanvas`].
//!
//! Everything here clips silently at the canvas edges; only structural
//! parameters (scale factor, aura radius) are validated. Operations that
//! take a seed are fully deterministic for that seed.

use crate::canvas::PixelCanvas;
use crate::color::Rgba;
use crate::error::{RasterError, RasterResult};
use crate::rng::DeterministicRng;

/// Draw a line from `(x0, y0)` to `(x1, y1)` with Bresenham's algorithm.
///
/// Both endpoints are plotted; a degenerate line plots a single pixel.
/// Works in all octants.
pub fn line(canvas: &mut PixelCanvas, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    let mut x = x0;
    let mut y = y0;
    let mut err = dx + dy;

    loop {
        canvas.set(x, y, color);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Fill the disk of radius `r` centered at `(cx, cy)`.
///
/// Sets every cell whose squared offset from the center is at most `r*r`.
/// A negative radius draws nothing.
pub fn fill_circle(canvas: &mut PixelCanvas, cx: i32, cy: i32, r: i32, color: Rgba) {
    for y in -r..=r {
        for x in -r..=r {
            if x * x + y * y <= r * r {
                canvas.set(cx + x, cy + y, color);
            }
        }
    }
}

/// Fill the axis-aligned ellipse with radii `rx`, `ry` centered at `(cx, cy)`.
///
/// A zero radius is treated as 0.1 so the normalized test never divides
/// by zero; the result degenerates to a line of pixels.
pub fn fill_ellipse(canvas: &mut PixelCanvas, cx: i32, cy: i32, rx: i32, ry: i32, color: Rgba) {
    for y in -ry..=ry {
        for x in -rx..=rx {
            let fx = x as f64 / (rx as f64).max(0.1);
            let fy = y as f64 / (ry as f64).max(0.1);
            if fx * fx + fy * fy <= 1.0 {
                canvas.set(cx + x, cy + y, color);
            }
        }
    }
}

/// Repaint every pixel with `base` jittered per channel.
///
/// R, G and B each get an independent uniform draw from
/// `[-variation, +variation]` added and are clamped to `0..=255`; alpha is
/// taken from `base` unchanged. Pixels are visited row-major with three
/// draws each, so the same seed always produces the same canvas.
pub fn noise_fill(canvas: &mut PixelCanvas, base: Rgba, variation: u8, seed: u32) {
    let mut rng = DeterministicRng::new(seed);
    let v = variation as i32;

    for y in 0..canvas.height() as i32 {
        for x in 0..canvas.width() as i32 {
            let r = jitter_channel(base.r, rng.gen_range_i32(-v, v));
            let g = jitter_channel(base.g, rng.gen_range_i32(-v, v));
            let b = jitter_channel(base.b, rng.gen_range_i32(-v, v));
            canvas.set(x, y, Rgba::new(r, g, b, base.a));
        }
    }
}

#[inline]
fn jitter_channel(channel: u8, delta: i32) -> u8 {
    (channel as i32 + delta).clamp(0, 255) as u8
}

/// Return a copy of the canvas with a 1-pixel outline added.
///
/// Every transparent pixel with at least one 4-connected opaque neighbor
/// in the *input* canvas becomes `color`. The test runs against the
/// original in a single pass, so outline pixels never cascade, and opaque
/// content is never displaced.
pub fn outline(canvas: &PixelCanvas, color: Rgba) -> PixelCanvas {
    let mut out = canvas.clone();

    for y in 0..canvas.height() as i32 {
        for x in 0..canvas.width() as i32 {
            if !canvas.get(x, y).is_transparent() {
                continue;
            }
            let touches_opaque = [(-1, 0), (1, 0), (0, -1), (0, 1)]
                .iter()
                .any(|&(dx, dy)| !canvas.get(x + dx, y + dy).is_transparent());
            if touches_opaque {
                out.set(x, y, color);
            }
        }
    }

    out
}

/// Nearest-neighbor upscale: each source pixel becomes a `factor x factor`
/// block.
///
/// Fails if `factor` is zero or the scaled dimensions would overflow.
pub fn scale(canvas: &PixelCanvas, factor: u32) -> RasterResult<PixelCanvas> {
    if factor == 0 {
        return Err(RasterError::invalid_argument(
            "factor",
            "scale factor must be positive",
        ));
    }
    let width = canvas
        .width()
        .checked_mul(factor)
        .ok_or_else(|| RasterError::invalid_argument("factor", "scaled width overflows"))?;
    let height = canvas
        .height()
        .checked_mul(factor)
        .ok_or_else(|| RasterError::invalid_argument("factor", "scaled height overflows"))?;

    let mut out = PixelCanvas::new(width, height)?;
    for y in 0..canvas.height() as i32 {
        for x in 0..canvas.width() as i32 {
            let color = canvas.get(x, y);
            for dy in 0..factor as i32 {
                for dx in 0..factor as i32 {
                    out.set(x * factor as i32 + dx, y * factor as i32 + dy, color);
                }
            }
        }
    }
    Ok(out)
}

/// Copy `src` onto `dest` at the given offset.
///
/// Only pixels with alpha above zero are copied; transparent source pixels
/// leave the destination untouched (no blending). Clipped at the
/// destination's bounds.
pub fn blit(dest: &mut PixelCanvas, src: &PixelCanvas, offset_x: i32, offset_y: i32) {
    for y in 0..src.height() as i32 {
        for x in 0..src.width() as i32 {
            let color = src.get(x, y);
            if !color.is_transparent() {
                dest.set(offset_x + x, offset_y + y, color);
            }
        }
    }
}

/// Add a glow of half-alpha `color` around the opaque content.
///
/// Scans the unmodified canvas first: every transparent pixel with at
/// least one opaque pixel in the square neighborhood of side
/// `2*radius + 1` (center excluded) is collected, then each collected
/// pixel is set once to `color` with its alpha halved.
///
/// Fails if `radius` is zero.
pub fn aura(canvas: &mut PixelCanvas, color: Rgba, radius: u32) -> RasterResult<()> {
    if radius == 0 {
        return Err(RasterError::invalid_argument(
            "radius",
            "aura radius must be positive",
        ));
    }
    let r = radius as i32;

    let mut glow = Vec::new();
    for y in 0..canvas.height() as i32 {
        for x in 0..canvas.width() as i32 {
            if !canvas.get(x, y).is_transparent() {
                continue;
            }
            'search: for dy in -r..=r {
                for dx in -r..=r {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    if !canvas.get(x + dx, y + dy).is_transparent() {
                        glow.push((x, y));
                        break 'search;
                    }
                }
            }
        }
    }

    let glow_color = color.with_alpha(color.a / 2);
    for (x, y) in glow {
        canvas.set(x, y, glow_color);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(w: u32, h: u32) -> PixelCanvas {
        PixelCanvas::new(w, h).unwrap()
    }

    #[test]
    fn test_line_horizontal() {
        let mut c = canvas(8, 8);
        line(&mut c, 1, 3, 6, 3, Rgba::BLACK);
        for x in 1..=6 {
            assert_eq!(c.get(x, 3), Rgba::BLACK, "missing pixel at x={x}");
        }
        assert_eq!(c.get(0, 3), Rgba::TRANSPARENT);
        assert_eq!(c.get(7, 3), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_line_includes_both_endpoints_all_octants() {
        let endpoints = [
            (6, 1),
            (6, 6),
            (1, 6),
            (-2, 6),
            (-2, 1),
            (-2, -2),
            (1, -2),
            (6, -2),
        ];
        for (x1, y1) in endpoints {
            let mut c = canvas(8, 8);
            line(&mut c, 3, 3, x1, y1, Rgba::WHITE);
            assert_eq!(c.get(3, 3), Rgba::WHITE, "start missing toward ({x1},{y1})");
            if x1 >= 0 && y1 >= 0 {
                assert_eq!(c.get(x1, y1), Rgba::WHITE, "end missing at ({x1},{y1})");
            }
        }
    }

    #[test]
    fn test_degenerate_line_is_single_pixel() {
        let mut c = canvas(4, 4);
        line(&mut c, 2, 2, 2, 2, Rgba::BLACK);
        let painted = c.pixels().iter().filter(|p| **p == Rgba::BLACK).count();
        assert_eq!(painted, 1);
        assert_eq!(c.get(2, 2), Rgba::BLACK);
    }

    #[test]
    fn test_fill_circle_disk() {
        let mut c = canvas(9, 9);
        fill_circle(&mut c, 4, 4, 2, Rgba::WHITE);
        // center and cardinal extremes are inside
        assert_eq!(c.get(4, 4), Rgba::WHITE);
        assert_eq!(c.get(6, 4), Rgba::WHITE);
        assert_eq!(c.get(4, 2), Rgba::WHITE);
        // the corner of the bounding box is outside (8 > 4)
        assert_eq!(c.get(6, 6), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_fill_circle_negative_radius_draws_nothing() {
        let mut c = canvas(4, 4);
        fill_circle(&mut c, 2, 2, -1, Rgba::WHITE);
        assert!(c.pixels().iter().all(|p| p.is_transparent()));
    }

    #[test]
    fn test_fill_ellipse() {
        let mut c = canvas(11, 11);
        fill_ellipse(&mut c, 5, 5, 4, 2, Rgba::WHITE);
        assert_eq!(c.get(5, 5), Rgba::WHITE);
        assert_eq!(c.get(9, 5), Rgba::WHITE);
        assert_eq!(c.get(5, 7), Rgba::WHITE);
        // outside the normalized inequality
        assert_eq!(c.get(9, 7), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_fill_ellipse_zero_radius_does_not_panic() {
        let mut c = canvas(5, 5);
        fill_ellipse(&mut c, 2, 2, 0, 2, Rgba::WHITE);
        // degenerates to a vertical stroke through the center
        assert_eq!(c.get(2, 2), Rgba::WHITE);
        assert_eq!(c.get(3, 2), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_noise_fill_deterministic() {
        let base = Rgba::new(100, 120, 140, 255);
        let mut a = canvas(16, 16);
        let mut b = canvas(16, 16);
        noise_fill(&mut a, base, 10, 123);
        noise_fill(&mut b, base, 10, 123);
        assert_eq!(a, b, "same seed must give identical pixels");

        let mut c = canvas(16, 16);
        noise_fill(&mut c, base, 10, 124);
        assert_ne!(a, c, "different seed should give different pixels");
    }

    #[test]
    fn test_noise_fill_stays_near_base_and_keeps_alpha() {
        let base = Rgba::new(100, 120, 140, 200);
        let mut c = canvas(8, 8);
        noise_fill(&mut c, base, 5, 42);
        for p in c.pixels() {
            assert!((95..=105).contains(&p.r));
            assert!((115..=125).contains(&p.g));
            assert!((135..=145).contains(&p.b));
            assert_eq!(p.a, 200, "alpha must come from the base color");
        }
    }

    #[test]
    fn test_noise_fill_zero_variation_is_uniform() {
        let base = Rgba::opaque(50, 60, 70);
        let mut c = canvas(4, 4);
        noise_fill(&mut c, base, 0, 9);
        assert!(c.pixels().iter().all(|p| *p == base));
    }

    #[test]
    fn test_outline_single_pixel() {
        let mut c = canvas(10, 10);
        c.set(5, 5, Rgba::WHITE);
        let o = outline(&c, Rgba::BLACK);

        assert_eq!(o.get(5, 5), Rgba::WHITE, "opaque content is untouched");
        for (x, y) in [(4, 5), (6, 5), (5, 4), (5, 6)] {
            assert_eq!(o.get(x, y), Rgba::BLACK, "missing outline at ({x},{y})");
        }
        // diagonals are not 4-connected
        assert_eq!(o.get(4, 4), Rgba::TRANSPARENT);
        assert_eq!(o.get(6, 6), Rgba::TRANSPARENT);
        // two steps away stays transparent (no cascade)
        assert_eq!(o.get(3, 5), Rgba::TRANSPARENT);
        // input canvas is unchanged
        assert_eq!(c.get(4, 5), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_outline_at_canvas_edge() {
        let mut c = canvas(3, 3);
        c.set(0, 0, Rgba::WHITE);
        let o = outline(&c, Rgba::BLACK);
        assert_eq!(o.get(1, 0), Rgba::BLACK);
        assert_eq!(o.get(0, 1), Rgba::BLACK);
        assert_eq!(o.get(0, 0), Rgba::WHITE);
    }

    #[test]
    fn test_scale_blocks() {
        let mut c = canvas(2, 1);
        c.set(0, 0, Rgba::BLACK);
        c.set(1, 0, Rgba::WHITE);
        let s = scale(&c, 3).unwrap();
        assert_eq!(s.width(), 6);
        assert_eq!(s.height(), 3);
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(s.get(x, y), Rgba::BLACK);
                assert_eq!(s.get(x + 3, y), Rgba::WHITE);
            }
        }
    }

    #[test]
    fn test_scale_zero_factor_rejected() {
        let c = canvas(2, 2);
        assert!(matches!(
            scale(&c, 0),
            Err(RasterError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_blit_skips_transparent_pixels() {
        let mut dest = canvas(4, 4);
        dest.fill(Rgba::BLACK);

        let mut src = canvas(2, 2);
        src.set(0, 0, Rgba::WHITE);
        // (1, 0), (0, 1), (1, 1) stay transparent

        blit(&mut dest, &src, 1, 1);
        assert_eq!(dest.get(1, 1), Rgba::WHITE);
        assert_eq!(dest.get(2, 1), Rgba::BLACK, "transparent src must not overwrite");
        assert_eq!(dest.get(2, 2), Rgba::BLACK);
    }

    #[test]
    fn test_blit_clips_at_dest_bounds() {
        let mut dest = canvas(3, 3);
        let mut src = canvas(2, 2);
        src.fill(Rgba::WHITE);
        blit(&mut dest, &src, 2, 2);
        assert_eq!(dest.get(2, 2), Rgba::WHITE);
        // the other three source pixels fell off the canvas
        let painted = dest.pixels().iter().filter(|p| !p.is_transparent()).count();
        assert_eq!(painted, 1);
    }

    #[test]
    fn test_aura_halves_alpha() {
        let mut c = canvas(10, 10);
        c.set(5, 5, Rgba::WHITE);
        aura(&mut c, Rgba::new(0, 255, 0, 200), 1).unwrap();

        let glow = Rgba::new(0, 255, 0, 100);
        // radius 1 square neighborhood includes diagonals
        for (x, y) in [(4, 5), (6, 5), (5, 4), (5, 6), (4, 4), (6, 6), (4, 6), (6, 4)] {
            assert_eq!(c.get(x, y), glow, "missing aura at ({x},{y})");
        }
        assert_eq!(c.get(5, 5), Rgba::WHITE, "opaque content is untouched");
        assert_eq!(c.get(3, 5), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_aura_zero_radius_rejected() {
        let mut c = canvas(4, 4);
        assert!(matches!(
            aura(&mut c, Rgba::WHITE, 0),
            Err(RasterError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_aura_radius_two_reaches_further() {
        let mut c = canvas(11, 11);
        c.set(5, 5, Rgba::WHITE);
        aura(&mut c, Rgba::new(255, 0, 0, 100), 2).unwrap();
        assert_eq!(c.get(3, 5), Rgba::new(255, 0, 0, 50));
        assert_eq!(c.get(3, 3), Rgba::new(255, 0, 0, 50));
        assert_eq!(c.get(2, 5), Rgba::TRANSPARENT);
    }
}
