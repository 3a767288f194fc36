//! Generates a small outlined sprite and writes it as a PNG.

use pixgen_raster::{draw, png, PixelCanvas, Rgba};

fn main() {
    println!("Generating demo sprite...");

    let body = Rgba::opaque(200, 60, 80);
    let eye = Rgba::opaque(20, 20, 30);

    let mut canvas = PixelCanvas::new(16, 16).expect("valid dimensions");
    draw::fill_ellipse(&mut canvas, 8, 9, 5, 4, body);
    draw::fill_circle(&mut canvas, 8, 4, 3, body.lighten(1.2));
    canvas.set(7, 3, eye);
    canvas.set(9, 3, eye);
    draw::line(&mut canvas, 6, 5, 10, 5, eye);

    let mut sprite = draw::outline(&canvas, Rgba::opaque(40, 10, 20));
    draw::aura(&mut sprite, Rgba::new(255, 200, 120, 120), 1).expect("valid radius");

    let scaled = draw::scale(&sprite, 8).expect("valid factor");
    let (data, hash) = png::encode_with_hash(&scaled).expect("encodable canvas");

    std::fs::write("demo_sprite.png", &data).expect("writable working directory");
    println!("Wrote demo_sprite.png ({} bytes, blake3 {})", data.len(), hash);
}
