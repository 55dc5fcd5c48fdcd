//! Sprite rendering to image buffers

use crate::font::{LabelFont, TextBounds};
use crate::models::{CanvasSize, SpriteSpec};
use image::{Rgb, RgbImage};

/// Render a placeholder sprite.
///
/// The canvas is filled with `spec.fill_color` and the label is drawn in
/// `spec.text_color` so that its ink bounding box is centered. A label
/// larger than the canvas gets a negative position and is clipped.
///
/// # Examples
///
/// ```
/// use otter_sprites::font::LabelFont;
/// use otter_sprites::models::{CanvasSize, SpriteSpec};
/// use otter_sprites::renderer::render_sprite;
///
/// let spec = SpriteSpec::new("log.png", [139, 69, 19], "LOG", [255, 255, 255]);
/// let image = render_sprite(&spec, &LabelFont::builtin(), CanvasSize::SPRITE);
///
/// assert_eq!(image.dimensions(), (128, 128));
/// assert_eq!(image.get_pixel(0, 0).0, [139, 69, 19]);
/// ```
pub fn render_sprite(spec: &SpriteSpec, font: &LabelFont, canvas: CanvasSize) -> RgbImage {
    let mut image = RgbImage::from_pixel(canvas.width, canvas.height, spec.fill_color);

    let Some(bounds) = font.measure(spec.label) else {
        tracing::debug!(sprite = spec.filename, "label has no ink, fill only");
        return image;
    };

    let (x, y) = centered_position(canvas, bounds);
    tracing::debug!(sprite = spec.filename, x, y, w = bounds.width(), h = bounds.height(), "drawing label");

    // Shift the pen so the ink box, not the line box, starts at (x, y)
    let origin = (x - bounds.left, y - bounds.top);
    let (width, height) = (canvas.width as i32, canvas.height as i32);
    font.draw(spec.label, origin, |px, py, coverage| {
        if px < 0 || py < 0 || px >= width || py >= height {
            return;
        }
        let pixel = image.get_pixel_mut(px as u32, py as u32);
        *pixel = blend(*pixel, spec.text_color, coverage);
    });

    image
}

/// Top-left position that centers a box of the measured size on the canvas.
///
/// Uses floor division, so oversized text yields negative coordinates.
pub fn centered_position(canvas: CanvasSize, bounds: TextBounds) -> (i32, i32) {
    let x = (canvas.width as i32 - bounds.width()).div_euclid(2);
    let y = (canvas.height as i32 - bounds.height()).div_euclid(2);
    (x, y)
}

/// Mix `fg` over `bg` by `coverage`.
fn blend(bg: Rgb<u8>, fg: Rgb<u8>, coverage: f32) -> Rgb<u8> {
    let t = coverage.clamp(0.0, 1.0);
    let mix = |b: u8, f: u8| (b as f32 + (f as f32 - b as f32) * t).round() as u8;
    Rgb([mix(bg[0], fg[0]), mix(bg[1], fg[1]), mix(bg[2], fg[2])])
}
