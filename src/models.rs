//! Data models for placeholder sprites

use image::Rgb;

/// Appearance of a single placeholder sprite.
///
/// Instances live in static tables; every field is borrowed for the
/// lifetime of the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSpec {
    /// Output path relative to the output directory
    pub filename: &'static str,
    /// Solid background color
    pub fill_color: Rgb<u8>,
    /// Text drawn in the middle of the sprite
    pub label: &'static str,
    pub text_color: Rgb<u8>,
}

impl SpriteSpec {
    pub const fn new(
        filename: &'static str,
        fill_color: [u8; 3],
        label: &'static str,
        text_color: [u8; 3],
    ) -> Self {
        Self { filename, fill_color: Rgb(fill_color), label, text_color: Rgb(text_color) }
    }
}

/// Pixel dimensions of a sprite canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    /// The size every placeholder sprite is rendered at.
    pub const SPRITE: CanvasSize = CanvasSize::square(128);

    pub const fn square(side: u32) -> Self {
        Self { width: side, height: side }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::SPRITE
    }
}
