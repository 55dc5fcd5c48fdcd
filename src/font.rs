//! Label fonts: loading, measuring and glyph rasterization
//!
//! A [`LabelFont`] is either an outline face read from disk with
//! `ab_glyph` or the [`BuiltinFont`] bitmap face. [`load_label_font`]
//! always succeeds; a face that cannot be loaded is replaced by the
//! built-in one.

pub mod builtin;

use ab_glyph::{point, Font, FontVec, GlyphId, OutlinedGlyph, PxScale, ScaleFont};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use builtin::BuiltinFont;

/// Pixel bounding box of rendered glyphs, relative to the pen origin.
///
/// The pen origin is the top-left corner of the line box: for outline
/// fonts the baseline sits `ascent` pixels below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBounds {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Smallest box containing both boxes.
    pub fn union(self, other: TextBounds) -> TextBounds {
        TextBounds {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// Why the preferred font could not be used.
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("failed to read font {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse font {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: ab_glyph::InvalidFont,
    },
}

/// Which face a [`LabelFont`] ended up using.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontChoice {
    /// The preferred face loaded from this path
    Preferred(PathBuf),
    /// The built-in bitmap face
    Builtin,
}

impl std::fmt::Display for FontChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontChoice::Preferred(path) => write!(f, "{}", path.display()),
            FontChoice::Builtin => write!(f, "built-in 5x7 bitmap"),
        }
    }
}

/// A font that can measure and draw label text.
pub enum LabelFont {
    Outline { font: FontVec, scale: PxScale, path: PathBuf },
    Builtin(BuiltinFont),
}

impl std::fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LabelFont::Outline { scale, path, .. } => f
                .debug_struct("Outline")
                .field("path", path)
                .field("scale", &scale.y)
                .finish_non_exhaustive(),
            LabelFont::Builtin(font) => f.debug_tuple("Builtin").field(font).finish(),
        }
    }
}

impl LabelFont {
    /// Load an outline font from `path` with an em size of `size` pixels.
    pub fn from_file(path: &Path, size: f32) -> Result<Self, FontLoadError> {
        let data = fs::read(path)
            .map_err(|source| FontLoadError::Read { path: path.to_path_buf(), source })?;
        let font = FontVec::try_from_vec(data)
            .map_err(|source| FontLoadError::Parse { path: path.to_path_buf(), source })?;
        let scale = em_to_px_scale(size, font.height_unscaled(), font.units_per_em());
        Ok(LabelFont::Outline { font, scale, path: path.to_path_buf() })
    }

    pub fn builtin() -> Self {
        LabelFont::Builtin(BuiltinFont::default())
    }

    pub fn choice(&self) -> FontChoice {
        match self {
            LabelFont::Outline { path, .. } => FontChoice::Preferred(path.clone()),
            LabelFont::Builtin(_) => FontChoice::Builtin,
        }
    }

    /// Ink bounds of `text` with the pen at the origin.
    ///
    /// Returns `None` when nothing would be drawn (empty or whitespace-only text).
    pub fn measure(&self, text: &str) -> Option<TextBounds> {
        match self {
            LabelFont::Outline { font, scale, .. } => layout(font, *scale, text)
                .iter()
                .map(|glyph| {
                    let rect = glyph.px_bounds();
                    TextBounds {
                        left: rect.min.x.floor() as i32,
                        top: rect.min.y.floor() as i32,
                        right: rect.max.x.ceil() as i32,
                        bottom: rect.max.y.ceil() as i32,
                    }
                })
                .reduce(TextBounds::union),
            LabelFont::Builtin(font) => font.measure(text),
        }
    }

    /// Rasterize `text` with the pen at `origin`.
    ///
    /// `plot` receives absolute pixel coordinates, which may fall outside
    /// any canvas, and a coverage value in `0.0..=1.0`.
    pub fn draw(&self, text: &str, origin: (i32, i32), mut plot: impl FnMut(i32, i32, f32)) {
        match self {
            LabelFont::Outline { font, scale, .. } => {
                for glyph in layout(font, *scale, text) {
                    let rect = glyph.px_bounds();
                    let (gx, gy) = (rect.min.x.floor() as i32, rect.min.y.floor() as i32);
                    glyph.draw(|x, y, coverage| {
                        plot(origin.0 + gx + x as i32, origin.1 + gy + y as i32, coverage)
                    });
                }
            }
            LabelFont::Builtin(font) => font.draw(text, origin, plot),
        }
    }
}

/// Convert an em size in pixels to an `ab_glyph` scale.
///
/// `PxScale` is the pixel height of `ascent - descent`, while font sizes
/// are given per em. Faces without a usable `unitsPerEm` keep the size as is.
pub fn em_to_px_scale(em_px: f32, height_unscaled: f32, units_per_em: Option<f32>) -> PxScale {
    match units_per_em {
        Some(upem) if upem > 0.0 && height_unscaled > 0.0 => {
            PxScale::from(em_px * height_unscaled / upem)
        }
        _ => PxScale::from(em_px),
    }
}

/// Position each glyph of a single line, kerning adjacent pairs.
fn layout(font: &FontVec, scale: PxScale, text: &str) -> Vec<OutlinedGlyph> {
    let scaled = font.as_scaled(scale);
    let mut caret = point(0.0, scaled.ascent());
    let mut previous: Option<GlyphId> = None;
    let mut glyphs = Vec::new();

    for ch in text.chars() {
        let id = scaled.glyph_id(ch);
        if let Some(prev) = previous {
            caret.x += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scale, caret);
        caret.x += scaled.h_advance(id);
        previous = Some(id);

        // Whitespace has no outline
        if let Some(outlined) = font.outline_glyph(glyph) {
            glyphs.push(outlined);
        }
    }
    glyphs
}

/// Load the label font, falling back to the built-in face.
///
/// Only font loading failures are absorbed here. The substitution is
/// logged at `info` and never reaches the caller.
pub fn load_label_font(path: &Path, size: f32) -> LabelFont {
    match LabelFont::from_file(path, size) {
        Ok(font) => {
            tracing::info!(font = %path.display(), size, "loaded label font");
            font
        }
        Err(e) => {
            tracing::info!("{e}; using built-in font");
            LabelFont::builtin()
        }
    }
}
