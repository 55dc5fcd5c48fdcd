//! Generator settings
//!
//! The defaults are the values the asset pipeline expects. They are not
//! read from any file.

use crate::models::CanvasSize;
use std::path::PathBuf;

/// Where to write sprites and how to draw their labels.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Directory receiving the sprite files
    pub output_dir: PathBuf,
    /// Size of every sprite
    pub canvas: CanvasSize,
    /// Preferred label font
    pub font_path: PathBuf,
    /// Label font size in pixels
    pub font_size: f32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            canvas: CanvasSize::SPRITE,
            font_path: default_font_path(),
            font_size: default_font_size(),
        }
    }
}

impl GeneratorConfig {
    /// Default settings writing into `output_dir` instead.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into(), ..Self::default() }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("assets/images/sprites")
}

fn default_font_path() -> PathBuf {
    PathBuf::from("/System/Library/Fonts/Arial.ttf")
}

fn default_font_size() -> f32 {
    16.0
}
