//! The fixed set of placeholder sprites used by Otter Drift
//!
//! Sprites are generated in table order.

use crate::models::SpriteSpec;

const WHITE: [u8; 3] = [255, 255, 255];
const BLACK: [u8; 3] = [0, 0, 0];

/// Every placeholder sprite the game expects under `assets/images/sprites/`.
pub const SPRITES: &[SpriteSpec] = &[
    SpriteSpec::new("otter.png", [0, 150, 255], "OTTER", WHITE),
    SpriteSpec::new("log.png", [139, 69, 19], "LOG", WHITE),
    SpriteSpec::new("lily.png", [0, 255, 0], "LILY", BLACK),
    SpriteSpec::new("heart.png", [255, 0, 0], "HEART", WHITE),
    SpriteSpec::new("river_tile.png", [0, 100, 200], "RIVER", WHITE),
];

// Two entries sharing a filename would silently overwrite each other.
const _: () = assert!(filenames_unique(SPRITES), "duplicate filename in SPRITES");

/// Check that no two specs in the table write to the same file.
pub const fn filenames_unique(specs: &[SpriteSpec]) -> bool {
    let mut i = 0;
    while i < specs.len() {
        let mut j = i + 1;
        while j < specs.len() {
            if str_eq(specs[i].filename, specs[j].filename) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}
