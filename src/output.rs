//! Output directory provisioning and PNG writing

use image::{ImageFormat, RgbImage};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for output operations
#[derive(Debug, Error)]
pub enum StorageError {
    /// Output path exists but is a file
    #[error("output path {} exists and is not a directory", .0.display())]
    NotADirectory(PathBuf),
    /// Directory creation failed
    #[error("failed to create directory {}: {}", .path.display(), .source)]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Image encoding or file write failed
    #[error("failed to write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Make sure `path` is a directory, creating it and any missing parents.
///
/// Succeeds without doing anything when the directory already exists.
pub fn ensure_output_directory(path: &Path) -> Result<(), StorageError> {
    if path.is_dir() {
        return Ok(());
    }
    if path.exists() {
        return Err(StorageError::NotADirectory(path.to_path_buf()));
    }

    fs::create_dir_all(path).map_err(|source| {
        // create_dir_all reports AlreadyExists when a parent is a file
        if source.kind() == io::ErrorKind::AlreadyExists && !path.is_dir() {
            StorageError::NotADirectory(path.to_path_buf())
        } else {
            StorageError::CreateDir { path: path.to_path_buf(), source }
        }
    })?;
    tracing::info!(dir = %path.display(), "created output directory");
    Ok(())
}

/// Save a rendered sprite as PNG to `output_dir/filename`, replacing any existing file.
///
/// # Returns
///
/// The path that was written.
pub fn save_sprite(
    image: &RgbImage,
    output_dir: &Path,
    filename: &str,
) -> Result<PathBuf, StorageError> {
    let path = output_dir.join(filename);
    image
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|source| StorageError::Write { path: path.clone(), source })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_creates_nested_directories() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("assets/images/sprites");

        ensure_output_directory(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_ensure_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("sprites");

        ensure_output_directory(&dir).unwrap();
        ensure_output_directory(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_ensure_rejects_existing_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("sprites");
        fs::write(&file, b"not a dir").unwrap();

        let err = ensure_output_directory(&file).unwrap_err();
        assert!(matches!(err, StorageError::NotADirectory(_)));
    }

    #[test]
    fn test_ensure_rejects_file_parent() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("assets");
        fs::write(&file, b"not a dir").unwrap();

        let err = ensure_output_directory(&file.join("sprites")).unwrap_err();
        assert!(matches!(
            err,
            StorageError::NotADirectory(_) | StorageError::CreateDir { .. }
        ));
    }

    #[test]
    fn test_save_sprite_writes_png_and_overwrites() {
        let temp = TempDir::new().unwrap();

        let first = RgbImage::from_pixel(4, 4, Rgb([255, 0, 0]));
        let path = save_sprite(&first, temp.path(), "tile.png").unwrap();
        assert_eq!(path, temp.path().join("tile.png"));

        let second = RgbImage::from_pixel(8, 8, Rgb([0, 0, 255]));
        save_sprite(&second, temp.path(), "tile.png").unwrap();

        let loaded = image::open(&path).unwrap();
        assert_eq!(loaded.color(), image::ColorType::Rgb8);
        let loaded = loaded.to_rgb8();
        assert_eq!(loaded.dimensions(), (8, 8));
        assert_eq!(loaded.get_pixel(0, 0).0, [0, 0, 255]);
    }

    #[test]
    fn test_save_sprite_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let image = RgbImage::from_pixel(2, 2, Rgb([0, 0, 0]));

        let err = save_sprite(&image, &temp.path().join("missing"), "x.png").unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
        assert!(err.to_string().contains("x.png"));
    }
}
