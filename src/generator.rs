//! The sprite generation run

use crate::config::GeneratorConfig;
use crate::font::{load_label_font, FontChoice};
use crate::models::SpriteSpec;
use crate::output::{ensure_output_directory, save_sprite, StorageError};
use crate::progress::{ProgressEvent, ProgressReporter};
use crate::renderer::render_sprite;
use std::path::PathBuf;

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Files written, in table order
    pub outputs: Vec<PathBuf>,
    /// Face the labels were drawn with
    pub font: FontChoice,
}

/// Render and save every sprite in `specs`.
///
/// The output directory is provisioned and the font loaded once, then
/// sprites are written in table order. The first storage failure stops
/// the run; files written before it stay on disk.
pub fn generate_sprites(
    specs: &[SpriteSpec],
    config: &GeneratorConfig,
    progress: &dyn ProgressReporter,
) -> Result<RunReport, StorageError> {
    ensure_output_directory(&config.output_dir)?;
    let font = load_label_font(&config.font_path, config.font_size);

    let mut outputs = Vec::with_capacity(specs.len());
    for spec in specs {
        let image = render_sprite(spec, &font, config.canvas);
        let path = save_sprite(&image, &config.output_dir, spec.filename)?;
        tracing::debug!(path = %path.display(), "saved sprite");

        progress.report(ProgressEvent::SpriteCreated { filename: spec.filename.to_string() });
        outputs.push(path);
    }

    progress.report(ProgressEvent::RunCompleted { sprites: outputs.len() });
    Ok(RunReport { outputs, font: font.choice() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::RecordingProgress;
    use tempfile::TempDir;

    fn test_config(temp: &TempDir) -> GeneratorConfig {
        GeneratorConfig {
            font_path: temp.path().join("no-such-font.ttf"),
            ..GeneratorConfig::with_output_dir(temp.path().join("out"))
        }
    }

    #[test]
    fn test_generate_reports_each_sprite_then_completion() {
        let temp = TempDir::new().unwrap();
        let specs = [
            SpriteSpec::new("a.png", [1, 2, 3], "A", [255, 255, 255]),
            SpriteSpec::new("b.png", [4, 5, 6], "B", [0, 0, 0]),
        ];
        let progress = RecordingProgress::new();

        let report = generate_sprites(&specs, &test_config(&temp), &progress).unwrap();

        assert_eq!(report.font, FontChoice::Builtin);
        assert_eq!(
            report.outputs,
            vec![temp.path().join("out/a.png"), temp.path().join("out/b.png")]
        );
        assert_eq!(
            progress.events(),
            vec![
                ProgressEvent::SpriteCreated { filename: "a.png".to_string() },
                ProgressEvent::SpriteCreated { filename: "b.png".to_string() },
                ProgressEvent::RunCompleted { sprites: 2 },
            ]
        );
    }

    #[test]
    fn test_storage_failure_keeps_earlier_sprites() {
        let temp = TempDir::new().unwrap();
        let config = test_config(&temp);
        // A directory in the way makes the second write fail
        std::fs::create_dir_all(config.output_dir.join("taken.png")).unwrap();
        let specs = [
            SpriteSpec::new("first.png", [10, 10, 10], "1", [255, 255, 255]),
            SpriteSpec::new("taken.png", [20, 20, 20], "2", [255, 255, 255]),
            SpriteSpec::new("never.png", [30, 30, 30], "3", [255, 255, 255]),
        ];
        let progress = RecordingProgress::new();

        let err = generate_sprites(&specs, &config, &progress).unwrap_err();

        assert!(matches!(err, StorageError::Write { .. }));
        assert!(config.output_dir.join("first.png").is_file());
        assert!(!config.output_dir.join("never.png").exists());
        assert_eq!(
            progress.events(),
            vec![ProgressEvent::SpriteCreated { filename: "first.png".to_string() }]
        );
    }

    #[test]
    fn test_output_dir_collision_is_fatal() {
        let temp = TempDir::new().unwrap();
        let config = test_config(&temp);
        std::fs::write(&config.output_dir, b"file").unwrap();

        let err = generate_sprites(&[], &config, &RecordingProgress::new()).unwrap_err();
        assert!(matches!(err, StorageError::NotADirectory(_)));
    }
}
