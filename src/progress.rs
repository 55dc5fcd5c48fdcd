//! Generation progress reporting.
//!
//! The generator reports one event per written sprite and one when the
//! whole table is done. [`ConsolePrinter`] turns those into the lines the
//! asset pipeline prints on stdout.

use std::io::Write;
use std::sync::Mutex;

/// Events reported while generating sprites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// A sprite file was written
    SpriteCreated {
        /// Filename from the sprite table
        filename: String,
    },
    /// Every sprite in the table was written
    RunCompleted {
        /// Number of sprites written
        sprites: usize,
    },
}

/// Trait for progress reporters.
pub trait ProgressReporter {
    /// Report a progress event.
    fn report(&self, event: ProgressEvent);
}

/// A progress reporter that discards all events.
#[derive(Debug, Default)]
pub struct NullProgress;

impl ProgressReporter for NullProgress {
    fn report(&self, _event: ProgressEvent) {}
}

/// Writes one human-readable line per event.
pub struct ConsolePrinter {
    output: Mutex<Box<dyn Write + Send>>,
}

impl std::fmt::Debug for ConsolePrinter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsolePrinter").finish_non_exhaustive()
    }
}

impl ConsolePrinter {
    /// Printer writing to stdout.
    pub fn new() -> Self {
        Self::with_output(std::io::stdout())
    }

    /// Printer writing to a custom output.
    pub fn with_output<W: Write + Send + 'static>(output: W) -> Self {
        Self { output: Mutex::new(Box::new(output)) }
    }

    fn writeln(&self, line: &str) {
        if let Ok(mut output) = self.output.lock() {
            let _ = writeln!(output, "{}", line);
        }
    }
}

impl Default for ConsolePrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for ConsolePrinter {
    fn report(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::SpriteCreated { filename } => {
                self.writeln(&format!("Created {}", filename));
            }
            ProgressEvent::RunCompleted { .. } => {
                self.writeln("All placeholder sprites created successfully!");
            }
        }
    }
}

/// Collects events in memory for unit tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingProgress {
    events: Mutex<Vec<ProgressEvent>>,
}

#[cfg(test)]
impl RecordingProgress {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Events reported so far, oldest first.
    pub(crate) fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl ProgressReporter for RecordingProgress {
    fn report(&self, event: ProgressEvent) {
        self.events.lock().unwrap().push(event);
    }
}
