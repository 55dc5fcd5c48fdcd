//! Command-line entry point
//!
//! The command takes no options besides `--help` and `--version`; it
//! always regenerates the full sprite table into the default directory.

use clap::Parser;
use std::process::ExitCode;
use tracing::Level;

use crate::config::GeneratorConfig;
use crate::generator::generate_sprites;
use crate::progress::ConsolePrinter;
use crate::sprites::SPRITES;

/// Exit codes
const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;

/// Generate placeholder PNG sprites for Otter Drift into assets/images/sprites/
#[derive(Parser)]
#[command(name = "sprite-gen")]
#[command(version)]
pub struct Cli {}

/// Send library logs to stderr so stdout only carries progress lines.
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the CLI
pub fn run() -> ExitCode {
    let _cli = Cli::parse();
    init_logging();

    let config = GeneratorConfig::default();
    match generate_sprites(SPRITES, &config, &ConsolePrinter::new()) {
        Ok(_) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
