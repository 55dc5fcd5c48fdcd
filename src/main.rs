//! sprite-gen - writes the Otter Drift placeholder sprites

use std::process::ExitCode;

use otter_sprites::cli;

fn main() -> ExitCode {
    cli::run()
}
