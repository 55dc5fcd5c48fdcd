//! Otter Sprites - placeholder sprite generator for the Otter Drift asset pipeline
//!
//! This library provides functionality to:
//! - Declare the fixed table of placeholder sprites
//! - Render solid-color sprites with centered text labels
//! - Write them as PNG into the game's asset directory

pub mod cli;
pub mod config;
pub mod font;
pub mod generator;
pub mod models;
pub mod output;
pub mod progress;
pub mod renderer;
pub mod sprites;
