/// Command-line argument parsing and batch processing
pub mod cli;
/// Canonical color values and color string normalization
pub mod color;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// JSON export of generated floors
pub mod export;
/// PNG preview rendering
pub mod image;
/// Palette definitions and loading
pub mod palette;
/// Terminal progress display
pub mod progress;
