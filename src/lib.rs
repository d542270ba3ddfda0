//! Procedural color layouts for hexagonal hydraulic floor tiles
//!
//! The generator maps a rectangular grid with shifted odd rows onto axial
//! hexagonal coordinates, plants clusters of accent colors, and fills the
//! rest of the floor with weighted picks that react to already-colored
//! neighbors.

#![forbid(unsafe_code)]

/// Cluster growth, neighbor weighting, sampling and run orchestration
pub mod algorithm;
/// Summaries of finished floors
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Random number sources
pub mod math;
/// Hexagonal coordinates, cells and color assignments
pub mod spatial;

pub use algorithm::generator::{GeneratorConfig, PatternGenerator, generate};
pub use io::color::ColorValue;
pub use io::error::{GenerationError, Result};
