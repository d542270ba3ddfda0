//! Spatial data structures for the hexagonal floor
//!
//! This module contains:
//! - Offset to axial coordinate conversion and neighbor lookup
//! - The per-run color assignment grid

/// Color assignment owned by a single generation run
pub mod assignment;
/// Hexagonal coordinates, cells and adjacency
pub mod hex;

pub use assignment::ColorAssignment;
pub use hex::{HexCell, HexGrid};
