//! Mathematical utilities for the generator

/// Injectable random number sources
pub mod random;
