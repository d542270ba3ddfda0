//! Palette definitions and JSON palette loading
//!
//! A palette is an ordered list of weighted colors plus the roles the
//! generator gives some of them: one accent color for the first clusters,
//! a few secondary colors for the second cluster pass, and a symmetric
//! table of complementary pairs that neighbor adjustment favors.

use crate::io::color::ColorValue;
use crate::io::error::{GenerationError, Result, invalid_palette};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Palette shipped with the crate
pub const BUILTIN_PALETTE: &str = include_str!("../../data/palette.json");

/// One selectable color with its relative likelihood
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Color painted onto the cell
    pub color: ColorValue,
    /// Human readable name used in summaries
    pub name: String,
    /// Relative likelihood; entries need not sum to one
    pub weight: f64,
}

impl PaletteEntry {
    /// Create a palette entry
    pub fn new(color: ColorValue, name: impl Into<String>, weight: f64) -> Self {
        Self {
            color,
            name: name.into(),
            weight,
        }
    }
}

/// Raw palette file layout before validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Ordered palette entries
    pub entries: Vec<PaletteEntry>,
    /// Color of the first cluster pass
    pub accent: ColorValue,
    /// Colors of the second cluster pass, in placement order
    #[serde(default)]
    pub secondary: Vec<ColorValue>,
    /// Unordered pairs of colors that look good side by side
    #[serde(default)]
    pub complementary: Vec<(ColorValue, ColorValue)>,
}

/// Validated palette ready for generation
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
    accent: ColorValue,
    secondary: Vec<ColorValue>,
    complementary: Vec<(ColorValue, ColorValue)>,
}

impl Palette {
    /// Validate a raw palette configuration
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidPalette`] if:
    /// - There are no entries
    /// - A weight is not a finite positive number
    /// - Two entries share a color
    /// - The accent or a secondary color is not one of the entries
    pub fn from_config(config: PaletteConfig) -> Result<Self> {
        if config.entries.is_empty() {
            return Err(invalid_palette(&"palette has no entries"));
        }

        let mut seen = HashSet::with_capacity(config.entries.len());
        for entry in &config.entries {
            if !entry.weight.is_finite() || entry.weight <= 0.0 {
                return Err(invalid_palette(&format!(
                    "entry '{}' has non-positive weight {}",
                    entry.name, entry.weight
                )));
            }
            if !seen.insert(entry.color) {
                return Err(invalid_palette(&format!(
                    "color {} appears more than once",
                    entry.color
                )));
            }
        }

        for role in std::iter::once(&config.accent).chain(&config.secondary) {
            if !seen.contains(role) {
                return Err(invalid_palette(&format!(
                    "cluster color {role} is not a palette entry"
                )));
            }
        }

        Ok(Self {
            entries: config.entries,
            accent: config.accent,
            secondary: config.secondary,
            complementary: config.complementary,
        })
    }

    /// Parse and validate a palette from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, a color cannot be
    /// normalized, or validation fails.
    pub fn from_json_str(json: &str, origin: &Path) -> Result<Self> {
        let config: PaletteConfig =
            serde_json::from_str(json).map_err(|e| GenerationError::Serialization {
                path: origin.to_path_buf(),
                source: e,
            })?;
        Self::from_config(config)
    }

    /// Load a palette file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not hold a valid palette.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| GenerationError::FileSystem {
                path: path.to_path_buf(),
                operation: "read palette",
                source: e,
            })?;
        let palette = Self::from_json_str(&contents, path)?;
        tracing::info!(
            path = %path.display(),
            entries = palette.entries.len(),
            "palette loaded"
        );
        Ok(palette)
    }

    /// The palette embedded in the crate
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded JSON has been broken.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_PALETTE, Path::new("<builtin>"))
    }

    /// Ordered palette entries
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Color planted by the accent cluster pass
    pub const fn accent(&self) -> ColorValue {
        self.accent
    }

    /// Colors planted by the secondary cluster pass
    pub fn secondary(&self) -> &[ColorValue] {
        &self.secondary
    }

    /// Complementary color pairs
    pub fn complementary(&self) -> &[(ColorValue, ColorValue)] {
        &self.complementary
    }

    /// Look up the entry for a color
    pub fn entry(&self, color: ColorValue) -> Option<&PaletteEntry> {
        self.entries.iter().find(|entry| entry.color == color)
    }
}
