//! Color usage tallies for finished assignments

use crate::io::color::ColorValue;
use crate::io::palette::Palette;
use crate::spatial::ColorAssignment;
use std::collections::HashMap;

/// Usage of one palette entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorCount {
    /// Palette color
    pub color: ColorValue,
    /// Palette name of the color
    pub name: String,
    /// Number of cells painted with it
    pub count: usize,
}

/// Per-color cell counts in palette order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSummary {
    /// One row per palette entry, including unused ones
    pub counts: Vec<ColorCount>,
    /// Cells whose color is not in the palette
    pub off_palette: usize,
    /// Cells counted in total
    pub total: usize,
}

impl ColorSummary {
    /// Tally an assignment against a palette
    pub fn tally(assignment: &ColorAssignment, palette: &Palette) -> Self {
        let mut by_color: HashMap<ColorValue, usize> = HashMap::new();
        let mut total = 0;
        for (_, color) in assignment.iter() {
            *by_color.entry(color).or_insert(0) += 1;
            total += 1;
        }

        let counts: Vec<ColorCount> = palette
            .entries()
            .iter()
            .map(|entry| ColorCount {
                color: entry.color,
                name: entry.name.clone(),
                count: by_color.remove(&entry.color).unwrap_or(0),
            })
            .collect();

        Self {
            counts,
            off_palette: by_color.values().sum(),
            total,
        }
    }

    /// Fraction of counted cells painted with `color`
    pub fn share(&self, color: ColorValue) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.counts
            .iter()
            .find(|row| row.color == color)
            .map_or(0.0, |row| row.count as f64 / self.total as f64)
    }
}
