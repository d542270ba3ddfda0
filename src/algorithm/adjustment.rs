use crate::io::{color::ColorValue, palette::PaletteEntry};

/// Multipliers applied to palette weights by already-colored neighbors
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborInfluence {
    /// Multiplier for an entry matching a neighbor color
    pub repeat_factor: f64,
    /// Multiplier for an entry complementing a neighbor color
    pub contrast_factor: f64,
    /// Unordered complementary color pairs
    pub complementary: Vec<(ColorValue, ColorValue)>,
}

impl NeighborInfluence {
    /// Whether `a` and `b` form a complementary pair, in either order
    pub fn are_complementary(&self, a: ColorValue, b: ColorValue) -> bool {
        self.complementary
            .iter()
            .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
    }

    /// Re-weight `base` for a cell whose neighbors carry `neighbor_colors`
    ///
    /// Each neighbor discourages its own color and encourages its
    /// complements. Repeated neighbors compound multiplicatively and no
    /// weight is floored, so a color can become unlikely but never
    /// impossible while its weight stays positive. `base` is left untouched.
    pub fn adjust(
        &self,
        base: &[PaletteEntry],
        neighbor_colors: &[ColorValue],
    ) -> Vec<PaletteEntry> {
        base.iter()
            .map(|entry| {
                let weight = neighbor_colors
                    .iter()
                    .fold(entry.weight, |mut weight, &neighbor| {
                        if entry.color == neighbor {
                            weight *= self.repeat_factor;
                        }
                        if self.are_complementary(entry.color, neighbor) {
                            weight *= self.contrast_factor;
                        }
                        weight
                    });
                PaletteEntry {
                    weight,
                    ..entry.clone()
                }
            })
            .collect()
    }
}
