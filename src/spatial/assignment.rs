//! Per-run mapping from grid cells to their assigned colors

use crate::io::color::ColorValue;
use crate::io::error::{GenerationError, Result};
use crate::spatial::hex::{GridPosition, HexCell};
use ndarray::Array2;
use std::collections::BTreeMap;

/// Colors assigned so far during one generation run
///
/// Entries are only ever added. Writing to a cell that already holds a color
/// fails with [`GenerationError::CellAlreadyAssigned`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorAssignment {
    colors: Array2<Option<ColorValue>>,
    assigned: usize,
}

impl ColorAssignment {
    /// Create an empty assignment for a `rows` x `cols` grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            colors: Array2::from_elem((rows, cols), None),
            assigned: 0,
        }
    }

    /// Color of a cell, if assigned
    pub fn get(&self, position: GridPosition) -> Option<ColorValue> {
        self.colors
            .get([position.row, position.col])
            .copied()
            .flatten()
    }

    /// Whether a cell already holds a color
    pub fn is_claimed(&self, cell: &HexCell) -> bool {
        self.get(cell.position).is_some()
    }

    /// Record the color of a cell
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::CellAlreadyAssigned`] if the cell already has
    /// a color, or [`GenerationError::InvalidParameter`] if it lies outside
    /// the grid.
    pub fn assign(&mut self, cell: &HexCell, color: ColorValue) -> Result<()> {
        let slot = self
            .colors
            .get_mut([cell.position.row, cell.position.col])
            .ok_or_else(|| {
                crate::io::error::invalid_parameter(
                    "cell",
                    &cell.key,
                    &"position lies outside the grid",
                )
            })?;

        if slot.is_some() {
            return Err(GenerationError::CellAlreadyAssigned {
                key: cell.key.clone(),
            });
        }

        *slot = Some(color);
        self.assigned += 1;
        Ok(())
    }

    /// Number of assigned cells
    pub const fn len(&self) -> usize {
        self.assigned
    }

    /// Whether no cell has been assigned yet
    pub const fn is_empty(&self) -> bool {
        self.assigned == 0
    }

    /// Whether every cell of the grid has a color
    pub fn is_complete(&self) -> bool {
        self.assigned == self.colors.len()
    }

    /// Grid dimensions (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.colors.dim()
    }

    /// Assigned cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (GridPosition, ColorValue)> + '_ {
        self.colors
            .indexed_iter()
            .filter_map(|((row, col), color)| color.map(|c| (GridPosition::new(row, col), c)))
    }

    /// Convert into the `"{row}-{col}"` keyed mapping handed to renderers
    pub fn to_keyed(&self) -> BTreeMap<String, ColorValue> {
        self.iter()
            .map(|(position, color)| (position.key(), color))
            .collect()
    }
}
