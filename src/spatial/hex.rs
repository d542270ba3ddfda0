//! Offset-grid to axial-coordinate mapping and hexagonal adjacency
//!
//! The floor is laid out as rectangular rows where every odd row is shifted
//! half a tile to the right. Axial coordinates turn that layout into a skewed
//! two-axis system in which all six neighbors sit at fixed offsets.

use ndarray::Array2;
use std::fmt;

/// Unit offsets to the six neighbors, in the order neighbors are reported
pub const AXIAL_DIRECTIONS: [AxialCoordinate; 6] = [
    AxialCoordinate { q: 1, r: 0 },
    AxialCoordinate { q: 1, r: -1 },
    AxialCoordinate { q: 0, r: -1 },
    AxialCoordinate { q: -1, r: 0 },
    AxialCoordinate { q: -1, r: 1 },
    AxialCoordinate { q: 0, r: 1 },
];

/// Cell location in the rectangular display grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPosition {
    /// Zero-based row
    pub row: usize,
    /// Zero-based column
    pub col: usize,
}

impl GridPosition {
    /// Create a grid position
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Lookup key in `"{row}-{col}"` form
    pub fn key(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

/// Axial hexagonal coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxialCoordinate {
    /// Skewed column axis
    pub q: i32,
    /// Row axis
    pub r: i32,
}

impl AxialCoordinate {
    /// Create an axial coordinate
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Axial coordinate of an offset grid position (`q = col - floor(row / 2)`)
    ///
    /// Rows and columns must not exceed
    /// [`MAX_GRID_DIMENSION`](crate::io::configuration::MAX_GRID_DIMENSION),
    /// the largest extent whose coordinates and neighbor offsets fit in `i32`.
    pub const fn from_position(position: GridPosition) -> Self {
        let r = position.row as i32;
        Self {
            q: position.col as i32 - r.div_euclid(2),
            r,
        }
    }

    /// Offset grid position of this coordinate, if it has non-negative indices
    pub const fn to_position(self) -> Option<GridPosition> {
        let col = self.q + self.r.div_euclid(2);
        if self.r < 0 || col < 0 {
            return None;
        }
        Some(GridPosition::new(self.r as usize, col as usize))
    }

    /// Coordinate shifted by a direction
    pub const fn offset(self, direction: Self) -> Self {
        Self {
            q: self.q + direction.q,
            r: self.r + direction.r,
        }
    }
}

/// A grid cell with both coordinate systems and its lookup key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexCell {
    /// Position in the display grid
    pub position: GridPosition,
    /// Position in axial space
    pub axial: AxialCoordinate,
    /// Stable `"{row}-{col}"` key
    pub key: String,
}

impl HexCell {
    /// Build a cell for a grid position
    pub fn new(position: GridPosition) -> Self {
        Self {
            position,
            axial: AxialCoordinate::from_position(position),
            key: position.key(),
        }
    }
}

/// Produce every cell of a `rows` x `cols` grid in row-major order
///
/// Same cells and order as [`HexGrid::iter`].
pub fn enumerate(rows: usize, cols: usize) -> Vec<HexCell> {
    HexGrid::new(rows, cols).iter().cloned().collect()
}

/// All cells of one grid, indexed for constant-time neighbor lookup
#[derive(Debug, Clone)]
pub struct HexGrid {
    cells: Array2<HexCell>,
}

impl HexGrid {
    /// Enumerate the cells of a `rows` x `cols` grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::from_shape_fn((rows, cols), |(row, col)| {
                HexCell::new(GridPosition::new(row, col))
            }),
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Enumerate the cells in row-major order
    ///
    /// Generation sweeps cells in this order.
    pub fn iter(&self) -> impl Iterator<Item = &HexCell> {
        self.cells.iter()
    }

    /// Cell at a grid position
    pub fn cell(&self, position: GridPosition) -> Option<&HexCell> {
        self.cells.get([position.row, position.col])
    }

    /// Cell at an axial coordinate
    pub fn cell_at_axial(&self, axial: AxialCoordinate) -> Option<&HexCell> {
        axial.to_position().and_then(|position| self.cell(position))
    }

    /// Cells adjacent to `cell`, in [`AXIAL_DIRECTIONS`] order
    ///
    /// Offsets that fall outside the grid are skipped, so boundary cells
    /// report fewer than six neighbors.
    pub fn neighbors(&self, cell: &HexCell) -> Vec<&HexCell> {
        AXIAL_DIRECTIONS
            .iter()
            .filter_map(|&direction| self.cell_at_axial(cell.axial.offset(direction)))
            .collect()
    }
}
