//! Generation constants and runtime configuration defaults

// Grid bounds enforced by callers before generation
/// Smallest accepted column count
pub const MIN_COLS: usize = 5;
/// Largest accepted column count
pub const MAX_COLS: usize = 50;
/// Smallest accepted row count
pub const MIN_ROWS: usize = 5;
/// Largest accepted row count
pub const MAX_ROWS: usize = 30;

// Safety limit keeping axial coordinates and neighbor offsets inside i32
/// Largest row or column count the generator accepts
pub const MAX_GRID_DIMENSION: usize = i32::MAX as usize - 1;

/// Default number of grid rows
pub const DEFAULT_ROWS: usize = 10;
/// Default number of grid columns
pub const DEFAULT_COLS: usize = 12;

// Accent cluster placement
/// One accent cluster is planted per this many cells
pub const CELLS_PER_ACCENT_CLUSTER: usize = 20;
/// Upper bound on accent clusters regardless of grid size
pub const MAX_ACCENT_CLUSTERS: usize = 2;
/// Inclusive size range for accent clusters
pub const ACCENT_CLUSTER_SIZE: (usize, usize) = (2, 4);

// Secondary cluster placement
/// Inclusive range for the number of attempts per secondary color
pub const SECONDARY_CLUSTER_ATTEMPTS: (usize, usize) = (2, 5);
/// Probability that a single secondary attempt plants a cluster
pub const SECONDARY_CLUSTER_CHANCE: f64 = 0.3;
/// Inclusive size range for secondary clusters
pub const SECONDARY_CLUSTER_SIZE: (usize, usize) = (2, 5);

// Neighbor influence during fill
/// Weight multiplier for a color matching a neighbor
pub const REPEAT_FACTOR: f64 = 0.7;
/// Weight multiplier for a color complementing a neighbor
pub const CONTRAST_FACTOR: f64 = 1.2;

// Output settings
/// Default JSON output path
pub const DEFAULT_OUTPUT: &str = "floor.json";
/// Side length of one cell in preview images
pub const CELL_PIXELS: u32 = 16;
/// Default number of independent runs per invocation
pub const DEFAULT_VARIANTS: usize = 1;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
