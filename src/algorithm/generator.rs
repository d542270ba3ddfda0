use crate::{
    algorithm::{adjustment::NeighborInfluence, cluster, sampler},
    io::color::ColorValue,
    io::configuration::{
        ACCENT_CLUSTER_SIZE, CELLS_PER_ACCENT_CLUSTER, CONTRAST_FACTOR, MAX_ACCENT_CLUSTERS,
        MAX_GRID_DIMENSION, REPEAT_FACTOR, SECONDARY_CLUSTER_ATTEMPTS, SECONDARY_CLUSTER_CHANCE,
        SECONDARY_CLUSTER_SIZE,
    },
    io::error::{Result, invalid_parameter},
    io::palette::Palette,
    math::random::{RandomSource, SeededRandom},
    spatial::{ColorAssignment, HexCell, HexGrid},
};
use std::collections::BTreeMap;

/// Palette and tuning knobs for a generation run
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Colors, their weights and their cluster roles
    pub palette: Palette,
    /// One accent cluster is planted per this many cells
    pub cells_per_accent_cluster: usize,
    /// Upper bound on accent clusters
    pub max_accent_clusters: usize,
    /// Inclusive size range for accent clusters
    pub accent_cluster_size: (usize, usize),
    /// Inclusive range for attempts per secondary color
    pub secondary_cluster_attempts: (usize, usize),
    /// Probability that one secondary attempt plants a cluster
    pub secondary_cluster_chance: f64,
    /// Inclusive size range for secondary clusters
    pub secondary_cluster_size: (usize, usize),
    /// Weight multiplier for a color matching a neighbor
    pub repeat_factor: f64,
    /// Weight multiplier for a color complementing a neighbor
    pub contrast_factor: f64,
}

impl GeneratorConfig {
    /// Default knobs around the given palette
    pub const fn new(palette: Palette) -> Self {
        Self {
            palette,
            cells_per_accent_cluster: CELLS_PER_ACCENT_CLUSTER,
            max_accent_clusters: MAX_ACCENT_CLUSTERS,
            accent_cluster_size: ACCENT_CLUSTER_SIZE,
            secondary_cluster_attempts: SECONDARY_CLUSTER_ATTEMPTS,
            secondary_cluster_chance: SECONDARY_CLUSTER_CHANCE,
            secondary_cluster_size: SECONDARY_CLUSTER_SIZE,
            repeat_factor: REPEAT_FACTOR,
            contrast_factor: CONTRAST_FACTOR,
        }
    }

    /// Default knobs around the built-in palette
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded palette is invalid.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(Palette::builtin()?))
    }

    /// Neighbor weighting rules derived from this configuration
    pub fn influence(&self) -> NeighborInfluence {
        NeighborInfluence {
            repeat_factor: self.repeat_factor,
            contrast_factor: self.contrast_factor,
            complementary: self.palette.complementary().to_vec(),
        }
    }

    /// Number of accent clusters planted on a grid of `total_cells`
    pub fn accent_cluster_count(&self, total_cells: usize) -> usize {
        total_cells
            .checked_div(self.cells_per_accent_cluster)
            .unwrap_or(0)
            .min(self.max_accent_clusters)
    }
}

/// Stages of a generation run, entered strictly in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GenerationPhase {
    /// Cells enumerated, nothing assigned
    Init,
    /// Accent clusters planted
    AccentClustersPlaced,
    /// Secondary clusters planted
    SecondaryClustersPlaced,
    /// Every remaining cell sampled
    Filled,
    /// Assignment handed back to the caller
    Done,
}

/// State owned by one in-progress run
struct GenerationRun<'g> {
    grid: &'g HexGrid,
    assignment: ColorAssignment,
    phase: GenerationPhase,
}

impl<'g> GenerationRun<'g> {
    fn new(grid: &'g HexGrid) -> Self {
        Self {
            grid,
            assignment: ColorAssignment::new(grid.rows(), grid.cols()),
            phase: GenerationPhase::Init,
        }
    }

    fn enter(&mut self, phase: GenerationPhase) {
        debug_assert!(phase > self.phase, "phases only move forward");
        self.phase = phase;
        tracing::debug!(
            phase = ?phase,
            assigned = self.assignment.len(),
            total = self.grid.len(),
            "generation phase reached"
        );
    }

    fn random_unclaimed_seed<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Option<&'g HexCell> {
        let grid: &'g HexGrid = self.grid;
        let unclaimed: Vec<&'g HexCell> = grid
            .iter()
            .filter(|cell| !self.assignment.is_claimed(cell))
            .collect();
        if unclaimed.is_empty() {
            return None;
        }
        unclaimed.get(rng.index(unclaimed.len())).copied()
    }

    fn plant_random<R: RandomSource + ?Sized>(
        &mut self,
        color: ColorValue,
        size_range: (usize, usize),
        rng: &mut R,
    ) -> Result<usize> {
        let Some(seed) = self.random_unclaimed_seed(rng) else {
            tracing::debug!(color = %color, "no unclaimed seed left, skipping cluster");
            return Ok(0);
        };
        let target_size = rng.range_inclusive(size_range.0, size_range.1);
        let members = cluster::plant(
            seed,
            color,
            target_size,
            self.grid,
            &mut self.assignment,
            rng,
        )?;
        Ok(members.len())
    }
}

/// Procedural floor generator
///
/// A run plants a few clusters of the accent color, then a random number of
/// secondary clusters, and finally sweeps the grid in row-major order
/// sampling every cell still empty from the palette re-weighted by its
/// already-colored neighbors. The sweep is a single pass; earlier cells never
/// see colors chosen after them.
#[derive(Debug, Clone)]
pub struct PatternGenerator {
    config: GeneratorConfig,
    influence: NeighborInfluence,
}

impl PatternGenerator {
    /// Create a generator for a configuration
    pub fn new(config: GeneratorConfig) -> Self {
        let influence = config.influence();
        Self { config, influence }
    }

    /// Generator configuration
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Assign a color to every cell of a `rows` x `cols` grid
    ///
    /// Display bounds such as the CLI's row and column limits are left to
    /// callers; only the [`MAX_GRID_DIMENSION`] coordinate limit is checked.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `rows` or `cols` exceeds [`MAX_GRID_DIMENSION`]
    /// - The palette cannot be sampled (no entries or no positive weight)
    /// - A cluster is planted on a claimed cell
    ///
    /// A failed run yields no partial assignment.
    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Result<ColorAssignment> {
        for (parameter, value) in [("rows", rows), ("cols", cols)] {
            if value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be at most {MAX_GRID_DIMENSION}"),
                ));
            }
        }

        let grid = HexGrid::new(rows, cols);
        let mut run = GenerationRun::new(&grid);

        self.place_accent_clusters(&mut run, rng)?;
        run.enter(GenerationPhase::AccentClustersPlaced);

        self.place_secondary_clusters(&mut run, rng)?;
        run.enter(GenerationPhase::SecondaryClustersPlaced);

        self.fill_remaining(&mut run, rng)?;
        run.enter(GenerationPhase::Filled);

        run.enter(GenerationPhase::Done);
        Ok(run.assignment)
    }

    fn place_accent_clusters<R: RandomSource + ?Sized>(
        &self,
        run: &mut GenerationRun<'_>,
        rng: &mut R,
    ) -> Result<()> {
        let accent = self.config.palette.accent();
        for _ in 0..self.config.accent_cluster_count(run.grid.len()) {
            let planted = run.plant_random(accent, self.config.accent_cluster_size, rng)?;
            tracing::debug!(color = %accent, size = planted, "accent cluster");
        }
        Ok(())
    }

    fn place_secondary_clusters<R: RandomSource + ?Sized>(
        &self,
        run: &mut GenerationRun<'_>,
        rng: &mut R,
    ) -> Result<()> {
        let (low, high) = self.config.secondary_cluster_attempts;
        for &color in self.config.palette.secondary() {
            let attempts = rng.range_inclusive(low, high);
            for _ in 0..attempts {
                if !rng.chance(self.config.secondary_cluster_chance) {
                    continue;
                }
                let planted = run.plant_random(color, self.config.secondary_cluster_size, rng)?;
                tracing::debug!(color = %color, size = planted, "secondary cluster");
            }
        }
        Ok(())
    }

    fn fill_remaining<R: RandomSource + ?Sized>(
        &self,
        run: &mut GenerationRun<'_>,
        rng: &mut R,
    ) -> Result<()> {
        let base = self.config.palette.entries();
        let grid = run.grid;
        for cell in grid.iter() {
            if run.assignment.is_claimed(cell) {
                continue;
            }

            let neighbor_colors: Vec<ColorValue> = grid
                .neighbors(cell)
                .into_iter()
                .filter_map(|neighbor| run.assignment.get(neighbor.position))
                .collect();

            let weighted = self.influence.adjust(base, &neighbor_colors);
            let color = sampler::select(&weighted, rng)?;
            run.assignment.assign(cell, color)?;
        }
        Ok(())
    }
}

/// Generate a floor with the built-in palette and an entropy-seeded source
///
/// Returns the `"{row}-{col}"` keyed mapping with `rows * cols` entries.
///
/// # Errors
///
/// Returns an error if the built-in palette is invalid or a dimension
/// exceeds [`MAX_GRID_DIMENSION`].
pub fn generate(rows: usize, cols: usize) -> Result<BTreeMap<String, ColorValue>> {
    let generator = PatternGenerator::new(GeneratorConfig::builtin()?);
    let mut rng = SeededRandom::from_entropy();
    Ok(generator.generate(rows, cols, &mut rng)?.to_keyed())
}
