//! Command-line interface for generating floor layouts in batches

use crate::algorithm::generator::{GeneratorConfig, PatternGenerator};
use crate::analysis::summary::ColorSummary;
use crate::io::configuration::{
    DEFAULT_COLS, DEFAULT_OUTPUT, DEFAULT_ROWS, DEFAULT_VARIANTS, MAX_COLS, MAX_ROWS, MIN_COLS,
    MIN_ROWS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::export::{FloorDocument, export_json};
use crate::io::image::export_preview_png;
use crate::io::palette::Palette;
use crate::io::progress::ProgressManager;
use crate::math::random::SeededRandom;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hexfloor")]
#[command(
    author,
    version,
    about = "Generate color layouts for hexagonal hydraulic floor tiles"
)]
/// Command-line arguments for the floor generator
pub struct Cli {
    /// Number of tile rows (5-30)
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Number of tile columns (5-50)
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Random seed for reproducible floors; omitted means a fresh floor every run
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// JSON palette file replacing the built-in palette
    #[arg(short, long)]
    pub palette: Option<PathBuf>,

    /// Output JSON file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Also write a PNG preview to this path
    #[arg(long)]
    pub preview: Option<PathBuf>,

    /// Number of independent floors to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_VARIANTS)]
    pub variants: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Enforce the grid bounds the generator relies on its callers for
    ///
    /// # Errors
    ///
    /// Returns [`crate::GenerationError::InvalidParameter`] if rows, columns
    /// or the variant count are out of range.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_ROWS..=MAX_ROWS).contains(&self.rows) {
            return Err(invalid_parameter(
                "rows",
                &self.rows,
                &format!("must be between {MIN_ROWS} and {MAX_ROWS}"),
            ));
        }
        if !(MIN_COLS..=MAX_COLS).contains(&self.cols) {
            return Err(invalid_parameter(
                "cols",
                &self.cols,
                &format!("must be between {MIN_COLS} and {MAX_COLS}"),
            ));
        }
        if self.variants == 0 {
            return Err(invalid_parameter(
                "variants",
                &self.variants,
                &"at least one floor must be generated",
            ));
        }
        Ok(())
    }

    /// Seed for the variant at `index`, if runs are seeded
    pub fn variant_seed(&self, index: usize) -> Option<u64> {
        self.seed.map(|seed| seed.wrapping_add(index as u64))
    }
}

/// Runs the generator once per requested variant and writes the outputs
pub struct FloorProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FloorProcessor {
    /// Create a processor for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self::with_progress(cli, ProgressManager::new())
    }

    /// Create a processor that reports on an existing progress manager
    ///
    /// The manager is dropped when the arguments ask for quiet output.
    pub fn with_progress(cli: Cli, progress: ProgressManager) -> Self {
        let progress_manager = cli.should_show_progress().then_some(progress);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Progress manager in use, if progress is shown
    pub const fn progress(&self) -> Option<&ProgressManager> {
        self.progress_manager.as_ref()
    }

    /// Generate and export every variant
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, palette loading, generation
    /// or any export fails. Variants written before the failure stay on disk.
    pub fn process(&self) -> Result<()> {
        self.cli.validate()?;

        let palette = match &self.cli.palette {
            Some(path) => Palette::from_file(path)?,
            None => Palette::builtin()?,
        };
        let generator = PatternGenerator::new(GeneratorConfig::new(palette));

        if let Some(ref pm) = self.progress_manager {
            pm.initialize(self.cli.variants);
        }

        for index in 0..self.cli.variants {
            self.process_variant(&generator, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn process_variant(&self, generator: &PatternGenerator, index: usize) -> Result<()> {
        let mut rng = self
            .cli
            .variant_seed(index)
            .map_or_else(SeededRandom::from_entropy, SeededRandom::new);

        let assignment = generator.generate(self.cli.rows, self.cli.cols, &mut rng)?;

        let summary = ColorSummary::tally(&assignment, &generator.config().palette);
        for row in &summary.counts {
            tracing::debug!(
                variant = index,
                color = %row.color,
                name = %row.name,
                count = row.count,
                "color usage"
            );
        }
        tracing::info!(
            variant = index,
            seed = ?rng.seed(),
            cells = summary.total,
            "floor generated"
        );

        let output_path = variant_path(&self.cli.output, index, self.cli.variants);
        export_json(&FloorDocument::new(&assignment, rng.seed()), &output_path)?;

        if let Some(preview) = &self.cli.preview {
            export_preview_png(
                &assignment,
                &variant_path(preview, index, self.cli.variants),
            )?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_variant(&output_path);
        }

        Ok(())
    }
}

/// Output path for one variant of a batch
///
/// A single variant keeps `base` unchanged; batches insert a one-based
/// `_NN` counter before the extension.
pub fn variant_path(base: &Path, index: usize, variant_count: usize) -> PathBuf {
    if variant_count <= 1 {
        return base.to_path_buf();
    }

    let stem = base.file_stem().unwrap_or_default().to_string_lossy();
    let width = variant_count.to_string().len().max(2);
    let name = match base.extension() {
        Some(extension) => format!(
            "{stem}_{:0width$}.{}",
            index + 1,
            extension.to_string_lossy()
        ),
        None => format!("{stem}_{:0width$}", index + 1),
    };

    base.parent()
        .map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name))
}
