//! Progress display for batches of generated variants

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::{self, Write};
use std::path::Path;

/// Tracks completed variants on a single terminal bar
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a hidden progress manager; call [`Self::initialize`] to show it
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Show the bar sized for `variant_count` runs
    ///
    /// The bar is reconfigured in place so writers from [`Self::log_writer`]
    /// keep pointing at it.
    pub fn initialize(&self, variant_count: usize) {
        let template = format!(
            "[{{elapsed_precise}}] Floors: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        );
        let style = ProgressStyle::default_bar()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        self.bar.set_style(style);
        self.bar.set_length(variant_count as u64);
        self.bar.reset();
        self.bar.set_draw_target(ProgressDrawTarget::stderr());
    }

    /// Stderr writer that clears the bar while a log line is printed
    pub fn log_writer(&self) -> LogWriter {
        LogWriter {
            bar: self.bar.clone(),
        }
    }

    /// Mark one variant as written
    pub fn complete_variant(&self, output: &Path) {
        let name = output
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(name);
        self.bar.inc(1);
    }

    /// Number of variants marked complete
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Clean up the display
    pub fn finish(&self) {
        self.bar.finish_with_message("All floors generated");
    }
}

/// Log sink sharing the terminal with a [`ProgressManager`] bar
#[derive(Clone)]
pub struct LogWriter {
    bar: ProgressBar,
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bar.suspend(|| io::stderr().write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.bar.suspend(|| io::stderr().flush())
    }
}
