//! JSON export of finished floors

use crate::io::color::ColorValue;
use crate::io::error::{GenerationError, Result};
use crate::spatial::ColorAssignment;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Serialized form of one generated floor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorDocument {
    /// Grid rows
    pub rows: usize,
    /// Grid columns
    pub cols: usize,
    /// Seed that reproduces the floor, when one was given
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub seed: Option<u64>,
    /// `"{row}-{col}"` key to `#RRGGBB` color
    pub cells: BTreeMap<String, ColorValue>,
}

impl FloorDocument {
    /// Capture an assignment
    pub fn new(assignment: &ColorAssignment, seed: Option<u64>) -> Self {
        let (rows, cols) = assignment.dimensions();
        Self {
            rows,
            cols,
            seed,
            cells: assignment.to_keyed(),
        }
    }
}

/// Write a floor document as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The file cannot be written
/// - Serialization fails
pub fn export_json(document: &FloorDocument, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let json =
        serde_json::to_string_pretty(document).map_err(|e| GenerationError::Serialization {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    std::fs::write(output_path, json).map_err(|e| GenerationError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "write",
        source: e,
    })?;

    tracing::info!(path = %output_path.display(), cells = document.cells.len(), "floor written");
    Ok(())
}
