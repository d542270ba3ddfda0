//! Error types for generation runs and their file outputs

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// Cluster seed was already claimed by an earlier placement
    InvalidSeed {
        /// Key of the claimed seed cell
        key: String,
    },

    /// Weighted selection was asked to choose from zero candidates
    EmptyPalette,

    /// Candidate weights do not sum to a usable positive total
    NonPositiveWeight {
        /// Sum of all candidate weights
        total: f64,
    },

    /// A cell received a second color
    ///
    /// Assignments only ever grow; an overwrite indicates a broken caller.
    CellAlreadyAssigned {
        /// Key of the cell that already holds a color
        key: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Color string could not be normalized to `#RRGGBB`
    InvalidColor {
        /// The rejected input
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// Palette configuration is inconsistent
    InvalidPalette {
        /// Description of the inconsistency
        reason: String,
    },

    /// Failed to save a preview image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// JSON encoding or decoding failure
    Serialization {
        /// File being read or written
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSeed { key } => {
                write!(f, "Cluster seed '{key}' is already claimed")
            }
            Self::EmptyPalette => write!(f, "Cannot select a color from an empty palette"),
            Self::NonPositiveWeight { total } => {
                write!(f, "Palette weights must sum to a positive value (got {total})")
            }
            Self::CellAlreadyAssigned { key } => {
                write!(f, "Cell '{key}' already has a color")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidColor { value, reason } => {
                write!(f, "Invalid color '{value}': {reason}")
            }
            Self::InvalidPalette { reason } => write!(f, "Invalid palette: {reason}"),
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { path, source } => {
                write!(f, "JSON error for '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid palette error
pub fn invalid_palette(reason: &impl ToString) -> GenerationError {
    GenerationError::InvalidPalette {
        reason: reason.to_string(),
    }
}
