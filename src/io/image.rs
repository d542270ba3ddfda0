//! PNG preview of a floor with odd rows shifted half a tile

use crate::io::configuration::CELL_PIXELS;
use crate::io::error::{GenerationError, Result};
use crate::spatial::ColorAssignment;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

/// Pixel dimensions (width, height) of the preview for a grid
///
/// Odd rows are offset by half a cell, so the width gains half a cell
/// whenever the grid has more than one row.
pub const fn preview_dimensions(rows: usize, cols: usize, cell_pixels: u32) -> (u32, u32) {
    let shift = if rows > 1 { cell_pixels / 2 } else { 0 };
    (cols as u32 * cell_pixels + shift, rows as u32 * cell_pixels)
}

/// Render an assignment into an image buffer
///
/// Unassigned cells and the margins created by the row shift stay
/// transparent.
pub fn render_preview(assignment: &ColorAssignment, cell_pixels: u32) -> RgbaImage {
    let (rows, cols) = assignment.dimensions();
    let (width, height) = preview_dimensions(rows, cols, cell_pixels);
    let mut img = ImageBuffer::from_pixel(width, height, Rgba([0, 0, 0, 0]));

    for (position, color) in assignment.iter() {
        let shift = if position.row % 2 == 1 {
            cell_pixels / 2
        } else {
            0
        };
        let left = position.col as u32 * cell_pixels + shift;
        let top = position.row as u32 * cell_pixels;
        let pixel = Rgba(color.rgba());

        for y in top..top + cell_pixels {
            for x in left..left + cell_pixels {
                if let Some(target) = img.get_pixel_mut_checked(x, y) {
                    *target = pixel;
                }
            }
        }
    }

    img
}

/// Export the assignment as a PNG preview
///
/// # Errors
///
/// Returns an error if:
/// - The assignment has no colored cells
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_preview_png(assignment: &ColorAssignment, output_path: &Path) -> Result<()> {
    if assignment.is_empty() {
        return Err(crate::io::error::invalid_parameter(
            "assignment",
            &output_path.display(),
            &"no cells have been colored",
        ));
    }

    let img = render_preview(assignment, CELL_PIXELS);

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    tracing::info!(
        path = %output_path.display(),
        width = img.width(),
        height = img.height(),
        "preview written"
    );
    Ok(())
}
