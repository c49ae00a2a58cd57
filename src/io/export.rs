//! PNG export of board states

use crate::engine::board::Board;
use crate::io::error::{Result, SimulationError};
use image::{ImageBuffer, Rgba};

/// Fill color of living cells in exported images
const LIVING_CELL: Rgba<u8> = Rgba([255, 51, 51, 255]);
/// Background color of dead cells
///
/// Opaque white keeps exported boards re-ingestable: a white block sums to
/// the full channel ceiling and stays dead at any threshold below it.
const DEAD_CELL: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Export the board as a PNG image, one pixel per cell
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_board_as_png(board: &Board, output_path: &str) -> Result<()> {
    let mut img = ImageBuffer::new(board.width() as u32, board.height() as u32);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let index = board.cell_index(x as usize, y as usize);
        let alive = board.cell(index).is_some_and(|cell| cell.alive);
        *pixel = if alive { LIVING_CELL } else { DEAD_CELL };
    }

    if let Some(parent) = std::path::Path::new(output_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| SimulationError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path)
        .map_err(|e| SimulationError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}
