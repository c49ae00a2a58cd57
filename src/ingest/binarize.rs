//! Block-averaging binarization
//!
//! Every board cell at grid position `(x, y)` averages the pixel block at
//! offset `(x * px_per_cell_x, y * px_per_cell_y)`. Image pixels beyond the
//! last full block in either axis are never sampled, so images whose
//! dimensions are not exact multiples of the cell grid lose a silent margin
//! on the high edges.

use crate::engine::board::Board;
use crate::ingest::raster::RasterSource;
use crate::io::error::{Result, SimulationError};

/// Populate the board from a decoded raster image
///
/// Discards the board's previous contents. For each cell, the RGB channels
/// of its source block are averaged independently (integer division) and
/// the three averages summed; the cell comes alive iff the sum is at most
/// `color_threshold`. Revived cells are marked changed and counted into the
/// living total.
///
/// # Errors
///
/// Fails before any board mutation when the image declares fewer than 32
/// bits per pixel, or when the image is too small to give every cell at
/// least one whole pixel in both axes.
pub fn populate_from_raster<S: RasterSource>(
    board: &mut Board,
    source: &S,
    color_threshold: u32,
) -> Result<()> {
    if source.bits_per_pixel() < 32 {
        return Err(SimulationError::UnsuitableImage {
            reason: format!(
                "image declares {} bits per pixel, at least 32 are required",
                source.bits_per_pixel()
            ),
        });
    }

    let px_per_cell_x = (source.width() as usize)
        .checked_div(board.width())
        .unwrap_or(0);
    let px_per_cell_y = (source.height() as usize)
        .checked_div(board.height())
        .unwrap_or(0);

    if px_per_cell_x < 1 || px_per_cell_y < 1 {
        return Err(SimulationError::UnsuitableImage {
            reason: format!(
                "image of {}x{} pixels cannot cover a {}x{} cell grid with at least one pixel per cell",
                source.width(),
                source.height(),
                board.width(),
                board.height()
            ),
        });
    }

    board.reset();

    let samples = (px_per_cell_x * px_per_cell_y) as u64;

    for cell_y in 0..board.height() {
        for cell_x in 0..board.width() {
            let mut channel_sums = [0_u64; 3];

            for offset_y in 0..px_per_cell_y {
                for offset_x in 0..px_per_cell_x {
                    let pixel_x = (cell_x * px_per_cell_x + offset_x) as u32;
                    let pixel_y = (cell_y * px_per_cell_y + offset_y) as u32;
                    let rgb = source.rgb_at(pixel_x, pixel_y);

                    for (sum, channel) in channel_sums.iter_mut().zip(rgb) {
                        *sum += u64::from(channel);
                    }
                }
            }

            let averaged_sum: u64 = channel_sums.iter().map(|sum| sum / samples).sum();

            if averaged_sum <= u64::from(color_threshold) {
                let index = board.cell_index(cell_x, cell_y);
                board.revive(index);
            }
        }
    }

    Ok(())
}
