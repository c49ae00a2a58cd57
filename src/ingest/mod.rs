//! Seeding the board from quantized image data
//!
//! A decoded raster is divided into one pixel block per board cell; each
//! block's averaged color decides whether the cell starts alive.

/// Block-averaging binarization onto the board
pub mod binarize;
/// Decoded raster access contract
pub mod raster;

pub use binarize::populate_from_raster;
pub use raster::RasterSource;
