//! Toroidal Game of Life simulation with delta-compressed, navigable turn history
//!
//! The engine steps a wraparound board under the classic birth/death rules,
//! records per-turn deltas that can be replayed backward and forward, and can
//! seed the initial population from quantized image data.

#![forbid(unsafe_code)]

/// Board state, neighbor lookup, rule application, and random seeding
pub mod engine;
/// Delta-based turn records and the playback ledger
pub mod history;
/// Image-to-board ingestion via block-averaging binarization
pub mod ingest;
/// Input/output operations and error handling
pub mod io;

pub use io::error::{Result, SimulationError};
