//! Session constants and validated runtime options

use crate::io::error::{Result, invalid_parameter};

/// Smallest supported cell count per axis
pub const MIN_CELLS_PER_AXIS: usize = 5;
/// Largest supported cell count per axis
pub const MAX_CELLS_PER_AXIS: usize = 250;
/// Default cell count per axis
pub const DEFAULT_CELLS_PER_AXIS: usize = 50;

/// Maximum possible sum of three averaged 0-255 color channels
pub const CHANNEL_SUM_LIMIT: u32 = 765;
/// Default color threshold as a fraction of the channel-sum ceiling
pub const DEFAULT_COLOR_THRESHOLD: f64 = 0.85;

/// Default fraction of the board targeted by random seeding
pub const DEFAULT_RANDOM_FILL: f64 = 0.4;
/// Fewest cells a random seeding will ever target
pub const MINIMUM_RANDOM_CELLS: u32 = 10;

/// Turn count past which the board counter wraps and the ledger clears
///
/// Effectively unreachable at this value; the wrap logic still has to hold
/// for smaller limits.
pub const DEFAULT_TURN_LIMIT: u32 = u32::MAX;

/// Fixed seed for reproducible random boards
pub const DEFAULT_SEED: u64 = 42;
/// Default number of turns a CLI session simulates
pub const DEFAULT_TURNS: usize = 200;

/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";

/// Validated options for one simulation session
#[derive(Debug, Clone)]
pub struct SimulationOptions {
    /// Cells in the X direction
    pub cells_x: usize,
    /// Cells in the Y direction
    pub cells_y: usize,
    /// Inclusive channel-sum ceiling for a cell to be born from an image
    pub color_threshold: u32,
    /// Most cells a random seeding may target
    pub max_random_cells: u32,
    /// Whether the session records per-turn history
    pub record_history: bool,
    /// Turn wraparound limit, doubling as the history capacity
    pub turn_limit: u32,
}

impl SimulationOptions {
    /// Validate raw option values into a usable set
    ///
    /// The color threshold and random fill arrive as 0.0-1.0 fractions; the
    /// threshold is converted to a 0-765 channel sum and the fill to an
    /// absolute cell target. A fill target below the supported minimum falls
    /// back to the default fraction, and the target is always kept below the
    /// total cell count so rejection-sampling seeding terminates.
    ///
    /// # Errors
    ///
    /// Returns an invalid-parameter error when either axis is outside
    /// 5-250 cells, or when a fraction is outside 0.0-1.0.
    pub fn build(
        cells_x: usize,
        cells_y: usize,
        color_threshold: f64,
        random_fill: f64,
        record_history: bool,
    ) -> Result<Self> {
        for (parameter, cells) in [("cells_x", cells_x), ("cells_y", cells_y)] {
            if !(MIN_CELLS_PER_AXIS..=MAX_CELLS_PER_AXIS).contains(&cells) {
                return Err(invalid_parameter(
                    parameter,
                    &cells,
                    &format!("must be between {MIN_CELLS_PER_AXIS} and {MAX_CELLS_PER_AXIS}"),
                ));
            }
        }

        if !(0.0..=1.0).contains(&color_threshold) {
            return Err(invalid_parameter(
                "color_threshold",
                &color_threshold,
                &"must be a fraction between 0.0 and 1.0",
            ));
        }

        if !(0.0..=1.0).contains(&random_fill) {
            return Err(invalid_parameter(
                "random_fill",
                &random_fill,
                &"must be a fraction between 0.0 and 1.0",
            ));
        }

        let cell_count = (cells_x * cells_y) as u32;

        let mut max_random_cells = (f64::from(cell_count) * random_fill) as u32;
        if max_random_cells < MINIMUM_RANDOM_CELLS {
            max_random_cells = (f64::from(cell_count) * DEFAULT_RANDOM_FILL) as u32;
        }
        let max_random_cells = max_random_cells.min(cell_count.saturating_sub(1));

        Ok(Self {
            cells_x,
            cells_y,
            color_threshold: (f64::from(CHANNEL_SUM_LIMIT) * color_threshold) as u32,
            max_random_cells,
            record_history,
            turn_limit: DEFAULT_TURN_LIMIT,
        })
    }
}
