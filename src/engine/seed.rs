//! Random population seeding
//!
//! Rejection sampling over the whole board: draws that land on an already
//! living cell are skipped without consuming a success. The expected number
//! of draws grows as occupancy approaches the cell count, so callers must
//! keep the target strictly below the number of dead cells; the CLI only
//! seeds freshly reset boards with a target well under the total.

use rand::Rng;

use crate::engine::board::Board;

/// Bring `target` randomly chosen dead cells alive
///
/// Each revived cell is marked changed and counted into the living total.
pub fn seed_random<R: Rng + ?Sized>(board: &mut Board, target: u32, rng: &mut R) {
    let cell_count = board.cell_count();
    if cell_count == 0 {
        return;
    }

    let mut remaining = target;
    while remaining > 0 {
        let index = rng.random_range(0..cell_count);
        if board.revive(index) {
            remaining -= 1;
        }
    }
}

/// Scale a configured seeding maximum by a random 25-99 percent
///
/// Keeps repeated random fills from producing identical densities.
pub fn scaled_seed_target<R: Rng + ?Sized>(maximum: u32, rng: &mut R) -> u32 {
    let percent = rng.random_range(25..100_u32);
    maximum * percent / 100
}
