//! Turn application under the classic birth/death rules
//!
//! A turn runs in two passes: pass one computes every cell's fate against an
//! immutable snapshot of the board, pass two commits the fates. No cell is
//! mutated while neighbor counts are still being read.

use bitvec::bitvec;
use bitvec::prelude::BitVec;

use crate::engine::board::Board;
use crate::engine::neighbors::living_neighbor_count;

/// Apply one turn to the whole board
///
/// A living cell survives with two or three living neighbors and dies
/// otherwise; a dead cell with exactly three living neighbors is born. Cells
/// that flip get `changed` set, everything else gets it cleared, and the
/// board's dirty flag ends up true iff at least one cell flipped.
///
/// The turn counter advances (wrapping past the configured limit) unless
/// `replaying` is set; history playback must not move the canonical count.
pub fn apply_turn(board: &mut Board, replaying: bool) {
    let cell_count = board.cell_count();
    let mut deaths: BitVec = bitvec![0; cell_count];
    let mut births: BitVec = bitvec![0; cell_count];

    for y in 0..board.height() {
        for x in 0..board.width() {
            let index = board.cell_index(x, y);
            let neighbors = living_neighbor_count(board, x, y);
            let alive = board.cell(index).is_some_and(|cell| cell.alive);

            if alive {
                if neighbors < 2 || neighbors > 3 {
                    deaths.set(index, true);
                }
            } else if neighbors == 3 {
                births.set(index, true);
            }
        }
    }

    board.set_dirty(false);

    for index in 0..cell_count {
        if deaths.get(index).as_deref() == Some(&true) {
            board.commit_death(index);
        } else if births.get(index).as_deref() == Some(&true) {
            board.commit_birth(index);
        } else {
            board.clear_changed(index);
        }
    }

    if !replaying {
        board.advance_turn();
    }
}
