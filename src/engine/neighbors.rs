//! Neighbor lookup with toroidal wraparound
//!
//! Stepping off the low edge of either axis wraps to `dimension - 1`;
//! stepping off the high edge wraps to `0`. The last row and column are
//! therefore adjacent to the first.

use crate::engine::board::Board;

/// Compass directions, clockwise from north
///
/// North points toward lower Y values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Straight up
    North,
    /// Up and right
    NorthEast,
    /// Straight right
    East,
    /// Down and right
    SouthEast,
    /// Straight down
    South,
    /// Down and left
    SouthWest,
    /// Straight left
    West,
    /// Up and left
    NorthWest,
}

impl Direction {
    /// All eight directions in clockwise scan order
    pub const CLOCKWISE: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// Coordinate offset as `(dx, dy)`
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::NorthEast => (1, -1),
            Self::East => (1, 0),
            Self::SouthEast => (1, 1),
            Self::South => (0, 1),
            Self::SouthWest => (-1, 1),
            Self::West => (-1, 0),
            Self::NorthWest => (-1, -1),
        }
    }
}

/// Flat index of the wrapped neighbor of `(x, y)` in `direction`
pub const fn wrapped_index(board: &Board, x: usize, y: usize, direction: Direction) -> usize {
    let (dx, dy) = direction.offset();

    let neighbor_x = match dx {
        -1 => {
            if x == 0 {
                board.width() - 1
            } else {
                x - 1
            }
        }
        1 => {
            if x == board.width() - 1 {
                0
            } else {
                x + 1
            }
        }
        _ => x,
    };

    let neighbor_y = match dy {
        -1 => {
            if y == 0 {
                board.height() - 1
            } else {
                y - 1
            }
        }
        1 => {
            if y == board.height() - 1 {
                0
            } else {
                y + 1
            }
        }
        _ => y,
    };

    board.cell_index(neighbor_x, neighbor_y)
}

/// Count of the eight wrapped neighbors of `(x, y)` that are alive
///
/// Pure read-only query against the current board state; callers computing a
/// turn must finish all counts before committing any change.
pub fn living_neighbor_count(board: &Board, x: usize, y: usize) -> u8 {
    Direction::CLOCKWISE
        .iter()
        .filter(|direction| {
            board
                .cell(wrapped_index(board, x, y, **direction))
                .is_some_and(|cell| cell.alive)
        })
        .count() as u8
}
