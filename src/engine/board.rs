//! Board state with centralized coordinate mapping and population bookkeeping
//!
//! The board owns a flat cell sequence addressed through one
//! coordinate-to-index function shared by the engine, the history ledger,
//! and image ingestion. All mutation goes through methods that keep the
//! living-cell count in step with the cells themselves.

use crate::engine::cell::Cell;

/// Simulation board on a torus
///
/// Dimensions are fixed at construction. The turn counter advances once per
/// applied (non-replay) turn and wraps to 0 when the increment would exceed
/// the configured limit.
#[derive(Debug, Clone)]
pub struct Board {
    cells: Vec<Cell>,
    cells_x: usize,
    cells_y: usize,
    turn: u32,
    living_cells: u32,
    dirty: bool,
    turn_limit: u32,
}

impl Board {
    /// Create an empty board of `cells_x` by `cells_y` cells
    ///
    /// Both dimensions must be nonzero.
    pub fn new(cells_x: usize, cells_y: usize, turn_limit: u32) -> Self {
        Self {
            cells: vec![Cell::default(); cells_x * cells_y],
            cells_x,
            cells_y,
            turn: 0,
            living_cells: 0,
            dirty: false,
            turn_limit,
        }
    }

    /// Cell count in the X direction
    pub const fn width(&self) -> usize {
        self.cells_x
    }

    /// Cell count in the Y direction
    pub const fn height(&self) -> usize {
        self.cells_y
    }

    /// Total number of cells on the board
    pub const fn cell_count(&self) -> usize {
        self.cells_x * self.cells_y
    }

    /// Number of applied turns since the last reset
    pub const fn turn(&self) -> u32 {
        self.turn
    }

    /// Turn value past which the counter wraps back to 0
    pub const fn turn_limit(&self) -> u32 {
        self.turn_limit
    }

    /// Count of cells currently alive
    pub const fn living_cells(&self) -> u32 {
        self.living_cells
    }

    /// Whether the most recently applied turn changed any cell
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Flat index of the cell at grid position `(x, y)`
    ///
    /// The stride is the X dimension, so the mapping stays consistent on
    /// rectangular boards.
    pub const fn cell_index(&self, x: usize, y: usize) -> usize {
        x + y * self.cells_x
    }

    /// Copy of the cell at `index`, or `None` when out of bounds
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Read-only view of all cells, for presentation and record building
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Bring the cell at `index` alive
    ///
    /// Marks the cell changed and increments the living count. Returns false
    /// without mutation when the cell is already alive or the index is out of
    /// bounds. This is the seam used by random seeding, image ingestion, and
    /// freehand placement.
    pub fn revive(&mut self, index: usize) -> bool {
        let Some(cell) = self.cells.get_mut(index) else {
            return false;
        };

        if cell.alive {
            return false;
        }

        *cell = Cell::born();
        self.living_cells += 1;
        true
    }

    /// Clear every cell to dead/unchanged and zero the turn and living counts
    ///
    /// Does not resize the board.
    pub fn reset(&mut self) {
        self.clear_cells();
        self.turn = 0;
        self.living_cells = 0;
    }

    /// Clear every cell to dead/unchanged without touching any counter
    ///
    /// History replay uses this before overwriting from a record; the
    /// living-cell count is restored by the caller afterwards.
    pub(crate) fn clear_cells(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Overwrite the cell at `index` without bookkeeping
    pub(crate) fn set_cell(&mut self, index: usize, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(index) {
            *slot = cell;
        }
    }

    /// Commit a rule-step death at `index`
    pub(crate) fn commit_death(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Cell::died();
            self.living_cells = self.living_cells.saturating_sub(1);
            self.dirty = true;
        }
    }

    /// Commit a rule-step birth at `index`
    pub(crate) fn commit_birth(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Cell::born();
            self.living_cells += 1;
            self.dirty = true;
        }
    }

    /// Mark the cell at `index` as unchanged this turn
    pub(crate) fn clear_changed(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            cell.changed = false;
        }
    }

    pub(crate) const fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }

    pub(crate) const fn set_living_cells(&mut self, living_cells: u32) {
        self.living_cells = living_cells;
    }

    /// Advance the turn counter by one, wrapping to 0 past the limit
    pub(crate) fn advance_turn(&mut self) {
        self.turn = self
            .turn
            .checked_add(1)
            .filter(|next| *next <= self.turn_limit)
            .unwrap_or(0);
    }
}
