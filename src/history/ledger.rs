//! Cursor-based ledger of recorded turns
//!
//! The ledger is either disabled (not recording) or enabled. While enabled
//! the cursor moves within `[0, len - 1]`; the last record means "showing
//! present" and anything lower means "showing past". Disabling implicitly
//! clears, as does reaching the configured capacity.

use crate::engine::board::Board;
use crate::engine::cell::Cell;
use crate::history::record::{CellFate, TurnRecord};
use crate::io::error::{Result, SimulationError};

/// Growable sequence of turn records with a playback cursor
#[derive(Debug)]
pub struct HistoryLedger {
    records: Vec<TurnRecord>,
    cursor: usize,
    capacity: u32,
    enabled: bool,
}

impl HistoryLedger {
    /// Create an empty, disabled ledger holding at most `capacity` records
    pub const fn new(capacity: u32) -> Self {
        Self {
            records: Vec::new(),
            cursor: 0,
            capacity,
            enabled: false,
        }
    }

    /// Whether the ledger is currently recording
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Switch recording on or off
    ///
    /// Turning an enabled ledger off discards all records.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled && !enabled {
            self.clear();
        }
        self.enabled = enabled;
    }

    /// Number of turns recorded so far
    pub fn recorded_turns(&self) -> usize {
        self.records.len()
    }

    /// Current playback position within the records
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the cursor is showing the newest recorded turn
    pub fn at_present(&self) -> bool {
        self.cursor + 1 == self.records.len()
    }

    /// The record under the cursor, if any
    pub fn current_record(&self) -> Option<&TurnRecord> {
        self.records.get(self.cursor)
    }

    /// Append a record of the board's current state
    ///
    /// At capacity the ledger clears itself first and keeps recording. The
    /// cursor moves to the new record.
    ///
    /// # Errors
    ///
    /// Fails without mutating anything when recording is disabled, or when
    /// the recorded-turn count already exceeds the board's turn counter:
    /// the guard against recording the same state twice or out of order.
    pub fn record(&mut self, board: &Board) -> Result<()> {
        if !self.enabled {
            return Err(SimulationError::RecordingDisabled);
        }

        let recorded = self.records.len() as u32;
        if recorded > board.turn() {
            return Err(SimulationError::HistoryOutOfOrder {
                recorded,
                board_turn: board.turn(),
            });
        }

        if recorded == self.capacity {
            self.clear();
        }

        self.records.push(TurnRecord::from_board(board));
        self.cursor = self.records.len() - 1;
        Ok(())
    }

    /// Step the cursor one turn into the past and replay it onto the board
    ///
    /// # Errors
    ///
    /// Fails without mutating the board when the ledger is empty or the
    /// cursor already sits on the oldest record.
    pub fn navigate_backward(&mut self, board: &mut Board) -> Result<()> {
        if self.records.is_empty() || self.cursor == 0 {
            return Err(self.navigation_error());
        }

        self.cursor -= 1;
        self.replay_cursor(board)
    }

    /// Step the cursor one turn toward the present and replay it
    ///
    /// # Errors
    ///
    /// Fails without mutating the board when the ledger is empty, the cursor
    /// sits on the newest record, or the cursor has caught up with the
    /// board's turn counter (no future recorded yet). Callers treat the
    /// newest-record failure as "return to live simulation".
    pub fn navigate_forward(&mut self, board: &mut Board) -> Result<()> {
        if self.records.is_empty()
            || self.cursor + 1 >= self.records.len()
            || self.cursor as u32 == board.turn()
        {
            return Err(self.navigation_error());
        }

        self.cursor += 1;
        self.replay_cursor(board)
    }

    /// Discard all records and reset the cursor
    ///
    /// Returns false when there was nothing to clear.
    pub fn clear(&mut self) -> bool {
        if self.records.is_empty() {
            return false;
        }

        self.records.clear();
        self.cursor = 0;
        true
    }

    fn navigation_error(&self) -> SimulationError {
        SimulationError::NavigationOutOfRange {
            cursor: self.cursor,
            recorded: self.records.len(),
        }
    }

    fn replay_cursor(&self, board: &mut Board) -> Result<()> {
        let record = self
            .records
            .get(self.cursor)
            .ok_or_else(|| self.navigation_error())?;
        Self::replay(record, board);
        Ok(())
    }

    /// Overwrite the board with a recorded state
    ///
    /// Pure state overwrite: every cell is reset to dead/unchanged, the
    /// record's entries are applied, and the living count is recomputed from
    /// the stable and born entries. The turn counter is never touched and no
    /// rule logic runs.
    fn replay(record: &TurnRecord, board: &mut Board) {
        board.clear_cells();

        for (fate, index) in record.entries() {
            let cell = match fate {
                CellFate::Stable => Cell::stable(),
                CellFate::Dead => Cell::died(),
                CellFate::Born => Cell::born(),
            };
            board.set_cell(index, cell);
        }

        board.set_living_cells(record.living_total());
    }
}
