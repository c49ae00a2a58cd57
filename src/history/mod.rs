//! Turn history recording and playback
//!
//! Each recorded turn stores only the cells relevant to reconstructing its
//! alive-set, never a full grid snapshot. The ledger replays records onto
//! the board for backward/forward navigation without ever invoking rule
//! logic.

/// Playback ledger with cursor-based navigation
pub mod ledger;
/// Per-turn delta records
pub mod record;

pub use ledger::HistoryLedger;
pub use record::{CellFate, TurnRecord};
