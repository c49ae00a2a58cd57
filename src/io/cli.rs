//! Command-line interface for headless simulation sessions
//!
//! A session seeds a board (from a PNG image or randomly), runs a bounded
//! number of turns while optionally recording history, and exports the
//! final board as a PNG.

use crate::engine::board::Board;
use crate::engine::rules::apply_turn;
use crate::engine::seed::{scaled_seed_target, seed_random};
use crate::history::ledger::HistoryLedger;
use crate::ingest::binarize::populate_from_raster;
use crate::io::configuration::{
    DEFAULT_CELLS_PER_AXIS, DEFAULT_COLOR_THRESHOLD, DEFAULT_RANDOM_FILL, DEFAULT_SEED,
    DEFAULT_TURNS, OUTPUT_SUFFIX, SimulationOptions,
};
use crate::io::error::{Result, SimulationError, invalid_parameter};
use crate::io::export::export_board_as_png;
use crate::io::progress::ProgressManager;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chronolife")]
#[command(
    author,
    version,
    about = "Simulate Conway's Game of Life on a torus with navigable turn history"
)]
/// Command-line arguments for a simulation session
pub struct Cli {
    /// Seed PNG to binarize onto the board (random fill when omitted)
    #[arg(value_name = "IMAGE")]
    pub image: Option<PathBuf>,

    /// Cells per axis of the square board
    #[arg(short, long, default_value_t = DEFAULT_CELLS_PER_AXIS)]
    pub cells: usize,

    /// Color threshold fraction below which an image block births a cell
    #[arg(short = 't', long, default_value_t = DEFAULT_COLOR_THRESHOLD)]
    pub threshold: f64,

    /// Fraction of the board targeted by random seeding
    #[arg(short = 'f', long, default_value_t = DEFAULT_RANDOM_FILL)]
    pub fill: f64,

    /// Maximum number of turns to simulate
    #[arg(short = 'n', long, default_value_t = DEFAULT_TURNS)]
    pub turns: usize,

    /// Random seed for reproducible board fills
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Record per-turn history during the run
    #[arg(short = 'H', long)]
    pub history: bool,

    /// Suppress progress and status output
    #[arg(short, long)]
    pub quiet: bool,

    /// Output PNG path (defaults to the input stem plus a suffix)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates one seeded run of the simulation
pub struct SessionRunner {
    cli: Cli,
}

impl SessionRunner {
    /// Create a runner from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Seed, simulate, and export according to the CLI arguments
    ///
    /// The run stops early when every cell has died or when a turn changes
    /// nothing. A failed history append disables recording for the rest of
    /// the run instead of aborting it.
    ///
    /// # Errors
    ///
    /// Returns an error if option validation, image loading or ingestion,
    /// the initial history record, or the final export fails.
    pub fn run(&mut self) -> Result<()> {
        let options = SimulationOptions::build(
            self.cli.cells,
            self.cli.cells,
            self.cli.threshold,
            self.cli.fill,
            self.cli.history,
        )?;

        let mut board = Board::new(options.cells_x, options.cells_y, options.turn_limit);
        let mut rng = StdRng::seed_from_u64(self.cli.seed);

        match &self.cli.image {
            Some(path) => {
                let decoded = image::open(path).map_err(|e| SimulationError::ImageLoad {
                    path: path.clone(),
                    source: e,
                })?;
                populate_from_raster(&mut board, &decoded, options.color_threshold)?;
                self.note(&format!(
                    "[SEED] Board created from {} ({} cells alive).",
                    path.display(),
                    board.living_cells()
                ));
            }
            None => {
                let target = scaled_seed_target(options.max_random_cells, &mut rng);
                seed_random(&mut board, target, &mut rng);
                self.note(&format!(
                    "[SEED] Random board with {} living cells.",
                    board.living_cells()
                ));
            }
        }

        let mut ledger = HistoryLedger::new(options.turn_limit);
        if options.record_history {
            ledger.set_enabled(true);
            // Snapshot the seeded state so navigation can reach turn zero
            ledger.record(&board)?;
        }

        let progress = self
            .cli
            .should_show_progress()
            .then(|| ProgressManager::new(self.cli.turns));

        let mut completed = 0_usize;
        let mut outcome = "turn limit reached";

        for turn in 1..=self.cli.turns {
            apply_turn(&mut board, false);
            completed = turn;

            if ledger.is_enabled() && ledger.record(&board).is_err() {
                self.note("[HISTORY] Could not add to history, recording disabled.");
                ledger.set_enabled(false);
            }

            if let Some(ref bar) = progress {
                bar.update(turn, board.living_cells());
            }

            if board.living_cells() == 0 {
                outcome = "all cells died";
                break;
            }

            if !board.is_dirty() {
                outcome = "stale state reached";
                break;
            }
        }

        if let Some(ref bar) = progress {
            bar.finish(outcome);
        }

        self.note(&format!(
            "[STATUS] {outcome} after {completed} turns ({} cells alive).",
            board.living_cells()
        ));

        if let Some(record) = ledger.current_record() {
            self.note(&format!(
                "[HISTORY] Recorded {} turns; last turn: {} born, {} died, {} stable.",
                ledger.recorded_turns(),
                record.born_count(),
                record.died_count(),
                record.stable_count()
            ));
        }

        let output_path = self.output_path();
        let output_str = output_path
            .to_str()
            .ok_or_else(|| invalid_parameter("output", &output_path.display(), &"path is not valid UTF-8"))?;
        export_board_as_png(&board, output_str)?;
        self.note(&format!("[STATUS] Board written to {}.", output_path.display()));

        Ok(())
    }

    fn output_path(&self) -> PathBuf {
        if let Some(output) = &self.cli.output {
            return output.clone();
        }

        match &self.cli.image {
            Some(input_path) => {
                let stem = input_path.file_stem().unwrap_or_default();
                let output_name = format!("{}{}.png", stem.to_string_lossy(), OUTPUT_SUFFIX);

                if let Some(parent) = input_path.parent() {
                    parent.join(output_name)
                } else {
                    PathBuf::from(output_name)
                }
            }
            None => PathBuf::from(format!("board{OUTPUT_SUFFIX}.png")),
        }
    }

    // Allow print for user feedback on session milestones
    #[allow(clippy::print_stderr)]
    fn note(&self, message: &str) {
        if !self.cli.quiet {
            eprintln!("{message}");
        }
    }
}
