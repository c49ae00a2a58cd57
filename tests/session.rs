//! Validates option handling, PNG export, and CLI argument parsing

use chronolife::SimulationError;
use chronolife::engine::Board;
use chronolife::ingest::populate_from_raster;
use chronolife::io::cli::Cli;
use chronolife::io::configuration::{
    DEFAULT_CELLS_PER_AXIS, DEFAULT_COLOR_THRESHOLD, DEFAULT_TURNS, SimulationOptions,
};
use chronolife::io::export::export_board_as_png;
use clap::Parser;

fn alive_set(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.alive)
        .map(|(index, _)| index)
        .collect()
}

#[test]
fn test_options_reject_out_of_range_values() {
    for (cells_x, cells_y) in [(4, 50), (50, 251), (0, 0)] {
        let err = SimulationOptions::build(cells_x, cells_y, 0.85, 0.4, false).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidParameter { .. }));
    }

    assert!(SimulationOptions::build(50, 50, 1.5, 0.4, false).is_err());
    assert!(SimulationOptions::build(50, 50, -0.1, 0.4, false).is_err());
    assert!(SimulationOptions::build(50, 50, 0.85, 1.1, false).is_err());
}

#[test]
fn test_options_convert_threshold_fraction_to_channel_sum() {
    let options = SimulationOptions::build(50, 50, 0.85, 0.4, false).unwrap();
    assert_eq!(options.color_threshold, 650);

    let options = SimulationOptions::build(50, 50, 0.0, 0.4, false).unwrap();
    assert_eq!(options.color_threshold, 0);

    let options = SimulationOptions::build(50, 50, 1.0, 0.4, false).unwrap();
    assert_eq!(options.color_threshold, 765);
}

#[test]
fn test_options_derive_random_fill_target() {
    let options = SimulationOptions::build(50, 50, 0.85, 0.4, false).unwrap();
    assert_eq!(options.max_random_cells, 1000);

    // Targets below the supported minimum fall back to the default fraction
    let options = SimulationOptions::build(50, 50, 0.85, 0.001, false).unwrap();
    assert_eq!(options.max_random_cells, 1000);

    // The target never reaches the full cell count
    let options = SimulationOptions::build(5, 5, 0.85, 1.0, false).unwrap();
    assert!(options.max_random_cells < 25);
}

#[test]
fn test_exported_board_reingests_identically() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("board.png");

    let mut board = Board::new(8, 8, u32::MAX);
    for (x, y) in [(0, 0), (3, 3), (7, 0), (0, 7), (5, 2), (2, 5)] {
        let index = board.cell_index(x, y);
        board.revive(index);
    }
    let exported = alive_set(&board);

    export_board_as_png(&board, path.to_str().unwrap()).unwrap();

    let decoded = image::open(&path).unwrap();
    let mut reloaded = Board::new(8, 8, u32::MAX);
    populate_from_raster(&mut reloaded, &decoded, 650).unwrap();

    assert_eq!(alive_set(&reloaded), exported);
}

#[test]
fn test_export_creates_missing_parent_directories() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("nested").join("deeper").join("board.png");

    let board = Board::new(6, 6, u32::MAX);
    export_board_as_png(&board, path.to_str().unwrap()).unwrap();

    assert!(path.exists());
}

#[test]
fn test_cli_defaults() {
    let cli = Cli::try_parse_from(["chronolife"]).unwrap();

    assert!(cli.image.is_none());
    assert_eq!(cli.cells, DEFAULT_CELLS_PER_AXIS);
    assert!((cli.threshold - DEFAULT_COLOR_THRESHOLD).abs() < f64::EPSILON);
    assert_eq!(cli.turns, DEFAULT_TURNS);
    assert!(!cli.history);
    assert!(!cli.quiet);
    assert!(cli.should_show_progress());
}

#[test]
fn test_cli_overrides() {
    let cli = Cli::try_parse_from([
        "chronolife",
        "seed.png",
        "-c",
        "30",
        "--threshold",
        "0.5",
        "-n",
        "10",
        "--history",
        "--quiet",
    ])
    .unwrap();

    assert_eq!(cli.image.as_deref().map(|p| p.to_str()), Some(Some("seed.png")));
    assert_eq!(cli.cells, 30);
    assert!((cli.threshold - 0.5).abs() < f64::EPSILON);
    assert_eq!(cli.turns, 10);
    assert!(cli.history);
    assert!(!cli.should_show_progress());
}
