//! Validates rule application, wraparound topology, and population bookkeeping

use chronolife::engine::Board;
use chronolife::engine::neighbors::living_neighbor_count;
use chronolife::engine::rules::apply_turn;
use chronolife::engine::seed::{scaled_seed_target, seed_random};
use rand::{SeedableRng, rngs::StdRng};

fn empty_board(cells: usize) -> Board {
    Board::new(cells, cells, u32::MAX)
}

fn revive_at(board: &mut Board, x: usize, y: usize) {
    let index = board.cell_index(x, y);
    assert!(board.revive(index), "cell ({x}, {y}) should start dead");
}

fn alive_set(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.alive)
        .map(|(index, _)| index)
        .collect()
}

fn assert_living_invariant(board: &Board) {
    let counted = board.cells().iter().filter(|cell| cell.alive).count() as u32;
    assert_eq!(
        board.living_cells(),
        counted,
        "living count must match the cells"
    );
}

#[test]
fn test_lone_cell_dies() {
    let mut board = empty_board(5);
    revive_at(&mut board, 2, 2);

    apply_turn(&mut board, false);

    assert_eq!(board.living_cells(), 0);
    assert!(board.is_dirty());
    assert_eq!(board.turn(), 1);
    let center = board.cell_index(2, 2);
    assert!(board.cell(center).is_some_and(|cell| cell.changed));
    assert_living_invariant(&board);
}

#[test]
fn test_block_is_stable() {
    let mut board = empty_board(5);
    for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
        revive_at(&mut board, x, y);
    }
    let initial = alive_set(&board);

    for turn in 1..=3 {
        apply_turn(&mut board, false);
        assert_eq!(alive_set(&board), initial, "block moved at turn {turn}");
        assert!(!board.is_dirty(), "a stable block must not dirty the board");
        assert_living_invariant(&board);
    }
    assert_eq!(board.turn(), 3);
}

#[test]
fn test_blinker_oscillates_with_period_two() {
    let mut board = empty_board(5);
    for (x, y) in [(1, 2), (2, 2), (3, 2)] {
        revive_at(&mut board, x, y);
    }
    let horizontal = alive_set(&board);

    apply_turn(&mut board, false);
    let vertical: Vec<usize> = [(2, 1), (2, 2), (2, 3)]
        .iter()
        .map(|&(x, y)| board.cell_index(x, y))
        .collect();
    assert_eq!(alive_set(&board), vertical);
    assert!(board.is_dirty());
    assert_living_invariant(&board);

    apply_turn(&mut board, false);
    assert_eq!(alive_set(&board), horizontal);
    assert_living_invariant(&board);
}

#[test]
fn test_neighbors_wrap_around_edges() {
    let mut board = empty_board(3);
    // Bottom-left is the wrapped "top" neighbor of the origin, top-right its
    // wrapped "left" neighbor
    revive_at(&mut board, 0, 2);
    revive_at(&mut board, 2, 0);

    assert_eq!(living_neighbor_count(&board, 0, 0), 2);
}

#[test]
fn test_neighbor_count_reaches_eight() {
    let mut board = empty_board(3);
    for y in 0..3 {
        for x in 0..3 {
            if (x, y) != (1, 1) {
                revive_at(&mut board, x, y);
            }
        }
    }

    assert_eq!(living_neighbor_count(&board, 1, 1), 8);
}

#[test]
fn test_turn_counter_wraps_past_limit() {
    let mut board = Board::new(5, 5, 2);

    apply_turn(&mut board, false);
    assert_eq!(board.turn(), 1);
    apply_turn(&mut board, false);
    assert_eq!(board.turn(), 2);
    apply_turn(&mut board, false);
    assert_eq!(board.turn(), 0, "exceeding the limit must wrap to zero");
    apply_turn(&mut board, false);
    assert_eq!(board.turn(), 1);
}

#[test]
fn test_replay_turns_leave_counter_untouched() {
    let mut board = empty_board(5);
    revive_at(&mut board, 2, 2);

    apply_turn(&mut board, true);

    assert_eq!(board.turn(), 0);
    assert_eq!(board.living_cells(), 0, "rules still apply while replaying");
}

#[test]
fn test_random_seed_births_exact_target() {
    let mut board = empty_board(10);
    let mut rng = StdRng::seed_from_u64(99);

    seed_random(&mut board, 30, &mut rng);

    assert_eq!(board.living_cells(), 30);
    assert_living_invariant(&board);
    for index in alive_set(&board) {
        assert!(board.cell(index).is_some_and(|cell| cell.changed));
    }
}

#[test]
fn test_random_seed_is_reproducible() {
    let mut first = empty_board(10);
    let mut second = empty_board(10);

    seed_random(&mut first, 25, &mut StdRng::seed_from_u64(7));
    seed_random(&mut second, 25, &mut StdRng::seed_from_u64(7));

    assert_eq!(alive_set(&first), alive_set(&second));
}

#[test]
fn test_scaled_seed_target_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..100 {
        let target = scaled_seed_target(1000, &mut rng);
        assert!((250..1000).contains(&target), "got {target}");
    }
}

#[test]
fn test_reset_clears_everything_but_keeps_size() {
    let mut board = empty_board(6);
    seed_random(&mut board, 12, &mut StdRng::seed_from_u64(1));
    apply_turn(&mut board, false);

    board.reset();

    assert_eq!(board.living_cells(), 0);
    assert_eq!(board.turn(), 0);
    assert_eq!(board.cell_count(), 36);
    assert!(board.cells().iter().all(|cell| !cell.alive && !cell.changed));
}

#[test]
fn test_revive_skips_living_cells() {
    let mut board = empty_board(5);
    let index = board.cell_index(1, 1);

    assert!(board.revive(index));
    assert!(!board.revive(index), "a living cell cannot be revived again");
    assert_eq!(board.living_cells(), 1);
}

#[test]
fn test_rectangular_board_keeps_mapping_consistent() {
    let mut board = Board::new(7, 4, u32::MAX);
    revive_at(&mut board, 6, 3);

    // The wrapped "bottom-right" neighbor of the far corner is the origin
    assert_eq!(living_neighbor_count(&board, 0, 0), 1);
    assert_eq!(board.cell_index(6, 3), 6 + 3 * 7);
    assert_living_invariant(&board);
}
