//! Integration tests for hex-mc
//!
//! These cover the properties that tie the modules together: the hex
//! adjacency rule, the no-draw property of a full board, board isolation
//! between copies, and the evaluator's behavior at the edges.

use fastrand::Rng;

use hex_mc::board::Board;
use hex_mc::constants::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use hex_mc::error::HexError;
use hex_mc::evaluator::{Evaluator, EvaluatorConfig};
use hex_mc::pathfinder::{has_won, winner};
use hex_mc::playout::random_fill;
use hex_mc::position::{Coordinate, Mark, Side};

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

/// Place stones directly, first all of side A then all of side B.
fn setpos(size: usize, a: &[(usize, usize)], b: &[(usize, usize)]) -> Board {
    let mut board = Board::new(size).unwrap();
    for &(r, c) in a {
        assert!(board.place(Side::A, Coordinate::new(r, c)));
    }
    for &(r, c) in b {
        assert!(board.place(Side::B, Coordinate::new(r, c)));
    }
    board
}

fn quick_evaluator(seed: u64) -> Evaluator {
    Evaluator::new(EvaluatorConfig {
        workers: 4,
        rollouts_per_worker: 10,
        seed: Some(seed),
        time_limit: None,
    })
}

fn all_coords(size: usize) -> impl Iterator<Item = Coordinate> {
    (0..size * size).map(move |i| Coordinate::new(i / size, i % size))
}

// =============================================================================
// Topology
// =============================================================================

#[test]
fn test_neighbor_counts_for_every_size() {
    for size in MIN_BOARD_SIZE..=MAX_BOARD_SIZE {
        let board = Board::new(size).unwrap();
        let last = size - 1;
        for coord in all_coords(size) {
            let n = board.neighbors(coord).len();
            let on_row_edge = coord.row == 0 || coord.row == last;
            let on_col_edge = coord.col == 0 || coord.col == last;
            let expected = match (on_row_edge, on_col_edge) {
                (false, false) => 6,
                (true, false) | (false, true) => 4,
                (true, true) => {
                    // Acute corners touch two cells, obtuse corners three.
                    if coord.row == coord.col { 2 } else { 3 }
                }
            };
            assert_eq!(n, expected, "size {size}, cell {coord}");
        }
    }
}

#[test]
fn test_neighbors_are_symmetric() {
    let board = Board::new(7).unwrap();
    for coord in all_coords(7) {
        for &n in board.neighbors(coord) {
            assert!(
                board.neighbors(n).contains(&coord),
                "{coord} -> {n} not mutual"
            );
        }
    }
}

// =============================================================================
// Placement
// =============================================================================

#[test]
fn test_rejected_place_changes_nothing() {
    let mut board = setpos(4, &[(1, 1)], &[(2, 2)]);
    let before = board.clone();

    assert!(!board.place(Side::B, Coordinate::new(1, 1)));
    assert!(!board.place(Side::A, Coordinate::new(2, 2)));
    assert!(!board.place(Side::A, Coordinate::new(4, 0)));
    assert!(!board.place(Side::A, Coordinate::new(0, 4)));

    assert_eq!(board.occupied(), 2);
    assert_eq!(board, before);
}

#[test]
fn test_occupied_count_matches_cells() {
    let mut rng = Rng::with_seed(99);
    let mut board = Board::new(6).unwrap();
    for _ in 0..50 {
        let coord = Coordinate::new(rng.usize(..7), rng.usize(..7));
        board.place(if rng.bool() { Side::A } else { Side::B }, coord);
        let marked = board
            .cells()
            .iter()
            .filter(|c| c.owner != Mark::Empty)
            .count();
        assert_eq!(board.occupied(), marked);
        assert!(board.occupied() <= board.capacity());
    }
}

#[test]
fn test_clone_is_independent() {
    let mut original = setpos(5, &[(0, 0)], &[]);
    let mut copy = original.clone();

    original.place(Side::B, Coordinate::new(3, 3));
    assert!(copy.is_free(Coordinate::new(3, 3)));
    assert_eq!(copy.occupied(), 1);

    copy.place(Side::A, Coordinate::new(4, 4));
    assert!(original.is_free(Coordinate::new(4, 4)));
    assert_eq!(original.occupied(), 2);
}

// =============================================================================
// Win detection
// =============================================================================

#[test]
fn test_full_top_row_is_not_a_win() {
    let mut board = setpos(
        3,
        &[(0, 0), (0, 1), (0, 2)],
        &[(1, 0), (1, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    );
    assert!(!has_won(&mut board, Side::A));
}

#[test]
fn test_vertical_line_wins() {
    let mut board = setpos(3, &[(0, 1), (1, 1), (2, 1)], &[]);
    assert!(has_won(&mut board, Side::A));
}

#[test]
fn test_visited_flags_cleared_either_way() {
    let mut won = setpos(5, &[(0, 2), (1, 2), (2, 2), (3, 2), (4, 2)], &[]);
    assert!(has_won(&mut won, Side::A));
    assert!(won.cells().iter().all(|c| !c.is_visited()));

    let mut lost = setpos(5, &[(0, 2), (1, 2), (2, 2)], &[(3, 0), (3, 1), (3, 2), (3, 3)]);
    assert!(!has_won(&mut lost, Side::A));
    assert!(!has_won(&mut lost, Side::B));
    assert!(lost.cells().iter().all(|c| !c.is_visited()));
}

#[test]
fn test_full_board_has_exactly_one_winner() {
    for size in MIN_BOARD_SIZE..=MAX_BOARD_SIZE {
        for seed in 0..25 {
            let mut rng = Rng::with_seed(seed * 31 + size as u64);
            let mut board = Board::new(size).unwrap();
            random_fill(&mut board, Side::A, &mut rng);
            assert!(board.is_full());

            let a = has_won(&mut board, Side::A);
            let b = has_won(&mut board, Side::B);
            assert!(a ^ b, "size {size}, seed {seed}: a={a} b={b}\n{board}");
            assert_eq!(winner(&mut board), Some(if a { Side::A } else { Side::B }));
        }
    }
}

// =============================================================================
// Evaluator
// =============================================================================

#[test]
fn test_single_free_cell_is_chosen() {
    let size = 4;
    let mut board = Board::new(size).unwrap();
    let last = Coordinate::new(size - 1, size - 1);
    let mut side = Side::A;
    for coord in all_coords(size).filter(|&c| c != last) {
        assert!(board.place(side, coord));
        side = side.opponent();
    }

    let evaluator = quick_evaluator(1);
    assert_eq!(evaluator.choose_move(&mut board, Side::B), Ok(last));
    assert!(board.is_full());
    assert_eq!(board.owner(last), Some(Mark::SideB));
}

#[test]
fn test_full_board_has_no_legal_move() {
    let mut board = Board::new(3).unwrap();
    random_fill(&mut board, Side::A, &mut Rng::with_seed(4));
    let before = board.clone();

    let evaluator = quick_evaluator(2);
    assert_eq!(
        evaluator.choose_move(&mut board, Side::A),
        Err(HexError::NoLegalMove)
    );
    assert_eq!(board, before);
}

#[test]
fn test_takes_immediate_win() {
    // B needs one stone at (1,2) to join column 0 to column 2.
    let mut board = setpos(3, &[(0, 0), (0, 1), (0, 2), (2, 0)], &[(1, 0), (1, 1)]);
    let evaluator = quick_evaluator(3);
    let coord = evaluator.choose_move(&mut board, Side::B).unwrap();
    assert_eq!(coord, Coordinate::new(1, 2));
    assert!(has_won(&mut board, Side::B));
}

#[test]
fn test_evaluation_does_not_touch_board() {
    let board = setpos(5, &[(2, 2)], &[(1, 3)]);
    let before = board.clone();
    let scores = quick_evaluator(5).evaluate(&board, Side::A).unwrap();
    assert_eq!(scores.len(), 23);
    assert_eq!(board, before);

    // Row-major order of free cells.
    let order: Vec<Coordinate> = scores.iter().map(|m| m.position).collect();
    let expected: Vec<Coordinate> = board.free_cells().collect();
    assert_eq!(order, expected);
}
