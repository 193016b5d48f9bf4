//! Win detection.
//!
//! A side has won when a chain of its stones, connected through hex
//! adjacency, touches both of its borders. The search seeds from every
//! stone on the starting border and walks an explicit stack, so its depth
//! does not depend on the call stack. The board's `visited` flags are the
//! only scratch state and are cleared before returning.

use crate::board::Board;
use crate::position::{Coordinate, Side};

/// True if `side` has a connected chain from its start border to its goal border.
pub fn has_won(board: &mut Board, side: Side) -> bool {
    let won = search(board, side);
    board.clear_visited();
    won
}

/// The side holding a winning connection, if any.
///
/// Side A is checked first. On a full board exactly one side has won.
pub fn winner(board: &mut Board) -> Option<Side> {
    [Side::A, Side::B]
        .into_iter()
        .find(|&side| has_won(board, side))
}

fn search(board: &mut Board, side: Side) -> bool {
    let size = board.size();
    let mark = side.mark();
    let goal = side.goal();
    let mut stack: Vec<Coordinate> = Vec::with_capacity(board.capacity());

    for seed in goal.start_cells(size) {
        let cell = board.cell_mut(seed);
        if cell.owner != mark || cell.visited {
            continue;
        }
        cell.visited = true;
        stack.push(seed);

        while let Some(current) = stack.pop() {
            if goal.reaches_goal(current, size) {
                return true;
            }
            let neighbors = board.cell_mut(current).neighbor_set();
            for &next in neighbors.as_slice() {
                let cell = board.cell_mut(next);
                if cell.owner == mark && !cell.visited {
                    cell.visited = true;
                    stack.push(next);
                }
            }
        }
    }
    false
}
