//! The hex board: cells, adjacency and placement.
//!
//! Cells are stored row-major in a flat vector. Every cell carries its own
//! neighbor list, computed once from the board size. Neighbor lists are small
//! fixed arrays, so a [`Board`] is plain data and `clone()` is a cheap deep
//! copy that shares nothing with the original.

use std::fmt;

use crate::constants::{HEX_OFFSETS, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::{HexError, Result};
use crate::position::{Coordinate, Mark, Side};

/// Up to six adjacent coordinates, stored inline.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Neighbors {
    cells: [Coordinate; 6],
    len: u8,
}

impl Neighbors {
    fn compute(pos: Coordinate, size: usize) -> Self {
        let mut cells = [Coordinate::new(0, 0); 6];
        let mut len = 0;
        for (dr, dc) in HEX_OFFSETS {
            if let Some(n) = pos.offset(dr, dc, size) {
                cells[len] = n;
                len += 1;
            }
        }
        Neighbors {
            cells,
            len: len as u8,
        }
    }

    pub fn as_slice(&self) -> &[Coordinate] {
        &self.cells[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// One board position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub position: Coordinate,
    pub owner: Mark,
    /// Scratch flag for a single win-detection pass. Always false between passes.
    pub(crate) visited: bool,
    neighbors: Neighbors,
}

impl Cell {
    fn new(position: Coordinate, size: usize) -> Self {
        Cell {
            position,
            owner: Mark::Empty,
            visited: false,
            neighbors: Neighbors::compute(position, size),
        }
    }

    pub fn neighbors(&self) -> &[Coordinate] {
        self.neighbors.as_slice()
    }

    /// Owned copy of the neighbor list, for walks that mutate the board.
    pub fn neighbor_set(&self) -> Neighbors {
        self.neighbors
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }
}

/// An `N x N` hex board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    occupied: usize,
}

impl Board {
    /// Build an empty board. `size` must lie in `3..=11`.
    pub fn new(size: usize) -> Result<Self> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(HexError::config(format!(
                "board size {size} is outside {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}"
            )));
        }
        let cells = (0..size * size)
            .map(|i| Cell::new(Coordinate::new(i / size, i % size), size))
            .collect();
        Ok(Self {
            size,
            cells,
            occupied: 0,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells holding a stone.
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    /// Total number of cells, the most that can ever be occupied.
    pub fn capacity(&self) -> usize {
        self.size * self.size
    }

    /// Number of free cells left.
    pub fn remaining(&self) -> usize {
        self.capacity() - self.occupied
    }

    pub fn is_full(&self) -> bool {
        self.occupied == self.capacity()
    }

    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    fn idx(&self, coord: Coordinate) -> usize {
        coord.row * self.size + coord.col
    }

    pub fn cell(&self, coord: Coordinate) -> Option<&Cell> {
        if !self.in_bounds(coord) {
            return None;
        }
        Some(&self.cells[self.idx(coord)])
    }

    pub(crate) fn cell_mut(&mut self, coord: Coordinate) -> &mut Cell {
        let i = self.idx(coord);
        &mut self.cells[i]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Owner of the cell at `coord`, or `None` when off the board.
    pub fn owner(&self, coord: Coordinate) -> Option<Mark> {
        self.cell(coord).map(|c| c.owner)
    }

    /// Neighbors of `coord`; empty when off the board.
    pub fn neighbors(&self, coord: Coordinate) -> &[Coordinate] {
        self.cell(coord).map(Cell::neighbors).unwrap_or(&[])
    }

    /// True iff `coord` is on the board and holds no stone.
    pub fn is_free(&self, coord: Coordinate) -> bool {
        self.owner(coord) == Some(Mark::Empty)
    }

    /// Place a stone for `side`. Returns false and leaves the board untouched
    /// if `coord` is off the board or already taken.
    pub fn place(&mut self, side: Side, coord: Coordinate) -> bool {
        self.try_place(side, coord).is_ok()
    }

    /// Like [`Board::place`], but says why a placement was refused.
    pub fn try_place(&mut self, side: Side, coord: Coordinate) -> Result<()> {
        if !self.in_bounds(coord) {
            return Err(HexError::OutOfRange {
                coord,
                size: self.size,
            });
        }
        let cell = self.cell_mut(coord);
        if cell.owner != Mark::Empty {
            return Err(HexError::CellOccupied { coord });
        }
        cell.owner = side.mark();
        self.occupied += 1;
        Ok(())
    }

    /// Restore this board to the state of an earlier snapshot.
    pub fn reset(&mut self, snapshot: &Board) {
        self.size = snapshot.size;
        self.cells.clone_from(&snapshot.cells);
        self.occupied = snapshot.occupied;
    }

    /// Free cells in row-major order.
    pub fn free_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells
            .iter()
            .filter(|c| c.owner == Mark::Empty)
            .map(|c| c.position)
    }

    pub(crate) fn clear_visited(&mut self) {
        for cell in &mut self.cells {
            cell.visited = false;
        }
    }
}

impl fmt::Display for Board {
    /// Draws the board as a rhombus: each row is shifted one column further
    /// right, with row numbers on both sides and column numbers above and below.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = if self.size > 10 { 3 } else { 2 };
        let labels: String = (0..self.size).map(|c| format!("{c:<w$}")).collect();

        writeln!(f, "   {}", labels.trim_end())?;
        for row in 0..self.size {
            let cells: String = (0..self.size)
                .map(|col| {
                    let mark = self.cells[row * self.size + col].owner;
                    format!("{:<w$}", mark.symbol())
                })
                .collect();
            writeln!(f, "{}{row:>2} {}{row}", " ".repeat(row), cells)?;
        }
        writeln!(
            f,
            "{}{}",
            " ".repeat(self.size - 1 + 3),
            labels.trim_end()
        )
    }
}
