//! Small value types shared by every part of the engine.
//!
//! - [`Coordinate`] names a cell by `(row, col)`.
//! - [`Mark`] is what a cell holds: nothing, or one side's stone.
//! - [`Side`] is a player together with the pair of borders it must join.
//!
//! Side A joins the first row to the last row; Side B joins the first
//! column to the last column. That assignment is part of the game rules and
//! is not configurable.

use std::fmt;

/// A cell address on the board. Rows and columns start at 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step by a signed offset, returning `None` if the result leaves `0..size`.
    pub fn offset(self, dr: isize, dc: isize, size: usize) -> Option<Coordinate> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < size && col < size).then_some(Coordinate { row, col })
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Coordinate { row, col }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Ownership of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Mark {
    #[default]
    Empty,
    SideA,
    SideB,
}

impl Mark {
    /// Character used when drawing the board.
    pub fn symbol(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::SideA => 'A',
            Mark::SideB => 'B',
        }
    }
}

/// The axis along which a side's connection runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Crossing rows: from `row == 0` to `row == size - 1`.
    Row,
    /// Crossing columns: from `col == 0` to `col == size - 1`.
    Col,
}

/// Start and goal borders for one side.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BorderGoal {
    pub start_edge: Axis,
    pub goal_edge: Axis,
}

impl BorderGoal {
    /// Every cell on the starting border, in increasing order.
    pub fn start_cells(self, size: usize) -> impl Iterator<Item = Coordinate> {
        let axis = self.start_edge;
        (0..size).map(move |i| match axis {
            Axis::Row => Coordinate::new(0, i),
            Axis::Col => Coordinate::new(i, 0),
        })
    }

    /// Whether `coord` lies on the far border.
    pub fn reaches_goal(self, coord: Coordinate, size: usize) -> bool {
        match self.goal_edge {
            Axis::Row => coord.row + 1 == size,
            Axis::Col => coord.col + 1 == size,
        }
    }
}

/// One of the two players.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// The mark this side leaves on a cell.
    pub fn mark(self) -> Mark {
        match self {
            Side::A => Mark::SideA,
            Side::B => Mark::SideB,
        }
    }

    /// Which borders this side must connect.
    pub fn goal(self) -> BorderGoal {
        match self {
            Side::A => BorderGoal {
                start_edge: Axis::Row,
                goal_edge: Axis::Row,
            },
            Side::B => BorderGoal {
                start_edge: Axis::Col,
                goal_edge: Axis::Col,
            },
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// Parse `"row,col"` into a coordinate.
///
/// Whitespace around either number is ignored. Returns `None` for anything
/// that is not two non-negative integers separated by a comma. Range is not
/// checked here; the board does that.
pub fn parse_coord(s: &str) -> Option<Coordinate> {
    let (row, col) = s.trim().split_once(',')?;
    let row = row.trim().parse().ok()?;
    let col = col.trim().parse().ok()?;
    Some(Coordinate { row, col })
}

/// Format a coordinate the way [`parse_coord`] reads it.
pub fn str_coord(coord: Coordinate) -> String {
    coord.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("2,3"), Some(Coordinate::new(2, 3)));
        assert_eq!(parse_coord(" 10 , 0 "), Some(Coordinate::new(10, 0)));
        assert_eq!(parse_coord("2 3"), None);
        assert_eq!(parse_coord("-1,3"), None);
        assert_eq!(parse_coord("a,b"), None);
        assert_eq!(parse_coord(""), None);
    }

    #[test]
    fn test_str_coord() {
        let c = Coordinate::new(4, 7);
        assert_eq!(str_coord(c), "4,7");
        assert_eq!(parse_coord(&str_coord(c)), Some(c));
    }

    #[test]
    fn test_offset_stays_on_board() {
        let c = Coordinate::new(0, 2);
        assert_eq!(c.offset(-1, 0, 3), None);
        assert_eq!(c.offset(0, 1, 3), None);
        assert_eq!(c.offset(1, -1, 3), Some(Coordinate::new(1, 1)));
    }

    #[test]
    fn test_side_goals() {
        assert_eq!(Side::A.opponent(), Side::B);
        assert_eq!(Side::B.mark(), Mark::SideB);

        let a: Vec<_> = Side::A.goal().start_cells(3).collect();
        assert_eq!(
            a,
            vec![Coordinate::new(0, 0), Coordinate::new(0, 1), Coordinate::new(0, 2)]
        );
        assert!(Side::A.goal().reaches_goal(Coordinate::new(2, 0), 3));
        assert!(!Side::A.goal().reaches_goal(Coordinate::new(0, 2), 3));

        let b: Vec<_> = Side::B.goal().start_cells(3).collect();
        assert_eq!(
            b,
            vec![Coordinate::new(0, 0), Coordinate::new(1, 0), Coordinate::new(2, 0)]
        );
        assert!(Side::B.goal().reaches_goal(Coordinate::new(0, 2), 3));
    }
}
