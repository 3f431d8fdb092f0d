//! Board coordinates.
//!
//! `x` is the column and `y` the row, both in `0..BOARD_SIZE` for cells on
//! the board. Coordinates are signed so that caller input far off the board
//! is still representable and can be rejected rather than wrapped.

use serde::{Deserialize, Serialize};

/// Width and height of the square board.
pub const BOARD_SIZE: i32 = 9;

/// A cell coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Check if this coordinate names a cell on the board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE && self.y >= 0 && self.y < BOARD_SIZE
    }

    /// Coordinate shifted by `(dx, dy)`. May leave the board.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Displacement from `self` to `other`, as `(dx, dy)`.
    #[must_use]
    pub const fn delta_to(self, other: Coord) -> (i32, i32) {
        (other.x - self.x, other.y - self.y)
    }

    /// `(column, row)` indices into a board array.
    ///
    /// Returns `None` when off the board.
    #[must_use]
    pub fn to_index(self) -> Option<(usize, usize)> {
        self.in_bounds().then(|| (self.x as usize, self.y as usize))
    }

    /// Iterate over every cell on the board, row by row.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Coord::new(x, y)))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds() {
        assert!(Coord::new(0, 0).in_bounds());
        assert!(Coord::new(8, 8).in_bounds());
        assert!(!Coord::new(-1, 4).in_bounds());
        assert!(!Coord::new(4, 9).in_bounds());
        assert!(!Coord::new(9, 0).in_bounds());
    }

    #[test]
    fn test_offset_and_delta() {
        let origin = Coord::new(4, 3);
        let target = origin.offset(1, -2);

        assert_eq!(target, Coord::new(5, 1));
        assert_eq!(origin.delta_to(target), (1, -2));
    }

    #[test]
    fn test_to_index() {
        assert_eq!(Coord::new(2, 7).to_index(), Some((2, 7)));
        assert_eq!(Coord::new(2, -1).to_index(), None);
    }

    #[test]
    fn test_all_cells() {
        let cells: Vec<_> = Coord::all().collect();
        assert_eq!(cells.len(), 81);
        assert_eq!(cells[0], Coord::new(0, 0));
        assert_eq!(cells[9], Coord::new(0, 1));
        assert_eq!(cells[80], Coord::new(8, 8));
    }

    #[test]
    fn test_from_tuple() {
        assert_eq!(Coord::from((3, 5)), Coord::new(3, 5));
        assert_eq!(format!("{}", Coord::new(3, 5)), "(3, 5)");
    }
}
