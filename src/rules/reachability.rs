//! Goal-row reachability.
//!
//! Breadth-first search over single orthogonal steps, using the same
//! barrier test as token movement. Tokens are ignored.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use super::movement::{step_blocked, ORTHOGONAL};
use crate::core::{Coord, Grid};

/// Fewest single steps from `start` to any cell of `goal_row`.
///
/// Returns `None` if barriers seal the goal row off.
#[must_use]
pub fn distance_to_goal(grid: &Grid, start: Coord, goal_row: i32) -> Option<usize> {
    let mut seen = FxHashSet::default();
    let mut frontier = VecDeque::new();
    seen.insert(start);
    frontier.push_back((start, 0usize));

    while let Some((cell, dist)) = frontier.pop_front() {
        if cell.y == goal_row {
            return Some(dist);
        }
        for (dx, dy) in ORTHOGONAL {
            let next = cell.offset(dx, dy);
            if next.in_bounds() && !step_blocked(grid, cell, next) && seen.insert(next) {
                frontier.push_back((next, dist + 1));
            }
        }
    }

    None
}

/// Check if any route leads from `start` to `goal_row`.
#[must_use]
pub fn has_path_to_goal(grid: &Grid, start: Coord, goal_row: i32) -> bool {
    distance_to_goal(grid, start, goal_row).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Orientation, BOARD_SIZE};

    #[test]
    fn test_open_board_distance() {
        let grid = Grid::new();
        assert_eq!(distance_to_goal(&grid, Coord::new(4, 0), 8), Some(8));
        assert_eq!(distance_to_goal(&grid, Coord::new(4, 8), 0), Some(8));
        assert_eq!(distance_to_goal(&grid, Coord::new(0, 8), 8), Some(0));
    }

    #[test]
    fn test_detour_around_barrier() {
        let mut grid = Grid::new();
        // Blocks the step from (4,0) down into (4,1).
        grid.add_barrier(Coord::new(4, 1), Orientation::Horizontal);

        assert_eq!(distance_to_goal(&grid, Coord::new(4, 0), 8), Some(9));
    }

    #[test]
    fn test_sealed_row() {
        let mut grid = Grid::new();
        // A full line of horizontal barriers on row 5 stops every down-step
        // into row 5.
        for x in 0..BOARD_SIZE {
            grid.add_barrier(Coord::new(x, 5), Orientation::Horizontal);
        }

        assert!(!has_path_to_goal(&grid, Coord::new(4, 0), 8));
        // Upward travel out of row 5 is stopped too.
        assert!(!has_path_to_goal(&grid, Coord::new(4, 8), 0));
        assert!(has_path_to_goal(&grid, Coord::new(4, 6), 8));
    }
}
