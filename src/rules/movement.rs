//! Token-move legality.
//!
//! A proposed move first passes the common gates (turn, game not over, on
//! the board, target free, within two cells on each axis) and is then
//! classified by its displacement:
//!
//! - **Step**: one cell orthogonally.
//! - **Jump**: two cells straight up or down over an adjacent token.
//!   There are no sideways jumps.
//! - **Diagonal**: one cell diagonally, only as a detour around a straight
//!   jump that a barrier (or the board edge) prevents.
//!
//! Anything else is `InvalidShape`.
//!
//! ## Barrier keying
//!
//! Barriers live on cells, not between them. A single step is blocked by:
//!
//! | direction | barrier    | checked on |
//! |-----------|------------|------------|
//! | up        | horizontal | origin     |
//! | left      | vertical   | origin     |
//! | down      | horizontal | target     |
//! | right     | vertical   | target     |
//!
//! Jumps and the open-path search are built from the same single-step test,
//! so all movement agrees on what a barrier blocks.

use serde::{Deserialize, Serialize};

use super::error::Rejection;
use crate::core::{Coord, GameState, Grid, Orientation, PlayerId, BOARD_SIZE};

/// Classified shape of a legal token move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    Step,
    Jump,
    Diagonal,
}

/// Unit steps in the four orthogonal directions: up, left, down, right.
pub const ORTHOGONAL: [(i32, i32); 4] = [(0, -1), (-1, 0), (0, 1), (1, 0)];

/// Check if a barrier stops a single orthogonal step from `from` to `to`.
///
/// Displacements other than one orthogonal cell count as blocked.
#[must_use]
pub fn step_blocked(grid: &Grid, from: Coord, to: Coord) -> bool {
    match from.delta_to(to) {
        (0, -1) => grid.has_barrier(from, Orientation::Horizontal),
        (-1, 0) => grid.has_barrier(from, Orientation::Vertical),
        (0, 1) => grid.has_barrier(to, Orientation::Horizontal),
        (1, 0) => grid.has_barrier(to, Orientation::Vertical),
        _ => true,
    }
}

/// Validate moving `player`'s token to `target`.
///
/// Returns the move's shape on success.
pub fn check_token_move(
    state: &GameState,
    player: PlayerId,
    target: Coord,
) -> Result<MoveKind, Rejection> {
    if state.current_player() != player {
        return Err(Rejection::OutOfTurn);
    }
    if state.winner().is_some() {
        return Err(Rejection::GameAlreadyWon);
    }
    if !target.in_bounds() {
        return Err(Rejection::OutOfBounds);
    }
    if state.grid().has_token(target) {
        return Err(Rejection::CellOccupied);
    }

    let origin = state.position(player);
    let (dx, dy) = origin.delta_to(target);
    if dx.abs() > 2 || dy.abs() > 2 {
        return Err(Rejection::InvalidShape);
    }

    let grid = state.grid();
    match (dx.abs(), dy.abs()) {
        (1, 0) | (0, 1) => check_step(grid, origin, target).map(|()| MoveKind::Step),
        (0, 2) => check_jump(grid, origin, dy / 2).map(|()| MoveKind::Jump),
        (1, 1) => check_diagonal(grid, origin, target).map(|()| MoveKind::Diagonal),
        _ => Err(Rejection::InvalidShape),
    }
}

fn check_step(grid: &Grid, origin: Coord, target: Coord) -> Result<(), Rejection> {
    if step_blocked(grid, origin, target) {
        Err(Rejection::PathBlocked)
    } else {
        Ok(())
    }
}

/// Vertical jump of two cells, `dir` being -1 for up and 1 for down.
///
/// Order matters for the reported reason: the barrier next to the origin,
/// then the token being jumped, then the barrier behind it.
fn check_jump(grid: &Grid, origin: Coord, dir: i32) -> Result<(), Rejection> {
    let middle = origin.offset(0, dir);
    let landing = middle.offset(0, dir);

    check_step(grid, origin, middle)?;
    if !grid.has_token(middle) {
        return Err(Rejection::InvalidShape);
    }
    check_step(grid, middle, landing)
}

/// One-cell diagonal, legal only beside a token whose straight jump is
/// closed.
///
/// - Up-diagonals need the token directly above to carry a horizontal
///   barrier (closing the jump from that cell upward).
/// - Down-diagonals need the token directly below and either the board edge
///   behind it or a horizontal barrier on the cell behind it.
///
/// Lateral tokens never license a diagonal.
fn check_diagonal(grid: &Grid, origin: Coord, target: Coord) -> Result<(), Rejection> {
    let (_, dy) = origin.delta_to(target);
    let ahead = origin.offset(0, dy);

    if !grid.has_token(ahead) {
        return Err(Rejection::InvalidShape);
    }

    let jump_closed = if dy < 0 {
        grid.has_barrier(ahead, Orientation::Horizontal)
    } else {
        let behind = ahead.offset(0, 1);
        behind.y >= BOARD_SIZE || grid.has_barrier(behind, Orientation::Horizontal)
    };

    if jump_closed {
        Ok(())
    } else {
        Err(Rejection::InvalidShape)
    }
}
