//! Barrier-placement legality.
//!
//! Gates, in order:
//! 1. Vertical barriers may not sit in column 0, horizontal ones not in row 0.
//! 2. It must be the mover's turn.
//! 3. The anchor must be on the board.
//! 4. The same orientation may not already be anchored on that cell, by
//!    either player.
//! 5. Nobody has won yet.
//! 6. The mover still has budget left.
//! 7. With `require_open_path`, both tokens must still reach their goal rows.

use super::error::Rejection;
use super::reachability::has_path_to_goal;
use crate::core::{Barrier, GameState, Orientation, PlayerId, RuleConfig};

/// Validate `player` placing `barrier`.
pub fn check_barrier(
    state: &GameState,
    config: &RuleConfig,
    player: PlayerId,
    barrier: Barrier,
) -> Result<(), Rejection> {
    let anchor = barrier.anchor;
    let on_edge = match barrier.orientation {
        Orientation::Vertical => anchor.x == 0,
        Orientation::Horizontal => anchor.y == 0,
    };
    if on_edge {
        return Err(Rejection::EdgeBarrierDisallowed);
    }
    if state.current_player() != player {
        return Err(Rejection::OutOfTurn);
    }
    if !anchor.in_bounds() {
        return Err(Rejection::OutOfBounds);
    }
    if state.is_barrier_placed(&barrier) {
        return Err(Rejection::DuplicateBarrier);
    }
    if state.winner().is_some() {
        return Err(Rejection::GameAlreadyWon);
    }
    if state.barrier_count(player) >= config.barrier_budget {
        return Err(Rejection::BarrierBudgetExceeded);
    }

    if config.require_open_path {
        let grid = state.grid_with(barrier);
        let sealed = PlayerId::all()
            .any(|p| !has_path_to_goal(&grid, state.position(p), p.goal_row()));
        if sealed {
            return Err(Rejection::NoPathToGoal);
        }
    }

    Ok(())
}
