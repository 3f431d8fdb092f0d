//! # quoridor-engine
//!
//! Rule engine for a two-player race game on a 9×9 board. Each player
//! advances a token toward the opponent's baseline; instead of moving, a
//! player may place a barrier that restricts token movement.
//!
//! The engine is the sole authority for move legality, state mutation, turn
//! order and win detection. It has no I/O and no global state: callers own
//! each `GameState` and pass it by reference.
//!
//! ## Design Principles
//!
//! 1. **Reject, never corrupt**: a refused action leaves the state exactly
//!    as it was, including whose turn it is.
//!
//! 2. **Layered board**: tokens and barriers are separate per-cell layers.
//!    A cell may hold a token and barriers at once.
//!
//! 3. **Reasons over booleans**: every check returns `Result<_, Rejection>`;
//!    the boolean `attempt_*` calls are thin wrappers.
//!
//! ## Modules
//!
//! - `core`: players, coordinates, barriers, grid, actions, state, config
//! - `rules`: movement and placement checks, reachability, `RulesEngine`
//! - `games`: the `Quoridor` rules and its builder
//!
//! ## Example
//!
//! ```
//! use quoridor_engine::{attempt_move_token, is_winner, new_game, PlayerId};
//!
//! let mut state = new_game();
//! assert!(attempt_move_token(&mut state, PlayerId::One, (4, 1)));
//! assert_eq!(state.current_player(), PlayerId::Two);
//! assert!(!is_winner(&state, PlayerId::One));
//! ```

pub mod core;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Barrier, BarrierSet, Coord, GameState, Grid, Orientation, PlayerId,
    PlayerMap, RuleConfig, BOARD_SIZE, DEFAULT_BARRIER_BUDGET,
};

pub use crate::rules::{MoveKind, Rejection, RulesEngine};

pub use crate::games::quoridor::{Quoridor, QuoridorBuilder, TokenMoves};

/// Fresh game with both tokens on their baselines and player one to move.
#[must_use]
pub fn new_game() -> GameState {
    GameState::new()
}

/// Move `player`'s token to `target` under the default rules.
///
/// Returns `false`, leaving `state` untouched, if the move is illegal.
pub fn attempt_move_token(
    state: &mut GameState,
    player: PlayerId,
    target: impl Into<Coord>,
) -> bool {
    Quoridor::default().attempt_move_token(state, player, target)
}

/// Place a barrier for `player` under the default rules.
///
/// Returns `false`, leaving `state` untouched, if the placement is illegal.
pub fn attempt_place_barrier(
    state: &mut GameState,
    player: PlayerId,
    orientation: Orientation,
    anchor: impl Into<Coord>,
) -> bool {
    Quoridor::default().attempt_place_barrier(state, player, orientation, anchor)
}

/// Check if `player`'s token has reached its goal row.
#[must_use]
pub fn is_winner(state: &GameState, player: PlayerId) -> bool {
    state.is_winner(player)
}

/// Diagnostic text picture of the board. Not a stable format.
#[must_use]
pub fn render(state: &GameState) -> String {
    state.to_string()
}
