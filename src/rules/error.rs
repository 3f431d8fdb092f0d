//! Rejection reasons.
//!
//! Every illegal action is an ordinary outcome, not a fault: the checkers
//! return `Err(Rejection)` and the state is left as it was.

use thiserror::Error;

/// Why an action was refused.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rejection {
    #[error("it is not this player's turn")]
    OutOfTurn,

    #[error("the game has already been won")]
    GameAlreadyWon,

    #[error("coordinate is off the board")]
    OutOfBounds,

    #[error("target cell already holds a token")]
    CellOccupied,

    /// Displacement matches no legal move, including a two-step move with no
    /// token to jump and a diagonal that is not a detour around a blocked
    /// jump.
    #[error("move shape is not legal here")]
    InvalidShape,

    #[error("a barrier blocks the path")]
    PathBlocked,

    #[error("a barrier with this orientation is already anchored on that cell")]
    DuplicateBarrier,

    #[error("player has no barriers left to place")]
    BarrierBudgetExceeded,

    #[error("barriers of this orientation may not be anchored on the edge row or column")]
    EdgeBarrierDisallowed,

    /// Only raised when the open-path rule is enabled.
    #[error("barrier would cut a token off from its goal row")]
    NoPathToGoal,

    #[error("unknown player number {0} (expected 1 or 2)")]
    UnknownPlayer(u8),

    /// A deserialized state whose grid, positions and ledgers disagree.
    #[error("state snapshot is inconsistent")]
    InconsistentState,
}
