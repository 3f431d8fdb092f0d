//! Action representation.
//!
//! A turn is exactly one of:
//! - move the player's token to a target cell
//! - place a barrier
//!
//! Actions carry no legality information; the rules engine decides.

use serde::{Deserialize, Serialize};

use super::barrier::{Barrier, Orientation};
use super::coord::Coord;
use super::player::PlayerId;

/// A proposed or applied turn.
///
/// ## Example
///
/// ```
/// use quoridor_engine::core::{Action, Coord, Orientation};
///
/// let step = Action::move_token((4, 1));
/// let wall = Action::place_barrier(Orientation::Horizontal, (4, 4));
///
/// assert!(step.is_token_move());
/// assert_eq!(wall.barrier().map(|b| b.anchor), Some(Coord::new(4, 4)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the token to the target cell.
    MoveToken(Coord),
    /// Place a barrier.
    PlaceBarrier(Barrier),
}

impl Action {
    #[must_use]
    pub fn move_token(target: impl Into<Coord>) -> Self {
        Action::MoveToken(target.into())
    }

    #[must_use]
    pub fn place_barrier(orientation: Orientation, anchor: impl Into<Coord>) -> Self {
        Action::PlaceBarrier(Barrier::new(orientation, anchor.into()))
    }

    #[must_use]
    pub fn is_token_move(&self) -> bool {
        matches!(self, Action::MoveToken(_))
    }

    /// The barrier, if this is a placement.
    #[must_use]
    pub fn barrier(&self) -> Option<Barrier> {
        match self {
            Action::PlaceBarrier(barrier) => Some(*barrier),
            Action::MoveToken(_) => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::MoveToken(target) => write!(f, "move to {}", target),
            Action::PlaceBarrier(barrier) => write!(f, "place {}", barrier),
        }
    }
}

/// An applied action with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// 0-based position in the game's action sequence.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, sequence: u32) -> Self {
        Self {
            player,
            action,
            sequence,
        }
    }
}
