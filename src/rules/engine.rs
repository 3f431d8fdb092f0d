//! Rules engine trait.
//!
//! Implementors decide:
//! - Whether an action is legal for a player in a state
//! - How a legal action changes the state
//! - When the game is over

use crate::core::{Action, GameState, PlayerId, RuleConfig};

use super::error::Rejection;

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `check_action` must not depend on anything but its arguments
/// - `apply_action` is all-or-nothing: on `Err` the state is untouched
/// - `candidate_actions` may over-approximate; `legal_actions` filters
pub trait RulesEngine {
    /// Get the rule configuration.
    fn config(&self) -> &RuleConfig;

    /// Decide whether `player` may take `action` in `state`.
    fn check_action(
        &self,
        state: &GameState,
        player: PlayerId,
        action: &Action,
    ) -> Result<(), Rejection>;

    /// Validate and apply `action`, passing the turn on success.
    fn apply_action(
        &self,
        state: &mut GameState,
        player: PlayerId,
        action: &Action,
    ) -> Result<(), Rejection>;

    /// Actions worth checking for `player`. Superset of the legal ones.
    fn candidate_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action>;

    // === Convenience Methods ===

    /// The winner, if the game has ended.
    fn winner(&self, state: &GameState) -> Option<PlayerId> {
        state.winner()
    }

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> bool {
        self.winner(state).is_some()
    }

    /// Enumerate all legal actions for a player.
    ///
    /// Empty when it is not the player's turn or the game is over.
    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action> {
        self.candidate_actions(state, player)
            .into_iter()
            .filter(|action| self.check_action(state, player, action).is_ok())
            .collect()
    }
}
