//! Quoridor rules implementation.

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{Action, Barrier, Coord, GameState, Orientation, PlayerId, RuleConfig};
use crate::rules::{check_barrier, check_token_move, MoveKind, Rejection, RulesEngine};

/// Token destinations from one cell. At most five: three open steps plus
/// the two diagonals of a closed jump.
pub type TokenMoves = SmallVec<[Coord; 8]>;

/// The game's rules, parameterized by `RuleConfig`.
///
/// Holds no per-game data; one value can referee any number of independent
/// `GameState`s.
#[derive(Clone, Debug, Default)]
pub struct Quoridor {
    config: RuleConfig,
}

/// Builder for creating a Quoridor game.
#[derive(Clone, Debug, Default)]
pub struct QuoridorBuilder {
    config: RuleConfig,
}

impl QuoridorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Barriers each player may place over the game.
    pub fn barrier_budget(mut self, budget: usize) -> Self {
        self.config.barrier_budget = budget;
        self
    }

    /// Reject barriers that leave a token no way to its goal row.
    pub fn require_open_path(mut self, enabled: bool) -> Self {
        self.config.require_open_path = enabled;
        self
    }

    /// Build the rules and a fresh starting state.
    pub fn build(self) -> (Quoridor, GameState) {
        (Quoridor::with_config(self.config), GameState::new())
    }
}

impl Quoridor {
    #[must_use]
    pub fn with_config(config: RuleConfig) -> Self {
        Self { config }
    }

    /// Validate moving `player`'s token to `target`.
    pub fn check_move(
        &self,
        state: &GameState,
        player: PlayerId,
        target: impl Into<Coord>,
    ) -> Result<MoveKind, Rejection> {
        check_token_move(state, player, target.into())
    }

    /// Move `player`'s token to `target` if legal.
    pub fn try_move_token(
        &self,
        state: &mut GameState,
        player: PlayerId,
        target: impl Into<Coord>,
    ) -> Result<MoveKind, Rejection> {
        let target = target.into();
        let kind = check_token_move(state, player, target)
            .inspect_err(|reason| log_rejection(player, &Action::MoveToken(target), reason))?;
        state.apply_token_move(player, target);
        trace!(%player, %target, ?kind, "token moved");
        Ok(kind)
    }

    /// Place a barrier for `player` if legal.
    pub fn try_place_barrier(
        &self,
        state: &mut GameState,
        player: PlayerId,
        orientation: Orientation,
        anchor: impl Into<Coord>,
    ) -> Result<(), Rejection> {
        let barrier = Barrier::new(orientation, anchor.into());
        check_barrier(state, &self.config, player, barrier)
            .inspect_err(|reason| log_rejection(player, &Action::PlaceBarrier(barrier), reason))?;
        state.apply_barrier(player, barrier);
        trace!(%player, %barrier, "barrier placed");
        Ok(())
    }

    /// Boolean form of `try_move_token`.
    pub fn attempt_move_token(
        &self,
        state: &mut GameState,
        player: PlayerId,
        target: impl Into<Coord>,
    ) -> bool {
        self.try_move_token(state, player, target).is_ok()
    }

    /// Boolean form of `try_place_barrier`.
    pub fn attempt_place_barrier(
        &self,
        state: &mut GameState,
        player: PlayerId,
        orientation: Orientation,
        anchor: impl Into<Coord>,
    ) -> bool {
        self.try_place_barrier(state, player, orientation, anchor).is_ok()
    }

    /// Every cell `player`'s token may legally move to right now.
    pub fn legal_token_moves(&self, state: &GameState, player: PlayerId) -> TokenMoves {
        token_candidates(state.position(player))
            .filter(|&target| check_token_move(state, player, target).is_ok())
            .collect()
    }

    /// Barriers `player` still has the right to place.
    pub fn barriers_remaining(&self, state: &GameState, player: PlayerId) -> usize {
        state.barriers_remaining(player, self.config.barrier_budget)
    }
}

/// Every on-board cell within two steps on each axis of `origin`.
fn token_candidates(origin: Coord) -> impl Iterator<Item = Coord> {
    (-2..=2)
        .flat_map(move |dy| (-2..=2).map(move |dx| origin.offset(dx, dy)))
        .filter(|cell| cell.in_bounds())
}

fn log_rejection(player: PlayerId, action: &Action, reason: &Rejection) {
    debug!(%player, %action, %reason, "action rejected");
}

impl RulesEngine for Quoridor {
    fn config(&self) -> &RuleConfig {
        &self.config
    }

    fn check_action(
        &self,
        state: &GameState,
        player: PlayerId,
        action: &Action,
    ) -> Result<(), Rejection> {
        match *action {
            Action::MoveToken(target) => check_token_move(state, player, target).map(|_| ()),
            Action::PlaceBarrier(barrier) => check_barrier(state, &self.config, player, barrier),
        }
    }

    fn apply_action(
        &self,
        state: &mut GameState,
        player: PlayerId,
        action: &Action,
    ) -> Result<(), Rejection> {
        match *action {
            Action::MoveToken(target) => self.try_move_token(state, player, target).map(|_| ()),
            Action::PlaceBarrier(barrier) => {
                self.try_place_barrier(state, player, barrier.orientation, barrier.anchor)
            }
        }
    }

    fn candidate_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action> {
        let moves = token_candidates(state.position(player)).map(Action::MoveToken);
        let barriers = Coord::all().flat_map(|anchor| {
            Orientation::all().map(move |o| Action::PlaceBarrier(Barrier::new(o, anchor)))
        });
        moves.chain(barriers).collect()
    }
}
