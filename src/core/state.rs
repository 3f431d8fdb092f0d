//! Game state.
//!
//! ## GameState
//!
//! The authoritative record of a game:
//! - Grid (token layer + barrier layer)
//! - Token position per player
//! - Barrier ledger per player, in placement order
//! - Whose turn it is
//! - Action history
//!
//! Everything is publicly readable. Mutation goes through the rules engine,
//! which validates first and then calls the crate-private appliers here, so
//! a rejected action never touches the state.
//!
//! Ledgers and history use `im` persistent vectors so cloning a state for
//! look-ahead is cheap.
//!
//! Deserialization rebuilds the board from positions and ledgers and
//! refuses snapshots whose stored grid or barrier index disagree.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Deserializer, Serialize};

use super::action::{Action, ActionRecord};
use super::barrier::Barrier;
use super::coord::Coord;
use super::grid::Grid;
use super::player::{PlayerId, PlayerMap};
use crate::rules::Rejection;

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameState {
    grid: Grid,

    /// Token position per player. Always matches the grid's token layer.
    positions: PlayerMap<Coord>,

    /// Barriers placed by each player, oldest first.
    ledgers: PlayerMap<Vector<Barrier>>,

    /// Every placed barrier, for O(1) duplicate checks.
    placed: FxHashSet<Barrier>,

    current_player: PlayerId,

    history: Vector<ActionRecord>,
}

/// Serialized form of `GameState`, validated before use.
#[derive(Deserialize)]
struct Snapshot {
    grid: Grid,
    positions: PlayerMap<Coord>,
    ledgers: PlayerMap<Vector<Barrier>>,
    placed: FxHashSet<Barrier>,
    current_player: PlayerId,
    history: Vector<ActionRecord>,
}

impl<'de> Deserialize<'de> for GameState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let snapshot = Snapshot::deserialize(deserializer)?;
        Self::from_snapshot(snapshot).map_err(serde::de::Error::custom)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game: both tokens on their baselines, no barriers, player one
    /// to move.
    #[must_use]
    pub fn new() -> Self {
        let mut grid = Grid::new();
        for player in PlayerId::all() {
            grid.set_token(player.start(), Some(player));
        }

        Self {
            grid,
            positions: PlayerMap::new(PlayerId::start),
            ledgers: PlayerMap::with_default(),
            placed: FxHashSet::default(),
            current_player: PlayerId::One,
            history: Vector::new(),
        }
    }

    /// Mid-game position for puzzles, replays and tests.
    ///
    /// Tokens stand on `tokens`, each `(owner, barrier)` is recorded in the
    /// owner's ledger in the given order, and player one is to move. Only
    /// structural invariants are checked: cells on the board, distinct token
    /// cells, no barrier placed twice.
    pub fn from_layout(
        tokens: PlayerMap<Coord>,
        barriers: impl IntoIterator<Item = (PlayerId, Barrier)>,
    ) -> Result<Self, Rejection> {
        let (one, two) = (tokens[PlayerId::One], tokens[PlayerId::Two]);
        if !one.in_bounds() || !two.in_bounds() {
            return Err(Rejection::OutOfBounds);
        }
        if one == two {
            return Err(Rejection::CellOccupied);
        }

        let mut grid = Grid::new();
        for (player, &cell) in tokens.iter() {
            grid.set_token(cell, Some(player));
        }

        let mut ledgers: PlayerMap<Vector<Barrier>> = PlayerMap::with_default();
        let mut placed = FxHashSet::default();
        for (owner, barrier) in barriers {
            if !barrier.anchor.in_bounds() {
                return Err(Rejection::OutOfBounds);
            }
            if !placed.insert(barrier) {
                return Err(Rejection::DuplicateBarrier);
            }
            ledgers[owner].push_back(barrier);
            grid.add_barrier(barrier.anchor, barrier.orientation);
        }

        Ok(Self {
            grid,
            positions: tokens,
            ledgers,
            placed,
            current_player: PlayerId::One,
            history: Vector::new(),
        })
    }

    fn from_snapshot(snapshot: Snapshot) -> Result<Self, Rejection> {
        let ledgers = &snapshot.ledgers;
        let barriers =
            PlayerId::all().flat_map(move |p| ledgers[p].iter().map(move |&b| (p, b)));
        let mut state = Self::from_layout(snapshot.positions, barriers)?;

        if state.grid != snapshot.grid || state.placed != snapshot.placed {
            return Err(Rejection::InconsistentState);
        }

        state.current_player = snapshot.current_player;
        state.history = snapshot.history;
        Ok(state)
    }

    // === Read Accessors ===

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cell the player's token stands on.
    #[must_use]
    pub fn position(&self, player: PlayerId) -> Coord {
        self.positions[player]
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Barriers placed by `player`, oldest first.
    #[must_use]
    pub fn barriers_placed(&self, player: PlayerId) -> &Vector<Barrier> {
        &self.ledgers[player]
    }

    #[must_use]
    pub fn barrier_count(&self, player: PlayerId) -> usize {
        self.ledgers[player].len()
    }

    /// Barriers `player` may still place under `budget`.
    #[must_use]
    pub fn barriers_remaining(&self, player: PlayerId, budget: usize) -> usize {
        budget.saturating_sub(self.barrier_count(player))
    }

    /// Check if either player has already placed `barrier`.
    #[must_use]
    pub fn is_barrier_placed(&self, barrier: &Barrier) -> bool {
        self.placed.contains(barrier)
    }

    /// Every applied action, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    // === Win Detection ===

    /// Check if `player`'s token stands anywhere on its goal row.
    ///
    /// Computed from the grid on every call.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.grid.row_contains(player.goal_row(), player)
    }

    /// The winning player, if the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        PlayerId::all().find(|&p| self.is_winner(p))
    }

    // === Appliers (called by the rules engine after validation) ===

    /// Relocate `player`'s token, keeping barrier layers in place.
    pub(crate) fn apply_token_move(&mut self, player: PlayerId, target: Coord) {
        let origin = self.positions[player];
        self.grid.set_token(origin, None);
        self.grid.set_token(target, Some(player));
        self.positions[player] = target;
        self.finish_action(player, Action::MoveToken(target));
    }

    /// Record `barrier` in the mover's ledger and mark its anchor cell.
    pub(crate) fn apply_barrier(&mut self, player: PlayerId, barrier: Barrier) {
        self.ledgers[player].push_back(barrier);
        self.placed.insert(barrier);
        self.grid.add_barrier(barrier.anchor, barrier.orientation);
        self.finish_action(player, Action::PlaceBarrier(barrier));
    }

    fn finish_action(&mut self, player: PlayerId, action: Action) {
        let sequence = self.history.len() as u32;
        self.history.push_back(ActionRecord::new(player, action, sequence));
        self.toggle_turn();
    }

    fn toggle_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Barrier layer of a hypothetical state with `barrier` added.
    pub(crate) fn grid_with(&self, barrier: Barrier) -> Grid {
        let mut grid = self.grid.clone();
        grid.add_barrier(barrier.anchor, barrier.orientation);
        grid
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.grid)?;
        writeln!(
            f,
            "to move: {} | barriers: {} / {}",
            self.current_player,
            self.barrier_count(PlayerId::One),
            self.barrier_count(PlayerId::Two),
        )
    }
}
