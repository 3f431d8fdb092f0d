//! The 9×9 board as two independent layers.
//!
//! - Token layer: which player's token (if any) stands on each cell.
//! - Barrier layer: which barrier orientations are anchored on each cell.
//!
//! A cell may hold a token and barriers at the same time. Reads outside the
//! board answer "empty" so rule predicates can probe past the edge freely.

use serde::{Deserialize, Serialize};

use super::barrier::{BarrierSet, Orientation};
use super::coord::{Coord, BOARD_SIZE};
use super::player::PlayerId;

const SIZE: usize = BOARD_SIZE as usize;

/// Board layers, indexed `[row][column]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    tokens: [[Option<PlayerId>; SIZE]; SIZE],
    barriers: [[BarrierSet; SIZE]; SIZE],
}

impl Grid {
    /// Empty board: no tokens, no barriers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Token standing on `cell`, if any.
    #[must_use]
    pub fn token_at(&self, cell: Coord) -> Option<PlayerId> {
        let (x, y) = cell.to_index()?;
        self.tokens[y][x]
    }

    /// Check if any token stands on `cell`.
    #[must_use]
    pub fn has_token(&self, cell: Coord) -> bool {
        self.token_at(cell).is_some()
    }

    /// Barrier layer of `cell`.
    #[must_use]
    pub fn barriers_at(&self, cell: Coord) -> BarrierSet {
        match cell.to_index() {
            Some((x, y)) => self.barriers[y][x],
            None => BarrierSet::empty(),
        }
    }

    /// Check if `cell` carries a barrier of `orientation`.
    #[must_use]
    pub fn has_barrier(&self, cell: Coord, orientation: Orientation) -> bool {
        self.barriers_at(cell).contains(orientation)
    }

    /// Check if any cell of `row` holds `player`'s token.
    #[must_use]
    pub fn row_contains(&self, row: i32, player: PlayerId) -> bool {
        (0..BOARD_SIZE).any(|x| self.token_at(Coord::new(x, row)) == Some(player))
    }

    // === Mutation (crate-private, bounds checked by callers) ===

    pub(crate) fn set_token(&mut self, cell: Coord, token: Option<PlayerId>) {
        if let Some((x, y)) = cell.to_index() {
            self.tokens[y][x] = token;
        }
    }

    pub(crate) fn add_barrier(&mut self, cell: Coord, orientation: Orientation) {
        if let Some((x, y)) = cell.to_index() {
            self.barriers[y][x].insert(orientation);
        }
    }
}

impl std::fmt::Display for Grid {
    /// One line per row, row 0 first. Cells are `.`, `1` or `2`, followed by
    /// `h`/`v` for any barriers, padded to a fixed width.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..BOARD_SIZE {
            let mut cells = Vec::with_capacity(SIZE);
            for x in 0..BOARD_SIZE {
                let cell = Coord::new(x, y);
                let mut text = match self.token_at(cell) {
                    Some(player) => player.number().to_string(),
                    None => ".".to_string(),
                };
                text.extend(self.barriers_at(cell).iter().map(Orientation::tag));
                cells.push(format!("{:<3}", text));
            }
            writeln!(f, "{}", cells.join(" ").trim_end())?;
        }
        Ok(())
    }
}
