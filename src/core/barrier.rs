//! Barriers and the per-cell barrier layer.
//!
//! A barrier is anchored on a single cell and never moves once placed.
//! Each cell can carry at most one barrier of each orientation, so the
//! layer is stored as a two-bit set.

use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// Barrier orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Orientation {
    /// Blocks vertical travel (up/down).
    Horizontal,
    /// Blocks lateral travel (left/right).
    Vertical,
}

impl Orientation {
    /// Single-letter tag used in rendering.
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Orientation::Horizontal => 'h',
            Orientation::Vertical => 'v',
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Orientation::Horizontal => 0b01,
            Orientation::Vertical => 0b10,
        }
    }

    pub fn all() -> impl Iterator<Item = Orientation> {
        [Orientation::Horizontal, Orientation::Vertical].into_iter()
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

/// A placed (or proposed) barrier: orientation plus anchor cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Barrier {
    pub orientation: Orientation,
    pub anchor: Coord,
}

impl Barrier {
    #[must_use]
    pub const fn new(orientation: Orientation, anchor: Coord) -> Self {
        Self { orientation, anchor }
    }

    #[must_use]
    pub const fn horizontal(anchor: Coord) -> Self {
        Self::new(Orientation::Horizontal, anchor)
    }

    #[must_use]
    pub const fn vertical(anchor: Coord) -> Self {
        Self::new(Orientation::Vertical, anchor)
    }
}

impl std::fmt::Display for Barrier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.orientation.tag(), self.anchor)
    }
}

/// Set of barrier orientations present on one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BarrierSet(u8);

impl BarrierSet {
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[must_use]
    pub const fn contains(self, orientation: Orientation) -> bool {
        self.0 & orientation.bit() != 0
    }

    pub fn insert(&mut self, orientation: Orientation) {
        self.0 |= orientation.bit();
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Orientations present, horizontal first.
    pub fn iter(self) -> impl Iterator<Item = Orientation> {
        Orientation::all().filter(move |&o| self.contains(o))
    }
}
