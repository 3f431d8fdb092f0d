//! Core types: players, coordinates, barriers, grid, actions, state,
//! configuration.
//!
//! These are plain data. Legality lives in `rules`.

pub mod player;
pub mod coord;
pub mod barrier;
pub mod grid;
pub mod action;
pub mod config;
pub mod state;

pub use player::{PlayerId, PlayerMap};
pub use coord::{Coord, BOARD_SIZE};
pub use barrier::{Barrier, BarrierSet, Orientation};
pub use grid::Grid;
pub use action::{Action, ActionRecord};
pub use config::{RuleConfig, DEFAULT_BARRIER_BUDGET};
pub use state::GameState;
