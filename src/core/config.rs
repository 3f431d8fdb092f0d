//! Game configuration.
//!
//! The board geometry and starting cells are fixed. What a game may tune:
//! - how many barriers each player may place over the whole game
//! - whether barrier placements must leave both tokens a path home

use serde::{Deserialize, Serialize};

/// Barriers each player may place by default.
pub const DEFAULT_BARRIER_BUDGET: usize = 10;

/// Rule configuration.
///
/// ```
/// use quoridor_engine::core::RuleConfig;
///
/// let config = RuleConfig::default().with_barrier_budget(5).require_open_path();
/// assert_eq!(config.barrier_budget, 5);
/// assert!(config.require_open_path);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Maximum barriers a single player may place over the game.
    pub barrier_budget: usize,

    /// Reject barrier placements that leave either token with no route to
    /// its goal row.
    ///
    /// Off by default: the base rules never inspect connectivity.
    pub require_open_path: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            barrier_budget: DEFAULT_BARRIER_BUDGET,
            require_open_path: false,
        }
    }
}

impl RuleConfig {
    /// Set the per-player barrier budget.
    #[must_use]
    pub fn with_barrier_budget(mut self, budget: usize) -> Self {
        self.barrier_budget = budget;
        self
    }

    /// Enable the open-path check on barrier placement.
    #[must_use]
    pub fn require_open_path(mut self) -> Self {
        self.require_open_path = true;
        self
    }
}
