//! Rules: legality checks and the engine trait.
//!
//! The checkers are read-only functions of a `GameState`. Only
//! `RulesEngine::apply_action` mutates, and only after its check passes.

pub mod engine;
pub mod error;
pub mod movement;
pub mod placement;
pub mod reachability;

pub use engine::RulesEngine;
pub use error::Rejection;
pub use movement::{check_token_move, step_blocked, MoveKind};
pub use placement::check_barrier;
pub use reachability::{distance_to_goal, has_path_to_goal};
