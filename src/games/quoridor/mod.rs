//! Quoridor on a 9×9 board.
//!
//! - Each player has one token, starting mid-row on their baseline
//! - On your turn: move your token OR place a barrier
//! - Tokens step orthogonally, jump an adjacent token, or detour diagonally
//!   around a jump a barrier blocks
//! - First token to reach the far row wins

mod game;

pub use game::{Quoridor, QuoridorBuilder, TokenMoves};
