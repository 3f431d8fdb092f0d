//! Scenario tests for the public game API.
//!
//! These walk through short games with the crate-level `attempt_*` calls
//! and check the observable state after each step.

use quoridor_engine::{
    attempt_move_token, attempt_place_barrier, is_winner, new_game, render, Barrier, Coord,
    GameState, Orientation, PlayerId, PlayerMap, Quoridor, QuoridorBuilder, Rejection,
};

use Orientation::{Horizontal, Vertical};
use PlayerId::{One, Two};

fn layout(one: (i32, i32), two: (i32, i32)) -> GameState {
    let tokens = PlayerMap::new(|p| match p {
        One => one.into(),
        Two => two.into(),
    });
    GameState::from_layout(tokens, []).unwrap()
}

// =============================================================================
// Token Moves
// =============================================================================

/// Test that the opening step moves the token and passes the turn.
#[test]
fn test_opening_step() {
    let mut state = new_game();

    assert!(attempt_move_token(&mut state, One, (4, 1)));
    assert_eq!(state.position(One), Coord::new(4, 1));
    assert_eq!(state.grid().token_at(Coord::new(4, 0)), None);
    assert_eq!(state.current_player(), Two);
}

/// Test that a two-step move with nothing to jump is refused.
#[test]
fn test_two_step_without_jump() {
    let mut state = new_game();
    assert!(attempt_move_token(&mut state, One, (4, 1)));
    assert!(attempt_move_token(&mut state, Two, (4, 7)));

    let before = state.clone();
    assert!(!attempt_move_token(&mut state, One, (4, 3)));
    assert_eq!(state, before);
}

/// Test jumping over an adjacent token reached through normal play.
#[test]
fn test_jump_over_adjacent_token() {
    let mut state = new_game();
    assert!(attempt_move_token(&mut state, One, (4, 1)));
    assert!(attempt_move_token(&mut state, Two, (4, 7)));
    assert!(attempt_move_token(&mut state, One, (4, 2)));
    assert!(attempt_move_token(&mut state, Two, (4, 6)));
    assert!(attempt_move_token(&mut state, One, (4, 3)));
    assert!(attempt_move_token(&mut state, Two, (4, 5)));
    assert!(attempt_place_barrier(&mut state, One, Vertical, (8, 1)));
    assert!(attempt_move_token(&mut state, Two, (4, 4)));

    assert!(attempt_move_token(&mut state, One, (4, 5)));
    assert_eq!(state.position(One), Coord::new(4, 5));
    assert_eq!(state.position(Two), Coord::new(4, 4));
}

/// Test that a token beside the mover cannot be jumped sideways.
#[test]
fn test_sideways_jump_refused() {
    let game = Quoridor::default();
    let mut state = layout((4, 4), (5, 4));
    let before = state.clone();

    assert_eq!(
        game.check_move(&state, One, (6, 4)),
        Err(Rejection::InvalidShape)
    );
    assert!(!game.attempt_move_token(&mut state, One, (6, 4)));
    assert_eq!(state, before);
}

/// Test that a barrier behind the jumped token forces the diagonal detour.
#[test]
fn test_diagonal_detour() {
    let game = Quoridor::default();
    let mut state = layout((4, 3), (4, 4));

    // Player one walls the landing cell, player two waits.
    assert!(game.attempt_place_barrier(&mut state, One, Horizontal, (4, 5)));
    assert!(game.attempt_place_barrier(&mut state, Two, Horizontal, (1, 1)));

    assert_eq!(
        game.try_move_token(&mut state, One, (4, 5)),
        Err(Rejection::PathBlocked)
    );
    assert!(game.attempt_move_token(&mut state, One, (5, 4)));
    assert_eq!(state.position(One), Coord::new(5, 4));
}

/// Test that moves are refused out of turn.
#[test]
fn test_out_of_turn() {
    let mut state = new_game();
    let before = state.clone();

    assert!(!attempt_move_token(&mut state, Two, (4, 7)));
    assert!(!attempt_place_barrier(&mut state, Two, Horizontal, (4, 4)));
    assert_eq!(state, before);
}

// =============================================================================
// Barriers
// =============================================================================

/// Test that edge placements of the restricted orientation are refused.
#[test]
fn test_edge_barriers() {
    let mut state = new_game();

    assert!(!attempt_place_barrier(&mut state, One, Vertical, (0, 3)));
    assert!(!attempt_place_barrier(&mut state, One, Horizontal, (3, 0)));
    assert_eq!(state.current_player(), One);
}

/// Test that the same barrier cannot be placed twice by either player.
#[test]
fn test_duplicate_barrier() {
    let mut state = new_game();

    assert!(attempt_place_barrier(&mut state, One, Horizontal, (4, 4)));
    assert!(!attempt_place_barrier(&mut state, Two, Horizontal, (4, 4)));
    assert!(attempt_move_token(&mut state, Two, (4, 7)));
    assert!(!attempt_place_barrier(&mut state, One, Horizontal, (4, 4)));

    // The other orientation on the same cell is its own barrier.
    assert!(attempt_place_barrier(&mut state, One, Vertical, (4, 4)));
    assert_eq!(
        state.barriers_placed(One).iter().copied().collect::<Vec<_>>(),
        vec![
            Barrier::horizontal(Coord::new(4, 4)),
            Barrier::vertical(Coord::new(4, 4)),
        ]
    );
}

/// Test that the eleventh barrier is refused.
#[test]
fn test_barrier_budget() {
    let game = Quoridor::default();
    let mut state = new_game();

    for x in 1..=8 {
        assert!(game.attempt_place_barrier(&mut state, One, Vertical, (x, 2)));
        let step = if x % 2 == 1 { (4, 7) } else { (4, 8) };
        assert!(game.attempt_move_token(&mut state, Two, step));
    }
    for x in 1..=2 {
        assert!(game.attempt_place_barrier(&mut state, One, Vertical, (x, 3)));
        let step = if x % 2 == 1 { (4, 7) } else { (4, 8) };
        assert!(game.attempt_move_token(&mut state, Two, step));
    }
    assert_eq!(state.barrier_count(One), 10);
    assert_eq!(game.barriers_remaining(&state, One), 0);

    let before = state.clone();
    assert_eq!(
        game.try_place_barrier(&mut state, One, Vertical, (5, 5)),
        Err(Rejection::BarrierBudgetExceeded)
    );
    assert_eq!(state, before);

    // Moving is still allowed.
    assert!(game.attempt_move_token(&mut state, One, (3, 0)));
}

/// Test that a smaller configured budget applies.
#[test]
fn test_configured_budget() {
    let (game, mut state) = QuoridorBuilder::new().barrier_budget(1).build();

    assert!(game.attempt_place_barrier(&mut state, One, Horizontal, (2, 2)));
    assert!(game.attempt_place_barrier(&mut state, Two, Horizontal, (6, 6)));
    assert!(!game.attempt_place_barrier(&mut state, One, Horizontal, (3, 3)));
}

/// Test that the open-path rule refuses a sealing barrier but the base rules
/// accept it.
#[test]
fn test_open_path_option() {
    let (strict, mut state) = QuoridorBuilder::new()
        .barrier_budget(10)
        .require_open_path(true)
        .build();
    let lenient = Quoridor::default();

    // Player one walls row 4 for columns 0-7 while player two shuffles
    // between (4, 7) and (4, 8).
    for x in 0..8 {
        assert!(strict.attempt_place_barrier(&mut state, One, Horizontal, (x, 4)));
        let step = if x % 2 == 0 { (4, 7) } else { (4, 8) };
        assert!(strict.attempt_move_token(&mut state, Two, step));
    }

    let mut copy = state.clone();
    assert_eq!(
        strict.try_place_barrier(&mut state, One, Horizontal, (8, 4)),
        Err(Rejection::NoPathToGoal)
    );
    assert!(lenient.attempt_place_barrier(&mut copy, One, Horizontal, (8, 4)));
}

// =============================================================================
// Winning
// =============================================================================

/// Test that reaching the far row wins and freezes the game.
#[test]
fn test_win_freezes_game() {
    let mut state = layout((3, 7), (5, 5));

    assert!(!is_winner(&state, One));
    assert!(attempt_move_token(&mut state, One, (3, 8)));
    assert!(is_winner(&state, One));
    assert!(!is_winner(&state, Two));

    let before = state.clone();
    assert!(!attempt_move_token(&mut state, Two, (5, 4)));
    assert!(!attempt_place_barrier(&mut state, Two, Horizontal, (2, 2)));
    assert!(!attempt_move_token(&mut state, One, (2, 8)));
    assert!(!attempt_place_barrier(&mut state, One, Horizontal, (2, 2)));
    assert_eq!(state, before);
}

/// Test that player two wins on row 0.
#[test]
fn test_player_two_wins() {
    let game = Quoridor::default();
    let mut state = layout((7, 7), (0, 1));

    assert!(game.attempt_move_token(&mut state, One, (7, 6)));
    assert!(game.attempt_move_token(&mut state, Two, (0, 0)));
    assert!(is_winner(&state, Two));
    assert_eq!(state.winner(), Some(Two));
}

// =============================================================================
// Rendering
// =============================================================================

/// Test that the diagnostic picture shows tokens and barriers.
#[test]
fn test_render() {
    let mut state = new_game();
    assert!(attempt_place_barrier(&mut state, One, Horizontal, (0, 1)));

    let text = render(&state);
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 10);
    assert!(lines[0].contains('1'));
    assert!(lines[1].starts_with(".h"));
    assert!(lines[8].contains('2'));
    assert!(lines[9].contains("Player 2"));
}
