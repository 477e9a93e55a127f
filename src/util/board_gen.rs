//! Utilities to generate a [Board] in a random state.
use rand::Rng;

use crate::board::{Board, BoardDone, Outcome};

/// Play the given moves, starting from `start`.
pub fn board_with_moves<B: Board>(start: B, moves: &[B::Move]) -> B {
    let mut curr = start;
    for &mv in moves {
        assert!(!curr.is_done(), "Board already done, playing {} on {}", mv, curr);
        assert_eq!(
            curr.is_available_move(mv),
            Ok(true),
            "Move not available, playing {} on {}",
            mv,
            curr
        );
        curr.play(mv).unwrap();
    }
    curr
}

/// Generate a board by playing `n` random moves on `start`.
pub fn random_board_with_moves<B: Board>(start: &B, n: u32, rng: &mut impl Rng) -> B {
    // this implementation could be made faster with backtracking instead of starting
    // from scratch, but that only starts to matter for very high n
    'new_try: loop {
        let mut board = start.clone();
        for _ in 0..n {
            match board.play_random_available_move(rng) {
                Ok(()) => {}
                Err(BoardDone) => continue 'new_try,
            }
        }
        return board;
    }
}

/// Generate a random board with the given [Outcome].
pub fn random_board_with_outcome<B: Board>(start: &B, outcome: Outcome, rng: &mut impl Rng) -> B {
    loop {
        let mut board = start.clone();
        loop {
            if let Some(actual) = board.outcome() {
                if actual == outcome {
                    return board;
                }
                break;
            }
            board.play_random_available_move(rng).unwrap();
        }
    }
}

/// Generate a board by playing random moves until `cond(&board)` returns true.
pub fn random_board_with_condition<B: Board>(
    start: &B,
    rng: &mut impl Rng,
    mut cond: impl FnMut(&B) -> bool,
) -> B {
    if cond(start) {
        return start.clone();
    }
    assert!(
        !start.is_done(),
        "Start board is done and does not match the condition, so nothing that does can be found"
    );

    loop {
        let mut board = start.clone();
        while let Ok(()) = board.play_random_available_move(rng) {
            if cond(&board) {
                return board;
            }
        }
    }
}
