use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

use internal_iterator::InternalIterator;

use crate::ai::Bot;
use crate::board::{Board, BoardDone, Player};

/// A strategy that assigns a value to a board, used by [minimax] at the depth frontier.
/// Implementations can be swapped without touching the search itself.
pub trait Heuristic<B: Board> {
    /// The type used to represent the value of a board.
    type V: Copy + PartialOrd;

    /// Return the value of the given board, always from the point of view of [Player::A]:
    /// higher is better for A, lower is better for B.
    /// Boards that are done must map to fixed values, independent of any search depth.
    fn value(&self, board: &B) -> Self::V;
}

/// The result of a minimax search.
#[derive(Debug)]
pub struct MinimaxResult<V, M> {
    /// The value of this board.
    pub value: V,

    /// The best move to play, `None` if the board is done or the search depth was 0.
    /// This is distinct from any real move, so a missing move can never be mistaken
    /// for the first column.
    pub best_move: Option<M>,
}

/// Evaluate the board using plain minimax with the given heuristic up to the given depth.
///
/// The search is exhaustive, there is no pruning. The side to move maximizes the
/// A-relative heuristic value when it is A's turn and minimizes it when it is B's turn.
/// Ties break deterministically: only a strictly better child replaces the current best,
/// so the first best-scoring move wins and repeated searches return the same result.
///
/// A board that is already done evaluates to its fixed heuristic value immediately,
/// whatever the remaining depth.
pub fn minimax<B: Board, H: Heuristic<B>>(board: &B, heuristic: &H, depth: u32) -> MinimaxResult<H::V, B::Move> {
    minimax_recurse(heuristic, board, depth)
}

/// Evaluate the board using minimax with the given heuristic up to the given depth.
/// Only returns the value without selecting a move.
pub fn minimax_value<B: Board, H: Heuristic<B>>(board: &B, heuristic: &H, depth: u32) -> H::V {
    minimax_recurse(heuristic, board, depth).value
}

fn minimax_recurse<B: Board, H: Heuristic<B>>(
    heuristic: &H,
    board: &B,
    depth_left: u32,
) -> MinimaxResult<H::V, B::Move> {
    if board.is_done() || depth_left == 0 {
        return MinimaxResult {
            value: heuristic.value(board),
            best_move: None,
        };
    }

    let maximizing = board.next_player() == Player::A;

    let mut best: Option<(H::V, B::Move)> = None;

    // unwrap is safe because the board is not done
    board.available_moves().unwrap().for_each(|mv: B::Move| {
        // unwrap is safe because the move was generated as available
        let child = board.clone_and_play(mv).unwrap();
        let child_value = minimax_recurse(heuristic, &child, depth_left - 1).value;

        // strict comparison: an equal-scoring later move never displaces an earlier best
        let better = match best {
            None => true,
            Some((best_value, _)) => {
                if maximizing {
                    child_value > best_value
                } else {
                    child_value < best_value
                }
            }
        };

        if better {
            best = Some((child_value, mv));
        }
    });

    match best {
        Some((value, mv)) => MinimaxResult {
            value,
            best_move: Some(mv),
        },
        // no child could be expanded, degrade to evaluating the board itself
        None => MinimaxResult {
            value: heuristic.value(board),
            best_move: None,
        },
    }
}

/// A [Bot] that plays the move selected by [minimax].
/// Fully deterministic: the same board and depth always yield the same move.
pub struct MiniMaxBot<B: Board, H: Heuristic<B>> {
    depth: u32,
    heuristic: H,
    ph: PhantomData<B>,
}

impl<B: Board, H: Heuristic<B> + Debug> Debug for MiniMaxBot<B, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MiniMaxBot {{ depth: {}, heuristic: {:?} }}",
            self.depth, self.heuristic
        )
    }
}

impl<B: Board, H: Heuristic<B>> MiniMaxBot<B, H> {
    pub fn new(depth: u32, heuristic: H) -> Self {
        assert!(depth > 0, "requires depth>0 to find the best move");
        MiniMaxBot {
            depth,
            heuristic,
            ph: PhantomData,
        }
    }
}

impl<B: Board, H: Heuristic<B> + Debug> Bot<B> for MiniMaxBot<B, H> {
    fn select_move(&mut self, board: &B) -> Result<B::Move, BoardDone> {
        board.check_done()?;

        // unwrap is safe because depth > 0 and the board is not done,
        // so at least one child was expanded and the first one became the best move
        Ok(minimax(board, &self.heuristic, self.depth).best_move.unwrap())
    }
}
