//! A simple baseline bot: [RandomBot].
use std::fmt::{Debug, Formatter};

use rand::Rng;

use crate::ai::Bot;
use crate::board::{Board, BoardDone};

/// Bot that chooses moves randomly uniformly among the available moves.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> Debug for RandomBot<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RandomBot")
    }
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        RandomBot { rng }
    }
}

impl<B: Board, R: Rng> Bot<B> for RandomBot<R> {
    fn select_move(&mut self, board: &B) -> Result<B::Move, BoardDone> {
        board.random_available_move(&mut self.rng)
    }
}
