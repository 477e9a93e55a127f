use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::ControlFlow;
use std::panic::{RefUnwindSafe, UnwindSafe};

use internal_iterator::InternalIterator;
use rand::Rng;

/// One of the two players.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    A,
    B,
}

/// The absolute outcome for a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    WonBy(Player),
    Draw,
}

/// Error returned when an operation requires a board that is not yet done.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BoardDone;

/// Error returned when a move could not be played.
/// Callers that only care about "this move does not apply now" can treat both variants
/// the same way; the variant itself is diagnostic.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PlayError {
    BoardDone,
    UnavailableMove,
}

/// The main trait of this crate. Represents the state of a game.
/// Each game implementation is supposed to provide its own constructors to allow for
/// customizable start positions.
pub trait Board:
    'static + Debug + Display + Clone + Eq + Hash + Send + Sync + UnwindSafe + RefUnwindSafe
where
    for<'a> Self: BoardMoves<'a, Self>,
{
    /// The type used to represent moves on this board.
    type Move: Debug + Display + Eq + Ord + Hash + Copy + Send + Sync + UnwindSafe + RefUnwindSafe;

    /// Return the next player to make a move.
    /// If the board is done this is the player that did not play the last move for consistency.
    fn next_player(&self) -> Player;

    /// Return whether the given move is available.
    /// Moves outside of the valid range for this board are simply not available.
    fn is_available_move(&self, mv: Self::Move) -> Result<bool, BoardDone>;

    /// Pick a random move from the `available_moves` with a uniform distribution.
    /// Can be overridden for better performance.
    fn random_available_move(&self, rng: &mut impl Rng) -> Result<Self::Move, BoardDone> {
        let count = self.available_moves()?.count();
        let index = rng.gen_range(0..count);
        // unwrap is safe because the index is less than the length of the iterator
        Ok(self.available_moves()?.nth(index).unwrap())
    }

    /// Play the move `mv`, modifying this board.
    fn play(&mut self, mv: Self::Move) -> Result<(), PlayError>;

    /// Pick a random available move and play it.
    fn play_random_available_move(&mut self, rng: &mut impl Rng) -> Result<(), BoardDone> {
        let mv = self.random_available_move(rng)?;
        // unwrap is safe because the move was just generated as available
        self.play(mv).unwrap();
        Ok(())
    }

    /// Clone this board, play `mv` on it and return the new board.
    /// The original board is never modified, which makes this the right operation to
    /// expand search trees with: every caller keeps its own state and owns the children
    /// it creates.
    fn clone_and_play(&self, mv: Self::Move) -> Result<Self, PlayError> {
        let mut next = self.clone();
        next.play(mv)?;
        Ok(next)
    }

    /// The outcome of this board, is `None` when this game is not done yet.
    fn outcome(&self) -> Option<Outcome>;

    /// Whether this game is done.
    fn is_done(&self) -> bool {
        self.outcome().is_some()
    }

    /// Return `Err(BoardDone)` if this board is done, `Ok(())` otherwise.
    fn check_done(&self) -> Result<(), BoardDone> {
        if self.is_done() {
            Err(BoardDone)
        } else {
            Ok(())
        }
    }
}

/// A helper trait to get the correct lifetimes for [BoardMoves::available_moves].
/// This is a workaround to get generic associated types,
/// see <https://github.com/rust-lang/rust/issues/44265>.
pub trait BoardMoves<'a, B: Board> {
    type AllMovesIterator: InternalIterator<Item = B::Move>;
    type AvailableMovesIterator: InternalIterator<Item = B::Move>;

    /// All theoretically possible moves, for any possible board.
    /// Moves returned by `available_moves` will always be a subset of these moves.
    fn all_possible_moves() -> Self::AllMovesIterator;

    /// Return an iterator over the available moves, nonempty for a board that is not done.
    /// The ordering is deterministic and stays consistent when the board is not modified.
    fn available_moves(&'a self) -> Result<Self::AvailableMovesIterator, BoardDone>;
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::A, Player::B];

    pub fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Player::A => 'A',
            Player::B => 'B',
        }
    }

    /// `1` if this player is `pov`, `-1` otherwise.
    pub fn sign<V: num_traits::One + std::ops::Neg<Output = V>>(self, pov: Player) -> V {
        if self == pov {
            V::one()
        } else {
            -V::one()
        }
    }
}

impl Display for BoardDone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the board is done")
    }
}

impl Error for BoardDone {}

impl Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::BoardDone => write!(f, "the board is done"),
            PlayError::UnavailableMove => write!(f, "the move is not available"),
        }
    }
}

impl Error for PlayError {}

impl From<BoardDone> for PlayError {
    fn from(_: BoardDone) -> Self {
        PlayError::BoardDone
    }
}

/// A helper struct that implements [InternalIterator] for the available moves
/// based on [BoardMoves::all_possible_moves] and [Board::is_available_move].
/// This may be a lot slower than directly generating the available moves.
#[derive(Debug)]
pub struct BruteforceMoveIterator<'a, B: Board> {
    board: &'a B,
}

impl<'a, B: Board> BruteforceMoveIterator<'a, B> {
    pub fn new(board: &'a B) -> Result<Self, BoardDone> {
        board.check_done()?;
        Ok(BruteforceMoveIterator { board })
    }
}

impl<'a, B: Board> InternalIterator for BruteforceMoveIterator<'a, B> {
    type Item = B::Move;

    fn try_for_each<R, F>(self, mut f: F) -> ControlFlow<R>
    where
        F: FnMut(Self::Item) -> ControlFlow<R>,
    {
        B::all_possible_moves().try_for_each(|mv: B::Move| {
            // unwrap is safe because the board was checked to not be done on construction
            if self.board.is_available_move(mv).unwrap() {
                f(mv)
            } else {
                ControlFlow::Continue(())
            }
        })
    }
}
