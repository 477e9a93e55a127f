use std::fmt::{Debug, Display, Formatter};
use std::ops::Range;

use internal_iterator::{Internal, IteratorExt};

use crate::board::{Board, BoardDone, BoardMoves, BruteforceMoveIterator, Outcome, PlayError, Player};

const WIDTH: u8 = 7;
const HEIGHT: u8 = 6;
const TILES: u8 = WIDTH * HEIGHT;

/// All 8 unit direction vectors `(dx, dy)`.
/// Every line of four is found from both of its end points, the redundancy only costs
/// time and never changes the classification.
const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The four-in-a-row game on the standard 7x6 board.
///
/// Tiles are stored bottom-to-top: row 0 is the bottom row, so a played piece falls to
/// the lowest empty row of its column. The outcome is recomputed from the grid on every
/// played move, it can never disagree with the tiles that produced it.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Connect4 {
    tiles: [Option<Player>; TILES as usize],
    next_player: Player,
    outcome: Option<Outcome>,
}

impl Connect4 {
    pub const WIDTH: u8 = WIDTH;
    pub const HEIGHT: u8 = HEIGHT;
    pub const TILES: u8 = TILES;

    /// The tile at `(col, row)`, with row 0 being the bottom row.
    pub fn tile(&self, col: u8, row: u8) -> Option<Player> {
        assert!(col < WIDTH && row < HEIGHT, "tile ({}, {}) out of bounds", col, row);
        self.tiles[index(col, row)]
    }

    /// The number of moves already played.
    pub fn game_length(&self) -> u32 {
        self.tiles.iter().filter(|tile| tile.is_some()).count() as u32
    }

    /// Classify the current grid as a draw, a win for either player or still in progress.
    /// This is a pure function of the tiles.
    fn compute_outcome(&self) -> Option<Outcome> {
        // the board is full iff the top row is, columns fill bottom-up
        let full = (0..WIDTH).all(|col| self.tiles[index(col, HEIGHT - 1)].is_some());
        if full {
            return Some(Outcome::Draw);
        }

        // look for a line of four starting at every occupied tile, in every direction
        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                let start = match self.tiles[index(col, row)] {
                    Some(player) => player,
                    None => continue,
                };

                for &(dx, dy) in &DIRECTIONS {
                    let line = (1..4i8).all(|i| {
                        let c = col as i8 + dx * i;
                        let r = row as i8 + dy * i;
                        in_bounds(c, r) && self.tiles[index(c as u8, r as u8)] == Some(start)
                    });

                    if line {
                        return Some(Outcome::WonBy(start));
                    }
                }
            }
        }

        None
    }
}

impl Default for Connect4 {
    fn default() -> Self {
        Connect4 {
            tiles: [None; TILES as usize],
            next_player: Player::A,
            outcome: None,
        }
    }
}

impl Board for Connect4 {
    type Move = u8;

    fn next_player(&self) -> Player {
        self.next_player
    }

    fn is_available_move(&self, mv: Self::Move) -> Result<bool, BoardDone> {
        self.check_done()?;
        Ok(mv < WIDTH && self.tiles[index(mv, HEIGHT - 1)].is_none())
    }

    fn play(&mut self, mv: Self::Move) -> Result<(), PlayError> {
        if !self.is_available_move(mv)? {
            return Err(PlayError::UnavailableMove);
        }

        // the piece falls to the lowest empty row of the column
        let row = (0..HEIGHT).find(|&row| self.tiles[index(mv, row)].is_none());
        // unwrap is safe because the column was just checked to have space left
        let row = row.unwrap();

        self.tiles[index(mv, row)] = Some(self.next_player);
        self.next_player = self.next_player.other();
        self.outcome = self.compute_outcome();

        Ok(())
    }

    fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }
}

impl<'a> BoardMoves<'a, Connect4> for Connect4 {
    type AllMovesIterator = Internal<Range<u8>>;
    type AvailableMovesIterator = BruteforceMoveIterator<'a, Connect4>;

    fn all_possible_moves() -> Self::AllMovesIterator {
        (0..WIDTH).into_internal()
    }

    fn available_moves(&'a self) -> Result<Self::AvailableMovesIterator, BoardDone> {
        BruteforceMoveIterator::new(self)
    }
}

fn index(col: u8, row: u8) -> usize {
    row as usize * WIDTH as usize + col as usize
}

fn in_bounds(col: i8, row: i8) -> bool {
    0 <= col && col < WIDTH as i8 && 0 <= row && row < HEIGHT as i8
}

impl Debug for Connect4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Connect4 {{ length: {}, next_player: {:?}, outcome: {:?} }}",
            self.game_length(),
            self.next_player,
            self.outcome
        )
    }
}

impl Display for Connect4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in (0..HEIGHT).rev() {
            for _ in 0..WIDTH {
                write!(f, "+-")?;
            }
            writeln!(f, "+")?;

            for col in 0..WIDTH {
                let c = match self.tiles[index(col, row)] {
                    None => ' ',
                    Some(Player::A) => 'x',
                    Some(Player::B) => 'o',
                };
                write!(f, "|{}", c)?;
            }
            writeln!(f, "|")?;
        }

        for _ in 0..WIDTH {
            write!(f, "+-")?;
        }
        writeln!(f, "+")?;

        Ok(())
    }
}
