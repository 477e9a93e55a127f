#![warn(missing_debug_implementations)]
#![allow(clippy::new_without_default)]

//! The [four-in-a-row](https://en.wikipedia.org/wiki/Connect_Four) board game,
//! together with a minimax computer opponent built on a customizable heuristic.
//!
//! The game state lives behind the [Board](crate::board::Board) abstraction, so the
//! game-playing code never touches the grid directly:
//!
//! * [Connect4](crate::games::connect4::Connect4) is the standard 7x6 board.
//!     Boards are values: playing a move either mutates a board you own or, through
//!     [clone_and_play](crate::board::Board::clone_and_play), produces a fresh one
//!     and leaves the original untouched.
//! * [RandomBot](crate::ai::simple::RandomBot) picks uniformly random moves,
//!     mostly useful as a baseline opponent.
//! * [MiniMaxBot](crate::ai::minimax::MiniMaxBot) picks the best move as evaluated
//!     by a [Heuristic](crate::ai::minimax::Heuristic) at a fixed depth.
//!     The search is a plain exhaustive minimax without pruning, and its
//!     tie-breaking is deterministic: the first best-scoring move wins.
//! * [Connect4CenterHeuristic](crate::heuristic::connect4::Connect4CenterHeuristic)
//!     scores positions by how close each piece sits to the center of the board.
//!
//! Utilities that work for any [Board](crate::board::Board):
//! * Board generation functions, see [board_gen](crate::util::board_gen).
//! * A parallel bot vs bot game runner to compare playing strength,
//!     see [bot_game](crate::util::bot_game).
//! * Simple game statistics (perft, random game length) which can be used to test
//!     board implementations, see [game_stats](crate::util::game_stats).
//!
//! # Examples
//!
//! ## Play the move the bot picks on an empty board
//!
//! ```
//! use four_in_a_row::ai::minimax::MiniMaxBot;
//! use four_in_a_row::ai::Bot;
//! use four_in_a_row::board::Board;
//! use four_in_a_row::games::connect4::Connect4;
//! use four_in_a_row::heuristic::connect4::Connect4CenterHeuristic;
//!
//! let board = Connect4::default();
//! println!("{}", board);
//!
//! let mut bot = MiniMaxBot::new(4, Connect4CenterHeuristic);
//! let mv = bot.select_move(&board).unwrap();
//!
//! let next = board.clone_and_play(mv).unwrap();
//! println!("{}", next);
//! ```

pub mod board;

pub mod pov;
pub mod wdl;

pub mod ai;

pub mod games;

pub mod heuristic;

pub mod util;
