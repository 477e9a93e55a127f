use std::io;
use std::io::BufRead;

use four_in_a_row::ai::minimax::MiniMaxBot;
use four_in_a_row::ai::Bot;
use four_in_a_row::board::{Board, Outcome, Player};
use four_in_a_row::games::connect4::Connect4;
use four_in_a_row::heuristic::connect4::Connect4CenterHeuristic;

/// How many moves ahead the computer opponent looks.
const SEARCH_DEPTH: u32 = 6;

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut board = Connect4::default();
    let mut bot = MiniMaxBot::new(SEARCH_DEPTH, Connect4CenterHeuristic);

    loop {
        println!("{}", board);

        match board.outcome() {
            None => {}
            Some(Outcome::WonBy(player)) => {
                println!("Player {} wins!", player.to_char());
                break;
            }
            Some(Outcome::Draw) => {
                println!("It's a draw!");
                break;
            }
        }

        let mv = if board.next_player() == Player::A {
            match read_column(&mut lines)? {
                Some(column) => column,
                // end of input, abort the game
                None => break,
            }
        } else {
            println!("Computer is thinking...");
            // unwrap is safe because the board is not done
            bot.select_move(&board).unwrap()
        };

        if let Err(err) = board.play(mv) {
            // full column, ask for the move again
            println!("Cannot play column {}: {}", mv + 1, err);
        }
    }

    Ok(())
}

/// Read a 1-based column number from the user and return it 0-based.
/// Unusable input is re-prompted, `None` means the input ended.
fn read_column(lines: &mut impl Iterator<Item = io::Result<String>>) -> io::Result<Option<u8>> {
    loop {
        println!("Enter a column number [1, {}]", Connect4::WIDTH);

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(None),
        };

        match line.trim().parse::<u8>() {
            Ok(column) if (1..=Connect4::WIDTH).contains(&column) => return Ok(Some(column - 1)),
            Ok(_) => println!("Column number must be in range [1, {}]", Connect4::WIDTH),
            Err(_) => println!("Please enter a number"),
        }
    }
}
