use four_in_a_row::ai::simple::RandomBot;
use four_in_a_row::board::Outcome::WonBy;
use four_in_a_row::board::{Board, Outcome, PlayError, Player};
use four_in_a_row::games::connect4::Connect4;
use four_in_a_row::util::board_gen::{board_with_moves, random_board_with_condition, random_board_with_outcome};
use four_in_a_row::util::game_stats::{average_game_stats, perft};
use four_in_a_row::util::tiny::consistent_rng;

use crate::board::board_test_main;

#[test]
fn empty() {
    let board = Connect4::default();
    assert_eq!(board.next_player(), Player::A);
    assert_eq!(board.outcome(), None);

    board_test_main(&board);
}

#[test]
fn basic() {
    board_test_main(&board_with_moves(Connect4::default(), &[1]));
    board_test_main(&board_with_moves(Connect4::default(), &[1, 2]));
    board_test_main(&board_with_moves(Connect4::default(), &[1, 2, 3]));
}

#[test]
fn wins() {
    check_outcome(&[1, 1, 2, 2, 3, 3, 4], Some(WonBy(Player::A)));
    check_outcome(&[1, 2, 1, 2, 1, 2, 1], Some(WonBy(Player::A)));
    check_outcome(&[1, 2, 2, 3, 6, 3, 3, 4, 6, 4, 6, 4, 4], Some(WonBy(Player::A)));
    check_outcome(&[4, 3, 3, 2, 6, 2, 2, 1, 6, 1, 6, 1, 1], Some(WonBy(Player::A)));
}

#[test]
fn vertical_win_in_center_column() {
    // A stacks the center column while B plays harmless moves elsewhere
    check_outcome(&[3, 0, 3, 1, 3, 2, 3], Some(WonBy(Player::A)));
}

#[test]
fn draw() {
    let moves = vec![
        1, 0, 3, 0, 5, 4, 4, 4, 0, 6, 2, 0, 3, 0, 2, 6, 4, 1, 0, 3, 6, 5, 3, 1, 1, 6, 3, 5, 6, 3, 1, 4, 5, 4, 5, 1, 2,
        2, 5, 2, 2, 6,
    ];

    check_outcome(&moves, Some(Outcome::Draw));
}

#[test]
fn no_moves_on_done_board() {
    let board = board_with_moves(Connect4::default(), &[1, 2, 1, 2, 1, 2, 1]);
    assert_eq!(board.outcome(), Some(WonBy(Player::A)));

    // every column is rejected and the board stays exactly as it was
    for mv in 0..Connect4::WIDTH {
        let mut clone = board.clone();
        assert_eq!(clone.play(mv), Err(PlayError::BoardDone));
        assert_eq!(clone, board);
    }
}

#[test]
fn full_column_is_rejected() {
    let board = board_with_moves(Connect4::default(), &[3, 3, 3, 3, 3, 3]);
    assert_eq!(board.outcome(), None);
    assert_eq!(board.is_available_move(3), Ok(false));

    let mut clone = board.clone();
    assert_eq!(clone.play(3), Err(PlayError::UnavailableMove));
    assert_eq!(clone, board);

    // columns outside of the board are not available either
    assert_eq!(board.is_available_move(7), Ok(false));
    assert_eq!(clone.play(7), Err(PlayError::UnavailableMove));
    assert_eq!(clone, board);
}

#[test]
fn gravity() {
    let board = board_with_moves(Connect4::default(), &[3, 3, 2, 3]);

    assert_eq!(board.tile(3, 0), Some(Player::A));
    assert_eq!(board.tile(3, 1), Some(Player::B));
    assert_eq!(board.tile(3, 2), Some(Player::B));
    assert_eq!(board.tile(3, 3), None);
    assert_eq!(board.tile(2, 0), Some(Player::A));
    assert_eq!(board.tile(2, 1), None);
}

#[test]
fn outcome_only_depends_on_the_moves() {
    let moves = [3u8, 0, 3, 1, 3, 2, 3];

    for n in 0..=moves.len() {
        let board = board_with_moves(Connect4::default(), &moves[..n]);
        let again = board_with_moves(Connect4::default(), &moves[..n]);

        assert_eq!(board, again);
        assert_eq!(board.outcome(), again.outcome());
    }
}

#[test]
fn perft_small_depths() {
    // no game can end and no column can fill within the first 6 moves,
    // so the tree is still the full 7-ary one
    let expected = [1u64, 7, 49, 343, 2401, 16807];

    for (depth, &count) in expected.iter().enumerate() {
        assert_eq!(perft(&Connect4::default(), depth as u32), count, "wrong perft at depth {}", depth);
    }
}

#[test]
fn random_boards_reach_every_outcome() {
    let mut rng = consistent_rng();

    for &outcome in &[WonBy(Player::A), WonBy(Player::B), Outcome::Draw] {
        let board = random_board_with_outcome(&Connect4::default(), outcome, &mut rng);
        assert_eq!(board.outcome(), Some(outcome));

        board_test_main(&board);
    }
}

#[test]
fn random_midgame_boards_are_consistent() {
    let mut rng = consistent_rng();

    for _ in 0..5 {
        let board = random_board_with_condition(&Connect4::default(), &mut rng, |board| board.game_length() >= 10);
        assert!(board.game_length() >= 10);

        board_test_main(&board);
    }
}

#[test]
fn random_games_have_sane_stats() {
    let stats = average_game_stats(&Connect4::default(), RandomBot::new(consistent_rng()), 50);

    // a win takes at least 7 moves, a full board 42
    assert!(stats.game_length >= 7.0 && stats.game_length <= 42.0);
    assert!(stats.available_moves >= 1.0 && stats.available_moves <= 7.0);
}

fn check_outcome(moves: &[u8], outcome: Option<Outcome>) {
    let board = board_with_moves(Connect4::default(), moves);
    println!("moves: {:?}", moves);
    println!("{}", board);

    assert_eq!(board.outcome(), outcome);

    board_test_main(&board);
}
