use std::sync::atomic::{AtomicU64, Ordering};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use four_in_a_row::ai::minimax::{minimax, minimax_value, Heuristic, MiniMaxBot};
use four_in_a_row::ai::simple::RandomBot;
use four_in_a_row::ai::Bot;
use four_in_a_row::board::{Board, BoardDone, Outcome, Player};
use four_in_a_row::games::connect4::Connect4;
use four_in_a_row::heuristic::connect4::Connect4CenterHeuristic;
use four_in_a_row::util::board_gen::{board_with_moves, random_board_with_moves};
use four_in_a_row::util::bot_game;
use four_in_a_row::util::tiny::consistent_rng;

#[test]
fn depth_zero_returns_the_raw_evaluation() {
    let board = board_with_moves(Connect4::default(), &[3, 2]);

    let result = minimax(&board, &Connect4CenterHeuristic, 0);
    assert_eq!(result.best_move, None);
    assert_eq!(result.value, Connect4CenterHeuristic.value(&board));
}

#[test]
fn done_board_keeps_its_fixed_value() {
    let board = board_with_moves(Connect4::default(), &[1, 2, 1, 2, 1, 2, 1]);
    assert_eq!(board.outcome(), Some(Outcome::WonBy(Player::A)));

    // whatever depth is left, a done board is worth its terminal value and yields no move
    for &depth in &[0u32, 1, 6] {
        let result = minimax(&board, &Connect4CenterHeuristic, depth);
        assert_eq!(result.best_move, None);
        assert_eq!(result.value, 1.0);
    }
}

#[test]
fn search_is_deterministic() {
    let mut rng = SmallRng::seed_from_u64(5);

    for i in 0..20 {
        let board = random_board_with_moves(&Connect4::default(), i % 10, &mut rng);

        let first = minimax(&board, &Connect4CenterHeuristic, 3);
        for _ in 0..3 {
            let again = minimax(&board, &Connect4CenterHeuristic, 3);
            assert_eq!(first.value, again.value);
            assert_eq!(first.best_move, again.best_move);
        }
    }
}

#[test]
fn takes_the_immediate_win() {
    // A already has three pieces in the center column
    let board = board_with_moves(Connect4::default(), &[3, 0, 3, 1, 3, 2]);
    assert_eq!(board.next_player(), Player::A);

    for &depth in &[1u32, 2, 6] {
        let result = minimax(&board, &Connect4CenterHeuristic, depth);
        assert_eq!(result.best_move, Some(3));
        assert_eq!(result.value, 1.0);
    }
}

#[test]
fn blocks_the_opponent_win() {
    // B must answer in the center column or A completes it
    let board = board_with_moves(Connect4::default(), &[3, 0, 3, 1, 3]);
    assert_eq!(board.next_player(), Player::B);

    for &depth in &[2u32, 4] {
        let result = minimax(&board, &Connect4CenterHeuristic, depth);
        assert_eq!(result.best_move, Some(3));
    }
}

#[test]
fn equal_moves_keep_the_first_one() {
    // with the center column full, the two columns next to it score identically,
    // so the earlier one has to win the tie
    let board = board_with_moves(Connect4::default(), &[3, 3, 3, 3, 3, 3]);
    assert_eq!(board.next_player(), Player::A);

    let result = minimax(&board, &Connect4CenterHeuristic, 1);
    assert_eq!(result.best_move, Some(2));
}

#[test]
fn heuristic_stays_inside_the_terminal_range() {
    let mut rng = SmallRng::seed_from_u64(17);

    for i in 0..30 {
        let board = random_board_with_moves(&Connect4::default(), i % 12, &mut rng);
        let value = Connect4CenterHeuristic.value(&board);

        match board.outcome() {
            None => assert!(
                -1.0 < value && value < 1.0,
                "non-terminal value {} out of range on\n{}",
                value,
                board
            ),
            Some(Outcome::WonBy(Player::A)) => assert_eq!(value, 1.0),
            Some(Outcome::WonBy(Player::B)) => assert_eq!(value, -1.0),
            Some(Outcome::Draw) => assert_eq!(value, 0.0),
        }
    }
}

#[test]
fn value_only_search_matches() {
    let board = board_with_moves(Connect4::default(), &[3, 2, 4]);

    assert_eq!(
        minimax_value(&board, &Connect4CenterHeuristic, 3),
        minimax(&board, &Connect4CenterHeuristic, 3).value,
    );
}

#[test]
fn bot_refuses_a_done_board() {
    let board = board_with_moves(Connect4::default(), &[1, 2, 1, 2, 1, 2, 1]);

    let mut bot = MiniMaxBot::new(3, Connect4CenterHeuristic);
    assert_eq!(bot.select_move(&board), Err(BoardDone));

    let mut random = RandomBot::new(consistent_rng());
    assert_eq!(random.select_move(&board), Err(BoardDone));
}

#[test]
fn minimax_beats_random() {
    let counter = AtomicU64::new(0);

    let result = bot_game::run(
        || {
            // a different shallow opening for every game pair
            let seed = counter.fetch_add(1, Ordering::Relaxed);
            random_board_with_moves(&Connect4::default(), 2, &mut SmallRng::seed_from_u64(seed))
        },
        || MiniMaxBot::new(4, Connect4CenterHeuristic),
        || RandomBot::new(SmallRng::seed_from_u64(42)),
        10,
        true,
    );

    println!("{:?}", result);

    assert_eq!(result.game_count, 20);
    assert_eq!(result.wdl_l.sum(), 20);
    assert!(
        result.wdl_l.win > result.wdl_l.loss,
        "expected the searching bot to dominate, got {:?}",
        result.wdl_l
    );
    assert!(result.average_game_length >= 4.0 && result.average_game_length <= 40.0);
}
