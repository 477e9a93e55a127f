//! Utilities to run bots against each other and report the results.
use std::fmt::{Debug, Formatter};

use itertools::Itertools;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::ai::Bot;
use crate::board::{Board, Outcome, Player};
use crate::pov::NonPov;
use crate::util::rating::elo_from_wdl;
use crate::wdl::WDL;

/// Run `bot_l` against `bot_r` on boards given by `start`.
///
/// `games_per_side` games are played, doubled if `both_sides` is true, in which case
/// each start position is played twice with the bots switching sides. Games run in
/// parallel, each on its own pair of freshly constructed bots; this is safe because
/// every game owns its board and never shares state with its siblings.
#[must_use]
pub fn run<B: Board, L: Bot<B>, R: Bot<B>>(
    start: impl Fn() -> B + Sync,
    bot_l: impl Fn() -> L + Sync,
    bot_r: impl Fn() -> R + Sync,
    games_per_side: u32,
    both_sides: bool,
) -> BotGameResult {
    // instantiate both bots once so construction errors show up before the fan-out
    let debug_l = format!("{:?}", bot_l());
    let debug_r = format!("{:?}", bot_r());

    let game_count = if both_sides { 2 * games_per_side } else { games_per_side };
    let starts = (0..games_per_side).map(|_| start()).collect_vec();

    let games: Vec<GameReport> = (0..game_count)
        .into_par_iter()
        .map(|game_i| {
            let flip = both_sides && game_i % 2 == 1;
            let pair_i = if both_sides { game_i / 2 } else { game_i };

            play_single_game(&starts[pair_i as usize], flip, &mut bot_l(), &mut bot_r())
        })
        .collect();

    let wdl_l: WDL<u32> = games.iter().map(|game| game.outcome.pov(game.player_l).to_wdl()).sum();
    let average_game_length = games.iter().map(|game| game.length as f32).sum::<f32>() / game_count as f32;

    BotGameResult {
        game_count,
        average_game_length,
        wdl_l,
        debug_l,
        debug_r,
    }
}

fn play_single_game<B: Board>(
    start: &B,
    flip: bool,
    bot_l: &mut impl Bot<B>,
    bot_r: &mut impl Bot<B>,
) -> GameReport {
    let mut board = start.clone();
    let player_l = if flip {
        board.next_player().other()
    } else {
        board.next_player()
    };

    let mut length = 0;

    let outcome = loop {
        match board.outcome() {
            Some(outcome) => break outcome,
            None => {
                // unwrap is safe because the board is not done
                let mv = if board.next_player() == player_l {
                    bot_l.select_move(&board)
                } else {
                    bot_r.select_move(&board)
                }
                .unwrap();

                board.play(mv).unwrap();
                length += 1;
            }
        }
    };

    GameReport {
        player_l,
        outcome,
        length,
    }
}

struct GameReport {
    player_l: Player,
    outcome: Outcome,
    length: u32,
}

/// Structure returned by [run].
pub struct BotGameResult {
    pub game_count: u32,
    pub average_game_length: f32,

    /// Win/draw/loss counts from the left bot's point of view.
    pub wdl_l: WDL<u32>,

    pub debug_l: String,
    pub debug_r: String,
}

impl Debug for BotGameResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "BotGameResult {{")?;
        writeln!(
            f,
            "  {} games, average length {}",
            self.game_count, self.average_game_length
        )?;
        writeln!(f, "  left      {:?}", self.wdl_l)?;
        writeln!(f, "  left      {:.3?}", self.wdl_l.cast::<f32>() / self.game_count as f32)?;
        writeln!(f, "  left elo: {:.1}", elo_from_wdl(self.wdl_l.cast::<f32>()))?;
        writeln!(f, "  left:     {}", self.debug_l)?;
        writeln!(f, "  right:    {}", self.debug_r)?;
        writeln!(f, "}}")?;

        Ok(())
    }
}
