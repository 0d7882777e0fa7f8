//! Self-play game generation.
//!
//! Plays the engine against a uniformly random opponent to measure its
//! strength. Each game starts from a position reached by a number of random
//! opening plies, then the engine side searches every move while the
//! opponent picks at random. Only per-game results are kept: final box
//! counts and search effort, not the moves themselves.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::board::{Board, Player};
use crate::eval::is_leaf;
use crate::movegen::random_move;
use crate::resolve::{apply, MoveError};
use crate::search::{select_move, Algorithm, MAX_DEPTH};

/// Configuration for self-play game generation.
#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Random plies played before the engine takes over.
    pub opening_plies: usize,
    /// Search algorithm for the engine side.
    pub algorithm: Algorithm,
    /// Search depth bound.
    pub depth: u32,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 10,
            opening_plies: 30,
            algorithm: Algorithm::AlphaBeta,
            depth: MAX_DEPTH,
            threads: 4,
            seed: 0,
        }
    }
}

/// Errors that abort a self-play run.
#[derive(Debug, thiserror::Error)]
pub enum SelfPlayError {
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Outcome of one self-play game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub game_id: usize,
    /// Plies played after the random opening.
    pub plies: usize,
    /// Plies the engine searched.
    pub engine_moves: usize,
    pub engine_boxes: usize,
    pub opponent_boxes: usize,
    /// `None` on an 8-8 draw.
    pub winner: Option<Player>,
    /// Search nodes visited across all engine moves.
    pub nodes: u64,
}

/// Plays `plies` random moves from the empty board, starting with the engine
/// side. Returns the board and the side to move next.
pub fn random_position(plies: usize, rng: &mut SmallRng) -> Result<(Board, Player), MoveError> {
    let mut board = Board::empty();
    let mut to_move = Player::Engine;
    for _ in 0..plies {
        let Some(mv) = random_move(&board, rng) else {
            break;
        };
        let t = apply(&board, mv, to_move)?;
        board = t.board;
        if !t.box_completed {
            to_move = to_move.other();
        }
    }
    Ok((board, to_move))
}

/// Plays a single self-play game and returns its result.
pub fn play_game(
    config: &SelfPlayConfig,
    game_id: usize,
    rng: &mut SmallRng,
) -> Result<GameResult, MoveError> {
    let (mut board, mut to_move) = random_position(config.opening_plies, rng)?;
    let mut plies = 0;
    let mut engine_moves = 0;
    let mut nodes = 0u64;

    while !is_leaf(&board) {
        let mv = match to_move {
            Player::Engine => {
                let Some(result) = select_move(&board, config.algorithm, config.depth)? else {
                    break;
                };
                nodes += result.stats.nodes;
                engine_moves += 1;
                result.best.mv
            }
            Player::Opponent => {
                let Some(mv) = random_move(&board, rng) else {
                    break;
                };
                mv
            }
        };

        let t = apply(&board, mv, to_move)?;
        plies += 1;
        board = t.board;
        if !t.box_completed {
            to_move = to_move.other();
        }
    }

    let engine_boxes = board.owned_by(Player::Engine);
    let opponent_boxes = board.owned_by(Player::Opponent);
    let winner = match engine_boxes.cmp(&opponent_boxes) {
        std::cmp::Ordering::Greater => Some(Player::Engine),
        std::cmp::Ordering::Less => Some(Player::Opponent),
        std::cmp::Ordering::Equal => None,
    };

    Ok(GameResult {
        game_id,
        plies,
        engine_moves,
        engine_boxes,
        opponent_boxes,
        winner,
        nodes,
    })
}

/// Returns the RNG for game `game_id`. Seeded runs are reproducible
/// regardless of thread count.
fn game_rng(config: &SelfPlayConfig, game_id: usize) -> SmallRng {
    if config.seed != 0 {
        SmallRng::seed_from_u64(config.seed.wrapping_add(game_id as u64))
    } else {
        SmallRng::from_entropy()
    }
}

fn play_logged(
    config: &SelfPlayConfig,
    game_id: usize,
    completed: &AtomicUsize,
) -> Result<GameResult, MoveError> {
    let game_start = Instant::now();
    let game = play_game(config, game_id, &mut game_rng(config, game_id))?;
    let n = completed.fetch_add(1, Ordering::Relaxed) + 1;
    info!(
        game = n,
        of = config.num_games,
        engine = game.engine_boxes,
        opponent = game.opponent_boxes,
        secs = game_start.elapsed().as_secs_f64(),
        "game finished"
    );
    Ok(game)
}

/// Runs self-play, producing one result per game in game order.
///
/// When `config.threads > 1`, games are played concurrently using rayon.
pub fn run_self_play(config: &SelfPlayConfig) -> Result<Vec<GameResult>, SelfPlayError> {
    let completed = AtomicUsize::new(0);

    if config.threads <= 1 {
        return (0..config.num_games)
            .map(|i| play_logged(config, i, &completed))
            .collect::<Result<_, _>>()
            .map_err(SelfPlayError::from);
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;
    let games = pool.install(|| {
        (0..config.num_games)
            .into_par_iter()
            .map(|i| play_logged(config, i, &completed))
            .collect::<Result<Vec<_>, _>>()
    })?;
    Ok(games)
}

/// Writes game results as JSONL (one JSON object per game, one per line).
pub fn write_jsonl<W: Write>(games: &[GameResult], out: &mut W) -> std::io::Result<()> {
    for game in games {
        serde_json::to_writer(&mut *out, game)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Aggregate results of a self-play run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub games: usize,
    pub engine_wins: usize,
    pub opponent_wins: usize,
    pub draws: usize,
    /// Mean of engine boxes minus opponent boxes.
    pub avg_margin: f64,
}

/// Summarises a set of game results.
pub fn summarize(games: &[GameResult]) -> Summary {
    let mut summary = Summary {
        games: games.len(),
        ..Summary::default()
    };
    let mut margin = 0i64;
    for game in games {
        match game.winner {
            Some(Player::Engine) => summary.engine_wins += 1,
            Some(Player::Opponent) => summary.opponent_wins += 1,
            None => summary.draws += 1,
        }
        margin += game.engine_boxes as i64 - game.opponent_boxes as i64;
    }
    summary.avg_margin = margin as f64 / games.len().max(1) as f64;
    summary
}

/// Prints a summary of self-play results to `out`.
pub fn print_summary<W: Write>(games: &[GameResult], out: &mut W) -> std::io::Result<()> {
    let s = summarize(games);
    let pct = |n: usize| 100.0 * n as f64 / s.games.max(1) as f64;
    writeln!(out, "=== Self-Play Summary ===")?;
    writeln!(out, "Games: {}", s.games)?;
    writeln!(out, "Engine wins: {} ({:.1}%)", s.engine_wins, pct(s.engine_wins))?;
    writeln!(out, "Opponent wins: {} ({:.1}%)", s.opponent_wins, pct(s.opponent_wins))?;
    writeln!(out, "Draws: {} ({:.1}%)", s.draws, pct(s.draws))?;
    writeln!(out, "Avg margin: {:+.2}", s.avg_margin)
}
