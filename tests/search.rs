//! Property tests over random late-game positions.
//!
//! Positions come from seeded random play, leaving few enough edges that a
//! full-depth search stays fast.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use boxline::board::{Board, Edge, Player, PHYSICAL_EDGE_COUNT};
use boxline::eval::{evaluate, is_leaf};
use boxline::movegen::legal_moves;
use boxline::protocol::{encode_board, parse_board};
use boxline::resolve::apply;
use boxline::search::{select_move, Algorithm, MAX_DEPTH};
use boxline::selfplay::random_position;

const OPENING_PLIES: usize = 34;

fn late_positions(count: u64) -> Vec<Board> {
    (0..count)
        .map(|seed| {
            let mut rng = SmallRng::seed_from_u64(seed);
            random_position(OPENING_PLIES, &mut rng).unwrap().0
        })
        .collect()
}

/// Counts undrawn physical edges, naming each by its top or left side.
fn undrawn_edges(board: &Board) -> usize {
    legal_moves(board)
        .iter()
        .filter(|m| match m.edge {
            Edge::Top | Edge::Left => true,
            Edge::Right => m.x == 3,
            Edge::Bottom => m.y == 3,
        })
        .count()
}

#[test]
fn alphabeta_matches_minimax() {
    for board in late_positions(12) {
        let mm = select_move(&board, Algorithm::Minimax, MAX_DEPTH).unwrap().unwrap();
        let ab = select_move(&board, Algorithm::AlphaBeta, MAX_DEPTH).unwrap().unwrap();
        assert_eq!(mm.scores, ab.scores, "board {}", encode_board(&board));
        assert_eq!(mm.best, ab.best);
        assert!(ab.stats.nodes <= mm.stats.nodes);
    }
}

#[test]
fn best_is_first_highest_score() {
    for board in late_positions(12) {
        let result = select_move(&board, Algorithm::AlphaBeta, MAX_DEPTH).unwrap().unwrap();
        let top = result.scores.iter().map(|s| s.score).max().unwrap();
        let first = result.scores.iter().find(|s| s.score == top).unwrap();
        assert_eq!(&result.best, first);
        assert_eq!(result.scores.len(), legal_moves(&board).len());
    }
}

#[test]
fn full_depth_scores_are_final_margins() {
    // At full depth every line ends on a finished board, so each score is a
    // difference of box counts with 16 boxes in total.
    for board in late_positions(8) {
        let result = select_move(&board, Algorithm::AlphaBeta, MAX_DEPTH).unwrap().unwrap();
        for scored in &result.scores {
            assert!(scored.score.abs() <= 16);
            assert_eq!(scored.score.rem_euclid(2), 0, "16 boxes split into an even margin");
        }
        assert!(result.stats.min_depth > 0);
    }
}

#[test]
fn shallow_search_scores_stay_near_static() {
    for board in late_positions(8) {
        let result = select_move(&board, Algorithm::Minimax, 1).unwrap().unwrap();
        let base = evaluate(&board);
        for scored in &result.scores {
            // One ply can complete at most two boxes.
            assert!((scored.score - base).abs() <= 2);
        }
        assert_eq!(result.stats.min_depth, 0);
    }
}

#[test]
fn legal_moves_cover_undrawn_edges() {
    for board in late_positions(16) {
        assert_eq!(undrawn_edges(&board), PHYSICAL_EDGE_COUNT - OPENING_PLIES);
        for mv in legal_moves(&board) {
            let (x, y) = (mv.x as usize, mv.y as usize);
            assert!(board.is_open(x, y));
            assert!(!board.edges_of(x, y).contains(mv.edge));
        }
    }
}

#[test]
fn each_move_draws_one_physical_edge() {
    for board in late_positions(16) {
        let before = undrawn_edges(&board);
        for mv in legal_moves(&board) {
            let t = apply(&board, mv, Player::Engine).unwrap();
            assert_eq!(undrawn_edges(&t.board), before - 1);
            let gained = t.board.owned_by(Player::Engine) - board.owned_by(Player::Engine);
            assert_eq!(t.box_completed, gained > 0);
            assert_eq!(parse_board(&encode_board(&t.board)), Ok(t.board));
        }
    }
}

#[test]
fn playing_out_ends_in_a_leaf() {
    for mut board in late_positions(4) {
        let mut plies = 0;
        while let Some(result) = select_move(&board, Algorithm::AlphaBeta, MAX_DEPTH).unwrap() {
            board = apply(&board, result.best.mv, Player::Engine).unwrap().board;
            plies += 1;
        }
        assert!(is_leaf(&board));
        assert_eq!(plies, PHYSICAL_EDGE_COUNT - OPENING_PLIES);
        assert_eq!(board.owned_by(Player::Engine) + board.owned_by(Player::Opponent), 16);
    }
}
