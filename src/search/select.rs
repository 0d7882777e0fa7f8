//! Root move selection.
//!
//! Every legal move on the board gets its own search, rooted at a node whose
//! only candidate is that move, with the engine on move. The root list is
//! never narrowed; candidate heuristics only apply below it.

use serde::Serialize;
use tracing::debug;

use super::{Algorithm, SearchNode, SearchStats};
use crate::board::{Board, ScoredMove};
use crate::movegen::legal_moves;
use crate::resolve::MoveError;

/// Outcome of a root move selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Highest-scoring root move; the earliest generated wins ties.
    pub best: ScoredMove,
    /// Every root move with its backed-up score, in generation order.
    pub scores: Vec<ScoredMove>,
    pub stats: SearchStats,
}

/// Picks the engine's move on `board`.
///
/// Returns `Ok(None)` when the board is finished.
pub fn select_move(
    board: &Board,
    algorithm: Algorithm,
    depth: u32,
) -> Result<Option<SearchResult>, MoveError> {
    let mut stats = SearchStats::default();
    let mut scores = Vec::new();
    let mut best: Option<ScoredMove> = None;

    for mv in legal_moves(board) {
        let root = SearchNode::new(*board, vec![mv]);
        let score = algorithm.search(&root, depth, true, &mut stats)?;
        debug!(%mv, score, "root move scored");

        let scored = ScoredMove { mv, score };
        if best.map_or(true, |b| score > b.score) {
            best = Some(scored);
        }
        scores.push(scored);
    }

    let Some(best) = best else {
        return Ok(None);
    };
    debug!(
        %algorithm,
        best = %best.mv,
        score = best.score,
        nodes = stats.nodes,
        min_depth = stats.min_depth,
        "search complete"
    );
    Ok(Some(SearchResult { best, scores, stats }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Edge, Move};
    use crate::protocol::parse_board;
    use crate::search::MAX_DEPTH;

    const FREE_BOX_AND_CHAIN: &str = "lr,E,E,O/rb,O,E,O/E,O,E,O/E,E,O,tbl";

    #[test]
    fn finished_board_has_no_move() {
        let board = parse_board("E,E,E,E/E,E,E,E/O,O,O,O/O,O,O,O").unwrap();
        assert_eq!(select_move(&board, Algorithm::AlphaBeta, MAX_DEPTH), Ok(None));
    }

    #[test]
    fn takes_free_box_before_conceding_chain() {
        let board = parse_board(FREE_BOX_AND_CHAIN).unwrap();
        for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
            let result = select_move(&board, algorithm, MAX_DEPTH).unwrap().unwrap();
            assert_eq!(result.best.mv, Move::new(3, 3, Edge::Right));
            assert_eq!(result.best.score, 0);
            assert_eq!(result.scores.len(), 5);
            assert!(result.scores.iter().filter(|s| s.mv != result.best.mv).all(|s| s.score == -2));
        }
    }

    #[test]
    fn ties_go_to_first_generated_move() {
        // Both names of the shared edge close both boxes.
        let board = parse_board("tbl,trb,E,O/E,O,E,O/E,O,E,O/E,O,E,O").unwrap();
        let result = select_move(&board, Algorithm::AlphaBeta, MAX_DEPTH).unwrap().unwrap();
        assert_eq!(result.scores.len(), 2);
        assert_eq!(result.scores[0].score, result.scores[1].score);
        assert_eq!(result.best.mv, Move::new(0, 0, Edge::Right));
        assert_eq!(result.best.score, 2);
    }

    #[test]
    fn last_box_is_taken() {
        let board = parse_board("trb,E,E,E/E,E,E,E/E,O,O,O/O,O,O,O").unwrap();
        let result = select_move(&board, Algorithm::Minimax, MAX_DEPTH).unwrap().unwrap();
        assert_eq!(result.best, ScoredMove { mv: Move::new(0, 0, Edge::Left), score: 2 });
    }

    #[test]
    fn algorithms_agree_and_alphabeta_visits_fewer_nodes() {
        let board = parse_board(FREE_BOX_AND_CHAIN).unwrap();
        let mm = select_move(&board, Algorithm::Minimax, MAX_DEPTH).unwrap().unwrap();
        let ab = select_move(&board, Algorithm::AlphaBeta, MAX_DEPTH).unwrap().unwrap();
        assert_eq!(mm.scores, ab.scores);
        assert!(ab.stats.nodes <= mm.stats.nodes);
    }

    #[test]
    fn stats_are_per_call() {
        let board = parse_board(FREE_BOX_AND_CHAIN).unwrap();
        let first = select_move(&board, Algorithm::Minimax, MAX_DEPTH).unwrap().unwrap();
        let second = select_move(&board, Algorithm::Minimax, MAX_DEPTH).unwrap().unwrap();
        assert_eq!(first.stats, second.stats);
        assert!(first.stats.min_depth < MAX_DEPTH);
    }

    #[test]
    fn shallow_depth_is_greedy() {
        let board = parse_board(FREE_BOX_AND_CHAIN).unwrap();
        let result = select_move(&board, Algorithm::AlphaBeta, 1).unwrap().unwrap();
        assert_eq!(result.best, ScoredMove { mv: Move::new(3, 3, Edge::Right), score: 2 });
        assert_eq!(result.stats.min_depth, 0);
    }
}
