//! Search and move selection.
//!
//! Two interchangeable tree walkers (plain minimax and alpha-beta) share the
//! same node expansion: apply the move, generate the child's legal moves,
//! narrow them with the candidate heuristics, and hand the turn over unless
//! the move completed a box.

pub mod alphabeta;
pub mod candidates;
pub mod minimax;
pub mod select;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::board::{Board, Move, Player};
use crate::movegen::legal_moves;
use crate::resolve::{apply, next_maximizing, MoveError, Transition};

pub use alphabeta::alphabeta;
pub use candidates::{narrow_candidates, BRANCHING_CAP_DEPTH};
pub use minimax::minimax;
pub use select::{select_move, SearchResult};

/// Default search depth. Larger than the 40 plies a game can last, so the
/// search runs to the end of the game.
pub const MAX_DEPTH: u32 = 100;

/// Bound used for the initial alpha-beta window and running best values.
pub const SCORE_INF: i32 = 1_000_000;

/// A search tree node: a board and the moves to branch over from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    pub board: Board,
    pub candidates: Vec<Move>,
}

impl SearchNode {
    pub fn new(board: Board, candidates: Vec<Move>) -> Self {
        SearchNode { board, candidates }
    }

    /// Plays `mv` for the side given by `maximizing` and builds the child node.
    ///
    /// Returns the child and the maximizing flag for the next ply. `depth` is
    /// this node's remaining depth; it decides whether the branching cap
    /// applies to the child's moves.
    pub(crate) fn expand(
        &self,
        mv: Move,
        maximizing: bool,
        depth: u32,
    ) -> Result<(SearchNode, bool), MoveError> {
        let Transition { board, box_completed } =
            apply(&self.board, mv, Player::for_maximizing(maximizing))?;

        let mut candidates = legal_moves(&board);
        let narrowed = narrow_candidates(&board, &candidates, depth);
        if !narrowed.is_empty() {
            candidates = narrowed;
        }

        Ok((
            SearchNode { board, candidates },
            next_maximizing(maximizing, box_completed),
        ))
    }
}

/// Per-call search diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Number of search calls made.
    pub nodes: u64,
    /// Smallest remaining depth any call was made with.
    pub min_depth: u32,
}

impl Default for SearchStats {
    fn default() -> Self {
        SearchStats {
            nodes: 0,
            min_depth: u32::MAX,
        }
    }
}

impl SearchStats {
    pub(crate) fn visit(&mut self, depth: u32) {
        self.nodes += 1;
        self.min_depth = self.min_depth.min(depth);
    }
}

/// Which tree walker to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Algorithm {
    Minimax,
    #[default]
    AlphaBeta,
}

impl Algorithm {
    /// Searches `node` with this algorithm over a full window.
    pub fn search(
        self,
        node: &SearchNode,
        depth: u32,
        maximizing: bool,
        stats: &mut SearchStats,
    ) -> Result<i32, MoveError> {
        match self {
            Algorithm::Minimax => minimax(node, depth, maximizing, stats),
            Algorithm::AlphaBeta => alphabeta(node, depth, -SCORE_INF, SCORE_INF, maximizing, stats),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search algorithm: '{0}'")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" => Ok(Algorithm::Minimax),
            "alphabeta" => Ok(Algorithm::AlphaBeta),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Minimax => write!(f, "minimax"),
            Algorithm::AlphaBeta => write!(f, "alphabeta"),
        }
    }
}
