//! Alpha-beta search.
//!
//! Same tree as `minimax`, same candidate order, but stops expanding a
//! node's remaining siblings once `alpha >= beta`. The bound is fail-hard:
//! a maximizing node returns its alpha, a minimizing node its beta. Over the
//! full `(-SCORE_INF, SCORE_INF)` window the root value equals minimax's.

use super::{SearchNode, SearchStats};
use crate::eval::{evaluate, is_leaf};
use crate::resolve::MoveError;

/// Returns the alpha-beta value of `node` searched to `depth` plies within
/// the `(alpha, beta)` window.
pub fn alphabeta(
    node: &SearchNode,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    stats: &mut SearchStats,
) -> Result<i32, MoveError> {
    stats.visit(depth);

    if depth == 0 || is_leaf(&node.board) || node.candidates.is_empty() {
        return Ok(evaluate(&node.board));
    }

    for &mv in &node.candidates {
        let (child, next) = node.expand(mv, maximizing, depth)?;
        let value = alphabeta(&child, depth - 1, alpha, beta, next, stats)?;
        if maximizing {
            alpha = alpha.max(value);
        } else {
            beta = beta.min(value);
        }
        if alpha >= beta {
            break;
        }
    }

    Ok(if maximizing { alpha } else { beta })
}
