//! Plain minimax.
//!
//! Visits every candidate at every node. Mostly useful as the reference the
//! alpha-beta walker is checked against.

use super::{SearchNode, SearchStats, SCORE_INF};
use crate::eval::{evaluate, is_leaf};
use crate::resolve::MoveError;

/// Returns the minimax value of `node` searched to `depth` plies.
///
/// `maximizing` is true when the engine is on move. A completed box keeps
/// the same side on move for the next ply.
pub fn minimax(
    node: &SearchNode,
    depth: u32,
    maximizing: bool,
    stats: &mut SearchStats,
) -> Result<i32, MoveError> {
    stats.visit(depth);

    if depth == 0 || is_leaf(&node.board) || node.candidates.is_empty() {
        return Ok(evaluate(&node.board));
    }

    let mut best = if maximizing { -SCORE_INF } else { SCORE_INF };
    for &mv in &node.candidates {
        let (child, next) = node.expand(mv, maximizing, depth)?;
        let value = minimax(&child, depth - 1, next, stats)?;
        best = if maximizing { best.max(value) } else { best.min(value) };
    }
    Ok(best)
}
