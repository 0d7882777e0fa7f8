//! Candidate narrowing for interior search plies.
//!
//! Two shortcuts keep the branching factor tractable:
//!
//! - Forced capture: if any candidate completes a box, only those candidates
//!   are searched.
//! - Branching cap: while more than `BRANCHING_CAP_DEPTH` plies remain, the
//!   search follows a single quiet move, the first one on a cell with fewer
//!   than two edges drawn.
//!
//! Both trade completeness for speed. Root moves are never narrowed.

use crate::board::{Board, Move};

/// Remaining-depth threshold above which the branching cap applies.
pub const BRANCHING_CAP_DEPTH: u32 = 70;

/// Narrows `candidates` for a node searched with `plies_remaining` depth.
///
/// An empty result means "no narrowing": the caller keeps `candidates`.
pub fn narrow_candidates(board: &Board, candidates: &[Move], plies_remaining: u32) -> Vec<Move> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let captures = forced_captures(board, candidates);
    if !captures.is_empty() {
        return captures;
    }

    if plies_remaining > BRANCHING_CAP_DEPTH {
        // Deterministic: always the first quiet move in generation order.
        return candidates
            .iter()
            .copied()
            .find(|m| edge_count(board, m) < 2)
            .into_iter()
            .collect();
    }

    Vec::new()
}

/// Returns the candidates that draw the last edge of a box.
fn forced_captures(board: &Board, candidates: &[Move]) -> Vec<Move> {
    candidates
        .iter()
        .copied()
        .filter(|m| edge_count(board, m) == 3)
        .collect()
}

fn edge_count(board: &Board, mv: &Move) -> usize {
    board.edges_of(mv.x as usize, mv.y as usize).len()
}
