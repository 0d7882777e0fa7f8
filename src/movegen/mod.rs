//! Legal move generation.
//!
//! Moves are produced in a fixed order: cells row by row (y, then x), and
//! within a cell the edges Top, Right, Bottom, Left. Root move selection
//! breaks ties by this order, so it must not change.

use rand::Rng;

use crate::board::{Board, Cell, Move};

/// Returns every legal move on `board` in generation order.
///
/// Interior edges appear once per bordering open cell. On the empty board
/// that is 64 moves for the 40 physical edges.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    for (x, y, cell) in board.cells() {
        if let Cell::Open(edges) = cell {
            for edge in edges.missing() {
                moves.push(Move::new(x as u8, y as u8, edge));
            }
        }
    }
    moves
}

/// Picks one legal move uniformly at random, or `None` on a finished board.
pub fn random_move(board: &Board, rng: &mut impl Rng) -> Option<Move> {
    let legal = legal_moves(board);
    if legal.is_empty() {
        return None;
    }
    Some(legal[rng.gen_range(0..legal.len())])
}
