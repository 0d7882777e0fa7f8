//! Box-differential evaluation.
//!
//! A board's value is the number of boxes the engine owns minus the number
//! the opponent owns. At a cutoff this is only an approximation: open boxes
//! count for nobody.

use crate::board::{Board, Cell};

/// Scores `board` from the engine's point of view.
pub fn evaluate(board: &Board) -> i32 {
    board
        .cells()
        .map(|(_, _, cell)| match cell {
            Cell::Owned(player) => player.sign(),
            Cell::Open(_) => 0,
        })
        .sum()
}

/// Returns true when no legal move remains.
///
/// An open cell always has at least one undrawn edge, so this is the same as
/// `legal_moves(board).is_empty()` without building the list.
pub fn is_leaf(board: &Board) -> bool {
    board.cells().all(|(_, _, cell)| !cell.is_open())
}
