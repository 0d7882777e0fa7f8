//! Edge-draw moves.
//!
//! A move names a cell and one of its edges. An interior edge borders two
//! cells, so until it is drawn it can be named from either side; playing
//! either form draws the same physical segment once.

use std::fmt;

use serde::Serialize;

use super::edge::Edge;

/// Draw `edge` on the cell at `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    pub x: u8,
    pub y: u8,
    pub edge: Edge,
}

impl Move {
    pub const fn new(x: u8, y: u8, edge: Edge) -> Self {
        Move { x, y, edge }
    }

    /// Returns the same physical edge named from the neighbouring cell, if
    /// the edge is interior.
    pub fn mirrored(self) -> Option<Move> {
        let (nx, ny) = super::state::neighbor(self.x as usize, self.y as usize, self.edge)?;
        Some(Move::new(nx as u8, ny as u8, self.edge.opposite()))
    }
}

/// Formats as `<x><y><edge>`, e.g. `10l`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.x, self.y, self.edge.notation_char())
    }
}

/// A root move together with the value its search backed up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredMove {
    #[serde(flatten)]
    pub mv: Move,
    pub score: i32,
}
