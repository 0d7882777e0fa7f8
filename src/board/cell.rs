//! Players and box cells.
//!
//! A cell is either still open, carrying the edges drawn so far, or owned by
//! the player who drew its fourth edge.

use serde::Serialize;

use super::edge::EdgeSet;

/// One of the two sides.
///
/// `Engine` is the maximizing side the search plays for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Player {
    Engine,
    Opponent,
}

impl Player {
    /// Score contribution of one box owned by this player.
    pub const fn sign(self) -> i32 {
        match self {
            Player::Engine => 1,
            Player::Opponent => -1,
        }
    }

    pub const fn other(self) -> Player {
        match self {
            Player::Engine => Player::Opponent,
            Player::Opponent => Player::Engine,
        }
    }

    /// Maps the search's maximizing flag to the side on move.
    pub const fn for_maximizing(maximizing: bool) -> Player {
        if maximizing {
            Player::Engine
        } else {
            Player::Opponent
        }
    }

    /// Returns the single-character board notation for a box owned by this player.
    pub const fn notation_char(self) -> char {
        match self {
            Player::Engine => 'E',
            Player::Opponent => 'O',
        }
    }

    /// Parses an owner from its single-character board notation.
    pub fn from_notation_char(c: char) -> Option<Player> {
        match c {
            'E' => Some(Player::Engine),
            'O' => Some(Player::Opponent),
            _ => None,
        }
    }
}

/// A single box on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Zero to three edges drawn.
    Open(EdgeSet),
    /// All four edges drawn; the box belongs to `Player`.
    Owned(Player),
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Open(EdgeSet::EMPTY)
    }
}

impl Cell {
    pub const fn is_open(self) -> bool {
        matches!(self, Cell::Open(_))
    }

    /// Returns the drawn edges. An owned cell reports the full set.
    pub const fn edges(self) -> EdgeSet {
        match self {
            Cell::Open(edges) => edges,
            Cell::Owned(_) => EdgeSet::FULL,
        }
    }

    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Open(_) => None,
            Cell::Owned(p) => Some(p),
        }
    }
}
