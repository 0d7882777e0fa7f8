//! Board and move notation.
//!
//! A board is written as four rows separated by `/`, each row four cells
//! separated by `,`. An open cell lists its drawn edges (`t`, `r`, `b`, `l`,
//! any order) or is `-` when no edge is drawn. `E` and `O` are boxes owned by
//! the engine and the opponent.
//!
//! Example: `lr,E,E,O/rb,O,E,O/E,O,E,O/E,E,O,tbl`
//!
//! A move is `<x><y><edge>`, e.g. `10l` draws the left edge of the cell in
//! column 1, row 0.

use crate::board::{Board, BoardError, Cell, Edge, EdgeSet, Move, Player, GRID_SIZE};

/// Notation for the empty board.
pub const STARTPOS: &str = "-,-,-,-/-,-,-,-/-,-,-,-/-,-,-,-";

/// Errors that can occur while parsing board or move notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("invalid cell entry: '{0}'")]
    InvalidCell(String),

    #[error("edge repeated in cell entry: '{0}'")]
    DuplicateEdge(String),

    #[error("invalid move: '{0}'")]
    InvalidMove(String),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Parses one cell entry.
fn parse_cell(s: &str) -> Result<Cell, NotationError> {
    if s == "-" {
        return Ok(Cell::Open(EdgeSet::EMPTY));
    }

    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(player) = Player::from_notation_char(c) {
            return Ok(Cell::Owned(player));
        }
    }

    if s.is_empty() {
        return Err(NotationError::InvalidCell(s.to_string()));
    }
    let mut edges = EdgeSet::EMPTY;
    for c in s.chars() {
        let edge = Edge::from_notation_char(c).ok_or_else(|| NotationError::InvalidCell(s.to_string()))?;
        if !edges.insert(edge) {
            return Err(NotationError::DuplicateEdge(s.to_string()));
        }
    }
    Ok(Cell::Open(edges))
}

/// Parses a board from notation. The result is validated like any other board.
pub fn parse_board(s: &str) -> Result<Board, NotationError> {
    let rows = s
        .trim()
        .split('/')
        .map(|row| row.split(',').map(|c| parse_cell(c.trim())).collect())
        .collect::<Result<Vec<Vec<Cell>>, _>>()?;
    Ok(Board::try_from(rows)?)
}

fn encode_cell(cell: Cell) -> String {
    match cell {
        Cell::Owned(player) => player.notation_char().to_string(),
        Cell::Open(edges) if edges.is_empty() => "-".to_string(),
        Cell::Open(edges) => edges.iter().map(Edge::notation_char).collect(),
    }
}

/// Encodes a board to notation, listing edges in `t r b l` order.
pub fn encode_board(board: &Board) -> String {
    let mut out = String::with_capacity(48);
    for (y, row) in board.rows().iter().enumerate() {
        if y > 0 {
            out.push('/');
        }
        for (x, &cell) in row.iter().enumerate() {
            if x > 0 {
                out.push(',');
            }
            out.push_str(&encode_cell(cell));
        }
    }
    out
}

/// Parses a move such as `10l`.
pub fn parse_move(s: &str) -> Result<Move, NotationError> {
    let invalid = || NotationError::InvalidMove(s.to_string());
    let chars: Vec<char> = s.trim().chars().collect();
    let [x, y, e] = chars[..] else {
        return Err(invalid());
    };

    let coord = |c: char| {
        c.to_digit(10)
            .filter(|&d| (d as usize) < GRID_SIZE)
            .map(|d| d as u8)
    };
    let x = coord(x).ok_or_else(invalid)?;
    let y = coord(y).ok_or_else(invalid)?;
    let edge = Edge::from_notation_char(e).ok_or_else(invalid)?;
    Ok(Move::new(x, y, edge))
}

/// Formats a move as `<x><y><edge>`.
pub fn format_move(mv: Move) -> String {
    mv.to_string()
}
