//! Move application.
//!
//! Draws one edge, mirrors it onto the neighbouring cell, and claims any box
//! whose fourth edge was just drawn. The input board is never touched: the
//! result is a fresh copy, and a rejected move leaves nothing behind.

use crate::board::{neighbor, Board, Cell, Edge, EdgeSet, Move, Player};

/// Errors raised for a move that is not legal on the board it is applied to.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell ({x}, {y}) is off the board")]
    OutOfBounds { x: u8, y: u8 },

    #[error("cell ({x}, {y}) is already owned")]
    CellOwned { x: u8, y: u8 },

    #[error("edge {edge:?} of cell ({x}, {y}) is already drawn")]
    EdgeDrawn { x: u8, y: u8, edge: Edge },
}

/// The board after a move, and whether the move completed a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub board: Board,
    pub box_completed: bool,
}

/// Applies `mv` for `player`.
///
/// At most two boxes can complete from one move: the target cell and the
/// neighbour across the drawn edge.
pub fn apply(board: &Board, mv: Move, player: Player) -> Result<Transition, MoveError> {
    let (x, y) = (mv.x as usize, mv.y as usize);
    let cell = board
        .get(x, y)
        .ok_or(MoveError::OutOfBounds { x: mv.x, y: mv.y })?;
    let edges = match cell {
        Cell::Open(edges) => edges,
        Cell::Owned(_) => return Err(MoveError::CellOwned { x: mv.x, y: mv.y }),
    };
    if edges.contains(mv.edge) {
        return Err(MoveError::EdgeDrawn { x: mv.x, y: mv.y, edge: mv.edge });
    }

    let mut next = *board;
    let mut box_completed = draw(&mut next, x, y, edges.with(mv.edge), player);

    if let Some((nx, ny)) = neighbor(x, y, mv.edge) {
        // An owned neighbour already has every edge.
        if let Cell::Open(other) = next.cell(nx, ny) {
            box_completed |= draw(&mut next, nx, ny, other.with(mv.edge.opposite()), player);
        }
    }

    Ok(Transition { board: next, box_completed })
}

/// Stores `edges` at `(x, y)`, claiming the box if the set is complete.
fn draw(board: &mut Board, x: usize, y: usize, edges: EdgeSet, player: Player) -> bool {
    if edges.is_full() {
        board.set_cell(x, y, Cell::Owned(player));
        true
    } else {
        board.set_cell(x, y, Cell::Open(edges));
        false
    }
}

/// Extra-turn rule: completing a box keeps the move with the same side.
pub const fn next_maximizing(maximizing: bool, box_completed: bool) -> bool {
    if box_completed {
        maximizing
    } else {
        !maximizing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GRID_SIZE;
    use crate::movegen::legal_moves;

    fn open(edges: &[Edge]) -> Cell {
        Cell::Open(EdgeSet::from_edges(edges))
    }

    #[test]
    fn top_edge_on_first_row_has_no_neighbor() {
        let board = Board::empty();
        let t = apply(&board, Move::new(0, 0, Edge::Top), Player::Engine).unwrap();
        assert!(!t.box_completed);
        assert_eq!(t.board.edges_of(0, 0), EdgeSet::from_edges(&[Edge::Top]));
        let touched = t.board.cells().filter(|(_, _, c)| !c.edges().is_empty()).count();
        assert_eq!(touched, 1);
    }

    #[test]
    fn left_edge_mirrors_onto_left_neighbor() {
        let board = Board::empty();
        let t = apply(&board, Move::new(1, 0, Edge::Left), Player::Engine).unwrap();
        assert!(!t.box_completed);
        assert_eq!(t.board.edges_of(1, 0), EdgeSet::from_edges(&[Edge::Left]));
        assert_eq!(t.board.edges_of(0, 0), EdgeSet::from_edges(&[Edge::Right]));
    }

    #[test]
    fn every_direction_mirrors() {
        let cases = [
            (Move::new(1, 1, Edge::Top), (1, 0), Edge::Bottom),
            (Move::new(1, 1, Edge::Right), (2, 1), Edge::Left),
            (Move::new(1, 1, Edge::Bottom), (1, 2), Edge::Top),
            (Move::new(1, 1, Edge::Left), (0, 1), Edge::Right),
        ];
        for (mv, (nx, ny), mirrored) in cases {
            let t = apply(&Board::empty(), mv, Player::Opponent).unwrap();
            assert!(t.board.edges_of(nx, ny).contains(mirrored), "{}", mv);
        }
    }

    #[test]
    fn fourth_edge_claims_box() {
        let mut cells = [[Cell::default(); GRID_SIZE]; GRID_SIZE];
        // Cell (0, 0) has Top, Right, Bottom; its neighbours mirror the shared edges.
        cells[0][0] = open(&[Edge::Top, Edge::Right, Edge::Bottom]);
        cells[0][1] = open(&[Edge::Left]);
        cells[1][0] = open(&[Edge::Top]);
        let board = Board::from_cells(cells).unwrap();

        let t = apply(&board, Move::new(0, 0, Edge::Left), Player::Opponent).unwrap();
        assert!(t.box_completed);
        assert_eq!(t.board.cell(0, 0), Cell::Owned(Player::Opponent));
    }

    #[test]
    fn one_edge_can_claim_two_boxes() {
        let mut cells = [[Cell::default(); GRID_SIZE]; GRID_SIZE];
        cells[0][0] = open(&[Edge::Top, Edge::Bottom, Edge::Left]);
        cells[0][1] = open(&[Edge::Top, Edge::Right, Edge::Bottom]);
        cells[0][2] = open(&[Edge::Left]);
        cells[1][0] = open(&[Edge::Top]);
        cells[1][1] = open(&[Edge::Top]);
        let board = Board::from_cells(cells).unwrap();

        let t = apply(&board, Move::new(0, 0, Edge::Right), Player::Engine).unwrap();
        assert!(t.box_completed);
        assert_eq!(t.board.cell(0, 0), Cell::Owned(Player::Engine));
        assert_eq!(t.board.cell(1, 0), Cell::Owned(Player::Engine));
        assert_eq!(t.board.owned_by(Player::Engine), 2);
    }

    #[test]
    fn input_board_is_untouched() {
        let board = Board::empty();
        let before = board;
        let _ = apply(&board, Move::new(2, 2, Edge::Right), Player::Engine).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn applied_move_is_no_longer_offered() {
        let board = Board::empty();
        let mv = Move::new(1, 0, Edge::Left);
        let t = apply(&board, mv, Player::Engine).unwrap();
        let moves = legal_moves(&t.board);
        assert!(!moves.contains(&mv));
        assert!(!moves.contains(&Move::new(0, 0, Edge::Right)));
        assert_eq!(moves.len(), 62);
    }

    #[test]
    fn rejects_out_of_bounds() {
        let err = apply(&Board::empty(), Move::new(4, 0, Edge::Top), Player::Engine).unwrap_err();
        assert_eq!(err, MoveError::OutOfBounds { x: 4, y: 0 });
    }

    #[test]
    fn rejects_owned_cell() {
        let mut cells = [[Cell::default(); GRID_SIZE]; GRID_SIZE];
        cells[1][2] = Cell::Owned(Player::Engine);
        cells[0][2] = open(&[Edge::Bottom]);
        cells[1][1] = open(&[Edge::Right]);
        cells[1][3] = open(&[Edge::Left]);
        cells[2][2] = open(&[Edge::Top]);
        let board = Board::from_cells(cells).unwrap();
        let err = apply(&board, Move::new(2, 1, Edge::Top), Player::Opponent).unwrap_err();
        assert_eq!(err, MoveError::CellOwned { x: 2, y: 1 });
    }

    #[test]
    fn rejects_drawn_edge() {
        let board = apply(&Board::empty(), Move::new(0, 0, Edge::Right), Player::Engine)
            .unwrap()
            .board;
        let err = apply(&board, Move::new(1, 0, Edge::Left), Player::Opponent).unwrap_err();
        assert_eq!(err, MoveError::EdgeDrawn { x: 1, y: 0, edge: Edge::Left });
    }

    #[test]
    fn extra_turn_rule() {
        assert!(next_maximizing(true, true));
        assert!(!next_maximizing(false, true));
        assert!(!next_maximizing(true, false));
        assert!(next_maximizing(false, false));
    }
}
