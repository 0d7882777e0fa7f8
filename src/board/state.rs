//! Board representation.
//!
//! Holds the 4x4 grid of boxes. The board is a small `Copy` value: every
//! transition works on its own copy, so sibling search branches never
//! observe each other's edits.

use super::cell::{Cell, Player};
use super::edge::{Edge, EdgeSet, ALL_EDGES};

/// Width and height of the grid in boxes.
pub const GRID_SIZE: usize = 4;

/// Number of boxes on the grid.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Number of physical edges on the grid (5x5 dots).
pub const PHYSICAL_EDGE_COUNT: usize = 2 * GRID_SIZE * (GRID_SIZE + 1);

/// Errors raised when a board's shape or contents are impossible.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("expected a 4x4 grid, got {rows} rows with a row of {cols} cells")]
    WrongDimensions { rows: usize, cols: usize },

    #[error("cell ({x}, {y}) is open with all four edges drawn")]
    FullOpenCell { x: usize, y: usize },

    #[error("edge {edge:?} of cell ({x}, {y}) is drawn on one side only")]
    MismatchedEdge { x: usize, y: usize, edge: Edge },
}

/// Returns the coordinates of the cell across `edge` from `(x, y)`, if any.
pub fn neighbor(x: usize, y: usize, edge: Edge) -> Option<(usize, usize)> {
    let (dx, dy) = edge.offset();
    let nx = x.checked_add_signed(dx as isize)?;
    let ny = y.checked_add_signed(dy as isize)?;
    if nx < GRID_SIZE && ny < GRID_SIZE {
        Some((nx, ny))
    } else {
        None
    }
}

/// Complete grid state. Indexed as `cells[y][x]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Creates a board with no edges drawn.
    pub const fn empty() -> Self {
        Board {
            cells: [[Cell::Open(EdgeSet::EMPTY); GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Builds a board from rows of cells, checking that it could occur in play.
    ///
    /// Open cells may not carry four edges, two open neighbours must agree
    /// on whether their shared edge is drawn, and an open cell next to an
    /// owned one must have their shared edge drawn.
    pub fn from_cells(cells: [[Cell; GRID_SIZE]; GRID_SIZE]) -> Result<Self, BoardError> {
        let board = Board { cells };
        board.validate()?;
        Ok(board)
    }

    fn validate(&self) -> Result<(), BoardError> {
        if let Some((x, y, _)) = self
            .cells()
            .find(|&(_, _, c)| matches!(c, Cell::Open(edges) if edges.is_full()))
        {
            return Err(BoardError::FullOpenCell { x, y });
        }
        for (x, y, cell) in self.cells() {
            let Cell::Open(edges) = cell else {
                continue;
            };
            for edge in ALL_EDGES {
                let Some((nx, ny)) = neighbor(x, y, edge) else {
                    continue;
                };
                let consistent = match self.cells[ny][nx] {
                    Cell::Owned(_) => edges.contains(edge),
                    // Right and Bottom cover every open pair exactly once.
                    Cell::Open(other) if matches!(edge, Edge::Right | Edge::Bottom) => {
                        edges.contains(edge) == other.contains(edge.opposite())
                    }
                    Cell::Open(_) => true,
                };
                if !consistent {
                    return Err(BoardError::MismatchedEdge { x, y, edge });
                }
            }
        }
        Ok(())
    }

    /// Returns the cell at `(x, y)`. Panics if out of bounds.
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[y][x]
    }

    /// Returns the cell at `(x, y)`, or `None` if out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.cells.get(y).and_then(|row| row.get(x)).copied()
    }

    pub fn is_open(&self, x: usize, y: usize) -> bool {
        self.cell(x, y).is_open()
    }

    pub fn edges_of(&self, x: usize, y: usize) -> EdgeSet {
        self.cell(x, y).edges()
    }

    pub fn owner_of(&self, x: usize, y: usize) -> Option<Player> {
        self.cell(x, y).owner()
    }

    /// Replaces one cell. Only the transition function edits boards, and it
    /// always does so on its own copy.
    pub(crate) fn set_cell(&mut self, x: usize, y: usize, cell: Cell) {
        self.cells[y][x] = cell;
    }

    /// Returns the rows of the grid, top to bottom.
    pub fn rows(&self) -> &[[Cell; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Iterates `(x, y, cell)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(y, row)| row.iter().enumerate().map(move |(x, &c)| (x, y, c)))
    }

    /// Counts the boxes owned by `player`.
    pub fn owned_by(&self, player: Player) -> usize {
        self.cells()
            .filter(|&(_, _, c)| c.owner() == Some(player))
            .count()
    }

    /// Counts the boxes still open.
    pub fn open_cells(&self) -> usize {
        self.cells().filter(|&(_, _, c)| c.is_open()).count()
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        if rows.len() != GRID_SIZE {
            let cols = rows.first().map_or(0, Vec::len);
            return Err(BoardError::WrongDimensions { rows: rows.len(), cols });
        }
        let mut cells = [[Cell::default(); GRID_SIZE]; GRID_SIZE];
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != GRID_SIZE {
                return Err(BoardError::WrongDimensions {
                    rows: GRID_SIZE,
                    cols: row.len(),
                });
            }
            cells[y].copy_from_slice(&row);
        }
        Board::from_cells(cells)
    }
}
