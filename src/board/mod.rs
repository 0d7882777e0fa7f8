//! Board representation and game-state types.
//!
//! Contains the core data structures for edges, cells, moves, and the 4x4
//! grid itself.

pub mod cell;
pub mod edge;
pub mod moves;
pub mod state;

pub use cell::{Cell, Player};
pub use edge::{Edge, EdgeSet, ALL_EDGES};
pub use moves::{Move, ScoredMove};
pub use state::{neighbor, Board, BoardError, CELL_COUNT, GRID_SIZE, PHYSICAL_EDGE_COUNT};
