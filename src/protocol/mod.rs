//! DBI protocol handling.
//!
//! This module implements parsing and serialization for the DBI
//! (Dots-and-Boxes Interface) protocol: the board and move notation, and
//! the command parser for the main loop.

pub mod notation;
pub mod parser;

pub use notation::{encode_board, format_move, parse_board, parse_move, NotationError, STARTPOS};
pub use parser::{parse_command, Command, GoParams};
