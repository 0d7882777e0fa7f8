//! Engine state management.
//!
//! Holds the current board position and engine options, and runs move
//! selection for the `go` command with the configured algorithm and depth.

use std::collections::HashMap;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use tracing::warn;

use crate::board::Board;
use crate::protocol::notation::{parse_board, NotationError};
use crate::resolve::MoveError;
use crate::search::{select_move, Algorithm, SearchResult, MAX_DEPTH};

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub position: Option<Board>,
    pub options: HashMap<String, String>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates a new engine with no position.
    pub fn new() -> Self {
        Engine {
            position: None,
            options: HashMap::new(),
        }
    }

    /// Resets the position for a new game. Options are kept.
    pub fn new_game(&mut self) {
        self.position = None;
    }

    /// Sets the current board position from board notation.
    ///
    /// On failure the previous position is kept.
    pub fn set_position(&mut self, notation: &str) -> Result<(), NotationError> {
        self.position = Some(parse_board(notation)?);
        Ok(())
    }

    /// Sets an engine option.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        self.options.insert(name, value.unwrap_or_default());
    }

    /// Returns the configured search algorithm, or the default.
    pub fn algorithm(&self) -> Algorithm {
        self.options
            .get("Algorithm")
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }

    /// Returns the configured search depth, clamped to `1..=MAX_DEPTH`.
    pub fn depth(&self) -> u32 {
        self.options
            .get("Depth")
            .and_then(|v| v.parse::<u32>().ok())
            .map_or(MAX_DEPTH, |d| d.clamp(1, MAX_DEPTH))
    }

    /// Handles the DBI handshake: writes id, options, protocol_version, and dbiok.
    pub fn handle_dbi<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name boxline")?;
        writeln!(out, "id author boxline")?;
        writeln!(
            out,
            "option name Algorithm type combo default alphabeta var minimax var alphabeta"
        )?;
        writeln!(
            out,
            "option name Depth type spin default {} min 1 max {}",
            MAX_DEPTH, MAX_DEPTH
        )?;
        writeln!(out, "protocol_version 1")?;
        writeln!(out, "dbiok")?;
        out.flush()
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Handles the `go` command: selects a move for the engine side and
    /// writes an `info` line followed by `bestmove`.
    pub fn handle_go<W: Write>(&self, out: &mut W, depth: Option<u32>) -> io::Result<()> {
        let Some(board) = &self.position else {
            warn!("go: no position set");
            return Ok(());
        };

        let depth = depth.map_or_else(|| self.depth(), |d| d.min(MAX_DEPTH));
        let start = Instant::now();
        let outcome = select_move(board, self.algorithm(), depth);
        write_outcome(out, outcome, start.elapsed())
    }
}

/// Writes the result of a search. A search error gets an `info string` line
/// and no `bestmove`.
fn write_outcome<W: Write>(
    out: &mut W,
    outcome: Result<Option<SearchResult>, MoveError>,
    elapsed: Duration,
) -> io::Result<()> {
    match outcome {
        Ok(Some(result)) => {
            writeln!(
                out,
                "info nodes {} mindepth {} score {} time {}",
                result.stats.nodes,
                result.stats.min_depth,
                result.best.score,
                elapsed.as_millis()
            )?;
            writeln!(out, "bestmove {}", result.best.mv)?;
        }
        Ok(None) => writeln!(out, "bestmove none")?,
        Err(e) => {
            warn!(error = %e, "go: search failed");
            writeln!(out, "info string error {}", e)?;
        }
    }
    out.flush()
}
