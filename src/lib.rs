//! Boxline engine library.
//!
//! Exposes the board model, transition function, move generation, search,
//! protocol, and self-play modules for use by integration tests and the
//! binary entry points.

pub mod board;
pub mod engine;
pub mod eval;
pub mod movegen;
pub mod protocol;
pub mod resolve;
pub mod search;
pub mod selfplay;
