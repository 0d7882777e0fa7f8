//! Position evaluation.
//!
//! Scores a board from the engine's side as the owned-box differential, and
//! detects finished boards.

pub(crate) mod heuristic;

pub use heuristic::{evaluate, is_leaf};
