//! Move resolution.
//!
//! Applies a single edge draw to a board, propagating the shared edge and
//! awarding completed boxes to the mover.

pub mod transition;

pub use transition::{apply, next_maximizing, MoveError, Transition};
