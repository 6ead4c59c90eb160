//! Session error types.

use petri_automata::AutomataError;
use petri_history::HistoryError;
use thiserror::Error;

/// Errors surfaced by session operations.
///
/// Each wraps the engine error that names the violated invariant; the
/// embedding request layer maps these to user-visible messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Grid, lifeform, or rule error.
    #[error("board error: {0}")]
    Automata(#[from] AutomataError),

    /// Simulation or history navigation error.
    #[error("simulation error: {0}")]
    History(#[from] HistoryError),
}
