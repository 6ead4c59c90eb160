//! History and simulation error types.

use thiserror::Error;

/// Errors that can occur while running a simulation or navigating its
/// history.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// A negative (or otherwise unsupported) iteration count was requested.
    #[error("unsupported iteration count: {0}")]
    InvalidIterationCount(i64),

    /// Navigation was attempted before any run produced history.
    #[error("no simulation history")]
    EmptyHistory,

    /// A history index outside the stored range was requested.
    #[error("step {index} is outside a history of length {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: i64,
        /// Number of stored generations.
        len: usize,
    },
}
