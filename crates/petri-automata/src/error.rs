//! Automata error types.

use thiserror::Error;

/// Errors that can occur while building or mutating automaton state.
///
/// Coordinate payloads are `i64` so that a request boundary can report the
/// raw (possibly negative) values it received.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomataError {
    /// A grid or lifeform dimension was zero or negative.
    #[error("invalid dimensions {rows}x{cols}: both sides must be at least 1")]
    InvalidDimension {
        /// Requested row count.
        rows: i64,
        /// Requested column count.
        cols: i64,
    },

    /// A cell position, or part of a stamped region, fell outside the grid.
    #[error("position ({row}, {col}) is outside a {rows}x{cols} grid")]
    OutOfBounds {
        /// Offending row.
        row: i64,
        /// Offending column.
        col: i64,
        /// Grid row count.
        rows: usize,
        /// Grid column count.
        cols: usize,
    },

    /// A lifeform name was not present in the catalog.
    #[error("unknown lifeform: {0}")]
    UnknownLifeform(String),

    /// A rulestring failed to parse, or rule counts were out of range.
    #[error("invalid rule: {0}")]
    InvalidRuleSpec(String),
}
