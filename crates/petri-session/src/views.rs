//! Wire-facing views of session state.
//!
//! The engine defines values; these views pin the shape the request layer
//! serializes: boards as nested rows of 0/1 integers, stats as scalar
//! counters.

use serde::{Deserialize, Serialize};

use petri_automata::{Grid, Lifeform};
use petri_history::RunStats;

/// The active board plus navigation counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// Cell rows, one `0`/`1` per cell.
    pub board: Vec<Vec<u8>>,
    /// Board row count.
    pub rows: usize,
    /// Board column count.
    pub cols: usize,
    /// Cursor position within the history, 0 when no run exists.
    pub step: usize,
    /// Number of stored generations, 0 when no run exists.
    pub total_steps: usize,
}

/// One catalog entry, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeformView {
    /// Unique key, e.g. `"figure_eight"`.
    pub name: String,
    /// Presentation name, e.g. `"Figure Eight"`.
    pub display_name: String,
    /// Pattern rows, one `0`/`1` per cell.
    pub layout: Vec<Vec<u8>>,
    /// Pattern height.
    pub height: usize,
    /// Pattern width.
    pub width: usize,
}

/// The outcome of starting a simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunView {
    /// Number of stored generations, `iterations + 1`.
    pub total_steps: usize,
    /// Summary statistics for the run.
    pub stats: RunStats,
}

/// The generation under the cursor after a navigation operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepView {
    /// Cell rows of the generation under the cursor.
    pub board: Vec<Vec<u8>>,
    /// Cursor position.
    pub step: usize,
    /// Number of stored generations.
    pub total_steps: usize,
}

/// Encodes a grid as nested rows of 0/1 integers.
pub(crate) fn grid_rows(grid: &Grid) -> Vec<Vec<u8>> {
    grid.cells()
        .chunks(grid.cols())
        .map(|row| row.iter().map(|&cell| u8::from(cell)).collect())
        .collect()
}

impl LifeformView {
    pub(crate) fn of(lifeform: &Lifeform) -> Self {
        Self {
            name: lifeform.name().to_string(),
            display_name: lifeform.display_name(),
            layout: lifeform
                .layout()
                .iter()
                .map(|line| line.iter().map(|&cell| u8::from(cell)).collect())
                .collect(),
            height: lifeform.height(),
            width: lifeform.width(),
        }
    }
}
