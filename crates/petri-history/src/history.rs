//! Ordered generation snapshots with a navigation cursor.

use petri_automata::Grid;

use crate::error::HistoryError;

/// Direction for relative history navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the most recent generation.
    Forward,
    /// Toward generation zero.
    Backward,
}

/// An ordered, indexable sequence of grid snapshots with a cursor.
///
/// A history is populated in one atomic [`crate::run`] call and read through
/// the cursor afterwards; navigation never recomputes a generation. Relative
/// steps saturate at both ends, so walking past the first or last entry is a
/// no-op rather than an error.
///
/// # Example
///
/// ```
/// use petri_automata::{Grid, Rule};
/// use petri_history::{run, Direction};
///
/// let grid = Grid::new(8, 8).unwrap();
/// let (mut history, _stats) = run(&grid, &Rule::Classic, 3).unwrap();
///
/// assert_eq!(history.len(), 4);
/// history.step(Direction::Forward).unwrap();
/// assert_eq!(history.cursor(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct History {
    /// Stored generations, oldest first.
    generations: Vec<Grid>,
    /// Current position, always in range while non-empty.
    cursor: usize,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a generation snapshot. Only a run may grow a history.
    pub(crate) fn push(&mut self, generation: Grid) {
        self.generations.push(generation);
    }

    /// Returns the number of stored generations.
    pub fn len(&self) -> usize {
        self.generations.len()
    }

    /// Returns true if no run has populated this history.
    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    /// Returns the cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns every stored generation, oldest first.
    pub fn generations(&self) -> &[Grid] {
        &self.generations
    }

    /// Returns the generation under the cursor.
    ///
    /// Fails with [`HistoryError::EmptyHistory`] if no run has occurred.
    pub fn current(&self) -> Result<&Grid, HistoryError> {
        self.generations
            .get(self.cursor)
            .ok_or(HistoryError::EmptyHistory)
    }

    /// Moves the cursor one entry in `direction` and returns the generation
    /// there.
    ///
    /// The move saturates: stepping forward at the last entry (or backward
    /// at the first) stays put and returns the same generation. Fails with
    /// [`HistoryError::EmptyHistory`] only when nothing is stored at all.
    pub fn step(&mut self, direction: Direction) -> Result<&Grid, HistoryError> {
        if self.generations.is_empty() {
            return Err(HistoryError::EmptyHistory);
        }
        self.cursor = match direction {
            Direction::Forward => (self.cursor + 1).min(self.generations.len() - 1),
            Direction::Backward => self.cursor.saturating_sub(1),
        };
        Ok(&self.generations[self.cursor])
    }

    /// Moves the cursor to an absolute index and returns the generation
    /// there.
    ///
    /// Fails with [`HistoryError::IndexOutOfRange`] outside `[0, len)`.
    pub fn goto(&mut self, index: usize) -> Result<&Grid, HistoryError> {
        if index >= self.generations.len() {
            return Err(HistoryError::IndexOutOfRange {
                index: index as i64,
                len: self.generations.len(),
            });
        }
        self.cursor = index;
        Ok(&self.generations[self.cursor])
    }

    /// Drops every stored generation and resets the cursor.
    pub fn clear(&mut self) {
        self.generations.clear();
        self.cursor = 0;
    }
}
