//! The board: a fixed-size 2D matrix of live/dead cells.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::AutomataError;
use crate::lifeform::Lifeform;

/// Moore neighborhood offsets as `(d_row, d_col)`.
const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A fixed-size 2D grid of boolean cells, stored row-major.
///
/// The grid is a plain data structure: it owns cell state and offers mutation
/// primitives (set/toggle/clear/stamp) plus neighbor counting, but applying a
/// rule to produce the next generation lives in [`crate::next_generation`].
///
/// Edges are bounded by default: positions outside the grid read as dead.
/// Toroidal wrapping can be enabled with [`Grid::set_wrap`].
///
/// # Example
///
/// ```
/// use petri_automata::Grid;
///
/// let mut grid = Grid::new(10, 10).unwrap();
/// grid.set(4, 5, true).unwrap();
/// assert!(grid.get(4, 5).unwrap());
/// assert_eq!(grid.population(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid {
    /// Cell states, `rows * cols` entries, row-major.
    cells: Vec<bool>,
    /// Row count.
    rows: usize,
    /// Column count.
    cols: usize,
    /// Wrap around at edges.
    wrap: bool,
}

impl Grid {
    /// Creates a new grid with all cells dead.
    ///
    /// Fails with [`AutomataError::InvalidDimension`] if either side is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, AutomataError> {
        if rows == 0 || cols == 0 {
            return Err(AutomataError::InvalidDimension {
                rows: rows as i64,
                cols: cols as i64,
            });
        }
        Ok(Self {
            cells: vec![false; rows * cols],
            rows,
            cols,
            wrap: false,
        })
    }

    /// Rebuilds a grid from parts already known to be consistent.
    pub(crate) fn from_parts(rows: usize, cols: usize, wrap: bool, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self {
            cells,
            rows,
            cols,
            wrap,
        }
    }

    /// Returns the row count.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the column count.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns true if edges wrap toroidally.
    pub fn wrap(&self) -> bool {
        self.wrap
    }

    /// Sets whether the grid wraps at edges.
    pub fn set_wrap(&mut self, wrap: bool) {
        self.wrap = wrap;
    }

    /// Returns the flat row-major cell slice.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<usize, AutomataError> {
        if row >= self.rows || col >= self.cols {
            return Err(AutomataError::OutOfBounds {
                row: row as i64,
                col: col as i64,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Gets the state of a cell.
    ///
    /// Fails with [`AutomataError::OutOfBounds`] outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Result<bool, AutomataError> {
        let idx = self.check_bounds(row, col)?;
        Ok(self.cells[idx])
    }

    /// Sets the state of a cell.
    ///
    /// Fails with [`AutomataError::OutOfBounds`] outside the grid.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), AutomataError> {
        let idx = self.check_bounds(row, col)?;
        self.cells[idx] = alive;
        Ok(())
    }

    /// Flips the state of a cell, returning the new state.
    ///
    /// Toggling the same cell twice restores the grid exactly.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, AutomataError> {
        let idx = self.check_bounds(row, col)?;
        self.cells[idx] = !self.cells[idx];
        Ok(self.cells[idx])
    }

    /// Kills every cell without changing dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Overlays a lifeform with its top-left corner at `(row, col)`.
    ///
    /// Live pattern cells become live; dead pattern cells leave existing
    /// live cells alone (union-add, not replace). Fails with
    /// [`AutomataError::OutOfBounds`] if any covered cell falls outside the
    /// grid, in which case the grid is left unmodified.
    pub fn stamp(
        &mut self,
        lifeform: &Lifeform,
        row: usize,
        col: usize,
    ) -> Result<(), AutomataError> {
        let height = lifeform.height();
        let width = lifeform.width();
        let fits =
            row < self.rows && col < self.cols && height <= self.rows - row && width <= self.cols - col;
        if !fits {
            return Err(AutomataError::OutOfBounds {
                row: row as i64 + height as i64 - 1,
                col: col as i64 + width as i64 - 1,
                rows: self.rows,
                cols: self.cols,
            });
        }

        for (d_row, line) in lifeform.layout().iter().enumerate() {
            for (d_col, &alive) in line.iter().enumerate() {
                if alive {
                    self.cells[(row + d_row) * self.cols + (col + d_col)] = true;
                }
            }
        }
        Ok(())
    }

    /// Returns true if the cell at an in-range position is live.
    pub(crate) fn is_live(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols + col]
    }

    /// Counts live Moore neighbors of an in-range position.
    ///
    /// Bounded grids treat outside positions as dead; wrapping grids read
    /// the opposite edge.
    pub(crate) fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0u8;

        for &(d_row, d_col) in &MOORE_OFFSETS {
            let n_row = if self.wrap {
                (row as i64 + d_row).rem_euclid(self.rows as i64) as usize
            } else {
                let n_row = row as i64 + d_row;
                if n_row < 0 || n_row >= self.rows as i64 {
                    continue;
                }
                n_row as usize
            };

            let n_col = if self.wrap {
                (col as i64 + d_col).rem_euclid(self.cols as i64) as usize
            } else {
                let n_col = col as i64 + d_col;
                if n_col < 0 || n_col >= self.cols as i64 {
                    continue;
                }
                n_col as usize
            };

            if self.cells[n_row * self.cols + n_col] {
                count += 1;
            }
        }

        count
    }

    /// Counts live Moore neighbors of a cell.
    ///
    /// Fails with [`AutomataError::OutOfBounds`] outside the grid.
    pub fn live_neighbor_count(&self, row: usize, col: usize) -> Result<u8, AutomataError> {
        self.check_bounds(row, col)?;
        Ok(self.count_live_neighbors(row, col))
    }

    /// Returns a value copy sharing no storage with this grid.
    pub fn snapshot(&self) -> Grid {
        self.clone()
    }

    /// Counts total live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lifeform(name: &str, rows: &[&[u8]]) -> Lifeform {
        let layout = rows
            .iter()
            .map(|r| r.iter().map(|&c| c != 0).collect())
            .collect();
        Lifeform::new(name, layout).unwrap()
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(4, 7).unwrap();
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 7);
        assert_eq!(grid.cells().len(), 28);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert_eq!(
            Grid::new(0, 10),
            Err(AutomataError::InvalidDimension { rows: 0, cols: 10 })
        );
        assert_eq!(
            Grid::new(10, 0),
            Err(AutomataError::InvalidDimension { rows: 10, cols: 0 })
        );
    }

    #[test]
    fn test_set_get_toggle() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(2, 3, true).unwrap();
        assert!(grid.get(2, 3).unwrap());

        assert!(!grid.toggle(2, 3).unwrap());
        assert!(!grid.get(2, 3).unwrap());
    }

    #[test]
    fn test_toggle_twice_is_involution() {
        let mut grid = Grid::new(6, 6).unwrap();
        grid.set(1, 1, true).unwrap();
        let before = grid.snapshot();

        grid.toggle(4, 2).unwrap();
        grid.toggle(4, 2).unwrap();
        assert_eq!(grid, before);
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert!(matches!(
            grid.get(3, 0),
            Err(AutomataError::OutOfBounds { row: 3, col: 0, .. })
        ));
        assert!(matches!(
            grid.set(0, 3, true),
            Err(AutomataError::OutOfBounds { .. })
        ));
        assert!(matches!(
            grid.toggle(5, 5),
            Err(AutomataError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_clear_keeps_dimensions() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set(0, 0, true).unwrap();
        grid.set(3, 3, true).unwrap();

        grid.clear();
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 4);
    }

    #[test]
    fn test_stamp_unions_with_existing_cells() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(1, 1, true).unwrap();

        // Pattern with a dead cell over the existing live one.
        let shape = lifeform("corner", &[&[0, 1], &[1, 0]]);
        grid.stamp(&shape, 1, 1).unwrap();

        assert!(grid.get(1, 1).unwrap(), "existing live cell survives");
        assert!(grid.get(1, 2).unwrap());
        assert!(grid.get(2, 1).unwrap());
        assert!(!grid.get(2, 2).unwrap());
    }

    #[test]
    fn test_stamp_out_of_bounds_leaves_grid_unchanged() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set(0, 0, true).unwrap();
        let before = grid.snapshot();

        let shape = lifeform("bar", &[&[1, 1, 1]]);
        let err = grid.stamp(&shape, 3, 2).unwrap_err();
        assert!(matches!(err, AutomataError::OutOfBounds { .. }));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_stamp_fills_to_the_edge() {
        let mut grid = Grid::new(3, 3).unwrap();
        let shape = lifeform("bar", &[&[1, 1, 1]]);
        grid.stamp(&shape, 2, 0).unwrap();
        assert_eq!(grid.population(), 3);
    }

    #[test]
    fn test_neighbor_count_center() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(1, 2, true).unwrap();
        grid.set(3, 2, true).unwrap();
        grid.set(2, 1, true).unwrap();
        grid.set(2, 3, true).unwrap();

        assert_eq!(grid.live_neighbor_count(2, 2).unwrap(), 4);
    }

    #[test]
    fn test_neighbor_count_bounded_corner() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set(3, 3, true).unwrap();

        // Opposite corner is not adjacent on a bounded grid.
        assert_eq!(grid.live_neighbor_count(0, 0).unwrap(), 0);
        assert_eq!(grid.live_neighbor_count(2, 2).unwrap(), 1);
    }

    #[test]
    fn test_neighbor_count_wraps_corner_to_corner() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set_wrap(true);
        grid.set(3, 3, true).unwrap();

        assert_eq!(grid.live_neighbor_count(0, 0).unwrap(), 1);
    }

    #[test]
    fn test_neighbor_count_out_of_bounds() {
        let grid = Grid::new(3, 3).unwrap();
        assert!(matches!(
            grid.live_neighbor_count(3, 1),
            Err(AutomataError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_snapshot_does_not_alias() {
        let mut grid = Grid::new(3, 3).unwrap();
        let snap = grid.snapshot();

        grid.set(1, 1, true).unwrap();
        assert!(!snap.get(1, 1).unwrap());
        assert_ne!(grid, snap);
    }
}
