//! The simulation driver: repeated rule application with full history
//! capture.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use petri_automata::{next_generation, Grid, Rule};

use crate::error::HistoryError;
use crate::history::History;

/// Summary statistics over one simulation run.
///
/// Derived from the stored generations; recomputed per run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunStats {
    /// Number of generation steps actually executed.
    pub iterations: u64,
    /// Largest live-cell population across all stored generations.
    pub peak_population: usize,
    /// Smallest live-cell population across all stored generations.
    pub min_population: usize,
    /// Live-cell population of the final generation.
    pub final_population: usize,
    /// Largest live fraction of the board across all stored generations.
    pub peak_cell_coverage: f64,
    /// Mean live fraction of the board across all stored generations.
    pub avg_cell_coverage: f64,
}

/// Runs `iterations` successive rule applications starting from `initial`.
///
/// Every generation is captured: entry 0 of the returned [`History`] is a
/// snapshot of `initial` and each step appends one more, for `iterations + 1`
/// entries in total, cursor at 0. The caller's grid is never mutated.
///
/// Fails with [`HistoryError::InvalidIterationCount`] if `iterations` is
/// negative, before anything is computed. A run either completes in full or
/// fails without surfacing partial history.
///
/// # Example
///
/// ```
/// use petri_automata::{Grid, Rule};
/// use petri_history::run;
///
/// let mut grid = Grid::new(6, 6).unwrap();
/// for col in 1..4 {
///     grid.set(2, col, true).unwrap();
/// }
///
/// let (history, stats) = run(&grid, &Rule::Classic, 10).unwrap();
/// assert_eq!(history.len(), 11);
/// assert_eq!(stats.peak_population, 3);
/// ```
pub fn run(
    initial: &Grid,
    rule: &Rule,
    iterations: i64,
) -> Result<(History, RunStats), HistoryError> {
    if iterations < 0 {
        return Err(HistoryError::InvalidIterationCount(iterations));
    }

    let mut history = History::new();
    let mut current = initial.snapshot();
    history.push(current.snapshot());
    for _ in 0..iterations {
        current = next_generation(&current, rule);
        history.push(current.snapshot());
    }

    let stats = compute_stats(&history, iterations as u64);
    Ok((history, stats))
}

/// Folds population counts over a freshly produced, non-empty history.
fn compute_stats(history: &History, iterations: u64) -> RunStats {
    let generations = history.generations();
    let total_cells = generations[0].rows() * generations[0].cols();

    let mut peak = 0usize;
    let mut min = usize::MAX;
    let mut sum = 0usize;
    for generation in generations {
        let population = generation.population();
        peak = peak.max(population);
        min = min.min(population);
        sum += population;
    }
    let final_population = generations[generations.len() - 1].population();

    RunStats {
        iterations,
        peak_population: peak,
        min_population: min,
        final_population,
        peak_cell_coverage: peak as f64 / total_cells as f64,
        avg_cell_coverage: sum as f64 / (generations.len() * total_cells) as f64,
    }
}
