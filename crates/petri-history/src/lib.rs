//! Simulation driver and generation history for Life-family cellular
//! automata.
//!
//! This crate owns the stateful half of the engine built on `petri-automata`:
//!
//! - [`run`] - drives repeated rule application over a starting grid,
//!   materializing every generation up front
//! - [`History`] - the resulting append-once sequence of snapshots with
//!   O(1) forward/backward/random-access navigation
//! - [`RunStats`] - population and coverage summary per run
//!
//! Eager materialization is deliberate: navigation reads stored snapshots
//! and never recomputes a generation, so storage is
//! O(iterations x rows x cols) and the caller chooses iteration counts to
//! match available memory.
//!
//! # Example
//!
//! ```
//! use petri_automata::{Grid, LifeformCatalog, Rule};
//! use petri_history::{run, Direction};
//!
//! let catalog = LifeformCatalog::builtin();
//! let mut grid = Grid::new(30, 30).unwrap();
//! grid.stamp(catalog.lookup("glider").unwrap(), 1, 1).unwrap();
//!
//! let (mut history, stats) = run(&grid, &Rule::Classic, 20).unwrap();
//! assert_eq!(history.len(), 21);
//! assert_eq!(stats.peak_population, 5);
//!
//! // Walk the captured generations without recomputing anything.
//! history.goto(20).unwrap();
//! let last = history.step(Direction::Forward).unwrap();
//! assert_eq!(last.population(), 5);
//! ```

mod error;
mod history;
mod simulate;

pub use error::HistoryError;
pub use history::{Direction, History};
pub use simulate::{run, RunStats};
