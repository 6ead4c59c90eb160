//! Board, lifeform, and rule primitives for Life-family cellular automata.
//!
//! This crate provides the stateless half of a Game-of-Life engine:
//!
//! - [`Grid`] - fixed-size 2D cell matrix with mutation primitives and
//!   neighbor counting (bounded or toroidal edges)
//! - [`Lifeform`] / [`LifeformCatalog`] - canonical named patterns that can
//!   be stamped onto a grid
//! - [`Rule`] - classic Conway or `B<digits>/S<digits>` birth/survival rules,
//!   validated at parse time
//! - [`next_generation`] - pure single-step rule application
//!
//! Running simulations and navigating their history lives in the
//! `petri-history` crate.
//!
//! # Example
//!
//! ```
//! use petri_automata::{Grid, LifeformCatalog, Rule, next_generation};
//!
//! let catalog = LifeformCatalog::builtin();
//! let mut grid = Grid::new(20, 20).unwrap();
//! grid.stamp(catalog.lookup("glider").unwrap(), 2, 2).unwrap();
//!
//! let rule: Rule = "B3/S23".parse().unwrap();
//! let next = next_generation(&grid, &rule);
//! assert_eq!(next.population(), 5);
//! ```

mod error;
mod grid;
mod lifeform;
mod rule;

pub use error::AutomataError;
pub use grid::Grid;
pub use lifeform::{Lifeform, LifeformCatalog};
pub use rule::{next_generation, presets, Rule};
