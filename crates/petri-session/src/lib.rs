//! Single-session state and wire-facing views for the petri Game-of-Life
//! engine.
//!
//! One [`Session`] bundles everything an interactive request layer needs:
//! the active board, the built-in lifeform catalog, the latest run's history
//! and statistics. Sessions are plain values; a server holds one per user
//! context and serializes access to it, instead of sharing process-wide
//! globals.
//!
//! Operations mirror an interactive front end: create/clear the board,
//! toggle cells, stamp lifeforms, start a simulation, then walk its captured
//! generations. Each returns a typed view ([`BoardView`], [`RunView`],
//! [`StepView`], [`LifeformView`]) whose serde encoding is the wire format:
//! boards as nested rows of 0/1 integers, stats as scalar counters.
//!
//! # Example
//!
//! ```
//! use petri_session::{Direction, Session};
//!
//! let mut session = Session::new(20, 20).unwrap();
//! session.add_lifeform("blinker", 5, 5).unwrap();
//! session.toggle_cell(0, 0).unwrap();
//!
//! let outcome = session.start("B3/S23", 10).unwrap();
//! assert_eq!(outcome.total_steps, 11);
//!
//! let view = session.step(Direction::Forward).unwrap();
//! assert_eq!(view.step, 1);
//! session.stop();
//! ```

mod error;
mod session;
mod views;

pub use error::SessionError;
pub use petri_history::Direction;
pub use session::{Session, DEFAULT_BOARD_SIZE, MAX_ITERATIONS};
pub use views::{BoardView, LifeformView, RunView, StepView};
