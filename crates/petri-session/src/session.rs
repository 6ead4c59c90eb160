//! The session object: one board, one catalog, one history.

use petri_automata::{AutomataError, Grid, LifeformCatalog, Rule};
use petri_history::{run, Direction, History, HistoryError, RunStats};

use crate::error::SessionError;
use crate::views::{grid_rows, BoardView, LifeformView, RunView, StepView};

/// Default board side length when none is requested.
pub const DEFAULT_BOARD_SIZE: usize = 50;

/// Upper bound on requested iterations per run.
///
/// A run materializes every generation, so the boundary caps how much a
/// single request may compute and store.
pub const MAX_ITERATIONS: i64 = 5_000;

/// All mutable state for one interactive simulation session.
///
/// Exactly one board, one lifeform catalog, and one history exist per
/// session; callers hold a `Session` per user context instead of sharing
/// process-wide state. Operations take raw `i64` request values and map
/// anything unrepresentable to the engine's error taxonomy.
///
/// # Example
///
/// ```
/// use petri_session::Session;
///
/// let mut session = Session::with_default_board();
/// session.add_lifeform("glider", 10, 10).unwrap();
///
/// let outcome = session.start("conway_classic", 50).unwrap();
/// assert_eq!(outcome.total_steps, 51);
///
/// let view = session.goto(25).unwrap();
/// assert_eq!(view.step, 25);
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    board: Grid,
    catalog: LifeformCatalog,
    history: History,
    stats: Option<RunStats>,
}

impl Session {
    /// Creates a session with an empty board of the requested size.
    ///
    /// Fails with [`AutomataError::InvalidDimension`] if either side is not
    /// a positive number.
    pub fn new(rows: i64, cols: i64) -> Result<Self, SessionError> {
        Ok(Self {
            board: request_grid(rows, cols)?,
            catalog: LifeformCatalog::builtin(),
            history: History::new(),
            stats: None,
        })
    }

    /// Creates a session with the default 50x50 board.
    pub fn with_default_board() -> Self {
        Self {
            board: empty_default_grid(),
            catalog: LifeformCatalog::builtin(),
            history: History::new(),
            stats: None,
        }
    }

    /// Returns the active board.
    pub fn board(&self) -> &Grid {
        &self.board
    }

    /// Returns the captured history of the latest run.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the statistics of the latest run, if one exists.
    pub fn stats(&self) -> Option<&RunStats> {
        self.stats.as_ref()
    }

    /// Replaces the board with a fresh all-dead one, dropping any history.
    pub fn new_board(&mut self, rows: i64, cols: i64) -> Result<BoardView, SessionError> {
        let board = request_grid(rows, cols)?;
        self.board = board;
        self.history.clear();
        self.stats = None;
        Ok(self.board_state())
    }

    /// Kills every cell on the board in place, dropping any history.
    pub fn clear_board(&mut self) -> BoardView {
        self.board.clear();
        self.history.clear();
        self.stats = None;
        self.board_state()
    }

    /// Returns the active board plus navigation counters.
    pub fn board_state(&self) -> BoardView {
        BoardView {
            board: grid_rows(&self.board),
            rows: self.board.rows(),
            cols: self.board.cols(),
            step: self.history.cursor(),
            total_steps: self.history.len(),
        }
    }

    /// Lists every catalogued lifeform in presentation order.
    pub fn lifeforms(&self) -> Vec<LifeformView> {
        self.catalog.list().iter().map(LifeformView::of).collect()
    }

    /// Stamps a catalogued lifeform onto the board at `(row, col)`.
    ///
    /// Fails with [`AutomataError::UnknownLifeform`] for an uncatalogued
    /// name and [`AutomataError::OutOfBounds`] when the pattern does not
    /// fit; a failed stamp leaves the board unchanged.
    pub fn add_lifeform(
        &mut self,
        name: &str,
        row: i64,
        col: i64,
    ) -> Result<BoardView, SessionError> {
        let lifeform = self.catalog.lookup(name)?;
        let (row, col) = request_position(row, col, &self.board)?;
        self.board.stamp(lifeform, row, col)?;
        Ok(self.board_state())
    }

    /// Flips one cell on the board.
    pub fn toggle_cell(&mut self, row: i64, col: i64) -> Result<BoardView, SessionError> {
        let (row, col) = request_position(row, col, &self.board)?;
        self.board.toggle(row, col)?;
        Ok(self.board_state())
    }

    /// Runs a simulation from the current board, replacing any prior
    /// history.
    ///
    /// `rule` is either the name `"conway_classic"` or a
    /// `B<digits>/S<digits>` rulestring; a malformed rulestring fails with
    /// [`AutomataError::InvalidRuleSpec`] before anything is computed. The
    /// board itself is left as generation zero, untouched.
    pub fn start(&mut self, rule: &str, iterations: i64) -> Result<RunView, SessionError> {
        let rule = request_rule(rule)?;
        if iterations > MAX_ITERATIONS {
            return Err(HistoryError::InvalidIterationCount(iterations).into());
        }

        let (history, stats) = run(&self.board, &rule, iterations)?;
        self.history = history;
        self.stats = Some(stats.clone());
        Ok(RunView {
            total_steps: self.history.len(),
            stats,
        })
    }

    /// Moves the history cursor one generation forward or backward.
    ///
    /// Saturates at both ends; fails with [`HistoryError::EmptyHistory`]
    /// when no run exists.
    pub fn step(&mut self, direction: Direction) -> Result<StepView, SessionError> {
        let grid = self.history.step(direction)?;
        Ok(StepView {
            board: grid_rows(grid),
            step: self.history.cursor(),
            total_steps: self.history.len(),
        })
    }

    /// Moves the history cursor to an absolute generation index.
    ///
    /// Fails with [`HistoryError::IndexOutOfRange`] outside the stored
    /// range.
    pub fn goto(&mut self, index: i64) -> Result<StepView, SessionError> {
        let index = usize::try_from(index).map_err(|_| HistoryError::IndexOutOfRange {
            index,
            len: self.history.len(),
        })?;
        let grid = self.history.goto(index)?;
        Ok(StepView {
            board: grid_rows(grid),
            step: self.history.cursor(),
            total_steps: self.history.len(),
        })
    }

    /// Discards the current history and statistics, keeping the board.
    pub fn stop(&mut self) {
        self.history.clear();
        self.stats = None;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::with_default_board()
    }
}

/// Builds the default all-dead board.
fn empty_default_grid() -> Grid {
    // DEFAULT_BOARD_SIZE is positive, so construction cannot fail.
    match Grid::new(DEFAULT_BOARD_SIZE, DEFAULT_BOARD_SIZE) {
        Ok(grid) => grid,
        Err(_) => unreachable!("default board size is positive"),
    }
}

/// Converts requested dimensions into a grid, mapping negatives to
/// [`AutomataError::InvalidDimension`].
fn request_grid(rows: i64, cols: i64) -> Result<Grid, SessionError> {
    match (usize::try_from(rows), usize::try_from(cols)) {
        (Ok(r), Ok(c)) => Ok(Grid::new(r, c)?),
        _ => Err(AutomataError::InvalidDimension { rows, cols }.into()),
    }
}

/// Converts a requested position, mapping negatives to
/// [`AutomataError::OutOfBounds`].
fn request_position(row: i64, col: i64, board: &Grid) -> Result<(usize, usize), SessionError> {
    match (usize::try_from(row), usize::try_from(col)) {
        (Ok(r), Ok(c)) => Ok((r, c)),
        _ => Err(AutomataError::OutOfBounds {
            row,
            col,
            rows: board.rows(),
            cols: board.cols(),
        }
        .into()),
    }
}

/// Resolves a requested rule: the classic name, or a rulestring.
fn request_rule(rule: &str) -> Result<Rule, SessionError> {
    if rule == "conway_classic" {
        return Ok(Rule::Classic);
    }
    Ok(rule.parse::<Rule>()?)
}
