//! Birth/survival rules and generation stepping.

use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::AutomataError;
use crate::grid::Grid;

/// Neighbor counts that make a dead cell live under B3/S23.
const CLASSIC_BIRTH: &[u8] = &[3];
/// Neighbor counts that keep a live cell alive under B3/S23.
const CLASSIC_SURVIVE: &[u8] = &[2, 3];

/// A Life-family birth/survival rule.
///
/// The variant is decided once, at parse or construction time; evaluation
/// never re-inspects rule names or strings. [`Rule::Classic`] behaves exactly
/// like `Custom` with birth `{3}` and survive `{2, 3}`.
///
/// Counts in a `Custom` rule are unique, sorted, and each in `0..=8`; the
/// [`Rule::custom`] constructor and the rulestring parser both enforce this.
///
/// # Example
///
/// ```
/// use petri_automata::Rule;
///
/// let high_life: Rule = "B36/S23".parse().unwrap();
/// assert_eq!(high_life, Rule::custom(&[3, 6], &[2, 3]).unwrap());
/// assert!("X9/S".parse::<Rule>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rule {
    /// Standard Conway rules, B3/S23.
    Classic,
    /// Generalized birth/survival neighbor counts.
    Custom {
        /// Counts that make a dead cell live.
        birth: Vec<u8>,
        /// Counts that keep a live cell alive.
        survive: Vec<u8>,
    },
}

impl Rule {
    /// Creates a custom rule from birth and survival counts.
    ///
    /// Fails with [`AutomataError::InvalidRuleSpec`] on counts above 8 or
    /// duplicates. Counts are stored sorted.
    pub fn custom(birth: &[u8], survive: &[u8]) -> Result<Self, AutomataError> {
        Ok(Self::Custom {
            birth: validate_counts(birth, "birth")?,
            survive: validate_counts(survive, "survive")?,
        })
    }

    /// Returns the neighbor counts that make a dead cell live.
    pub fn birth_counts(&self) -> &[u8] {
        match self {
            Rule::Classic => CLASSIC_BIRTH,
            Rule::Custom { birth, .. } => birth,
        }
    }

    /// Returns the neighbor counts that keep a live cell alive.
    pub fn survive_counts(&self) -> &[u8] {
        match self {
            Rule::Classic => CLASSIC_SURVIVE,
            Rule::Custom { survive, .. } => survive,
        }
    }

    /// Evaluates the rule for one cell given its current state and live
    /// neighbor count.
    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        if alive {
            self.survive_counts().contains(&neighbors)
        } else {
            self.birth_counts().contains(&neighbors)
        }
    }
}

fn validate_counts(counts: &[u8], side: &str) -> Result<Vec<u8>, AutomataError> {
    let mut seen = Vec::with_capacity(counts.len());
    for &count in counts {
        if count > 8 {
            return Err(AutomataError::InvalidRuleSpec(format!(
                "{side} count {count} is above the 8-neighbor maximum"
            )));
        }
        if seen.contains(&count) {
            return Err(AutomataError::InvalidRuleSpec(format!(
                "duplicate {side} count {count}"
            )));
        }
        seen.push(count);
    }
    seen.sort_unstable();
    Ok(seen)
}

impl FromStr for Rule {
    type Err = AutomataError;

    /// Parses a `B<digits>/S<digits>` rulestring, e.g. `"B3/S23"` for Life
    /// or `"B36/S23"` for HighLife. Either digit list may be empty
    /// (`"B2/S"` is Seeds). Anything else is rejected here, never deferred
    /// to evaluation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (birth_part, survive_part) = s.split_once('/').ok_or_else(|| {
            AutomataError::InvalidRuleSpec(format!("expected B<digits>/S<digits>, got {s:?}"))
        })?;
        Ok(Rule::Custom {
            birth: parse_counts(birth_part, 'B', s)?,
            survive: parse_counts(survive_part, 'S', s)?,
        })
    }
}

fn parse_counts(part: &str, prefix: char, full: &str) -> Result<Vec<u8>, AutomataError> {
    let digits = part
        .strip_prefix(prefix)
        .or_else(|| part.strip_prefix(prefix.to_ascii_lowercase()))
        .ok_or_else(|| {
            AutomataError::InvalidRuleSpec(format!(
                "expected {prefix}<digits> in rulestring {full:?}"
            ))
        })?;

    let mut counts = Vec::new();
    for ch in digits.chars() {
        let count = match ch.to_digit(10) {
            Some(d) if d <= 8 => d as u8,
            _ => {
                return Err(AutomataError::InvalidRuleSpec(format!(
                    "neighbor counts must be digits 0-8, got {ch:?} in rulestring {full:?}"
                )));
            }
        };
        if counts.contains(&count) {
            return Err(AutomataError::InvalidRuleSpec(format!(
                "duplicate neighbor count {count} in rulestring {full:?}"
            )));
        }
        counts.push(count);
    }
    counts.sort_unstable();
    Ok(counts)
}

/// Common named rules.
pub mod presets {
    use super::Rule;

    /// Conway's Game of Life (B3/S23).
    pub fn life() -> Rule {
        Rule::Classic
    }

    /// HighLife (B36/S23), Life plus a replicator.
    pub fn high_life() -> Rule {
        Rule::Custom {
            birth: vec![3, 6],
            survive: vec![2, 3],
        }
    }

    /// Seeds (B2/S), every live cell dies each generation.
    pub fn seeds() -> Rule {
        Rule::Custom {
            birth: vec![2],
            survive: vec![],
        }
    }

    /// Day & Night (B3678/S34678), symmetric under inversion.
    pub fn day_night() -> Rule {
        Rule::Custom {
            birth: vec![3, 6, 7, 8],
            survive: vec![3, 4, 6, 7, 8],
        }
    }

    /// Maze (B3/S12345), freezes into corridor patterns.
    pub fn maze() -> Rule {
        Rule::Custom {
            birth: vec![3],
            survive: vec![1, 2, 3, 4, 5],
        }
    }
}

/// Computes the next generation of a grid under a rule.
///
/// The returned grid has the same dimensions and edge policy as the input.
/// Every next-cell value is derived from the input snapshot alone, so no
/// cell ever observes an already-updated neighbor. The input is not mutated.
///
/// # Example
///
/// ```
/// use petri_automata::{Grid, Rule, next_generation};
///
/// // Horizontal blinker flips to vertical under Classic rules.
/// let mut grid = Grid::new(5, 5).unwrap();
/// for col in 1..4 {
///     grid.set(2, col, true).unwrap();
/// }
/// let next = next_generation(&grid, &Rule::Classic);
/// assert!(next.get(1, 2).unwrap() && next.get(2, 2).unwrap() && next.get(3, 2).unwrap());
/// ```
pub fn next_generation(grid: &Grid, rule: &Rule) -> Grid {
    let rows = grid.rows();
    let cols = grid.cols();
    let mut cells = vec![false; rows * cols];

    for row in 0..rows {
        for col in 0..cols {
            let neighbors = grid.count_live_neighbors(row, col);
            cells[row * cols + col] = rule.next_state(grid.is_live(row, col), neighbors);
        }
    }

    Grid::from_parts(rows, cols, grid.wrap(), cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(rows: usize, cols: usize, live: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(rows, cols).unwrap();
        for &(row, col) in live {
            grid.set(row, col, true).unwrap();
        }
        grid
    }

    #[test]
    fn test_parse_life_rulestring() {
        let rule: Rule = "B3/S23".parse().unwrap();
        assert_eq!(rule, Rule::custom(&[3], &[2, 3]).unwrap());
    }

    #[test]
    fn test_parse_high_life_rulestring() {
        let rule: Rule = "B36/S23".parse().unwrap();
        assert_eq!(rule, Rule::custom(&[3, 6], &[2, 3]).unwrap());
        assert_eq!(rule, presets::high_life());
    }

    #[test]
    fn test_parse_empty_survive_side() {
        let rule: Rule = "B2/S".parse().unwrap();
        assert_eq!(rule, presets::seeds());
    }

    #[test]
    fn test_parse_lowercase() {
        let rule: Rule = "b3/s23".parse().unwrap();
        assert_eq!(rule, Rule::custom(&[3], &[2, 3]).unwrap());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["X9/S", "B3S23", "", "B3", "3/23", "B3/S23/x", "B39/S23", "B3/S2a"] {
            assert!(
                matches!(bad.parse::<Rule>(), Err(AutomataError::InvalidRuleSpec(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_duplicate_digits() {
        assert!(matches!(
            "B33/S23".parse::<Rule>(),
            Err(AutomataError::InvalidRuleSpec(_))
        ));
    }

    #[test]
    fn test_custom_constructor_validates() {
        assert!(Rule::custom(&[9], &[2]).is_err());
        assert!(Rule::custom(&[3], &[2, 2]).is_err());

        // Counts come back sorted regardless of input order.
        let rule = Rule::custom(&[6, 3], &[3, 2]).unwrap();
        assert_eq!(rule.birth_counts(), &[3, 6]);
        assert_eq!(rule.survive_counts(), &[2, 3]);
    }

    #[test]
    fn test_classic_equals_custom_b3_s23() {
        let custom = Rule::custom(&[3], &[2, 3]).unwrap();
        let grid = grid_with(
            8,
            8,
            &[(1, 1), (1, 2), (2, 1), (4, 4), (4, 5), (4, 6), (6, 0), (7, 7)],
        );

        assert_eq!(
            next_generation(&grid, &Rule::Classic),
            next_generation(&grid, &custom)
        );
    }

    #[test]
    fn test_next_generation_preserves_dimensions() {
        let grid = grid_with(3, 9, &[(0, 0), (1, 4)]);
        let next = next_generation(&grid, &Rule::Classic);
        assert_eq!(next.rows(), 3);
        assert_eq!(next.cols(), 9);
    }

    #[test]
    fn test_next_generation_does_not_mutate_input() {
        let grid = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let before = grid.snapshot();
        let _ = next_generation(&grid, &Rule::Classic);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_lone_corner_cell_dies() {
        let grid = grid_with(5, 5, &[(0, 0)]);
        for rule in [Rule::Classic, presets::high_life(), presets::day_night()] {
            let next = next_generation(&grid, &rule);
            assert!(!next.get(0, 0).unwrap(), "{rule:?}");
        }
    }

    #[test]
    fn test_block_is_still_life() {
        let grid = grid_with(5, 5, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        assert_eq!(next_generation(&grid, &Rule::Classic), grid);
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let vertical = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);

        let next = next_generation(&horizontal, &Rule::Classic);
        assert_eq!(next, vertical);
        assert_eq!(next_generation(&next, &Rule::Classic), horizontal);
    }

    #[test]
    fn test_seeds_kills_every_live_cell() {
        let grid = grid_with(6, 6, &[(2, 2), (2, 3), (3, 2)]);
        let next = next_generation(&grid, &presets::seeds());
        assert!(!next.get(2, 2).unwrap());
        assert!(!next.get(2, 3).unwrap());
        assert!(!next.get(3, 2).unwrap());
    }

    #[test]
    fn test_wrapping_grid_keeps_edge_policy() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set_wrap(true);
        let next = next_generation(&grid, &Rule::Classic);
        assert!(next.wrap());
    }

    #[test]
    fn test_blinker_wraps_across_edge() {
        // A horizontal blinker on the top row of a wrapping grid flips to a
        // vertical one that crosses the seam.
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_wrap(true);
        for col in 1..4 {
            grid.set(0, col, true).unwrap();
        }

        let next = next_generation(&grid, &Rule::Classic);
        assert!(next.get(4, 2).unwrap());
        assert!(next.get(0, 2).unwrap());
        assert!(next.get(1, 2).unwrap());
        assert_eq!(next.population(), 3);
    }
}
