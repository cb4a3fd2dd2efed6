//! First-class invariants for grids.
//!
//! Invariants are logical properties that must hold after every placement
//! and every clear. They are testable independently and document what a
//! [`Grid`](crate::Grid) guarantees.

mod mark_capacity;
mod mark_count;
mod win_line;

pub use mark_capacity::MarkCapacityInvariant;
pub use mark_count::MarkCountInvariant;
pub use win_line::WinLineInvariant;

use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for 2- and 3-tuples of invariants over the same state.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Every grid invariant as a composable set.
pub type GridInvariants = (MarkCountInvariant, MarkCapacityInvariant, WinLineInvariant);

/// Logs and debug-asserts that `GridInvariants` hold for `state`.
///
/// Compiled to a no-op without debug assertions.
pub(crate) fn assert_invariants<S>(state: &S)
where
    GridInvariants: InvariantSet<S>,
{
    if !cfg!(debug_assertions) {
        return;
    }

    if let Err(violations) = GridInvariants::check_all(state) {
        for v in &violations {
            warn!(violation = %v, "Grid invariant violated");
        }
        debug_assert!(false, "Grid invariants violated: {:?}", violations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Coords, Grid, PlayerId};

    #[test]
    fn test_invariant_set_holds_for_empty_grid() {
        let grid = Grid::with_size(|| PlayerId::new(1), 3).unwrap();
        assert!(GridInvariants::check_all(&grid).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_win() {
        let mut grid = Grid::with_size(|| PlayerId::new(1), 3).unwrap();
        for y in 0..3 {
            grid.place(Coords::new(2, y));
        }
        assert!(grid.check_win());
        assert!(GridInvariants::check_all(&grid).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut grid = Grid::with_size(|| PlayerId::new(1), 3).unwrap();
        grid.place(Coords::new(0, 0));
        grid.cells[1] = Cell::Occupied(PlayerId::new(2));
        grid.win_combination = Some(vec![Coords::new(0, 0)]);

        let violations = GridInvariants::check_all(&grid).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_assert_invariants_accepts_consistent_grid() {
        let mut grid = Grid::with_size(|| PlayerId::new(1), 3).unwrap();
        grid.place(Coords::new(1, 1));
        assert_invariants(&grid);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Grid invariants violated")]
    fn test_assert_invariants_panics_on_drift_in_debug() {
        let mut grid = Grid::with_size(|| PlayerId::new(1), 3).unwrap();
        grid.marks_placed = 5;
        assert_invariants(&grid);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let grid = Grid::with_size(|| PlayerId::new(1), 4).unwrap();
        type Counting = (MarkCountInvariant, MarkCapacityInvariant);
        assert!(Counting::check_all(&grid).is_ok());
    }
}
