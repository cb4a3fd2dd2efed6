//! Win line invariant: a recorded win is a real run.

use super::Invariant;
use crate::direction::Direction;
use crate::grid::Grid;
use crate::player::Cell;
use std::collections::HashSet;
use strum::IntoEnumIterator;

/// Invariant: the recorded win is `cells_to_win` distinct, in-bounds cells
/// of one owner, forming a contiguous straight line.
///
/// Holds trivially when no win is recorded.
pub struct WinLineInvariant;

impl<T> Invariant<Grid<T>> for WinLineInvariant {
    fn holds(grid: &Grid<T>) -> bool {
        let Some(line) = grid.winning_cells() else {
            return true;
        };

        if line.len() != grid.cells_to_win() {
            return false;
        }

        let owners: HashSet<_> = line.iter().map(|&c| grid.cell_at(c)).collect();
        if owners.len() != 1 || !matches!(owners.iter().next(), Some(Some(Cell::Occupied(_)))) {
            return false;
        }

        // Sorted by column then row, a straight run steps by one fixed vector
        let mut sorted = line.to_vec();
        sorted.sort_by_key(|c| (c.x(), c.y()));
        let steps: HashSet<_> = sorted
            .windows(2)
            .map(|w| (w[1].x() - w[0].x(), w[1].y() - w[0].y()))
            .collect();

        match steps.len() {
            0 => true,
            1 => steps
                .iter()
                .all(|step| Direction::iter().any(|d| d.offset() == *step)),
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Winning cells form one owner's contiguous line of the required length"
    }
}
