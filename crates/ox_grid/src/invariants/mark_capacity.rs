//! Mark capacity invariant: never more marks than cells.

use super::Invariant;
use crate::grid::Grid;

/// Invariant: `marks_placed` never exceeds the number of cells.
pub struct MarkCapacityInvariant;

impl<T> Invariant<Grid<T>> for MarkCapacityInvariant {
    fn holds(grid: &Grid<T>) -> bool {
        grid.marks_placed() <= grid.cell_count()
    }

    fn description() -> &'static str {
        "Mark counter fits the board"
    }
}
