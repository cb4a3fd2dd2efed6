//! Mark count invariant: the counter matches the board.

use super::Invariant;
use crate::grid::Grid;

/// Invariant: `marks_placed` equals the number of occupied cells.
pub struct MarkCountInvariant;

impl<T> Invariant<Grid<T>> for MarkCountInvariant {
    fn holds(grid: &Grid<T>) -> bool {
        let occupied = grid.iter().filter(|(_, cell)| !cell.is_empty()).count();
        occupied == grid.marks_placed()
    }

    fn description() -> &'static str {
        "Mark counter matches occupied cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Coords, PlayerId};

    #[test]
    fn test_holds_through_play_and_clear() {
        let mut grid = Grid::with_size(|| PlayerId::new(1), 3).unwrap();
        assert!(MarkCountInvariant::holds(&grid));
        grid.place(Coords::new(1, 1));
        grid.place(Coords::new(1, 1));
        grid.place(Coords::new(9, 9));
        assert!(MarkCountInvariant::holds(&grid));
        grid.clear();
        assert!(MarkCountInvariant::holds(&grid));
    }

    #[test]
    fn test_detects_drift() {
        let mut grid = Grid::with_size(|| PlayerId::new(1), 3).unwrap();
        grid.cells[4] = Cell::Occupied(PlayerId::new(1));
        assert!(!MarkCountInvariant::holds(&grid));
    }
}
