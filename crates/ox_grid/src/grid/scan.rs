//! Win detection around a freshly placed mark.

use super::Grid;
use crate::coords::Coords;
use crate::direction::Direction;
use crate::player::{Cell, PlayerId};
use tracing::{instrument, trace};

/// Looks for a run of `cells_to_win` marks by `player` through `origin`.
///
/// Each axis is tried in [`Direction::pairs`] order. The run starts at
/// `origin`, extends along the first direction of the pair and then along
/// the second, so it may straddle the placed mark. The first axis that
/// reaches the required length wins; the returned cells are ordered origin
/// first, then outward along each half.
#[instrument(skip(grid, origin, player), fields(origin = %origin, player = %player))]
pub(super) fn find_win<T>(grid: &Grid<T>, origin: Coords, player: PlayerId) -> Option<Vec<Coords>> {
    let needed = grid.cells_to_win();
    if needed <= 1 {
        return Some(vec![origin]);
    }

    let owned = Some(Cell::Occupied(player));

    for pair in Direction::pairs() {
        let mut run = vec![origin];

        for dir in pair {
            let mut cursor = origin;
            loop {
                cursor = cursor.add(dir);

                // Off the board and foreign marks both end the walk
                if grid.cell_at(cursor) != owned {
                    break;
                }

                run.push(cursor);
                if run.len() == needed {
                    return Some(run);
                }
            }
        }

        trace!(?pair, length = run.len(), "Axis fell short");
    }

    None
}
