//! Board coordinates.

use crate::direction::Direction;
use serde::{Deserialize, Serialize};

/// A position on the board.
///
/// `x` is the column and grows to the right, `y` is the row and grows
/// downward. Coordinates are not tied to any board, so stepping off the
/// edge yields a perfectly valid (if out-of-range) value; the grid decides
/// what is in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("({}, {})", x, y)]
pub struct Coords {
    x: i32,
    y: i32,
}

impl Coords {
    /// Creates a coordinate pair.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Column index.
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Row index.
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Returns the neighbour one step away in `direction`.
    ///
    /// Steps past `i32::MAX` or `i32::MIN` wrap around; such coordinates
    /// are off every board either way.
    pub fn add(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy))
    }
}

impl From<(i32, i32)> for Coords {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
