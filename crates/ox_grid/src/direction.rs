//! Unit step directions and the scanning axes built from them.

use serde::{Deserialize, Serialize};

/// One of the 8 unit steps on a square grid.
///
/// North points to lower row indices.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Direction {
    /// Up (0, -1).
    N,
    /// Down (0, 1).
    S,
    /// Right (1, 0).
    E,
    /// Left (-1, 0).
    W,
    /// Up-right (1, -1).
    NE,
    /// Down-left (-1, 1).
    SW,
    /// Up-left (-1, -1).
    NW,
    /// Down-right (1, 1).
    SE,
}

impl Direction {
    /// The four opposite pairs scanned for a win, in scan order.
    const PAIRS: [[Direction; 2]; 4] = [
        [Direction::E, Direction::W],
        [Direction::N, Direction::S],
        [Direction::NE, Direction::SW],
        [Direction::NW, Direction::SE],
    ];

    /// Returns the `(dx, dy)` step of this direction.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::N => (0, -1),
            Direction::S => (0, 1),
            Direction::E => (1, 0),
            Direction::W => (-1, 0),
            Direction::NE => (1, -1),
            Direction::SW => (-1, 1),
            Direction::NW => (-1, -1),
            Direction::SE => (1, 1),
        }
    }

    /// Returns the direction pointing the other way.
    pub const fn opposite(self) -> Self {
        match self {
            Direction::N => Direction::S,
            Direction::S => Direction::N,
            Direction::E => Direction::W,
            Direction::W => Direction::E,
            Direction::NE => Direction::SW,
            Direction::SW => Direction::NE,
            Direction::NW => Direction::SE,
            Direction::SE => Direction::NW,
        }
    }

    /// Horizontal, vertical and both diagonal axes as opposite pairs.
    ///
    /// The order is fixed: `[E, W]`, `[N, S]`, `[NE, SW]`, `[NW, SE]`.
    pub const fn pairs() -> [[Direction; 2]; 4] {
        Self::PAIRS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_eight_distinct_unit_vectors() {
        let offsets: HashSet<_> = Direction::iter().map(Direction::offset).collect();
        assert_eq!(offsets.len(), 8);
        assert!(!offsets.contains(&(0, 0)));
        assert!(
            offsets
                .iter()
                .all(|(dx, dy)| (-1..=1).contains(dx) && (-1..=1).contains(dy))
        );
    }

    #[test]
    fn test_pairs_are_opposites() {
        for [a, b] in Direction::pairs() {
            assert_eq!(a.opposite(), b);
            let (ax, ay) = a.offset();
            let (bx, by) = b.offset();
            assert_eq!((ax + bx, ay + by), (0, 0));
        }
    }

    #[test]
    fn test_pairs_cover_every_direction_once() {
        let covered: Vec<_> = Direction::pairs().into_iter().flatten().collect();
        assert_eq!(covered.len(), 8);
        for dir in Direction::iter() {
            assert!(covered.contains(&dir), "{dir} missing from pairs");
        }
    }

    #[test]
    fn test_pairs_order_is_stable() {
        assert_eq!(Direction::pairs(), Direction::pairs());
        assert_eq!(Direction::pairs()[0], [Direction::E, Direction::W]);
        assert_eq!(Direction::pairs()[3], [Direction::NW, Direction::SE]);
    }
}
