//! Player identity and cell state.

use serde::{Deserialize, Serialize};

/// Identity of a player, as handed out by the turn source.
///
/// The grid only ever compares ids for equality.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[display("P{}", _0)]
pub struct PlayerId(u32);

impl PlayerId {
    /// Wraps a raw player number.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw player number.
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// A single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has marked this cell.
    #[default]
    Empty,
    /// Marked by a player.
    Occupied(PlayerId),
}

impl Cell {
    /// Returns the owner if the cell is marked.
    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}
