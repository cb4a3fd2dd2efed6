//! Game status derived from a grid.

use serde::{Deserialize, Serialize};

/// Where a grid stands in its lifecycle.
///
/// `Won` and `Drawn` are terminal until the grid is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum GridStatus {
    /// No winning run yet and free cells remain.
    Open,
    /// A winning run has been recorded.
    Won,
    /// Every cell is marked and nobody won.
    Drawn,
}

impl GridStatus {
    /// Returns true if no further play is meaningful.
    pub fn is_closed(self) -> bool {
        !matches!(self, GridStatus::Open)
    }
}
