//! OX Grid - square-grid board and win detection for N-in-a-row games
//!
//! This library tracks cell ownership on a `size × size` board and, after
//! every placed mark, decides whether that mark completes a run of
//! `cells_to_win` cells along a row, column or diagonal.
//!
//! # Architecture
//!
//! - **Grid**: board state and win scan, parameterized by a [`TurnSource`]
//! - **Coords / Direction**: positions and the 4 scanning axes
//! - **Invariants**: composable consistency checks over a grid
//! - **Config**: TOML-backed board configuration
//! - **Match**: alternating-turn controller driving a grid
//!
//! # Example
//!
//! ```
//! use ox_grid::{Coords, Grid, PlayerId};
//!
//! # fn example() -> Result<(), ox_grid::ConfigError> {
//! let mut grid = Grid::with_size(|| PlayerId::new(1), 3)?;
//! for x in 0..3 {
//!     assert!(grid.place(Coords::new(x, 0)));
//! }
//! assert!(grid.check_win());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod coords;
mod direction;
mod game;
mod grid;
mod invariants;
mod player;
mod turn;

// Crate-level exports - Geometry
pub use coords::Coords;
pub use direction::Direction;

// Crate-level exports - Board
pub use grid::{Grid, GridStatus};
pub use player::{Cell, PlayerId};

// Crate-level exports - Turns
pub use turn::{AlternatingTurns, TurnSource};

// Crate-level exports - Configuration
pub use config::{ConfigError, GridConfig};

// Crate-level exports - Match controller
pub use game::{Match, MoveError};

// Crate-level exports - Invariants
pub use invariants::{
    GridInvariants, Invariant, InvariantSet, InvariantViolation, MarkCapacityInvariant,
    MarkCountInvariant, WinLineInvariant,
};
