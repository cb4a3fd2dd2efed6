//! Turn-taking controller around a grid.
//!
//! The grid itself never decides whose turn it is. `Match` is the thin
//! layer that does: it owns an [`AlternatingTurns`] inside the grid,
//! explains rejected moves, and passes the turn after every move that
//! leaves the game open.

use crate::config::{ConfigError, GridConfig};
use crate::coords::Coords;
use crate::grid::{Grid, GridStatus};
use crate::invariants::assert_invariants;
use crate::player::PlayerId;
use crate::turn::{AlternatingTurns, TurnSource};
use tracing::{debug, info, instrument};

/// Error that can occur when playing a move through a [`Match`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell is already marked.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coords),

    /// The coordinates are off the board.
    #[display("Cell {} is outside the board", _0)]
    OutOfBounds(Coords),

    /// The game has been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// A game session: one grid plus an alternating turn order.
#[derive(Debug, Clone)]
pub struct Match {
    grid: Grid<AlternatingTurns>,
}

impl Match {
    /// Creates a two-player match on a board described by `config`.
    #[instrument(skip(config), fields(size = *config.size()))]
    pub fn new(config: &GridConfig) -> Result<Self, ConfigError> {
        Self::with_turns(config, AlternatingTurns::two_player())
    }

    /// Creates a match with an explicit turn order.
    pub fn with_turns(config: &GridConfig, turns: AlternatingTurns) -> Result<Self, ConfigError> {
        let grid = Grid::from_config(turns, config)?;
        Ok(Self { grid })
    }

    /// Classic 3×3, three-in-a-row, two players.
    pub fn classic() -> Self {
        Self {
            grid: Grid::assemble(AlternatingTurns::two_player(), 3, 3),
        }
    }

    /// Plays the current player's mark at `coords`.
    ///
    /// # Errors
    ///
    /// Rejects the move if the game is over, the cell is off the board, or
    /// the cell is taken. A rejected move changes nothing.
    #[instrument(skip(self, coords), fields(coords = %coords, player = %self.to_move()))]
    pub fn play(&mut self, coords: Coords) -> Result<GridStatus, MoveError> {
        if self.grid.is_closed() {
            return Err(MoveError::GameOver);
        }
        if !self.grid.includes(coords) {
            return Err(MoveError::OutOfBounds(coords));
        }
        if !self.grid.place(coords) {
            return Err(MoveError::CellOccupied(coords));
        }

        assert_invariants(&self.grid);

        let status = self.grid.status();
        match status {
            GridStatus::Open => self.grid.turns_mut().advance(),
            GridStatus::Won => info!(winner = ?self.grid.winner(), "Match won"),
            GridStatus::Drawn => info!("Match drawn"),
        }
        Ok(status)
    }

    /// Clears the board and hands the first move back to the first player.
    #[instrument(skip(self))]
    pub fn rematch(&mut self) {
        self.grid.clear();
        self.grid.turns_mut().reset();
        debug!("Rematch started");
    }

    /// Player whose mark the next move places.
    pub fn to_move(&self) -> PlayerId {
        self.grid.turns().current_player()
    }

    /// The board.
    pub fn grid(&self) -> &Grid<AlternatingTurns> {
        &self.grid
    }
}
