//! The board: cell ownership, placement and win tracking.

mod scan;
mod status;

pub use status::GridStatus;

use crate::config::{ConfigError, GridConfig};
use crate::coords::Coords;
use crate::player::{Cell, PlayerId};
use crate::turn::TurnSource;
use tracing::{debug, info, instrument};

/// A `size × size` board for N-in-a-row games.
///
/// The grid owns its cells and the win it detected, but not the turn
/// order: every placement asks the injected [`TurnSource`] whose mark it
/// is. A winning run, once recorded, stays until [`Grid::clear`].
#[derive(Debug, Clone)]
pub struct Grid<T> {
    turns: T,
    size: usize,
    cells_to_win: usize,
    pub(crate) cells: Vec<Cell>,
    pub(crate) marks_placed: usize,
    pub(crate) win_combination: Option<Vec<Coords>>,
}

impl<T: TurnSource> Grid<T> {
    /// Creates an empty board where `cells_to_win` marks in a row win.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the board cannot be won (zero size, zero
    /// or oversized win length).
    #[instrument(skip(turns))]
    pub fn new(turns: T, size: usize, cells_to_win: usize) -> Result<Self, ConfigError> {
        GridConfig::new(size)
            .with_cells_to_win(cells_to_win)
            .validate()?;

        debug!("Grid created");
        Ok(Self::assemble(turns, size, cells_to_win))
    }

    /// Creates an empty board where a full row, column or diagonal wins.
    pub fn with_size(turns: T, size: usize) -> Result<Self, ConfigError> {
        Self::new(turns, size, size)
    }

    /// Creates an empty board from a configuration.
    pub fn from_config(turns: T, config: &GridConfig) -> Result<Self, ConfigError> {
        Self::new(turns, *config.size(), config.effective_cells_to_win())
    }

    /// Places the current player's mark at `coords`.
    ///
    /// Returns `false` and leaves the board untouched if the cell is
    /// occupied or off the board. Otherwise the mark is placed, and once
    /// enough marks are down to make a run possible, the axes through
    /// `coords` are scanned for a win.
    #[instrument(skip(self, coords), fields(coords = %coords))]
    pub fn place(&mut self, coords: Coords) -> bool {
        let idx = match self.index(coords) {
            Some(idx) if self.cells[idx].is_empty() => idx,
            _ => {
                debug!("Placement rejected");
                return false;
            }
        };

        let player = self.turns.current_player();
        self.cells[idx] = Cell::Occupied(player);
        self.marks_placed += 1;
        debug!(%player, marks = self.marks_placed, "Mark placed");

        if self.win_combination.is_some() || self.marks_placed < self.cells_to_win {
            return true;
        }

        if let Some(line) = scan::find_win(self, coords, player) {
            info!(%player, length = line.len(), "Winning run found");
            self.win_combination = Some(line);
        } else if self.is_full() {
            info!("Board full without a winner");
        }

        true
    }
}

impl<T> Grid<T> {
    /// Builds an empty grid from dimensions already known to be valid.
    pub(crate) fn assemble(turns: T, size: usize, cells_to_win: usize) -> Self {
        Self {
            turns,
            size,
            cells_to_win,
            cells: vec![Cell::Empty; size * size],
            marks_placed: 0,
            win_combination: None,
        }
    }

    /// Returns the cell at `coords`, or `None` if it is off the board.
    pub fn cell_at(&self, coords: Coords) -> Option<Cell> {
        self.index(coords).map(|idx| self.cells[idx])
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Side length of the board.
    pub fn rank(&self) -> usize {
        self.size
    }

    /// Length of a winning run.
    pub fn cells_to_win(&self) -> usize {
        self.cells_to_win
    }

    /// Number of marks currently on the board.
    pub fn marks_placed(&self) -> usize {
        self.marks_placed
    }

    /// Checks if `coords` lies on the board.
    pub fn includes(&self, coords: Coords) -> bool {
        self.index(coords).is_some()
    }

    /// Empties every cell and forgets any win.
    ///
    /// The turn source is left alone; rotating turns is its owner's job.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.marks_placed = 0;
        self.win_combination = None;
        self.cells.fill(Cell::Empty);
        debug!("Grid cleared");
    }

    /// Checks if a winning run has been recorded.
    pub fn check_win(&self) -> bool {
        self.win_combination.is_some()
    }

    /// The recorded winning run, in scan order.
    pub fn winning_cells(&self) -> Option<&[Coords]> {
        self.win_combination.as_deref()
    }

    /// Owner of the winning run.
    pub fn winner(&self) -> Option<PlayerId> {
        self.winning_cells()
            .and_then(|line| line.first())
            .and_then(|&c| self.cell_at(c))
            .and_then(Cell::owner)
    }

    /// Checks if every cell is marked.
    pub fn is_full(&self) -> bool {
        self.marks_placed == self.cell_count()
    }

    /// Checks if the game on this board has ended, by a win or a draw.
    pub fn is_closed(&self) -> bool {
        self.check_win() || self.is_full()
    }

    /// Current lifecycle state.
    pub fn status(&self) -> GridStatus {
        if self.check_win() {
            GridStatus::Won
        } else if self.is_full() {
            GridStatus::Drawn
        } else {
            GridStatus::Open
        }
    }

    /// Iterates over every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coords, Cell)> + '_ {
        let side = self.size;
        self.cells.iter().enumerate().map(move |(idx, &cell)| {
            // Side length is validated to fit i32 at construction
            let coords = Coords::new((idx % side) as i32, (idx / side) as i32);
            (coords, cell)
        })
    }

    /// The injected turn source.
    pub fn turns(&self) -> &T {
        &self.turns
    }

    /// Mutable access to the turn source, for the controller that owns it.
    pub fn turns_mut(&mut self) -> &mut T {
        &mut self.turns
    }

    /// Row-major index of `coords`, if on the board.
    pub(crate) fn index(&self, coords: Coords) -> Option<usize> {
        let x = usize::try_from(coords.x()).ok()?;
        let y = usize::try_from(coords.y()).ok()?;
        (x < self.size && y < self.size).then_some(y * self.size + x)
    }
}
