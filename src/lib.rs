//! Minesweeper board engine: deterministic mine placement with first-click
//! safety, cached adjacency counts, flood-fill reveal, and win/loss
//! detection. Rendering, timers, and score storage live with the embedder.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use score::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod score;
mod types;

/// Validated board configuration: grid dimensions plus mine count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    rows: Coord,
    columns: Coord,
    mine_count: CellCount,
}

impl DifficultyProfile {
    pub(crate) const fn new_unchecked(rows: Coord, columns: Coord, mine_count: CellCount) -> Self {
        Self {
            rows,
            columns,
            mine_count,
        }
    }

    /// Builds an arbitrary profile, rejecting degenerate configurations.
    pub fn new(rows: Coord, columns: Coord, mine_count: CellCount) -> Result<Self> {
        if rows == 0 || columns == 0 || mine_count == 0 {
            return Err(GameError::InvalidProfile);
        }
        if mine_count >= mult(rows, columns) {
            return Err(GameError::InvalidProfile);
        }
        Ok(Self::new_unchecked(rows, columns, mine_count))
    }

    pub const fn rows(&self) -> Coord {
        self.rows
    }

    pub const fn columns(&self) -> Coord {
        self.columns
    }

    pub const fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.columns)
    }

    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }
}

/// The three standard difficulty presets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Expert,
}

impl Level {
    /// Expert plays on a 16-row, 24-column field; the axis pairing with the
    /// mine count is part of the classic layouts and must not be swapped.
    pub const fn profile(self) -> DifficultyProfile {
        match self {
            Self::Beginner => DifficultyProfile::new_unchecked(8, 8, 10),
            Self::Intermediate => DifficultyProfile::new_unchecked(16, 16, 40),
            Self::Expert => DifficultyProfile::new_unchecked(16, 24, 99),
        }
    }
}

/// A generated minefield: mine mask plus adjacency counts, both fixed at
/// construction time. All play-time mutation lives in [`GameEngine`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    mines: Array2<bool>,
    counts: Array2<u8>,
    mine_count: CellCount,
}

impl Board {
    pub(crate) fn from_mine_mask(mines: Array2<bool>) -> Self {
        let counts = Array2::from_shape_fn(mines.dim(), |(row, column)| {
            mines
                .iter_neighbors((row as Coord, column as Coord))
                .filter(|&pos| mines[pos.to_nd_index()])
                .count() as u8
        });
        let mine_count = mines.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Self {
            mines,
            counts,
            mine_count,
        }
    }

    /// Builds a board from explicit mine positions.
    pub fn from_mine_ids(rows: Coord, columns: Coord, mine_ids: &[CellId]) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(GameError::InvalidProfile);
        }
        let total = mult(rows, columns);
        let mut mines = Array2::from_elem((rows as usize, columns as usize), false);
        for &id in mine_ids {
            if id >= total {
                return Err(GameError::InvalidCellId);
            }
            mines[coords_of(id, columns).to_nd_index()] = true;
        }
        Ok(Self::from_mine_mask(mines))
    }

    pub fn rows(&self) -> Coord {
        self.mines.dim().0 as Coord
    }

    pub fn columns(&self) -> Coord {
        self.mines.dim().1 as Coord
    }

    pub fn total_cells(&self) -> CellCount {
        self.mines.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.mines[coords.to_nd_index()]
    }

    /// Number of mines among the up-to-8 grid neighbors.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.counts[coords.to_nd_index()]
    }

    /// All mine positions in ascending id order.
    pub fn mine_ids(&self) -> Vec<CellId> {
        let columns = self.columns();
        self.mines
            .indexed_iter()
            .filter(|(_, &is_mine)| is_mine)
            .map(|((row, column), _)| id_of((row as Coord, column as Coord), columns))
            .collect()
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.mines.iter_neighbors(coords)
    }
}

/// One cell revealed by a [`GameEngine::reveal`] call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RevealedCell {
    pub id: CellId,
    pub adjacent_mines: u8,
}

/// Outcome of a reveal request, listing every cell the call changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed(Vec<RevealedCell>),
    Won(Vec<RevealedCell>),
    Lost { triggered: CellId, mines: Vec<CellId> },
}

impl RevealOutcome {
    pub fn has_update(&self) -> bool {
        !matches!(self, Self::NoChange)
    }

    /// Cells newly revealed by the call; empty for no-ops and losses.
    pub fn revealed_cells(&self) -> &[RevealedCell] {
        match self {
            Self::Revealed(cells) | Self::Won(cells) => cells,
            Self::NoChange | Self::Lost { .. } => &[],
        }
    }
}

/// Outcome of a flag toggle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}
