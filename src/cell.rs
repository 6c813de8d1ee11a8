use serde::{Deserialize, Serialize};

/// Player-visible state of a single cell, as tracked by the engine grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Hidden,
    Flagged,
    Revealed(u8),
    Detonated,
}

impl CellState {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Snapshot of one cell for the presentation layer.
///
/// `is_mine` is populated only once the game has finished; during play the
/// mine layout stays hidden.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CellView {
    pub state: CellState,
    pub is_mine: Option<bool>,
}
