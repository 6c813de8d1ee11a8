use std::collections::{HashSet, VecDeque};

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Lifecycle of a single game.
///
/// Valid transitions:
/// - NotStarted -> InProgress (the first reveal generates the board)
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_not_started(self) -> bool {
        matches!(self, Self::NotStarted)
    }

    /// Terminal states reject further reveal/flag mutations.
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// Orchestrates one game: owns the board (once generated), the per-cell
/// state grid, and the win/loss bookkeeping. All mutation goes through
/// [`reveal`](Self::reveal) and [`toggle_flag`](Self::toggle_flag); every
/// precondition failure other than an out-of-range id is a tolerated no-op.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEngine {
    profile: DifficultyProfile,
    seed: u64,
    board: Option<Board>,
    grid: Array2<CellState>,
    revealed_count: CellCount,
    flagged_count: CellCount,
    status: GameStatus,
    triggered_mine: Option<CellId>,
}

impl GameEngine {
    /// New game with a non-deterministic placement seed.
    pub fn new(profile: DifficultyProfile) -> Self {
        Self::with_seed(profile, rand::random())
    }

    /// New game whose eventual board is fully determined by `seed`.
    pub fn with_seed(profile: DifficultyProfile, seed: u64) -> Self {
        Self {
            profile,
            seed,
            board: None,
            grid: Array2::default((profile.rows() as usize, profile.columns() as usize)),
            revealed_count: 0,
            flagged_count: 0,
            status: GameStatus::NotStarted,
            triggered_mine: None,
        }
    }

    /// New game over a pre-built layout. First-click board generation (and
    /// with it first-click safety) is skipped; the NotStarted -> InProgress
    /// transition still happens on the first reveal.
    pub fn with_board(board: Board) -> Self {
        let profile =
            DifficultyProfile::new_unchecked(board.rows(), board.columns(), board.mine_count());
        let mut engine = Self::with_seed(profile, 0);
        engine.board = Some(board);
        engine
    }

    pub fn profile(&self) -> DifficultyProfile {
        self.profile
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// Mine total minus flags, the counter UIs display; negative when
    /// overflagged.
    pub fn mines_left(&self) -> isize {
        self.profile.mine_count() as isize - self.flagged_count as isize
    }

    /// The mine that ended the game, if it ended in a loss.
    pub fn triggered_mine(&self) -> Option<CellId> {
        self.triggered_mine
    }

    /// Mine positions, available once the board exists. Intended for
    /// end-of-game display; querying it mid-game leaks the hidden layout.
    pub fn mine_layout(&self) -> Option<Vec<CellId>> {
        self.board.as_ref().map(Board::mine_ids)
    }

    /// Display snapshot of one cell.
    pub fn cell_view(&self, id: CellId) -> Result<CellView> {
        let coords = self.validate_id(id)?;
        let is_mine = if self.status.is_finished() {
            self.board.as_ref().map(|board| board.contains_mine(coords))
        } else {
            None
        };
        Ok(CellView {
            state: self.grid[coords.to_nd_index()],
            is_mine,
        })
    }

    /// Reveals a cell.
    ///
    /// The first reveal generates the board with the clicked cell and its
    /// neighbors excluded from mine placement, so it can never lose.
    /// Revealing a mine finishes the game and reports the full layout for
    /// the end-of-game display; revealing a zero-count cell expands through
    /// the connected zero region. The outcome lists every cell this call
    /// changed. Finished games and revealed or flagged targets are no-ops.
    pub fn reveal(&mut self, id: CellId) -> Result<RevealOutcome> {
        let coords = self.validate_id(id)?;

        if self.status.is_finished() {
            return Ok(RevealOutcome::NoChange);
        }
        if !matches!(self.grid[coords.to_nd_index()], CellState::Hidden) {
            return Ok(RevealOutcome::NoChange);
        }

        self.ensure_board(coords)?;
        let board = self.board.as_ref().expect("board generated on first reveal");

        if board.contains_mine(coords) {
            self.grid[coords.to_nd_index()] = CellState::Detonated;
            self.triggered_mine = Some(id);
            self.status = GameStatus::Lost;
            log::debug!("mine hit at cell {id}, game lost");
            return Ok(RevealOutcome::Lost {
                triggered: id,
                mines: board.mine_ids(),
            });
        }

        let columns = self.profile.columns();
        let mut revealed = Vec::new();

        let count = board.adjacent_mine_count(coords);
        self.grid[coords.to_nd_index()] = CellState::Revealed(count);
        self.revealed_count += 1;
        revealed.push(RevealedCell {
            id,
            adjacent_mines: count,
        });
        log::debug!("revealed cell {id}, {count} adjacent mines");

        if count == 0 {
            let mut visited = HashSet::from([coords]);
            let mut to_visit: VecDeque<_> = board
                .iter_neighbors(coords)
                .filter(|&pos| matches!(self.grid[pos.to_nd_index()], CellState::Hidden))
                .collect();

            while let Some(visit_coords) = to_visit.pop_front() {
                if !visited.insert(visit_coords) {
                    continue;
                }

                // flagged cells stay untouched; the cascade flows around them
                if !matches!(self.grid[visit_coords.to_nd_index()], CellState::Hidden) {
                    continue;
                }

                let visit_count = board.adjacent_mine_count(visit_coords);
                self.grid[visit_coords.to_nd_index()] = CellState::Revealed(visit_count);
                self.revealed_count += 1;
                revealed.push(RevealedCell {
                    id: id_of(visit_coords, columns),
                    adjacent_mines: visit_count,
                });
                log::trace!("cascade revealed {visit_coords:?}, {visit_count} adjacent mines");

                // only zero-count cells keep expanding; numbered cells are
                // revealed above but end the region
                if visit_count == 0 {
                    to_visit.extend(
                        board
                            .iter_neighbors(visit_coords)
                            .filter(|&pos| {
                                matches!(self.grid[pos.to_nd_index()], CellState::Hidden)
                            })
                            .filter(|pos| !visited.contains(pos)),
                    );
                }
            }
        }

        if self.revealed_count == board.safe_cell_count() {
            self.status = GameStatus::Won;
            log::debug!("all safe cells revealed, game won");
            Ok(RevealOutcome::Won(revealed))
        } else {
            Ok(RevealOutcome::Revealed(revealed))
        }
    }

    /// Toggles the flag marker on an unrevealed cell.
    ///
    /// Flags are a player annotation only; they never affect the win
    /// condition, and a flagged cell is protected from reveal until
    /// unflagged. Legal before the first reveal.
    pub fn toggle_flag(&mut self, id: CellId) -> Result<FlagOutcome> {
        let coords = self.validate_id(id)?;

        if self.status.is_finished() {
            return Ok(FlagOutcome::NoChange);
        }

        Ok(match self.grid[coords.to_nd_index()] {
            CellState::Hidden => {
                self.grid[coords.to_nd_index()] = CellState::Flagged;
                self.flagged_count += 1;
                FlagOutcome::Flagged
            }
            CellState::Flagged => {
                self.grid[coords.to_nd_index()] = CellState::Hidden;
                self.flagged_count -= 1;
                FlagOutcome::Unflagged
            }
            CellState::Revealed(_) | CellState::Detonated => FlagOutcome::NoChange,
        })
    }

    fn validate_id(&self, id: CellId) -> Result<Coord2> {
        if id < self.profile.total_cells() {
            Ok(coords_of(id, self.profile.columns()))
        } else {
            Err(GameError::InvalidCellId)
        }
    }

    /// Generates the board on the first reveal, with the clicked cell and
    /// its neighbors excluded from mine placement.
    fn ensure_board(&mut self, coords: Coord2) -> Result<()> {
        if self.board.is_none() {
            let excluded = exclusion_zone(&self.profile, coords);
            let board = RandomBoardGenerator::new(self.seed).generate(&self.profile, &excluded)?;
            log::debug!(
                "board generated on first reveal, {} cells excluded around {coords:?}",
                excluded.len()
            );
            self.board = Some(board);
        }
        if self.status.is_not_started() {
            self.status = GameStatus::InProgress;
        }
        Ok(())
    }
}
