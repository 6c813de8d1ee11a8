use ndarray::Array2;
use rand::prelude::*;

use super::*;

/// Uniform mine placement by rejection sampling: draw cell ids until enough
/// distinct, non-excluded cells are hit. Expected-time rather than
/// worst-case-bounded; the capacity check up front guarantees the loop can
/// finish whenever it is entered.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seeds from the thread-local entropy source.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(&self, profile: &DifficultyProfile, excluded: &BTreeSet<CellId>) -> Result<Board> {
        let total = profile.total_cells();
        let excluded_in_range = excluded.iter().filter(|&&id| id < total).count() as CellCount;
        if total - excluded_in_range < profile.mine_count() {
            return Err(GameError::InsufficientSpace);
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mine_ids: BTreeSet<CellId> = BTreeSet::new();
        while (mine_ids.len() as CellCount) < profile.mine_count() {
            let id = rng.random_range(0..total);
            if excluded.contains(&id) {
                continue;
            }
            mine_ids.insert(id);
        }
        log::debug!(
            "placed {} mines on a {}x{} board, {} cells excluded",
            mine_ids.len(),
            profile.rows(),
            profile.columns(),
            excluded_in_range
        );

        let columns = profile.columns();
        let mut mines = Array2::from_elem((profile.rows() as usize, columns as usize), false);
        for &id in &mine_ids {
            mines[coords_of(id, columns).to_nd_index()] = true;
        }
        Ok(Board::from_mine_mask(mines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exactly_the_requested_mines() {
        let profile = Level::Beginner.profile();
        let board = RandomBoardGenerator::new(42)
            .generate(&profile, &BTreeSet::new())
            .unwrap();
        assert_eq!(board.mine_count(), 10);
        assert_eq!(board.mine_ids().len(), 10);
    }

    #[test]
    fn excluded_cells_stay_clear() {
        let profile = Level::Beginner.profile();
        let zone = exclusion_zone(&profile, (0, 0));
        for seed in 0..32 {
            let board = RandomBoardGenerator::new(seed)
                .generate(&profile, &zone)
                .unwrap();
            assert_eq!(board.mine_count(), 10);
            for id in board.mine_ids() {
                assert!(!zone.contains(&id), "seed {seed} placed a mine at {id}");
            }
        }
    }

    #[test]
    fn same_seed_reproduces_the_board() {
        let profile = Level::Expert.profile();
        let zone = exclusion_zone(&profile, (7, 11));
        let first = RandomBoardGenerator::new(1234)
            .generate(&profile, &zone)
            .unwrap();
        let second = RandomBoardGenerator::new(1234)
            .generate(&profile, &zone)
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn oversized_exclusion_zone_is_an_error() {
        let profile = DifficultyProfile::new(2, 2, 3).unwrap();
        let zone = exclusion_zone(&profile, (0, 0));
        assert_eq!(zone.len(), 4);
        assert_eq!(
            RandomBoardGenerator::new(7).generate(&profile, &zone),
            Err(GameError::InsufficientSpace)
        );
    }

    #[test]
    fn near_capacity_placement_still_terminates() {
        let profile = DifficultyProfile::new(2, 2, 3).unwrap();
        let board = RandomBoardGenerator::new(7)
            .generate(&profile, &BTreeSet::new())
            .unwrap();
        assert_eq!(board.mine_count(), 3);
    }

    #[test]
    fn out_of_range_exclusions_are_ignored() {
        let profile = DifficultyProfile::new(2, 2, 3).unwrap();
        let zone = BTreeSet::from([100, 101]);
        let board = RandomBoardGenerator::new(7).generate(&profile, &zone).unwrap();
        assert_eq!(board.mine_count(), 3);
    }
}
