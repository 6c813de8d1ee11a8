use std::collections::BTreeSet;

use crate::*;
pub use random::*;

mod random;

/// Places mines for a profile while keeping every excluded cell clear.
pub trait BoardGenerator {
    fn generate(&self, profile: &DifficultyProfile, excluded: &BTreeSet<CellId>) -> Result<Board>;
}

/// The clicked cell plus its in-bounds neighbors, kept mine-free on the
/// first reveal.
pub fn exclusion_zone(profile: &DifficultyProfile, coords: Coord2) -> BTreeSet<CellId> {
    let columns = profile.columns();
    let bounds = (profile.rows(), columns);
    let mut zone = BTreeSet::from([id_of(coords, columns)]);
    zone.extend(NeighborIter::new(coords, bounds).map(|pos| id_of(pos, columns)));
    zone
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_zone_covers_four_cells() {
        let profile = Level::Beginner.profile();
        let zone = exclusion_zone(&profile, (0, 0));
        assert_eq!(zone, BTreeSet::from([0, 1, 8, 9]));
    }

    #[test]
    fn interior_zone_covers_nine_cells() {
        let profile = Level::Beginner.profile();
        let zone = exclusion_zone(&profile, (3, 3));
        assert_eq!(zone.len(), 9);
        assert!(zone.contains(&id_of((3, 3), 8)));
        assert!(zone.contains(&id_of((2, 2), 8)));
        assert!(zone.contains(&id_of((4, 4), 8)));
    }
}
