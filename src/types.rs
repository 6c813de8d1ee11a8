use ndarray::Array2;

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Linear cell identifier in row-major order: `id = row * columns + column`.
pub type CellId = u16;

/// Two-dimensional coordinates `(row, column)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Splits a linear cell id into `(row, column)` for a board `columns` wide.
pub const fn coords_of(id: CellId, columns: Coord) -> Coord2 {
    let columns = columns as CellId;
    ((id / columns) as Coord, (id % columns) as Coord)
}

/// Joins `(row, column)` back into the linear cell id.
pub const fn id_of((row, column): Coord2, columns: Coord) -> CellId {
    row as CellId * columns as CellId + column as CellId
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let dim = self.dim();
        NeighborIter::new(index, (dim.0 as Coord, dim.1 as Coord))
    }
}

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in
/// bounds. Neighborhood membership is always decided here, on both axes
/// separately, so a cell on the last column is never paired with the first
/// column of the next row.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, column) = coords;
    let (d_row, d_column) = delta;
    let (rows, columns) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= rows {
        return None;
    }

    let next_column = column.checked_add_signed(d_column.try_into().ok()?)?;
    if next_column >= columns {
        return None;
    }

    Some((next_row, next_column))
}

/// Iterator over the up-to-8 in-bounds grid neighbors of a cell.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub(crate) fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_and_coords_round_trip() {
        assert_eq!(coords_of(0, 24), (0, 0));
        assert_eq!(coords_of(383, 24), (15, 23));
        assert_eq!(coords_of(37, 8), (4, 5));
        assert_eq!(id_of((15, 23), 24), 383);
        assert_eq!(id_of((4, 5), 8), 37);
    }

    #[test]
    fn corner_cells_have_three_neighbors() {
        let bounds = (8, 8);
        for corner in [(0, 0), (0, 7), (7, 0), (7, 7)] {
            assert_eq!(NeighborIter::new(corner, bounds).count(), 3);
        }
    }

    #[test]
    fn edge_cells_have_five_neighbors() {
        let bounds = (8, 8);
        for edge in [(0, 3), (3, 0), (7, 4), (4, 7)] {
            assert_eq!(NeighborIter::new(edge, bounds).count(), 5);
        }
    }

    #[test]
    fn interior_cells_have_eight_neighbors() {
        assert_eq!(NeighborIter::new((3, 3), (8, 8)).count(), 8);
    }

    #[test]
    fn neighbors_never_wrap_across_row_edges() {
        let neighbors: Vec<_> = NeighborIter::new((2, 7), (8, 8)).collect();
        assert_eq!(neighbors.len(), 5);
        for (row, column) in neighbors {
            assert!(row.abs_diff(2) <= 1);
            assert!(column.abs_diff(7) <= 1);
        }
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), (1, 1)).count(), 0);
    }
}
