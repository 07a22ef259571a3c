use glam::IVec2;
use tracing::warn;

use crate::core::bounds::BoundsOriginRoot;
use crate::core::{Cell, EngineError};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    pub fn new_with_size(size: IVec2, default: T) -> Self
    where
        T: Clone,
    {
        let bounds = BoundsOriginRoot::new(size.x, size.y);
        BoundedGrid::new(bounds, default)
    }

    pub fn new(bounds: BoundsOriginRoot, default: T) -> Self
    where
        T: Clone,
    {
        let cells = vec![default; bounds.area().max(0) as usize];
        BoundedGrid { bounds, cells }
    }

    /// Builds a grid from equal-length rows, top row first.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, EngineError> {
        let height = rows.len();
        let width = rows.first().map(|row| row.len()).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(EngineError::invalid("grid must have at least one cell"));
        }
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            warn!(row = y, len = row.len(), expected = width, "ragged grid rows");
            return Err(EngineError::invalid(format!(
                "row {} has {} cells, expected {}",
                y,
                row.len(),
                width
            )));
        }

        let bounds = BoundsOriginRoot::new(width as i32, height as i32);
        let cells = rows.into_iter().flatten().collect();
        Ok(BoundedGrid { bounds, cells })
    }

    pub fn width(&self) -> i32 {
        self.bounds.extent.x
    }

    pub fn height(&self) -> i32 {
        self.bounds.extent.y
    }

    pub fn in_bounds(&self, pos: &IVec2) -> bool {
        self.bounds.contains(pos)
    }

    fn check(&self, pos: &IVec2) -> Result<(), EngineError> {
        if self.in_bounds(pos) {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds {
                position: *pos,
                width: self.width(),
                height: self.height(),
            })
        }
    }

    pub fn get(&self, pos: &IVec2) -> Result<&T, EngineError> {
        self.check(pos)?;
        Ok(&self[pos])
    }

    pub fn set(&mut self, pos: &IVec2, value: T) -> Result<(), EngineError> {
        self.check(pos)?;
        self[pos] = value;
        Ok(())
    }

    /// Row-major iteration over every position and its content.
    pub fn iter(&self) -> impl Iterator<Item = (IVec2, &T)> {
        let bounds = self.bounds;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, value)| (bounds.position_of(index), value))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.width().max(1) as usize)
    }
}

impl BoundedGrid<Cell> {
    /// Moves the content of every cell in `cells` by `delta`.
    ///
    /// All sources are read before any are cleared and all sources are cleared
    /// before any destination is written, so overlapping chains never clobber
    /// each other. `cells` must not contain duplicates. Fails without touching
    /// the grid if any source or destination lies outside it.
    pub fn apply_shift(&mut self, cells: &[IVec2], delta: IVec2) -> Result<(), EngineError> {
        for pos in cells {
            self.check(pos)?;
            self.check(&(*pos + delta))?;
        }

        let captured: Vec<(IVec2, Cell)> = cells.iter().map(|pos| (*pos + delta, self[pos])).collect();
        for pos in cells {
            self[pos] = Cell::Empty;
        }
        for (dest, cell) in captured {
            self[&dest] = cell;
        }
        Ok(())
    }
}

impl<T> std::ops::Index<&IVec2> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &IVec2) -> &Self::Output {
        &self.cells[self.bounds.index_of(index)]
    }
}

impl<T> std::ops::IndexMut<&IVec2> for BoundedGrid<T> {
    fn index_mut(&mut self, index: &IVec2) -> &mut Self::Output {
        let offset = self.bounds.index_of(index);
        &mut self.cells[offset]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use Cell::*;

    fn row(cells: &[Cell]) -> BoundedGrid<Cell> {
        BoundedGrid::from_rows(vec![cells.to_vec()]).unwrap()
    }

    #[test]
    fn get_outside_grid_is_out_of_bounds() {
        let grid = row(&[Wall, Agent, Wall]);

        assert_eq!(grid.get(&IVec2::new(1, 0)), Ok(&Agent));
        assert_eq!(
            grid.get(&IVec2::new(3, 0)),
            Err(EngineError::OutOfBounds { position: IVec2::new(3, 0), width: 3, height: 1 })
        );
        assert!(grid.get(&IVec2::new(0, -1)).is_err());
        assert!(!grid.in_bounds(&IVec2::new(-1, 0)));
    }

    #[test]
    fn set_overwrites_and_checks_bounds() {
        let mut grid = BoundedGrid::new_with_size(IVec2::new(2, 2), Empty);
        grid.set(&IVec2::new(1, 1), Box).unwrap();

        assert_eq!(grid[&IVec2::new(1, 1)], Box);
        assert!(grid.set(&IVec2::new(2, 1), Box).is_err());
        assert_eq!(grid.iter().filter(|(_, c)| **c == Box).count(), 1);
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let result = BoundedGrid::from_rows(vec![vec![Wall, Wall], vec![Wall]]);
        assert!(matches!(result, Err(EngineError::InvalidInput(_))));
        assert!(BoundedGrid::<Cell>::from_rows(vec![]).is_err());
    }

    #[test]
    fn iter_reports_row_major_positions() {
        let grid = BoundedGrid::from_rows(vec![vec![Wall, Empty], vec![Box, Agent]]).unwrap();
        let positions: Vec<IVec2> = grid.iter().map(|(pos, _)| pos).collect();

        assert_eq!(
            positions,
            vec![IVec2::new(0, 0), IVec2::new(1, 0), IVec2::new(0, 1), IVec2::new(1, 1)]
        );
        assert_eq!(grid.rows().nth(1), Some(&[Box, Agent][..]));
    }

    #[test]
    fn shift_of_adjacent_chain_does_not_clobber() {
        let mut grid = row(&[Wall, Agent, Box, BoxLeft, BoxRight, Empty, Wall]);
        let chain: Vec<IVec2> = (1..=4).map(|x| IVec2::new(x, 0)).collect();

        grid.apply_shift(&chain, IVec2::X).unwrap();

        assert_eq!(grid, row(&[Wall, Empty, Agent, Box, BoxLeft, BoxRight, Wall]));
    }

    #[test]
    fn shift_order_does_not_matter() {
        let mut forward = row(&[Agent, Box, Empty]);
        let mut backward = forward.clone();

        forward.apply_shift(&[IVec2::new(0, 0), IVec2::new(1, 0)], IVec2::X).unwrap();
        backward.apply_shift(&[IVec2::new(1, 0), IVec2::new(0, 0)], IVec2::X).unwrap();

        assert_eq!(forward, backward);
        assert_eq!(forward, row(&[Empty, Agent, Box]));
    }

    #[test]
    fn shift_off_grid_leaves_grid_untouched() {
        let mut grid = row(&[Empty, Agent, Box]);
        let before = grid.clone();

        let result = grid.apply_shift(&[IVec2::new(1, 0), IVec2::new(2, 0)], IVec2::X);

        assert!(matches!(result, Err(EngineError::OutOfBounds { .. })));
        assert_eq!(grid, before);
    }
}
