use crate::error::{Error, Result};

use super::line::{retrieve_line, Line, LineKind};

pub type Tile = u32;

pub type Score = u64;

pub(crate) const EMPTY: Tile = 0;

/// Largest tile a grid may be built with. Merging two of them still fits in a Tile.
pub const MAX_TILE: Tile = 1 << 30;

/// Idx is a handle to the cell at column x, row y of a Grid.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Idx(pub usize, pub usize);

impl std::fmt::Display for Idx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "gidx({0},{1})", self.0, self.1)
    }
}

impl Idx {
    pub fn x(&self) -> usize {
        self.0
    }

    pub fn y(&self) -> usize {
        self.1
    }
}

/// Grid is a square matrix of tiles where 0 marks an empty cell.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    size: usize,
    cells: Vec<Tile>,
}

impl Grid {
    /// Allocate an empty size x size grid.
    ///
    /// Panics if size is smaller than 2.
    pub fn new(size: usize) -> Self {
        assert!(size >= 2, "grid size must be at least 2, got {}", size);
        Self {
            size,
            cells: vec![EMPTY; size * size],
        }
    }

    /// Build a grid from its rows, checking that it is square and that every tile is either empty
    /// or a power of two no larger than MAX_TILE.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self> {
        let size = rows.len();
        if size < 2 {
            return Err(Error::InvalidGrid(format!(
                "grid size must be at least 2, got {}",
                size
            )));
        }
        let mut cells = Vec::with_capacity(size * size);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(Error::InvalidGrid(format!(
                    "row {} has {} cells, expected {}",
                    y,
                    row.len(),
                    size
                )));
            }
            for (x, tile) in row.iter().enumerate() {
                if *tile != EMPTY && (!tile.is_power_of_two() || *tile == 1) {
                    return Err(Error::InvalidGrid(format!(
                        "tile {} at {} is not a power of two",
                        tile,
                        Idx(x, y)
                    )));
                }
                if *tile > MAX_TILE {
                    return Err(Error::InvalidGrid(format!(
                        "tile {} at {} exceeds {}",
                        tile,
                        Idx(x, y),
                        MAX_TILE
                    )));
                }
            }
            cells.extend(row);
        }
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Return the handle of the cell at column x, row y.
    ///
    /// Panics if either coordinate is out of range.
    pub fn cell_at(&self, x: usize, y: usize) -> Idx {
        assert!(x < self.size, "invalid x coordinate {}", x);
        assert!(y < self.size, "invalid y coordinate {}", y);
        Idx(x, y)
    }

    pub fn get(&self, idx: &Idx) -> Tile {
        self.cells[self.offset(idx)]
    }

    pub fn set(&mut self, idx: &Idx, value: Tile) {
        let offset = self.offset(idx);
        self.cells[offset] = value;
    }

    pub fn is_empty_at(&self, idx: &Idx) -> bool {
        self.get(idx) == EMPTY
    }

    pub(crate) fn swap(&mut self, a: &Idx, b: &Idx) {
        let (a, b) = (self.offset(a), self.offset(b));
        self.cells.swap(a, b);
    }

    /// Row or column `index` of this grid.
    pub fn line(&self, kind: LineKind, index: usize) -> Line {
        retrieve_line(self.size, kind, index)
    }

    /// Every row followed by every column.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        [LineKind::Row, LineKind::Column]
            .into_iter()
            .flat_map(move |kind| (0..self.size).map(move |index| self.line(kind, index)))
    }

    /// Handles of all empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Idx> {
        self.indices().filter(|idx| self.is_empty_at(idx)).collect()
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().copied()
    }

    pub fn sum(&self) -> u64 {
        self.tiles().map(u64::from).sum()
    }

    pub fn max_tile(&self) -> Tile {
        self.tiles().max().unwrap_or(EMPTY)
    }

    pub fn rows(&self) -> Vec<Vec<Tile>> {
        self.cells.chunks(self.size).map(|row| row.to_vec()).collect()
    }

    fn indices(&self) -> impl Iterator<Item = Idx> + '_ {
        (0..self.size).flat_map(move |y| (0..self.size).map(move |x| Idx(x, y)))
    }

    fn offset(&self, idx: &Idx) -> usize {
        assert!(idx.x() < self.size, "invalid x coordinate {}", idx.x());
        assert!(idx.y() < self.size, "invalid y coordinate {}", idx.y());
        idx.y() * self.size + idx.x()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.size) {
            for tile in row {
                if *tile == EMPTY {
                    write!(f, "{:>5}", "_")?;
                } else {
                    write!(f, "{:>5}", tile)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use rstest::*;

    use super::*;

    #[test]
    fn new_is_empty() {
        let grid = Grid::new(4);
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.empty_cells().len(), 16);
        assert_eq!(grid.sum(), 0);
        assert_eq!(grid.max_tile(), 0);
    }

    #[test]
    #[should_panic(expected = "grid size must be at least 2")]
    fn new_too_small() {
        let _ = Grid::new(1);
    }

    #[test]
    fn set_is_visible_through_cell_at() {
        let mut grid = Grid::new(3);
        let idx = grid.cell_at(2, 1);
        grid.set(&idx, 8);
        assert_eq!(grid.get(&Idx(2, 1)), 8);
        assert_eq!(grid.rows(), vec![vec![0, 0, 0], vec![0, 0, 8], vec![0, 0, 0]]);
    }

    #[rstest]
    #[case::x_too_large(4, 0)]
    #[case::y_too_large(0, 4)]
    #[should_panic(expected = "invalid")]
    fn cell_at_out_of_range(#[case] x: usize, #[case] y: usize) {
        let grid = Grid::new(4);
        let _ = grid.cell_at(x, y);
    }

    #[test]
    #[should_panic(expected = "invalid y coordinate 3")]
    fn get_out_of_range() {
        let grid = Grid::new(3);
        let _ = grid.get(&Idx(0, 3));
    }

    #[rstest]
    #[case::too_small(vec![vec![2]])]
    #[case::not_square(vec![vec![2, 0], vec![0]])]
    #[case::not_power_of_two(vec![vec![2, 3], vec![0, 0]])]
    #[case::one(vec![vec![1, 0], vec![0, 0]])]
    #[case::above_max_tile(vec![vec![MAX_TILE << 1, 0], vec![0, 0]])]
    fn from_rows_invalid(#[case] rows: Vec<Vec<Tile>>) {
        assert!(matches!(Grid::from_rows(rows), Err(Error::InvalidGrid(_))));
    }

    #[test]
    fn from_rows_round_trips() {
        let rows = vec![vec![2, 0, 4], vec![0, 8, 0], vec![16, 0, 2048]];
        let grid = Grid::from_rows(rows.clone()).unwrap();
        assert_eq!(grid.rows(), rows);
        assert_eq!(grid.max_tile(), 2048);
        assert_eq!(grid.sum(), 2 + 4 + 8 + 16 + 2048);
        assert_eq!(
            grid.empty_cells(),
            vec![Idx(1, 0), Idx(0, 1), Idx(2, 1), Idx(1, 2)]
        );
    }

    #[test]
    fn lines_covers_rows_then_columns() {
        let grid = Grid::new(3);
        let lines = grid.lines().collect::<Vec<Line>>();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0].indices(), &[Idx(0, 0), Idx(1, 0), Idx(2, 0)]);
        assert_eq!(lines[3].indices(), &[Idx(0, 0), Idx(0, 1), Idx(0, 2)]);
    }

    #[test]
    fn display() {
        let grid = Grid::from_rows(vec![vec![2, 0], vec![0, 1024]]).unwrap();
        assert_eq!(format!("{}", grid), "    2    _\n    _ 1024\n");
    }
}
