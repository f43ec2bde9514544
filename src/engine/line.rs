use super::grid::{Grid, Idx, Tile, EMPTY};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineKind {
    Row,
    Column,
}

/// Polarity selects which end of a line tiles are compacted toward.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Polarity {
    /// Toward index 0, the up/left edge.
    TowardLow,
    /// Toward index N-1, the down/right edge.
    TowardHigh,
}

/// Line is an ordered sequence of handles into a single row or column of a Grid. Index 0 is
/// always the cell nearest the up/left edge.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Line {
    indices: Vec<Idx>,
}

/// Build the line of kind `kind` at position `index` for a grid of the given size.
///
/// Panics if index is out of range.
pub fn retrieve_line(size: usize, kind: LineKind, index: usize) -> Line {
    assert!(index < size, "invalid line index {}", index);
    let indices = match kind {
        LineKind::Row => (0..size).map(|x| Idx(x, index)).collect(),
        LineKind::Column => (0..size).map(|y| Idx(index, y)).collect(),
    };
    Line { indices }
}

impl Line {
    pub fn indices(&self) -> &[Idx] {
        &self.indices
    }

    /// The handles of this line ordered so that position 0 is the edge tiles move toward.
    pub fn oriented(&self, polarity: Polarity) -> Vec<Idx> {
        match polarity {
            Polarity::TowardLow => self.indices.clone(),
            Polarity::TowardHigh => self.indices.iter().rev().copied().collect(),
        }
    }

    /// Current tile values of this line.
    pub fn values(&self, grid: &Grid) -> Vec<Tile> {
        self.indices.iter().map(|idx| grid.get(idx)).collect()
    }

    /// Whether a shift in either direction along this line would change it: some empty cell
    /// borders a tile, or two neighbouring tiles are equal.
    pub fn has_move(&self, grid: &Grid) -> bool {
        self.indices.windows(2).any(|pair| {
            let (a, b) = (grid.get(&pair[0]), grid.get(&pair[1]));
            match (a, b) {
                (EMPTY, EMPTY) => false,
                (EMPTY, _) | (_, EMPTY) => true,
                (a, b) => a == b,
            }
        })
    }
}
