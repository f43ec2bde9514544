use super::direction::Direction;
use super::grid::{Grid, Idx, Score};
use super::line::{Line, Polarity};

/// MoveOutcome reports what a single board move did.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MoveOutcome {
    /// Sum of the values of all tiles produced by fusion during the move.
    pub score: Score,
    /// Whether any cell's value differs from before the move.
    pub changed: bool,
}

/// Operation is one of the passes a line goes through during a move.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operation {
    Gravity,
    Fusion,
}

impl Operation {
    /// Apply this operation to `line`, whose position 0 is the edge tiles move toward, and return
    /// the score it produced.
    pub fn apply(self, grid: &mut Grid, line: &[Idx]) -> Score {
        match self {
            Self::Gravity => gravity(grid, line),
            Self::Fusion => fusion(grid, line),
        }
    }
}

fn gravity(grid: &mut Grid, line: &[Idx]) -> Score {
    for pos in 1..line.len() {
        if grid.is_empty_at(&line[pos]) {
            continue;
        }
        // bubble the tile toward the edge until it hits another tile or the edge itself
        let mut x = pos;
        while x > 0 && grid.is_empty_at(&line[x - 1]) {
            grid.swap(&line[x], &line[x - 1]);
            x -= 1;
        }
    }
    0
}

fn fusion(grid: &mut Grid, line: &[Idx]) -> Score {
    let mut score = 0;
    for pair in line.windows(2) {
        let (near, far) = (&pair[0], &pair[1]);
        let (a, b) = (grid.get(near), grid.get(far));
        if grid.is_empty_at(near) || a != b {
            continue;
        }
        // the far cell is zeroed so it can't take part in the next pair
        let combined = a
            .checked_add(b)
            .unwrap_or_else(|| panic!("merging {} at {} overflows a tile", a, near));
        grid.set(near, combined);
        grid.set(far, 0);
        score += Score::from(combined);
        log::trace!("fused {} into {} giving {}", far, near, combined);
    }
    score
}

/// Run gravity, fusion and gravity again over a single line and return the fusion score.
pub fn shift_line(grid: &mut Grid, line: &Line, polarity: Polarity) -> Score {
    let oriented = line.oriented(polarity);
    Operation::Gravity.apply(grid, &oriented);
    let score = Operation::Fusion.apply(grid, &oriented);
    Operation::Gravity.apply(grid, &oriented);
    score
}

/// Shift every line of the grid in the given direction.
pub fn shift(grid: &mut Grid, direction: Direction) -> MoveOutcome {
    let before = grid.clone();
    let (kind, polarity) = (direction.line_kind(), direction.polarity());
    let score = (0..grid.size())
        .map(|index| {
            let line = grid.line(kind, index);
            shift_line(grid, &line, polarity)
        })
        .sum();
    let outcome = MoveOutcome {
        score,
        changed: *grid != before,
    };
    log::debug!(
        "shift {}: score {} changed {}",
        direction,
        outcome.score,
        outcome.changed
    );
    outcome
}
