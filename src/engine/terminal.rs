use super::grid::{Grid, Tile};

/// Whether any row or column still admits a compaction or a merge.
pub fn has_any_move(grid: &Grid) -> bool {
    grid.lines().any(|line| line.has_move(grid))
}

pub fn is_game_over(grid: &Grid) -> bool {
    !has_any_move(grid)
}

/// Whether any cell holds the winning tile.
pub fn has_won(grid: &Grid, win_value: Tile) -> bool {
    grid.tiles().any(|tile| tile == win_value)
}

#[cfg(test)]
mod test {
    use rstest::*;

    use super::*;
    use crate::engine::direction::Direction;
    use crate::engine::shift::shift;

    fn grid(rows: Vec<Vec<Tile>>) -> Grid {
        Grid::from_rows(rows).expect("test grids should be valid")
    }

    #[rstest]
    #[case::two_by_two_row_merge(vec![vec![2, 2], vec![4, 8]], true)]
    #[case::column_merge(vec![vec![2, 4], vec![2, 8]], true)]
    #[case::one_empty(vec![vec![2, 4, 8], vec![16, 0, 32], vec![64, 128, 256]], true)]
    #[case::full_no_neighbours(vec![vec![2, 4, 8], vec![4, 8, 2], vec![8, 2, 4]], false)]
    #[case::checkerboard(
        vec![vec![2, 4, 2, 4], vec![4, 2, 4, 2], vec![2, 4, 2, 4], vec![4, 2, 4, 2]],
        false
    )]
    fn any_move(#[case] rows: Vec<Vec<Tile>>, #[case] expected: bool) {
        let g = grid(rows);
        assert_eq!(has_any_move(&g), expected);
        assert_eq!(is_game_over(&g), !expected);
    }

    #[test]
    fn two_by_two_diagonal_is_over() {
        // equal tiles only on the diagonal never touch
        let g = grid(vec![vec![2, 4], vec![4, 2]]);
        assert!(is_game_over(&g));
    }

    #[test]
    fn game_over_agrees_with_shift() {
        let boards = [
            vec![vec![2, 4, 8], vec![4, 8, 2], vec![8, 2, 4]],
            vec![vec![2, 4, 8], vec![4, 8, 8], vec![8, 2, 4]],
            vec![vec![2, 0, 8], vec![4, 8, 2], vec![8, 2, 4]],
        ];
        for rows in boards {
            let g = grid(rows);
            let any_changes = Direction::ALL.into_iter().any(|direction| {
                let mut shifted = g.clone();
                shift(&mut shifted, direction).changed
            });
            assert_eq!(has_any_move(&g), any_changes, "{}", g);
        }
    }

    #[rstest]
    #[case::won(2048, true)]
    #[case::not_yet(1024, false)]
    fn won(#[case] tile: Tile, #[case] expected: bool) {
        let mut g = Grid::new(4);
        let idx = g.cell_at(2, 3);
        g.set(&idx, tile);
        assert_eq!(has_won(&g, 2048), expected);
    }

    #[test]
    fn won_with_custom_threshold() {
        let g = grid(vec![vec![0, 0], vec![0, 64]]);
        assert!(has_won(&g, 64));
        assert!(!has_won(&g, 128));
    }
}
