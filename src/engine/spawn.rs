use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;

use super::grid::{Grid, Idx, Tile};

const NEW_TILE_CHOICES: [Tile; 2] = [2, 4];

/// Spawner places new tiles into empty cells of a grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Spawner {
    weights: WeightedIndex<u8>,
}

impl Default for Spawner {
    fn default() -> Self {
        Spawner::new(0)
    }
}

impl Spawner {
    /// Build a spawner that produces a 4 with probability `four_weight` / 10 and a 2 otherwise.
    /// Weights above 10 are clamped.
    pub fn new(four_weight: u8) -> Self {
        let four_weight = four_weight.min(10);
        Self {
            weights: WeightedIndex::new([10 - four_weight, four_weight])
                .expect("spawn weights always sum to 10"),
        }
    }

    /// Set a uniformly chosen empty cell to a new tile and return where it went, or do nothing
    /// and return None if the grid is full.
    pub fn spawn<R: Rng + ?Sized>(&self, grid: &mut Grid, rng: &mut R) -> Option<(Idx, Tile)> {
        let empty = grid.empty_cells();
        let idx = *empty.choose(rng)?;
        let value = NEW_TILE_CHOICES[self.weights.sample(rng)];
        grid.set(&idx, value);
        log::debug!("spawned {} at {}", value, idx);
        Some((idx, value))
    }
}
