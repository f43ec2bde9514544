use crate::engine::grid::{Tile, MAX_TILE};
use crate::error::{Error, Result};

pub const DEFAULT_SIZE: usize = 4;
pub const DEFAULT_WIN_VALUE: Tile = 2048;

/// Config holds the runtime parameters of a game session.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Width and height of the grid.
    pub size: usize,
    /// Tile value that wins the game. Must be a power of two between 4 and `MAX_TILE`.
    pub win_value: Tile,
    /// Chance, in tenths, that a spawned tile is a 4 rather than a 2. Zero means new tiles are
    /// always 2.
    pub four_weight: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            win_value: DEFAULT_WIN_VALUE,
            four_weight: 0,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.size < 2 {
            return Err(Error::InvalidConfig(format!(
                "grid size must be at least 2, got {}",
                self.size
            )));
        }
        check_win_value(self.win_value)?;
        Ok(())
    }
}

/// Accept `value` as a win threshold only if a merge can produce it.
pub fn check_win_value(value: Tile) -> Result<Tile> {
    if value < 4 || value > MAX_TILE || !value.is_power_of_two() {
        return Err(Error::InvalidConfig(format!(
            "win value must be a power of two between 4 and {}, got {}",
            MAX_TILE, value
        )));
    }
    Ok(value)
}
