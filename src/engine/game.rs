use rand::RngCore;

use super::direction::Direction;
use super::grid::{Grid, Idx, Score, Tile};
use super::shift::{shift, MoveOutcome};
use super::spawn::Spawner;
use super::terminal;
use crate::config::Config;
use crate::error::Result;

/// Status of a game session as seen by the player.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

/// Game is a single 2048 session: it owns its grid, running score and random number generator.
pub struct Game {
    rng: Box<dyn RngCore>,
    grid: Grid,
    score: Score,
    spawner: Spawner,
    win_value: Tile,
}

impl Game {
    /// Start a new session using the given random number generator. The first tile is spawned
    /// immediately.
    pub fn new(config: &Config, rng: impl RngCore + 'static) -> Result<Self> {
        config.validate()?;
        let mut game = Self::with_grid(config, Grid::new(config.size), rng)?;
        game.spawn_random_tile();
        log::info!("new {0}x{0} game", config.size);
        Ok(game)
    }

    /// Start a new session with the default configuration and the given size.
    pub fn with_size(size: usize, rng: impl RngCore + 'static) -> Result<Self> {
        let config = Config {
            size,
            ..Config::default()
        };
        Self::new(&config, rng)
    }

    /// Resume a session from an existing grid without spawning anything. The grid's own size
    /// takes precedence over `config.size`.
    pub fn with_grid(config: &Config, grid: Grid, rng: impl RngCore + 'static) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            rng: Box::new(rng),
            grid,
            score: 0,
            spawner: Spawner::new(config.four_weight),
            win_value: config.win_value,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Shift the grid in the given direction and add the merge score to the running total. No
    /// tile is spawned.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = shift(&mut self.grid, direction);
        self.score += outcome.score;
        outcome
    }

    pub fn spawn_random_tile(&mut self) -> Option<(Idx, Tile)> {
        self.spawner.spawn(&mut self.grid, &mut self.rng)
    }

    /// Apply a move and spawn a new tile only if the move changed the grid.
    pub fn step(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = self.apply_move(direction);
        if outcome.changed {
            self.spawn_random_tile();
        }
        outcome
    }

    pub fn is_game_over(&self) -> bool {
        terminal::is_game_over(&self.grid)
    }

    pub fn has_won(&self) -> bool {
        terminal::has_won(&self.grid, self.win_value)
    }

    /// A session with no moves left is lost even if it also holds the winning tile.
    pub fn status(&self) -> Status {
        if self.is_game_over() {
            Status::Lost
        } else if self.has_won() {
            Status::Won
        } else {
            Status::InProgress
        }
    }

    /// End the session, returning the final score.
    pub fn release(self) -> Score {
        log::info!(
            "game released with score {} and max tile {}",
            self.score,
            self.grid.max_tile()
        );
        self.score
    }
}
