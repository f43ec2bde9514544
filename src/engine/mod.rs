//! Rules of 2048 on an N x N grid: shifting and merging tiles, spawning new ones and detecting
//! the end of a game.

pub mod direction;
pub mod game;
pub mod grid;
pub mod line;
pub mod shift;
pub mod spawn;
pub mod terminal;

pub use direction::Direction;
pub use game::{Game, Status};
pub use grid::{Grid, Idx, Score, Tile};
pub use shift::MoveOutcome;
