use crate::defaults::{DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH};
use super::engine::Game;
use super::error::GameError;
use super::movement::MovementStrategy;
use super::types::BoundaryMode;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameFactory {
    boundary_mode: BoundaryMode,
}

impl GameFactory {
    pub fn new(boundary_mode: BoundaryMode) -> Self {
        Self { boundary_mode }
    }

    pub fn standard() -> Self {
        Self::new(BoundaryMode::Walled)
    }

    pub fn wraparound() -> Self {
        Self::new(BoundaryMode::Wraparound)
    }

    pub fn boundary_mode(&self) -> BoundaryMode {
        self.boundary_mode
    }

    pub fn create(&self, width: i32, height: i32, seed: Option<u64>) -> Result<Game, GameError> {
        Game::new(
            width,
            height,
            seed,
            MovementStrategy::for_mode(self.boundary_mode),
        )
    }

    pub fn create_default(&self, seed: Option<u64>) -> Result<Game, GameError> {
        self.create(DEFAULT_FIELD_WIDTH, DEFAULT_FIELD_HEIGHT, seed)
    }
}
