use super::state::GameState;
use super::types::{BoundaryMode, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovementStrategy {
    Standard,
    Wraparound,
}

impl MovementStrategy {
    pub fn for_mode(mode: BoundaryMode) -> Self {
        match mode {
            BoundaryMode::Walled => MovementStrategy::Standard,
            BoundaryMode::Wraparound => MovementStrategy::Wraparound,
        }
    }

    // Standard returns the candidate unclamped; the engine decides whether
    // leaving the grid is fatal.
    pub fn next_head(&self, state: &GameState) -> Point {
        let head = state.head();
        let (dx, dy) = state.direction.delta();
        match self {
            MovementStrategy::Standard => Point::new(head.x + dx, head.y + dy),
            MovementStrategy::Wraparound => Point::new(
                (head.x + dx).rem_euclid(state.width),
                (head.y + dy).rem_euclid(state.height),
            ),
        }
    }
}
