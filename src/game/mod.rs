mod engine;
mod error;
mod factory;
mod movement;
mod observer;
mod session_rng;
mod state;
mod types;

pub use engine::Game;
pub use error::GameError;
pub use factory::GameFactory;
pub use movement::MovementStrategy;
pub use observer::{GameObserver, ObserverRegistry};
pub use session_rng::SessionRng;
pub use state::{GameState, StepResult};
pub use types::{BoundaryMode, Direction, GameEvent, NO_FOOD, Point};
