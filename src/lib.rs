pub mod game;
pub mod logger;
pub mod settings;

mod defaults;

pub use game::{
    BoundaryMode, Direction, Game, GameError, GameEvent, GameFactory, GameObserver, GameState,
    MovementStrategy, NO_FOOD, ObserverRegistry, Point, SessionRng, StepResult,
};
pub use settings::GameSettings;
