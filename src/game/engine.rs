use std::collections::VecDeque;
use std::rc::Rc;

use crate::defaults::{INITIAL_SNAKE_LENGTH, MIN_FIELD_DIMENSION};
use crate::log;
use super::error::GameError;
use super::movement::MovementStrategy;
use super::observer::{GameObserver, ObserverRegistry};
use super::session_rng::SessionRng;
use super::state::{GameState, StepResult};
use super::types::{Direction, GameEvent, NO_FOOD, Point};

pub struct Game {
    state: GameState,
    strategy: MovementStrategy,
    rng: SessionRng,
    observers: ObserverRegistry,
}

impl Game {
    pub fn new(
        width: i32,
        height: i32,
        seed: Option<u64>,
        strategy: MovementStrategy,
    ) -> Result<Self, GameError> {
        if width < MIN_FIELD_DIMENSION || height < MIN_FIELD_DIMENSION {
            return Err(GameError::InvalidGrid { width, height });
        }

        let mut rng = SessionRng::from_seed_option(seed);
        let state = Self::initial_state(width, height, &mut rng);
        Ok(Self {
            state,
            strategy,
            rng,
            observers: ObserverRegistry::new(),
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn add_observer(&mut self, observer: Rc<dyn GameObserver>) {
        self.observers.add(observer);
    }

    pub fn remove_observer(&mut self, observer: &Rc<dyn GameObserver>) {
        self.observers.remove(observer);
    }

    // Takes effect on the next step; the current tick already moved with
    // whatever direction was current.
    pub fn set_direction(&mut self, direction: Direction) {
        if !self.state.alive {
            return;
        }
        if direction.is_opposite(&self.state.direction) {
            return;
        }
        self.state = GameState {
            direction,
            ..self.state.clone()
        };
    }

    pub fn step(&mut self) -> StepResult {
        if !self.state.alive {
            return StepResult {
                state: self.state.clone(),
                grew: false,
                game_over: true,
            };
        }

        let candidate = self.strategy.next_head(&self.state);
        if self.hits_wall(candidate) {
            log!(
                "snake hit the wall heading for ({}, {})",
                candidate.x,
                candidate.y
            );
            return self.end_game();
        }

        // The tail vacates its cell this tick, so it is excluded from the
        // collision check.
        let body_len = self.state.snake.len() - 1;
        let self_collision = self
            .state
            .snake
            .iter()
            .take(body_len)
            .any(|segment| *segment == candidate);
        if self_collision {
            log!(
                "snake ran into itself at ({}, {})",
                candidate.x,
                candidate.y
            );
            return self.end_game();
        }

        let grew = candidate == self.state.food;
        let mut snake = self.state.snake.clone();
        snake.push_front(candidate);
        let (food, score) = if grew {
            let food = self.place_food(&snake);
            let score = self.state.score + 1;
            log!(
                "ate food at ({}, {}). Score: {}",
                candidate.x,
                candidate.y,
                score
            );
            (food, score)
        } else {
            snake.pop_back();
            (self.state.food, self.state.score)
        };

        self.state = GameState {
            snake,
            food,
            score,
            ..self.state.clone()
        };
        self.observers.notify(&self.state, GameEvent::Step);
        StepResult {
            state: self.state.clone(),
            grew,
            game_over: false,
        }
    }

    // Reseeds from scratch: a reset never replays the construction seed.
    pub fn reset(&mut self) {
        self.rng = SessionRng::from_random();
        self.state = Self::initial_state(self.state.width, self.state.height, &mut self.rng);
        log!("game reset to {}x{}", self.state.width, self.state.height);
        self.observers.notify(&self.state, GameEvent::Reset);
    }

    fn initial_state(width: i32, height: i32, rng: &mut SessionRng) -> GameState {
        let mid_x = width / 2;
        let mid_y = height / 2;
        let snake: VecDeque<Point> = (0..INITIAL_SNAKE_LENGTH)
            .map(|i| Point::new(mid_x - i, mid_y))
            .collect();
        let food = Self::place_food_with(width, height, &snake, rng);
        GameState {
            width,
            height,
            snake,
            direction: Direction::Right,
            food,
            alive: true,
            score: 0,
        }
    }

    fn hits_wall(&self, pos: Point) -> bool {
        pos.x < 0 || pos.x >= self.state.width || pos.y < 0 || pos.y >= self.state.height
    }

    fn place_food(&mut self, snake: &VecDeque<Point>) -> Point {
        Self::place_food_with(self.state.width, self.state.height, snake, &mut self.rng)
    }

    fn place_food_with(
        width: i32,
        height: i32,
        snake: &VecDeque<Point>,
        rng: &mut SessionRng,
    ) -> Point {
        let mut free = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                let cell = Point::new(x, y);
                if !snake.contains(&cell) {
                    free.push(cell);
                }
            }
        }
        if free.is_empty() {
            return NO_FOOD;
        }
        free[rng.random_range(0..free.len())]
    }

    fn end_game(&mut self) -> StepResult {
        self.state = GameState {
            alive: false,
            ..self.state.clone()
        };
        self.observers.notify(&self.state, GameEvent::GameOver);
        StepResult {
            state: self.state.clone(),
            grew: false,
            game_over: true,
        }
    }

    #[cfg(test)]
    pub(crate) fn set_state(&mut self, state: GameState) {
        self.state = state;
    }
}
