use std::collections::VecDeque;

use super::types::{Direction, Point};

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub width: i32,
    pub height: i32,
    pub snake: VecDeque<Point>,
    pub direction: Direction,
    pub food: Point,
    pub alive: bool,
    pub score: u32,
}

impl GameState {
    pub fn head(&self) -> Point {
        *self.snake.front().expect("snake body is never empty")
    }

    pub fn tail(&self) -> Point {
        *self.snake.back().expect("snake body is never empty")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StepResult {
    pub state: GameState,
    pub grew: bool,
    pub game_over: bool,
}
