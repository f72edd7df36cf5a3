use std::error::Error;
use std::fmt;

use crate::defaults::MIN_FIELD_DIMENSION;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameError {
    InvalidGrid { width: i32, height: i32 },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidGrid { width, height } => write!(
                f,
                "grid {}x{} is too small for snake, minimum is {}x{}",
                width, height, MIN_FIELD_DIMENSION, MIN_FIELD_DIMENSION
            ),
        }
    }
}

impl Error for GameError {}
