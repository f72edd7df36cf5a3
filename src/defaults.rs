pub const DEFAULT_FIELD_WIDTH: i32 = 20;
pub const DEFAULT_FIELD_HEIGHT: i32 = 15;

pub const MIN_FIELD_DIMENSION: i32 = 5;
pub const INITIAL_SNAKE_LENGTH: i32 = 3;
