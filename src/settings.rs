use serde::{Deserialize, Serialize};

use crate::defaults::{DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH, MIN_FIELD_DIMENSION};
use crate::game::{BoundaryMode, Game, GameError, GameFactory};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    #[serde(default = "default_field_width")]
    pub field_width: i32,
    #[serde(default = "default_field_height")]
    pub field_height: i32,
    #[serde(default)]
    pub boundary_mode: BoundaryMode,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_field_width() -> i32 {
    DEFAULT_FIELD_WIDTH
}

fn default_field_height() -> i32 {
    DEFAULT_FIELD_HEIGHT
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            field_width: DEFAULT_FIELD_WIDTH,
            field_height: DEFAULT_FIELD_HEIGHT,
            boundary_mode: BoundaryMode::Walled,
            seed: None,
        }
    }
}

impl GameSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.field_width < MIN_FIELD_DIMENSION || self.field_height < MIN_FIELD_DIMENSION {
            return Err(format!(
                "field dimensions must be at least {}x{}",
                MIN_FIELD_DIMENSION, MIN_FIELD_DIMENSION
            ));
        }
        Ok(())
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, String> {
        let settings: Self = serde_yaml_ng::from_str(content)
            .map_err(|e| format!("Failed to deserialize settings: {}", e))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_yaml_string(&self) -> Result<String, String> {
        serde_yaml_ng::to_string(self).map_err(|e| format!("Failed to serialize settings: {}", e))
    }

    pub fn from_yaml_file(path: &str) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read settings file {}: {}", path, e))?;
        Self::from_yaml_str(&content)
    }

    // Grid validation proper stays in the engine; create never clamps.
    pub fn create(&self) -> Result<Game, GameError> {
        GameFactory::new(self.boundary_mode).create(self.field_width, self.field_height, self.seed)
    }
}
