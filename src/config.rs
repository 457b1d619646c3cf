//! Arena and timing configuration
//!
//! Everything here defaults to the values in [`crate::consts`]; tests and
//! embedding frontends can override fields (e.g. stretch the obstacle interval
//! for deterministic runs).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Left border column (cell centers)
    pub x1: f32,
    /// Right border column
    pub x2: f32,
    /// Top border row
    pub y1: f32,
    /// Bottom border row
    pub y2: f32,
    /// Grid cell size, also the per-step distance
    pub scale: f32,
    /// Player spawn position (must be grid-aligned)
    pub start: Vec2,
    /// Seconds per single-cell walk
    pub step_duration: f32,
    /// Seconds between obstacle spawns
    pub obstacle_interval: f32,
    /// Seconds between game over and the restart prompt
    pub prompt_delay: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            x1: ARENA_X1,
            x2: ARENA_X2,
            y1: ARENA_Y1,
            y2: ARENA_Y2,
            scale: GRID_SCALE,
            start: Vec2::new(START_X, START_Y),
            step_duration: STEP_DURATION,
            obstacle_interval: OBSTACLE_INTERVAL,
            prompt_delay: PROMPT_DELAY,
        }
    }
}

impl GameConfig {
    /// Number of grid columns between the border columns, exclusive
    pub fn interior_cols(&self) -> u32 {
        ((self.x2 - self.x1) / self.scale) as u32 - 1
    }

    /// Number of grid rows between the border rows, exclusive
    pub fn interior_rows(&self) -> u32 {
        ((self.y2 - self.y1) / self.scale) as u32 - 1
    }

    /// Parse a config from JSON (embedding frontends ship overrides this way)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_interior_spans() {
        let config = GameConfig::default();
        // 792 / 8 = 99 columns of spacing, 98 interior columns
        assert_eq!(config.interior_cols(), 98);
        // 560 / 8 = 70 rows of spacing, 69 interior rows
        assert_eq!(config.interior_rows(), 69);
    }

    #[test]
    fn json_round_trip() {
        let config = GameConfig::default();
        let json = config.to_json().unwrap();
        let parsed = GameConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
