//! Grid Runner - a grid-stepping arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid stepping, collisions, game state)
//! - `config`: Serializable arena/timing configuration
//!
//! The player head walks one grid cell at a time inside a bounded arena,
//! leaving a wall segment behind each completed step while obstacles spawn at
//! random interior cells on a timer. Touching any occupied cell ends the
//! round; any keypress after a short delay starts a fresh one.

pub mod config;
pub mod sim;

pub use config::GameConfig;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;

    /// Arena edge coordinates (pixel units, cell centers of the border)
    pub const ARENA_X1: f32 = 4.0;
    pub const ARENA_X2: f32 = 796.0;
    pub const ARENA_Y1: f32 = 36.0;
    pub const ARENA_Y2: f32 = 596.0;

    /// Size of one grid cell and one movement step
    pub const GRID_SCALE: f32 = 8.0;

    /// Player start position (arena center, grid-aligned)
    pub const START_X: f32 = 396.0;
    pub const START_Y: f32 = 300.0;

    /// Duration of a single-cell walk animation (seconds)
    pub const STEP_DURATION: f32 = 0.05;
    /// Interval between obstacle spawns (seconds)
    pub const OBSTACLE_INTERVAL: f32 = 0.1;
    /// Delay between "Game Over" and the restart prompt (seconds)
    pub const PROMPT_DELAY: f32 = 1.0;
}

/// Snap a coordinate to the grid lattice anchored at `origin`
#[inline]
pub fn snap_to_grid(value: f32, origin: f32, scale: f32) -> f32 {
    origin + ((value - origin) / scale).round() * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_to_grid() {
        assert_eq!(snap_to_grid(13.0, 4.0, 8.0), 12.0);
        assert_eq!(snap_to_grid(4.0, 4.0, 8.0), 4.0);
        assert_eq!(snap_to_grid(395.9, 4.0, 8.0), 396.0);
    }

    #[test]
    fn start_position_is_grid_aligned() {
        use consts::*;
        assert_eq!(snap_to_grid(START_X, ARENA_X1, GRID_SCALE), START_X);
        assert_eq!(snap_to_grid(START_Y, ARENA_Y1, GRID_SCALE), START_Y);
    }
}
