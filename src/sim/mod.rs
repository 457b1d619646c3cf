//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod cell;
pub mod collision;
pub mod state;
pub mod tick;

pub use cell::{Cell, border_cells};
pub use collision::{boxes_overlap, first_hit};
pub use state::{GameEvent, GamePhase, GameState, GridWalk, Player};
pub use tick::{TickInput, tick};
