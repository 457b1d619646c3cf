//! Occupied grid cells and border generation

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::GameConfig;

/// A grid-aligned occupied position (border, obstacle, or trail segment).
///
/// Immutable once created; the full set of cells placed during one round only
/// ever grows. Overlapping placements are allowed and simply stack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub pos: Vec2,
}

impl Cell {
    pub fn new(pos: Vec2) -> Self {
        Self { pos }
    }
}

/// Build the border cells along all four arena edges at grid spacing.
///
/// Both edge loops are inclusive of their corners, so each corner cell is
/// placed twice, matching the original arena layout.
pub fn border_cells(config: &GameConfig) -> Vec<Cell> {
    let cols = ((config.x2 - config.x1) / config.scale) as u32;
    let rows = ((config.y2 - config.y1) / config.scale) as u32;
    let mut cells = Vec::with_capacity(2 * (cols + rows + 2) as usize);

    for i in 0..=cols {
        let x = config.x1 + i as f32 * config.scale;
        cells.push(Cell::new(Vec2::new(x, config.y1)));
        cells.push(Cell::new(Vec2::new(x, config.y2)));
    }
    for j in 0..=rows {
        let y = config.y1 + j as f32 * config.scale;
        cells.push(Cell::new(Vec2::new(config.x1, y)));
        cells.push(Cell::new(Vec2::new(config.x2, y)));
    }

    cells
}
