//! Collision detection between the moving head and occupied cells
//!
//! The head and every cell are axis-aligned boxes one grid scale on a side,
//! centered on their positions. A hit requires strict overlap: two boxes in
//! exact edge contact (centers one full scale apart) do not collide. That is
//! what keeps the trail cell committed one step behind the head from
//! triggering a false self-collision.

use glam::Vec2;

use super::cell::Cell;

/// Strict AABB overlap between two `size`-sided boxes centered at `a` and `b`
#[inline]
pub fn boxes_overlap(a: Vec2, b: Vec2, size: f32) -> bool {
    (a.x - b.x).abs() < size && (a.y - b.y).abs() < size
}

/// Index of the first cell the head overlaps, if any
pub fn first_hit(head: Vec2, cells: &[Cell], size: f32) -> Option<usize> {
    cells.iter().position(|cell| boxes_overlap(head, cell.pos, size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_contact_is_not_a_hit() {
        // Centers exactly one scale apart: boxes touch but do not overlap
        let a = Vec2::new(396.0, 300.0);
        let b = Vec2::new(404.0, 300.0);
        assert!(!boxes_overlap(a, b, 8.0));
    }

    #[test]
    fn partial_overlap_is_a_hit() {
        let a = Vec2::new(397.5, 300.0);
        let b = Vec2::new(404.0, 300.0);
        assert!(boxes_overlap(a, b, 8.0));
    }

    #[test]
    fn diagonal_contact_is_not_a_hit() {
        let a = Vec2::new(396.0, 300.0);
        let b = Vec2::new(404.0, 308.0);
        assert!(!boxes_overlap(a, b, 8.0));
    }

    #[test]
    fn first_hit_returns_earliest_index() {
        let cells = vec![
            Cell::new(Vec2::new(100.0, 100.0)),
            Cell::new(Vec2::new(200.0, 200.0)),
            Cell::new(Vec2::new(204.0, 200.0)),
        ];
        assert_eq!(first_hit(Vec2::new(202.0, 200.0), &cells, 8.0), Some(1));
        assert_eq!(first_hit(Vec2::new(0.0, 0.0), &cells, 8.0), None);
    }
}
