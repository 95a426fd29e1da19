use glam::Vec2;
use serde::Serialize;

/// Axis-aligned rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    /// Check if two rectangles overlap (touching edges do not count)
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.y < other.y + other.h
            && other.x < self.x + self.w
            && other.y < self.y + self.h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_rects_intersect() {
        let a = Rect::new(20.0, 250.0, 20.0, 100.0);
        let b = Rect::new(29.0, 260.0, 20.0, 20.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a), "Intersection should be symmetric");
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let paddle = Rect::new(20.0, 250.0, 20.0, 100.0);
        let flush_right = Rect::new(40.0, 260.0, 20.0, 20.0);
        let flush_above = Rect::new(25.0, 230.0, 20.0, 20.0);
        assert!(!paddle.intersects(&flush_right));
        assert!(!paddle.intersects(&flush_above));
    }

    #[test]
    fn test_disjoint_rects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(50.0, 50.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_contained_rect_intersects() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::from_pos_size(Vec2::new(40.0, 40.0), Vec2::splat(5.0));
        assert!(outer.intersects(&inner));
    }
}
