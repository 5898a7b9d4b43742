//! Axis-aligned collision primitives
//!
//! Everything in the world is a rectangle or a circle, so two tests cover
//! all of it. Both are pure and stateless.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, top-left anchored (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
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

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Open-interval AABB overlap: touching edges do not count.
    /// Zero-size rects are trivially non-overlapping.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }

    /// Rect/circle overlap: clamp the circle center into the rect and
    /// compare squared distance against squared radius.
    pub fn overlaps_circle(&self, center: Vec2, radius: f32) -> bool {
        let nearest = Vec2::new(
            center.x.clamp(self.x, self.x + self.w),
            center.y.clamp(self.y, self.y + self.h),
        );
        (center - nearest).length_squared() <= radius * radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_basic() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let far = Rect::new(100.0, 100.0, 4.0, 4.0);
        assert!(!a.overlaps(&far));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_zero_size_rect_never_overlaps() {
        let point = Rect::new(5.0, 5.0, 0.0, 0.0);
        let around = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!point.overlaps(&around));
        assert!(!around.overlaps(&point));
        assert!(!point.overlaps(&point));
    }

    #[test]
    fn test_circle_overlap_center_inside() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.overlaps_circle(Vec2::new(5.0, 5.0), 1.0));
    }

    #[test]
    fn test_circle_overlap_edge_and_corner() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Circle just reaching the right edge
        assert!(r.overlaps_circle(Vec2::new(12.0, 5.0), 2.5));
        assert!(!r.overlaps_circle(Vec2::new(12.0, 5.0), 1.5));
        // Corner: diagonal distance is sqrt(2)*2 ≈ 2.83
        assert!(!r.overlaps_circle(Vec2::new(12.0, 12.0), 2.5));
        assert!(r.overlaps_circle(Vec2::new(12.0, 12.0), 3.0));
    }

    #[test]
    fn test_circle_against_degenerate_rect() {
        let point = Rect::new(5.0, 5.0, 0.0, 0.0);
        // Clamping collapses to the point itself; distance test still works.
        assert!(point.overlaps_circle(Vec2::new(5.0, 5.0), 0.1));
        assert!(!point.overlaps_circle(Vec2::new(9.0, 5.0), 1.0));
    }
}
