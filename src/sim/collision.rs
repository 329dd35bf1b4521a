//! Axis-aligned collision detection
//!
//! Every entity in the arena is an upright rectangle anchored at its top-left
//! corner, so a strict interval overlap on each axis is all that is needed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// Strict overlap test: touching edges do not count as a hit
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
    }

    /// True if the rectangle sticks out past either side wall of an arena
    #[inline]
    pub fn crosses_side_walls(&self, arena_width: f32) -> bool {
        self.min().x < 0.0 || self.max().x > arena_width
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
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Shares the x = 10 edge
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        // Shares the y = 10 edge
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_contained_rect_overlaps() {
        let outer = Rect::new(0.0, 0.0, 40.0, 30.0);
        let inner = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_side_walls() {
        assert!(!Rect::new(0.0, 0.0, 40.0, 30.0).crosses_side_walls(800.0));
        assert!(!Rect::new(760.0, 0.0, 40.0, 30.0).crosses_side_walls(800.0));
        assert!(Rect::new(-0.5, 0.0, 40.0, 30.0).crosses_side_walls(800.0));
        assert!(Rect::new(762.0, 0.0, 40.0, 30.0).crosses_side_walls(800.0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn disjoint_x_never_collides(
                ax in -500.0f32..500.0,
                aw in 0.1f32..100.0,
                gap in 0.0f32..100.0,
                bw in 0.1f32..100.0,
                ay in -500.0f32..500.0,
                ah in 0.1f32..100.0,
                by in -500.0f32..500.0,
                bh in 0.1f32..100.0,
            ) {
                let a = Rect::new(ax, ay, aw, ah);
                let b = Rect::new(ax + aw + gap, by, bw, bh);
                prop_assert!(!a.overlaps(&b));
                prop_assert!(!b.overlaps(&a));
            }

            #[test]
            fn disjoint_y_never_collides(
                ay in -500.0f32..500.0,
                ah in 0.1f32..100.0,
                gap in 0.0f32..100.0,
                bh in 0.1f32..100.0,
                ax in -500.0f32..500.0,
                aw in 0.1f32..100.0,
                bx in -500.0f32..500.0,
                bw in 0.1f32..100.0,
            ) {
                let a = Rect::new(ax, ay, aw, ah);
                let b = Rect::new(bx, ay + ah + gap, bw, bh);
                prop_assert!(!a.overlaps(&b));
                prop_assert!(!b.overlaps(&a));
            }

            #[test]
            fn overlap_is_symmetric(
                ax in -100.0f32..100.0, ay in -100.0f32..100.0,
                bx in -100.0f32..100.0, by in -100.0f32..100.0,
                w in 0.1f32..60.0, h in 0.1f32..60.0,
            ) {
                let a = Rect::new(ax, ay, w, h);
                let b = Rect::new(bx, by, h, w);
                prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
            }
        }
    }
}
