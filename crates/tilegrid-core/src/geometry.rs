#![forbid(unsafe_code)]

//! Geometric primitives in CSS pixels.
//!
//! All coordinates are `f64` because pointer positions and bounding
//! rectangles reported by a rendering host are fractional. Nothing here
//! panics: NaN and negative inputs flow through arithmetic unchanged.

use serde::{Deserialize, Serialize};

/// A point (or a displacement) in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise `self + other`.
    #[inline]
    #[must_use]
    pub fn offset(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise `self - other`.
    #[inline]
    #[must_use]
    pub fn delta_from(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

/// A width/height pair in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Zero size.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A square of edge `edge`.
    #[inline]
    #[must_use]
    pub const fn square(edge: f64) -> Self {
        Self::new(edge, edge)
    }
}

/// An axis-aligned rectangle, origin at top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from an origin and a size.
    #[inline]
    #[must_use]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Top-left corner.
    #[inline]
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge (exclusive).
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if a point is inside the rectangle (half-open on right/bottom).
    #[inline]
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Check whether two rectangles share any area.
    #[must_use]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Shrink by `margin` on every side. Width/height never go below zero.
    #[must_use]
    pub fn inner(&self, margin: Sides) -> Rect {
        Rect {
            x: self.x + margin.left,
            y: self.y + margin.top,
            width: (self.width - margin.horizontal_sum()).max(0.0),
            height: (self.height - margin.vertical_sum()).max(0.0),
        }
    }
}

/// Per-side lengths for padding.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sides {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Sides {
    /// Equal value on every side.
    #[must_use]
    pub const fn all(val: f64) -> Self {
        Self::new(val, val, val, val)
    }

    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Sum of left and right.
    #[inline]
    #[must_use]
    pub fn horizontal_sum(&self) -> f64 {
        self.left + self.right
    }

    /// Sum of top and bottom.
    #[inline]
    #[must_use]
    pub fn vertical_sum(&self) -> f64 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges_follow_origin_and_size() {
        let r = Rect::new(12.0, 124.0, 100.0, 100.0);
        assert_eq!(r.right(), 112.0);
        assert_eq!(r.bottom(), 224.0);
        assert_eq!(r.origin(), Point::new(12.0, 124.0));
        assert_eq!(r.size(), Size::square(100.0));
    }

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(9.5, 9.5)));
        assert!(!r.contains(Point::new(10.0, 5.0)));
        assert!(!r.contains(Point::new(5.0, 10.0)));
    }

    #[test]
    fn inner_removes_padding() {
        let r = Rect::new(0.0, 0.0, 824.0, 600.0);
        let inner = r.inner(Sides::all(12.0));
        assert_eq!(inner, Rect::new(12.0, 12.0, 800.0, 576.0));
    }

    #[test]
    fn inner_never_negative() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let inner = r.inner(Sides::all(20.0));
        assert_eq!(inner.width, 0.0);
        assert_eq!(inner.height, 0.0);
    }

    #[test]
    fn adjacent_grid_cells_do_not_overlap() {
        let a = Rect::new(12.0, 12.0, 100.0, 100.0);
        let b = Rect::new(124.0, 12.0, 100.0, 100.0);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&Rect::new(50.0, 50.0, 100.0, 100.0)));
    }

    #[test]
    fn point_delta_and_offset_are_inverse() {
        let start = Point::new(40.0, 70.0);
        let now = Point::new(-10.0, 70.5);
        let delta = now.delta_from(start);
        assert_eq!(delta, Point::new(-50.0, 0.5));
        assert_eq!(start.offset(delta), now);
    }
}
