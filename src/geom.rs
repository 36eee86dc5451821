#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in either client or canvas-local space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in canvas-local space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Normalized rectangle spanning two opposite corners given in any order.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether `pt` lies inside the rectangle, edges included.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.right() && pt.y >= self.y && pt.y <= self.bottom()
    }

    /// Whether the vertical line at `x` crosses the interior (edges excluded).
    #[must_use]
    pub fn spans_x(&self, x: f64) -> bool {
        x > self.x && x < self.right()
    }

    /// Whether the horizontal line at `y` crosses the interior (edges excluded).
    #[must_use]
    pub fn spans_y(&self, y: f64) -> bool {
        y > self.y && y < self.bottom()
    }
}

/// Position of the canvas element's top-left corner in client coordinates.
///
/// The host measures this from the canvas bounding rect; pointer events arrive
/// in client coordinates and are shifted into canvas-local space here, so page
/// scroll and layout never leak into the core.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CanvasOrigin {
    pub left: f64,
    pub top: f64,
}

impl CanvasOrigin {
    #[must_use]
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// Convert a client-space point to canvas-local coordinates.
    #[must_use]
    pub fn to_local(&self, client: Point) -> Point {
        Point { x: client.x - self.left, y: client.y - self.top }
    }
}
