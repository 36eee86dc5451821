#![allow(clippy::float_cmp)]

use super::*;

// Coverage checks shared by the split tests.
impl Rect {
    /// Whether the two rectangles share any interior area.
    pub(crate) fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right() && other.x < self.right() && self.y < other.bottom() && other.y < self.bottom()
    }

    /// Whether `other` lies entirely within this rectangle.
    pub(crate) fn encloses(&self, other: &Rect) -> bool {
        other.x >= self.x && other.y >= self.y && other.right() <= self.right() && other.bottom() <= self.bottom()
    }
}

// =============================================================
// Rect::from_corners
// =============================================================

#[test]
fn from_corners_top_left_to_bottom_right() {
    let r = Rect::from_corners(Point::new(10.0, 20.0), Point::new(110.0, 70.0));
    assert_eq!(r, Rect::new(10.0, 20.0, 100.0, 50.0));
}

#[test]
fn from_corners_normalizes_reversed_drag() {
    let r = Rect::from_corners(Point::new(110.0, 70.0), Point::new(10.0, 20.0));
    assert_eq!(r, Rect::new(10.0, 20.0, 100.0, 50.0));
}

#[test]
fn from_corners_mixed_direction() {
    let r = Rect::from_corners(Point::new(50.0, 0.0), Point::new(0.0, 30.0));
    assert_eq!(r, Rect::new(0.0, 0.0, 50.0, 30.0));
}

#[test]
fn from_corners_same_point_is_empty() {
    let r = Rect::from_corners(Point::new(5.0, 5.0), Point::new(5.0, 5.0));
    assert_eq!(r.width, 0.0);
    assert_eq!(r.height, 0.0);
}

// =============================================================
// Containment
// =============================================================

#[test]
fn contains_interior_point() {
    let r = Rect::new(0.0, 0.0, 100.0, 50.0);
    assert!(r.contains(Point::new(50.0, 25.0)));
}

#[test]
fn contains_is_inclusive_on_every_edge() {
    let r = Rect::new(10.0, 10.0, 100.0, 50.0);
    assert!(r.contains(Point::new(10.0, 30.0)));
    assert!(r.contains(Point::new(110.0, 30.0)));
    assert!(r.contains(Point::new(50.0, 10.0)));
    assert!(r.contains(Point::new(50.0, 60.0)));
    assert!(r.contains(Point::new(110.0, 60.0)));
}

#[test]
fn contains_rejects_outside_point() {
    let r = Rect::new(10.0, 10.0, 100.0, 50.0);
    assert!(!r.contains(Point::new(9.9, 30.0)));
    assert!(!r.contains(Point::new(50.0, 60.1)));
}

// =============================================================
// Strict spans
// =============================================================

#[test]
fn spans_x_excludes_edges() {
    let r = Rect::new(10.0, 0.0, 100.0, 50.0);
    assert!(r.spans_x(60.0));
    assert!(!r.spans_x(10.0));
    assert!(!r.spans_x(110.0));
    assert!(!r.spans_x(200.0));
}

#[test]
fn spans_y_excludes_edges() {
    let r = Rect::new(0.0, 10.0, 100.0, 50.0);
    assert!(r.spans_y(30.0));
    assert!(!r.spans_y(10.0));
    assert!(!r.spans_y(60.0));
    assert!(!r.spans_y(-5.0));
}

// =============================================================
// Overlap / enclosure
// =============================================================

#[test]
fn touching_rects_do_not_overlap() {
    let a = Rect::new(0.0, 0.0, 50.0, 50.0);
    let b = Rect::new(50.0, 0.0, 50.0, 50.0);
    assert!(!a.overlaps(&b));
    assert!(!b.overlaps(&a));
}

#[test]
fn intersecting_rects_overlap() {
    let a = Rect::new(0.0, 0.0, 50.0, 50.0);
    let b = Rect::new(25.0, 25.0, 50.0, 50.0);
    assert!(a.overlaps(&b));
}

#[test]
fn encloses_self_and_inner() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert!(outer.encloses(&outer));
    assert!(outer.encloses(&Rect::new(10.0, 10.0, 20.0, 20.0)));
    assert!(!outer.encloses(&Rect::new(90.0, 90.0, 20.0, 20.0)));
}

// =============================================================
// CanvasOrigin
// =============================================================

#[test]
fn origin_default_is_identity() {
    let o = CanvasOrigin::default();
    assert_eq!(o.to_local(Point::new(12.0, 34.0)), Point::new(12.0, 34.0));
}

#[test]
fn origin_subtracts_canvas_offset() {
    let o = CanvasOrigin::new(100.0, 40.0);
    assert_eq!(o.to_local(Point::new(150.0, 90.0)), Point::new(50.0, 50.0));
}

#[test]
fn origin_client_left_of_canvas_goes_negative() {
    let o = CanvasOrigin::new(100.0, 40.0);
    let p = o.to_local(Point::new(90.0, 30.0));
    assert_eq!(p, Point::new(-10.0, -10.0));
}
