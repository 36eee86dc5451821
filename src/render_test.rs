#![allow(clippy::float_cmp)]

use super::*;
use crate::geom::Point;
use crate::input::InputState;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// Split-level styling
// =============================================================

#[test]
fn border_color_steps_then_clamps() {
    assert_eq!(border_color(0), "#1f2937");
    assert_eq!(border_color(1), "#2563eb");
    assert_eq!(border_color(4), "#dc2626");
    assert_eq!(border_color(9), "#dc2626");
    assert_eq!(border_color(u32::MAX), "#dc2626");
}

#[test]
fn border_width_thins_with_depth() {
    assert_eq!(border_width(0), 2.0);
    assert_eq!(border_width(1), 2.0);
    assert_eq!(border_width(2), 1.5);
    assert_eq!(border_width(3), 1.0);
    assert_eq!(border_width(4), 0.5);
    assert_eq!(border_width(40), 0.5);
}

#[test]
fn opacity_fades_to_floor() {
    assert_eq!(opacity(0), 1.0);
    assert!((opacity(2) - 0.8).abs() < 1e-9);
    assert!((opacity(4) - 0.6).abs() < 1e-9);
    assert_eq!(opacity(5), 0.6);
    assert_eq!(opacity(100), 0.6);
}

// =============================================================
// build_scene
// =============================================================

#[test]
fn empty_store_scene_has_only_guides() {
    let scene = build_scene(&PillStore::new(), &Session::default());
    assert!(scene.pills.is_empty());
    assert!(scene.guides.is_some());
    assert!(scene.preview.is_none());
}

#[test]
fn guides_follow_pointer() {
    let session = Session { pointer: pt(12.0, 34.0), ..Session::default() };
    let guides = build_scene(&PillStore::new(), &session).guides.unwrap();
    assert_eq!((guides.x, guides.y), (12.0, 34.0));
    assert_eq!(guides.opacity, 0.7);
}

#[test]
fn guides_hidden_when_disabled() {
    let scene = build_scene(&PillStore::new(), &Session::new(false));
    assert!(scene.guides.is_none());
}

#[test]
fn preview_present_only_while_drawing() {
    let session = Session {
        state: InputState::Drawing { anchor: pt(50.0, 50.0) },
        pointer: pt(10.0, 90.0),
        ..Session::default()
    };
    let preview = build_scene(&PillStore::new(), &session).preview.unwrap();
    assert_eq!(preview.rect, Rect::new(10.0, 50.0, 40.0, 40.0));
    assert!(preview.dashed);
}

#[test]
fn pills_listed_in_paint_order() {
    let mut doc = PillStore::new();
    doc.create(pt(0.0, 0.0), pt(50.0, 50.0), "#ff6b6b");
    doc.create(pt(0.0, 0.0), pt(50.0, 50.0), "#4ecdc4");
    doc.raise("pill-1");
    let scene = build_scene(&doc, &Session::default());
    let ids: Vec<&str> = scene.pills.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["pill-2", "pill-1"]);
}

#[test]
fn split_pieces_carry_level_styling() {
    let mut doc = PillStore::new();
    doc.create(pt(0.0, 0.0), pt(100.0, 100.0), "#ff6b6b");
    doc.split_at(pt(50.0, 50.0));
    let scene = build_scene(&doc, &Session::default());
    assert_eq!(scene.pills.len(), 4);
    for view in &scene.pills {
        assert_eq!(view.fill, "#ff6b6b");
        assert_eq!(view.split_level, 1);
        assert_eq!(view.border_color, "#2563eb");
        assert!((view.opacity - 0.9).abs() < 1e-9);
        assert_eq!(view.corner_radius, 20.0);
    }
}

#[test]
fn scene_serializes_without_absent_layers() {
    let mut doc = PillStore::new();
    doc.create(pt(0.0, 0.0), pt(100.0, 100.0), "#ff6b6b");
    let json = serde_json::to_value(build_scene(&doc, &Session::new(false))).unwrap();
    assert!(json.get("guides").is_none());
    assert!(json.get("preview").is_none());
    assert_eq!(json["pills"][0]["id"], "pill-1");
    assert_eq!(json["pills"][0]["fill"], "#ff6b6b");
    assert_eq!(json["pills"][0]["border_width"], 2.0);
}
