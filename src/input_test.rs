use super::*;

// =============================================================
// PointerEvent
// =============================================================

#[test]
fn pointer_event_point_for_every_variant() {
    let p = Point::new(3.0, 4.0);
    for ev in [PointerEvent::Down(p), PointerEvent::Move(p), PointerEvent::Up(p), PointerEvent::Click(p)] {
        assert_eq!(ev.point(), p);
    }
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    assert!(InputState::default().is_idle());
}

#[test]
fn drawing_is_not_idle() {
    let s = InputState::Drawing { anchor: Point::new(0.0, 0.0) };
    assert!(!s.is_idle());
    assert!(s.dragged_id().is_none());
}

#[test]
fn dragging_exposes_id() {
    let s = InputState::Dragging { id: "pill-1".into(), offset: Point::new(5.0, 5.0) };
    assert!(!s.is_idle());
    assert_eq!(s.dragged_id(), Some("pill-1"));
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_default_shows_guides_and_is_idle() {
    let s = Session::default();
    assert!(s.state.is_idle());
    assert!(s.show_guides);
    assert!(!s.has_dragged);
    assert_eq!(s.pointer, Point::new(0.0, 0.0));
}

#[test]
fn session_new_sets_guides() {
    assert!(!Session::new(false).show_guides);
}

#[test]
fn click_splits_only_when_idle_and_not_dragged() {
    let mut s = Session::default();
    assert!(s.click_splits());

    s.has_dragged = true;
    assert!(!s.click_splits());

    s.has_dragged = false;
    s.state = InputState::Dragging { id: "pill-1".into(), offset: Point::default() };
    assert!(!s.click_splits());

    s.state = InputState::Drawing { anchor: Point::default() };
    assert!(!s.click_splits());
}

#[test]
fn draw_preview_spans_anchor_to_pointer() {
    let mut s = Session::default();
    assert!(s.draw_preview().is_none());
    s.state = InputState::Drawing { anchor: Point::new(100.0, 80.0) };
    s.pointer = Point::new(40.0, 20.0);
    assert_eq!(s.draw_preview(), Some(Rect::new(40.0, 20.0, 60.0, 60.0)));
}
