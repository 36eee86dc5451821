//! Input model: pointer events and the gesture state machine.
//!
//! `InputState` is the gesture being tracked between pointer-down and
//! pointer-up, carrying whatever context the release needs. `Session` holds
//! the gesture plus the state that outlives a single gesture: the live
//! pointer position, the has-dragged flag that suppresses the click ending a
//! drag, and whether guide lines are shown.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::{Point, Rect};
use crate::ids::PillId;

/// A pointer event in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
    Click(Point),
}

impl PointerEvent {
    /// Where the event happened.
    #[must_use]
    pub fn point(self) -> Point {
        match self {
            Self::Down(p) | Self::Move(p) | Self::Up(p) | Self::Click(p) => p,
        }
    }
}

/// Gesture mode of the interaction state machine.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is dragging out a new pill from an anchor corner.
    Drawing {
        /// Where the pointer went down; one corner of the new pill.
        anchor: Point,
    },
    /// The user is moving an existing pill.
    Dragging {
        /// Id of the pill being dragged.
        id: PillId,
        /// Pointer position minus pill origin at drag start.
        offset: Point,
    },
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Id of the pill being dragged, if any.
    #[must_use]
    pub fn dragged_id(&self) -> Option<&str> {
        match self {
            Self::Dragging { id, .. } => Some(id.as_str()),
            _ => None,
        }
    }
}

/// Per-session interaction state visible to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// The gesture in progress.
    pub state: InputState,
    /// Last known pointer position.
    pub pointer: Point,
    /// Set by pointer movement during a drag; cleared by the next pointer-down.
    pub has_dragged: bool,
    /// Whether the crosshair guide lines are drawn.
    pub show_guides: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self { state: InputState::Idle, pointer: Point::default(), has_dragged: false, show_guides: true }
    }
}

impl Session {
    #[must_use]
    pub fn new(show_guides: bool) -> Self {
        Self { show_guides, ..Self::default() }
    }

    /// Whether a click right now should split.
    #[must_use]
    pub fn click_splits(&self) -> bool {
        self.state.is_idle() && !self.has_dragged
    }

    /// Rectangle from the draw anchor to the live pointer, while drawing.
    #[must_use]
    pub fn draw_preview(&self) -> Option<Rect> {
        match self.state {
            InputState::Drawing { anchor } => Some(Rect::from_corners(anchor, self.pointer)),
            _ => None,
        }
    }
}
