//! Rendering model: a paintable snapshot of the canvas.
//!
//! Nothing here draws. [`build_scene`] reads the store and the session and
//! returns a [`Scene`] listing, bottom first, everything the host should
//! paint: pills with their split-level styling, the crosshair guides, and the
//! dashed draw preview. It never mutates application state, so the host may
//! rebuild a scene after every event.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::Serialize;

use crate::consts::{
    BORDER_COLORS, BORDER_WIDTHS, GUIDE_COLOR, GUIDE_OPACITY, GUIDE_WIDTH, OPACITY_FLOOR, OPACITY_STEP,
    PILL_CORNER_RADIUS, PREVIEW_BORDER, PREVIEW_FILL,
};
use crate::doc::{Pill, PillStore};
use crate::geom::Rect;
use crate::input::Session;

/// A pill plus the styling derived from its split level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PillView {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    pub z_index: i64,
    pub split_level: u32,
    pub border_color: &'static str,
    pub border_width: f64,
    pub opacity: f64,
    pub corner_radius: f64,
}

impl PillView {
    #[must_use]
    pub fn from_pill(pill: &Pill) -> Self {
        Self {
            id: pill.id.clone(),
            x: pill.x,
            y: pill.y,
            width: pill.width,
            height: pill.height,
            fill: pill.color.clone(),
            z_index: pill.z_index,
            split_level: pill.split_level,
            border_color: border_color(pill.split_level),
            border_width: border_width(pill.split_level),
            opacity: opacity(pill.split_level),
            corner_radius: PILL_CORNER_RADIUS,
        }
    }
}

/// Crosshair through the live pointer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Guides {
    /// X of the vertical line.
    pub x: f64,
    /// Y of the horizontal line.
    pub y: f64,
    pub color: &'static str,
    pub width: f64,
    pub opacity: f64,
}

/// Dashed outline of the pill being drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preview {
    pub rect: Rect,
    pub fill: &'static str,
    pub border: &'static str,
    pub corner_radius: f64,
    pub dashed: bool,
}

/// Everything to paint, bottom layer first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    /// Pills in paint order (ascending z-index).
    pub pills: Vec<PillView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guides: Option<Guides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<Preview>,
}

/// Snapshot the store and session into a [`Scene`].
#[must_use]
pub fn build_scene(doc: &PillStore, session: &Session) -> Scene {
    let pills = doc.sorted_pills().into_iter().map(PillView::from_pill).collect();
    let guides = session.show_guides.then(|| Guides {
        x: session.pointer.x,
        y: session.pointer.y,
        color: GUIDE_COLOR,
        width: GUIDE_WIDTH,
        opacity: GUIDE_OPACITY,
    });
    let preview = session.draw_preview().map(|rect| Preview {
        rect,
        fill: PREVIEW_FILL,
        border: PREVIEW_BORDER,
        corner_radius: PILL_CORNER_RADIUS,
        dashed: true,
    });
    Scene { pills, guides, preview }
}

fn style_index(level: u32) -> usize {
    usize::try_from(level).map_or(BORDER_COLORS.len() - 1, |l| l.min(BORDER_COLORS.len() - 1))
}

/// Border color for a split level.
#[must_use]
pub fn border_color(level: u32) -> &'static str {
    BORDER_COLORS[style_index(level)]
}

/// Border width for a split level; deeper splits get thinner borders.
#[must_use]
pub fn border_width(level: u32) -> f64 {
    BORDER_WIDTHS[style_index(level)]
}

/// Fill opacity for a split level, never below [`OPACITY_FLOOR`].
#[must_use]
pub fn opacity(level: u32) -> f64 {
    (1.0 - f64::from(level) * OPACITY_STEP).max(OPACITY_FLOOR)
}
