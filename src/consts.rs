//! Shared numeric constants for the pill splitter.

// ── Sizes ───────────────────────────────────────────────────────

/// Minimum width and height, in canvas pixels, of a freshly drawn pill.
pub const MIN_DRAW_SIZE: f64 = 40.0;

/// Minimum width and height of a piece produced by a split.
///
/// Smaller than [`MIN_DRAW_SIZE`] so drawn pills can still be subdivided.
pub const MIN_PIECE_SIZE: f64 = 20.0;

// ── Stacking ────────────────────────────────────────────────────

/// First z-index handed out by an empty store.
pub const FIRST_Z_INDEX: i64 = 1;

/// Extra z-index headroom skipped after every split.
pub const Z_INDEX_MARGIN: i64 = 10;

// ── Styling ─────────────────────────────────────────────────────

/// Corner radius of a painted pill, in canvas pixels.
pub const PILL_CORNER_RADIUS: f64 = 20.0;

/// Border colors indexed by split level; deeper levels reuse the last entry.
pub const BORDER_COLORS: [&str; 5] = ["#1f2937", "#2563eb", "#16a34a", "#9333ea", "#dc2626"];

/// Border widths indexed by split level; deeper levels reuse the last entry.
pub const BORDER_WIDTHS: [f64; 5] = [2.0, 2.0, 1.5, 1.0, 0.5];

/// Opacity lost per split level.
pub const OPACITY_STEP: f64 = 0.1;

/// Opacity never drops below this, however deep the split.
pub const OPACITY_FLOOR: f64 = 0.6;

/// Guide line color.
pub const GUIDE_COLOR: &str = "#9ca3af";

/// Guide line opacity.
pub const GUIDE_OPACITY: f64 = 0.7;

/// Guide line thickness in canvas pixels.
pub const GUIDE_WIDTH: f64 = 1.0;

/// Fill of the dashed draw preview.
pub const PREVIEW_FILL: &str = "rgba(0, 0, 0, 0.1)";

/// Border color of the dashed draw preview.
pub const PREVIEW_BORDER: &str = "#4b5563";
