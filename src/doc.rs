//! Document model: the pill type and the in-memory store that owns every pill.
//!
//! `PillStore` is the only place pills are created, moved, raised, or split.
//! It also owns the z-index allocator and the id source, so every value it
//! hands out is unique for the life of the session. Mutators that reference
//! an unknown id, or a draw that is too small, leave the store untouched and
//! report that through their return value rather than an error.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SplitterConfig;
use crate::consts::FIRST_Z_INDEX;
use crate::geom::{Point, Rect};
use crate::hit;
use crate::ids::{self, IdSource, PillId, SequentialIds};
use crate::split::{self, SplitReach};

/// A rounded rectangle on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pill {
    /// Unique identifier, stable for the pill's lifetime.
    pub id: PillId,
    /// Left edge in canvas-local coordinates.
    pub x: f64,
    /// Top edge in canvas-local coordinates.
    pub y: f64,
    /// Width; always positive once stored.
    pub width: f64,
    /// Height; always positive once stored.
    pub height: f64,
    /// Fill color, fixed at creation and inherited by split pieces.
    pub color: String,
    /// Stacking order; higher values paint on top.
    pub z_index: i64,
    /// Number of splits this pill's lineage has gone through.
    pub split_level: u32,
}

impl Pill {
    /// Bounding rectangle of the pill.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// What a split changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplitReport {
    /// Ids of pills that were replaced by pieces.
    pub removed: Vec<PillId>,
    /// The pieces that replaced them, in store order.
    pub created: Vec<Pill>,
}

impl SplitReport {
    /// Whether the split left the store unchanged.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.removed.is_empty()
    }
}

/// In-memory, ordered store of pills.
pub struct PillStore {
    pills: Vec<Pill>,
    next_z_index: i64,
    ids: Box<dyn IdSource>,
    min_draw_size: f64,
    min_piece_size: f64,
    z_index_margin: i64,
    split_reach: SplitReach,
}

impl PillStore {
    /// Empty store with default limits and sequential ids.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&SplitterConfig::default(), Box::new(SequentialIds::new()))
    }

    /// Empty store with the given limits and id source.
    #[must_use]
    pub fn with_config(config: &SplitterConfig, ids: Box<dyn IdSource>) -> Self {
        Self {
            pills: Vec::new(),
            next_z_index: FIRST_Z_INDEX,
            ids,
            min_draw_size: config.min_draw_size,
            min_piece_size: config.min_piece_size,
            z_index_margin: config.z_index_margin,
            split_reach: config.split_reach,
        }
    }

    fn allocate_z_index(&mut self) -> i64 {
        let z = self.next_z_index;
        self.next_z_index += 1;
        z
    }

    /// Whether a draw between two corners is large enough to become a pill.
    #[must_use]
    pub fn is_drawable(&self, a: Point, b: Point) -> bool {
        let rect = Rect::from_corners(a, b);
        rect.width >= self.min_draw_size && rect.height >= self.min_draw_size
    }

    /// Create a pill spanning two opposite corners.
    ///
    /// Returns `None`, and adds nothing, when the normalized rectangle is
    /// narrower or shorter than the minimum draw size.
    pub fn create(&mut self, a: Point, b: Point, color: &str) -> Option<Pill> {
        let rect = Rect::from_corners(a, b);
        if !self.is_drawable(a, b) {
            debug!(width = rect.width, height = rect.height, "draw too small; discarded");
            return None;
        }
        let pill = Pill {
            id: ids::drawn_id(self.ids.as_mut()),
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            color: color.to_string(),
            z_index: self.allocate_z_index(),
            split_level: 0,
        };
        debug!(id = %pill.id, z_index = pill.z_index, "pill created");
        self.pills.push(pill.clone());
        Some(pill)
    }

    /// Move a pill's top-left corner, clamping both coordinates to `>= 0`.
    ///
    /// Returns `false` if the id is unknown.
    pub fn move_pill(&mut self, id: &str, x: f64, y: f64) -> bool {
        let Some(pill) = self.pills.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        pill.x = x.max(0.0);
        pill.y = y.max(0.0);
        true
    }

    /// Bring a pill to the front. Returns its new z-index, or `None` if the id is unknown.
    pub fn raise(&mut self, id: &str) -> Option<i64> {
        let idx = self.pills.iter().position(|p| p.id == id)?;
        let z = self.allocate_z_index();
        self.pills[idx].z_index = z;
        debug!(%id, z_index = z, "pill raised");
        Some(z)
    }

    /// The front-most pill whose bounds contain `pt`, edges included.
    #[must_use]
    pub fn top_pill_at(&self, pt: Point) -> Option<&Pill> {
        hit::top_pill_at(pt, &self.pills)
    }

    /// Cut the pills the crosshair at `pt` reaches under the configured
    /// [`SplitReach`].
    ///
    /// Pieces take their parent's slot in store order and receive z-indexes
    /// above everything that existed before the split. The allocator then
    /// skips past the issued range plus the configured margin.
    pub fn split_at(&mut self, pt: Point) -> SplitReport {
        let base = self.next_z_index;
        let mut issued: i64 = 0;
        let mut report = SplitReport::default();
        let mut next = Vec::with_capacity(self.pills.len());

        for pill in std::mem::take(&mut self.pills) {
            let bounds = pill.bounds();
            let cut = split::classify(&bounds, pt, self.split_reach);
            let pieces = split::cut_pieces(&bounds, pt, cut, self.min_piece_size);
            if pieces.is_empty() {
                next.push(pill);
                continue;
            }
            for piece in pieces {
                let child = Pill {
                    id: ids::child_id(&pill.id, piece.tag, self.ids.as_mut()),
                    x: piece.rect.x,
                    y: piece.rect.y,
                    width: piece.rect.width,
                    height: piece.rect.height,
                    color: pill.color.clone(),
                    z_index: base + issued,
                    split_level: pill.split_level + 1,
                };
                issued += 1;
                report.created.push(child.clone());
                next.push(child);
            }
            report.removed.push(pill.id);
        }

        self.pills = next;
        self.next_z_index = base + issued + self.z_index_margin;
        debug!(x = pt.x, y = pt.y, removed = report.removed.len(), created = report.created.len(), "split");
        report
    }

    /// Look up a pill by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Pill> {
        self.pills.iter().find(|p| p.id == id)
    }

    /// All pills in store order.
    #[must_use]
    pub fn pills(&self) -> &[Pill] {
        &self.pills
    }

    /// All pills sorted by `(z_index, id)` for draw order.
    #[must_use]
    pub fn sorted_pills(&self) -> Vec<&Pill> {
        let mut pills: Vec<&Pill> = self.pills.iter().collect();
        pills.sort_by(|a, b| a.z_index.cmp(&b.z_index).then_with(|| a.id.cmp(&b.id)));
        pills
    }

    /// The z-index the next allocation will receive.
    #[must_use]
    pub fn next_z_index(&self) -> i64 {
        self.next_z_index
    }

    /// Highest z-index currently in the store.
    #[must_use]
    pub fn max_z_index(&self) -> Option<i64> {
        self.pills.iter().map(|p| p.z_index).max()
    }

    /// Number of pills currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pills.len()
    }

    /// Returns `true` if the store contains no pills.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pills.is_empty()
    }
}

impl Default for PillStore {
    fn default() -> Self {
        Self::new()
    }
}
