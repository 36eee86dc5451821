#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::doc::Pill;
use crate::geom::Point;

/// The front-most pill under `pt`.
///
/// Bounds are inclusive on every edge. Z-indexes are unique by construction,
/// so the highest one decides without a tie-break.
#[must_use]
pub fn top_pill_at(pt: Point, pills: &[Pill]) -> Option<&Pill> {
    pills.iter().filter(|p| p.bounds().contains(pt)).max_by_key(|p| p.z_index)
}
