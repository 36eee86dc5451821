//! Crosshair split geometry.
//!
//! A split drops a vertical and a horizontal line through one point. Each
//! pill is classified by which lines cross its interior ([`classify`]) and
//! then cut into candidate pieces ([`cut_pieces`]). Candidates below the
//! minimum piece size are dropped; an empty result means the pill is kept
//! as-is. Id and z-index allocation for the surviving pieces belongs to the
//! store, so everything here is pure.

#[cfg(test)]
#[path = "split_test.rs"]
mod split_test;

use std::fmt;
use std::str::FromStr;

use crate::geom::{Point, Rect};
use crate::ids::PieceTag;

/// Which pills a crosshair can cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitReach {
    /// Only pills that contain the clicked point are cut, so a click on
    /// empty canvas changes nothing.
    #[default]
    Local,
    /// Both lines run the full canvas: a pill is cut by the vertical line
    /// whenever the point's x falls strictly inside it, wherever the point's y is.
    Canvas,
}

/// Error from parsing a [`SplitReach`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown split reach {0:?}; expected `canvas` or `local`")]
pub struct UnknownReach(pub String);

impl FromStr for SplitReach {
    type Err = UnknownReach;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "canvas" => Ok(Self::Canvas),
            "local" => Ok(Self::Local),
            _ => Err(UnknownReach(s.to_string())),
        }
    }
}

impl fmt::Display for SplitReach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canvas => f.write_str("canvas"),
            Self::Local => f.write_str("local"),
        }
    }
}

/// Which guide lines cross a pill's interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cut {
    None,
    Vertical,
    Horizontal,
    Both,
}

/// A candidate piece of a split pill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    pub tag: PieceTag,
    pub rect: Rect,
}

/// Classify `bounds` against a crosshair at `pt`.
///
/// A line touching an edge exactly does not cut.
#[must_use]
pub fn classify(bounds: &Rect, pt: Point, reach: SplitReach) -> Cut {
    if reach == SplitReach::Local && !bounds.contains(pt) {
        return Cut::None;
    }
    match (bounds.spans_x(pt.x), bounds.spans_y(pt.y)) {
        (true, true) => Cut::Both,
        (true, false) => Cut::Vertical,
        (false, true) => Cut::Horizontal,
        (false, false) => Cut::None,
    }
}

/// Cut `bounds` at `pt` and return the surviving pieces.
///
/// Four-way cuts keep every quadrant that is at least `min_piece` on both
/// axes. Two-way cuts are all-or-nothing: both halves must reach `min_piece`
/// along the cut axis. An empty result means the pill stays whole.
#[must_use]
pub fn cut_pieces(bounds: &Rect, pt: Point, cut: Cut, min_piece: f64) -> Vec<Piece> {
    let left_w = pt.x - bounds.x;
    let right_w = bounds.width - left_w;
    let top_h = pt.y - bounds.y;
    let bottom_h = bounds.height - top_h;

    match cut {
        Cut::None => Vec::new(),
        Cut::Both => [
            (PieceTag::TopLeft, Rect::new(bounds.x, bounds.y, left_w, top_h)),
            (PieceTag::TopRight, Rect::new(pt.x, bounds.y, right_w, top_h)),
            (PieceTag::BottomLeft, Rect::new(bounds.x, pt.y, left_w, bottom_h)),
            (PieceTag::BottomRight, Rect::new(pt.x, pt.y, right_w, bottom_h)),
        ]
        .into_iter()
        .filter(|(_, r)| r.width >= min_piece && r.height >= min_piece)
        .map(|(tag, rect)| Piece { tag, rect })
        .collect(),
        Cut::Vertical => {
            if left_w < min_piece || right_w < min_piece {
                return Vec::new();
            }
            vec![
                Piece { tag: PieceTag::Left, rect: Rect::new(bounds.x, bounds.y, left_w, bounds.height) },
                Piece { tag: PieceTag::Right, rect: Rect::new(pt.x, bounds.y, right_w, bounds.height) },
            ]
        }
        Cut::Horizontal => {
            if top_h < min_piece || bottom_h < min_piece {
                return Vec::new();
            }
            vec![
                Piece { tag: PieceTag::Top, rect: Rect::new(bounds.x, bounds.y, bounds.width, top_h) },
                Piece { tag: PieceTag::Bottom, rect: Rect::new(bounds.x, pt.y, bounds.width, bottom_h) },
            ]
        }
    }
}
