//! Pill identifiers.
//!
//! An id is built from its creation context (`pill` for a drawn pill, the
//! parent id plus a piece tag for a split child) and a disambiguating token
//! drawn from an [`IdSource`]. The store owns the source, so tests inject
//! [`SequentialIds`] for predictable ids while a live session can use
//! [`UuidIds`].

#[cfg(test)]
#[path = "ids_test.rs"]
mod ids_test;

use uuid::Uuid;

/// Unique identifier for a pill.
pub type PillId = String;

/// Which piece of a split parent a child came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceTag {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Left,
    Right,
    Top,
    Bottom,
}

impl PieceTag {
    /// Short tag embedded in child ids.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "tl",
            Self::TopRight => "tr",
            Self::BottomLeft => "bl",
            Self::BottomRight => "br",
            Self::Left => "l",
            Self::Right => "r",
            Self::Top => "t",
            Self::Bottom => "b",
        }
    }
}

/// Supplies disambiguating tokens for new pill ids. Tokens never repeat.
pub trait IdSource {
    fn next_token(&mut self) -> String;
}

/// Monotonic counter tokens: `1`, `2`, `3`, ...
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIds {
    fn next_token(&mut self) -> String {
        self.next += 1;
        self.next.to_string()
    }
}

/// Random v4 UUID tokens in simple (hyphen-free) form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_token(&mut self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Id for a pill created by a draw gesture.
pub fn drawn_id(source: &mut dyn IdSource) -> PillId {
    format!("pill-{}", source.next_token())
}

/// Id for a piece split off `parent`.
pub fn child_id(parent: &str, tag: PieceTag, source: &mut dyn IdSource) -> PillId {
    format!("{parent}-{}-{}", tag.as_str(), source.next_token())
}
