//! Geometry and interaction core for the pill splitter canvas.
//!
//! The user drags out rectangular "pills" on a canvas, drags them around, and
//! clicks to drop a crosshair that cuts the pill under it into rectangular
//! pieces. This crate owns that whole loop: it turns pointer events into store
//! mutations, computes the split geometry, and produces a [`render::Scene`]
//! for whatever surface does the painting. The host (browser glue or the
//! replay CLI) only forwards events and paints scenes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Pill type and the in-memory [`doc::PillStore`] |
//! | [`split`] | Crosshair split geometry |
//! | [`hit`] | Hit-testing against pills |
//! | [`input`] | Gesture state machine |
//! | [`geom`] | Points, rectangles, and client-to-canvas conversion |
//! | [`ids`] | Pill id sources (sequential or UUID) |
//! | [`palette`] | Fill color palette and color sources |
//! | [`render`] | Paintable scene snapshot and split-level styling |
//! | [`config`] | Tunable limits, loaded from the environment |
//! | [`script`] | Line-oriented event scripts for replay |
//! | [`consts`] | Shared numeric constants (minimum sizes, style tables) |

pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod geom;
pub mod hit;
pub mod ids;
pub mod input;
pub mod palette;
pub mod render;
pub mod script;
pub mod split;
