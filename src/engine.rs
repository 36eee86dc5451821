use tracing::{debug, trace};
use wasm_bindgen::prelude::*;

use crate::config::SplitterConfig;
use crate::doc::{Pill, PillStore, SplitReport};
use crate::geom::{CanvasOrigin, Point};
use crate::ids::{IdSource, PillId, SequentialIds};
use crate::input::{InputState, PointerEvent, Session};
use crate::palette::{ColorSource, RandomPalette};
use crate::render::{self, Scene};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    PillCreated(Pill),
    PillMoved { id: PillId, x: f64, y: f64 },
    PillRaised { id: PillId, z_index: i64 },
    PillsSplit(SplitReport),
    RenderNeeded,
}

/// Core engine state: all logic that doesn't depend on the browser.
///
/// Separated from `Engine` so it can be tested without WASM dependencies.
pub struct EngineCore {
    pub doc: PillStore,
    pub session: Session,
    colors: Box<dyn ColorSource>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineCore {
    /// Engine with default limits, sequential ids, and an OS-seeded palette.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sources(
            &SplitterConfig::default(),
            Box::new(SequentialIds::new()),
            Box::new(RandomPalette::from_os()),
        )
    }

    /// Engine with explicit limits, id source, and color source.
    #[must_use]
    pub fn with_sources(config: &SplitterConfig, ids: Box<dyn IdSource>, colors: Box<dyn ColorSource>) -> Self {
        Self { doc: PillStore::with_config(config, ids), session: Session::new(config.show_guides), colors }
    }

    // --- Input events ---

    /// Dispatch any pointer event to its handler.
    pub fn handle(&mut self, event: PointerEvent) -> Vec<Action> {
        match event {
            PointerEvent::Down(pt) => self.on_pointer_down(pt),
            PointerEvent::Move(pt) => self.on_pointer_move(pt),
            PointerEvent::Up(pt) => self.on_pointer_up(pt),
            PointerEvent::Click(pt) => self.on_click(pt),
        }
    }

    /// Start a drag when `pt` is on a pill, otherwise start drawing.
    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        self.session.pointer = pt;
        if !self.session.state.is_idle() {
            debug!(state = ?self.session.state, "pointer down mid-gesture; abandoning gesture");
            self.session.state = InputState::Idle;
        }
        self.session.has_dragged = false;

        let hit = self
            .doc
            .top_pill_at(pt)
            .map(|p| (p.id.clone(), Point::new(pt.x - p.x, pt.y - p.y)));

        let mut actions = Vec::new();
        match hit {
            Some((id, offset)) => {
                if let Some(z_index) = self.doc.raise(&id) {
                    actions.push(Action::PillRaised { id: id.clone(), z_index });
                }
                debug!(%id, "drag started");
                self.session.state = InputState::Dragging { id, offset };
            }
            None => {
                self.session.state = InputState::Drawing { anchor: pt };
            }
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Track the pointer and move the dragged pill, if any.
    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        trace!(x = pt.x, y = pt.y, "pointer move");
        self.session.pointer = pt;

        let mut actions = Vec::new();
        if let InputState::Dragging { id, offset } = &self.session.state {
            self.session.has_dragged = true;
            if self.doc.move_pill(id, pt.x - offset.x, pt.y - offset.y) {
                if let Some(p) = self.doc.get(id) {
                    actions.push(Action::PillMoved { id: p.id.clone(), x: p.x, y: p.y });
                }
            }
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Finish the current gesture. A draw commits a pill if it is large enough.
    pub fn on_pointer_up(&mut self, pt: Point) -> Vec<Action> {
        self.session.pointer = pt;

        let mut actions = Vec::new();
        match std::mem::take(&mut self.session.state) {
            InputState::Drawing { anchor } => {
                if self.doc.is_drawable(anchor, pt) {
                    let color = self.colors.next_color();
                    if let Some(pill) = self.doc.create(anchor, pt, color) {
                        actions.push(Action::PillCreated(pill));
                    }
                } else {
                    debug!("draw released below minimum size");
                }
            }
            InputState::Dragging { id, .. } => {
                debug!(%id, moved = self.session.has_dragged, "drag ended");
            }
            InputState::Idle => {}
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Split at `pt`, unless the click ends a drag or a gesture is live.
    pub fn on_click(&mut self, pt: Point) -> Vec<Action> {
        if !self.session.click_splits() {
            debug!(has_dragged = self.session.has_dragged, "click suppressed");
            return Vec::new();
        }
        let report = self.doc.split_at(pt);
        if report.is_noop() {
            return vec![Action::RenderNeeded];
        }
        vec![Action::PillsSplit(report), Action::RenderNeeded]
    }

    // --- Settings ---

    /// Show or hide the crosshair guides.
    pub fn set_show_guides(&mut self, show: bool) -> Action {
        self.session.show_guides = show;
        Action::RenderNeeded
    }

    // --- Queries ---

    /// Pills in store order.
    #[must_use]
    pub fn pills(&self) -> &[Pill] {
        self.doc.pills()
    }

    /// The pill currently being dragged, if any.
    #[must_use]
    pub fn dragged(&self) -> Option<&Pill> {
        self.session.state.dragged_id().and_then(|id| self.doc.get(id))
    }

    /// Paintable snapshot of the current state.
    #[must_use]
    pub fn scene(&self) -> Scene {
        render::build_scene(&self.doc, &self.session)
    }
}

/// Browser-facing engine. Wraps `EngineCore` and converts client coordinates
/// using the canvas origin reported by the host.
#[wasm_bindgen]
pub struct Engine {
    origin: CanvasOrigin,
    core: EngineCore,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Engine {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        Self { origin: CanvasOrigin::default(), core: EngineCore::new() }
    }

    /// Engine whose palette picks are reproducible for `seed`.
    #[wasm_bindgen(js_name = withSeed)]
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        let core = EngineCore::with_sources(
            &SplitterConfig::default(),
            Box::new(SequentialIds::new()),
            Box::new(RandomPalette::seeded(seed)),
        );
        Self { origin: CanvasOrigin::default(), core }
    }

    /// Record the canvas bounding rect's top-left corner in client space.
    #[wasm_bindgen(js_name = setOrigin)]
    pub fn set_origin(&mut self, left: f64, top: f64) {
        self.origin = CanvasOrigin::new(left, top);
    }

    // --- Input events (client coordinates). Each returns whether a redraw is needed. ---

    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, client_x: f64, client_y: f64) -> bool {
        let actions = self.core.on_pointer_down(self.local(client_x, client_y));
        needs_render(&actions)
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, client_x: f64, client_y: f64) -> bool {
        let actions = self.core.on_pointer_move(self.local(client_x, client_y));
        needs_render(&actions)
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self, client_x: f64, client_y: f64) -> bool {
        let actions = self.core.on_pointer_up(self.local(client_x, client_y));
        needs_render(&actions)
    }

    pub fn click(&mut self, client_x: f64, client_y: f64) -> bool {
        let actions = self.core.on_click(self.local(client_x, client_y));
        needs_render(&actions)
    }

    #[wasm_bindgen(js_name = setShowGuides)]
    pub fn set_show_guides(&mut self, show: bool) {
        self.core.set_show_guides(show);
    }

    // --- Render ---

    /// The current scene as JSON, for the host painter.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the scene cannot be serialized.
    #[wasm_bindgen(js_name = sceneJson)]
    pub fn scene_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.core.scene()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = pillCount)]
    #[must_use]
    pub fn pill_count(&self) -> usize {
        self.core.doc.len()
    }
}

impl Engine {
    fn local(&self, client_x: f64, client_y: f64) -> Point {
        self.origin.to_local(Point::new(client_x, client_y))
    }

    /// The wrapped core, for native hosts and tests.
    #[must_use]
    pub fn core(&self) -> &EngineCore {
        &self.core
    }
}

fn needs_render(actions: &[Action]) -> bool {
    actions.iter().any(|a| matches!(a, Action::RenderNeeded))
}
