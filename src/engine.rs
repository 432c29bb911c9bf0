//! The canvas engine: gesture state machine, command surface, and the wasm
//! boundary.
//!
//! [`EngineCore`] holds all state (shapes, camera, selection, form, active
//! gesture) and is re-entered synchronously on every input event. It never
//! blocks and never panics on malformed input; degenerate events fall
//! through as no-ops. [`Engine`] wraps the core with the browser canvas
//! element, the host clock, and JSON views for the surrounding UI.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use log::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point};
use crate::consts::{
    DISCRETE_WHEEL_MIN_DY, DOUBLE_CLICK_DELAY_MS, DOUBLE_CLICK_ZOOM_FACTOR, DRAG_THRESHOLD_PX,
    PINCH_WHEEL_SENSITIVITY, SNAP_THRESHOLD_PX, WHEEL_STEP_FACTOR,
};
use crate::doc::{InvalidParams, LayerDirection, Shape, ShapeId, ShapeKind, ShapeParams, ShapeStore};
use crate::hit;
use crate::input::{Grab, InputState, Key, Modifiers, Pointer, SnapGuide, UiState, WheelDelta};
use crate::render;

/// Notifications returned from handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The scene changed; the host should redraw.
    RenderNeeded,
    /// The selection changed (the form has been re-synced already).
    SelectionChanged(Option<ShapeId>),
    /// The host should switch the canvas cursor.
    SetCursor(&'static str),
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from [`Engine`] so it can be tested without WASM/browser
/// dependencies.
#[derive(Debug)]
pub struct EngineCore {
    pub store: ShapeStore,
    pub camera: Camera,
    pub ui: UiState,
    pub input: InputState,
    guides: Vec<SnapGuide>,
    /// Timestamp of the previous pointer-down, for double-click detection.
    last_press_ms: Option<f64>,
    viewport_width: f64,
    viewport_height: f64,
    dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            store: ShapeStore::new(),
            camera: Camera::default(),
            ui: UiState::default(),
            input: InputState::default(),
            guides: Vec::new(),
            last_press_ms: None,
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the rendering-surface dimensions (CSS pixels) and device
    /// pixel ratio.
    pub fn set_viewport(&mut self, width: f64, height: f64, dpr: f64) {
        self.viewport_width = width.max(0.0);
        self.viewport_height = height.max(0.0);
        self.dpr = if dpr > 0.0 { dpr } else { 1.0 };
    }

    // --- Queries ---

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// The current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.camera.zoom
    }

    /// The current pan offset in screen pixels.
    #[must_use]
    pub fn pan(&self) -> Point {
        Point::new(self.camera.pan_x, self.camera.pan_y)
    }

    /// Shapes in stacking order (first = bottom, last = top).
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        self.store.shapes()
    }

    /// The currently selected shape, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ShapeId> {
        self.ui.selected_id
    }

    /// The active snap guides, for drawing.
    #[must_use]
    pub fn guides(&self) -> &[SnapGuide] {
        &self.guides
    }

    /// The parameters staged in the edit form.
    #[must_use]
    pub fn form(&self) -> &ShapeParams {
        &self.ui.form
    }

    /// Look up a shape by id.
    #[must_use]
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.store.get(id)
    }

    /// Viewport dimensions in CSS pixels.
    #[must_use]
    pub fn viewport(&self) -> (f64, f64) {
        (self.viewport_width, self.viewport_height)
    }

    /// Device pixel ratio last reported by the host.
    #[must_use]
    pub fn dpr(&self) -> f64 {
        self.dpr
    }

    // --- Selection / form ---

    /// Select a shape (copying its parameters into the form) or clear the
    /// selection. Unknown ids are ignored.
    pub fn select(&mut self, id: Option<ShapeId>) -> Vec<Action> {
        if let Some(id) = id {
            let Some(shape) = self.store.get(id) else {
                warn!("select: shape {id} is gone, ignoring");
                return Vec::new();
            };
            let form = ShapeParams {
                kind: shape.kind,
                width: shape.width,
                height: shape.height,
                color: shape.color.clone(),
                opacity: shape.opacity,
            };
            if self.ui.selected_id == Some(id) && self.ui.form == form {
                return Vec::new();
            }
            self.ui.selected_id = Some(id);
            self.ui.form = form;
            vec![Action::SelectionChanged(Some(id)), Action::RenderNeeded]
        } else if self.ui.selected_id.take().is_some() {
            // Deselection keeps the staged form values.
            vec![Action::SelectionChanged(None), Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    pub fn set_form_kind(&mut self, kind: ShapeKind) {
        self.ui.form.kind = kind;
    }

    pub fn set_form_width(&mut self, width: u32) {
        self.ui.form.width = width;
    }

    pub fn set_form_height(&mut self, height: u32) {
        self.ui.form.height = height;
    }

    pub fn set_form_color(&mut self, color: String) {
        self.ui.form.color = color;
    }

    pub fn set_form_opacity(&mut self, opacity: f64) {
        self.ui.form.opacity = opacity.clamp(0.0, 1.0);
    }

    fn reset_form(&mut self) {
        self.ui.form = ShapeParams::default();
    }

    /// Submit the form: update the selected shape, or add a new shape
    /// centered in the viewport. Clears the selection and resets the form
    /// on success.
    ///
    /// # Errors
    ///
    /// Propagates parameter validation failures without touching any state.
    pub fn submit_form(&mut self) -> Result<Vec<Action>, InvalidParams> {
        let params = self.ui.form.clone();
        if let Some(id) = self.ui.selected_id {
            self.store.update(id, params)?;
        } else {
            let position = self.centered_position(params.width, params.height);
            self.store.add(params, position)?;
        }
        self.ui.selected_id = None;
        self.reset_form();
        Ok(vec![Action::SelectionChanged(None), Action::RenderNeeded])
    }

    /// Abandon the current edit: clear the selection and restore form
    /// defaults.
    pub fn cancel_form(&mut self) -> Vec<Action> {
        let had_selection = self.ui.selected_id.take().is_some();
        self.reset_form();
        if had_selection {
            vec![Action::SelectionChanged(None), Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// World position that centers a `width`×`height` footprint on the
    /// viewport midpoint.
    fn centered_position(&self, width: u32, height: u32) -> Point {
        if self.viewport_width <= 0.0 || self.viewport_height <= 0.0 {
            // Viewport not measured yet.
            return Point::new(50.0, 50.0);
        }
        let mid = self.camera.screen_to_world(Point::new(
            self.viewport_width / 2.0,
            self.viewport_height / 2.0,
        ));
        Point::new(mid.x - f64::from(width) / 2.0, mid.y - f64::from(height) / 2.0)
    }

    // --- Shape commands ---

    /// Add a shape at an explicit world position; clears the selection and
    /// resets the form like a form submit.
    ///
    /// # Errors
    ///
    /// Rejects non-positive dimensions without touching the sequence.
    pub fn add_shape(&mut self, params: ShapeParams, position: Point) -> Result<ShapeId, InvalidParams> {
        let id = self.store.add(params, position)?;
        self.ui.selected_id = None;
        self.reset_form();
        Ok(id)
    }

    /// Update a shape's mutable parameters in place; missing ids are a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Rejects non-positive dimensions before touching the store.
    pub fn update_shape(&mut self, id: ShapeId, params: ShapeParams) -> Result<Vec<Action>, InvalidParams> {
        if !self.store.update(id, params)? {
            return Ok(Vec::new());
        }
        self.ui.selected_id = None;
        self.reset_form();
        Ok(vec![Action::SelectionChanged(None), Action::RenderNeeded])
    }

    /// Remove a shape; clears the selection when it was the one removed.
    pub fn remove_shape(&mut self, id: ShapeId) -> Vec<Action> {
        if self.store.remove(id).is_none() {
            return Vec::new();
        }
        let mut actions = vec![Action::RenderNeeded];
        if self.ui.selected_id == Some(id) {
            self.ui.selected_id = None;
            self.reset_form();
            actions.push(Action::SelectionChanged(None));
        }
        actions
    }

    /// Move a shape to a world position (used internally by drags, exposed
    /// for the host). Missing ids are a no-op.
    pub fn move_shape(&mut self, id: ShapeId, position: Point) -> Vec<Action> {
        if self.store.move_to(id, position) {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Restack a shape; boundary moves clamp to no-ops.
    pub fn change_layer(&mut self, id: ShapeId, direction: LayerDirection) -> Vec<Action> {
        if self.store.change_layer(id, direction) {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Splice the sequence entry at `from` to sit at `to` (drag-to-reorder
    /// list). Out-of-bounds indices are a no-op.
    pub fn reorder(&mut self, from: usize, to: usize) -> Vec<Action> {
        if self.store.reorder(from, to) {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Restore the default camera, drop the selection, and cancel any
    /// gesture in progress.
    pub fn reset_view(&mut self) -> Vec<Action> {
        self.camera.reset();
        self.input = InputState::Idle;
        self.guides.clear();
        let mut actions = vec![Action::RenderNeeded];
        if self.ui.selected_id.take().is_some() {
            actions.push(Action::SelectionChanged(None));
        }
        actions
    }

    // --- Keyboard ---

    /// Space forces panning for as long as it is held.
    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        if key.0 == "Space" && !self.ui.space_pan {
            self.ui.space_pan = true;
            return vec![Action::SetCursor("grab")];
        }
        Vec::new()
    }

    pub fn on_key_up(&mut self, key: &Key) -> Vec<Action> {
        if key.0 == "Space" && self.ui.space_pan {
            self.ui.space_pan = false;
            return vec![Action::SetCursor("default")];
        }
        Vec::new()
    }

    // --- Pointer events ---

    /// Handle pointer-down. `now_ms` is the host clock in milliseconds and
    /// drives double-click detection.
    pub fn on_pointer_down(&mut self, pointer: &Pointer, now_ms: f64) -> Vec<Action> {
        let Some(pos) = pointer.centroid() else {
            warn!("pointer-down with no contact points");
            return Vec::new();
        };

        let is_double = pointer.is_mouse()
            && self
                .last_press_ms
                .is_some_and(|t| now_ms - t < DOUBLE_CLICK_DELAY_MS);
        self.last_press_ms = Some(now_ms);

        // Two-finger down arms pinch zoom instead of a drag or pan.
        if let Some(dist) = pointer.pinch_distance() {
            self.input = InputState::PinchZooming { start_dist: dist, start_zoom: self.camera.zoom };
            return Vec::new();
        }

        if is_double {
            // Double-click zooms in around the click point; it never selects
            // or starts a drag, even with a shape under the cursor.
            self.camera
                .zoom_to_point(self.camera.zoom * DOUBLE_CLICK_ZOOM_FACTOR, pos);
            return vec![Action::RenderNeeded];
        }

        let world = self.camera.screen_to_world(pos);
        let hit_id = if self.ui.space_pan {
            None
        } else {
            hit::hit_test(world, self.store.shapes())
        };

        if let Some(id) = hit_id {
            let offset = self
                .store
                .get(id)
                .map_or(Point::new(0.0, 0.0), |shape| {
                    Point::new(world.x - shape.x, world.y - shape.y)
                });
            self.input = InputState::Pressed { start_screen: pos, grab: Some(Grab { id, offset }) };
            self.select(Some(id))
        } else {
            self.input = InputState::Pressed { start_screen: pos, grab: None };
            vec![Action::SetCursor("grabbing")]
        }
    }

    /// Handle pointer-move while a pointer-down session is active.
    pub fn on_pointer_move(&mut self, pointer: &Pointer) -> Vec<Action> {
        let Some(pos) = pointer.centroid() else {
            return Vec::new();
        };

        // A second finger can land after the initial press; upgrade to
        // pinch from whatever the gesture was about to become.
        if let Some(dist) = pointer.pinch_distance() {
            if !matches!(self.input, InputState::PinchZooming { .. }) {
                if self.input.is_active() {
                    self.input =
                        InputState::PinchZooming { start_dist: dist, start_zoom: self.camera.zoom };
                }
                return Vec::new();
            }
        }

        match self.input {
            InputState::Idle => Vec::new(),
            InputState::Pressed { start_screen, grab } => {
                let dx = pos.x - start_screen.x;
                let dy = pos.y - start_screen.y;
                if dx.hypot(dy) <= DRAG_THRESHOLD_PX {
                    return Vec::new();
                }
                // Commit the gesture: drag when a shape was grabbed, pan
                // otherwise. The choice is final for this press.
                match grab {
                    Some(grab) if !self.ui.space_pan => {
                        debug!("gesture committed: dragging shape {}", grab.id);
                        self.input =
                            InputState::DraggingShape { id: grab.id, grab_offset: grab.offset };
                        self.drag_move(grab.id, grab.offset, pos)
                    }
                    _ => {
                        debug!("gesture committed: panning");
                        self.input = InputState::Panning { last_screen: start_screen };
                        self.pan_move(pos)
                    }
                }
            }
            InputState::Panning { .. } => self.pan_move(pos),
            InputState::DraggingShape { id, grab_offset } => self.drag_move(id, grab_offset, pos),
            InputState::PinchZooming { start_dist, start_zoom } => {
                self.pinch_move(pointer, start_dist, start_zoom)
            }
        }
    }

    /// Handle pointer-up / touch-end: resolve click semantics, then reset
    /// every transient gesture flag (mode, guides, pinch baseline).
    pub fn on_pointer_up(&mut self, _pointer: &Pointer) -> Vec<Action> {
        let mut actions = Vec::new();
        if let InputState::Pressed { grab: None, .. } = self.input {
            // A click on empty canvas deselects; a click on a shape keeps
            // the selection made at pointer-down.
            if self.ui.selected_id.take().is_some() {
                actions.push(Action::SelectionChanged(None));
            }
        }
        if self.input.is_active() {
            actions.push(Action::RenderNeeded);
        }
        self.input = InputState::Idle;
        self.guides.clear();
        actions.push(Action::SetCursor(if self.ui.space_pan { "grab" } else { "default" }));
        actions
    }

    /// Handle a wheel event at `pos` (surface-local CSS pixels).
    ///
    /// Ctrl/meta-qualified wheels are trackpad pinches and zoom
    /// continuously; small or horizontal deltas are two-finger scrolls and
    /// pan; large vertical notches zoom by a fixed step. All zooms anchor at
    /// the pointer.
    pub fn on_wheel(&mut self, pos: Point, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        if modifiers.ctrl || modifiers.meta {
            let factor = WHEEL_STEP_FACTOR.powf(-delta.dy * PINCH_WHEEL_SENSITIVITY);
            self.camera.zoom_to_point(self.camera.zoom * factor, pos);
            return vec![Action::RenderNeeded];
        }
        if delta.dx.abs() > 0.0 || delta.dy.abs() < DISCRETE_WHEEL_MIN_DY {
            // Two-finger trackpad scroll pans 1:1.
            self.camera.pan_x -= delta.dx;
            self.camera.pan_y -= delta.dy;
            return vec![Action::RenderNeeded];
        }
        let factor = if delta.dy < 0.0 { WHEEL_STEP_FACTOR } else { 1.0 / WHEEL_STEP_FACTOR };
        self.camera.zoom_to_point(self.camera.zoom * factor, pos);
        vec![Action::RenderNeeded]
    }

    // --- Gesture internals ---

    fn pan_move(&mut self, pos: Point) -> Vec<Action> {
        if let InputState::Panning { last_screen } = &mut self.input {
            // Raw screen delta since the previous tick keeps panning 1:1
            // with the pointer at any zoom.
            self.camera.pan_x += pos.x - last_screen.x;
            self.camera.pan_y += pos.y - last_screen.y;
            *last_screen = pos;
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    fn drag_move(&mut self, id: ShapeId, grab_offset: Point, pos: Point) -> Vec<Action> {
        let world = self.camera.screen_to_world(pos);
        let tentative = Point::new(world.x - grab_offset.x, world.y - grab_offset.y);
        let Some(snapped) = self.apply_snapping(id, tentative) else {
            // The shape vanished mid-drag (e.g. deleted from the list UI);
            // drop the gesture instead of resurrecting it.
            warn!("dragged shape {id} is gone, dropping gesture");
            self.input = InputState::Idle;
            self.guides.clear();
            return vec![Action::RenderNeeded];
        };
        self.store.move_to(id, snapped);
        vec![Action::RenderNeeded]
    }

    /// Center-snap `tentative` against every other shape — first matching
    /// neighbor wins per axis — and rebuild the guide list.
    ///
    /// Returns `None` when the dragged shape no longer exists.
    fn apply_snapping(&mut self, id: ShapeId, tentative: Point) -> Option<Point> {
        self.guides.clear();
        let (w, h) = {
            let dragged = self.store.get(id)?;
            (f64::from(dragged.width), f64::from(dragged.height))
        };
        let threshold = self.camera.screen_dist_to_world(SNAP_THRESHOLD_PX);

        let mut pos = tentative;
        let mut snap_x: Option<ShapeId> = None;
        let mut snap_y: Option<ShapeId> = None;
        for other in self.store.shapes() {
            if other.id == id {
                continue;
            }
            let center = other.center();
            if snap_x.is_none() && (pos.x + w / 2.0 - center.x).abs() < threshold {
                pos.x = center.x - w / 2.0;
                snap_x = Some(other.id);
            }
            if snap_y.is_none() && (pos.y + h / 2.0 - center.y).abs() < threshold {
                pos.y = center.y - h / 2.0;
                snap_y = Some(other.id);
            }
            if snap_x.is_some() && snap_y.is_some() {
                break;
            }
        }

        // Guides are built from the settled position so spans are exact.
        if let Some(other_id) = snap_x {
            if let Some(other) = self.store.get(other_id) {
                self.guides.push(SnapGuide::Vertical {
                    shape: other_id,
                    x: other.center().x,
                    y0: pos.y.min(other.y),
                    y1: (pos.y + h).max(other.y + f64::from(other.height)),
                });
            }
        }
        if let Some(other_id) = snap_y {
            if let Some(other) = self.store.get(other_id) {
                self.guides.push(SnapGuide::Horizontal {
                    shape: other_id,
                    y: other.center().y,
                    x0: pos.x.min(other.x),
                    x1: (pos.x + w).max(other.x + f64::from(other.width)),
                });
            }
        }
        Some(pos)
    }

    fn pinch_move(&mut self, pointer: &Pointer, start_dist: f64, start_zoom: f64) -> Vec<Action> {
        let Some(dist) = pointer.pinch_distance() else {
            return Vec::new();
        };
        let Some(centroid) = pointer.centroid() else {
            return Vec::new();
        };
        if start_dist <= 0.0 {
            // Contacts started on the same spot; re-baseline rather than
            // dividing by zero.
            self.input = InputState::PinchZooming { start_dist: dist, start_zoom };
            return Vec::new();
        }
        let target = start_zoom * (dist / start_dist);
        self.camera.zoom_to_point(target, centroid);
        vec![Action::RenderNeeded]
    }
}

/// The full canvas engine. Wraps [`EngineCore`] and owns the browser canvas
/// element.
///
/// The host wires DOM events to these methods (with coordinates already
/// converted to the canvas surface's local space) and is responsible for
/// suppressing the browser defaults — context menu, native page pinch zoom,
/// touch scrolling — so the canvas owns all gesture input. Document-level
/// move/up listeners should be attached on pointer-down and detached on
/// pointer-up, bounding their lifetime to one gesture.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EngineCore::new() }
    }

    /// Update viewport dimensions and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
    }

    // --- Delegated form / selection commands ---

    pub fn select(&mut self, id: Option<ShapeId>) -> Vec<Action> {
        self.core.select(id)
    }

    pub fn set_form_kind(&mut self, kind: ShapeKind) {
        self.core.set_form_kind(kind);
    }

    pub fn set_form_width(&mut self, width: u32) {
        self.core.set_form_width(width);
    }

    pub fn set_form_height(&mut self, height: u32) {
        self.core.set_form_height(height);
    }

    pub fn set_form_color(&mut self, color: String) {
        self.core.set_form_color(color);
    }

    pub fn set_form_opacity(&mut self, opacity: f64) {
        self.core.set_form_opacity(opacity);
    }

    /// Submit the form (add or update, depending on the selection).
    ///
    /// # Errors
    ///
    /// Propagates parameter validation failures without touching any state.
    pub fn submit_form(&mut self) -> Result<Vec<Action>, InvalidParams> {
        self.core.submit_form()
    }

    pub fn cancel_form(&mut self) -> Vec<Action> {
        self.core.cancel_form()
    }

    // --- Delegated shape commands ---

    pub fn remove_shape(&mut self, id: ShapeId) -> Vec<Action> {
        self.core.remove_shape(id)
    }

    pub fn move_shape(&mut self, id: ShapeId, position: Point) -> Vec<Action> {
        self.core.move_shape(id, position)
    }

    pub fn change_layer(&mut self, id: ShapeId, direction: LayerDirection) -> Vec<Action> {
        self.core.change_layer(id, direction)
    }

    pub fn reorder(&mut self, from: usize, to: usize) -> Vec<Action> {
        self.core.reorder(from, to)
    }

    pub fn reset_view(&mut self) -> Vec<Action> {
        self.core.reset_view()
    }

    // --- Input events (host clock applied) ---

    pub fn on_pointer_down(&mut self, pointer: &Pointer) -> Vec<Action> {
        self.core.on_pointer_down(pointer, js_sys::Date::now())
    }

    pub fn on_pointer_move(&mut self, pointer: &Pointer) -> Vec<Action> {
        self.core.on_pointer_move(pointer)
    }

    pub fn on_pointer_up(&mut self, pointer: &Pointer) -> Vec<Action> {
        self.core.on_pointer_up(pointer)
    }

    pub fn on_wheel(&mut self, pos: Point, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_wheel(pos, delta, modifiers)
    }

    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        self.core.on_key_down(key)
    }

    pub fn on_key_up(&mut self, key: &Key) -> Vec<Action> {
        self.core.on_key_up(key)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a canvas call
    /// fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let (viewport_w, viewport_h) = self.core.viewport();
        render::draw(
            &ctx,
            &self.core.store,
            &self.core.camera,
            &self.core.ui,
            self.core.guides(),
            viewport_w,
            viewport_h,
            self.core.dpr(),
        )
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.core.camera()
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.core.zoom()
    }

    #[must_use]
    pub fn pan(&self) -> Point {
        self.core.pan()
    }

    #[must_use]
    pub fn selection(&self) -> Option<ShapeId> {
        self.core.selection()
    }

    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        self.core.shapes()
    }

    #[must_use]
    pub fn form(&self) -> &ShapeParams {
        self.core.form()
    }

    // --- Host JSON views ---

    /// The shape sequence as JSON for the host list panel.
    ///
    /// # Errors
    ///
    /// Serialization failures surface as a `JsValue`.
    pub fn shapes_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.core.store.shapes())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The active snap guides as JSON for the host overlay.
    ///
    /// # Errors
    ///
    /// Serialization failures surface as a `JsValue`.
    pub fn guides_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.core.guides()).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
