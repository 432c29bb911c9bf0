//! Input model: pointer events, modifier keys, snap guides, and the gesture
//! state machine.
//!
//! This module defines the types consumed by the engine. `Pointer` unifies
//! mouse and multi-touch events into one tagged shape before they enter the
//! state machine. `InputState` is the active gesture being tracked between
//! pointer-down and pointer-up, carrying all context needed to compute
//! incremental deltas and commit the gesture's effect on each move tick.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::Serialize;

use crate::camera::Point;
use crate::doc::{ShapeId, ShapeParams};

/// A normalized pointer event: one mouse position, or the active touch
/// contact points.
#[derive(Debug, Clone, PartialEq)]
pub enum Pointer {
    /// Mouse (or pen) at a single position, in surface-local CSS pixels.
    Mouse(Point),
    /// Active touch contacts, in report order.
    Touch(Vec<Point>),
}

impl Pointer {
    /// Whether this event came from a mouse.
    #[must_use]
    pub fn is_mouse(&self) -> bool {
        matches!(self, Self::Mouse(_))
    }

    /// Number of active contacts (1 for a mouse).
    #[must_use]
    pub fn contact_count(&self) -> usize {
        match self {
            Self::Mouse(_) => 1,
            Self::Touch(touches) => touches.len(),
        }
    }

    /// The representative position: the mouse position, a lone touch, or
    /// the midpoint of the first two touches. `None` for an empty touch
    /// list.
    #[must_use]
    pub fn centroid(&self) -> Option<Point> {
        match self {
            Self::Mouse(pos) => Some(*pos),
            Self::Touch(touches) => match touches.as_slice() {
                [] => None,
                [only] => Some(*only),
                [a, b, ..] => Some(Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)),
            },
        }
    }

    /// Distance between the first two touch contacts, when there are at
    /// least two.
    #[must_use]
    pub fn pinch_distance(&self) -> Option<f64> {
        match self {
            Self::Touch(touches) if touches.len() >= 2 => {
                let dx = touches[0].x - touches[1].x;
                let dy = touches[0].y - touches[1].y;
                Some(dx.hypot(dy))
            }
            _ => None,
        }
    }
}

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// A keyboard key, holding the name as reported by the browser
/// (e.g. `"Space"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Transient center-alignment guide shown while dragging.
///
/// Keyed by the neighbor shape the dragged shape aligned to. Guides are
/// recomputed from scratch on every drag tick and cleared on pointer-up; at
/// most one guide exists per axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "axis", rename_all = "lowercase")]
pub enum SnapGuide {
    /// Shared vertical center line at world `x`, spanning `y0..y1`.
    Vertical { shape: ShapeId, x: f64, y0: f64, y1: f64 },
    /// Shared horizontal center line at world `y`, spanning `x0..x1`.
    Horizontal { shape: ShapeId, y: f64, x0: f64, x1: f64 },
}

impl SnapGuide {
    /// The neighbor shape this guide aligns to.
    #[must_use]
    pub fn shape(&self) -> ShapeId {
        match self {
            Self::Vertical { shape, .. } | Self::Horizontal { shape, .. } => *shape,
        }
    }
}

/// Persistent UI state visible to the renderer and the form panel.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// The id of the currently selected shape, if any.
    pub selected_id: Option<ShapeId>,
    /// Parameters staged in the edit form.
    pub form: ShapeParams,
    /// The space bar is held, forcing pointer gestures to pan.
    pub space_pan: bool,
}

/// A shape grabbed at pointer-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grab {
    /// Id of the grabbed shape.
    pub id: ShapeId,
    /// World-space vector from the shape origin to the pointer.
    pub offset: Point,
}

/// Internal state for the gesture state machine.
///
/// Each active variant carries the context needed to compute deltas and
/// decide the pointer-up outcome. A press commits to exactly one of
/// `Panning` / `DraggingShape` once the drag threshold is crossed and keeps
/// that mode until release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    Idle,
    /// Pointer is down but still below the drag threshold, so the gesture
    /// is undetermined.
    Pressed {
        /// Screen position of the pointer-down.
        start_screen: Point,
        /// The shape under the pointer at down-time. `None` arms panning.
        grab: Option<Grab>,
    },
    /// Translating the camera with the pointer.
    Panning {
        /// Screen position at the previous move tick.
        last_screen: Point,
    },
    /// Moving a shape across the canvas.
    DraggingShape {
        /// Id of the shape being dragged.
        id: ShapeId,
        /// World-space vector from the shape origin to the pointer at
        /// down-time.
        grab_offset: Point,
    },
    /// Two-finger pinch zoom.
    PinchZooming {
        /// Distance between the contacts at gesture start.
        start_dist: f64,
        /// Camera zoom at gesture start.
        start_zoom: f64,
    },
}

impl Default for InputState {
    fn default() -> Self {
        Self::Idle
    }
}

impl InputState {
    /// Whether any gesture is being tracked.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Whether the press has committed to dragging a shape.
    #[must_use]
    pub fn is_dragging_shape(&self) -> bool {
        matches!(self, Self::DraggingShape { .. })
    }

    /// Whether the press has committed to panning.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }
}
