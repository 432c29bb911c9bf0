//! Document model: shape entities, the editable form, and the ordered store.
//!
//! This module defines the shapes that live on the canvas (`Shape`,
//! `ShapeKind`), the parameter bundle edited in the side panel
//! (`ShapeParams`), and the runtime store that owns all live shapes
//! (`ShapeStore`). Shapes are kept in a plain ordered sequence: the index is
//! the z-order, with the last entry drawn (and hit-tested) on top.
//!
//! Mutations come from the input engine (drag moves) and from the form/list
//! UI (add, update, remove, restack). Parameter validation happens here so
//! every entry point rejects degenerate shapes the same way.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::camera::Point;
use crate::consts::{DEFAULT_SHAPE_COLOR, DEFAULT_SHAPE_OPACITY, DEFAULT_SHAPE_SIZE};

/// Unique identifier for a shape.
///
/// Ids are handed out by the store in creation order, so a larger id always
/// belongs to a newer shape.
pub type ShapeId = u64;

/// The kind of a shape's pixel footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Ellipse inscribed within the bounding box.
    Ellipse,
    /// Ellipse with a second, offset ellipse cut out of it.
    Crescent,
    /// Fully filled bounding box.
    Box,
}

/// A shape as stored in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Unique identifier for this shape.
    pub id: ShapeId,
    /// Footprint kind.
    pub kind: ShapeKind,
    /// Footprint width in pixels (>= 1).
    pub width: u32,
    /// Footprint height in pixels (>= 1).
    pub height: u32,
    /// Base fill color as a CSS hex string.
    pub color: String,
    /// Fill opacity in [0, 1].
    pub opacity: f64,
    /// Left edge of the footprint in world coordinates.
    pub x: f64,
    /// Top edge of the footprint in world coordinates.
    pub y: f64,
}

impl Shape {
    /// World-space center of the footprint.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            self.x + f64::from(self.width) / 2.0,
            self.y + f64::from(self.height) / 2.0,
        )
    }
}

/// Mutable shape parameters as staged in the edit form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeParams {
    pub kind: ShapeKind,
    pub width: u32,
    pub height: u32,
    pub color: String,
    pub opacity: f64,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            kind: ShapeKind::Ellipse,
            width: DEFAULT_SHAPE_SIZE,
            height: DEFAULT_SHAPE_SIZE,
            color: DEFAULT_SHAPE_COLOR.to_string(),
            opacity: DEFAULT_SHAPE_OPACITY,
        }
    }
}

/// Rejected shape parameters, listing every violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid shape parameters: {}", .violations.join("; "))]
pub struct InvalidParams {
    violations: Vec<String>,
}

impl InvalidParams {
    /// The individual constraint violations, one message per bad field.
    #[must_use]
    pub fn violations(&self) -> &[String] {
        &self.violations
    }
}

fn validate(params: &ShapeParams) -> Result<(), InvalidParams> {
    let mut violations = Vec::new();
    if params.width == 0 {
        violations.push("width must be at least 1 pixel".to_string());
    }
    if params.height == 0 {
        violations.push("height must be at least 1 pixel".to_string());
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(InvalidParams { violations })
    }
}

/// Stacking adjustment for [`ShapeStore::change_layer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayerDirection {
    /// Move to the end of the sequence (topmost).
    ToFront,
    /// Move to the start of the sequence (bottommost).
    ToBack,
    /// Swap with the next entry up; no-op when already topmost.
    Forward,
    /// Swap with the next entry down; no-op when already bottommost.
    Backward,
}

/// Ordered, in-memory store of shapes. Sequence order is z-order.
#[derive(Debug, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
    next_id: ShapeId,
}

impl ShapeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shapes in stacking order (first = bottom, last = top).
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Number of shapes currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the store contains no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Return a reference to a shape by id.
    #[must_use]
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    fn index_of(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|s| s.id == id)
    }

    /// Append a new shape on top of the stack and return its id.
    ///
    /// `position` is rounded to integer pixel coordinates; opacity is
    /// clamped to [0, 1].
    ///
    /// # Errors
    ///
    /// Rejects non-positive dimensions without touching the sequence,
    /// listing each violated constraint.
    pub fn add(&mut self, params: ShapeParams, position: Point) -> Result<ShapeId, InvalidParams> {
        validate(&params)?;
        let id = self.next_id;
        self.next_id += 1;
        self.shapes.push(Shape {
            id,
            kind: params.kind,
            width: params.width,
            height: params.height,
            color: params.color,
            opacity: params.opacity.clamp(0.0, 1.0),
            x: position.x.round(),
            y: position.y.round(),
        });
        Ok(id)
    }

    /// Replace the mutable fields (width, height, color, opacity) of an
    /// existing shape, preserving its kind, position, and stacking order.
    /// Returns `Ok(false)` if the id is no longer present.
    ///
    /// # Errors
    ///
    /// Rejects non-positive dimensions before touching the store.
    pub fn update(&mut self, id: ShapeId, params: ShapeParams) -> Result<bool, InvalidParams> {
        validate(&params)?;
        let Some(index) = self.index_of(id) else {
            return Ok(false);
        };
        let shape = &mut self.shapes[index];
        shape.width = params.width;
        shape.height = params.height;
        shape.color = params.color;
        shape.opacity = params.opacity.clamp(0.0, 1.0);
        Ok(true)
    }

    /// Remove a shape by id, returning it if it was present.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.index_of(id)?;
        Some(self.shapes.remove(index))
    }

    /// Move a shape to a new position, rounded to integer pixel
    /// coordinates. Returns `false` if the id is no longer present.
    pub fn move_to(&mut self, id: ShapeId, position: Point) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let shape = &mut self.shapes[index];
        shape.x = position.x.round();
        shape.y = position.y.round();
        true
    }

    /// Adjust a shape's stacking order. Steps past either end of the
    /// sequence clamp to a no-op. Returns `false` if the id is gone.
    pub fn change_layer(&mut self, id: ShapeId, direction: LayerDirection) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let last = self.shapes.len() - 1;
        match direction {
            LayerDirection::ToFront => {
                let shape = self.shapes.remove(index);
                self.shapes.push(shape);
            }
            LayerDirection::ToBack => {
                let shape = self.shapes.remove(index);
                self.shapes.insert(0, shape);
            }
            LayerDirection::Forward => {
                if index < last {
                    self.shapes.swap(index, index + 1);
                }
            }
            LayerDirection::Backward => {
                if index > 0 {
                    self.shapes.swap(index, index - 1);
                }
            }
        }
        true
    }

    /// Move the entry at `from` so it sits at `to`, shifting everything in
    /// between — the drag-to-reorder list operation. Out-of-bounds indices
    /// are a no-op. Returns whether the sequence changed shape.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if from >= self.shapes.len() || to >= self.shapes.len() {
            return false;
        }
        let shape = self.shapes.remove(from);
        self.shapes.insert(to, shape);
        true
    }
}
