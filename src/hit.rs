#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Point;
use crate::doc::{Shape, ShapeId};
use crate::mask::Mask;

/// The topmost shape whose mask covers `world_pt`, if any.
///
/// Scans the sequence from the top of the stack down. A shape only counts
/// when its occupancy mask is filled at the pointer's cell, so a click in a
/// crescent's notch or just outside an ellipse's rim falls through to
/// whatever sits underneath.
#[must_use]
pub fn hit_test(world_pt: Point, shapes: &[Shape]) -> Option<ShapeId> {
    shapes
        .iter()
        .rev()
        .find(|shape| hit_shape(world_pt, shape))
        .map(|shape| shape.id)
}

fn hit_shape(world_pt: Point, shape: &Shape) -> bool {
    let local_x = world_pt.x - shape.x;
    let local_y = world_pt.y - shape.y;
    if local_x < 0.0
        || local_y < 0.0
        || local_x >= f64::from(shape.width)
        || local_y >= f64::from(shape.height)
    {
        return false;
    }
    let mask = Mask::compute(shape.kind, shape.width, shape.height);
    mask.cell(local_x.floor() as u32, local_y.floor() as u32)
}
