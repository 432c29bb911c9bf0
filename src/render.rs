//! Rendering: draws the full canvas scene to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives read-only views of the
//! document, camera, and UI state and produces pixels — it does not mutate
//! any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the
//! result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::{Camera, Point};
use crate::color::Rgb;
use crate::consts::{OUTLINE_DARKEN, PIXEL_GRID_MIN_ZOOM};
use crate::doc::{Shape, ShapeStore};
use crate::input::{SnapGuide, UiState};
use crate::mask::Mask;

/// World-unit grid line color at high zoom.
const GRID_COLOR: &str = "rgba(150,150,150,0.4)";

/// Snap-guide line color.
const GUIDE_COLOR: &str = "rgba(239,68,68,0.75)";

/// Selection ring color.
const SELECTION_COLOR: &str = "#6366F1";

/// Selection dash segment length in screen pixels.
const SELECTION_DASH_PX: f64 = 4.0;

/// Fill used when a shape carries an unparseable color.
const FALLBACK_RGB: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Draw the full scene: pixel grid, shapes, selection ring, snap guides.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device
/// pixel ratio. Drawing happens in world coordinates under a pan/zoom
/// transform, so stroke widths and dash lengths are divided by the zoom to
/// stay screen-constant.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    store: &ShapeStore,
    camera: &Camera,
    ui: &UiState,
    guides: &[SnapGuide],
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    // Layer 1: clear and set up the world transform.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);
    ctx.translate(camera.pan_x, camera.pan_y)?;
    ctx.scale(camera.zoom, camera.zoom)?;

    let view_min = camera.screen_to_world(Point::new(0.0, 0.0));
    let view_max = camera.screen_to_world(Point::new(viewport_w, viewport_h));

    // Layer 2: world-unit grid, only when cells are big enough to matter.
    if camera.zoom >= PIXEL_GRID_MIN_ZOOM {
        draw_grid(ctx, camera, view_min, view_max);
    }

    // Layer 3: shapes in z-order (bottom first).
    for shape in store.shapes() {
        draw_shape(ctx, shape);
    }

    // Layer 4: selection ring and snap guides.
    if let Some(selected) = ui.selected_id.and_then(|id| store.get(id)) {
        draw_selection(ctx, selected, camera.zoom)?;
    }
    for guide in guides {
        draw_guide(ctx, guide, camera.zoom);
    }

    Ok(())
}

fn draw_grid(ctx: &CanvasRenderingContext2d, camera: &Camera, view_min: Point, view_max: Point) {
    ctx.set_stroke_style_str(GRID_COLOR);
    ctx.set_line_width(1.0 / camera.zoom);
    ctx.begin_path();
    let mut x = view_min.x.floor();
    while x <= view_max.x {
        ctx.move_to(x, view_min.y);
        ctx.line_to(x, view_max.y);
        x += 1.0;
    }
    let mut y = view_min.y.floor();
    while y <= view_max.y {
        ctx.move_to(view_min.x, y);
        ctx.line_to(view_max.x, y);
        y += 1.0;
    }
    ctx.stroke();
}

/// Draw one shape as per-cell unit rectangles: interior cells at the base
/// color and opacity, outline cells darkened.
fn draw_shape(ctx: &CanvasRenderingContext2d, shape: &Shape) {
    let mask = Mask::compute(shape.kind, shape.width, shape.height);
    if mask.is_empty() {
        return;
    }
    let base = Rgb::parse(&shape.color).unwrap_or(FALLBACK_RGB);
    let fill = base.to_rgba(shape.opacity);
    let outline = base.darken(OUTLINE_DARKEN).to_rgba(shape.opacity);

    for y in 0..shape.height {
        for x in 0..shape.width {
            if !mask.cell(x, y) {
                continue;
            }
            if mask.is_outline(x, y, shape.kind) {
                ctx.set_fill_style_str(&outline);
            } else {
                ctx.set_fill_style_str(&fill);
            }
            ctx.fill_rect(shape.x + f64::from(x), shape.y + f64::from(y), 1.0, 1.0);
        }
    }
}

fn draw_selection(ctx: &CanvasRenderingContext2d, shape: &Shape, zoom: f64) -> Result<(), JsValue> {
    let dash_world = SELECTION_DASH_PX / zoom;
    let dash_array = js_sys::Array::new();
    dash_array.push(&dash_world.into());
    dash_array.push(&dash_world.into());
    ctx.set_line_dash(&dash_array)?;

    ctx.set_stroke_style_str(SELECTION_COLOR);
    ctx.set_line_width(2.0 / zoom);
    let inset = 1.0 / zoom;
    ctx.stroke_rect(
        shape.x - inset,
        shape.y - inset,
        f64::from(shape.width) + 2.0 * inset,
        f64::from(shape.height) + 2.0 * inset,
    );

    ctx.set_line_dash(&js_sys::Array::new())?;
    Ok(())
}

fn draw_guide(ctx: &CanvasRenderingContext2d, guide: &SnapGuide, zoom: f64) {
    ctx.set_stroke_style_str(GUIDE_COLOR);
    ctx.set_line_width(1.0 / zoom);
    ctx.begin_path();
    match *guide {
        SnapGuide::Vertical { x, y0, y1, .. } => {
            ctx.move_to(x, y0);
            ctx.line_to(x, y1);
        }
        SnapGuide::Horizontal { y, x0, x1, .. } => {
            ctx.move_to(x0, y);
            ctx.line_to(x1, y);
        }
    }
    ctx.stroke();
}
