//! Shared numeric constants for the canvas engine.

// ── Zoom ────────────────────────────────────────────────────────

/// Smallest allowed zoom factor (screen pixels per world cell).
pub const MIN_ZOOM: f64 = 0.5;

/// Largest allowed zoom factor.
pub const MAX_ZOOM: f64 = 100.0;

/// Zoom at startup and after a view reset.
pub const DEFAULT_ZOOM: f64 = 10.0;

/// Zoom multiplier applied per discrete wheel notch.
pub const WHEEL_STEP_FACTOR: f64 = 1.1;

/// Exponent scale applied to ctrl-wheel (trackpad pinch) deltas.
pub const PINCH_WHEEL_SENSITIVITY: f64 = 0.01;

/// Vertical wheel deltas at or above this magnitude are discrete notches;
/// smaller ones are trackpad scrolls.
pub const DISCRETE_WHEEL_MIN_DY: f64 = 100.0;

/// Zoom multiplier for a double-click.
pub const DOUBLE_CLICK_ZOOM_FACTOR: f64 = 2.0;

// ── Gestures ────────────────────────────────────────────────────

/// Maximum interval between pointer-downs that counts as a double-click.
pub const DOUBLE_CLICK_DELAY_MS: f64 = 300.0;

/// Screen-space distance the pointer must travel before a press commits to
/// a drag or pan.
pub const DRAG_THRESHOLD_PX: f64 = 5.0;

/// Screen-space distance within which dragged shape centers snap to a
/// neighbor's center.
pub const SNAP_THRESHOLD_PX: f64 = 4.0;

// ── Form defaults ───────────────────────────────────────────────

/// Default width and height for a new shape.
pub const DEFAULT_SHAPE_SIZE: u32 = 10;

/// Default base color for a new shape.
pub const DEFAULT_SHAPE_COLOR: &str = "#007BFF";

/// Default opacity for a new shape.
pub const DEFAULT_SHAPE_OPACITY: f64 = 1.0;

// ── Rendering ───────────────────────────────────────────────────

/// Zoom level at or above which the world-unit pixel grid is drawn.
pub const PIXEL_GRID_MIN_ZOOM: f64 = 4.0;

/// Fraction by which outline cells are darkened relative to the base color.
pub const OUTLINE_DARKEN: f64 = 0.3;
