#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_equality() {
    assert_eq!(Point::new(1.0, 2.0), Point::new(1.0, 2.0));
    assert_ne!(Point::new(1.0, 2.0), Point::new(1.0, 3.0));
}

// --- Camera defaults ---

#[test]
fn camera_default_pan_is_zero() {
    let cam = Camera::default();
    assert_eq!(cam.pan_x, 0.0);
    assert_eq!(cam.pan_y, 0.0);
}

#[test]
fn camera_default_zoom() {
    assert_eq!(Camera::default().zoom, DEFAULT_ZOOM);
}

// --- screen_to_world ---

#[test]
fn screen_to_world_with_zoom() {
    let cam = Camera { pan_x: 0.0, pan_y: 0.0, zoom: 4.0 };
    let world = cam.screen_to_world(Point::new(40.0, 80.0));
    assert!(approx_eq(world.x, 10.0));
    assert!(approx_eq(world.y, 20.0));
}

#[test]
fn screen_to_world_with_pan() {
    let cam = Camera { pan_x: 100.0, pan_y: 50.0, zoom: 1.0 };
    let world = cam.screen_to_world(Point::new(100.0, 50.0));
    assert!(point_approx_eq(world, Point::new(0.0, 0.0)));
}

#[test]
fn screen_to_world_with_pan_and_zoom() {
    let cam = Camera { pan_x: 20.0, pan_y: 10.0, zoom: 2.0 };
    // (30-20)/2 = 5, (30-10)/2 = 10
    let world = cam.screen_to_world(Point::new(30.0, 30.0));
    assert!(point_approx_eq(world, Point::new(5.0, 10.0)));
}

#[test]
fn screen_to_world_negative_coords() {
    let cam = Camera { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 };
    let world = cam.screen_to_world(Point::new(-10.0, -20.0));
    assert!(point_approx_eq(world, Point::new(-10.0, -20.0)));
}

// --- world_to_screen ---

#[test]
fn world_to_screen_with_zoom() {
    let cam = Camera { pan_x: 0.0, pan_y: 0.0, zoom: 2.0 };
    let screen = cam.world_to_screen(Point::new(10.0, 20.0));
    assert!(approx_eq(screen.x, 20.0));
    assert!(approx_eq(screen.y, 40.0));
}

#[test]
fn world_to_screen_with_pan_and_zoom() {
    let cam = Camera { pan_x: 20.0, pan_y: 10.0, zoom: 3.0 };
    let screen = cam.world_to_screen(Point::new(5.0, 5.0));
    assert!(approx_eq(screen.x, 35.0));
    assert!(approx_eq(screen.y, 25.0));
}

// --- Round trips ---

#[test]
fn round_trip_with_pan_and_zoom() {
    let cam = Camera { pan_x: 50.0, pan_y: -30.0, zoom: 2.0 };
    let world = Point::new(100.0, 200.0);
    let back = cam.screen_to_world(cam.world_to_screen(world));
    assert!(point_approx_eq(world, back));
}

#[test]
fn round_trip_fractional_zoom() {
    let cam = Camera { pan_x: 13.7, pan_y: -42.3, zoom: 0.75 };
    let world = Point::new(333.3, -999.9);
    let back = cam.screen_to_world(cam.world_to_screen(world));
    assert!(point_approx_eq(world, back));
}

#[test]
fn round_trip_screen_first() {
    let cam = Camera { pan_x: 10.0, pan_y: 20.0, zoom: 1.5 };
    let screen = Point::new(400.0, 300.0);
    let back = cam.world_to_screen(cam.screen_to_world(screen));
    assert!(point_approx_eq(screen, back));
}

// --- screen_dist_to_world ---

#[test]
fn screen_dist_to_world_with_zoom() {
    let cam = Camera { pan_x: 0.0, pan_y: 0.0, zoom: 2.0 };
    assert!(approx_eq(cam.screen_dist_to_world(10.0), 5.0));
}

#[test]
fn screen_dist_to_world_ignores_pan() {
    let cam = Camera { pan_x: 999.0, pan_y: -999.0, zoom: 4.0 };
    assert!(approx_eq(cam.screen_dist_to_world(8.0), 2.0));
}

// --- clamp_zoom ---

#[test]
fn clamp_zoom_passes_in_range() {
    assert_eq!(Camera::clamp_zoom(10.0), 10.0);
}

#[test]
fn clamp_zoom_floors_at_min() {
    assert_eq!(Camera::clamp_zoom(0.0001), MIN_ZOOM);
    assert_eq!(Camera::clamp_zoom(-5.0), MIN_ZOOM);
}

#[test]
fn clamp_zoom_caps_at_max() {
    assert_eq!(Camera::clamp_zoom(1e9), MAX_ZOOM);
}

// --- zoom_to_point ---

#[test]
fn zoom_to_point_keeps_anchor_world_coord() {
    let mut cam = Camera { pan_x: 0.0, pan_y: 0.0, zoom: 10.0 };
    let anchor = Point::new(100.0, 100.0);
    let before = cam.screen_to_world(anchor);
    cam.zoom_to_point(20.0, anchor);
    let after = cam.screen_to_world(anchor);
    assert!(point_approx_eq(before, after));
}

#[test]
fn zoom_to_point_doubles_zoom_and_resolves_pan() {
    // Doubling zoom 10 -> 20 anchored at (100,100) leaves world (10,10)
    // on screen (100,100).
    let mut cam = Camera { pan_x: 0.0, pan_y: 0.0, zoom: 10.0 };
    cam.zoom_to_point(20.0, Point::new(100.0, 100.0));
    assert_eq!(cam.zoom, 20.0);
    assert!(approx_eq(cam.pan_x, -100.0));
    assert!(approx_eq(cam.pan_y, -100.0));
    let screen = cam.world_to_screen(Point::new(10.0, 10.0));
    assert!(point_approx_eq(screen, Point::new(100.0, 100.0)));
}

#[test]
fn zoom_to_point_clamps_above_max() {
    let mut cam = Camera { pan_x: 0.0, pan_y: 0.0, zoom: 90.0 };
    let anchor = Point::new(40.0, 60.0);
    let before = cam.screen_to_world(anchor);
    cam.zoom_to_point(500.0, anchor);
    assert_eq!(cam.zoom, MAX_ZOOM);
    assert!(point_approx_eq(before, cam.screen_to_world(anchor)));
}

#[test]
fn zoom_to_point_clamps_below_min() {
    let mut cam = Camera { pan_x: 7.0, pan_y: -3.0, zoom: 1.0 };
    let anchor = Point::new(0.0, 0.0);
    let before = cam.screen_to_world(anchor);
    cam.zoom_to_point(0.0, anchor);
    assert_eq!(cam.zoom, MIN_ZOOM);
    assert!(point_approx_eq(before, cam.screen_to_world(anchor)));
}

#[test]
fn zoom_to_point_with_existing_pan() {
    let mut cam = Camera { pan_x: 33.0, pan_y: -12.0, zoom: 3.0 };
    let anchor = Point::new(250.0, 125.0);
    let before = cam.screen_to_world(anchor);
    cam.zoom_to_point(6.0, anchor);
    assert_eq!(cam.zoom, 6.0);
    assert!(point_approx_eq(before, cam.screen_to_world(anchor)));
}

#[test]
fn zoom_to_point_same_zoom_keeps_pan() {
    let mut cam = Camera { pan_x: 5.0, pan_y: 6.0, zoom: 2.0 };
    cam.zoom_to_point(2.0, Point::new(80.0, 90.0));
    assert!(approx_eq(cam.pan_x, 5.0));
    assert!(approx_eq(cam.pan_y, 6.0));
}

// --- reset ---

#[test]
fn reset_restores_defaults() {
    let mut cam = Camera { pan_x: 120.0, pan_y: -40.0, zoom: 55.0 };
    cam.reset();
    assert_eq!(cam.pan_x, 0.0);
    assert_eq!(cam.pan_y, 0.0);
    assert_eq!(cam.zoom, DEFAULT_ZOOM);
}
