//! Zipline domain: unit tests for curve math, direction choice, and lean.

use bevy::prelude::*;

use super::curve::{CubicBezier, choose_direction};
use super::resources::ZiplineTuning;
use super::systems::lean_angle;

fn straight_line() -> CubicBezier {
    // Degenerate bezier along +X from (0,0) to (300,0)
    CubicBezier::new(
        Vec2::new(0.0, 0.0),
        Vec2::new(100.0, 0.0),
        Vec2::new(200.0, 0.0),
        Vec2::new(300.0, 0.0),
    )
}

#[test]
fn test_bezier_endpoints() {
    let curve = straight_line();
    assert_eq!(curve.point(0.0), Vec2::new(0.0, 0.0));
    assert_eq!(curve.point(1.0), Vec2::new(300.0, 0.0));
    // out-of-range t clamps
    assert_eq!(curve.point(-1.0), curve.point(0.0));
    assert_eq!(curve.point(2.0), curve.point(1.0));
}

#[test]
fn test_bezier_midpoint_on_straight_line() {
    let p = straight_line().point(0.5);
    assert!((p.x - 150.0).abs() < 1e-3);
    assert!(p.y.abs() < 1e-3);
}

#[test]
fn test_tangent_points_along_curve() {
    let t = straight_line().tangent(0.3);
    assert!(t.x > 0.0);
    assert!(t.y.abs() < 1e-3);
}

#[test]
fn test_closest_t_on_straight_line() {
    let curve = straight_line();
    let t = curve.closest_t(Vec2::new(150.0, 40.0));
    assert!((t - 0.5).abs() < 1e-3, "t = {}", t);

    // points beyond the ends clamp to the ends
    assert!(curve.closest_t(Vec2::new(-50.0, 0.0)) < 1e-3);
    assert!(curve.closest_t(Vec2::new(400.0, 0.0)) > 1.0 - 1e-3);
}

#[test]
fn test_closest_t_on_curved_line() {
    let curve = CubicBezier::new(
        Vec2::new(-200.0, 100.0),
        Vec2::new(-80.0, -40.0),
        Vec2::new(80.0, -40.0),
        Vec2::new(200.0, 100.0),
    );
    // A point near the sag should resolve near the middle
    let t = curve.closest_t(Vec2::new(0.0, -20.0));
    assert!((t - 0.5).abs() < 0.05, "t = {}", t);

    // The resolved point is actually close
    let snap = curve.point(t);
    assert!(snap.distance(Vec2::new(0.0, -20.0)) < 15.0);
}

#[test]
fn test_direction_toward_closer_end_in_bands() {
    let tangent = Vec2::X;
    // near the start, traverse toward the start
    assert_eq!(choose_direction(0.05, Vec2::X * 100.0, tangent, 0.12), -1.0);
    // near the far end, traverse toward it
    assert_eq!(choose_direction(0.95, -Vec2::X * 100.0, tangent, 0.12), 1.0);
}

#[test]
fn test_direction_mid_curve_follows_velocity() {
    let tangent = Vec2::X;
    assert_eq!(choose_direction(0.5, Vec2::new(120.0, -30.0), tangent, 0.12), 1.0);
    assert_eq!(choose_direction(0.5, Vec2::new(-120.0, -30.0), tangent, 0.12), -1.0);
    // zero velocity defaults forward
    assert_eq!(choose_direction(0.5, Vec2::ZERO, tangent, 0.12), 1.0);
}

#[test]
fn test_lean_angle_sign_and_clamp() {
    let tuning = ZiplineTuning::default();
    // moving right leans the hook right (negative z rotation)
    assert!(lean_angle(300.0, 0.0, &tuning) < 0.0);
    assert!(lean_angle(-300.0, 0.0, &tuning) > 0.0);
    // extreme inputs clamp to the configured maximum
    let extreme = lean_angle(1.0e6, 1.0e6, &tuning);
    assert_eq!(extreme, -tuning.max_lean_degrees);
}
