// ============================================================================
// Interpolation
// Linear and Bezier interpolants routed through the precision core
// ============================================================================
//
// Every formula below is expressed purely in terms of the corrected
// arithmetic primitives, so interpolated values carry the same
// significant-digit guarantee as raw arithmetic. All functions are pure,
// total for finite inputs, and extrapolate for t outside [0, 1].

use super::point::Point;
use crate::numeric::{add, delta, e2, e3, inv, multiply, neg, subtract};

// ============================================================================
// Scalar Interpolants
// ============================================================================

/// Linear interpolation between `a` and `b`: `a + (b - a)·t`.
#[inline]
pub fn lerp_value(a: f64, b: f64, t: f64) -> f64 {
    add(&[a, multiply(&[delta(a, b), t])])
}

/// Quadratic Bezier value through endpoints `a` and `c` with control
/// value `b`:
/// `a·(1−t)² + 2b·t(1−t) + c·t²`.
///
/// Argument order is `(start, control, end)` throughout this crate.
#[inline]
pub fn qbez_value(a: f64, b: f64, c: f64, t: f64) -> f64 {
    add(&[
        multiply(&[a, e2(inv(t))]),
        multiply(&[b, 2.0, subtract(&[t, e2(t)])]),
        multiply(&[c, e2(t)]),
    ])
}

/// Cubic Bezier value with endpoints `a`/`d` and control values `b`/`c`,
/// as the expanded Bernstein sum:
///
/// `a·(1 − 3t + 3t² − t³) + b·(3t − 6t² + 3t³) + c·(3t² − 3t³) + d·t³`
#[inline]
pub fn cbez_value(a: f64, b: f64, c: f64, d: f64, t: f64) -> f64 {
    add(&[
        a,
        multiply(&[neg(a), 3.0, t]),
        multiply(&[a, 3.0, e2(t)]),
        neg(multiply(&[a, e3(t)])),
        multiply(&[b, 3.0, t]),
        multiply(&[neg(b), 6.0, e2(t)]),
        multiply(&[b, 3.0, e3(t)]),
        multiply(&[c, 3.0, e2(t)]),
        multiply(&[neg(c), 3.0, e3(t)]),
        multiply(&[d, e3(t)]),
    ])
}

// ============================================================================
// Point Interpolants
// ============================================================================
//
// Each applies the scalar interpolant to the x and y axes independently.

/// Linear interpolation from `p0` to `p1`.
#[inline]
pub fn lerp_point(p0: Point, p1: Point, t: f64) -> Point {
    Point::new(lerp_value(p0.x, p1.x, t), lerp_value(p0.y, p1.y, t))
}

/// Quadratic Bezier from `p0` to `p1` with control point `pc`.
#[inline]
pub fn qbez_point(p0: Point, pc: Point, p1: Point, t: f64) -> Point {
    Point::new(
        qbez_value(p0.x, pc.x, p1.x, t),
        qbez_value(p0.y, pc.y, p1.y, t),
    )
}

/// Cubic Bezier from `p0` to `p1` with control points `c0` and `c1`.
#[inline]
pub fn cbez_point(p0: Point, c0: Point, c1: Point, p1: Point, t: f64) -> Point {
    Point::new(
        cbez_value(p0.x, c0.x, c1.x, p1.x, t),
        cbez_value(p0.y, c0.y, c1.y, p1.y, t),
    )
}
