//! Distance, bearing and straight-line stepping between points.
//!
//! Free functions over [`Point`] so they can be used without any entity.

use std::f64::consts::FRAC_PI_2;

use glam::DVec2;

use crate::types::Point;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    a.as_dvec2().distance(b.as_dvec2())
}

/// Angle in radians from `a` toward `b`, in `[-PI, PI]`.
///
/// Coincident points have no meaningful bearing; the value returned is
/// whatever `atan2(0, 0)` yields and callers must accept it.
pub fn bearing(a: Point, b: Point) -> f64 {
    (b.y - a.y).atan2(b.x - a.x)
}

/// Move `length` units from `from` along `heading`.
pub fn step(from: Point, heading: f64, length: f64) -> Point {
    (from.as_dvec2() + DVec2::from_angle(heading) * length).into()
}

/// Holding-pattern heading: the bearing to the anchor rotated by -90 degrees,
/// which circles the anchor counter-clockwise.
pub fn loiter_heading(position: Point, anchor: Point) -> f64 {
    bearing(position, anchor) - FRAC_PI_2
}
