use std::f64::consts::TAU;

use kurbo::{Point, Vec2};

/// Radius and angle (radians, `atan2` convention) of `p` around `center`.
pub(crate) fn to_polar(p: Point, center: Point) -> (f64, f64) {
    let d: Vec2 = p - center;
    (d.hypot(), d.atan2())
}

/// Inverse of [`to_polar`].
pub(crate) fn from_polar(center: Point, radius: f64, angle: f64) -> Point {
    center + Vec2::from_angle(angle) * radius
}

/// Fold `angle` into `[0, wedge / 2]` where `wedge = 2π / segments`.
///
/// Each wedge is mirrored about its half-angle, so the folded value is continuous in `angle` and
/// repeats every `wedge` radians.
pub(crate) fn fold_mirror(angle: f64, segments: u32) -> f64 {
    let wedge = TAU / f64::from(segments.max(1));
    let a = angle.rem_euclid(wedge);
    if a > wedge * 0.5 { wedge - a } else { a }
}

#[cfg(test)]
#[path = "../../tests/unit/noise/polar.rs"]
mod tests;
