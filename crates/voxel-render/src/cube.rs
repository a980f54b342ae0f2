//! Slab test against the unit cube `[-0.5, 0.5]^3`.

use crate::interval::Interval;
use crate::math::Ray;

const HALF: f64 = 0.5;

/// Ray parameter at which the coordinate going from `a` (t = 0) to
/// `b` (t = 1) reaches `x`. Infinite or NaN when `a == b`.
fn parameter(a: f64, b: f64, x: f64) -> f64 {
    (x - a) / (b - a)
}

fn parameter_range(a: f64, b: f64) -> (f64, f64) {
    let t1 = parameter(a, b, -HALF);
    let t2 = parameter(a, b, HALF);
    (t1.min(t2), t1.max(t2))
}

/// Interval of `t >= 0` over which `ray.at(t)` lies inside the unit cube.
/// Empty when the ray misses.
pub fn intersect_unit_cube(ray: &Ray) -> Interval {
    let (p, q) = (ray.origin, ray.through);
    let mut range = Interval::FORWARD;

    let (lo, hi) = parameter_range(p.x, q.x);
    range.reduce(lo, hi);

    let (lo, hi) = parameter_range(p.y, q.y);
    range.reduce(lo, hi);

    let (lo, hi) = parameter_range(p.z, q.z);
    range.reduce(lo, hi);

    range
}

pub fn hits_unit_cube(ray: &Ray) -> bool {
    !intersect_unit_cube(ray).is_empty()
}
