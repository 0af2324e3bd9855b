use super::intersect_2d::{segment_segment_intersect_2d, Intersection};
use super::{Point2, Vector2};
use crate::geometry::{Arc, Circle, OrientedBox, Ray, Segment};

/// Euclidean distance between two points.
#[must_use]
pub fn distance(p0: &Point2, p1: &Point2) -> f64 {
    squared_distance(p0, p1).sqrt()
}

/// Squared Euclidean distance between two points.
#[must_use]
pub fn squared_distance(p0: &Point2, p1: &Point2) -> f64 {
    (p1 - p0).norm_squared()
}

/// Squared distance from `point` to the nearest point of `segment`.
///
/// With `D = p1 - p0` and `t = D·(point - p0)`, the nearest point is `p0`
/// when `t <= 0`, `p1` when `t >= D·D`, and the projection otherwise. A
/// zero-length segment always falls in the first branch.
#[must_use]
pub fn squared_distance_point_segment(point: &Point2, segment: &Segment) -> f64 {
    let diff = point - segment.p0;
    let dir = segment.direction();
    let t = dir.dot(&diff);
    if t <= 0.0 {
        return diff.norm_squared();
    }
    let dd = dir.norm_squared();
    if t >= dd {
        return squared_distance(point, &segment.p1);
    }
    // Cancels to slightly below zero for points on the segment.
    (diff.norm_squared() - t * t / dd).max(0.0)
}

/// Distance from `point` to the nearest point of `segment`.
#[must_use]
pub fn distance_point_segment(point: &Point2, segment: &Segment) -> f64 {
    squared_distance_point_segment(point, segment).sqrt()
}

/// Nearest point of `segment` to `point`, with its parameter in `[0, 1]`.
#[must_use]
pub fn closest_point_on_segment(point: &Point2, segment: &Segment) -> (Point2, f64) {
    let dir = segment.direction();
    let t = dir.dot(&(point - segment.p0));
    if t <= 0.0 {
        return (segment.p0, 0.0);
    }
    let dd = dir.norm_squared();
    if t >= dd {
        return (segment.p1, 1.0);
    }
    let t = t / dd;
    (segment.point_at(t), t)
}

/// Squared distance from `point` to `ray`.
///
/// Points behind the origin measure to the origin. The direction need not
/// be unit length; a zero direction degenerates to the origin.
#[must_use]
pub fn squared_distance_point_ray(point: &Point2, ray: &Ray) -> f64 {
    let diff = point - ray.origin;
    let t = ray.direction.dot(&diff);
    if t <= 0.0 {
        return diff.norm_squared();
    }
    (diff.norm_squared() - t * t / ray.direction.norm_squared()).max(0.0)
}

/// Squared distance between the closest points of two segments.
///
/// Zero when the segments touch or cross. Otherwise, in the plane, the
/// minimum is attained at an endpoint of one of the segments, so it is the
/// smallest of the four endpoint-to-segment distances. Parallel and
/// degenerate segments need no special case.
#[must_use]
pub fn squared_distance_segment_segment(s0: &Segment, s1: &Segment, eps: f64) -> f64 {
    if segment_segment_intersect_2d(s0, s1, eps) != Intersection::None {
        return 0.0;
    }
    [
        squared_distance_point_segment(&s0.p0, s1),
        squared_distance_point_segment(&s0.p1, s1),
        squared_distance_point_segment(&s1.p0, s0),
        squared_distance_point_segment(&s1.p1, s0),
    ]
    .into_iter()
    .fold(f64::INFINITY, f64::min)
}

/// Squared distance from `point` to the solid region of an oriented box.
///
/// The point is moved into the box frame and each local coordinate is
/// clamped to its half extent; the remainder is the offset to the box.
/// Points inside the box give `0`.
#[must_use]
pub fn squared_distance_point_oriented_box(point: &Point2, obox: &OrientedBox) -> f64 {
    let local = obox.to_local(point);
    let half = obox.half_extents();
    let excess = Vector2::new(
        (local.x.abs() - half.x).max(0.0),
        (local.y.abs() - half.y).max(0.0),
    );
    excess.norm_squared()
}

/// Distance from `point` to the circumference of `circle`.
#[must_use]
pub fn distance_point_circle(point: &Point2, circle: &Circle) -> f64 {
    (distance(point, circle.center()) - circle.radius()).abs()
}

/// Distance from `point` to `arc`.
///
/// If the point's angle around the center lies in the arc's sweep, the
/// distance is radial. Otherwise it is the distance to the nearer endpoint.
#[must_use]
pub fn distance_point_arc(point: &Point2, arc: &Arc, eps: f64) -> f64 {
    let to_center = distance(point, arc.center());
    if to_center < eps {
        // Every point of the arc is equidistant from its center.
        return arc.radius();
    }
    if arc.contains_angle(arc.angle_at_point(point), eps) {
        return (to_center - arc.radius()).abs();
    }
    distance(point, &arc.p0()).min(distance(point, &arc.p1()))
}
