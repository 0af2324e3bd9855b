use super::{cross_2d, Point2};
use crate::geometry::Segment;

/// Orientation of `point` relative to `segment`, as the sine of the angle
/// between the unit vectors `point - p0` and `p1 - p0`.
///
/// The result lies in `[-1, 1]` and does not scale with distance. It is
/// positive when `point` is to the right of the directed segment and
/// negative when it is to the left. Returns `0` when either vector is
/// shorter than `eps`, so a zero-length segment counts as collinear with
/// everything.
#[must_use]
pub fn signed_triangle_area_indicator(segment: &Segment, point: &Point2, eps: f64) -> f64 {
    let u = point - segment.p0;
    let v = segment.direction();
    let u_len = u.norm();
    let v_len = v.norm();
    if u_len < eps || v_len < eps {
        return 0.0;
    }
    cross_2d(&(u / u_len), &(v / v_len))
}

/// Checks whether `point` lies on the infinite line through `segment`.
#[must_use]
pub fn is_point_collinear(segment: &Segment, point: &Point2, eps: f64) -> bool {
    signed_triangle_area_indicator(segment, point, eps).abs() <= eps
}

/// Checks whether both endpoints of `s1` lie on the line through `s0`.
#[must_use]
pub fn are_segments_collinear(s0: &Segment, s1: &Segment, eps: f64) -> bool {
    is_point_collinear(s0, &s1.p0, eps) && is_point_collinear(s0, &s1.p1, eps)
}
