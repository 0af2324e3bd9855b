use super::distance_2d::squared_distance_point_segment;
use super::{cross_2d, Point2, Vector2};
use crate::geometry::{Circle, Ray, Segment};

/// Outcome of a segment or ray intersection query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection {
    /// The primitives do not meet.
    None,
    /// The primitives meet in a single point.
    Point(Point2),
    /// The primitives are collinear and share this sub-segment.
    Segment(Segment),
}

impl Intersection {
    /// Returns `true` unless this is [`Intersection::None`].
    #[must_use]
    pub fn is_some(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns the intersection point, if the result is a single point.
    #[must_use]
    pub fn point(&self) -> Option<Point2> {
        match self {
            Self::Point(p) => Some(*p),
            _ => None,
        }
    }
}

/// A closed interval `[min, max]` on the real line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Creates an interval from two bounds in either order.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Returns the overlap of two intervals, or `None` if they are more
    /// than `eps` apart. Touching intervals yield a zero-length interval.
    #[must_use]
    pub fn intersection(&self, other: &Self, eps: f64) -> Option<Self> {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        if min > max + eps {
            return None;
        }
        Some(Self {
            min,
            max: max.max(min),
        })
    }

    /// Returns `max - min`.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    /// Checks whether `value` lies in the interval, widened by `eps`.
    #[must_use]
    pub fn contains(&self, value: f64, eps: f64) -> bool {
        value >= self.min - eps && value <= self.max + eps
    }
}

/// Parametric line-line intersection.
///
/// Given lines `p0 + t * d0` and `p1 + u * d1`, returns `(t, u)` if they
/// are not parallel.
#[must_use]
pub fn line_line_intersect_2d(
    p0: &Point2,
    d0: &Vector2,
    p1: &Point2,
    d1: &Vector2,
    eps: f64,
) -> Option<(f64, f64)> {
    let den = cross_2d(d0, d1);
    if den.abs() <= eps {
        return None;
    }
    let offset = p1 - p0;
    Some((cross_2d(&offset, d1) / den, cross_2d(&offset, d0) / den))
}

/// Bounded segment-segment intersection.
///
/// Parameter ranges are closed: touching at an endpoint counts. Collinear
/// segments report the shared sub-segment, measured along `s0`'s own
/// direction so that vertical segments work like any other.
#[must_use]
pub fn segment_segment_intersect_2d(s0: &Segment, s1: &Segment, eps: f64) -> Intersection {
    if let Some(hit) = degenerate_segment_hit(s0, s1, eps) {
        return hit;
    }

    let a = s0.p0;
    let d0 = s0.direction();
    let d1 = s1.direction();
    let den = cross_2d(&d0, &d1);
    let offset = s1.p0 - a;
    let r_num = cross_2d(&offset, &d1);

    if den.abs() > eps {
        let r = r_num / den;
        let s = cross_2d(&offset, &d0) / den;
        let unit = Interval::new(0.0, 1.0);
        if unit.contains(r, eps) && unit.contains(s, eps) {
            return Intersection::Point(a + d0 * r.clamp(0.0, 1.0));
        }
        return Intersection::None;
    }

    // Parallel; only the same line can overlap.
    if r_num.abs() > eps {
        return Intersection::None;
    }
    let own = Interval::new(0.0, 1.0);
    let other = Interval::new(project_param(s0, &s1.p0), project_param(s0, &s1.p1));
    overlap_on(s0, &own, &other, eps)
}

/// Segment-ray intersection.
///
/// The segment parameter must lie in `[0, 1]` and the ray parameter must be
/// non-negative; hits behind the ray origin are rejected. A zero ray
/// direction only hits when the origin lies on the segment.
#[must_use]
pub fn segment_ray_intersect_2d(segment: &Segment, ray: &Ray, eps: f64) -> Intersection {
    if ray.direction.norm() < eps {
        return point_on_segment_hit(&ray.origin, segment, eps);
    }
    if segment.is_degenerate(eps) {
        return point_on_ray_hit(&segment.p0, ray, eps);
    }

    let a = segment.p0;
    let d0 = segment.direction();
    let d1 = ray.direction;
    let den = cross_2d(&d0, &d1);
    let offset = ray.origin - a;
    let r_num = cross_2d(&offset, &d1);

    if den.abs() > eps {
        let r = r_num / den;
        let s = cross_2d(&offset, &d0) / den;
        if Interval::new(0.0, 1.0).contains(r, eps) && s >= -eps {
            return Intersection::Point(a + d0 * r.clamp(0.0, 1.0));
        }
        return Intersection::None;
    }

    if r_num.abs() > eps {
        return Intersection::None;
    }
    let start = project_param(segment, &ray.origin);
    // The ray runs toward +inf along the segment when the directions agree.
    let ray_range = if d0.dot(&d1) > 0.0 {
        Interval::new(start, f64::INFINITY)
    } else {
        Interval::new(f64::NEG_INFINITY, start)
    };
    overlap_on(segment, &Interval::new(0.0, 1.0), &ray_range, eps)
}

/// Intersection of a segment with a circle's circumference.
///
/// Returns zero, one (tangent or single crossing) or two points, ordered
/// along the segment from `p0`.
#[must_use]
pub fn segment_circle_intersect_2d(segment: &Segment, circle: &Circle, eps: f64) -> Vec<Point2> {
    let mut hits = Vec::new();
    let d = segment.direction();
    let a = d.norm_squared();
    if a < eps * eps {
        let on_circle =
            ((segment.p0 - circle.center()).norm() - circle.radius()).abs() <= eps;
        if on_circle {
            hits.push(segment.p0);
        }
        return hits;
    }

    // Substitute p0 + t*d into |p - c|² = r².
    let f = segment.p0 - circle.center();
    let b = 2.0 * f.dot(&d);
    let c = f.norm_squared() - circle.radius() * circle.radius();
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < -eps {
        return hits;
    }
    let disc_sqrt = discriminant.max(0.0).sqrt();

    let roots = if disc_sqrt <= eps {
        vec![-b / (2.0 * a)]
    } else {
        vec![(-b - disc_sqrt) / (2.0 * a), (-b + disc_sqrt) / (2.0 * a)]
    };
    let unit = Interval::new(0.0, 1.0);
    for t in roots {
        if unit.contains(t, eps) {
            hits.push(segment.point_at(t.clamp(0.0, 1.0)));
        }
    }
    hits
}

/// Parameter of the projection of `point` onto the line through `segment`.
fn project_param(segment: &Segment, point: &Point2) -> f64 {
    let d = segment.direction();
    (point - segment.p0).dot(&d) / d.norm_squared()
}

/// Maps the overlap of two parameter intervals on `segment` back to world
/// coordinates.
fn overlap_on(segment: &Segment, own: &Interval, other: &Interval, eps: f64) -> Intersection {
    let Some(shared) = own.intersection(other, eps) else {
        return Intersection::None;
    };
    let lo = shared.min.clamp(0.0, 1.0);
    let hi = shared.max.clamp(0.0, 1.0);
    let start = segment.point_at(lo);
    let end = segment.point_at(hi);
    if (end - start).norm() <= eps {
        Intersection::Point(start)
    } else {
        Intersection::Segment(Segment::new(start, end))
    }
}

/// Handles segment pairs where at least one side has zero length.
fn degenerate_segment_hit(s0: &Segment, s1: &Segment, eps: f64) -> Option<Intersection> {
    match (s0.is_degenerate(eps), s1.is_degenerate(eps)) {
        (false, false) => None,
        (true, _) => Some(point_on_segment_hit(&s0.p0, s1, eps)),
        (false, true) => Some(point_on_segment_hit(&s1.p0, s0, eps)),
    }
}

fn point_on_segment_hit(point: &Point2, segment: &Segment, eps: f64) -> Intersection {
    if squared_distance_point_segment(point, segment) <= eps * eps {
        Intersection::Point(*point)
    } else {
        Intersection::None
    }
}

fn point_on_ray_hit(point: &Point2, ray: &Ray, eps: f64) -> Intersection {
    let diff = point - ray.origin;
    let t = diff.dot(&ray.direction);
    let off_line = cross_2d(&diff, &ray.direction).abs() / ray.direction.norm();
    if t >= -eps && off_line <= eps {
        Intersection::Point(*point)
    } else {
        Intersection::None
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use approx::assert_abs_diff_eq;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
        Segment::from_coords(x0, y0, x1, y1)
    }

    fn expect_point(hit: Intersection) -> Point2 {
        match hit {
            Intersection::Point(p) => p,
            other => panic!("expected point, got {other:?}"),
        }
    }

    fn expect_segment(hit: Intersection) -> Segment {
        match hit {
            Intersection::Segment(s) => s,
            other => panic!("expected segment, got {other:?}"),
        }
    }

    // ── line-line ──

    #[test]
    fn line_line_perpendicular() {
        let (t, u) = line_line_intersect_2d(
            &Point2::new(0.0, 0.0),
            &Vector2::new(1.0, 0.0),
            &Point2::new(0.5, -1.0),
            &Vector2::new(0.0, 1.0),
            TOLERANCE,
        )
        .unwrap();
        assert_abs_diff_eq!(t, 0.5);
        assert_abs_diff_eq!(u, 1.0);
    }

    #[test]
    fn line_line_parallel_returns_none() {
        let hit = line_line_intersect_2d(
            &Point2::new(0.0, 0.0),
            &Vector2::new(1.0, 0.0),
            &Point2::new(0.0, 1.0),
            &Vector2::new(2.0, 0.0),
            TOLERANCE,
        );
        assert!(hit.is_none());
    }

    // ── segment-segment ──

    #[test]
    fn crossing_diagonals_meet_at_midpoint() {
        let p = expect_point(segment_segment_intersect_2d(
            &seg(0.0, 0.0, 10.0, 10.0),
            &seg(0.0, 10.0, 10.0, 0.0),
            TOLERANCE,
        ));
        assert_abs_diff_eq!(p.x, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn parallel_offset_segments_do_not_meet() {
        let hit = segment_segment_intersect_2d(&seg(0.0, 0.0, 1.0, 0.0), &seg(0.0, 1.0, 1.0, 1.0), TOLERANCE);
        assert_eq!(hit, Intersection::None);
    }

    #[test]
    fn lines_cross_outside_segments() {
        let hit = segment_segment_intersect_2d(&seg(0.0, 0.0, 1.0, 1.0), &seg(3.0, 0.0, 2.0, 1.0), TOLERANCE);
        assert_eq!(hit, Intersection::None);
    }

    #[test]
    fn endpoint_touch_counts() {
        let p = expect_point(segment_segment_intersect_2d(
            &seg(0.0, 0.0, 2.0, 0.0),
            &seg(2.0, 0.0, 2.0, 5.0),
            TOLERANCE,
        ));
        assert_eq!(p, Point2::new(2.0, 0.0));
        // T-junction at the interior of the first segment.
        let p = expect_point(segment_segment_intersect_2d(
            &seg(0.0, 0.0, 4.0, 0.0),
            &seg(1.0, 3.0, 1.0, 0.0),
            TOLERANCE,
        ));
        assert_abs_diff_eq!(p.x, 1.0);
    }

    #[test]
    fn collinear_overlap_returns_shared_piece() {
        let s0 = seg(0.0, 0.0, 10.0, 0.0);
        let s1 = seg(5.0, 0.0, 15.0, 0.0);
        let shared = expect_segment(segment_segment_intersect_2d(&s0, &s1, TOLERANCE));
        assert_eq!(shared, seg(5.0, 0.0, 10.0, 0.0));
        // Swapping the arguments reports the same piece.
        let shared = expect_segment(segment_segment_intersect_2d(&s1, &s0, TOLERANCE));
        assert_eq!(shared, seg(5.0, 0.0, 10.0, 0.0));
    }

    #[test]
    fn collinear_vertical_overlap() {
        let s0 = seg(2.0, 0.0, 2.0, 10.0);
        let s1 = seg(2.0, 12.0, 2.0, 4.0);
        let shared = expect_segment(segment_segment_intersect_2d(&s0, &s1, TOLERANCE));
        assert_abs_diff_eq!(shared.p0.y, 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(shared.p1.y, 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(shared.p0.x, 2.0);
    }

    #[test]
    fn collinear_containment() {
        let shared = expect_segment(segment_segment_intersect_2d(
            &seg(0.0, 0.0, 10.0, 10.0),
            &seg(7.0, 7.0, 3.0, 3.0),
            TOLERANCE,
        ));
        assert_abs_diff_eq!(shared.p0.x, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(shared.p1.x, 7.0, epsilon = 1e-12);
    }

    #[test]
    fn collinear_touching_is_point() {
        let p = expect_point(segment_segment_intersect_2d(
            &seg(0.0, 0.0, 1.0, 0.0),
            &seg(1.0, 0.0, 3.0, 0.0),
            TOLERANCE,
        ));
        assert_eq!(p, Point2::new(1.0, 0.0));
    }

    #[test]
    fn collinear_disjoint_is_none() {
        let hit = segment_segment_intersect_2d(&seg(0.0, 0.0, 1.0, 0.0), &seg(2.0, 0.0, 3.0, 0.0), TOLERANCE);
        assert_eq!(hit, Intersection::None);
    }

    #[test]
    fn degenerate_segment_on_other() {
        let dot = seg(1.0, 1.0, 1.0, 1.0);
        let p = expect_point(segment_segment_intersect_2d(&dot, &seg(0.0, 0.0, 2.0, 2.0), TOLERANCE));
        assert_eq!(p, Point2::new(1.0, 1.0));
        let hit = segment_segment_intersect_2d(&seg(0.0, 0.0, 2.0, 0.0), &dot, TOLERANCE);
        assert_eq!(hit, Intersection::None);
    }

    // ── segment-ray ──

    #[test]
    fn ray_hits_segment_ahead() {
        let ray = Ray::new(Point2::new(1.0, -5.0), Vector2::new(0.0, 3.0));
        let p = expect_point(segment_ray_intersect_2d(&seg(0.0, 0.0, 4.0, 0.0), &ray, TOLERANCE));
        assert_abs_diff_eq!(p.x, 1.0);
        assert_abs_diff_eq!(p.y, 0.0);
    }

    #[test]
    fn ray_rejects_hits_behind_origin() {
        let ray = Ray::new(Point2::new(1.0, 5.0), Vector2::new(0.0, 1.0));
        let hit = segment_ray_intersect_2d(&seg(0.0, 0.0, 4.0, 0.0), &ray, TOLERANCE);
        assert_eq!(hit, Intersection::None);
    }

    #[test]
    fn ray_from_segment_point_hits_it() {
        let ray = Ray::new(Point2::new(2.0, 0.0), Vector2::new(1.0, 1.0));
        let p = expect_point(segment_ray_intersect_2d(&seg(0.0, 0.0, 4.0, 0.0), &ray, TOLERANCE));
        assert_eq!(p, Point2::new(2.0, 0.0));
    }

    #[test]
    fn ray_misses_beyond_segment_end() {
        let ray = Ray::new(Point2::new(5.0, -1.0), Vector2::new(0.0, 1.0));
        let hit = segment_ray_intersect_2d(&seg(0.0, 0.0, 4.0, 0.0), &ray, TOLERANCE);
        assert!(!hit.is_some());
    }

    #[test]
    fn ray_along_segment_overlaps_forward_part() {
        let ray = Ray::new(Point2::new(1.0, 0.0), Vector2::new(2.0, 0.0));
        let shared = expect_segment(segment_ray_intersect_2d(&seg(0.0, 0.0, 4.0, 0.0), &ray, TOLERANCE));
        assert_eq!(shared, seg(1.0, 0.0, 4.0, 0.0));

        let back = Ray::new(Point2::new(3.0, 0.0), Vector2::new(-1.0, 0.0));
        let shared = expect_segment(segment_ray_intersect_2d(&seg(0.0, 0.0, 4.0, 0.0), &back, TOLERANCE));
        assert_eq!(shared, seg(0.0, 0.0, 3.0, 0.0));
    }

    #[test]
    fn ray_collinear_pointing_away_is_none() {
        let ray = Ray::new(Point2::new(5.0, 0.0), Vector2::new(1.0, 0.0));
        let hit = segment_ray_intersect_2d(&seg(0.0, 0.0, 4.0, 0.0), &ray, TOLERANCE);
        assert_eq!(hit, Intersection::None);
    }

    #[test]
    fn ray_parallel_offset_is_none() {
        let ray = Ray::new(Point2::new(0.0, 1.0), Vector2::new(1.0, 0.0));
        let hit = segment_ray_intersect_2d(&seg(0.0, 0.0, 4.0, 0.0), &ray, TOLERANCE);
        assert_eq!(hit, Intersection::None);
    }

    #[test]
    fn ray_zero_direction() {
        let on = Ray::new(Point2::new(2.0, 0.0), Vector2::zeros());
        assert_eq!(
            segment_ray_intersect_2d(&seg(0.0, 0.0, 4.0, 0.0), &on, TOLERANCE).point(),
            Some(Point2::new(2.0, 0.0))
        );
        let off = Ray::new(Point2::new(2.0, 1.0), Vector2::zeros());
        assert_eq!(segment_ray_intersect_2d(&seg(0.0, 0.0, 4.0, 0.0), &off, TOLERANCE), Intersection::None);
    }

    // ── segment-circle ──

    #[test]
    fn segment_through_circle_hits_twice() {
        let c = Circle::new(Point2::origin(), 1.0).unwrap();
        let hits = segment_circle_intersect_2d(&seg(-2.0, 0.0, 2.0, 0.0), &c, TOLERANCE);
        assert_eq!(hits.len(), 2);
        assert_abs_diff_eq!(hits[0].x, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hits[1].x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn segment_tangent_to_circle() {
        let c = Circle::new(Point2::origin(), 1.0).unwrap();
        let hits = segment_circle_intersect_2d(&seg(-1.0, 1.0, 1.0, 1.0), &c, TOLERANCE);
        assert_eq!(hits.len(), 1);
        assert_abs_diff_eq!(hits[0].x, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn segment_inside_circle_misses() {
        let c = Circle::new(Point2::origin(), 5.0).unwrap();
        assert!(segment_circle_intersect_2d(&seg(-1.0, 0.0, 1.0, 0.0), &c, TOLERANCE).is_empty());
    }

    // ── interval ──

    #[test]
    fn interval_intersection() {
        let a = Interval::new(3.0, 1.0);
        assert_eq!(a, Interval { min: 1.0, max: 3.0 });
        let shared = a.intersection(&Interval::new(2.0, 5.0), TOLERANCE).unwrap();
        assert_abs_diff_eq!(shared.length(), 1.0);
        assert!(a.intersection(&Interval::new(4.0, 5.0), TOLERANCE).is_none());
        let touch = a.intersection(&Interval::new(3.0, 4.0), TOLERANCE).unwrap();
        assert_abs_diff_eq!(touch.length(), 0.0);
    }
}
