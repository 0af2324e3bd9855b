use crate::math::{Point2, Vector2};

/// A bounded line segment from `p0` to `p1`.
///
/// The parametric form is `P(t) = p0 + t * (p1 - p0)` with `t` in `[0, 1]`.
/// A segment whose endpoints coincide is degenerate but still valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub p0: Point2,
    pub p1: Point2,
}

impl Segment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(p0: Point2, p1: Point2) -> Self {
        Self { p0, p1 }
    }

    /// Creates a segment from raw coordinates.
    #[must_use]
    pub fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    /// Returns the (non-normalized) direction `p1 - p0`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.p1 - self.p0
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// Returns whether the segment is shorter than `eps`.
    #[must_use]
    pub fn is_degenerate(&self, eps: f64) -> bool {
        self.length() < eps
    }

    /// Evaluates the segment at parameter `t`. Values outside `[0, 1]` extrapolate.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.p0 + self.direction() * t
    }

    /// Returns the midpoint.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        self.point_at(0.5)
    }

    /// Returns the same segment traversed from `p1` to `p0`.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.p1, self.p0)
    }
}
