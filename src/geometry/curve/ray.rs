use crate::math::{Point2, Vector2};

/// A half-infinite line: `P(t) = origin + t * direction` for `t >= 0`.
///
/// The direction is not normalized; queries are invariant to its magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point2,
    pub direction: Vector2,
}

impl Ray {
    /// Creates a new ray.
    #[must_use]
    pub fn new(origin: Point2, direction: Vector2) -> Self {
        Self { origin, direction }
    }

    /// Evaluates the ray at parameter `t` (in units of `direction`).
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.origin + self.direction * t
    }

    /// Scalar projection of `point - origin` onto the ray direction,
    /// scaled by the direction length. Used to order hits along the ray.
    #[must_use]
    pub fn project(&self, point: &Point2) -> f64 {
        (point - self.origin).dot(&self.direction)
    }
}
