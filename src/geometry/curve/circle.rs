use crate::error::{GeometryError, Result};
use crate::math::arc_2d::point_at_degrees;
use crate::math::Point2;

use super::Arc;

/// A full circle in the XY plane.
///
/// Uses the same angle convention as [`Arc`]: degrees counter-clockwise from +X.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is negative or not finite.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "radius",
                value: radius,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Point on the circle at `angle` degrees.
    #[must_use]
    pub fn point_at_angle(&self, angle: f64) -> Point2 {
        point_at_degrees(&self.center, self.radius, angle)
    }

    /// Checks whether `point` lies inside or on the circle.
    #[must_use]
    pub fn contains(&self, point: &Point2, eps: f64) -> bool {
        (point - self.center).norm() <= self.radius + eps
    }

    /// Converts the circle to a full counter-clockwise arc starting at `start` degrees.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is not finite.
    pub fn to_arc(&self, start: f64) -> Result<Arc> {
        Arc::new(self.center, self.radius, start, start + 360.0)
    }
}
